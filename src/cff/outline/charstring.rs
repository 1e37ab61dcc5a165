// This file is derived from ttf-parser, licenced under Apache-2.0.
// https://github.com/RazrFalcon/ttf-parser/blob/439aaaebd50eb8aed66302e3c1b51fae047f85b2/src/tables/cff/charstring.rs

use crate::cff::charstring::{
    ArgumentsStack, CharStringOperator, CharStringVisitor, GlyphError, IsEven, SeacChar,
};
use crate::cff::outline::Builder;
use crate::outline::OutlineSink;

/// Turns the path operators of a charstring into drawing calls on a `Builder`.
///
/// The interpreter has already removed any advance width from the operands.
pub(crate) struct CharStringParser<'a, 'b, B>
where
    B: OutlineSink,
{
    pub builder: &'a mut Builder<'b, B>,
    pub x: f32,
    pub y: f32,
    // Used to track if a moveto operator has been encountered before other path building operators.
    // Adobe Technical Note #5177 - The Type 2 Charstring Format:
    // > Every character path and subpath must begin with one of the moveto operators. If the
    // > current path is open when a moveto operator is encountered, the path is closed before
    // > performing the moveto operation.
    pub has_move_to: bool,
    // Used to determine what point a moveto operator is relative to.
    // Adobe Technical Note #5177 - The Type 2 Charstring Format:
    // > For the initial moveto operators in a charstring, the arguments are relative to the (0, 0)
    // > point in the character’s coordinate system; subsequent moveto operators’ arguments are
    // > relative to the current point.
    pub is_first_move_to: bool,
}

impl<'a, 'b, B: OutlineSink> CharStringParser<'a, 'b, B> {
    pub fn new(builder: &'a mut Builder<'b, B>) -> Self {
        CharStringParser {
            builder,
            x: 0.0,
            y: 0.0,
            has_move_to: false,
            is_first_move_to: true,
        }
    }

    fn begin_move_to(&mut self) {
        if self.is_first_move_to {
            self.is_first_move_to = false;
        } else {
            self.builder.close();
        }

        self.has_move_to = true;
    }

    fn close_path(&mut self) {
        if !self.is_first_move_to {
            self.is_first_move_to = true;
            self.builder.close();
        }
    }

    fn check_move_to(&self) -> Result<(), GlyphError> {
        if self.has_move_to {
            Ok(())
        } else {
            Err(GlyphError::MissingMoveTo)
        }
    }

    fn parse_move_to(&mut self, stack: &ArgumentsStack) -> Result<(), GlyphError> {
        // dx1 dy1

        if stack.len() != 2 {
            return Err(GlyphError::InvalidArgumentsStackLength);
        }

        self.begin_move_to();
        self.x += stack.at(0);
        self.y += stack.at(1);
        self.builder.move_to(self.x, self.y);
        Ok(())
    }

    fn parse_horizontal_move_to(&mut self, stack: &ArgumentsStack) -> Result<(), GlyphError> {
        // dx1

        if stack.len() != 1 {
            return Err(GlyphError::InvalidArgumentsStackLength);
        }

        self.begin_move_to();
        self.x += stack.at(0);
        self.builder.move_to(self.x, self.y);
        Ok(())
    }

    fn parse_vertical_move_to(&mut self, stack: &ArgumentsStack) -> Result<(), GlyphError> {
        // dy1

        if stack.len() != 1 {
            return Err(GlyphError::InvalidArgumentsStackLength);
        }

        self.begin_move_to();
        self.y += stack.at(0);
        self.builder.move_to(self.x, self.y);
        Ok(())
    }

    fn parse_line_to(&mut self, stack: &ArgumentsStack) -> Result<(), GlyphError> {
        // {dxa dya}+

        self.check_move_to()?;
        if stack.is_empty() || stack.len().is_odd() {
            return Err(GlyphError::InvalidArgumentsStackLength);
        }

        for pair in stack.all().chunks_exact(2) {
            self.x += pair[0];
            self.y += pair[1];
            self.builder.line_to(self.x, self.y);
        }

        Ok(())
    }

    /// Lines that alternate between horizontal and vertical.
    ///
    /// `hlineto` starts with a horizontal line, `vlineto` with a vertical one.
    fn parse_alternating_line_to(
        &mut self,
        stack: &ArgumentsStack,
        mut horizontal: bool,
    ) -> Result<(), GlyphError> {
        // dx1 {dya dxb}*
        //     {dxa dyb}+

        self.check_move_to()?;
        if stack.is_empty() {
            return Err(GlyphError::InvalidArgumentsStackLength);
        }

        for &d in stack.all() {
            if horizontal {
                self.x += d;
            } else {
                self.y += d;
            }
            self.builder.line_to(self.x, self.y);
            horizontal = !horizontal;
        }

        Ok(())
    }

    fn parse_curve_to(&mut self, stack: &ArgumentsStack) -> Result<(), GlyphError> {
        // {dxa dya dxb dyb dxc dyc}+

        self.check_move_to()?;
        if stack.is_empty() || stack.len() % 6 != 0 {
            return Err(GlyphError::InvalidArgumentsStackLength);
        }

        for curve in stack.all().chunks_exact(6) {
            self.relative_curve_to(curve);
        }

        Ok(())
    }

    fn parse_curve_line(&mut self, stack: &ArgumentsStack) -> Result<(), GlyphError> {
        // {dxa dya dxb dyb dxc dyc}+ dxd dyd

        self.check_move_to()?;
        if stack.len() < 8 || (stack.len() - 2) % 6 != 0 {
            return Err(GlyphError::InvalidArgumentsStackLength);
        }

        let (curves, line) = stack.all().split_at(stack.len() - 2);
        for curve in curves.chunks_exact(6) {
            self.relative_curve_to(curve);
        }

        self.x += line[0];
        self.y += line[1];
        self.builder.line_to(self.x, self.y);
        Ok(())
    }

    fn parse_line_curve(&mut self, stack: &ArgumentsStack) -> Result<(), GlyphError> {
        // {dxa dya}+ dxb dyb dxc dyc dxd dyd

        self.check_move_to()?;
        if stack.len() < 8 || (stack.len() - 6).is_odd() {
            return Err(GlyphError::InvalidArgumentsStackLength);
        }

        let (lines, curve) = stack.all().split_at(stack.len() - 6);
        for pair in lines.chunks_exact(2) {
            self.x += pair[0];
            self.y += pair[1];
            self.builder.line_to(self.x, self.y);
        }

        self.relative_curve_to(curve);
        Ok(())
    }

    fn parse_hh_curve_to(&mut self, stack: &ArgumentsStack) -> Result<(), GlyphError> {
        // dy1? {dxa dxb dyb dxc}+

        self.check_move_to()?;

        let mut args = stack.all();
        // The odd argument count indicates an Y position.
        if args.len().is_odd() {
            self.y += args[0];
            args = &args[1..];
        }

        if args.is_empty() || args.len() % 4 != 0 {
            return Err(GlyphError::InvalidArgumentsStackLength);
        }

        for curve in args.chunks_exact(4) {
            let x1 = self.x + curve[0];
            let y1 = self.y;
            let x2 = x1 + curve[1];
            let y2 = y1 + curve[2];
            self.x = x2 + curve[3];
            self.y = y2;

            self.builder.curve_to(x1, y1, x2, y2, self.x, self.y);
        }

        Ok(())
    }

    fn parse_vv_curve_to(&mut self, stack: &ArgumentsStack) -> Result<(), GlyphError> {
        // dx1? {dya dxb dyb dyc}+

        self.check_move_to()?;

        let mut args = stack.all();
        // The odd argument count indicates an X position.
        if args.len().is_odd() {
            self.x += args[0];
            args = &args[1..];
        }

        if args.is_empty() || args.len() % 4 != 0 {
            return Err(GlyphError::InvalidArgumentsStackLength);
        }

        for curve in args.chunks_exact(4) {
            let x1 = self.x;
            let y1 = self.y + curve[0];
            let x2 = x1 + curve[1];
            let y2 = y1 + curve[2];
            self.x = x2;
            self.y = y2 + curve[3];

            self.builder.curve_to(x1, y1, x2, y2, self.x, self.y);
        }

        Ok(())
    }

    /// Curves whose tangents alternate between horizontal and vertical.
    ///
    /// `hvcurveto` starts with a horizontal tangent, `vhcurveto` with a vertical one.
    fn parse_alternating_curve_to(
        &mut self,
        stack: &ArgumentsStack,
        mut horizontal: bool,
    ) -> Result<(), GlyphError> {
        // dx1 dx2 dy2 dy3 {dya dxb dyb dxc dxd dxe dye dyf}* dxf?
        //                 {dxa dxb dyb dyc dyd dxe dye dxf}+ dyf?

        self.check_move_to()?;

        let mut args = stack.all();
        if args.len() < 4 {
            return Err(GlyphError::InvalidArgumentsStackLength);
        }

        while !args.is_empty() {
            if args.len() < 4 {
                return Err(GlyphError::InvalidArgumentsStackLength);
            }

            // The final curve may carry a fifth operand for its otherwise aligned end point
            let last = if args.len() == 5 { args[4] } else { 0.0 };
            if horizontal {
                let x1 = self.x + args[0];
                let y1 = self.y;
                let x2 = x1 + args[1];
                let y2 = y1 + args[2];
                self.y = y2 + args[3];
                self.x = x2 + last;
                self.builder.curve_to(x1, y1, x2, y2, self.x, self.y);
            } else {
                let x1 = self.x;
                let y1 = self.y + args[0];
                let x2 = x1 + args[1];
                let y2 = y1 + args[2];
                self.x = x2 + args[3];
                self.y = y2 + last;
                self.builder.curve_to(x1, y1, x2, y2, self.x, self.y);
            }

            let consumed = if args.len() == 5 { 5 } else { 4 };
            args = &args[consumed..];
            horizontal = !horizontal;
        }

        Ok(())
    }

    fn parse_flex(&mut self, stack: &ArgumentsStack) -> Result<(), GlyphError> {
        // dx1 dy1 dx2 dy2 dx3 dy3 dx4 dy4 dx5 dy5 dx6 dy6 fd

        self.check_move_to()?;
        if stack.len() != 13 {
            return Err(GlyphError::InvalidArgumentsStackLength);
        }

        // Flex depth `fd` is not needed to draw the curves
        let args = stack.all();
        self.relative_curve_to(&args[0..6]);
        self.relative_curve_to(&args[6..12]);
        Ok(())
    }

    fn parse_flex1(&mut self, stack: &ArgumentsStack) -> Result<(), GlyphError> {
        // dx1 dy1 dx2 dy2 dx3 dy3 dx4 dy4 dx5 dy5 d6

        self.check_move_to()?;
        if stack.len() != 11 {
            return Err(GlyphError::InvalidArgumentsStackLength);
        }

        let dx1 = self.x + stack.at(0);
        let dy1 = self.y + stack.at(1);
        let dx2 = dx1 + stack.at(2);
        let dy2 = dy1 + stack.at(3);
        let dx3 = dx2 + stack.at(4);
        let dy3 = dy2 + stack.at(5);
        let dx4 = dx3 + stack.at(6);
        let dy4 = dy3 + stack.at(7);
        let dx5 = dx4 + stack.at(8);
        let dy5 = dy4 + stack.at(9);

        // d6 moves along the axis with the larger total change, the other returns to the start
        if (dx5 - self.x).abs() > (dy5 - self.y).abs() {
            self.x = dx5 + stack.at(10);
        } else {
            self.y = dy5 + stack.at(10);
        }

        self.builder.curve_to(dx1, dy1, dx2, dy2, dx3, dy3);
        self.builder.curve_to(dx4, dy4, dx5, dy5, self.x, self.y);
        Ok(())
    }

    fn parse_hflex(&mut self, stack: &ArgumentsStack) -> Result<(), GlyphError> {
        // dx1 dx2 dy2 dx3 dx4 dx5 dx6

        self.check_move_to()?;
        if stack.len() != 7 {
            return Err(GlyphError::InvalidArgumentsStackLength);
        }

        let dx1 = self.x + stack.at(0);
        let dy1 = self.y;
        let dx2 = dx1 + stack.at(1);
        let dy2 = dy1 + stack.at(2);
        let dx3 = dx2 + stack.at(3);
        let dy3 = dy2;
        let dx4 = dx3 + stack.at(4);
        let dy4 = dy2;
        let dx5 = dx4 + stack.at(5);
        let dy5 = self.y;
        self.x = dx5 + stack.at(6);
        self.builder.curve_to(dx1, dy1, dx2, dy2, dx3, dy3);
        self.builder.curve_to(dx4, dy4, dx5, dy5, self.x, self.y);
        Ok(())
    }

    fn parse_hflex1(&mut self, stack: &ArgumentsStack) -> Result<(), GlyphError> {
        // dx1 dy1 dx2 dy2 dx3 dx4 dx5 dy5 dx6

        self.check_move_to()?;
        if stack.len() != 9 {
            return Err(GlyphError::InvalidArgumentsStackLength);
        }

        let dx1 = self.x + stack.at(0);
        let dy1 = self.y + stack.at(1);
        let dx2 = dx1 + stack.at(2);
        let dy2 = dy1 + stack.at(3);
        let dx3 = dx2 + stack.at(4);
        let dy3 = dy2;
        let dx4 = dx3 + stack.at(5);
        let dy4 = dy2;
        let dx5 = dx4 + stack.at(6);
        let dy5 = dy4 + stack.at(7);
        self.x = dx5 + stack.at(8);
        self.builder.curve_to(dx1, dy1, dx2, dy2, dx3, dy3);
        self.builder.curve_to(dx4, dy4, dx5, dy5, self.x, self.y);
        Ok(())
    }

    /// Draw a curve from six relative coordinates, `dxa dya dxb dyb dxc dyc`.
    fn relative_curve_to(&mut self, curve: &[f32]) {
        let x1 = self.x + curve[0];
        let y1 = self.y + curve[1];
        let x2 = x1 + curve[2];
        let y2 = y1 + curve[3];
        self.x = x2 + curve[4];
        self.y = y2 + curve[5];

        self.builder.curve_to(x1, y1, x2, y2, self.x, self.y);
    }
}

impl<B: OutlineSink> CharStringVisitor for CharStringParser<'_, '_, B> {
    fn visit(&mut self, op: CharStringOperator, stack: &ArgumentsStack) -> Result<(), GlyphError> {
        use CharStringOperator::*;

        match op {
            HorizontalStem
            | VerticalStem
            | HorizontalStemHintMask
            | VerticalStemHintMask
            | HintMask
            | CounterMask => {
                // We are ignoring the hint operators.
                Ok(())
            }
            MoveTo => self.parse_move_to(stack),
            HorizontalMoveTo => self.parse_horizontal_move_to(stack),
            VerticalMoveTo => self.parse_vertical_move_to(stack),
            LineTo => self.parse_line_to(stack),
            HorizontalLineTo => self.parse_alternating_line_to(stack, true),
            VerticalLineTo => self.parse_alternating_line_to(stack, false),
            CurveTo => self.parse_curve_to(stack),
            CurveLine => self.parse_curve_line(stack),
            LineCurve => self.parse_line_curve(stack),
            VvCurveTo => self.parse_vv_curve_to(stack),
            HhCurveTo => self.parse_hh_curve_to(stack),
            VhCurveTo => self.parse_alternating_curve_to(stack, false),
            HvCurveTo => self.parse_alternating_curve_to(stack, true),
            Hflex => self.parse_hflex(stack),
            Flex => self.parse_flex(stack),
            Hflex1 => self.parse_hflex1(stack),
            Flex1 => self.parse_flex1(stack),
            Endchar => {
                self.close_path();
                Ok(())
            }
            CallLocalSubroutine | CallGlobalSubroutine | Return => Ok(()),
            Arithmetic(_) => Err(GlyphError::UnsupportedOperator),
        }
    }

    fn enter_seac(&mut self, seac: SeacChar, dx: f32, dy: f32) -> Result<(), GlyphError> {
        // The base is drawn at the origin and the accent offset from it
        match seac {
            SeacChar::Base => {
                self.x = 0.0;
                self.y = 0.0;
            }
            SeacChar::Accent => {
                self.x = dx;
                self.y = dy;
            }
        }
        self.has_move_to = false;
        Ok(())
    }
}
