//! Type 2 charstring interpreter.
//!
//! Refer to [Technical Note #5177](https://adobe-type-tools.github.io/font-tech-notes/pdfs/5177.Type2.pdf)
//! for more information.

use std::convert::TryFrom;
use std::fmt;

use log::warn;

use crate::binary::read::ReadScope;
use crate::error::ParseError;

use super::encoding::standard_encoding_sid;
use super::token::{esc, read_token, Context, StackEffect, Token};
use super::{Font, Index, SubroutineSet};

mod argstack;

pub use argstack::ArgumentsStack;

// Limits according to the Adobe Technical Note #5177 Appendix B.
pub const STACK_LIMIT: u8 = 10;
pub const MAX_ARGUMENTS_STACK_LEN: usize = 48;

pub(crate) trait IsEven {
    fn is_even(&self) -> bool;
    fn is_odd(&self) -> bool;
}

/// Just like TryFrom<N>, but for numeric types not supported by the Rust's std.
pub(crate) trait TryNumFrom<T>: Sized {
    /// Casts between numeric types.
    fn try_num_from(_: T) -> Option<Self>;
}

/// A list of errors that can occur when interpreting CFF CharStrings.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum GlyphError {
    ParseError(ParseError),
    /// There is no glyph with this name, and no `.notdef` to use instead.
    MissingGlyph(String),
    StackUnderflow,
    InvalidOperator,
    UnsupportedOperator,
    MissingEndChar,
    DataAfterEndChar,
    ZeroLengthCharString,
    NestingLimitReached,
    ArgumentsStackLimitReached,
    InvalidArgumentsStackLength,
    BboxOverflow,
    MissingMoveTo,
    InvalidSubroutineIndex,
    NoLocalSubroutines,
    InvalidSeacCode,
}

/// Operators defined in Adobe Technical Note #5177, The Type 2 Charstring Format.
///
/// Two byte operators `12 b` have the id `esc(b)`.
pub mod operator {
    use super::esc;

    pub const HORIZONTAL_STEM: u16 = 1;
    pub const VERTICAL_STEM: u16 = 3;
    pub const VERTICAL_MOVE_TO: u16 = 4;
    pub const LINE_TO: u16 = 5;
    pub const HORIZONTAL_LINE_TO: u16 = 6;
    pub const VERTICAL_LINE_TO: u16 = 7;
    pub const CURVE_TO: u16 = 8;
    pub const CALL_LOCAL_SUBROUTINE: u16 = 10;
    pub const RETURN: u16 = 11;
    pub const ENDCHAR: u16 = 14;
    pub const HORIZONTAL_STEM_HINT_MASK: u16 = 18;
    pub const HINT_MASK: u16 = 19;
    pub const COUNTER_MASK: u16 = 20;
    pub const MOVE_TO: u16 = 21;
    pub const HORIZONTAL_MOVE_TO: u16 = 22;
    pub const VERTICAL_STEM_HINT_MASK: u16 = 23;
    pub const CURVE_LINE: u16 = 24;
    pub const LINE_CURVE: u16 = 25;
    pub const VV_CURVE_TO: u16 = 26;
    pub const HH_CURVE_TO: u16 = 27;
    pub const CALL_GLOBAL_SUBROUTINE: u16 = 29;
    pub const VH_CURVE_TO: u16 = 30;
    pub const HV_CURVE_TO: u16 = 31;
    pub const AND: u16 = esc(3);
    pub const OR: u16 = esc(4);
    pub const NOT: u16 = esc(5);
    pub const ABS: u16 = esc(9);
    pub const ADD: u16 = esc(10);
    pub const SUB: u16 = esc(11);
    pub const DIV: u16 = esc(12);
    pub const NEG: u16 = esc(14);
    pub const EQ: u16 = esc(15);
    pub const DROP: u16 = esc(18);
    pub const PUT: u16 = esc(20);
    pub const GET: u16 = esc(21);
    pub const IF_ELSE: u16 = esc(22);
    pub const RANDOM: u16 = esc(23);
    pub const MUL: u16 = esc(24);
    pub const SQRT: u16 = esc(26);
    pub const DUP: u16 = esc(27);
    pub const EXCH: u16 = esc(28);
    pub const INDEX: u16 = esc(29);
    pub const ROLL: u16 = esc(30);
    pub const HFLEX: u16 = esc(34);
    pub const FLEX: u16 = esc(35);
    pub const HFLEX1: u16 = esc(36);
    pub const FLEX1: u16 = esc(37);
}

/// The operators of a Type 2 charstring.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CharStringOperator {
    HorizontalStem,
    VerticalStem,
    VerticalMoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CurveTo,
    CallLocalSubroutine,
    Return,
    Endchar,
    HorizontalStemHintMask,
    HintMask,
    CounterMask,
    MoveTo,
    HorizontalMoveTo,
    VerticalStemHintMask,
    CurveLine,
    LineCurve,
    VvCurveTo,
    HhCurveTo,
    CallGlobalSubroutine,
    VhCurveTo,
    HvCurveTo,
    Hflex,
    Flex,
    Hflex1,
    Flex1,
    /// One of the arithmetic, storage, and conditional operators.
    Arithmetic(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SubroutineIndex {
    Local(usize),
    Global(usize),
}

/// The components of an accented character composed by `endchar`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SeacChar {
    Base,
    Accent,
}

/// Receives the operators of a charstring as it is interpreted.
///
/// Subroutine calls are followed by the interpreter, so visitors only see drawing and hinting
/// operators along with `return` and `endchar`. The operands of each operator, less any
/// advance width, are in `stack`.
pub trait CharStringVisitor {
    fn visit(&mut self, _op: CharStringOperator, _stack: &ArgumentsStack) -> Result<(), GlyphError> {
        Ok(())
    }

    fn enter_subr(&mut self, _index: SubroutineIndex) -> Result<(), GlyphError> {
        Ok(())
    }

    fn exit_subr(&mut self) -> Result<(), GlyphError> {
        Ok(())
    }

    fn enter_seac(&mut self, _seac: SeacChar, _dx: f32, _dy: f32) -> Result<(), GlyphError> {
        Ok(())
    }

    fn exit_seac(&mut self, _seac: SeacChar) -> Result<(), GlyphError> {
        Ok(())
    }

    /// Called with the mask bytes that follow `hintmask` and `cntrmask`.
    fn hint_data(&mut self, _op: CharStringOperator, _hints: &[u8]) -> Result<(), GlyphError> {
        Ok(())
    }
}

/// A visitor that ignores the charstring, used when only the advance width is required.
pub struct NullVisitor;

impl CharStringVisitor for NullVisitor {}

/// Interpreter state for a single glyph.
pub struct CharStringVisitorContext<'a, 'data> {
    font: &'a Font<'data>,
    glyph_id: u16,
    subroutines: SubroutineSet<'data>,
    stack: ArgumentsStack,
    default_width_x: f32,
    nominal_width_x: f32,
    width: f32,
    width_parsed: bool,
    stems_len: usize,
    has_endchar: bool,
}

impl<'a, 'data> CharStringVisitorContext<'a, 'data> {
    pub fn new(font: &'a Font<'data>, glyph_id: u16) -> CharStringVisitorContext<'a, 'data> {
        let default_width_x = font.default_width_x(glyph_id) as f32;
        CharStringVisitorContext {
            font,
            glyph_id,
            subroutines: font.subroutines(glyph_id),
            stack: ArgumentsStack::new(),
            default_width_x,
            nominal_width_x: font.nominal_width_x(glyph_id) as f32,
            width: default_width_x,
            width_parsed: false,
            stems_len: 0,
            has_endchar: false,
        }
    }

    /// Interpret the charstring of the glyph, passing its operators to `visitor`.
    pub fn run<V: CharStringVisitor>(&mut self, visitor: &mut V) -> Result<(), GlyphError> {
        let char_string = self
            .font
            .char_string(self.glyph_id)
            .ok_or_else(|| GlyphError::MissingGlyph(format!("glyph {}", self.glyph_id)))?;
        if char_string.is_empty() {
            return Err(GlyphError::ZeroLengthCharString);
        }

        self.visit(char_string, 0, visitor)?;
        if !self.has_endchar {
            return Err(GlyphError::MissingEndChar);
        }

        Ok(())
    }

    /// The advance width of the glyph.
    ///
    /// This is `defaultWidthX` until the charstring has supplied a width.
    pub fn width(&self) -> f32 {
        self.width
    }

    fn visit<V: CharStringVisitor>(
        &mut self,
        char_string: &[u8],
        depth: u8,
        visitor: &mut V,
    ) -> Result<(), GlyphError> {
        use CharStringOperator::*;

        let mut s = ReadScope::new(char_string).ctxt();
        while s.bytes_available() {
            let id = match read_token(&mut s, Context::CharString)? {
                Token::Operator(id) => id,
                Token::Integer(n) => {
                    self.stack.push(n as f32)?;
                    continue;
                }
                Token::Fixed(n) => {
                    self.stack.push(n)?;
                    continue;
                }
                // Reals only occur in DICT data
                Token::Real(_) => return Err(GlyphError::InvalidOperator),
            };
            let op = CharStringOperator::try_from(id).map_err(|_| {
                warn!("invalid charstring operator {} in glyph {}", id, self.glyph_id);
                GlyphError::InvalidOperator
            })?;

            if !matches!(op, CallLocalSubroutine | CallGlobalSubroutine | Return) {
                self.parse_width(op)?;
            }

            match op {
                HorizontalStem | VerticalStem | HorizontalStemHintMask | VerticalStemHintMask => {
                    self.add_stems()?;
                    // We are ignoring the hint operators.
                    visitor.visit(op, &self.stack)?;
                    self.stack.clear();
                }
                HintMask | CounterMask => {
                    // Operands are an implied vstemhm
                    self.add_stems()?;
                    visitor.visit(op, &self.stack)?;
                    self.stack.clear();

                    let hints = s
                        .read_slice((self.stems_len + 7) >> 3)
                        .map_err(ParseError::from)?;
                    visitor.hint_data(op, hints)?;
                }
                MoveTo | HorizontalMoveTo | VerticalMoveTo | LineTo | HorizontalLineTo
                | VerticalLineTo | CurveTo | CurveLine | LineCurve | VvCurveTo | HhCurveTo
                | VhCurveTo | HvCurveTo | Hflex | Flex | Hflex1 | Flex1 => {
                    visitor.visit(op, &self.stack)?;
                    self.stack.clear();
                }
                CallLocalSubroutine | CallGlobalSubroutine => {
                    let (subrs, local) = match op {
                        CallLocalSubroutine => (
                            self.subroutines
                                .local
                                .ok_or(GlyphError::NoLocalSubroutines)?,
                            true,
                        ),
                        _ => (self.subroutines.global, false),
                    };
                    self.call_subroutine(subrs, local, depth, visitor)?;

                    if self.has_endchar {
                        if s.bytes_available() {
                            return Err(GlyphError::DataAfterEndChar);
                        }

                        break;
                    }
                }
                Return => {
                    visitor.visit(op, &self.stack)?;
                    break;
                }
                Endchar => {
                    if self.stack.len() == 4 {
                        self.seac(depth, visitor)?;
                    } else if !self.stack.is_empty() {
                        return Err(GlyphError::InvalidArgumentsStackLength);
                    }

                    if s.bytes_available() {
                        return Err(GlyphError::DataAfterEndChar);
                    }

                    self.has_endchar = true;
                    visitor.visit(op, &self.stack)?;
                    break;
                }
                Arithmetic(_) => {
                    warn!("unsupported charstring operator {} in glyph {}", op, self.glyph_id);
                    return Err(GlyphError::UnsupportedOperator);
                }
            }
        }

        Ok(())
    }

    /// Take the advance width from the stack if the first stack clearing operator carries one.
    fn parse_width(&mut self, op: CharStringOperator) -> Result<(), GlyphError> {
        use CharStringOperator::*;

        if self.width_parsed {
            return Ok(());
        }
        self.width_parsed = true;

        let len = self.stack.len();
        let has_width = match op {
            HorizontalStem | VerticalStem | HorizontalStemHintMask | VerticalStemHintMask
            | HintMask | CounterMask => len.is_odd(),
            HorizontalMoveTo | VerticalMoveTo => len > 1,
            MoveTo => len > 2,
            Endchar => len == 1 || len == 5,
            _ => false,
        };
        if has_width {
            self.width = self.nominal_width_x + self.stack.shift()?;
        }

        Ok(())
    }

    fn add_stems(&mut self) -> Result<(), GlyphError> {
        if self.stack.len().is_odd() {
            return Err(GlyphError::InvalidArgumentsStackLength);
        }

        self.stems_len += self.stack.len() >> 1;
        Ok(())
    }

    fn call_subroutine<V: CharStringVisitor>(
        &mut self,
        subrs: Index<'data>,
        local: bool,
        depth: u8,
        visitor: &mut V,
    ) -> Result<(), GlyphError> {
        if depth == STACK_LIMIT {
            return Err(GlyphError::NestingLimitReached);
        }

        let subroutine_bias = calc_subroutine_bias(subrs.count);
        let index = conv_subroutine_index(self.stack.pop()?, subroutine_bias)?;
        let char_string = subrs
            .read_object(index)
            .ok_or(GlyphError::InvalidSubroutineIndex)?;

        visitor.enter_subr(if local {
            SubroutineIndex::Local(index)
        } else {
            SubroutineIndex::Global(index)
        })?;
        self.visit(char_string, depth + 1, visitor)?;
        visitor.exit_subr()
    }

    /// Compose an accented character from two glyphs of the Standard encoding.
    ///
    /// The stack holds `adx ady bchar achar`.
    fn seac<V: CharStringVisitor>(&mut self, depth: u8, visitor: &mut V) -> Result<(), GlyphError> {
        let dx = self.stack.shift()?;
        let dy = self.stack.shift()?;
        let base_char = self.stack.shift()?;
        let base_char = self.seac_glyph_id(base_char)?;
        let accent_char = self.stack.shift()?;
        let accent_char = self.seac_glyph_id(accent_char)?;
        let width = self.width;

        visitor.enter_seac(SeacChar::Base, dx, dy)?;
        self.visit_seac_char(base_char, depth, visitor)?;
        visitor.exit_seac(SeacChar::Base)?;

        visitor.enter_seac(SeacChar::Accent, dx, dy)?;
        self.visit_seac_char(accent_char, depth, visitor)?;
        visitor.exit_seac(SeacChar::Accent)?;

        self.width = width;
        self.width_parsed = true;
        self.stack.clear();
        Ok(())
    }

    fn seac_glyph_id(&self, code: f32) -> Result<u16, GlyphError> {
        u8::try_num_from(code)
            .and_then(standard_encoding_sid)
            .and_then(|sid| self.font.charset.sid_to_gid(sid))
            .ok_or_else(|| {
                warn!(
                    "unable to compose glyph {}: no glyph for code {}",
                    self.glyph_id, code
                );
                GlyphError::InvalidSeacCode
            })
    }

    fn visit_seac_char<V: CharStringVisitor>(
        &mut self,
        glyph_id: u16,
        depth: u8,
        visitor: &mut V,
    ) -> Result<(), GlyphError> {
        if depth == STACK_LIMIT {
            return Err(GlyphError::NestingLimitReached);
        }

        let char_string = self
            .font
            .char_string(glyph_id)
            .ok_or(GlyphError::InvalidSeacCode)?;

        // Each component is a complete charstring with its own width and hints
        self.width_parsed = false;
        self.has_endchar = false;
        self.stems_len = 0;
        self.visit(char_string, depth + 1, visitor)?;
        if !self.has_endchar {
            return Err(GlyphError::MissingEndChar);
        }

        Ok(())
    }
}

impl CharStringOperator {
    /// The name of the operator in Technical Note #5177.
    pub fn name(self) -> &'static str {
        use CharStringOperator::*;

        match self {
            HorizontalStem => "hstem",
            VerticalStem => "vstem",
            VerticalMoveTo => "vmoveto",
            LineTo => "rlineto",
            HorizontalLineTo => "hlineto",
            VerticalLineTo => "vlineto",
            CurveTo => "rrcurveto",
            CallLocalSubroutine => "callsubr",
            Return => "return",
            Endchar => "endchar",
            HorizontalStemHintMask => "hstemhm",
            HintMask => "hintmask",
            CounterMask => "cntrmask",
            MoveTo => "rmoveto",
            HorizontalMoveTo => "hmoveto",
            VerticalStemHintMask => "vstemhm",
            CurveLine => "rcurveline",
            LineCurve => "rlinecurve",
            VvCurveTo => "vvcurveto",
            HhCurveTo => "hhcurveto",
            CallGlobalSubroutine => "callgsubr",
            VhCurveTo => "vhcurveto",
            HvCurveTo => "hvcurveto",
            Hflex => "hflex",
            Flex => "flex",
            Hflex1 => "hflex1",
            Flex1 => "flex1",
            Arithmetic(id) => match id {
                operator::AND => "and",
                operator::OR => "or",
                operator::NOT => "not",
                operator::ABS => "abs",
                operator::ADD => "add",
                operator::SUB => "sub",
                operator::DIV => "div",
                operator::NEG => "neg",
                operator::EQ => "eq",
                operator::DROP => "drop",
                operator::PUT => "put",
                operator::GET => "get",
                operator::IF_ELSE => "ifelse",
                operator::RANDOM => "random",
                operator::MUL => "mul",
                operator::SQRT => "sqrt",
                operator::DUP => "dup",
                operator::EXCH => "exch",
                operator::INDEX => "index",
                _ => "roll",
            },
        }
    }

    /// How the operator consumes its operands.
    pub fn stack_effect(self) -> StackEffect {
        use CharStringOperator::*;

        match self {
            CallLocalSubroutine | CallGlobalSubroutine => StackEffect::Exact(1),
            Return => StackEffect::Exact(0),
            HintMask | CounterMask => StackEffect::Clear,
            Hflex => StackEffect::Exact(7),
            Hflex1 => StackEffect::Exact(9),
            Flex1 => StackEffect::Exact(11),
            Flex => StackEffect::Exact(13),
            Arithmetic(id) => match id {
                operator::RANDOM => StackEffect::Exact(0),
                operator::NOT
                | operator::ABS
                | operator::NEG
                | operator::DROP
                | operator::GET
                | operator::SQRT
                | operator::DUP => StackEffect::Exact(1),
                operator::IF_ELSE => StackEffect::Exact(4),
                operator::INDEX | operator::ROLL => StackEffect::Variable,
                _ => StackEffect::Exact(2),
            },
            _ => StackEffect::Variable,
        }
    }
}

impl TryFrom<u16> for CharStringOperator {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        use CharStringOperator::*;

        let op = match value {
            operator::HORIZONTAL_STEM => HorizontalStem,
            operator::VERTICAL_STEM => VerticalStem,
            operator::VERTICAL_MOVE_TO => VerticalMoveTo,
            operator::LINE_TO => LineTo,
            operator::HORIZONTAL_LINE_TO => HorizontalLineTo,
            operator::VERTICAL_LINE_TO => VerticalLineTo,
            operator::CURVE_TO => CurveTo,
            operator::CALL_LOCAL_SUBROUTINE => CallLocalSubroutine,
            operator::RETURN => Return,
            operator::ENDCHAR => Endchar,
            operator::HORIZONTAL_STEM_HINT_MASK => HorizontalStemHintMask,
            operator::HINT_MASK => HintMask,
            operator::COUNTER_MASK => CounterMask,
            operator::MOVE_TO => MoveTo,
            operator::HORIZONTAL_MOVE_TO => HorizontalMoveTo,
            operator::VERTICAL_STEM_HINT_MASK => VerticalStemHintMask,
            operator::CURVE_LINE => CurveLine,
            operator::LINE_CURVE => LineCurve,
            operator::VV_CURVE_TO => VvCurveTo,
            operator::HH_CURVE_TO => HhCurveTo,
            operator::CALL_GLOBAL_SUBROUTINE => CallGlobalSubroutine,
            operator::VH_CURVE_TO => VhCurveTo,
            operator::HV_CURVE_TO => HvCurveTo,
            operator::HFLEX => Hflex,
            operator::FLEX => Flex,
            operator::HFLEX1 => Hflex1,
            operator::FLEX1 => Flex1,
            operator::AND..=operator::NOT
            | operator::ABS..=operator::DIV
            | operator::NEG
            | operator::EQ
            | operator::DROP
            | operator::PUT..=operator::MUL
            | operator::SQRT..=operator::ROLL => Arithmetic(value),
            _ => return Err(ParseError::BadValue),
        };
        Ok(op)
    }
}

impl fmt::Display for CharStringOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Conversions from biased subr index operands to unbiased value
pub(crate) fn conv_subroutine_index(index: f32, bias: u16) -> Result<usize, GlyphError> {
    let index = i32::try_num_from(index).ok_or(GlyphError::InvalidSubroutineIndex)?;
    conv_subroutine_index_impl(index, bias).ok_or(GlyphError::InvalidSubroutineIndex)
}

pub(crate) fn conv_subroutine_index_impl(index: i32, bias: u16) -> Option<usize> {
    let bias = i32::from(bias);

    let index = index.checked_add(bias)?;
    usize::try_from(index).ok()
}

/// The bias added to subroutine numbers in a subroutine INDEX holding `len` subroutines.
// Adobe Technical Note #5176, Chapter 16 "Local / Global Subrs INDEXes"
pub fn calc_subroutine_bias(len: usize) -> u16 {
    if len < 1240 {
        107
    } else if len < 33900 {
        1131
    } else {
        32768
    }
}

impl IsEven for usize {
    fn is_even(&self) -> bool {
        (*self) & 1 == 0
    }

    fn is_odd(&self) -> bool {
        !self.is_even()
    }
}

impl TryNumFrom<f32> for u8 {
    fn try_num_from(v: f32) -> Option<Self> {
        i32::try_num_from(v).and_then(|v| u8::try_from(v).ok())
    }
}

impl TryNumFrom<f32> for i16 {
    fn try_num_from(v: f32) -> Option<Self> {
        i32::try_num_from(v).and_then(|v| i16::try_from(v).ok())
    }
}

impl TryNumFrom<f32> for i32 {
    fn try_num_from(v: f32) -> Option<Self> {
        // Based on https://github.com/rust-num/num-traits/blob/master/src/cast.rs

        // Float as int truncates toward zero, so we want to allow values
        // in the exclusive range `(MIN-1, MAX+1)`.

        // We can't represent `MIN-1` exactly, but there's no fractional part
        // at this magnitude, so we can just use a `MIN` inclusive boundary.
        const MIN: f32 = i32::MIN as f32;
        // We can't represent `MAX` exactly, but it will round up to exactly
        // `MAX+1` (a power of two) when we cast it.
        const MAX_P1: f32 = i32::MAX as f32;
        if v >= MIN && v < MAX_P1 {
            Some(v as i32)
        } else {
            None
        }
    }
}

impl From<ParseError> for GlyphError {
    fn from(error: ParseError) -> GlyphError {
        GlyphError::ParseError(error)
    }
}

impl fmt::Display for GlyphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlyphError::ParseError(parse_error) => {
                write!(f, "parse error: ")?;
                parse_error.fmt(f)
            }
            GlyphError::MissingGlyph(name) => write!(f, "glyph '{}' not found", name),
            GlyphError::StackUnderflow => write!(f, "arguments stack underflow"),
            GlyphError::InvalidOperator => write!(f, "an invalid operator occurred"),
            GlyphError::UnsupportedOperator => write!(f, "an unsupported operator occurred"),
            GlyphError::MissingEndChar => write!(f, "the 'endchar' operator is missing"),
            GlyphError::DataAfterEndChar => write!(f, "unused data left after 'endchar' operator"),
            GlyphError::ZeroLengthCharString => write!(f, "zero length charstring"),
            GlyphError::NestingLimitReached => write!(f, "subroutines nesting limit reached"),
            GlyphError::ArgumentsStackLimitReached => write!(f, "arguments stack limit reached"),
            GlyphError::InvalidArgumentsStackLength => {
                write!(f, "an invalid amount of items are in an arguments stack")
            }
            GlyphError::BboxOverflow => write!(f, "outline's bounding box is too large"),
            GlyphError::MissingMoveTo => write!(f, "missing moveto operator"),
            GlyphError::InvalidSubroutineIndex => write!(f, "an invalid subroutine index"),
            GlyphError::NoLocalSubroutines => write!(f, "no local subroutines"),
            GlyphError::InvalidSeacCode => write!(f, "invalid seac code"),
        }
    }
}

impl std::error::Error for GlyphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GlyphError::ParseError(error) => Some(error),
            _ => None,
        }
    }
}
