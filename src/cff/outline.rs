//! Glyph outline generation for CFF.

// Portions of this file derived from ttf-parser, licenced under Apache-2.0.
// https://github.com/RazrFalcon/ttf-parser/tree/439aaaebd50eb8aed66302e3c1b51fae047f85b2

use pathfinder_geometry::line_segment::LineSegment2F;
use pathfinder_geometry::rect::RectI;
use pathfinder_geometry::transform2d::Transform2F;
use pathfinder_geometry::vector::{vec2f, vec2i, Vector2I};

use charstring::CharStringParser;

use crate::outline::{Glyph, NullSink, Outline, OutlineBuilder, OutlineSink};

use super::charstring::{CharStringVisitorContext, GlyphError, TryNumFrom};
use super::Font;

mod charstring;

/// Forwards drawing calls to an `OutlineSink` while tracking the bounds of the points.
pub(crate) struct Builder<'a, B>
where
    B: OutlineSink,
{
    sink: &'a mut B,
    bbox: BBox,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct BBox {
    x_min: f32,
    y_min: f32,
    x_max: f32,
    y_max: f32,
}

/// Adapts a `Font` to the `OutlineBuilder` trait.
pub struct CFFOutlines<'a, 'data> {
    pub font: &'a Font<'data>,
}

impl BBox {
    fn new() -> Self {
        BBox {
            x_min: f32::MAX,
            y_min: f32::MAX,
            x_max: f32::MIN,
            y_max: f32::MIN,
        }
    }

    fn is_default(&self) -> bool {
        self.x_min == f32::MAX
            && self.y_min == f32::MAX
            && self.x_max == f32::MIN
            && self.y_max == f32::MIN
    }

    fn extend_by(&mut self, x: f32, y: f32) {
        self.x_min = self.x_min.min(x);
        self.y_min = self.y_min.min(y);
        self.x_max = self.x_max.max(x);
        self.y_max = self.y_max.max(y);
    }

    fn to_rect(self) -> Option<RectI> {
        Some(RectI::from_points(
            vec2i(
                i32::from(i16::try_num_from(self.x_min)?),
                i32::from(i16::try_num_from(self.y_min)?),
            ),
            vec2i(
                i32::from(i16::try_num_from(self.x_max)?),
                i32::from(i16::try_num_from(self.y_max)?),
            ),
        ))
    }
}

impl<B> Builder<'_, B>
where
    B: OutlineSink,
{
    fn move_to(&mut self, x: f32, y: f32) {
        self.bbox.extend_by(x, y);
        self.sink.move_to(vec2f(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.bbox.extend_by(x, y);
        self.sink.line_to(vec2f(x, y));
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.bbox.extend_by(x1, y1);
        self.bbox.extend_by(x2, y2);
        self.bbox.extend_by(x, y);
        let from = vec2f(x1, y1);
        let to = vec2f(x2, y2);
        self.sink
            .cubic_curve_to(LineSegment2F::new(from, to), vec2f(x, y))
    }

    fn close(&mut self) {
        self.sink.close();
    }
}

impl<'data> Font<'data> {
    /// Interpret the charstring of `glyph_id`, delivering its outline to `sink`.
    ///
    /// Returns the advance width and bounding box of the glyph. The bounding box of a glyph
    /// without any points is empty.
    pub fn visit<S: OutlineSink>(
        &self,
        glyph_id: u16,
        sink: &mut S,
    ) -> Result<(f32, RectI), GlyphError> {
        let mut builder = Builder {
            sink,
            bbox: BBox::new(),
        };
        let mut ctxt = CharStringVisitorContext::new(self, glyph_id);
        ctxt.run(&mut CharStringParser::new(&mut builder))?;

        let bbox = builder.bbox;
        // Check that bbox was changed.
        let rect = if bbox.is_default() {
            RectI::new(Vector2I::zero(), Vector2I::zero())
        } else {
            bbox.to_rect().ok_or(GlyphError::BboxOverflow)?
        };

        Ok((ctxt.width(), rect))
    }

    /// Generate the outline of the glyph named `name`.
    ///
    /// `.notdef` is used when the font has no glyph with that name.
    pub fn generate_glyph(&self, name: &str) -> Result<Glyph, GlyphError> {
        let glyph_id = self.glyph_id_or_notdef(name)?;
        self.generate_glyph_by_id(glyph_id)
    }

    pub fn generate_glyph_by_id(&self, glyph_id: u16) -> Result<Glyph, GlyphError> {
        let mut outline = Outline::new();
        let (width, bbox) = self.visit(glyph_id, &mut outline)?;
        Ok(Glyph {
            outline,
            width,
            bbox,
        })
    }

    pub fn bounding_box(&self, glyph_id: u16) -> Result<RectI, GlyphError> {
        self.visit(glyph_id, &mut NullSink).map(|(_width, bbox)| bbox)
    }

    /// The `FontMatrix` of the font as a transform from glyph space to text space.
    pub fn font_transform(&self) -> Transform2F {
        let [a, b, c, d, e, f] = self.font_matrix();
        Transform2F::row_major(a as f32, c as f32, e as f32, b as f32, d as f32, f as f32)
    }
}

impl OutlineBuilder for CFFOutlines<'_, '_> {
    type Error = GlyphError;

    fn visit<S: OutlineSink>(&mut self, glyph_index: u16, sink: &mut S) -> Result<(), Self::Error> {
        self.font.visit(glyph_index, sink).map(|_| ())
    }
}
