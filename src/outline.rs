//! Access glyphs outlines. Requires the `outline` cargo feature (enabled by default).
//!
//! Outlines are delivered as a series of drawing callbacks on implementors of the `OutlineSink`
//! trait. `Outline` is a sink that records the commands, and is what `Font::generate_glyph`
//! returns inside a `Glyph`.
//!
//! ### Example
//!
//! This example visits the outline of a glyph and accumulates the drawing operations into a
//! `String`. In a real application you'd probably make calls to a graphics library instead.
//!
//! ```
//! use std::fmt::Write;
//!
//! use compact_font::cff::CFF;
//! use compact_font::outline::OutlineSink;
//! use compact_font::pathfinder_geometry::line_segment::LineSegment2F;
//! use compact_font::pathfinder_geometry::vector::Vector2F;
//!
//! struct DebugVisitor {
//!     outlines: String,
//! }
//!
//! impl OutlineSink for DebugVisitor {
//!     fn move_to(&mut self, to: Vector2F) {
//!         writeln!(&mut self.outlines, "move_to({}, {})", to.x(), to.y()).unwrap();
//!     }
//!
//!     fn line_to(&mut self, to: Vector2F) {
//!         writeln!(&mut self.outlines, "line_to({}, {})", to.x(), to.y()).unwrap();
//!     }
//!
//!     fn quadratic_curve_to(&mut self, control: Vector2F, to: Vector2F) {
//!         writeln!(
//!             &mut self.outlines,
//!             "quad_to({}, {}, {}, {})",
//!             control.x(),
//!             control.y(),
//!             to.x(),
//!             to.y()
//!         )
//!         .unwrap();
//!     }
//!
//!     fn cubic_curve_to(&mut self, control: LineSegment2F, to: Vector2F) {
//!         writeln!(
//!             &mut self.outlines,
//!             "curve_to({}, {}, {}, {}, {}, {})",
//!             control.from_x(),
//!             control.from_y(),
//!             control.to_x(),
//!             control.to_y(),
//!             to.x(),
//!             to.y()
//!         )
//!         .unwrap();
//!     }
//!
//!     fn close(&mut self) {
//!         writeln!(&mut self.outlines, "close()").unwrap();
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // A font named "A" with a single glyph:
//!     // 10 20 rmoveto 30 hlineto 40 vlineto endchar
//!     let data = [
//!         1, 0, 4, 1, // header
//!         0, 1, 1, 1, 2, b'A', // name INDEX
//!         0, 1, 1, 1, 7, 29, 0, 0, 0, 25, 17, // top DICT INDEX, CharStrings at 25
//!         0, 0, // string INDEX
//!         0, 0, // global subr INDEX
//!         0, 1, 1, 1, 9, 149, 159, 21, 169, 6, 179, 7, 14, // CharStrings INDEX
//!     ];
//!     let cff = CFF::parse(&data)?;
//!     let font = cff.first_font().ok_or("no font")?;
//!
//!     let mut sink = DebugVisitor {
//!         outlines: String::new(),
//!     };
//!     font.visit(0, &mut sink)?;
//!
//!     let expected = "move_to(10, 20)
//! line_to(40, 20)
//! line_to(40, 60)
//! close()
//! ";
//!     assert_eq!(sink.outlines, expected);
//!     Ok(())
//! }
//! ```

use pathfinder_geometry::line_segment::LineSegment2F;
use pathfinder_geometry::rect::RectI;
use pathfinder_geometry::transform2d::Transform2F;
use pathfinder_geometry::vector::Vector2F;

/// Trait for visiting a glyph outline and delivering drawing commands to an `OutlineSink`.
pub trait OutlineBuilder {
    type Error: std::error::Error;

    /// Visit the glyph outlines in `self`.
    fn visit<S: OutlineSink>(&mut self, glyph_index: u16, sink: &mut S) -> Result<(), Self::Error>;
}

// `OutlineSink` is from font-kit, font-kit/src/outline.rs:
//
// Copyright © 2020 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// A trait for visiting a glyph outline
pub trait OutlineSink {
    /// Moves the pen to a point.
    fn move_to(&mut self, to: Vector2F);
    /// Draws a line to a point.
    fn line_to(&mut self, to: Vector2F);
    /// Draws a quadratic Bézier curve to a point.
    fn quadratic_curve_to(&mut self, ctrl: Vector2F, to: Vector2F);
    /// Draws a cubic Bézier curve to a point.
    fn cubic_curve_to(&mut self, ctrl: LineSegment2F, to: Vector2F);
    /// Closes the path, returning to the first point in it.
    fn close(&mut self);
}

pub(crate) struct NullSink;

impl OutlineSink for NullSink {
    fn move_to(&mut self, _to: Vector2F) {}

    fn line_to(&mut self, _to: Vector2F) {}

    fn quadratic_curve_to(&mut self, _ctrl: Vector2F, _to: Vector2F) {}

    fn cubic_curve_to(&mut self, _ctrl: LineSegment2F, _to: Vector2F) {}

    fn close(&mut self) {}
}

/// A single drawing command of an `Outline`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Vector2F),
    LineTo(Vector2F),
    QuadraticCurveTo(Vector2F, Vector2F),
    CubicCurveTo(LineSegment2F, Vector2F),
    Close,
}

/// A recorded glyph outline in font design units.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Outline {
    pub commands: Vec<PathCommand>,
}

/// The outline and metrics of a glyph.
#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub outline: Outline,
    /// Advance width in font design units.
    pub width: f32,
    /// Bounds of the points of the outline, including off-curve points.
    pub bbox: RectI,
}

impl Outline {
    pub fn new() -> Self {
        Outline::default()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Replay the commands of this outline on `sink`.
    pub fn draw<S: OutlineSink>(&self, sink: &mut S) {
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(to) => sink.move_to(to),
                PathCommand::LineTo(to) => sink.line_to(to),
                PathCommand::QuadraticCurveTo(ctrl, to) => sink.quadratic_curve_to(ctrl, to),
                PathCommand::CubicCurveTo(ctrl, to) => sink.cubic_curve_to(ctrl, to),
                PathCommand::Close => sink.close(),
            }
        }
    }

    /// Returns a copy of this outline with every point mapped through `transform`.
    ///
    /// Use with `Font::font_transform` to convert from design units to text space.
    pub fn transform(&self, transform: &Transform2F) -> Outline {
        let commands = self
            .commands
            .iter()
            .map(|command| match *command {
                PathCommand::MoveTo(to) => PathCommand::MoveTo(*transform * to),
                PathCommand::LineTo(to) => PathCommand::LineTo(*transform * to),
                PathCommand::QuadraticCurveTo(ctrl, to) => {
                    PathCommand::QuadraticCurveTo(*transform * ctrl, *transform * to)
                }
                PathCommand::CubicCurveTo(ctrl, to) => {
                    PathCommand::CubicCurveTo(*transform * ctrl, *transform * to)
                }
                PathCommand::Close => PathCommand::Close,
            })
            .collect();
        Outline { commands }
    }
}

impl OutlineSink for Outline {
    fn move_to(&mut self, to: Vector2F) {
        self.commands.push(PathCommand::MoveTo(to));
    }

    fn line_to(&mut self, to: Vector2F) {
        self.commands.push(PathCommand::LineTo(to));
    }

    fn quadratic_curve_to(&mut self, ctrl: Vector2F, to: Vector2F) {
        self.commands.push(PathCommand::QuadraticCurveTo(ctrl, to));
    }

    fn cubic_curve_to(&mut self, ctrl: LineSegment2F, to: Vector2F) {
        self.commands.push(PathCommand::CubicCurveTo(ctrl, to));
    }

    fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }
}

#[cfg(test)]
mod tests {
    use pathfinder_geometry::vector::vec2f;

    use super::*;

    #[test]
    fn test_outline_replay() {
        let mut outline = Outline::new();
        outline.move_to(vec2f(0.0, 0.0));
        outline.line_to(vec2f(10.0, 0.0));
        outline.cubic_curve_to(
            LineSegment2F::new(vec2f(10.0, 5.0), vec2f(5.0, 10.0)),
            vec2f(0.0, 10.0),
        );
        outline.close();

        let mut copy = Outline::new();
        outline.draw(&mut copy);
        assert_eq!(copy, outline);
        assert_eq!(copy.commands.len(), 4);
    }

    #[test]
    fn test_outline_transform() {
        let mut outline = Outline::new();
        outline.move_to(vec2f(1000.0, 500.0));
        outline.close();

        let scaled = outline.transform(&Transform2F::from_scale(0.5));
        assert_eq!(
            scaled.commands,
            vec![PathCommand::MoveTo(vec2f(500.0, 250.0)), PathCommand::Close]
        );
    }
}
