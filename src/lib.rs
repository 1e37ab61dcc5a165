#![warn(rust_2018_idioms)]

//! # Compact Font Format reader
//!
//! `compact_font` parses CFF font sets, as found in the `CFF ` table of OpenType fonts, and
//! interprets their Type 2 charstrings to produce glyph outlines and advance widths.
//!
//! Parse a font set with [`cff::CFF::parse`], look up a font by name, and generate its glyphs
//! with `Font::generate_glyph` (requires the `outline` feature, enabled by default).

/// Reading of binary data.
pub mod binary;
pub mod cff;
pub mod error;
#[cfg(feature = "outline")]
pub mod outline;
pub mod size;

#[cfg(feature = "outline")]
pub use pathfinder_geometry;
