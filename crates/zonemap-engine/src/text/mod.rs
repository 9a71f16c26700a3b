//! Text on the CPU raster.
//!
//! Fonts are parsed with `fontdue`; glyphs are rasterized once per
//! (glyph, size) and composited straight into a [`zonemap_raster::Raster`].

mod draw;
mod font_system;

pub use draw::TextRasterizer;
pub use font_system::{FontId, FontLoadError, FontSystem};
