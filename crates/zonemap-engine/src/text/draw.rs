use std::collections::HashMap;

use fontdue::layout::{CoordinateSystem, GlyphRasterConfig, Layout, LayoutSettings, TextStyle};
use zonemap_raster::{IVec2, Raster, Rgba8};

use crate::coords::Vec2;

use super::{FontId, FontSystem};

struct CachedGlyph {
    width: usize,
    height: usize,
    coverage: Vec<u8>,
}

/// Draws text into a raster.
///
/// Keeps a glyph coverage cache keyed by `GlyphRasterConfig` (font, glyph,
/// pixel size) so labels redrawn every frame are rasterized once.
pub struct TextRasterizer {
    glyph_cache: HashMap<GlyphRasterConfig, CachedGlyph>,
    layout: Layout<()>,
}

impl Default for TextRasterizer {
    fn default() -> Self {
        Self {
            glyph_cache: HashMap::new(),
            layout: Layout::new(CoordinateSystem::PositiveYDown),
        }
    }
}

impl TextRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws one line of `text` with its top-left corner at `origin`.
    ///
    /// Glyph coverage is alpha-blended; pixels outside the raster are skipped.
    /// Unknown fonts draw nothing.
    pub fn draw(
        &mut self,
        raster: &mut Raster,
        fonts: &FontSystem,
        font_id: FontId,
        text: &str,
        origin: Vec2,
        size: f32,
        color: Rgba8,
    ) {
        let Some(font) = fonts.get(font_id) else {
            log::warn!("TextRasterizer: unknown {font_id:?}, skipping {text:?}");
            return;
        };

        self.layout.reset(&LayoutSettings {
            x: origin.x,
            y: origin.y,
            ..LayoutSettings::default()
        });
        self.layout.append(&[font], &TextStyle::new(text, size, 0));

        for g in self.layout.glyphs() {
            if !g.char_data.rasterize() || g.width == 0 || g.height == 0 {
                continue;
            }

            let cached = self.glyph_cache.entry(g.key).or_insert_with(|| {
                let (metrics, coverage) = font.rasterize_config(g.key);
                CachedGlyph {
                    width: metrics.width,
                    height: metrics.height,
                    coverage,
                }
            });

            let x0 = g.x.round() as i32;
            let y0 = g.y.round() as i32;
            for row in 0..cached.height {
                for col in 0..cached.width {
                    let c = cached.coverage[row * cached.width + col];
                    if c != 0 {
                        raster.blend(IVec2::new(x0 + col as i32, y0 + row as i32), color, c);
                    }
                }
            }
        }
    }

    /// Number of distinct glyph bitmaps cached so far.
    pub fn cached_glyphs(&self) -> usize {
        self.glyph_cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_font_leaves_raster_untouched() {
        let fonts = FontSystem::new();
        let mut text = TextRasterizer::new();
        let mut raster = Raster::new(32, 16, Rgba8::WHITE);
        let before = raster.clone();

        text.draw(&mut raster, &fonts, FontId(0), "Hi", Vec2::new(1.0, 1.0), 12.0, Rgba8::BLACK);

        assert_eq!(raster, before);
        assert_eq!(text.cached_glyphs(), 0);
    }
}
