//! Draws zones and the text overlay onto the raster.

use zonemap_engine::coords::Vec2;
use zonemap_engine::text::{FontId, FontSystem, TextRasterizer};
use zonemap_raster::{polygon, Raster, Rgba8};

use crate::config::{OverlayConfig, PainterConfig};
use crate::view::ViewTransform;
use crate::zone::{FillState, ZoneSet};

/// Top-left of the overlay title.
const TITLE_ORIGIN: Vec2 = Vec2::new(10.0, 10.0);
/// First instruction line; later lines step down by `LINE_STEP`.
const INSTRUCTIONS_ORIGIN: Vec2 = Vec2::new(10.0, 50.0);
const LINE_STEP: f32 = 30.0;

pub struct SceneRenderer {
    background: Rgba8,
    boundary: Rgba8,
    overlay: OverlayConfig,
    text: TextRasterizer,
    font: Option<FontId>,
}

impl SceneRenderer {
    pub fn new(config: &PainterConfig) -> Self {
        Self {
            background: config.background,
            boundary: config.boundary,
            overlay: config.overlay.clone(),
            text: TextRasterizer::new(),
            font: None,
        }
    }

    /// Font for the overlay; without one the overlay is skipped.
    pub fn set_font(&mut self, font: Option<FontId>) {
        self.font = font;
    }

    pub fn font(&self) -> Option<FontId> {
        self.font
    }

    /// Clears to the background, then draws every zone through `view`:
    /// filled zones as solid polygons, unfilled ones as a 1 px boundary-colored
    /// outline the flood fill can stop at.
    pub fn render_zones(&self, raster: &mut Raster, zones: &ZoneSet, view: &ViewTransform) {
        raster.clear(self.background);
        for zone in zones.iter() {
            let points = zone.screen_polygon(view);
            match zone.fill() {
                FillState::Filled(color) => polygon::fill_polygon(raster, &points, color),
                FillState::Unfilled => polygon::stroke_polygon(raster, &points, self.boundary),
            }
        }
    }

    /// Title, instructions and zone labels. Labels sit with their top-left at
    /// the zone's transformed centroid.
    pub fn draw_overlay(
        &mut self,
        raster: &mut Raster,
        zones: &ZoneSet,
        view: &ViewTransform,
        fonts: &FontSystem,
    ) {
        let Some(font) = self.font else {
            return;
        };
        let size = self.overlay.font_size;
        let text_color = self.overlay.text_color;

        self.text.draw(raster, fonts, font, &self.overlay.title, TITLE_ORIGIN, size, text_color);

        for (i, line) in self.overlay.instructions.iter().enumerate() {
            let origin = INSTRUCTIONS_ORIGIN + Vec2::new(0.0, LINE_STEP * i as f32);
            self.text.draw(raster, fonts, font, line, origin, size, text_color);
        }

        for zone in zones.iter() {
            let origin = Vec2::from(view.to_screen_px(zone.centroid()));
            self.text
                .draw(raster, fonts, font, zone.label(), origin, size, self.overlay.label_color);
        }
    }
}
