use anyhow::{Context, Result};
use winit::dpi::LogicalSize;

use zonemap_engine::coords::Viewport;
use zonemap_engine::core::{App as EngineApp, AppControl, FrameCtx};
use zonemap_engine::device::GpuInit;
use zonemap_engine::render::RasterRenderer;
use zonemap_engine::window::{Runtime, RuntimeConfig};
use zonemap_raster::Rgba8;

use crate::config::{PainterConfig, ZoneDef};
use crate::dispatch::DispatchOutcome;
use crate::session::PaintSession;

// ── Painter ───────────────────────────────────────────────────────────────

/// Top-level painter builder.
///
/// Starts from the default urban zoning map; every setter replaces one part
/// of the [`PainterConfig`], then [`run`](Self::run) validates it and opens
/// the window.
///
/// ```rust,ignore
/// Painter::new()
///     .title("Zoning")
///     .size(1024.0, 768.0)
///     .zones([ZoneDef::rect("Park", 50.0, 50.0, 300.0, 200.0)])
///     .palette([Rgba8::GREEN])
///     .font(load_font())
///     .run()?;
/// ```
pub struct Painter {
    config: PainterConfig,
    fonts:  Vec<Vec<u8>>,
}

impl Painter {
    pub fn new() -> Self {
        Self::from_config(PainterConfig::default())
    }

    pub fn from_config(config: PainterConfig) -> Self {
        Self { config, fonts: Vec::new() }
    }

    /// Set the window title.
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.config.window_title = t.into();
        self
    }

    /// Set the initial window size in logical pixels.
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.config.viewport = Viewport::new(width, height);
        self
    }

    pub fn target_fps(mut self, fps: u32) -> Self {
        self.config.target_fps = fps;
        self
    }

    /// Replace the zone definitions.
    pub fn zones(mut self, zones: impl IntoIterator<Item = ZoneDef>) -> Self {
        self.config.zones = zones.into_iter().collect();
        self
    }

    /// Replace the fill palette.
    pub fn palette(mut self, colors: impl IntoIterator<Item = Rgba8>) -> Self {
        self.config.palette = colors.into_iter().collect();
        self
    }

    /// Register overlay font bytes. The first that loads is used; with none
    /// the overlay is not drawn.
    pub fn font(mut self, data: Vec<u8>) -> Self {
        self.fonts.push(data);
        self
    }

    pub fn config(&self) -> &PainterConfig {
        &self.config
    }

    /// Validates the configuration, opens the window and runs until quit.
    pub fn run(self) -> Result<()> {
        let runtime = RuntimeConfig {
            title:        self.config.window_title.clone(),
            initial_size: LogicalSize::new(
                self.config.viewport.width as f64,
                self.config.viewport.height as f64,
            ),
            target_fps:   self.config.target_fps,
        };

        let state = self.into_state()?;
        Runtime::run(runtime, GpuInit::default(), state)
    }

    fn into_state(self) -> Result<PainterAppState> {
        let mut session = PaintSession::new(self.config).context("invalid painter configuration")?;

        for (i, bytes) in self.fonts.iter().enumerate() {
            if let Err(e) = session.load_font(bytes) {
                log::warn!("failed to load font #{i}: {e}");
            }
        }

        Ok(PainterAppState {
            session,
            renderer: RasterRenderer::new(),
        })
    }
}

impl Default for Painter {
    fn default() -> Self {
        Self::new()
    }
}

// ── PainterAppState ───────────────────────────────────────────────────────

/// Internal state that implements `zonemap_engine::core::App`.
struct PainterAppState {
    session:  PaintSession,
    renderer: RasterRenderer,
}

impl EngineApp for PainterAppState {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.session.resize(ctx.window.viewport());

        let events = self.session.translate_input(&ctx.input_frame.events);
        if self.session.frame(events) == DispatchOutcome::Quit {
            return AppControl::Exit;
        }

        let raster   = self.session.raster();
        let renderer = &mut self.renderer;
        ctx.render(|rctx, target| renderer.render(rctx, target, raster))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let painter = Painter::new()
            .title("Zoning")
            .size(1024.0, 768.0)
            .target_fps(30)
            .zones([ZoneDef::rect("Park", 50.0, 50.0, 300.0, 200.0)])
            .palette([Rgba8::GREEN]);

        let cfg = painter.config();
        assert_eq!(cfg.window_title, "Zoning");
        assert_eq!(cfg.viewport, Viewport::new(1024.0, 768.0));
        assert_eq!(cfg.target_fps, 30);
        assert_eq!(cfg.zones.len(), 1);
        assert_eq!(cfg.palette, vec![Rgba8::GREEN]);
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn invalid_config_fails_before_any_window() {
        let err = Painter::new().palette([Rgba8::BLACK]).into_state().err().unwrap();
        assert_eq!(err.to_string(), "invalid painter configuration");
        assert!(format!("{err:#}").contains("equals the boundary color"));
    }

    #[test]
    fn unreadable_fonts_are_skipped() {
        let state = Painter::new().font(Vec::new()).font(b"junk".to_vec()).into_state().unwrap();
        assert!(state.session.raster().width() > 0);
    }
}
