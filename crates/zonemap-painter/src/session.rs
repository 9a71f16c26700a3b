use zonemap_engine::coords::Viewport;
use zonemap_engine::input::InputEvent;
use zonemap_engine::text::{FontId, FontLoadError, FontSystem};
use zonemap_raster::Raster;

use crate::config::{ConfigError, PainterConfig};
use crate::dispatch::{DispatchOutcome, DispatchState, DispatchTarget, Dispatcher, PainterEvent, PRIMARY};
use crate::scene::SceneRenderer;
use crate::translate::EventTranslator;
use crate::view::ViewTransform;
use crate::zone::ZoneSet;

/// One painting session: zones, view, raster and the per-frame loop body.
///
/// Owns no window or GPU state, so whole frames can be driven from tests.
/// Each [`frame`](Self::frame):
/// 1. advances zoom smoothing one step;
/// 2. clears the raster and draws the zones;
/// 3. dispatches the frame's events in arrival order;
/// 4. draws the text overlay.
///
/// A fill always runs on zones drawn with the current view: if a pan or
/// reset earlier in the frame moved them, the zones are drawn again first.
/// The same redraw happens before the overlay so labels and outlines agree.
pub struct PaintSession {
    zones: ZoneSet,
    view: ViewTransform,
    raster: Raster,
    dispatcher: Dispatcher,
    scene: SceneRenderer,
    translator: EventTranslator,
    fonts: FontSystem,
    background: zonemap_raster::Rgba8,
}

impl PaintSession {
    /// Validates `config` and builds a session with a raster of the
    /// configured viewport size.
    pub fn new(config: PainterConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let (width, height) = config.viewport.raster_size().ok_or(ConfigError::InvalidViewport {
            width: config.viewport.width,
            height: config.viewport.height,
        })?;

        let zones = ZoneSet::from_defs(&config.zones)?;
        log::info!(
            "painter session: {} zones, raster {width}x{height}",
            zones.len()
        );

        Ok(Self {
            zones,
            view: ViewTransform::new(config.zoom_limits, config.zoom_step, config.zoom_smoothing),
            raster: Raster::new(width, height, config.background),
            dispatcher: Dispatcher::new(config.palette.clone(), config.boundary),
            scene: SceneRenderer::new(&config),
            translator: EventTranslator::new(),
            fonts: FontSystem::new(),
            background: config.background,
        })
    }

    /// Loads an overlay font. The first font that loads is used.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let id = self.fonts.load_font(bytes)?;
        if self.scene.font().is_none() {
            self.scene.set_font(Some(id));
        }
        Ok(id)
    }

    /// Matches the raster to the window. Invalid (e.g. minimized) viewports
    /// keep the current raster.
    pub fn resize(&mut self, viewport: Viewport) {
        let Some((w, h)) = viewport.raster_size() else {
            return;
        };
        if (w, h) != (self.raster.width(), self.raster.height()) {
            log::debug!("raster resized to {w}x{h}");
            self.raster.resize(w, h, self.background);
        }
    }

    /// Converts raw engine input to painter events, keeping pointer history
    /// across frames.
    pub fn translate_input(&mut self, input: &[InputEvent]) -> Vec<PainterEvent> {
        self.translator.translate_all(input)
    }

    /// Runs one frame over `events`. Stops at the first `Quit`.
    pub fn frame<I>(&mut self, events: I) -> DispatchOutcome
    where
        I: IntoIterator<Item = PainterEvent>,
    {
        self.view.step_smoothing();
        self.scene.render_zones(&mut self.raster, &self.zones, &self.view);
        let mut drawn = self.view.clone();

        for event in events {
            let fills = matches!(event, PainterEvent::PointerDown { button, .. } if button == PRIMARY);
            if fills {
                self.redraw_if_moved(&mut drawn);
            }

            let mut target = DispatchTarget {
                raster: &mut self.raster,
                zones: &mut self.zones,
                view: &mut self.view,
            };
            if self.dispatcher.dispatch(event, &mut target) == DispatchOutcome::Quit {
                log::info!("quit requested");
                return DispatchOutcome::Quit;
            }
        }

        self.redraw_if_moved(&mut drawn);
        self.scene
            .draw_overlay(&mut self.raster, &self.zones, &self.view, &self.fonts);
        DispatchOutcome::Continue
    }

    /// Redraws the zones when the view no longer matches `drawn`. Filled
    /// zones come back solid, so earlier fills in the frame survive.
    fn redraw_if_moved(&mut self, drawn: &mut ViewTransform) {
        if self.view.same_mapping(drawn) {
            return;
        }
        log::trace!("view moved mid-frame, redrawing zones");
        self.scene.render_zones(&mut self.raster, &self.zones, &self.view);
        *drawn = self.view.clone();
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn zones(&self) -> &ZoneSet {
        &self.zones
    }

    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    pub fn state(&self) -> DispatchState {
        self.dispatcher.state()
    }
}
