//! Input dispatcher: a small state machine over painter events.
//!
//! ```text
//!   Idle ──primary down in zone──▶ Filling ──up──▶ Idle
//!   Idle ──secondary down────────▶ Panning ──up──▶ Idle
//!                                  Panning ──move (secondary held)──▶ pan_by(delta)
//!   any  ──wheel──▶ zoom target changes, state unchanged
//! ```

use zonemap_engine::coords::IVec2;
use zonemap_engine::input::{HeldButtons, MouseButton};
use zonemap_raster::{flood_fill, Raster, Rgba8};

use crate::view::ViewTransform;
use crate::zone::{ZoneId, ZoneSet};

/// Button that fills zones.
pub const PRIMARY: MouseButton = MouseButton::Left;
/// Button that pans the view while held.
pub const SECONDARY: MouseButton = MouseButton::Right;

/// Events the painter reacts to, already in screen pixels.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PainterEvent {
    PointerDown { button: MouseButton, pos: IVec2 },
    PointerUp { button: MouseButton },
    /// Relative motion since the previous pointer position.
    PointerMove { delta: IVec2, held: HeldButtons },
    /// Positive notches zoom in.
    Wheel { notches: i32 },
    ResetView,
    Quit,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum DispatchState {
    #[default]
    Idle,
    Panning,
    Filling,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DispatchOutcome {
    Continue,
    Quit,
}

/// Everything an event may mutate.
pub struct DispatchTarget<'a> {
    pub raster: &'a mut Raster,
    pub zones: &'a mut ZoneSet,
    pub view: &'a mut ViewTransform,
}

/// Routes painter events to the fill engine and the view transform.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    state: DispatchState,
    palette: Vec<Rgba8>,
    boundary: Rgba8,
}

impl Dispatcher {
    /// Zone `i` fills with `palette[i % len]`. With an empty palette clicks
    /// are logged and ignored.
    pub fn new(palette: Vec<Rgba8>, boundary: Rgba8) -> Self {
        Self {
            state: DispatchState::Idle,
            palette,
            boundary,
        }
    }

    pub fn state(&self) -> DispatchState {
        self.state
    }

    pub fn dispatch(&mut self, event: PainterEvent, target: &mut DispatchTarget<'_>) -> DispatchOutcome {
        match event {
            PainterEvent::PointerDown { button, pos } if button == PRIMARY => {
                self.fill_at(pos, target);
            }

            PainterEvent::PointerDown { button, .. } if button == SECONDARY => {
                self.state = DispatchState::Panning;
            }

            PainterEvent::PointerDown { .. } => {}

            PainterEvent::PointerUp { .. } => {
                self.state = DispatchState::Idle;
            }

            PainterEvent::PointerMove { delta, held } => {
                if self.state == DispatchState::Panning {
                    if held.contains(SECONDARY) {
                        target.view.pan_by(delta);
                    } else {
                        // Release happened where we could not see it.
                        self.state = DispatchState::Idle;
                    }
                }
            }

            PainterEvent::Wheel { notches } => target.view.request_zoom_steps(notches),

            PainterEvent::ResetView => target.view.reset(),

            PainterEvent::Quit => return DispatchOutcome::Quit,
        }

        DispatchOutcome::Continue
    }

    /// Palette entry for `id`, wrapping by zone index.
    pub fn fill_color(&self, id: ZoneId) -> Option<Rgba8> {
        let index = id.0.checked_rem(self.palette.len())?;
        self.palette.get(index).copied()
    }

    fn fill_at(&mut self, pos: IVec2, target: &mut DispatchTarget<'_>) {
        let Some(id) = target.zones.hit_test(target.view, pos) else {
            log::trace!("click at {pos:?} outside every zone");
            return;
        };
        let Some(color) = self.fill_color(id) else {
            log::warn!("no palette colors, zone {} left unfilled", id.0);
            return;
        };
        self.state = DispatchState::Filling;

        match flood_fill(target.raster, pos, color, self.boundary) {
            Ok(report) => {
                target.zones.mark_filled(id, color);
                log::debug!("filled zone {} at {pos:?}: {} px", id.0, report.painted);
            }
            Err(err) => log::warn!("fill of zone {} skipped: {err}", id.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PainterConfig;
    use crate::scene::SceneRenderer;
    use crate::zone::FillState;

    struct Fixture {
        raster: Raster,
        zones: ZoneSet,
        view: ViewTransform,
        dispatcher: Dispatcher,
        scene: SceneRenderer,
    }

    impl Fixture {
        fn new() -> Self {
            let cfg = PainterConfig::default();
            let mut f = Self {
                raster: Raster::new(800, 600, cfg.background),
                zones: ZoneSet::from_defs(&cfg.zones).unwrap(),
                view: ViewTransform::default(),
                dispatcher: Dispatcher::new(cfg.palette.clone(), cfg.boundary),
                scene: SceneRenderer::new(&cfg),
            };
            f.render();
            f
        }

        fn render(&mut self) {
            self.scene.render_zones(&mut self.raster, &self.zones, &self.view);
        }

        fn send(&mut self, event: PainterEvent) -> DispatchOutcome {
            let mut target = DispatchTarget {
                raster: &mut self.raster,
                zones: &mut self.zones,
                view: &mut self.view,
            };
            self.dispatcher.dispatch(event, &mut target)
        }

        fn px(&self, x: i32, y: i32) -> Rgba8 {
            self.raster.get(IVec2::new(x, y)).unwrap()
        }
    }

    fn down(button: MouseButton, x: i32, y: i32) -> PainterEvent {
        PainterEvent::PointerDown { button, pos: IVec2::new(x, y) }
    }

    fn right_held() -> HeldButtons {
        HeldButtons::default().with(MouseButton::Right)
    }

    #[test]
    fn click_in_zone_a_fills_its_interior_only() {
        let mut f = Fixture::new();
        assert_eq!(f.send(down(MouseButton::Left, 200, 200)), DispatchOutcome::Continue);
        assert_eq!(f.dispatcher.state(), DispatchState::Filling);

        for y in 101..300 {
            for x in 101..300 {
                assert_eq!(f.px(x, y), Rgba8::RED, "({x}, {y})");
            }
        }
        // Outline stays boundary colored, outside stays background.
        assert_eq!(f.px(100, 200), Rgba8::BLACK);
        assert_eq!(f.px(300, 300), Rgba8::BLACK);
        assert_eq!(f.px(99, 200), Rgba8::WHITE);
        // Zones B and C untouched.
        assert_eq!(f.px(500, 200), Rgba8::WHITE);
        assert_eq!(f.px(200, 500), Rgba8::WHITE);

        assert_eq!(f.zones.get(ZoneId(0)).unwrap().fill(), FillState::Filled(Rgba8::RED));
        assert_eq!(f.zones.get(ZoneId(1)).unwrap().fill(), FillState::Unfilled);
    }

    #[test]
    fn filled_zone_renders_solid_next_frame() {
        let mut f = Fixture::new();
        f.send(down(MouseButton::Left, 200, 200));
        f.render();
        assert_eq!(f.px(100, 100), Rgba8::RED);
        assert_eq!(f.px(300, 300), Rgba8::RED);
        assert_eq!(f.px(301, 301), Rgba8::WHITE);
    }

    #[test]
    fn each_zone_gets_its_palette_color() {
        let mut f = Fixture::new();
        f.send(down(MouseButton::Left, 500, 200));
        f.send(PainterEvent::PointerUp { button: MouseButton::Left });
        f.send(down(MouseButton::Left, 200, 500));
        assert_eq!(f.px(450, 150), Rgba8::GREEN);
        assert_eq!(f.px(250, 550), Rgba8::BLUE);
    }

    #[test]
    fn palette_wraps_by_zone_index() {
        let f = Fixture::new();
        assert_eq!(f.dispatcher.fill_color(ZoneId(0)), Some(Rgba8::RED));
        assert_eq!(f.dispatcher.fill_color(ZoneId(2)), Some(Rgba8::BLUE));
        assert_eq!(f.dispatcher.fill_color(ZoneId(4)), Some(Rgba8::GREEN));
    }

    #[test]
    fn empty_palette_leaves_zones_unfilled() {
        let mut f = Fixture::new();
        f.dispatcher = Dispatcher::new(Vec::new(), Rgba8::BLACK);
        assert_eq!(f.dispatcher.fill_color(ZoneId(0)), None);

        let before = f.raster.clone();
        assert_eq!(f.send(down(MouseButton::Left, 200, 200)), DispatchOutcome::Continue);
        assert_eq!(f.dispatcher.state(), DispatchState::Idle);
        assert_eq!(f.raster, before);
        assert_eq!(f.zones.get(ZoneId(0)).unwrap().fill(), FillState::Unfilled);
    }

    #[test]
    fn click_outside_zones_stays_idle() {
        let mut f = Fixture::new();
        let before = f.raster.clone();
        f.send(down(MouseButton::Left, 350, 350));
        assert_eq!(f.dispatcher.state(), DispatchState::Idle);
        assert_eq!(f.raster, before);
    }

    #[test]
    fn click_on_outline_is_a_noop_fill() {
        let mut f = Fixture::new();
        let before = f.raster.clone();
        f.send(down(MouseButton::Left, 100, 150));
        assert_eq!(f.raster, before);
        // Hit-test succeeded; the empty fill still counts.
        assert_eq!(f.zones.get(ZoneId(0)).unwrap().fill(), FillState::Filled(Rgba8::RED));
    }

    #[test]
    fn right_drag_pans_by_accumulated_delta() {
        let mut f = Fixture::new();
        f.send(down(MouseButton::Right, 10, 10));
        assert_eq!(f.dispatcher.state(), DispatchState::Panning);

        f.send(PainterEvent::PointerMove { delta: IVec2::new(30, -5), held: right_held() });
        f.send(PainterEvent::PointerMove { delta: IVec2::new(20, -15), held: right_held() });
        f.send(PainterEvent::PointerUp { button: MouseButton::Right });

        assert_eq!(f.view.pan(), IVec2::new(50, -20));
        assert_eq!(f.dispatcher.state(), DispatchState::Idle);

        let before = ViewTransform::default();
        let zones = &f.zones;
        for zone in zones.iter() {
            let old = zone.screen_polygon(&before);
            let new = zone.screen_polygon(&f.view);
            for (o, n) in old.iter().zip(&new) {
                assert_eq!(*n - *o, IVec2::new(50, -20));
            }
        }
    }

    #[test]
    fn moves_without_panning_do_nothing() {
        let mut f = Fixture::new();
        f.send(PainterEvent::PointerMove { delta: IVec2::new(30, 30), held: right_held() });
        assert_eq!(f.view.pan(), IVec2::zero());
    }

    #[test]
    fn panning_ends_when_button_no_longer_held() {
        let mut f = Fixture::new();
        f.send(down(MouseButton::Right, 0, 0));
        f.send(PainterEvent::PointerMove { delta: IVec2::new(5, 5), held: HeldButtons::default() });
        assert_eq!(f.dispatcher.state(), DispatchState::Idle);
        assert_eq!(f.view.pan(), IVec2::zero());
    }

    #[test]
    fn wheel_changes_target_not_state() {
        let mut f = Fixture::new();
        f.send(down(MouseButton::Right, 0, 0));
        f.send(PainterEvent::Wheel { notches: 1 });
        f.send(PainterEvent::Wheel { notches: 1 });
        assert_eq!(f.dispatcher.state(), DispatchState::Panning);
        assert!((f.view.target_zoom() - 1.21).abs() < 1e-5);
    }

    #[test]
    fn middle_button_is_ignored() {
        let mut f = Fixture::new();
        f.send(down(MouseButton::Middle, 200, 200));
        assert_eq!(f.dispatcher.state(), DispatchState::Idle);
        assert_eq!(f.px(200, 200), Rgba8::WHITE);
    }

    #[test]
    fn quit_and_reset() {
        let mut f = Fixture::new();
        f.send(PainterEvent::Wheel { notches: 3 });
        f.send(PainterEvent::ResetView);
        assert_eq!(f.view, ViewTransform::default());
        assert_eq!(f.send(PainterEvent::Quit), DispatchOutcome::Quit);
    }
}
