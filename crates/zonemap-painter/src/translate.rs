//! Engine input events → painter events.

use zonemap_engine::coords::{IVec2, Vec2};
use zonemap_engine::input::{
    InputEvent, Key, KeyState, MouseButtonState, MouseWheelDelta, PointerButtonEvent,
    PointerMoveEvent,
};

use crate::dispatch::PainterEvent;

/// Pixel scroll distance that counts as one wheel notch.
pub const PIXELS_PER_NOTCH: f32 = 40.0;

/// Converts the engine's absolute pointer positions and raw wheel deltas into
/// [`PainterEvent`]s.
///
/// Pointer deltas are differences of consecutive positions rounded to whole
/// pixels, so a drag's deltas always sum to its net displacement. Events with
/// non-finite coordinates are logged and dropped.
///
/// Line wheel deltas round to whole notches (at least one in the scroll
/// direction). Pixel deltas from trackpads accumulate until they cover
/// [`PIXELS_PER_NOTCH`]; reversing direction drops the remainder.
#[derive(Debug, Clone, Default)]
pub struct EventTranslator {
    last_pos: Option<IVec2>,
    wheel_pixels: f32,
}

impl EventTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translates a batch in arrival order.
    pub fn translate_all<'a, I>(&mut self, events: I) -> Vec<PainterEvent>
    where
        I: IntoIterator<Item = &'a InputEvent>,
    {
        events.into_iter().filter_map(|ev| self.translate(ev)).collect()
    }

    pub fn translate(&mut self, event: &InputEvent) -> Option<PainterEvent> {
        match *event {
            InputEvent::PointerMoved(PointerMoveEvent { x, y, held }) => {
                if !finite(x, y) {
                    log::warn!("dropping pointer move with non-finite position ({x}, {y})");
                    return None;
                }
                let pos = rounded(x, y);
                let prev = self.last_pos.replace(pos)?;
                let delta = pos - prev;
                (delta != IVec2::zero()).then_some(PainterEvent::PointerMove { delta, held })
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, x, y, .. }) => {
                if !finite(x, y) {
                    log::warn!("dropping {button:?} {state:?} with non-finite position ({x}, {y})");
                    return None;
                }
                self.last_pos = Some(rounded(x, y));
                match state {
                    // The pixel under the pointer.
                    MouseButtonState::Pressed => Some(PainterEvent::PointerDown {
                        button,
                        pos: IVec2::new(x.floor() as i32, y.floor() as i32),
                    }),
                    MouseButtonState::Released => Some(PainterEvent::PointerUp { button }),
                }
            }

            InputEvent::MouseWheel { delta, .. } => {
                let notches = self.wheel_notches(delta)?;
                Some(PainterEvent::Wheel { notches })
            }

            InputEvent::Key { key, state: KeyState::Pressed, repeat, .. } => match key {
                Key::Escape if !repeat => Some(PainterEvent::Quit),
                Key::R | Key::Home if !repeat => Some(PainterEvent::ResetView),
                Key::Plus => Some(PainterEvent::Wheel { notches: 1 }),
                Key::Minus => Some(PainterEvent::Wheel { notches: -1 }),
                _ => None,
            },

            InputEvent::PointerLeft | InputEvent::Focused(false) => {
                self.last_pos = None;
                self.wheel_pixels = 0.0;
                None
            }

            InputEvent::CloseRequested => Some(PainterEvent::Quit),

            _ => None,
        }
    }

    fn wheel_notches(&mut self, delta: MouseWheelDelta) -> Option<i32> {
        let (MouseWheelDelta::Line { y, .. } | MouseWheelDelta::Pixel { y, .. }) = delta;
        if !y.is_finite() {
            log::warn!("dropping wheel event with non-finite delta {y}");
            return None;
        }
        if y == 0.0 {
            return None;
        }

        match delta {
            MouseWheelDelta::Line { .. } => {
                self.wheel_pixels = 0.0;
                let notches = y.round() as i32;
                Some(if notches == 0 { y.signum() as i32 } else { notches })
            }
            MouseWheelDelta::Pixel { .. } => {
                if self.wheel_pixels * y < 0.0 {
                    self.wheel_pixels = 0.0;
                }
                self.wheel_pixels += y;
                let notches = (self.wheel_pixels / PIXELS_PER_NOTCH).trunc();
                if notches == 0.0 {
                    return None;
                }
                self.wheel_pixels -= notches * PIXELS_PER_NOTCH;
                Some(notches as i32)
            }
        }
    }
}

fn finite(x: f32, y: f32) -> bool {
    x.is_finite() && y.is_finite()
}

fn rounded(x: f32, y: f32) -> IVec2 {
    Vec2::new(x, y).round()
}
