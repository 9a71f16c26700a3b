use std::fmt;

/// Keyboard key identifier.
///
/// Only keys the painter binds are named; everything else arrives as
/// `Key::Unknown(code)` with the platform key code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Home,
    R,
    Plus,
    Minus,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Modifier keys state, stored as plain booleans.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Buttons held while the pointer moved.
///
/// Captured when the move is translated so it reflects the button state at
/// that point in the event stream, not at the end of the frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct HeldButtons {
    pub left: bool,
    pub right: bool,
    pub middle: bool,
}

impl HeldButtons {
    pub fn contains(self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Right => self.right,
            MouseButton::Middle => self.middle,
            _ => false,
        }
    }

    pub fn with(mut self, button: MouseButton) -> Self {
        match button {
            MouseButton::Left => self.left = true,
            MouseButton::Right => self.right = true,
            MouseButton::Middle => self.middle = true,
            _ => {}
        }
        self
    }

    pub fn none(self) -> bool {
        !(self.left || self.right || self.middle)
    }
}

/// Mouse wheel delta.
///
/// `Line` corresponds to wheel notches; `Pixel` is high-precision trackpad input.
/// Positive `y` means scrolling up / away from the user.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseWheelDelta {
    Line { x: f32, y: f32 },
    Pixel { x: f32, y: f32 },
}

/// Pointer move event in logical pixels (absolute position).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
    pub held: HeldButtons,
}

/// Pointer button event.
///
/// Carries the pointer position so consumers do not depend on a separately
/// tracked cursor.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
    pub x: f32,
    pub y: f32,
    pub modifiers: Modifiers,
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    ModifiersChanged(Modifiers),

    Key {
        key: Key,
        state: KeyState,
        modifiers: Modifiers,
        /// True when event is a key-repeat.
        repeat: bool,
    },

    PointerMoved(PointerMoveEvent),
    PointerButton(PointerButtonEvent),

    MouseWheel {
        delta: MouseWheelDelta,
        modifiers: Modifiers,
    },

    /// Pointer left the window surface.
    PointerLeft,

    /// Window focus change.
    Focused(bool),

    /// The user asked to close the window.
    CloseRequested,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_buttons_track_primary_three() {
        let held = HeldButtons::default().with(MouseButton::Right);
        assert!(held.contains(MouseButton::Right));
        assert!(!held.contains(MouseButton::Left));
        assert!(!held.none());
    }

    #[test]
    fn held_buttons_ignore_extra_buttons() {
        let held = HeldButtons::default().with(MouseButton::Back);
        assert!(held.none());
        assert!(!held.contains(MouseButton::Back));
    }
}
