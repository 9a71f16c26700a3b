use super::types::InputEvent;

/// Input collected between two frames.
///
/// `InputState` holds what is currently down; `InputFrame` holds what happened
/// since the last frame, in arrival order. The runtime clears it after each
/// frame callback.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Events in arrival order.
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
