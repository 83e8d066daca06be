use super::types::{InputEvent, KeyPress};

/// Per-frame input deltas.
///
/// `InputState` holds the current state (held keys, focus); `InputFrame`
/// holds what happened since the previous frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    /// Key presses in arrival order, auto-repeats included.
    pub key_presses: Vec<KeyPress>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.key_presses.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
