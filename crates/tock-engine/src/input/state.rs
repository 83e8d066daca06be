use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyPress, KeyState, Modifiers};

/// Current input state for the window.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,
    pub focused: bool,
    /// Currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies an input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::ModifiersChanged(m) => self.modifiers = *m,

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Avoids stuck keys when focus changes mid-press.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key { key, state, modifiers, repeat } => {
                self.modifiers = *modifiers;
                match state {
                    KeyState::Pressed => {
                        let fresh = self.keys_down.insert(*key);
                        if fresh || *repeat {
                            frame.key_presses.push(KeyPress {
                                key: *key,
                                modifiers: *modifiers,
                                repeat: *repeat,
                            });
                        }
                    }
                    KeyState::Released => {
                        self.keys_down.remove(key);
                    }
                }
            }
        }

        frame.events.push(ev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state, modifiers: Modifiers::default(), repeat }
    }

    #[test]
    fn press_is_recorded_once_until_release() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::ArrowRight, KeyState::Pressed, false));
        state.apply_event(&mut frame, key(Key::ArrowRight, KeyState::Pressed, false));
        assert_eq!(frame.key_presses.len(), 1);
        assert!(state.keys_down.contains(&Key::ArrowRight));

        state.apply_event(&mut frame, key(Key::ArrowRight, KeyState::Released, false));
        assert!(!state.keys_down.contains(&Key::ArrowRight));
        assert_eq!(frame.events.len(), 3);
    }

    #[test]
    fn auto_repeat_is_recorded() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::ArrowLeft, KeyState::Pressed, false));
        state.apply_event(&mut frame, key(Key::ArrowLeft, KeyState::Pressed, true));
        state.apply_event(&mut frame, key(Key::ArrowLeft, KeyState::Pressed, true));

        let repeats: Vec<bool> = frame.key_presses.iter().map(|p| p.repeat).collect();
        assert_eq!(repeats, [false, true, true]);
    }

    #[test]
    fn focus_loss_releases_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, InputEvent::Focused(true));
        state.apply_event(&mut frame, key(Key::L, KeyState::Pressed, false));
        state.apply_event(&mut frame, InputEvent::Focused(false));

        assert!(!state.focused);
        assert!(state.keys_down.is_empty());
    }

    #[test]
    fn clear_resets_frame() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, key(Key::Home, KeyState::Pressed, false));
        frame.clear();
        assert!(frame.is_empty());
        assert!(frame.key_presses.is_empty());
    }
}
