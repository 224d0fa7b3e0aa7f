use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState};

/// Held-key state for a single window.
///
/// Press/release edges are written into an `InputFrame` as events arrive.
#[derive(Debug, Default)]
pub struct InputState {
    pub focused: bool,
    pub keys_down: HashSet<Key>,
}

impl InputState {
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::Focused(focused) => {
                self.focused = focused;
                if !focused {
                    // Releases are not delivered to unfocused windows.
                    self.keys_down.clear();
                }
            }

            // Repeats are filtered by the set itself: a held key is already down.
            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    if self.keys_down.insert(key) {
                        frame.keys_pressed.insert(key);
                    }
                }
                KeyState::Released => {
                    if self.keys_down.remove(&key) {
                        frame.keys_released.insert(key);
                    }
                }
            },
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state, repeat }
    }

    const F: Key = Key::Letter('f');

    #[test]
    fn press_is_reported_once() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(F, KeyState::Pressed, false));
        assert!(frame.was_key_pressed(F));
        assert!(state.key_down(F));

        frame.clear();
        state.apply_event(&mut frame, key(F, KeyState::Pressed, true));
        state.apply_event(&mut frame, key(F, KeyState::Pressed, true));
        assert!(!frame.was_key_pressed(F));
    }

    #[test]
    fn release_then_press_is_a_new_edge() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(F, KeyState::Pressed, false));
        frame.clear();
        state.apply_event(&mut frame, key(F, KeyState::Released, false));
        assert!(frame.was_key_released(F));
        assert!(!state.key_down(F));

        frame.clear();
        state.apply_event(&mut frame, key(F, KeyState::Pressed, false));
        assert!(frame.was_key_pressed(F));
    }

    #[test]
    fn focus_loss_drops_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, InputEvent::Focused(true));
        state.apply_event(&mut frame, key(F, KeyState::Pressed, false));
        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(!state.focused);
        assert!(!state.key_down(F));

        // Without the reset this press would be swallowed.
        frame.clear();
        state.apply_event(&mut frame, key(F, KeyState::Pressed, false));
        assert!(frame.was_key_pressed(F));
    }

    #[test]
    fn letter_helper_is_case_insensitive() {
        assert_eq!(Key::letter('F'), Some(Key::Letter('f')));
        assert_eq!(Key::letter('f'), Some(Key::Letter('f')));
        assert_eq!(Key::letter('1'), None);
    }
}
