use std::collections::HashSet;

use super::types::{InputEvent, Key, KeyState, Modifiers};

/// Current keyboard state for a single window.
///
/// Holds "is down" information; consumers poll with [`key_down`](Self::key_down)
/// once per logic tick.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Whether the window is focused.
    pub focused: bool,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state.
    pub fn apply_event(&mut self, ev: InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = m;
            }

            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // Conservative behavior: on focus loss, clear the "down" set.
                    // Avoids stuck keys when focus changes mid-press.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key {
                key,
                state,
                modifiers,
                ..
            } => {
                self.modifiers = modifiers;

                match state {
                    KeyState::Pressed => {
                        self.keys_down.insert(key);
                    }
                    KeyState::Released => {
                        self.keys_down.remove(&key);
                    }
                }
            }
        }
    }

    /// Returns true while `key` is held.
    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key {
            key,
            state,
            modifiers: Modifiers::default(),
            code: 0,
            repeat,
        }
    }

    #[test]
    fn press_then_release_round_trip() {
        let mut input = InputState::default();
        assert!(!input.key_down(Key::Escape));

        input.apply_event(key_event(Key::Escape, KeyState::Pressed, false));
        assert!(input.key_down(Key::Escape));

        input.apply_event(key_event(Key::Escape, KeyState::Released, false));
        assert!(!input.key_down(Key::Escape));
    }

    #[test]
    fn repeat_press_is_idempotent() {
        let mut input = InputState::default();

        input.apply_event(key_event(Key::Space, KeyState::Pressed, false));
        input.apply_event(key_event(Key::Space, KeyState::Pressed, true));
        input.apply_event(key_event(Key::Space, KeyState::Pressed, true));
        assert!(input.key_down(Key::Space));
        assert_eq!(input.keys_down.len(), 1);

        input.apply_event(key_event(Key::Space, KeyState::Released, false));
        assert!(!input.key_down(Key::Space));
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut input = InputState::default();

        input.apply_event(key_event(Key::W, KeyState::Pressed, false));
        input.apply_event(key_event(Key::Shift, KeyState::Pressed, false));
        assert!(input.key_down(Key::W));

        input.apply_event(InputEvent::Focused(false));
        assert!(!input.focused);
        assert!(input.keys_down.is_empty());
    }

    #[test]
    fn key_events_update_modifiers() {
        let mut input = InputState::default();
        let modifiers = Modifiers {
            ctrl: true,
            ..Default::default()
        };

        input.apply_event(InputEvent::Key {
            key: Key::C,
            state: KeyState::Pressed,
            modifiers,
            code: 0,
            repeat: false,
        });
        assert!(input.modifiers.ctrl);
        assert!(input.modifiers.any());
    }
}
