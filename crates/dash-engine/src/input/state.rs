use std::collections::HashSet;

use crate::coords::Point;

use super::frame::InputFrame;
use super::types::{ButtonState, InputEvent, Key, KeyState, PointerButton, PointerButtonEvent};

/// Held keys/buttons and pointer position for one surface.
#[derive(Debug, Default)]
pub struct InputState {
    pub focused: bool,

    /// Pointer position in surface pixels; `None` while outside the surface.
    pub pointer_pos: Option<Point>,

    pub keys_down: HashSet<Key>,
    pub buttons_down: HashSet<PointerButton>,
}

impl InputState {
    /// Applies `ev` to the held state and records the transition in `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Focused(focused) => {
                self.focused = *focused;
                if !*focused {
                    // Releases can be lost while unfocused; forget everything held.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(pos) => {
                self.pointer_pos = Some(*pos);
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    if self.keys_down.insert(*key) {
                        frame.keys_pressed.insert(*key);
                    }
                }
                KeyState::Released => {
                    if self.keys_down.remove(key) {
                        frame.keys_released.insert(*key);
                    }
                }
            },

            InputEvent::PointerButton(PointerButtonEvent { button, state, pos }) => {
                self.pointer_pos = Some(*pos);
                match state {
                    ButtonState::Pressed => {
                        if self.buttons_down.insert(*button) {
                            frame.buttons_pressed.insert(*button);
                        }
                    }
                    ButtonState::Released => {
                        if self.buttons_down.remove(button) {
                            frame.buttons_released.insert(*button);
                        }
                    }
                }
            }
        }

        frame.push_event(ev);
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, button: PointerButton) -> bool {
        self.buttons_down.contains(&button)
    }
}
