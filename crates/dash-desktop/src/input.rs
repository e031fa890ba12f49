//! winit → engine input translation.
//!
//! Positions are mapped through the current [`Letterbox`] so game logic sees
//! canvas pixels. The bars count as outside the surface.

use dash_engine::coords::Point;
use dash_engine::input::{ButtonState, InputEvent, Key, KeyState, PointerButton, PointerButtonEvent};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::present::Letterbox;

/// Translates one window event.
///
/// `pointer` is the canvas position the engine last reported (`None` when
/// the pointer is outside the canvas).
pub(crate) fn translate_event(
    event: &WindowEvent,
    letterbox: Option<&Letterbox>,
    pointer: Option<Point>,
) -> Option<InputEvent> {
    match event {
        WindowEvent::Focused(f) => Some(InputEvent::Focused(*f)),

        WindowEvent::CursorLeft { .. } => pointer.map(|_| InputEvent::PointerLeft),

        WindowEvent::CursorMoved { position, .. } => {
            let mapped = letterbox.and_then(|lb| lb.to_canvas(position.x, position.y));
            pointer_moved(mapped, pointer)
        }

        WindowEvent::MouseInput { state, button, .. } => {
            // Clicks on the bars do not reach the game.
            let pos = pointer?;
            Some(InputEvent::PointerButton(PointerButtonEvent {
                button: map_mouse_button(*button),
                state: match state {
                    ElementState::Pressed => ButtonState::Pressed,
                    ElementState::Released => ButtonState::Released,
                },
                pos,
            }))
        }

        WindowEvent::KeyboardInput { event, .. } => Some(InputEvent::Key {
            key: map_key(event.physical_key),
            state: match event.state {
                ElementState::Pressed => KeyState::Pressed,
                ElementState::Released => KeyState::Released,
            },
            repeat: event.repeat,
        }),

        _ => None,
    }
}

/// Move inside the canvas, or a single `PointerLeft` when crossing out of it.
fn pointer_moved(mapped: Option<Point>, previous: Option<Point>) -> Option<InputEvent> {
    match (mapped, previous) {
        (Some(p), prev) if prev != Some(p) => Some(InputEvent::PointerMoved(p)),
        (Some(_), _) => None,
        (None, Some(_)) => Some(InputEvent::PointerLeft),
        (None, None) => None,
    }
}

fn map_mouse_button(b: MouseButton) -> PointerButton {
    match b {
        MouseButton::Left => PointerButton::Left,
        MouseButton::Right => PointerButton::Right,
        MouseButton::Middle => PointerButton::Middle,
        MouseButton::Back => PointerButton::Other(3),
        MouseButton::Forward => PointerButton::Other(4),
        MouseButton::Other(v) => PointerButton::Other(v),
    }
}

fn map_key(pk: PhysicalKey) -> Key {
    let PhysicalKey::Code(code) = pk else {
        return Key::Unknown(0);
    };

    match code {
        KeyCode::Escape => Key::Escape,
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Space => Key::Space,

        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,

        KeyCode::KeyA => Key::A,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyG => Key::G,
        KeyCode::KeyH => Key::H,
        KeyCode::KeyI => Key::I,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyK => Key::K,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyO => Key::O,
        KeyCode::KeyP => Key::P,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyT => Key::T,
        KeyCode::KeyU => Key::U,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyY => Key::Y,
        KeyCode::KeyZ => Key::Z,

        KeyCode::Digit0 => Key::Digit0,
        KeyCode::Digit1 => Key::Digit1,
        KeyCode::Digit2 => Key::Digit2,
        KeyCode::Digit3 => Key::Digit3,
        KeyCode::Digit4 => Key::Digit4,
        KeyCode::Digit5 => Key::Digit5,
        KeyCode::Digit6 => Key::Digit6,
        KeyCode::Digit7 => Key::Digit7,
        KeyCode::Digit8 => Key::Digit8,
        KeyCode::Digit9 => Key::Digit9,

        other => Key::Unknown(other as u32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn maps_game_keys() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Space)), Key::Space);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::NumpadEnter)), Key::Enter);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyW)), Key::W);
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Digit7)), Key::Digit7);
    }

    #[test]
    fn unmapped_keys_keep_a_code() {
        let code = KeyCode::F5;
        assert_eq!(map_key(PhysicalKey::Code(code)), Key::Unknown(code as u32));
    }

    #[test]
    fn maps_buttons() {
        assert_eq!(map_mouse_button(MouseButton::Left), PointerButton::Left);
        assert_eq!(map_mouse_button(MouseButton::Other(9)), PointerButton::Other(9));
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn move_inside_reports_position() {
        let p = Point::new(10, 20);
        assert_eq!(pointer_moved(Some(p), None), Some(InputEvent::PointerMoved(p)));
        assert_eq!(pointer_moved(Some(p), Some(Point::new(9, 20))), Some(InputEvent::PointerMoved(p)));
    }

    #[test]
    fn sub_pixel_move_is_dropped() {
        let p = Point::new(10, 20);
        assert_eq!(pointer_moved(Some(p), Some(p)), None);
    }

    #[test]
    fn crossing_into_bars_leaves_once() {
        assert_eq!(pointer_moved(None, Some(Point::new(0, 0))), Some(InputEvent::PointerLeft));
        assert_eq!(pointer_moved(None, None), None);
    }
}
