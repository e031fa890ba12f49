//! Input capability.
//!
//! Public API is platform-agnostic: no winit (or any window-system) types.
//! Backends translate their events into [`InputEvent`]s in surface
//! coordinates and feed them to a [`FrameInput`]; game logic reads it through
//! the [`Input`] trait.

mod frame;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{
    ButtonState,
    InputEvent,
    Key,
    KeyState,
    PointerButton,
    PointerButtonEvent,
};

use crate::coords::Point;

/// What game logic can ask about input during a frame.
pub trait Input {
    /// Held state.
    fn state(&self) -> &InputState;

    /// Changes since the previous frame.
    fn frame(&self) -> &InputFrame;

    /// Events since the previous frame, in arrival order.
    fn events(&self) -> &[InputEvent] {
        &self.frame().events
    }

    fn key_down(&self, key: Key) -> bool {
        self.state().key_down(key)
    }

    /// `key` went down this frame.
    fn key_pressed(&self, key: Key) -> bool {
        self.frame().keys_pressed.contains(&key)
    }

    /// `button` went down this frame.
    fn button_pressed(&self, button: PointerButton) -> bool {
        self.frame().buttons_pressed.contains(&button)
    }

    /// `button` came up this frame.
    fn button_released(&self, button: PointerButton) -> bool {
        self.frame().buttons_released.contains(&button)
    }

    fn pointer_pos(&self) -> Option<Point> {
        self.state().pointer_pos
    }
}

/// State + per-frame deltas, fed by a backend.
#[derive(Debug, Default)]
pub struct FrameInput {
    state: InputState,
    frame: InputFrame,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one backend event.
    pub fn push(&mut self, ev: InputEvent) {
        self.state.apply_event(&mut self.frame, ev);
    }

    /// Drops this frame's deltas. Call once the frame has been consumed.
    pub fn end_frame(&mut self) {
        self.frame.clear();
    }
}

impl Input for FrameInput {
    fn state(&self) -> &InputState {
        &self.state
    }

    fn frame(&self) -> &InputFrame {
        &self.frame
    }
}
