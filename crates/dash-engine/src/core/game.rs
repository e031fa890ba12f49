use crate::graphics::Graphics;
use crate::input::Input;

/// Platform handle given to game logic.
pub trait Game {
    /// The surface for the current frame.
    fn graphics(&mut self) -> &mut dyn Graphics;

    /// Input collected since the previous frame.
    fn input(&mut self) -> &mut dyn Input;
}
