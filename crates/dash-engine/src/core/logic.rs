use crate::graphics::{self, Graphics};
use crate::resources::ResourceManager;
use crate::time::FrameTime;

use super::Game;

/// Control directive returned by [`GameLogic::update`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Application contract driven by a platform loop.
///
/// Per frame, in order: `update`, then `render`. Both run on the loop's
/// thread; nothing here is called concurrently.
pub trait GameLogic {
    /// Called once, after the surface exists and before the first frame.
    ///
    /// Typically loads images through `resources`. An error aborts startup.
    fn init(&mut self, game: &mut dyn Game, resources: &mut ResourceManager) -> anyhow::Result<()>;

    /// Advances the simulation by one frame.
    fn update(&mut self, game: &mut dyn Game, time: FrameTime) -> Flow;

    /// Draws the frame. Expected to start with `g.clear(..)`.
    ///
    /// An error is a programming mistake (bad crop, bad axis). The loop logs it
    /// and keeps running; the next frame calls `render` again.
    fn render(&mut self, g: &mut dyn Graphics) -> graphics::Result<()>;
}
