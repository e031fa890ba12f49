use dash_engine::canvas::Canvas;
use dash_engine::core::Game;
use dash_engine::graphics::Graphics;
use dash_engine::input::{FrameInput, Input};

/// [`Game`] handle of the desktop backend: the software canvas the game draws
/// on and the input collected from the window.
pub struct DesktopGame {
    pub(crate) canvas: Canvas,
    pub(crate) input: FrameInput,
}

impl DesktopGame {
    pub(crate) fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            input: FrameInput::new(),
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}

impl Game for DesktopGame {
    fn graphics(&mut self) -> &mut dyn Graphics {
        &mut self.canvas
    }

    fn input(&mut self) -> &mut dyn Input {
        &mut self.input
    }
}
