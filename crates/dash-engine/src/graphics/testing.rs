//! `Graphics` doubles for unit tests.

use crate::coords::{Rect, Size};
use crate::paint::Color;

use super::{Graphics, GraphicsError, Image, Result};

/// One observed call, named after the trait method that received it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Clear(Color),
    DrawImage { src: Rect, x: i32, y: i32, alpha: f32 },
    DrawImageScaled { src: Rect, dest: Rect, alpha: f32 },
    Centered { src: Rect, alpha: f32 },
    CenteredAxisX { src: Rect, pos: i32, alpha: f32 },
    CenteredAxisY { src: Rect, pos: i32, alpha: f32 },
}

/// Overrides every method so tests can see which primitive a caller picked.
pub(crate) struct Recorder {
    pub size: Size,
    pub calls: Vec<Call>,
}

impl Recorder {
    pub fn new(width: u32, height: u32) -> Self {
        Self { size: Size::new(width, height), calls: Vec::new() }
    }
}

impl Graphics for Recorder {
    fn new_image(&mut self, name: &str) -> Result<Image> {
        Err(GraphicsError::not_found(name))
    }

    fn clear(&mut self, color: Color) {
        self.calls.push(Call::Clear(color));
    }

    fn draw_image_scaled(&mut self, _image: &Image, src: Rect, dest: Rect, alpha: f32) -> Result<()> {
        self.calls.push(Call::DrawImageScaled { src, dest, alpha });
        Ok(())
    }

    fn width(&self) -> u32 {
        self.size.width
    }

    fn height(&self) -> u32 {
        self.size.height
    }

    fn draw_image(&mut self, _image: &Image, src: Rect, x: i32, y: i32, alpha: f32) -> Result<()> {
        self.calls.push(Call::DrawImage { src, x, y, alpha });
        Ok(())
    }

    fn draw_image_centered(&mut self, _image: &Image, src: Rect, alpha: f32) -> Result<()> {
        self.calls.push(Call::Centered { src, alpha });
        Ok(())
    }

    fn draw_image_centered_axis_x(&mut self, _image: &Image, src: Rect, pos: i32, alpha: f32) -> Result<()> {
        self.calls.push(Call::CenteredAxisX { src, pos, alpha });
        Ok(())
    }

    fn draw_image_centered_axis_y(&mut self, _image: &Image, src: Rect, pos: i32, alpha: f32) -> Result<()> {
        self.calls.push(Call::CenteredAxisY { src, pos, alpha });
        Ok(())
    }
}

/// Implements only the required methods, so every provided method is
/// observed as the `dest` rect it finally resolves to.
pub(crate) struct DestLog {
    pub size: Size,
    pub dests: Vec<Rect>,
}

impl DestLog {
    pub fn new(width: u32, height: u32) -> Self {
        Self { size: Size::new(width, height), dests: Vec::new() }
    }
}

impl Graphics for DestLog {
    fn new_image(&mut self, name: &str) -> Result<Image> {
        Err(GraphicsError::not_found(name))
    }

    fn clear(&mut self, _color: Color) {}

    fn draw_image_scaled(&mut self, image: &Image, src: Rect, dest: Rect, _alpha: f32) -> Result<()> {
        image.check_region(src)?;
        self.dests.push(dest);
        Ok(())
    }

    fn width(&self) -> u32 {
        self.size.width
    }

    fn height(&self) -> u32 {
        self.size.height
    }
}
