use crate::coords::{Rect, Size};
use crate::graphics::{Graphics, Image, Result};
use crate::paint::{clamp_alpha, Color};
use crate::resources::AssetSource;

use super::blit;

/// CPU pixel buffer implementing [`Graphics`].
///
/// Pixels are row-major straight-alpha RGBA8. A fresh or resized canvas is
/// opaque black.
pub struct Canvas {
    size: Size,
    pixels: Vec<Color>,
    assets: Box<dyn AssetSource>,
}

impl Canvas {
    /// Creates a `width`×`height` canvas that resolves
    /// [`new_image`](Graphics::new_image) names through `assets`.
    pub fn new(width: u32, height: u32, assets: Box<dyn AssetSource>) -> Self {
        let size = Size::new(width, height);
        Self {
            size,
            pixels: vec![Color::BLACK; size.area()],
            assets,
        }
    }

    /// Reallocates the buffer for a new resolution. Contents are discarded.
    pub fn resize(&mut self, width: u32, height: u32) {
        let size = Size::new(width, height);
        if size == self.size {
            return;
        }
        log::debug!(
            "canvas resized {}x{} -> {}x{}",
            self.size.width, self.size.height, width, height
        );
        self.size = size;
        self.pixels = vec![Color::BLACK; size.area()];
    }

    /// Pixel at `(x, y)`, or `None` off-surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x as u32 >= self.size.width || y as u32 >= self.size.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.size.width as usize + x as usize)
            .copied()
    }

    /// Row-major pixels.
    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Pixels as tightly packed RGBA8 bytes, ready for a texture upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

impl Graphics for Canvas {
    fn new_image(&mut self, name: &str) -> Result<Image> {
        let bytes = self.assets.read(name)?;
        Image::decode(name, &bytes)
    }

    fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    fn draw_image_scaled(&mut self, image: &Image, src: Rect, dest: Rect, alpha: f32) -> Result<()> {
        image.check_region(src)?;

        let alpha = clamp_alpha(alpha);
        if alpha <= 0.0 || dest.is_empty() {
            return Ok(());
        }

        let Some(visible) = dest.intersect(self.size.to_rect()) else {
            return Ok(());
        };

        blit::blit_scaled(
            &mut self.pixels,
            self.size.width,
            image,
            src,
            dest,
            visible,
            alpha,
        );
        Ok(())
    }

    fn width(&self) -> u32 {
        self.size.width
    }

    fn height(&self) -> u32 {
        self.size.height
    }
}
