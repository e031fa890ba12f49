//! The drawing-surface capability.
//!
//! `Graphics` is the only gateway through which pixels reach the screen. Game
//! logic and [`Sprite`](crate::sprite::Sprite) are written against the trait;
//! backends (the software [`Canvas`](crate::canvas::Canvas), a GPU surface,
//! a recording double in tests) implement it.
//!
//! Contract shared by every implementation:
//! - coordinates are surface pixels, origin top-left, +Y down
//! - draws land in call order; later draws composite over earlier ones
//! - alpha is clamped into `[0, 1]`, never rejected
//! - a source rect that does not fit its image fails with
//!   [`GraphicsError::InvalidRegion`] before anything is drawn
//! - anything outside the surface is clipped silently

mod error;
mod image;
pub mod placement;

#[cfg(test)]
pub(crate) mod testing;

pub use self::error::GraphicsError;
pub use self::image::Image;

use crate::coords::{Rect, Size};
use crate::paint::Color;

pub type Result<T, E = GraphicsError> = std::result::Result<T, E>;

/// Drawable surface for the current frame.
///
/// Only [`draw_image_scaled`](Graphics::draw_image_scaled) and the size
/// queries carry backend-specific work. Every other draw is a provided method
/// that reduces to it, so all backends agree on placement and on the
/// unscaled/scaled equivalence.
pub trait Graphics {
    /// Resolves a named asset into a loaded image.
    ///
    /// Fails with [`GraphicsError::ResourceNotFound`] if the asset store has no
    /// such name and [`GraphicsError::DecodeError`] if it does but the bytes are
    /// not an image.
    fn new_image(&mut self, name: &str) -> Result<Image>;

    /// Fills the whole surface with `color`, discarding prior contents.
    ///
    /// Callers clear at most once per frame, before drawing.
    fn clear(&mut self, color: Color);

    /// Stretches the crop `src` of `image` to exactly fill `dest`.
    ///
    /// Implementations sample nearest-neighbour: destination pixel
    /// `(dest.x + i, dest.y + j)` takes source pixel
    /// `(src.x + ⌊i·src.w/dest.w⌋, src.y + ⌊j·src.h/dest.h⌋)`.
    /// An empty `dest` draws nothing.
    fn draw_image_scaled(&mut self, image: &Image, src: Rect, dest: Rect, alpha: f32) -> Result<()>;

    /// Current surface width in pixels.
    fn width(&self) -> u32;

    /// Current surface height in pixels.
    fn height(&self) -> u32;

    /// Current surface size. Re-query every frame; it may change on resize.
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Copies the crop `src` of `image` so its top-left lands on `(x, y)`.
    fn draw_image(&mut self, image: &Image, src: Rect, x: i32, y: i32, alpha: f32) -> Result<()> {
        let dest = Rect::new(x, y, src.width, src.height);
        self.draw_image_scaled(image, src, dest, alpha)
    }

    /// Centers the crop on the surface on both axes.
    fn draw_image_centered(&mut self, image: &Image, src: Rect, alpha: f32) -> Result<()> {
        let at = placement::centered(self.size(), Size::new(src.width, src.height));
        self.draw_image(image, src, at.x, at.y, alpha)
    }

    /// Puts the crop's horizontal midpoint on screen-x `pos`, top edge at `y = 0`.
    fn draw_image_centered_axis_x(
        &mut self,
        image: &Image,
        src: Rect,
        pos: i32,
        alpha: f32,
    ) -> Result<()> {
        let at = placement::centered_on_x(pos, Size::new(src.width, src.height));
        self.draw_image(image, src, at.x, at.y, alpha)
    }

    /// Puts the crop's vertical midpoint on screen-y `pos`, left edge at `x = 0`.
    fn draw_image_centered_axis_y(
        &mut self,
        image: &Image,
        src: Rect,
        pos: i32,
        alpha: f32,
    ) -> Result<()> {
        let at = placement::centered_on_y(pos, Size::new(src.width, src.height));
        self.draw_image(image, src, at.x, at.y, alpha)
    }
}
