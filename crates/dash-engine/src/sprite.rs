//! Image + crop pairing that knows how to draw itself.
//!
//! A sprite holds a shared [`Image`] handle and a validated source [`Rect`].
//! It never holds a surface: the [`Graphics`] to draw on is passed per call,
//! so one sprite can be drawn on any surface, any number of times per frame,
//! at any alpha.

use std::fmt;

use crate::coords::Rect;
use crate::graphics::{Graphics, GraphicsError, Image, Result};

/// Axis selector for [`Sprite::draw_centered_axis`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl TryFrom<i32> for Axis {
    type Error = GraphicsError;

    /// `0 => X`, `1 => Y`; anything else is [`GraphicsError::InvalidAxis`].
    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            other => Err(GraphicsError::InvalidAxis(other)),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
        })
    }
}

/// Drawable pairing of one image and one source crop.
///
/// The pairing is checked once at construction and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Sprite {
    image: Image,
    rect: Rect,
}

impl Sprite {
    /// Pairs `image` with the crop `rect`.
    ///
    /// Fails with [`GraphicsError::InvalidRegion`] unless `rect` lies fully
    /// inside the image.
    pub fn new(image: Image, rect: Rect) -> Result<Self> {
        image.check_region(rect)?;
        Ok(Self { image, rect })
    }

    /// Sprite covering the whole image.
    ///
    /// Fails with [`GraphicsError::InvalidRegion`] for an image with no pixels.
    pub fn full(image: Image) -> Result<Self> {
        let rect = image.bounds();
        Self::new(image, rect)
    }

    /// Cell `index` (row-major) of a sheet laid out as `columns`×`rows` equal
    /// frames.
    ///
    /// An invalid grid or index fails with [`GraphicsError::InvalidRegion`]
    /// naming the cell that was asked for.
    pub fn from_grid(image: Image, columns: u32, rows: u32, index: u32) -> Result<Self> {
        let bounds = image.bounds();
        match bounds.grid_cell(columns, rows, index) {
            Some(rect) => Self::new(image, rect),
            None => Err(GraphicsError::InvalidRegion {
                rect: bounds.grid_slot(columns, rows, index),
                image_width: image.width(),
                image_height: image.height(),
            }),
        }
    }

    /// Draws the crop with its top-left at `(x, y)`.
    pub fn draw(&self, g: &mut dyn Graphics, x: i32, y: i32, alpha: f32) -> Result<()> {
        g.draw_image(&self.image, self.rect, x, y, alpha)
    }

    /// Draws the crop stretched to fill `dest`.
    pub fn draw_scaled(&self, g: &mut dyn Graphics, dest: Rect, alpha: f32) -> Result<()> {
        g.draw_image_scaled(&self.image, self.rect, dest, alpha)
    }

    /// Draws the crop centered on the surface.
    pub fn draw_centered(&self, g: &mut dyn Graphics, alpha: f32) -> Result<()> {
        g.draw_image_centered(&self.image, self.rect, alpha)
    }

    /// Centers the crop on `pos` along one axis; the other axis stays at `0`.
    ///
    /// `axis` is either an [`Axis`] or a raw `i32` selector (`0` = X, `1` = Y).
    /// A raw value outside that range fails with
    /// [`GraphicsError::InvalidAxis`] and nothing is drawn.
    pub fn draw_centered_axis<A>(
        &self,
        g: &mut dyn Graphics,
        pos: i32,
        axis: A,
        alpha: f32,
    ) -> Result<()>
    where
        A: TryInto<Axis>,
        GraphicsError: From<A::Error>,
    {
        match axis.try_into()? {
            Axis::X => g.draw_image_centered_axis_x(&self.image, self.rect, pos, alpha),
            Axis::Y => g.draw_image_centered_axis_y(&self.image, self.rect, pos, alpha),
        }
    }

    /// The shared image handle.
    #[inline]
    pub fn image(&self) -> &Image {
        &self.image
    }

    /// The source crop (a copy).
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::testing::{Call, Recorder};
    use crate::paint::Color;

    fn sheet() -> Image {
        Image::solid(128, 64, Color::WHITE)
    }

    fn player() -> Sprite {
        Sprite::new(Image::solid(64, 64, Color::WHITE), Rect::new(0, 0, 64, 64)).unwrap()
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_accepts_contained_rect() {
        let s = Sprite::new(sheet(), Rect::new(64, 0, 64, 64)).unwrap();
        assert_eq!(s.rect(), Rect::new(64, 0, 64, 64));
    }

    #[test]
    fn new_rejects_rect_past_image_edge() {
        let err = Sprite::new(sheet(), Rect::new(96, 0, 64, 64)).unwrap_err();
        assert_eq!(
            err,
            GraphicsError::InvalidRegion {
                rect: Rect::new(96, 0, 64, 64),
                image_width: 128,
                image_height: 64,
            }
        );
    }

    #[test]
    fn new_rejects_empty_rect() {
        assert!(Sprite::new(sheet(), Rect::new(0, 0, 0, 64)).is_err());
    }

    #[test]
    fn full_covers_image() {
        assert_eq!(Sprite::full(sheet()).unwrap().rect(), Rect::new(0, 0, 128, 64));
    }

    #[test]
    fn full_rejects_image_without_pixels() {
        let empty = Image::from_pixels(0, 5, vec![]).unwrap();
        assert_eq!(
            Sprite::full(empty).unwrap_err(),
            GraphicsError::InvalidRegion {
                rect: Rect::new(0, 0, 0, 5),
                image_width: 0,
                image_height: 5,
            }
        );
    }

    #[test]
    fn from_grid_picks_frame() {
        let s = Sprite::from_grid(sheet(), 2, 1, 1).unwrap();
        assert_eq!(s.rect(), Rect::new(64, 0, 64, 64));
        assert!(Sprite::from_grid(sheet(), 2, 1, 2).is_err());
    }

    #[test]
    fn from_grid_error_names_requested_cell() {
        let err = Sprite::from_grid(sheet(), 2, 1, 5).unwrap_err();
        assert_eq!(
            err,
            GraphicsError::InvalidRegion {
                rect: Rect::new(64, 128, 64, 64),
                image_width: 128,
                image_height: 64,
            }
        );
        assert_eq!(
            err.to_string(),
            "source rect (64, 128, 64x64) is not inside a 128x64 image"
        );
    }

    #[test]
    fn from_grid_zero_columns_reports_empty_cell() {
        let err = Sprite::from_grid(sheet(), 0, 1, 0).unwrap_err();
        assert!(matches!(err, GraphicsError::InvalidRegion { rect, .. } if rect.is_empty()));
    }

    #[test]
    fn sprite_shares_image() {
        let img = sheet();
        let a = Sprite::full(img.clone()).unwrap();
        let b = Sprite::new(img.clone(), Rect::new(0, 0, 8, 8)).unwrap();
        assert!(a.image().ptr_eq(&img));
        assert!(b.image().ptr_eq(a.image()));
    }

    // ── delegation ────────────────────────────────────────────────────────

    #[test]
    fn draw_delegates_to_draw_image() {
        let mut g = Recorder::new(800, 600);
        player().draw(&mut g, 100, 100, 1.0).unwrap();
        assert_eq!(
            g.calls,
            vec![Call::DrawImage { src: Rect::new(0, 0, 64, 64), x: 100, y: 100, alpha: 1.0 }]
        );
    }

    #[test]
    fn draw_scaled_delegates_to_draw_image_scaled() {
        let mut g = Recorder::new(800, 600);
        let dest = Rect::new(10, 20, 128, 32);
        player().draw_scaled(&mut g, dest, 0.5).unwrap();
        assert_eq!(
            g.calls,
            vec![Call::DrawImageScaled { src: Rect::new(0, 0, 64, 64), dest, alpha: 0.5 }]
        );
    }

    #[test]
    fn draw_centered_delegates() {
        let mut g = Recorder::new(800, 600);
        player().draw_centered(&mut g, 0.25).unwrap();
        assert_eq!(g.calls, vec![Call::Centered { src: Rect::new(0, 0, 64, 64), alpha: 0.25 }]);
    }

    #[test]
    fn draw_centered_axis_dispatches_by_enum() {
        let mut g = Recorder::new(800, 600);
        let s = player();
        s.draw_centered_axis(&mut g, 400, Axis::X, 1.0).unwrap();
        s.draw_centered_axis(&mut g, 300, Axis::Y, 1.0).unwrap();
        assert_eq!(
            g.calls,
            vec![
                Call::CenteredAxisX { src: s.rect(), pos: 400, alpha: 1.0 },
                Call::CenteredAxisY { src: s.rect(), pos: 300, alpha: 1.0 },
            ]
        );
    }

    #[test]
    fn draw_centered_axis_accepts_raw_selector() {
        let mut g = Recorder::new(800, 600);
        let s = player();
        s.draw_centered_axis(&mut g, 400, 0i32, 1.0).unwrap();
        s.draw_centered_axis(&mut g, 300, 1i32, 1.0).unwrap();
        assert!(matches!(g.calls[0], Call::CenteredAxisX { pos: 400, .. }));
        assert!(matches!(g.calls[1], Call::CenteredAxisY { pos: 300, .. }));
    }

    #[test]
    fn invalid_axis_fails_without_drawing() {
        let mut g = Recorder::new(800, 600);
        let err = player().draw_centered_axis(&mut g, 400, 2i32, 1.0).unwrap_err();
        assert_eq!(err, GraphicsError::InvalidAxis(2));
        let err = player().draw_centered_axis(&mut g, 400, -1i32, 1.0).unwrap_err();
        assert_eq!(err, GraphicsError::InvalidAxis(-1));
        assert!(g.calls.is_empty());
    }

    #[test]
    fn drawing_does_not_change_sprite() {
        let mut g = Recorder::new(800, 600);
        let s = player();
        let before = s.rect();
        s.draw(&mut g, 1, 2, 1.0).unwrap();
        s.draw_centered(&mut g, 1.0).unwrap();
        assert_eq!(s.rect(), before);
    }
}
