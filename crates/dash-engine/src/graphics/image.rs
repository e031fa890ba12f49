use std::fmt;
use std::sync::Arc;

use crate::coords::{Rect, Size};
use crate::paint::Color;

use super::GraphicsError;

/// Loaded, immutable pixel buffer.
///
/// `Image` is a shared handle: cloning bumps a reference count and never copies
/// pixels. The registry that loaded it (usually a
/// [`ResourceManager`](crate::resources::ResourceManager)) and any number of
/// sprites may hold clones; pixels are freed when the last handle drops.
#[derive(Clone)]
pub struct Image {
    inner: Arc<ImageData>,
}

struct ImageData {
    name: Option<String>,
    size: Size,
    /// Row-major, `size.width * size.height` entries.
    pixels: Vec<Color>,
}

impl Image {
    /// Wraps an existing pixel buffer.
    ///
    /// Returns `None` if `pixels.len()` is not `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Option<Self> {
        let size = Size::new(width, height);
        if pixels.len() != size.area() {
            return None;
        }
        Some(Self::build(None, size, pixels))
    }

    /// Wraps tightly packed RGBA8 bytes.
    ///
    /// Returns `None` if `bytes.len()` is not `width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, bytes: &[u8]) -> Option<Self> {
        if bytes.len() != Size::new(width, height).area() * 4 {
            return None;
        }
        let pixels = bytemuck::cast_slice::<u8, Color>(bytes).to_vec();
        Self::from_pixels(width, height, pixels)
    }

    /// A `width`×`height` image filled with `color`.
    pub fn solid(width: u32, height: u32, color: Color) -> Self {
        let size = Size::new(width, height);
        Self::build(None, size, vec![color; size.area()])
    }

    /// Decodes an encoded image (PNG, JPEG or BMP) loaded under `name`.
    ///
    /// The format is sniffed from the bytes, not from the name.
    pub fn decode(name: &str, bytes: &[u8]) -> Result<Self, GraphicsError> {
        let decoded = image::load_from_memory(bytes)
            .map_err(|e| GraphicsError::decode(name, e))?
            .to_rgba8();

        let (width, height) = decoded.dimensions();
        if width == 0 || height == 0 {
            return Err(GraphicsError::decode(name, "image has no pixels"));
        }

        let pixels = bytemuck::cast_slice::<u8, Color>(decoded.as_raw()).to_vec();
        Ok(Self::build(Some(name.to_string()), Size::new(width, height), pixels))
    }

    fn build(name: Option<String>, size: Size, pixels: Vec<Color>) -> Self {
        Self { inner: Arc::new(ImageData { name, size, pixels }) }
    }

    /// Asset name this image was loaded from, if any.
    pub fn name(&self) -> Option<&str> {
        self.inner.name.as_deref()
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.size.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.size.height
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.inner.size
    }

    /// The whole image as a source rect.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.inner.size.to_rect()
    }

    /// Row-major pixels.
    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.inner.pixels
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.inner
            .pixels
            .get(y as usize * self.width() as usize + x as usize)
            .copied()
    }

    /// Checks `rect` against this image's bounds.
    pub fn check_region(&self, rect: Rect) -> Result<(), GraphicsError> {
        if rect.fits_within(self.width(), self.height()) {
            Ok(())
        } else {
            Err(GraphicsError::InvalidRegion {
                rect,
                image_width: self.width(),
                image_height: self.height(),
            })
        }
    }

    /// Returns `true` if both handles share the same pixel buffer.
    #[inline]
    pub fn ptr_eq(&self, other: &Image) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("name", &self.inner.name)
            .field("width", &self.inner.size.width)
            .field("height", &self.inner.size.height)
            .finish()
    }
}
