use std::collections::HashMap;

use crate::coords::Rect;
use crate::graphics::{Graphics, GraphicsError, Image, Result};
use crate::sprite::Sprite;

/// Registry that owns the game's loaded images.
///
/// Images are loaded once through [`Graphics::new_image`] and cached by name;
/// sprites handed out by the manager share the cached handle. Dropping or
/// clearing the manager releases its references, but sprites still holding a
/// clone keep their pixels alive.
#[derive(Debug, Default)]
pub struct ResourceManager {
    images: HashMap<String, Image>,
}

impl ResourceManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `name` through `g`, or returns the cached handle if it was loaded
    /// before.
    ///
    /// A failed load is not cached; the caller decides whether to skip,
    /// substitute or abort.
    pub fn load(&mut self, g: &mut dyn Graphics, name: &str) -> Result<Image> {
        if let Some(image) = self.images.get(name) {
            return Ok(image.clone());
        }

        let image = g.new_image(name).inspect_err(|e| log::warn!("{e}"))?;
        log::debug!("loaded {name:?} ({}x{})", image.width(), image.height());

        self.images.insert(name.to_string(), image.clone());
        Ok(image)
    }

    /// Loads every name in order, stopping at the first failure.
    pub fn load_all<'n, I>(&mut self, g: &mut dyn Graphics, names: I) -> Result<()>
    where
        I: IntoIterator<Item = &'n str>,
    {
        for name in names {
            self.load(g, name)?;
        }
        log::info!("{} image(s) resident", self.images.len());
        Ok(())
    }

    /// A previously loaded image.
    pub fn image(&self, name: &str) -> Option<&Image> {
        self.images.get(name)
    }

    /// Sprite over the crop `rect` of a loaded image.
    ///
    /// Fails with [`GraphicsError::ResourceNotFound`] if `name` was never
    /// loaded and [`GraphicsError::InvalidRegion`] if `rect` does not fit.
    pub fn sprite(&self, name: &str, rect: Rect) -> Result<Sprite> {
        Sprite::new(self.require(name)?.clone(), rect)
    }

    /// Sprite over the whole of a loaded image.
    pub fn sprite_full(&self, name: &str) -> Result<Sprite> {
        Sprite::full(self.require(name)?.clone())
    }

    /// Every frame of a loaded sheet laid out as `columns`×`rows`, row-major.
    pub fn sprite_sheet(&self, name: &str, columns: u32, rows: u32) -> Result<Vec<Sprite>> {
        let image = self.require(name)?;
        (0..columns.saturating_mul(rows).max(1))
            .map(|i| Sprite::from_grid(image.clone(), columns, rows, i))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Drops the registry's references to every image.
    pub fn clear(&mut self) {
        self.images.clear();
    }

    fn require(&self, name: &str) -> Result<&Image> {
        self.images
            .get(name)
            .ok_or_else(|| GraphicsError::not_found(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::paint::Color;
    use crate::resources::MemorySource;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let buf = image::RgbaImage::from_pixel(width, height, image::Rgba([255, 255, 255, 255]));
        let mut out = std::io::Cursor::new(Vec::new());
        buf.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    fn canvas() -> Canvas {
        let assets = MemorySource::new()
            .with("player.png", png_bytes(64, 64))
            .with("arrows.png", png_bytes(128, 64))
            .with("readme.txt", b"hello".to_vec());
        Canvas::new(800, 600, Box::new(assets))
    }

    // ── load ──────────────────────────────────────────────────────────────

    #[test]
    fn load_caches_by_name() {
        let mut g = canvas();
        let mut rm = ResourceManager::new();
        let a = rm.load(&mut g, "player.png").unwrap();
        let b = rm.load(&mut g, "player.png").unwrap();
        assert!(a.ptr_eq(&b));
        assert_eq!(rm.len(), 1);
    }

    #[test]
    fn failed_load_is_not_cached() {
        let mut g = canvas();
        let mut rm = ResourceManager::new();
        assert!(matches!(
            rm.load(&mut g, "ghost.png"),
            Err(GraphicsError::ResourceNotFound { .. })
        ));
        assert!(matches!(rm.load(&mut g, "readme.txt"), Err(GraphicsError::DecodeError { .. })));
        assert!(rm.is_empty());
    }

    #[test]
    fn load_all_stops_at_first_failure() {
        let mut g = canvas();
        let mut rm = ResourceManager::new();
        let err = rm
            .load_all(&mut g, ["player.png", "ghost.png", "arrows.png"])
            .unwrap_err();
        assert_eq!(err, GraphicsError::ResourceNotFound { name: "ghost.png".into() });
        assert!(rm.image("player.png").is_some());
        assert!(rm.image("arrows.png").is_none());
    }

    // ── sprites ───────────────────────────────────────────────────────────

    #[test]
    fn sprite_requires_loaded_image() {
        let rm = ResourceManager::new();
        assert!(matches!(
            rm.sprite_full("player.png"),
            Err(GraphicsError::ResourceNotFound { .. })
        ));
    }

    #[test]
    fn sprite_shares_cached_image() {
        let mut g = canvas();
        let mut rm = ResourceManager::new();
        rm.load(&mut g, "player.png").unwrap();

        let s = rm.sprite("player.png", Rect::new(0, 0, 32, 32)).unwrap();
        assert!(s.image().ptr_eq(rm.image("player.png").unwrap()));
        assert!(rm.sprite("player.png", Rect::new(40, 40, 32, 32)).is_err());
    }

    #[test]
    fn sprite_sheet_splits_frames() {
        let mut g = canvas();
        let mut rm = ResourceManager::new();
        rm.load(&mut g, "arrows.png").unwrap();

        let frames = rm.sprite_sheet("arrows.png", 2, 1).unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].rect(), Rect::new(64, 0, 64, 64));
        assert!(rm.sprite_sheet("arrows.png", 0, 1).is_err());
    }

    #[test]
    fn sprites_outlive_clear() {
        let mut g = canvas();
        let mut rm = ResourceManager::new();
        rm.load(&mut g, "player.png").unwrap();
        let s = rm.sprite_full("player.png").unwrap();
        rm.clear();
        assert!(rm.is_empty());
        assert_eq!(s.image().pixel(0, 0), Some(Color::WHITE));
    }
}
