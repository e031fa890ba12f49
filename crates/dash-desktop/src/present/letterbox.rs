use dash_engine::coords::{Point, Size};

/// Placement of the canvas inside the window, in window physical pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Letterbox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    canvas: Size,
}

impl Letterbox {
    /// Largest rectangle with the canvas' aspect ratio that fits `window`,
    /// centered. Scale may be fractional.
    ///
    /// `None` when either size is empty (nothing to present).
    pub fn fit(canvas: Size, window: Size) -> Option<Self> {
        if canvas.is_empty() || window.is_empty() {
            return None;
        }

        let sx = window.width as f64 / canvas.width as f64;
        let sy = window.height as f64 / canvas.height as f64;
        let scale = sx.min(sy);

        let width = ((canvas.width as f64 * scale).round() as u32).clamp(1, window.width);
        let height = ((canvas.height as f64 * scale).round() as u32).clamp(1, window.height);

        Some(Self {
            x: (window.width - width) / 2,
            y: (window.height - height) / 2,
            width,
            height,
            canvas,
        })
    }

    /// Maps a window position to the canvas pixel under it.
    ///
    /// `None` over the bars or outside the window.
    pub fn to_canvas(&self, wx: f64, wy: f64) -> Option<Point> {
        let rx = wx - self.x as f64;
        let ry = wy - self.y as f64;
        if rx < 0.0 || ry < 0.0 {
            return None;
        }

        let cx = (rx * self.canvas.width as f64 / self.width as f64).floor();
        let cy = (ry * self.canvas.height as f64 / self.height as f64).floor();
        if cx >= self.canvas.width as f64 || cy >= self.canvas.height as f64 {
            return None;
        }

        Some(Point::new(cx as i32, cy as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: Size = Size::new(800, 600);

    fn fit(w: u32, h: u32) -> Letterbox {
        Letterbox::fit(CANVAS, Size::new(w, h)).unwrap()
    }

    // ── fit ───────────────────────────────────────────────────────────────

    #[test]
    fn same_size_fills_window() {
        let lb = fit(800, 600);
        assert_eq!((lb.x, lb.y, lb.width, lb.height), (0, 0, 800, 600));
    }

    #[test]
    fn wide_window_gets_pillarbox() {
        let lb = fit(1600, 900);
        assert_eq!((lb.x, lb.y, lb.width, lb.height), (200, 0, 1200, 900));
    }

    #[test]
    fn tall_window_gets_letterbox() {
        let lb = fit(800, 800);
        assert_eq!((lb.x, lb.y, lb.width, lb.height), (0, 100, 800, 600));
    }

    #[test]
    fn small_window_scales_down() {
        let lb = fit(400, 300);
        assert_eq!((lb.x, lb.y, lb.width, lb.height), (0, 0, 400, 300));
    }

    #[test]
    fn empty_sizes_have_no_letterbox() {
        assert!(Letterbox::fit(CANVAS, Size::new(0, 600)).is_none());
        assert!(Letterbox::fit(Size::new(0, 0), Size::new(800, 600)).is_none());
    }

    // ── mapping ───────────────────────────────────────────────────────────

    #[test]
    fn maps_scaled_area_to_canvas_pixels() {
        let lb = fit(1600, 900);
        assert_eq!(lb.to_canvas(200.0, 0.0), Some(Point::new(0, 0)));
        assert_eq!(lb.to_canvas(800.0, 450.0), Some(Point::new(400, 300)));
        assert_eq!(lb.to_canvas(1399.9, 899.0), Some(Point::new(799, 599)));
    }

    #[test]
    fn bars_map_to_nothing() {
        let lb = fit(1600, 900);
        assert_eq!(lb.to_canvas(199.0, 10.0), None);
        assert_eq!(lb.to_canvas(1400.0, 10.0), None);
        assert_eq!(lb.to_canvas(-5.0, 10.0), None);
    }
}
