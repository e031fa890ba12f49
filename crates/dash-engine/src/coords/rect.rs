use super::Point;

/// Axis-aligned integer rectangle in pixels (top-left origin).
///
/// Serves two roles:
/// - *source rect*: a crop window inside an image. Must satisfy [`fits_within`]
///   against that image.
/// - *destination rect*: a placement window on a surface. Unbounded; may lie
///   partly or fully off-surface.
///
/// [`fits_within`]: Rect::fits_within
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// A `width`×`height` rect anchored at the origin.
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    #[inline]
    pub fn origin(self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Same size, moved to `(x, y)`.
    #[inline]
    pub fn with_origin(self, x: i32, y: i32) -> Self {
        Self { x, y, ..self }
    }

    /// Exclusive right edge. Widened so `x + width` cannot overflow.
    #[inline]
    pub fn right(self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Exclusive bottom edge.
    #[inline]
    pub fn bottom(self) -> i64 {
        self.y as i64 + self.height as i64
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `true` if this rect is a valid crop window for an image of
    /// `width`×`height` pixels: non-empty, non-negative origin and fully inside.
    #[inline]
    pub fn fits_within(self, width: u32, height: u32) -> bool {
        !self.is_empty()
            && self.x >= 0
            && self.y >= 0
            && self.right() <= width as i64
            && self.bottom() <= height as i64
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        let (px, py) = (p.x as i64, p.y as i64);
        px >= self.x as i64 && py >= self.y as i64 && px < self.right() && py < self.bottom()
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let x0 = (self.x as i64).max(other.x as i64);
        let y0 = (self.y as i64).max(other.y as i64);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());

        if x1 <= x0 || y1 <= y0 {
            return None;
        }

        // Both corners lie inside `self`, so the narrowing casts are lossless.
        Some(Rect::new(x0 as i32, y0 as i32, (x1 - x0) as u32, (y1 - y0) as u32))
    }

    /// Splits this rect into a `columns`×`rows` grid and returns cell `index`
    /// (row-major). Cells use floor division; leftover pixels on the right and
    /// bottom edges belong to no cell.
    ///
    /// Returns `None` for a zero-sized grid, an out-of-range index, or cells
    /// that would be empty.
    pub fn grid_cell(self, columns: u32, rows: u32, index: u32) -> Option<Rect> {
        if columns == 0 || rows == 0 || index >= columns.checked_mul(rows)? {
            return None;
        }

        let cell = self.grid_slot(columns, rows, index);
        (!cell.is_empty()).then_some(cell)
    }

    /// Where cell `index` of a `columns`×`rows` grid would sit, with no range
    /// checks. A zero grid dimension gives a zero-sized cell; positions past
    /// `i32` saturate.
    pub fn grid_slot(self, columns: u32, rows: u32, index: u32) -> Rect {
        let cell_w = self.width.checked_div(columns).unwrap_or(0);
        let cell_h = self.height.checked_div(rows).unwrap_or(0);
        let col = index.checked_rem(columns).unwrap_or(0);
        let row = index.checked_div(columns).unwrap_or(0);

        let x = self.x as i64 + col as i64 * cell_w as i64;
        let y = self.y as i64 + row as i64 * cell_h as i64;
        Rect::new(saturate(x), saturate(y), cell_w, cell_h)
    }
}

#[inline]
fn saturate(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: i32, y: i32, w: u32, h: u32) -> Rect { Rect::new(x, y, w, h) }

    // ── fits_within ───────────────────────────────────────────────────────

    #[test]
    fn full_frame_fits() {
        assert!(r(0, 0, 64, 64).fits_within(64, 64));
    }

    #[test]
    fn interior_crop_fits() {
        assert!(r(16, 8, 32, 32).fits_within(64, 64));
    }

    #[test]
    fn crop_past_right_edge_does_not_fit() {
        assert!(!r(40, 0, 32, 32).fits_within(64, 64));
    }

    #[test]
    fn crop_past_bottom_edge_does_not_fit() {
        assert!(!r(0, 33, 32, 32).fits_within(64, 64));
    }

    #[test]
    fn negative_origin_does_not_fit() {
        assert!(!r(-1, 0, 8, 8).fits_within(64, 64));
        assert!(!r(0, -1, 8, 8).fits_within(64, 64));
    }

    #[test]
    fn empty_crop_does_not_fit() {
        assert!(!r(0, 0, 0, 8).fits_within(64, 64));
        assert!(!r(0, 0, 8, 0).fits_within(64, 64));
    }

    #[test]
    fn huge_crop_does_not_overflow() {
        assert!(!r(i32::MAX, 0, u32::MAX, 1).fits_within(u32::MAX, 1));
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0, 0, 10, 10).contains(Point::new(0, 0)));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0, 0, 10, 10).contains(Point::new(10, 10)));
        assert!(r(0, 0, 10, 10).contains(Point::new(9, 9)));
    }

    #[test]
    fn contains_negative_origin() {
        assert!(r(-5, -5, 10, 10).contains(Point::new(-5, 4)));
        assert!(!r(-5, -5, 10, 10).contains(Point::new(-6, 0)));
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlapping() {
        let i = r(0, 0, 10, 10).intersect(r(5, 5, 10, 10)).unwrap();
        assert_eq!(i, r(5, 5, 5, 5));
    }

    #[test]
    fn intersect_clips_offscreen_part() {
        let surface = r(0, 0, 800, 600);
        let i = surface.intersect(r(-20, 590, 64, 64)).unwrap();
        assert_eq!(i, r(0, 590, 44, 10));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        assert!(r(0, 0, 10, 10).intersect(r(10, 0, 10, 10)).is_none());
    }

    #[test]
    fn intersect_disjoint_returns_none() {
        assert!(r(0, 0, 5, 5).intersect(r(20, 20, 5, 5)).is_none());
    }

    // ── grid_cell ─────────────────────────────────────────────────────────

    #[test]
    fn grid_cell_row_major() {
        let sheet = r(0, 0, 128, 64);
        assert_eq!(sheet.grid_cell(2, 1, 0), Some(r(0, 0, 64, 64)));
        assert_eq!(sheet.grid_cell(2, 1, 1), Some(r(64, 0, 64, 64)));
        assert_eq!(sheet.grid_cell(2, 2, 3), Some(r(64, 32, 64, 32)));
    }

    #[test]
    fn grid_cell_out_of_range() {
        assert_eq!(r(0, 0, 128, 64).grid_cell(2, 1, 2), None);
        assert_eq!(r(0, 0, 128, 64).grid_cell(0, 1, 0), None);
    }

    #[test]
    fn grid_slot_ignores_range() {
        let sheet = r(0, 0, 128, 64);
        assert_eq!(sheet.grid_slot(2, 1, 5), r(64, 128, 64, 64));
        assert_eq!(sheet.grid_slot(0, 1, 3), r(0, 0, 0, 64));
        assert_eq!(sheet.grid_slot(1, 1, u32::MAX), r(0, i32::MAX, 128, 64));
    }

    #[test]
    fn grid_cell_too_small_returns_none() {
        assert_eq!(r(0, 0, 3, 3).grid_cell(4, 1, 0), None);
    }
}
