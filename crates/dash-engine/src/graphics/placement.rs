//! Centering math shared by every `Graphics` backend.
//!
//! All divisions round toward negative infinity, so a crop larger than the
//! surface is placed consistently (its top-left goes negative) instead of
//! drifting by one pixel depending on sign.

use crate::coords::{Point, Size};

/// Top-left that centers a `crop` on a `surface` on both axes.
#[inline]
pub fn centered(surface: Size, crop: Size) -> Point {
    Point::new(
        centered_span(surface.width, crop.width),
        centered_span(surface.height, crop.height),
    )
}

/// Top-left that puts the crop's horizontal midpoint on `pos`; y stays at `0`.
#[inline]
pub fn centered_on_x(pos: i32, crop: Size) -> Point {
    Point::new(center_on(pos, crop.width), 0)
}

/// Top-left that puts the crop's vertical midpoint on `pos`; x stays at `0`.
#[inline]
pub fn centered_on_y(pos: i32, crop: Size) -> Point {
    Point::new(0, center_on(pos, crop.height))
}

#[inline]
fn centered_span(outer: u32, inner: u32) -> i32 {
    let diff = outer as i64 - inner as i64;
    saturate(diff.div_euclid(2))
}

#[inline]
fn center_on(pos: i32, span: u32) -> i32 {
    saturate(pos as i64 - (span as i64).div_euclid(2))
}

#[inline]
fn saturate(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_on_800x600() {
        assert_eq!(centered(Size::new(800, 600), Size::new(64, 64)), Point::new(368, 268));
    }

    #[test]
    fn centered_rounds_down_on_odd_difference() {
        // (801 - 64) / 2 = 368.5 → 368
        assert_eq!(centered(Size::new(801, 601), Size::new(64, 64)), Point::new(368, 268));
    }

    #[test]
    fn centered_crop_larger_than_surface_floors() {
        // (10 - 15) / 2 = -2.5 → -3
        assert_eq!(centered(Size::new(10, 10), Size::new(15, 14)), Point::new(-3, -2));
    }

    #[test]
    fn centered_on_x_keeps_y_at_zero() {
        assert_eq!(centered_on_x(400, Size::new(64, 64)), Point::new(368, 0));
    }

    #[test]
    fn centered_on_y_keeps_x_at_zero() {
        assert_eq!(centered_on_y(300, Size::new(64, 64)), Point::new(0, 268));
    }

    #[test]
    fn odd_crop_midpoint_rounds_down() {
        // 5px wide: midpoint column is 2, so it lands exactly on pos.
        assert_eq!(centered_on_x(10, Size::new(5, 1)), Point::new(8, 0));
    }
}
