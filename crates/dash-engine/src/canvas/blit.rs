use crate::coords::Rect;
use crate::graphics::Image;
use crate::paint::{blend_over, Color};

/// Nearest-neighbour, alpha-blended copy of `src` (inside `image`) onto the
/// `dest` placement, touching only the pixels in `visible`.
///
/// Preconditions, checked by the caller:
/// - `src` fits inside `image`
/// - `dest` is non-empty and `visible` is `dest` clipped to the target
/// - `alpha` is already clamped
pub(super) fn blit_scaled(
    target: &mut [Color],
    target_width: u32,
    image: &Image,
    src: Rect,
    dest: Rect,
    visible: Rect,
    alpha: f32,
) {
    let pixels = image.pixels();
    let image_w = image.width() as i64;
    let target_w = target_width as i64;

    let (src_x, src_y) = (src.x as i64, src.y as i64);
    let (src_w, src_h) = (src.width as i64, src.height as i64);
    let (dest_w, dest_h) = (dest.width as i64, dest.height as i64);

    for vy in visible.y as i64..visible.bottom() {
        let sy = src_y + (vy - dest.y as i64) * src_h / dest_h;
        let src_row = (sy * image_w) as usize;
        let dst_row = (vy * target_w) as usize;

        for vx in visible.x as i64..visible.right() {
            let sx = src_x + (vx - dest.x as i64) * src_w / dest_w;
            let s = pixels[src_row + sx as usize];
            let d = &mut target[dst_row + vx as usize];
            *d = blend_over(*d, s, alpha);
        }
    }
}
