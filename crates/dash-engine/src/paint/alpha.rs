/// Normalizes a per-call blend factor into `[0, 1]`.
///
/// Out-of-range values are clamped rather than rejected. NaN counts as fully
/// transparent.
#[inline]
pub fn clamp_alpha(alpha: f32) -> f32 {
    if alpha.is_nan() {
        0.0
    } else {
        alpha.clamp(0.0, 1.0)
    }
}
