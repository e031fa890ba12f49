use super::Color;

/// Composites `src` over `dst` (source-over, straight alpha), with the
/// source's own alpha scaled by `alpha`.
///
/// `alpha` must already be in `[0, 1]` (see [`clamp_alpha`](super::clamp_alpha)).
///
/// Exact cases, relied on by callers:
/// - effective alpha `0` returns `dst` unchanged
/// - effective alpha `1` returns `src` unchanged
#[inline]
pub fn blend_over(dst: Color, src: Color, alpha: f32) -> Color {
    let sa = (src.a as f32 / 255.0) * alpha;

    if sa <= 0.0 {
        return dst;
    }
    if sa >= 1.0 {
        return src;
    }

    let da = dst.a as f32 / 255.0;
    let keep = da * (1.0 - sa);
    let out_a = sa + keep;

    let channel = |s: u8, d: u8| -> u8 {
        let v = (s as f32 * sa + d as f32 * keep) / out_a;
        v.round().clamp(0.0, 255.0) as u8
    };

    Color {
        r: channel(src.r, dst.r),
        g: channel(src.g, dst.g),
        b: channel(src.b, dst.b),
        a: (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    #[test]
    fn zero_alpha_keeps_destination() {
        assert_eq!(blend_over(BLUE, RED, 0.0), BLUE);
    }

    #[test]
    fn transparent_source_keeps_destination() {
        assert_eq!(blend_over(BLUE, Color::rgba(255, 0, 0, 0), 1.0), BLUE);
    }

    #[test]
    fn opaque_source_replaces_destination() {
        assert_eq!(blend_over(BLUE, RED, 1.0), RED);
    }

    #[test]
    fn half_alpha_over_opaque_mixes_evenly() {
        let out = blend_over(BLUE, RED, 0.5);
        assert_eq!(out, Color::rgb(128, 0, 128));
    }

    #[test]
    fn translucent_source_uses_its_own_alpha() {
        // 50% source alpha at full call alpha is the same as opaque at 0.5.
        let half_red = Color::rgba(255, 0, 0, 128);
        let a = blend_over(BLUE, half_red, 1.0);
        let b = blend_over(BLUE, RED, 128.0 / 255.0);
        assert_eq!(a, b);
    }

    #[test]
    fn over_transparent_destination_takes_source_color() {
        let out = blend_over(Color::TRANSPARENT, RED, 0.5);
        assert_eq!((out.r, out.g, out.b), (255, 0, 0));
        assert_eq!(out.a, 128);
    }
}
