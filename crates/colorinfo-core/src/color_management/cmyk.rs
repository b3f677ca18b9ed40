//! RGB ↔ CMYK subtractive-model conversion.
//!
//! ```text
//!   K = 1 − max(R, G, B)
//!   C = (1 − R − K) / (1 − K)     when 1 − K > 1e-4, otherwise 0
//! ```
//!
//! M and Y follow C with G and B. All four are reported in percent.

use crate::color_management::rounding::round_to_places;
use crate::model::{CmykView, Rgba};

/// Below this `1 − K` the chromatic channels are pinned to zero.
const BLACK_GUARD: f64 = 1e-4;

/// Derive the CMYK view from the canonical color. Alpha is ignored.
pub fn rgb_to_cmyk(color: Rgba) -> CmykView {
    let Rgba { r, g, b, .. } = color;
    let k = 1.0 - r.max(g).max(b);
    let denominator = 1.0 - k;

    let chroma = |v: f64| {
        if denominator > BLACK_GUARD {
            (1.0 - v - k) / denominator
        } else {
            0.0
        }
    };

    let percent = |v: f64| round_to_places(v * 100.0, 2);
    CmykView {
        c: percent(chroma(r)),
        m: percent(chroma(g)),
        y: percent(chroma(b)),
        k: percent(k),
    }
}

/// Inverse of [`rgb_to_cmyk`]: `channel = (1 − C)(1 − K)`, clamped into
/// `[0, 1]`. The result is always fully opaque.
pub fn cmyk_to_rgb(cmyk: CmykView) -> Rgba {
    let key = 1.0 - cmyk.k / 100.0;
    let channel = |v: f64| ((1.0 - v / 100.0) * key).clamp(0.0, 1.0);
    Rgba::opaque(channel(cmyk.c), channel(cmyk.m), channel(cmyk.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_black_takes_zero_division_guard() {
        let cmyk = rgb_to_cmyk(Rgba::BLACK);
        assert_eq!((cmyk.c, cmyk.m, cmyk.y), (0.0, 0.0, 0.0));
        assert_eq!(cmyk.k, 100.0);
        assert!(cmyk.c.is_finite());
    }

    #[test]
    fn test_pure_red() {
        let cmyk = rgb_to_cmyk(Rgba::opaque(1.0, 0.0, 0.0));
        assert_eq!(cmyk.c, 0.0);
        assert_eq!(cmyk.m, 100.0);
        assert_eq!(cmyk.y, 100.0);
        assert_eq!(cmyk.k, 0.0);
    }

    #[test]
    fn test_white_is_all_zero() {
        let cmyk = rgb_to_cmyk(Rgba::WHITE);
        assert_eq!((cmyk.c, cmyk.m, cmyk.y, cmyk.k), (0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_near_black_is_guarded() {
        let cmyk = rgb_to_cmyk(Rgba::opaque(0.00005, 0.0, 0.0));
        assert_eq!((cmyk.c, cmyk.m, cmyk.y), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_mid_tone_is_rounded_percent() {
        // max = 0.6 → K = 40%, C = (1 - 0.6 - 0.4) / 0.6 = 0
        // M = (1 - 0.3 - 0.4) / 0.6 = 50%, Y = (1 - 0.2 - 0.4) / 0.6 = 66.67%
        let cmyk = rgb_to_cmyk(Rgba::opaque(0.6, 0.3, 0.2));
        assert!(cmyk.c.abs() < EPSILON);
        assert!((cmyk.m - 50.0).abs() < EPSILON);
        assert!((cmyk.y - 66.67).abs() < EPSILON);
        assert!((cmyk.k - 40.0).abs() < EPSILON);
    }

    #[test]
    fn test_cmyk_roundtrip_within_one_byte() {
        for color in [
            Rgba::opaque(0.8, 0.3, 0.1),
            Rgba::opaque(0.1, 0.9, 0.4),
            Rgba::opaque(0.5, 0.5, 0.5),
            Rgba::BLACK,
        ] {
            let back = cmyk_to_rgb(rgb_to_cmyk(color));
            for (x, y) in color.rgb().iter().zip(back.rgb()) {
                assert!((x - y).abs() <= 1.0 / 255.0, "{color:?} -> {back:?}");
            }
            assert_eq!(back.a, 1.0);
        }
    }
}
