//! sRGB ↔ CIE L*a*b* (D65) conversion.
//!
//! # Algorithm
//! 1. Inverse sRGB gamma per channel
//! 2. Linear RGB → CIEXYZ via the D65 sRGB matrix, scaled to 0–100
//! 3. Normalize by the D65 reference white
//! 4. Apply the CIE nonlinearity to each ratio:
//! ```text
//!   f(t) = t^(1/3)              t > 0.008856
//!   f(t) = 7.787 × t + 16/116   otherwise
//! ```
//! 5. `L* = 116 fy − 16`, `a* = 500 (fx − fy)`, `b* = 200 (fy − fz)`
//! 6. Round each component to 2 decimal places
//!
//! # Reference
//! Lindbloom, Bruce J.: RGB/XYZ matrices and XYZ to Lab

use crate::color_management::color_space::{ColorMatrix, WhitePoint};
use crate::color_management::rounding::round_to_places;
use crate::color_management::transfer::{SrgbTransfer, TransferFunction};
use crate::model::{LabView, Rgba};

/// CIE ε as used by the transfer function.
const EPSILON: f64 = 0.008856;
/// Slope of the linear segment of the transfer function.
const LINEAR_SLOPE: f64 = 7.787;
const OFFSET: f64 = 16.0 / 116.0;

fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.powf(1.0 / 3.0)
    } else {
        LINEAR_SLOPE * t + OFFSET
    }
}

fn lab_f_inv(t: f64) -> f64 {
    let cubed = t * t * t;
    if cubed > EPSILON {
        cubed
    } else {
        (t - OFFSET) / LINEAR_SLOPE
    }
}

/// Derive the Lab view from the canonical color. Alpha is ignored.
pub fn rgb_to_lab(color: Rgba) -> LabView {
    let linear = SrgbTransfer.linearize(color.rgb());
    let xyz = ColorMatrix::srgb_to_xyz().apply(linear);
    let white = WhitePoint::D65.to_array();

    let [fx, fy, fz] = [0, 1, 2].map(|i| lab_f(xyz[i] * 100.0 / white[i]));

    LabView {
        l: round_to_places(116.0 * fy - 16.0, 2),
        a: round_to_places(500.0 * (fx - fy), 2),
        b: round_to_places(200.0 * (fy - fz), 2),
    }
}

/// Inverse of [`rgb_to_lab`]. The result is clamped into the sRGB gamut
/// and is always fully opaque.
pub fn lab_to_rgb(lab: LabView) -> Rgba {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = fy + lab.a / 500.0;
    let fz = fy - lab.b / 200.0;
    let white = WhitePoint::D65.to_array();

    let f = [fx, fy, fz];
    let xyz = [0, 1, 2].map(|i| lab_f_inv(f[i]) * white[i] / 100.0);
    let linear = ColorMatrix::xyz_to_srgb().apply(xyz);

    let rgb = linear.map(|v| SrgbTransfer.to_encoded(v.max(0.0)).clamp(0.0, 1.0));
    if rgb != SrgbTransfer.encode(linear) {
        tracing::debug!(?lab, "Lab edit outside sRGB gamut, clamped");
    }
    Rgba::opaque(rgb[0], rgb[1], rgb[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 0.1;

    fn assert_lab(actual: LabView, l: f64, a: f64, b: f64) {
        assert!(
            (actual.l - l).abs() < TOLERANCE
                && (actual.a - a).abs() < TOLERANCE
                && (actual.b - b).abs() < TOLERANCE,
            "expected L*={l} a*={a} b*={b}, got {actual:?}"
        );
    }

    #[test]
    fn test_white_is_l100_neutral() {
        assert_lab(rgb_to_lab(Rgba::WHITE), 100.0, 0.0, 0.0);
    }

    #[test]
    fn test_black_is_l0_neutral() {
        assert_lab(rgb_to_lab(Rgba::BLACK), 0.0, 0.0, 0.0);
    }

    #[test]
    fn test_primaries_match_reference_values() {
        assert_lab(rgb_to_lab(Rgba::opaque(1.0, 0.0, 0.0)), 53.24, 80.09, 67.20);
        assert_lab(rgb_to_lab(Rgba::opaque(0.0, 1.0, 0.0)), 87.73, -86.18, 83.18);
        assert_lab(rgb_to_lab(Rgba::opaque(0.0, 0.0, 1.0)), 32.30, 79.19, -107.86);
    }

    #[test]
    fn test_output_is_rounded_to_two_places() {
        let lab = rgb_to_lab(Rgba::opaque(0.3, 0.6, 0.2));
        for v in [lab.l, lab.a, lab.b] {
            assert!(((v * 100.0).round() - v * 100.0).abs() < 1e-6, "{v} not rounded");
        }
    }

    #[test]
    fn test_alpha_does_not_affect_lab() {
        let opaque = rgb_to_lab(Rgba::new(0.4, 0.5, 0.6, 1.0));
        let clear = rgb_to_lab(Rgba::new(0.4, 0.5, 0.6, 0.0));
        assert_eq!(opaque, clear);
    }

    #[test]
    fn test_lab_roundtrip_within_one_byte() {
        for color in [
            Rgba::opaque(0.8, 0.3, 0.1),
            Rgba::opaque(0.1, 0.9, 0.4),
            Rgba::opaque(0.02, 0.01, 0.03),
            Rgba::WHITE,
            Rgba::BLACK,
        ] {
            let back = lab_to_rgb(rgb_to_lab(color));
            for (x, y) in color.rgb().iter().zip(back.rgb()) {
                assert!((x - y).abs() <= 1.0 / 255.0, "{color:?} -> {back:?}");
            }
        }
    }

    #[test]
    fn test_out_of_gamut_lab_is_clamped_and_opaque() {
        let rgb = lab_to_rgb(LabView { l: 50.0, a: -128.0, b: 127.0 });
        for v in rgb.rgb() {
            assert!((0.0..=1.0).contains(&v), "channel {v} escaped gamut");
        }
        assert_eq!(rgb.a, 1.0);
    }

    #[test]
    fn test_out_of_range_channels_extrapolate() {
        let lab = rgb_to_lab(Rgba::opaque(1.2, -0.1, 0.5));
        assert!(lab.l.is_finite() && lab.a.is_finite() && lab.b.is_finite());
    }
}
