//! Transfer function (OETF/EOTF) implementations.
//!
//! Transfer functions convert between non-linear (encoded) and linear light
//! values. Only the sRGB curve is needed for the single implied working space.

/// A transfer function that converts between linear and non-linear encodings.
pub trait TransferFunction: Send + Sync {
    /// Convert from non-linear (encoded) to linear light.
    fn to_linear(&self, encoded: f64) -> f64;

    /// Convert from linear light to non-linear (encoded).
    fn to_encoded(&self, linear: f64) -> f64;

    /// Linearize an RGB triplet channel by channel.
    fn linearize(&self, rgb: [f64; 3]) -> [f64; 3] {
        rgb.map(|v| self.to_linear(v))
    }

    /// Encode a linear RGB triplet channel by channel.
    fn encode(&self, rgb: [f64; 3]) -> [f64; 3] {
        rgb.map(|v| self.to_encoded(v))
    }
}

// ---------------------------------------------------------------------------
// sRGB (IEC 61966-2-1)
// ---------------------------------------------------------------------------

/// sRGB transfer function per IEC 61966-2-1.
///
/// ```text
/// to_linear:   V <= 0.04045 → V / 12.92
///              V >  0.04045 → ((V + 0.055) / 1.055) ^ 2.4
///
/// from_linear: L <= 0.0031308 → L × 12.92
///              L >  0.0031308 → 1.055 × L^(1/2.4) − 0.055
/// ```
///
/// Negative inputs fall on the linear segment in both directions, so
/// out-of-range channels never produce NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct SrgbTransfer;

impl SrgbTransfer {
    const DECODE_CUT: f64 = 0.04045;
    const ENCODE_CUT: f64 = 0.003_130_8;
    const SLOPE: f64 = 12.92;
    const GAMMA: f64 = 2.4;
}

impl TransferFunction for SrgbTransfer {
    fn to_linear(&self, encoded: f64) -> f64 {
        if encoded <= Self::DECODE_CUT {
            encoded / Self::SLOPE
        } else {
            ((encoded + 0.055) / 1.055).powf(Self::GAMMA)
        }
    }

    fn to_encoded(&self, linear: f64) -> f64 {
        if linear <= Self::ENCODE_CUT {
            linear * Self::SLOPE
        } else {
            1.055 * linear.powf(1.0 / Self::GAMMA) - 0.055
        }
    }
}
