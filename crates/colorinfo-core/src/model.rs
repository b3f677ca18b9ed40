//! Canonical color and the derived view structs.
//!
//! `Rgba` is the single source of truth. Every view below is a pure
//! projection of it, recomputed by `ColorState` after each edit.

use serde::{Deserialize, Serialize};

/// Canonical color: four normalized channels, nominally in `[0, 1]`.
///
/// Values outside the nominal range are stored as-is. Clamping is the
/// responsibility of the edit source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel. 1.0 = fully opaque.
    pub a: f64,
}

impl Rgba {
    /// Opaque white, the color a fresh session starts with.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from three chromatic channels.
    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Build from 8-bit channels, each divided by 255.
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(
            f64::from(bytes[0]) / 255.0,
            f64::from(bytes[1]) / 255.0,
            f64::from(bytes[2]) / 255.0,
            f64::from(bytes[3]) / 255.0,
        )
    }

    /// The chromatic channels as an array.
    pub const fn rgb(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

/// RGB view: chromatic channels on the `[0, 255]` editing scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RgbView {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    /// Alpha stays on the normalized `[0, 1]` scale.
    pub a: f64,
}

/// HSB view. Hue, saturation, and brightness are each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HsbView {
    /// Hue as a fraction of a full turn. 0.0 for achromatic colors.
    pub h: f64,
    pub s: f64,
    pub b: f64,
    pub a: f64,
}

/// CIE L*a*b* view relative to D65, rounded to 2 decimal places.
///
/// Alpha-unaware.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabView {
    /// Lightness L* in `[0, 100]`.
    pub l: f64,
    /// Green–red axis, nominally `[-128, 127]`.
    pub a: f64,
    /// Blue–yellow axis, nominally `[-128, 127]`.
    pub b: f64,
}

/// CMYK view in percent, rounded to 2 decimal places.
///
/// Alpha-unaware.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CmykView {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    /// Key (black).
    pub k: f64,
}

/// Every derived representation of one canonical color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorViews {
    pub rgb: RgbView,
    pub hsb: HsbView,
    pub lab: LabView,
    pub cmyk: CmykView,
    /// `#RRGGBBAA`, uppercase.
    pub hex: String,
}

/// Read-only state published to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSnapshot {
    /// The canonical color.
    pub color: Rgba,
    /// Views derived from `color`.
    pub views: ColorViews,
    /// Incremented on every canonical mutation.
    pub revision: u64,
}
