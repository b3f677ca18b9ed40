//! Color space definitions and 3x3 matrix transforms.

use glam::{DMat3, DVec3};

/// A 3x3 color matrix for linear color space conversions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix(pub DMat3);

impl ColorMatrix {
    /// Linear sRGB (D65) → CIEXYZ, rows as published by Lindbloom.
    const SRGB_TO_XYZ_ROWS: [[f64; 3]; 3] = [
        [0.4124564, 0.3575761, 0.1804375],
        [0.2126729, 0.7151522, 0.0721750],
        [0.0193339, 0.1191920, 0.9503041],
    ];

    /// Returns the identity matrix (no-op transform).
    pub fn identity() -> Self {
        Self(DMat3::IDENTITY)
    }

    /// Build from row-major coefficients.
    pub fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        // glam is column-major; the transposed column array is the row array.
        Self(DMat3::from_cols_array_2d(&rows).transpose())
    }

    /// Linear sRGB → CIEXYZ with Y of white = 1.
    pub fn srgb_to_xyz() -> Self {
        Self::from_rows(Self::SRGB_TO_XYZ_ROWS)
    }

    /// CIEXYZ → linear sRGB, the exact inverse of [`Self::srgb_to_xyz`].
    pub fn xyz_to_srgb() -> Self {
        Self::srgb_to_xyz().inverse()
    }

    pub fn inverse(&self) -> Self {
        Self(self.0.inverse())
    }

    /// Apply this matrix to an RGB triplet.
    pub fn apply(&self, rgb: [f64; 3]) -> [f64; 3] {
        (self.0 * DVec3::from_array(rgb)).to_array()
    }
}

/// Reference white tristimulus values on the 0–100 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl WhitePoint {
    /// CIE standard illuminant D65, 2° observer.
    pub const D65: Self = Self {
        x: 95.047,
        y: 100.000,
        z: 108.883,
    };

    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}
