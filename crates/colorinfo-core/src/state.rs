//! The color inspection state: one canonical color and its derived views.
//!
//! `ColorState` is the only place the canonical color changes. Every edit
//! entry point normalizes its input to canonical RGBA and then calls
//! [`ColorState::recompute`] exactly once, so no partially updated view is
//! ever observable.

use crate::color_management::{cmyk, hex, hsb, lab};
use crate::model::{CmykView, ColorSnapshot, ColorViews, HsbView, LabView, RgbView, Rgba};

/// Outcome of a hex text edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexEdit {
    /// The text parsed and replaced the canonical color.
    Applied,
    /// The text was rejected. The canonical color is unchanged and the hex
    /// view still shows its rendering.
    Reverted,
}

/// Derive every view from a canonical color in one pass.
pub fn derive_views(color: Rgba) -> ColorViews {
    ColorViews {
        rgb: RgbView {
            r: color.r * 255.0,
            g: color.g * 255.0,
            b: color.b * 255.0,
            a: color.a,
        },
        hsb: hsb::rgb_to_hsb(color),
        lab: lab::rgb_to_lab(color),
        cmyk: cmyk::rgb_to_cmyk(color),
        hex: hex::format_hex(color),
    }
}

/// Owner of the canonical color for one inspection session.
///
/// Starts as opaque white.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorState {
    color: Rgba,
    views: ColorViews,
    revision: u64,
}

impl Default for ColorState {
    fn default() -> Self {
        Self::with_color(Rgba::WHITE)
    }
}

impl ColorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(color: Rgba) -> Self {
        Self {
            color,
            views: derive_views(color),
            revision: 0,
        }
    }

    /// The canonical color.
    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn views(&self) -> &ColorViews {
        &self.views
    }

    pub fn rgb(&self) -> RgbView {
        self.views.rgb
    }

    pub fn hsb(&self) -> HsbView {
        self.views.hsb
    }

    pub fn lab(&self) -> LabView {
        self.views.lab
    }

    pub fn cmyk(&self) -> CmykView {
        self.views.cmyk
    }

    pub fn hex(&self) -> &str {
        &self.views.hex
    }

    /// Number of canonical mutations since construction.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Owned copy of the observable state for the presentation layer.
    pub fn snapshot(&self) -> ColorSnapshot {
        ColorSnapshot {
            color: self.color,
            views: self.views.clone(),
            revision: self.revision,
        }
    }

    /// Replace the canonical color. Values are stored unclamped.
    pub fn set_canonical(&mut self, r: f64, g: f64, b: f64, a: f64) {
        self.set_color(Rgba::new(r, g, b, a));
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
        self.revision += 1;
        self.recompute();
    }

    /// Parse `text` as a hex color and apply it.
    ///
    /// A rejected string leaves the canonical color untouched and
    /// resynchronizes the hex view to it.
    pub fn set_from_hex(&mut self, text: &str) -> HexEdit {
        match hex::parse_hex(text) {
            Ok(color) => {
                tracing::debug!(text, "hex edit applied");
                self.set_color(color);
                HexEdit::Applied
            }
            Err(err) => {
                tracing::debug!(text, %err, "hex edit reverted");
                self.views.hex = hex::format_hex(self.color);
                HexEdit::Reverted
            }
        }
    }

    /// Apply an edit made on the 0–255 RGB scale.
    pub fn set_from_rgb(&mut self, rgb: RgbView) {
        self.set_canonical(rgb.r / 255.0, rgb.g / 255.0, rgb.b / 255.0, rgb.a);
    }

    pub fn set_from_hsb(&mut self, view: HsbView) {
        self.set_color(hsb::hsb_to_rgb(view));
    }

    /// Apply a Lab edit. The result is gamut-clamped and opaque.
    pub fn set_from_lab(&mut self, view: LabView) {
        self.set_color(lab::lab_to_rgb(view));
    }

    /// Apply a CMYK edit. The result is opaque.
    pub fn set_from_cmyk(&mut self, view: CmykView) {
        self.set_color(cmyk::cmyk_to_rgb(view));
    }

    /// Rebuild every derived view from the canonical color.
    pub fn recompute(&mut self) {
        self.views = derive_views(self.color);
        tracing::trace!(revision = self.revision, hex = %self.views.hex, "views recomputed");
    }
}
