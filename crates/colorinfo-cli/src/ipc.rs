//! IPC message contracts between the color core and a presentation layer.
//!
//! These enums define the complete set of messages exchanged over a
//! [`FrontendBackend`](colorinfo_frontend_core::FrontendBackend). They use
//! `#[serde(tag = "type", content = "data")]` for adjacently tagged JSON.

use serde::{Deserialize, Serialize};

use colorinfo_core::ColorSnapshot;

/// Messages from the core to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CoreToUi {
    /// Initial state sync when the UI connects or asks for it.
    Initialize {
        /// Current canonical color and views.
        snapshot: ColorSnapshot,
    },

    /// The canonical color changed and every view was recomputed.
    ViewsUpdated {
        /// Updated canonical color and views.
        snapshot: ColorSnapshot,
    },

    /// A hex edit was rejected. The UI should show `hex` again.
    HexReverted {
        /// Rendering of the unchanged canonical color.
        hex: String,
    },

    /// Text the UI should place on the system clipboard.
    ClipboardText {
        /// The `#RRGGBBAA` string.
        text: String,
    },

    /// An inbound message could not be decoded.
    Error {
        /// Error description.
        message: String,
    },
}

/// Messages from the UI to the core.
///
/// Slider values are expected to be clamped to their declared ranges by
/// the UI before they are sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum UiToCore {
    /// Request a fresh snapshot of the current state.
    RequestState,

    /// Set the canonical color directly (normalized channels).
    SetCanonical { r: f64, g: f64, b: f64, a: f64 },

    /// Hex text edit.
    SetFromHex { text: String },

    /// RGB slider edit on the 0–255 scale; alpha stays normalized.
    SetRgb { r: f64, g: f64, b: f64, a: f64 },

    /// HSB slider edit, each component in `[0, 1]`.
    SetHsb { h: f64, s: f64, b: f64, a: f64 },

    /// Lab slider edit.
    SetLab { l: f64, a: f64, b: f64 },

    /// CMYK slider edit, in percent.
    SetCmyk { c: f64, m: f64, y: f64, k: f64 },

    /// "Copy Hex" menu command.
    CopyHex,
}
