//! ColorInfo Core: domain layer for color inspection.
//!
//! This crate owns the canonical RGBA color and every conversion that
//! projects it into RGB, HSB, CIE L*a*b*, CMYK, and hexadecimal views.
//! No UI, clipboard, or persistence dependencies.

pub mod color_management;
pub mod error;
pub mod model;
pub mod state;

// Re-exports for convenience.
pub use color_management::hex::{format_hex, parse_hex};
pub use error::ColorError;
pub use model::{CmykView, ColorSnapshot, ColorViews, HsbView, LabView, RgbView, Rgba};
pub use state::{ColorState, HexEdit};
