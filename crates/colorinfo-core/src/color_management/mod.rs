//! Color management: transfer functions, matrices, and per-model conversions.

pub mod cmyk;
pub mod color_space;
pub mod hex;
pub mod hsb;
pub mod lab;
pub mod rounding;
pub mod transfer;
