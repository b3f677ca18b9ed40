//! Rounding and quantization helpers shared by the view conversions.

/// Round to `places` decimal places, ties away from zero.
///
/// A result of negative zero is normalized to `0.0`.
pub fn round_to_places(value: f64, places: u32) -> f64 {
    let divisor = 10_f64.powi(places as i32);
    let rounded = (value * divisor).round() / divisor;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Quantize a normalized channel to a byte: `round(v × 255)`, saturated
/// into `[0, 255]`.
pub fn channel_to_byte(value: f64) -> u8 {
    // `as` saturates and maps NaN to 0.
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}
