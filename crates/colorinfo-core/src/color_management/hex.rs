//! Hexadecimal color codec.
//!
//! Parsing strips every character outside `[0-9A-Fa-f]` and classifies the
//! remaining digits by count:
//!
//! | Digits | Layout     | Alpha |
//! |--------|------------|-------|
//! | 3      | `RGB`      | 255   |
//! | 6      | `RRGGBB`   | 255   |
//! | 8      | `RRGGBBAA` | as-is |
//!
//! Short-form nibbles expand to bytes as `N × 17`. Rendering always emits
//! the 8-digit uppercase form.

use crate::color_management::rounding::channel_to_byte;
use crate::error::ColorError;
use crate::model::Rgba;

/// Parse a hex color string into a canonical color.
pub fn parse_hex(text: &str) -> Result<Rgba, ColorError> {
    let nibbles: Vec<u32> = text.chars().filter_map(|c| c.to_digit(16)).collect();
    // Most-significant digit first.
    let value = nibbles.iter().fold(0_u32, |acc, &n| (acc << 4) | n);
    let byte = |shift: u32| ((value >> shift) & 0xFF) as u8;

    let bytes = match nibbles.len() {
        3 => {
            let nibble = |shift: u32| (((value >> shift) & 0xF) * 17) as u8;
            [nibble(8), nibble(4), nibble(0), 0xFF]
        }
        6 => [byte(16), byte(8), byte(0), 0xFF],
        8 => [byte(24), byte(16), byte(8), byte(0)],
        digits => return Err(ColorError::InvalidHexFormat { digits }),
    };

    Ok(Rgba::from_bytes(bytes))
}

/// Render `#RRGGBBAA`, each byte = `round(channel × 255)`.
pub fn format_hex(color: Rgba) -> String {
    format!(
        "#{:02X}{:02X}{:02X}{:02X}",
        channel_to_byte(color.r),
        channel_to_byte(color.g),
        channel_to_byte(color.b),
        channel_to_byte(color.a)
    )
}
