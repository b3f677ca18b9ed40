//! RGB ↔ HSB (hue, saturation, brightness) conversion.
//!
//! ```text
//! B = max(R, G, B)
//! S = (max − min) / max          (0 when max ≤ 0)
//! H = sector(max) / 6            (0 when max = min)
//! ```
//!
//! Hue is expressed as a fraction of a full turn in `[0, 1)`.

use crate::model::{HsbView, Rgba};

/// Derive HSB from the canonical color. Alpha passes through unchanged.
pub fn rgb_to_hsb(color: Rgba) -> HsbView {
    let Rgba { r, g, b, a } = color;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let saturation = if max > 0.0 { delta / max } else { 0.0 };

    let hue = if delta <= 0.0 {
        0.0
    } else {
        let sector = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        // rem_euclid keeps the red sector non-negative; the fold below maps
        // an exact full turn back to zero.
        let h = sector / 6.0;
        if h >= 1.0 { h - 1.0 } else { h }
    };

    HsbView {
        h: hue,
        s: saturation,
        b: max,
        a,
    }
}

/// Standard sector-based HSB → RGB inverse. Hue wraps around the turn.
pub fn hsb_to_rgb(hsb: HsbView) -> Rgba {
    let HsbView { h, s, b: v, a } = hsb;
    if s <= 0.0 {
        return Rgba::new(v, v, v, a);
    }

    let scaled = h.rem_euclid(1.0) * 6.0;
    let sector = scaled.floor();
    let f = scaled - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgba::new(r, g, b, a)
}
