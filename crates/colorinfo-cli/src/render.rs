//! Human-readable rendering of a color snapshot.

use std::fmt::Write;

use colorinfo_core::ColorSnapshot;

/// Render every view, one model per line.
///
/// RGB channels are shown as whole numbers on the 0–255 scale; hue in
/// degrees; saturation, brightness and CMYK in percent.
pub fn render_text(snapshot: &ColorSnapshot, precision: usize) -> String {
    let v = &snapshot.views;
    let p = precision;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "HEX   {}", v.hex);
    let _ = writeln!(
        out,
        "RGB   R {:.0}  G {:.0}  B {:.0}  A {:.p$}",
        v.rgb.r, v.rgb.g, v.rgb.b, v.rgb.a
    );
    let _ = writeln!(
        out,
        "HSB   H {:.p$}°  S {:.p$}%  B {:.p$}%",
        v.hsb.h * 360.0,
        v.hsb.s * 100.0,
        v.hsb.b * 100.0
    );
    let _ = writeln!(out, "LAB   L* {:.p$}  a* {:.p$}  b* {:.p$}", v.lab.l, v.lab.a, v.lab.b);
    let _ = writeln!(
        out,
        "CMYK  C {:.p$}%  M {:.p$}%  Y {:.p$}%  K {:.p$}%",
        v.cmyk.c, v.cmyk.m, v.cmyk.y, v.cmyk.k
    );
    out
}
