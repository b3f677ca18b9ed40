//! ColorInfo CLI: terminal shell around the color core.
//!
//! `inspect` prints every view of one color; `session` exposes a
//! `ColorState` to another process over JSON lines.

pub mod config;
pub mod error;
pub mod ipc;
pub mod render;
pub mod session;
pub mod stdio_bridge;

pub use config::AppConfig;
pub use error::CliError;

use colorinfo_core::Rgba;

/// Parse `r,g,b,a` (normalized channels) as given to `--rgba`.
pub fn parse_rgba(text: &str) -> Result<Rgba, CliError> {
    let parts: Vec<f64> = text
        .split(',')
        .map(|s| s.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| CliError::InvalidRgba(text.to_string()))?;

    match parts.as_slice() {
        &[r, g, b, a] => Ok(Rgba::new(r, g, b, a)),
        _ => Err(CliError::InvalidRgba(text.to_string())),
    }
}
