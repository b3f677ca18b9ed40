//! Application configuration for the command-line inspector.

/// Default tracing filter directive.
const DEFAULT_LOG_FILTER: &str = "warn";
/// Default decimal places for fractional text output.
const DEFAULT_PRECISION: usize = 2;
/// Upper bound for `COLORINFO_PRECISION`.
const MAX_PRECISION: usize = 6;

/// Runtime configuration for the ColorInfo CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Tracing filter directive (`COLORINFO_LOG`).
    pub log_filter: String,
    /// Pretty-print JSON output (`COLORINFO_PRETTY`).
    pub pretty_json: bool,
    /// Decimal places for fractional values in text output
    /// (`COLORINFO_PRECISION`).
    pub precision: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: std::env::var("COLORINFO_LOG")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            pretty_json: std::env::var("COLORINFO_PRETTY").is_ok(),
            precision: std::env::var("COLORINFO_PRECISION")
                .ok()
                .and_then(|s| s.parse().ok())
                .map_or(DEFAULT_PRECISION, clamp_precision),
        }
    }
}

impl AppConfig {
    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(mut self, verbose: bool, pretty: bool, precision: Option<usize>) -> Self {
        if verbose {
            self.log_filter = "debug".to_string();
        }
        self.pretty_json |= pretty;
        if let Some(p) = precision {
            self.precision = clamp_precision(p);
        }
        self
    }
}

fn clamp_precision(places: usize) -> usize {
    places.min(MAX_PRECISION)
}
