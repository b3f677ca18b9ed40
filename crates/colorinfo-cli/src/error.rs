use colorinfo_core::ColorError;
use colorinfo_frontend_core::FrontendError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Frontend(#[from] FrontendError),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error("no color given: pass a hex color or --rgba")]
    MissingColor,
    #[error("invalid RGBA value {0:?}: expected four comma-separated numbers")]
    InvalidRgba(String),
    #[error("failed to install logging subscriber: {0}")]
    Logging(String),
}
