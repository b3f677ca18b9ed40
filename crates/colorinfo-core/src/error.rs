/// Errors produced by the color conversion engine.
///
/// Every numeric conversion is total; only hex parsing can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color: expected 3, 6 or 8 hex digits, found {digits}")]
    InvalidHexFormat { digits: usize },
}
