//! Theme errors.

use thiserror::Error;

/// Result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;

/// Theme construction errors.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// No preset is registered under this name.
    #[error("unknown base theme: {name} (available: {available})")]
    UnknownPreset { name: String, available: String },
}
