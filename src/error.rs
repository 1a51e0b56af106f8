//! Error types for solid-shapes
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for shape operations
pub type ShapeResult<T> = Result<T, ShapeError>;

/// Main error type for shape operations
#[derive(Error, Debug)]
pub enum ShapeError {
    /// A shape was asked for a value it cannot define (see `NoShape`)
    #[error("invalid state: {reason}")]
    InvalidState { reason: &'static str },

    /// Shape kind not recognised while parsing a shape spec
    #[error("unknown shape '{name}' (expected square, rectangle, circle, cube or none)")]
    UnknownShape { name: String },

    /// Dimension is missing, not a number, negative or not finite
    #[error("invalid dimension '{input}': {reason}")]
    InvalidDimension { input: String, reason: String },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShapeError {
    /// Stable machine-readable code, used by JSON error events
    pub fn code(&self) -> &'static str {
        match self {
            ShapeError::InvalidState { .. } => "invalid_state",
            ShapeError::UnknownShape { .. } => "unknown_shape",
            ShapeError::InvalidDimension { .. } => "invalid_dimension",
            ShapeError::Config { .. } => "invalid_config",
            ShapeError::Io(_) => "io",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_state() {
        let err = ShapeError::InvalidState {
            reason: "area is undefined for NoShape",
        };
        assert_eq!(err.to_string(), "invalid state: area is undefined for NoShape");
        assert_eq!(err.code(), "invalid_state");
    }

    #[test]
    fn test_error_display_invalid_dimension() {
        let err = ShapeError::InvalidDimension {
            input: "-1".to_string(),
            reason: "must not be negative".to_string(),
        };
        assert_eq!(err.to_string(), "invalid dimension '-1': must not be negative");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ShapeError = io_err.into();
        assert!(matches!(err, ShapeError::Io(_)));
        assert_eq!(err.code(), "io");
    }
}
