//! Pattern compilation errors.

use super::error_code::{self, SealcheckErrorCode};

/// Errors raised while compiling user-supplied patterns.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("invalid regex '{pattern}': {message}")]
    Regex { pattern: String, message: String },

    #[error("invalid glob '{pattern}': {message}")]
    Glob { pattern: String, message: String },

    #[error("invalid accessor pattern '{pattern}': {message}")]
    Accessor { pattern: String, message: String },
}

impl PatternError {
    /// The offending pattern text.
    pub fn pattern(&self) -> &str {
        match self {
            Self::Regex { pattern, .. }
            | Self::Glob { pattern, .. }
            | Self::Accessor { pattern, .. } => pattern,
        }
    }
}

impl SealcheckErrorCode for PatternError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_PATTERN
    }
}
