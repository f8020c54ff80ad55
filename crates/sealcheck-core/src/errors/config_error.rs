//! Configuration errors.
//!
//! Every variant is raised while loading or compiling configuration, before any
//! node is evaluated. A rule whose configuration fails stays off for the run.

use super::error_code::{self, SealcheckErrorCode};
use super::PatternError;

/// Errors that can occur while loading or compiling configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("failed to parse config {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("invalid value for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("invalid pattern in {field}: {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: PatternError,
    },

    #[error("override #{index} is invalid: {message}")]
    InvalidOverride { index: usize, message: String },

    #[error("invalid immutability level for {field}: {message}")]
    InvalidLevel { field: String, message: String },
}

impl ConfigError {
    /// Wrap a pattern error with the config field it came from.
    pub fn pattern(field: impl Into<String>, source: PatternError) -> Self {
        Self::InvalidPattern {
            field: field.into(),
            source,
        }
    }
}

impl SealcheckErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => error_code::CONFIG_FILE_NOT_FOUND,
            Self::ParseError { .. } => error_code::CONFIG_PARSE_ERROR,
            Self::ValidationFailed { .. } => error_code::CONFIG_ERROR,
            Self::InvalidPattern { source, .. } => source.error_code(),
            Self::InvalidOverride { .. } => error_code::INVALID_OVERRIDE,
            Self::InvalidLevel { .. } => error_code::INVALID_LEVEL,
        }
    }
}
