//! Error handling for sealcheck.
//! One error enum per concern, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod pattern_error;

pub use config_error::ConfigError;
pub use error_code::SealcheckErrorCode;
pub use pattern_error::PatternError;
