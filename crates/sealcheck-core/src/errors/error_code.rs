//! Stable error codes surfaced to hosts.

/// Implemented by every sealcheck error so hosts can branch on a stable code
/// instead of the display text.
pub trait SealcheckErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONFIG_FILE_NOT_FOUND: &str = "CONFIG_FILE_NOT_FOUND";
pub const CONFIG_PARSE_ERROR: &str = "CONFIG_PARSE_ERROR";
pub const INVALID_PATTERN: &str = "INVALID_PATTERN";
pub const INVALID_OVERRIDE: &str = "INVALID_OVERRIDE";
pub const INVALID_LEVEL: &str = "INVALID_LEVEL";
