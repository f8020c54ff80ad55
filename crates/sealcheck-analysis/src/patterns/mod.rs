//! Pattern matching over identifier texts and dotted accessor paths.

pub mod accessor;
pub mod simple;

pub use accessor::{AccessorPattern, AccessorPatternSet, Segment};
pub use simple::PatternSet;

use regex::Regex;
use sealcheck_core::errors::PatternError;

/// Compile a user regex, mapping failures to [`PatternError::Regex`].
pub fn compile_regex(pattern: &str) -> Result<Regex, PatternError> {
    Regex::new(pattern).map_err(|e| PatternError::Regex {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}
