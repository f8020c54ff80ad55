//! sealcheck-core: shared types, errors, configuration and tracing setup for the
//! sealcheck immutability policy engine.

pub mod config;
pub mod errors;
pub mod tracing_setup;
pub mod types;

pub use errors::{ConfigError, PatternError, SealcheckErrorCode};
pub use types::level::{Comparator, ImmutabilityLevel};
