//! Tracing initialization and span definitions.
//!
//! Hosts that already install a subscriber skip [`init_tracing`]; the engine only
//! emits events and spans through the `tracing` macros.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive, e.g. `sealcheck=debug`.
pub const LOG_ENV_VAR: &str = "SEALCHECK_LOG";

/// Filter used when `SEALCHECK_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Install a global fmt subscriber filtered by `SEALCHECK_LOG`.
///
/// Returns `false` if a global subscriber was already set.
pub fn init_tracing() -> bool {
    init_tracing_with(DEFAULT_FILTER)
}

/// Like [`init_tracing`], with an explicit fallback filter.
pub fn init_tracing_with(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

/// Create a span covering the evaluation of one input unit.
#[macro_export]
macro_rules! unit_span {
    ($path:expr) => {
        tracing::info_span!("sealcheck.unit", path = %$path)
    };
}

/// Create a span covering the evaluation of one declaration node.
#[macro_export]
macro_rules! node_span {
    ($node:expr, $kind:expr) => {
        tracing::debug_span!("sealcheck.node", node = ?$node, kind = $kind)
    };
}

/// Create a span covering a batch of units.
#[macro_export]
macro_rules! batch_span {
    ($units:expr) => {
        tracing::info_span!("sealcheck.batch", units = $units)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const UNIT: &str = "sealcheck.unit";
    pub const NODE: &str = "sealcheck.node";
    pub const BATCH: &str = "sealcheck.batch";
}
