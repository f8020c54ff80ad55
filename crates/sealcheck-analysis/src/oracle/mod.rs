//! Boundary to the external immutability classifier.
//!
//! The engine never computes a type's immutability itself. It asks an
//! [`ImmutabilityOracle`], passing the global level overrides and a `max_level`
//! hint the oracle may use to stop early.

pub mod overrides;
pub mod table;

pub use overrides::{LevelOverride, LevelOverrides};
pub use table::TableOracle;

use sealcheck_core::types::ImmutabilityLevel;

use crate::syntax::{NodeId, SourceUnit, TypeInfo};

/// Everything an oracle is told about one classification.
#[derive(Debug, Clone, Copy)]
pub struct ClassifyRequest<'a> {
    pub unit: &'a SourceUnit,
    pub node: NodeId,
    /// The declaration's statically known type, if the host attached one.
    pub ty: Option<&'a TypeInfo>,
    pub overrides: &'a LevelOverrides,
    /// Whether the oracle may reuse results across requests. Always true: the
    /// overrides are global for the run.
    pub use_cache: bool,
    /// Levels above this decide the comparison the same way as this one.
    pub max_level: Option<ImmutabilityLevel>,
}

/// Classifies the actual immutability of a declaration's type.
///
/// Failures are reported as [`ImmutabilityLevel::Unknown`], never as errors.
pub trait ImmutabilityOracle {
    fn classify(&self, request: &ClassifyRequest<'_>) -> ImmutabilityLevel;
}

impl<F> ImmutabilityOracle for F
where
    F: Fn(&ClassifyRequest<'_>) -> ImmutabilityLevel,
{
    fn classify(&self, request: &ClassifyRequest<'_>) -> ImmutabilityLevel {
        self(request)
    }
}
