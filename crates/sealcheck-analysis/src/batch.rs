//! Parallel evaluation of many units.
//!
//! Each unit gets its own [`Evaluator`](crate::evaluator::Evaluator) and cache.
//! The compiled policy, oracle and locator are shared read-only.

use rayon::prelude::*;

use crate::evaluator::{ImmutabilityPolicy, UnitReport};
use crate::oracle::ImmutabilityOracle;
use crate::overrides::{DeclarationLocator, TypeLocator};
use crate::syntax::SourceUnit;

/// Evaluate every unit on the rayon pool. Reports come back in input order.
pub fn evaluate_units<O>(
    policy: &ImmutabilityPolicy,
    units: &[SourceUnit],
    oracle: &O,
) -> Vec<UnitReport>
where
    O: ImmutabilityOracle + Sync,
{
    evaluate_units_with_locator(policy, units, oracle, &DeclarationLocator)
}

/// [`evaluate_units`] with a host-supplied type locator.
pub fn evaluate_units_with_locator<O>(
    policy: &ImmutabilityPolicy,
    units: &[SourceUnit],
    oracle: &O,
    locator: &dyn TypeLocator,
) -> Vec<UnitReport>
where
    O: ImmutabilityOracle + Sync,
{
    let _span = sealcheck_core::batch_span!(units.len()).entered();
    let reports: Vec<UnitReport> = units
        .par_iter()
        .map(|unit| policy.evaluator_with_locator(unit, oracle, locator).run())
        .collect();

    let violations: usize = reports.iter().map(|r| r.violations.len()).sum();
    tracing::info!(units = units.len(), violations, "batch evaluated");
    reports
}
