//! Comparisons over the immutability lattice.

use sealcheck_core::config::UnknownPolicy;
use sealcheck_core::types::{Comparator, ImmutabilityLevel};

/// Whether `actual` satisfies `cmp` against `expected`.
///
/// An `Unknown` actual is resolved by `policy`. An `Unknown` expected level is
/// rejected at configuration time and never satisfied here.
pub fn compare(
    actual: ImmutabilityLevel,
    expected: ImmutabilityLevel,
    cmp: Comparator,
    policy: UnknownPolicy,
) -> bool {
    let Some(expected) = expected.rank() else {
        return false;
    };
    match actual.rank() {
        Some(actual) => cmp.holds(actual, expected),
        None => match policy {
            UnknownPolicy::Bottom => cmp.holds(-1, i16::from(expected)),
            UnknownPolicy::Unsatisfied => false,
            UnknownPolicy::Satisfied => true,
        },
    }
}

/// Highest level worth computing for a comparison, if bounded.
///
/// An oracle may stop refining once it reaches this level: anything at or above
/// it decides the comparison the same way.
pub fn max_level_hint(expected: ImmutabilityLevel, cmp: Comparator) -> Option<ImmutabilityLevel> {
    match cmp {
        Comparator::AtLeast => Some(expected),
        Comparator::More => expected.successor(),
        Comparator::Less | Comparator::AtMost | Comparator::Exactly => None,
    }
}
