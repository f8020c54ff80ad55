//! Decisions and the records handed back to the host.

use serde::Serialize;

use sealcheck_core::types::{Comparator, ImmutabilityLevel};

use crate::fix::Fix;
use crate::syntax::{NodeId, Span};

/// Outcome of evaluating one node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Decision {
    /// A disabling override matched, or the rule is off.
    Disabled,
    Ignored,
    NoRuleApplies,
    Valid,
    Violation(Violation),
}

impl Decision {
    pub fn is_violation(&self) -> bool {
        matches!(self, Self::Violation(_))
    }

    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Self::Violation(v) => Some(v),
            _ => None,
        }
    }
}

/// A declaration whose actual immutability fails its rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    pub node: NodeId,
    /// Span of the declaration's name.
    pub span: Span,
    pub identifier: Option<String>,
    /// Index of the violated rule in its table.
    pub rule_index: usize,
    pub comparator: Comparator,
    pub actual: ImmutabilityLevel,
    pub expected: ImmutabilityLevel,
    pub fix: Option<Fix>,
    pub suggestions: Vec<Fix>,
}

impl Violation {
    /// Default English rendering. Hosts usually format from the fields instead.
    pub fn message(&self) -> String {
        let relation = match self.comparator {
            Comparator::Less => "less than",
            Comparator::AtMost => "at most",
            Comparator::Exactly => "exactly",
            Comparator::AtLeast => "at least",
            Comparator::More => "more than",
        };
        format!(
            "This type is declared to have an immutability of {relation} \"{}\" (actual: \"{}\").",
            self.expected, self.actual
        )
    }
}

/// Decision counts for one unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EvaluationStats {
    pub evaluated: usize,
    pub disabled: usize,
    pub ignored: usize,
    pub no_rule: usize,
    pub valid: usize,
    pub violations: usize,
    pub cache_hits: usize,
}

impl EvaluationStats {
    pub fn record(&mut self, decision: &Decision) {
        self.evaluated += 1;
        match decision {
            Decision::Disabled => self.disabled += 1,
            Decision::Ignored => self.ignored += 1,
            Decision::NoRuleApplies => self.no_rule += 1,
            Decision::Valid => self.valid += 1,
            Decision::Violation(_) => self.violations += 1,
        }
    }
}

/// Everything one evaluator found in one unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitReport {
    pub path: String,
    pub violations: Vec<Violation>,
    pub stats: EvaluationStats,
}
