//! Policy evaluation: override resolution, ignores, rule lookup, oracle query,
//! comparison and fix synthesis for one declaration at a time.

pub mod decision;
pub mod engine;
pub mod options;
pub mod policy;

pub use decision::{Decision, EvaluationStats, UnitReport, Violation};
pub use engine::Evaluator;
pub use options::{CompiledOptions, IgnoreSpec};
pub use policy::ImmutabilityPolicy;
