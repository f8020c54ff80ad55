//! sealcheck-analysis: decides, per typed declaration, whether its immutability
//! satisfies the configured policy and synthesizes a textual fix when it does not.
//!
//! Flow for one declaration: override resolution, ignore check, rule lookup,
//! oracle query, lattice comparison, fix synthesis.

pub mod batch;
pub mod cache;
pub mod evaluator;
pub mod fix;
pub mod identifiers;
pub mod lattice;
pub mod oracle;
pub mod overrides;
pub mod patterns;
pub mod rules;
pub mod syntax;

pub use batch::evaluate_units;
pub use evaluator::{Decision, Evaluator, ImmutabilityPolicy, UnitReport, Violation};
pub use fix::Fix;
pub use oracle::{ClassifyRequest, ImmutabilityOracle, TableOracle};
pub use overrides::{DeclarationLocator, TypeLocator};
pub use syntax::{NodeId, SourceUnit, SyntaxTree, TypeInfo, TypeOrigin, UnitBuilder};
