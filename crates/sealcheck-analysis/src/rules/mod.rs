//! Ordered rule table: identifier patterns to required immutability.

pub mod table;
pub mod types;

pub use table::RuleTable;
pub use types::RuleSpec;
