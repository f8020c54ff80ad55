//! Host-built syntax model: node arena, known types and input units.

pub mod builder;
pub mod tree;
pub mod types;
pub mod unit;

pub use builder::UnitBuilder;
pub use tree::{NodeId, NodeKind, Span, SyntaxNode, SyntaxTree, TreeError};
pub use types::{TypeInfo, TypeOrigin};
pub use unit::SourceUnit;
