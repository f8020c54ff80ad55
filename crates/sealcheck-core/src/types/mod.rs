//! Shared value types.

pub mod collections;
pub mod level;
pub mod one_or_many;
pub mod specifier;

pub use level::{Comparator, ImmutabilityLevel};
pub use one_or_many::OneOrMany;
pub use specifier::{DeclarationOrigin, DeclarationSpecifier, TypeSpecifier};
