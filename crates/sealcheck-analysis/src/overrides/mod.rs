//! Per-type option overrides and the type-specifier locator.

pub mod locator;
pub mod resolver;
pub mod specifier;

pub use locator::{DeclarationLocator, TypeLocator};
pub use resolver::{resolve, CompiledOverride, OverrideAction, Resolution};
pub use specifier::CompiledSpecifier;
