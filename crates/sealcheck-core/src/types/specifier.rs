//! Type specifiers: declarative selectors for "which types" by declaration
//! origin plus an optional name or pattern.

use serde::{Deserialize, Serialize};

use super::one_or_many::OneOrMany;

/// Where a type is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationOrigin {
    /// The standard library / ambient lib declarations.
    Lib,
    /// A file of the project being analyzed.
    File,
    /// An installed third-party package.
    Package,
}

/// A type selector as written in configuration.
///
/// ```toml
/// specifiers = "Foo"                                   # bare name, any origin
/// specifiers = { from = "lib", name = ["Map", "Set"] }
/// specifiers = { from = "package", package = "immer", pattern = "^Draft" }
/// specifiers = { from = "file", path = "src/generated/**" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeSpecifier {
    Name(String),
    Declaration(DeclarationSpecifier),
}

/// Origin-qualified selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationSpecifier {
    pub from: DeclarationOrigin,
    /// Package name; required when `from = "package"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    /// Glob over the declaring file; only meaningful when `from = "file"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<OneOrMany<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<OneOrMany<String>>,
}

impl TypeSpecifier {
    pub fn lib(name: &str) -> Self {
        Self::Declaration(DeclarationSpecifier {
            from: DeclarationOrigin::Lib,
            package: None,
            path: None,
            name: Some(OneOrMany::One(name.to_string())),
            pattern: None,
        })
    }

    pub fn package(package: &str) -> Self {
        Self::Declaration(DeclarationSpecifier {
            from: DeclarationOrigin::Package,
            package: Some(package.to_string()),
            path: None,
            name: None,
            pattern: None,
        })
    }
}
