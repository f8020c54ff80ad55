//! Statically known types attached to nodes by the host.

use serde::{Deserialize, Serialize};

/// Where the declaration of a type lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "from", rename_all = "lowercase")]
pub enum TypeOrigin {
    Lib,
    File { path: String },
    Package { name: String },
    /// The host could not locate the declaration.
    Unknown,
}

/// A type as seen by the host's type checker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeInfo {
    pub name: String,
    pub origin: TypeOrigin,
}

impl TypeInfo {
    pub fn new(name: impl Into<String>, origin: TypeOrigin) -> Self {
        Self {
            name: name.into(),
            origin,
        }
    }

    pub fn lib(name: impl Into<String>) -> Self {
        Self::new(name, TypeOrigin::Lib)
    }

    pub fn package(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(
            name,
            TypeOrigin::Package {
                name: package.into(),
            },
        )
    }

    pub fn file(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(name, TypeOrigin::File { path: path.into() })
    }
}
