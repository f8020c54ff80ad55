//! Deciding whether a type is selected by a specifier.

use sealcheck_core::types::DeclarationOrigin;

use super::specifier::CompiledSpecifier;
use crate::syntax::{SourceUnit, TypeInfo, TypeOrigin};

/// Answers "does this specifier select this type?".
///
/// Implementations must be pure: the same inputs always give the same answer.
pub trait TypeLocator: Send + Sync {
    fn matches(&self, unit: &SourceUnit, spec: &CompiledSpecifier, ty: &TypeInfo) -> bool;
}

/// Matches on the declaration origin recorded in [`TypeInfo`].
///
/// A `file` specifier without a `path` selects types declared in the unit
/// being checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclarationLocator;

impl TypeLocator for DeclarationLocator {
    fn matches(&self, unit: &SourceUnit, spec: &CompiledSpecifier, ty: &TypeInfo) -> bool {
        let origin_ok = match (spec.origin, &ty.origin) {
            (None, _) => true,
            (Some(DeclarationOrigin::Lib), TypeOrigin::Lib) => true,
            (Some(DeclarationOrigin::Package), TypeOrigin::Package { name }) => {
                spec.package.as_deref() == Some(name.as_str())
            }
            (Some(DeclarationOrigin::File), TypeOrigin::File { path }) => match &spec.path {
                Some(glob) => glob.matches(path),
                None => *path == unit.path,
            },
            _ => false,
        };
        origin_ok && spec.selects_name(&ty.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::SyntaxTree;
    use sealcheck_core::types::TypeSpecifier;

    fn spec(json: &str) -> CompiledSpecifier {
        let spec: TypeSpecifier = serde_json::from_str(json).unwrap();
        CompiledSpecifier::compile(&spec, "s").unwrap()
    }

    fn unit() -> SourceUnit {
        SourceUnit::new("src/app.ts", SyntaxTree::new(""))
    }

    #[test]
    fn test_package_origin() {
        let locator = DeclarationLocator;
        let immer = spec(r#"{ "from": "package", "package": "immer" }"#);
        assert!(locator.matches(&unit(), &immer, &TypeInfo::package("immer", "Draft")));
        assert!(!locator.matches(&unit(), &immer, &TypeInfo::package("mobx", "Draft")));
        assert!(!locator.matches(&unit(), &immer, &TypeInfo::lib("Draft")));
    }

    #[test]
    fn test_bare_name_ignores_origin() {
        let locator = DeclarationLocator;
        let foo = spec(r#""Foo""#);
        assert!(locator.matches(&unit(), &foo, &TypeInfo::lib("Foo")));
        assert!(locator.matches(&unit(), &foo, &TypeInfo::file("x.ts", "Foo")));
        assert!(!locator.matches(&unit(), &foo, &TypeInfo::lib("Bar")));
    }

    #[test]
    fn test_file_origin_glob_and_local() {
        let locator = DeclarationLocator;
        let generated = spec(r#"{ "from": "file", "path": "src/generated/**" }"#);
        assert!(locator.matches(&unit(), &generated, &TypeInfo::file("src/generated/api/a.ts", "A")));
        assert!(!locator.matches(&unit(), &generated, &TypeInfo::file("src/app.ts", "A")));

        let local = spec(r#"{ "from": "file" }"#);
        assert!(locator.matches(&unit(), &local, &TypeInfo::file("src/app.ts", "A")));
        assert!(!locator.matches(&unit(), &local, &TypeInfo::file("src/other.ts", "A")));
    }

    #[test]
    fn test_unknown_origin_only_matches_bare_names() {
        let locator = DeclarationLocator;
        let ty = TypeInfo::new("Foo", TypeOrigin::Unknown);
        assert!(locator.matches(&unit(), &spec(r#""Foo""#), &ty));
        assert!(!locator.matches(&unit(), &spec(r#"{ "from": "lib" }"#), &ty));
    }
}
