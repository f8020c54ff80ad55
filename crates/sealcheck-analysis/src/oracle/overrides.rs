//! Global level overrides handed to the oracle.

use sealcheck_core::config::{default_level_overrides, LevelOverrideEntry};
use sealcheck_core::errors::ConfigError;
use sealcheck_core::types::ImmutabilityLevel;

use crate::overrides::{CompiledSpecifier, TypeLocator};
use crate::syntax::{SourceUnit, TypeInfo};

/// `{ type, to, from? }` with the specifier compiled.
#[derive(Debug, Clone)]
pub struct LevelOverride {
    pub specifier: CompiledSpecifier,
    pub to: ImmutabilityLevel,
    pub from: Option<ImmutabilityLevel>,
}

/// Ordered level overrides; the first applicable one wins.
#[derive(Debug, Clone, Default)]
pub struct LevelOverrides {
    entries: Vec<LevelOverride>,
}

impl LevelOverrides {
    pub fn compile(entries: &[LevelOverrideEntry]) -> Result<Self, ConfigError> {
        let entries = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let field = format!("settings.immutability.overrides[{i}].type");
                Ok(LevelOverride {
                    specifier: CompiledSpecifier::compile(&entry.type_specifier, &field)?,
                    to: entry.to,
                    from: entry.from,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;
        Ok(Self { entries })
    }

    /// The built-in overrides only.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::compile(&default_level_overrides())
    }

    /// `computed` after the first override that selects `ty` and whose `from`
    /// guard (if any) equals `computed`.
    pub fn apply(
        &self,
        unit: &SourceUnit,
        ty: &TypeInfo,
        computed: ImmutabilityLevel,
        locator: &dyn TypeLocator,
    ) -> ImmutabilityLevel {
        self.entries
            .iter()
            .find(|o| {
                o.from.map_or(true, |from| from == computed)
                    && locator.matches(unit, &o.specifier, ty)
            })
            .map_or(computed, |o| o.to)
    }

    pub fn entries(&self) -> &[LevelOverride] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overrides::DeclarationLocator;
    use crate::syntax::SyntaxTree;
    use sealcheck_core::types::TypeSpecifier;

    fn unit() -> SourceUnit {
        SourceUnit::new("a.ts", SyntaxTree::new(""))
    }

    #[test]
    fn test_defaults_pin_lib_collections() {
        let overrides = LevelOverrides::defaults().unwrap();
        let level = overrides.apply(
            &unit(),
            &TypeInfo::lib("Map"),
            ImmutabilityLevel::ReadonlyDeep,
            &DeclarationLocator,
        );
        assert_eq!(level, ImmutabilityLevel::Mutable);

        let local_map = TypeInfo::file("a.ts", "Map");
        let level = overrides.apply(
            &unit(),
            &local_map,
            ImmutabilityLevel::Immutable,
            &DeclarationLocator,
        );
        assert_eq!(level, ImmutabilityLevel::Immutable);
    }

    #[test]
    fn test_from_guard() {
        let mut entry = LevelOverrideEntry::new(
            TypeSpecifier::Name("Frozen".into()),
            ImmutabilityLevel::Immutable,
        );
        entry.from = Some(ImmutabilityLevel::ReadonlyDeep);
        let overrides = LevelOverrides::compile(&[entry]).unwrap();
        let ty = TypeInfo::lib("Frozen");

        let locator = DeclarationLocator;
        let guarded = overrides.apply(&unit(), &ty, ImmutabilityLevel::ReadonlyDeep, &locator);
        assert_eq!(guarded, ImmutabilityLevel::Immutable);
        let skipped = overrides.apply(&unit(), &ty, ImmutabilityLevel::Mutable, &locator);
        assert_eq!(skipped, ImmutabilityLevel::Mutable);
    }
}
