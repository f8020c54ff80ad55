//! Reference oracle backed by a type-name table.

use sealcheck_core::types::collections::FxHashMap;
use sealcheck_core::types::ImmutabilityLevel;

use super::{ClassifyRequest, ImmutabilityOracle};
use crate::overrides::DeclarationLocator;

/// Looks the type name up in a table, then applies the level overrides.
///
/// Types missing from the table, and declarations without a known type, are
/// `Unknown`. Results above the request's `max_level` are clamped to it.
#[derive(Debug, Clone, Default)]
pub struct TableOracle {
    levels: FxHashMap<String, ImmutabilityLevel>,
    locator: DeclarationLocator,
}

impl TableOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, level: ImmutabilityLevel) -> Self {
        self.insert(name, level);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, level: ImmutabilityLevel) {
        self.levels.insert(name.into(), level);
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl ImmutabilityOracle for TableOracle {
    fn classify(&self, request: &ClassifyRequest<'_>) -> ImmutabilityLevel {
        let Some(ty) = request.ty else {
            return ImmutabilityLevel::Unknown;
        };
        let computed = self
            .levels
            .get(&ty.name)
            .copied()
            .unwrap_or(ImmutabilityLevel::Unknown);
        let level = request
            .overrides
            .apply(request.unit, ty, computed, &self.locator);
        clamp(level, request.max_level)
    }
}

fn clamp(level: ImmutabilityLevel, max: Option<ImmutabilityLevel>) -> ImmutabilityLevel {
    match (level.rank(), max.and_then(|m| m.rank().map(|r| (m, r)))) {
        (Some(rank), Some((max, max_rank))) if rank > max_rank => max,
        _ => level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::LevelOverrides;
    use crate::syntax::{NodeId, SourceUnit, SyntaxTree, TypeInfo};

    fn classify(
        oracle: &TableOracle,
        ty: Option<&TypeInfo>,
        max: Option<ImmutabilityLevel>,
    ) -> ImmutabilityLevel {
        let unit = SourceUnit::new("a.ts", SyntaxTree::new(""));
        let overrides = LevelOverrides::defaults().unwrap();
        oracle.classify(&ClassifyRequest {
            unit: &unit,
            node: NodeId(0),
            ty,
            overrides: &overrides,
            use_cache: true,
            max_level: max,
        })
    }

    #[test]
    fn test_table_lookup_and_unknown() {
        let oracle = TableOracle::new().with("Point", ImmutabilityLevel::Immutable);
        let point = TypeInfo::file("a.ts", "Point");
        assert_eq!(classify(&oracle, Some(&point), None), ImmutabilityLevel::Immutable);
        let other = TypeInfo::file("a.ts", "Other");
        assert_eq!(classify(&oracle, Some(&other), None), ImmutabilityLevel::Unknown);
        assert_eq!(classify(&oracle, None, None), ImmutabilityLevel::Unknown);
    }

    #[test]
    fn test_overrides_apply_after_lookup() {
        let oracle = TableOracle::new().with("Set", ImmutabilityLevel::ReadonlyDeep);
        let set = TypeInfo::lib("Set");
        assert_eq!(classify(&oracle, Some(&set), None), ImmutabilityLevel::Mutable);
    }

    #[test]
    fn test_result_clamped_to_hint() {
        let oracle = TableOracle::new().with("Point", ImmutabilityLevel::Immutable);
        let point = TypeInfo::file("a.ts", "Point");
        let level = classify(&oracle, Some(&point), Some(ImmutabilityLevel::ReadonlyShallow));
        assert_eq!(level, ImmutabilityLevel::ReadonlyShallow);
    }

    fn always_deep(_: &ClassifyRequest<'_>) -> ImmutabilityLevel {
        ImmutabilityLevel::ReadonlyDeep
    }

    #[test]
    fn test_functions_are_oracles() {
        let unit = SourceUnit::new("a.ts", SyntaxTree::new(""));
        let overrides = LevelOverrides::default();
        let request = ClassifyRequest {
            unit: &unit,
            node: NodeId(0),
            ty: None,
            overrides: &overrides,
            use_cache: true,
            max_level: None,
        };
        assert_eq!(always_deep.classify(&request), ImmutabilityLevel::ReadonlyDeep);
    }
}
