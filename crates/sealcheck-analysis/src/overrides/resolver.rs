//! Resolving the effective options for a declaration from the override list.

use sealcheck_core::config::{OverrideEntry, RuleOptions};
use sealcheck_core::errors::ConfigError;

use super::locator::TypeLocator;
use super::specifier::CompiledSpecifier;
use crate::evaluator::CompiledOptions;
use crate::syntax::{SourceUnit, TypeInfo};

/// What a matching override does.
#[derive(Debug, Clone)]
pub enum OverrideAction {
    /// Skip the declaration entirely.
    Disable,
    /// Evaluate with these options instead of the base ones.
    Apply(Box<CompiledOptions>),
}

/// One compiled override entry.
#[derive(Debug, Clone)]
pub struct CompiledOverride {
    pub index: usize,
    pub specifiers: Vec<CompiledSpecifier>,
    pub action: OverrideAction,
}

impl CompiledOverride {
    /// Compile an entry. Inheriting entries are merged over `base` here, once.
    pub fn compile(
        index: usize,
        entry: &OverrideEntry,
        base: &RuleOptions,
        field: &str,
    ) -> Result<Self, ConfigError> {
        entry.validate(index)?;
        let field = format!("{field}.overrides[{index}]");

        let specifiers = entry
            .specifiers
            .as_slice()
            .iter()
            .enumerate()
            .map(|(i, spec)| CompiledSpecifier::compile(spec, &format!("{field}.specifiers[{i}]")))
            .collect::<Result<Vec<_>, _>>()?;

        let action = if entry.disable {
            OverrideAction::Disable
        } else {
            let options = entry.options.clone().unwrap_or_default();
            let effective = if entry.inherits() {
                options.merged_over(base)
            } else {
                options
            };
            OverrideAction::Apply(Box::new(CompiledOptions::compile(
                &effective,
                &format!("{field}.options"),
            )?))
        };

        Ok(Self {
            index,
            specifiers,
            action,
        })
    }

    pub fn selects(&self, unit: &SourceUnit, ty: &TypeInfo, locator: &dyn TypeLocator) -> bool {
        self.specifiers
            .iter()
            .any(|spec| locator.matches(unit, spec, ty))
    }
}

/// Outcome of override resolution for one declaration.
#[derive(Debug, Clone, Copy)]
pub enum Resolution<'a> {
    Options(&'a CompiledOptions),
    /// A disabling override matched. Terminal: nothing is reported.
    Disabled { index: usize },
}

/// First override selecting `ty` wins; no type or no match gives `base`.
pub fn resolve<'a>(
    base: &'a CompiledOptions,
    overrides: &'a [CompiledOverride],
    unit: &SourceUnit,
    ty: Option<&TypeInfo>,
    locator: &dyn TypeLocator,
) -> Resolution<'a> {
    let Some(ty) = ty else {
        return Resolution::Options(base);
    };
    match overrides.iter().find(|o| o.selects(unit, ty, locator)) {
        None => Resolution::Options(base),
        Some(matched) => {
            tracing::trace!(index = matched.index, ty = %ty.name, "override matched");
            match &matched.action {
                OverrideAction::Disable => Resolution::Disabled {
                    index: matched.index,
                },
                OverrideAction::Apply(options) => Resolution::Options(options),
            }
        }
    }
}
