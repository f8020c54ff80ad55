//! The compiled, immutable policy shared by every evaluator of a run.

use sealcheck_core::config::{SealcheckConfig, UnknownPolicy};
use sealcheck_core::errors::ConfigError;

use super::engine::Evaluator;
use super::options::CompiledOptions;
use crate::oracle::{ImmutabilityOracle, LevelOverrides};
use crate::overrides::{CompiledOverride, DeclarationLocator, TypeLocator};
use crate::syntax::SourceUnit;

const RULE_FIELD: &str = "rules.type_declaration_immutability";

static DEFAULT_LOCATOR: DeclarationLocator = DeclarationLocator;

/// Every pattern, glob and template compiled once, before any node is seen.
#[derive(Debug, Clone)]
pub struct ImmutabilityPolicy {
    pub enabled: bool,
    pub base: CompiledOptions,
    pub overrides: Vec<CompiledOverride>,
    pub level_overrides: LevelOverrides,
    pub unknown_policy: UnknownPolicy,
}

impl ImmutabilityPolicy {
    /// Compile a configuration. Any error disables the rule for the run.
    pub fn compile(config: &SealcheckConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rule = &config.rules.type_declaration_immutability;

        let base = CompiledOptions::compile(&rule.options, RULE_FIELD)?;
        let overrides = rule
            .overrides
            .iter()
            .enumerate()
            .map(|(i, entry)| CompiledOverride::compile(i, entry, &rule.options, RULE_FIELD))
            .collect::<Result<Vec<_>, _>>()?;
        let level_overrides =
            LevelOverrides::compile(&config.settings.immutability.effective_overrides())?;

        let policy = Self {
            enabled: rule.is_enabled(),
            base,
            overrides,
            level_overrides,
            unknown_policy: config.settings.effective_unknown_policy(),
        };

        if !policy.enabled {
            tracing::info!("type declaration immutability rule is disabled");
        }
        if policy.base.rules.is_empty() {
            tracing::warn!("rule table is empty; no declaration will be checked");
        }
        tracing::debug!(
            rules = policy.base.rules.len(),
            overrides = policy.overrides.len(),
            level_overrides = policy.level_overrides.len(),
            unknown_policy = ?policy.unknown_policy,
            "immutability policy compiled"
        );
        Ok(policy)
    }

    /// The policy for an empty configuration.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::compile(&SealcheckConfig::default())
    }

    /// An evaluator for one unit, locating types by declaration origin.
    pub fn evaluator<'a>(
        &'a self,
        unit: &'a SourceUnit,
        oracle: &'a dyn ImmutabilityOracle,
    ) -> Evaluator<'a> {
        Evaluator::new(self, unit, oracle, &DEFAULT_LOCATOR)
    }

    pub fn evaluator_with_locator<'a>(
        &'a self,
        unit: &'a SourceUnit,
        oracle: &'a dyn ImmutabilityOracle,
        locator: &'a dyn TypeLocator,
    ) -> Evaluator<'a> {
        Evaluator::new(self, unit, oracle, locator)
    }
}
