//! First-match-wins rule table.

use sealcheck_core::config::{default_rule_entries, RuleEntry};
use sealcheck_core::errors::ConfigError;

use super::types::RuleSpec;

/// Ordered, immutable list of compiled rules.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<RuleSpec>,
}

impl RuleTable {
    pub fn compile(entries: &[RuleEntry], field: &str) -> Result<Self, ConfigError> {
        let rules = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| RuleSpec::compile(i, entry, &format!("{field}.rules[{i}]")))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// The built-in table.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::compile(&default_rule_entries(), "defaults")
    }

    /// The first rule whose patterns match any of `texts`.
    pub fn resolve<S: AsRef<str>>(&self, texts: &[S]) -> Option<&RuleSpec> {
        let rule = self.rules.iter().find(|rule| rule.applies_to(texts));
        if let Some(rule) = rule {
            tracing::trace!(index = rule.index, expected = %rule.expected, "rule resolved");
        }
        rule
    }

    pub fn rules(&self) -> &[RuleSpec] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
