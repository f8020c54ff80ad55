//! Compiled rule rows.

use sealcheck_core::config::RuleEntry;
use sealcheck_core::errors::ConfigError;
use sealcheck_core::types::{Comparator, ImmutabilityLevel};

use crate::fix::{compile_rules, FixConfig, FixRule};
use crate::patterns::PatternSet;

/// One compiled row of the rule table.
#[derive(Debug, Clone)]
pub struct RuleSpec {
    /// Position in the table it was compiled from.
    pub index: usize,
    pub identifiers: PatternSet,
    pub expected: ImmutabilityLevel,
    pub comparator: Comparator,
    pub fixer: FixConfig,
    pub suggestions: Vec<FixRule>,
}

impl RuleSpec {
    pub fn compile(index: usize, entry: &RuleEntry, field: &str) -> Result<Self, ConfigError> {
        entry.validate(field)?;
        let identifiers = PatternSet::compile(entry.identifiers.as_slice())
            .map_err(|e| ConfigError::pattern(format!("{field}.identifiers"), e))?;
        let fixer = FixConfig::compile(entry.fixer.as_ref(), &format!("{field}.fixer"))?;
        let suggestions = match &entry.suggestions {
            Some(entries) => compile_rules(entries.as_slice(), &format!("{field}.suggestions"))?,
            None => Vec::new(),
        };
        Ok(Self {
            index,
            identifiers,
            expected: entry.immutability,
            comparator: entry.effective_comparator(),
            fixer,
            suggestions,
        })
    }

    /// Whether any of `texts` selects this rule.
    pub fn applies_to<S: AsRef<str>>(&self, texts: &[S]) -> bool {
        self.identifiers.matches_any(texts)
    }
}
