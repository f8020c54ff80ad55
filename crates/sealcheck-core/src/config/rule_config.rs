//! Options for the type-declaration immutability rule.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::{Comparator, ImmutabilityLevel, OneOrMany, TypeSpecifier};

/// `[rules.type_declaration_immutability]`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TypeDeclarationConfig {
    /// Disable the rule entirely. Default: enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(flatten)]
    pub options: RuleOptions,
    /// Per-type option overrides, first match wins.
    pub overrides: Vec<OverrideEntry>,
}

impl TypeDeclarationConfig {
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    /// Structural validation. Pattern compilation happens when the policy is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.options.validate("rules.type_declaration_immutability")?;
        for (index, entry) in self.overrides.iter().enumerate() {
            entry.validate(index)?;
        }
        Ok(())
    }
}

/// Options that an override may replace. Every field is optional so that an
/// override can carry only the fields it changes.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RuleOptions {
    /// Ordered rule table. `None` selects the built-in table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<RuleEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_interfaces: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_classes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_identifier_pattern: Option<OneOrMany<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_accessor_pattern: Option<OneOrMany<String>>,
}

impl RuleOptions {
    /// `self` layered over `base`: fields set on `self` win.
    pub fn merged_over(&self, base: &RuleOptions) -> RuleOptions {
        RuleOptions {
            rules: self.rules.clone().or_else(|| base.rules.clone()),
            ignore_interfaces: self.ignore_interfaces.or(base.ignore_interfaces),
            ignore_classes: self.ignore_classes.or(base.ignore_classes),
            ignore_identifier_pattern: self
                .ignore_identifier_pattern
                .clone()
                .or_else(|| base.ignore_identifier_pattern.clone()),
            ignore_accessor_pattern: self
                .ignore_accessor_pattern
                .clone()
                .or_else(|| base.ignore_accessor_pattern.clone()),
        }
    }

    pub fn validate(&self, field: &str) -> Result<(), ConfigError> {
        if let Some(rules) = &self.rules {
            for (i, rule) in rules.iter().enumerate() {
                rule.validate(&format!("{field}.rules[{i}]"))?;
            }
        }
        Ok(())
    }
}

/// One row of the rule table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleEntry {
    /// Regexes matched (unanchored) against the declaration's identifier texts.
    pub identifiers: OneOrMany<String>,
    /// Required level.
    pub immutability: ImmutabilityLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparator: Option<Comparator>,
    /// Autofix rules. Absent or `false` disables fixing for this rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixer: Option<FixerSpec>,
    /// Alternative fixes offered as suggestions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<OneOrMany<FixRuleEntry>>,
}

impl RuleEntry {
    pub fn new(identifiers: &str, immutability: ImmutabilityLevel, comparator: Comparator) -> Self {
        Self {
            identifiers: OneOrMany::One(identifiers.to_string()),
            immutability,
            comparator: Some(comparator),
            fixer: None,
            suggestions: None,
        }
    }

    pub fn with_fixer(mut self, rules: Vec<FixRuleEntry>) -> Self {
        self.fixer = Some(FixerSpec::Many(rules));
        self
    }

    pub fn effective_comparator(&self) -> Comparator {
        self.comparator.unwrap_or_default()
    }

    pub fn validate(&self, field: &str) -> Result<(), ConfigError> {
        if !self.immutability.is_known() {
            return Err(ConfigError::InvalidLevel {
                field: format!("{field}.immutability"),
                message: "Unknown cannot be required".to_string(),
            });
        }
        if self.identifiers.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: format!("{field}.identifiers"),
                message: "at least one identifier pattern is required".to_string(),
            });
        }
        if let Some(FixerSpec::Flag(true)) = self.fixer {
            return Err(ConfigError::ValidationFailed {
                field: format!("{field}.fixer"),
                message: "`true` is not a fixer; give a rule, a list of rules, or `false`"
                    .to_string(),
            });
        }
        Ok(())
    }
}

/// `fixer = false`, a single rule, or an ordered list of rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FixerSpec {
    Flag(bool),
    One(FixRuleEntry),
    Many(Vec<FixRuleEntry>),
}

impl FixerSpec {
    /// The configured rules, or `None` when fixing is disabled.
    pub fn rules(&self) -> Option<&[FixRuleEntry]> {
        match self {
            Self::Flag(_) => None,
            Self::One(rule) => Some(std::slice::from_ref(rule)),
            Self::Many(rules) => Some(rules),
        }
    }
}

/// A regex over the rendered type text and its replacement template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FixRuleEntry {
    pub pattern: String,
    pub replace: String,
}

impl FixRuleEntry {
    pub fn new(pattern: &str, replace: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            replace: replace.to_string(),
        }
    }
}

/// One entry of the per-type override list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverrideEntry {
    pub specifiers: OneOrMany<TypeSpecifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<RuleOptions>,
    /// Layer `options` over the base options (default) instead of replacing them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherit: Option<bool>,
    #[serde(default)]
    pub disable: bool,
}

impl OverrideEntry {
    pub fn inherits(&self) -> bool {
        self.inherit.unwrap_or(true)
    }

    pub fn validate(&self, index: usize) -> Result<(), ConfigError> {
        if self.specifiers.is_empty() {
            return Err(ConfigError::InvalidOverride {
                index,
                message: "at least one type specifier is required".to_string(),
            });
        }
        if !self.disable && self.options.is_none() {
            return Err(ConfigError::InvalidOverride {
                index,
                message: "must either set `disable = true` or provide `options`".to_string(),
            });
        }
        if let Some(options) = &self.options {
            options.validate(&format!("overrides[{index}].options"))?;
        }
        Ok(())
    }
}

/// The built-in rule table, most specific first.
pub fn default_rule_entries() -> Vec<RuleEntry> {
    vec![
        RuleEntry::new("^I?Immutable.+", ImmutabilityLevel::Immutable, Comparator::AtLeast),
        RuleEntry::new("^I?ReadonlyDeep.+", ImmutabilityLevel::ReadonlyDeep, Comparator::AtLeast),
        RuleEntry::new("^I?Readonly.+", ImmutabilityLevel::ReadonlyShallow, Comparator::AtLeast)
            .with_fixer(vec![
                FixRuleEntry::new("^(Array|Map|Set)<(.+)>$", "Readonly$1<$2>"),
                FixRuleEntry::new("^(.+)$", "Readonly<$1>"),
            ]),
        RuleEntry::new("^I?Mutable.+", ImmutabilityLevel::Mutable, Comparator::AtMost)
            .with_fixer(vec![
                FixRuleEntry::new("^Readonly(Array|Map|Set)<(.+)>$", "$1<$2>"),
                FixRuleEntry::new("^Readonly<(.+)>$", "$1"),
            ]),
    ]
}
