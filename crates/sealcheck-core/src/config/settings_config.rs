//! Shared settings: oracle level overrides and the `Unknown` comparison policy.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::types::{ImmutabilityLevel, TypeSpecifier};

/// `[settings]`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SettingsConfig {
    pub immutability: ImmutabilitySettings,
    /// How an `Unknown` actual level compares. Default: `bottom`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unknown_policy: Option<UnknownPolicy>,
}

impl SettingsConfig {
    pub fn effective_unknown_policy(&self) -> UnknownPolicy {
        self.unknown_policy.unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.immutability.validate()
    }
}

/// `[settings.immutability]`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ImmutabilitySettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<LevelOverridesSetting>,
}

impl ImmutabilitySettings {
    /// The level overrides handed to the oracle: user values first, then the
    /// built-in defaults unless `keep_default = false`.
    pub fn effective_overrides(&self) -> Vec<LevelOverrideEntry> {
        let (keep_default, values) = match &self.overrides {
            None => (true, Vec::new()),
            Some(LevelOverridesSetting::List(values)) => (true, values.clone()),
            Some(LevelOverridesSetting::Keyed {
                keep_default,
                values,
            }) => (keep_default.unwrap_or(true), values.clone()),
        };

        let mut overrides = values;
        if keep_default {
            overrides.extend(default_level_overrides());
        }
        overrides
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = match &self.overrides {
            None => return Ok(()),
            Some(LevelOverridesSetting::List(values)) => values,
            Some(LevelOverridesSetting::Keyed { values, .. }) => values,
        };
        for (i, value) in values.iter().enumerate() {
            if !value.to.is_known() {
                return Err(ConfigError::InvalidLevel {
                    field: format!("settings.immutability.overrides[{i}].to"),
                    message: "cannot override a type to Unknown".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Either a bare list (defaults kept) or `{ keep_default, values }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum LevelOverridesSetting {
    List(Vec<LevelOverrideEntry>),
    Keyed {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        keep_default: Option<bool>,
        #[serde(default)]
        values: Vec<LevelOverrideEntry>,
    },
}

/// Pin the immutability of matching types.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LevelOverrideEntry {
    #[serde(rename = "type")]
    pub type_specifier: TypeSpecifier,
    pub to: ImmutabilityLevel,
    /// Only apply when the computed level equals this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<ImmutabilityLevel>,
}

impl LevelOverrideEntry {
    pub fn new(type_specifier: TypeSpecifier, to: ImmutabilityLevel) -> Self {
        Self {
            type_specifier,
            to,
            from: None,
        }
    }
}

/// Standard-library collections and objects whose methods mutate in place.
pub fn default_level_overrides() -> Vec<LevelOverrideEntry> {
    ["Map", "Set", "Date", "URL", "URLSearchParams"]
        .into_iter()
        .map(|name| LevelOverrideEntry::new(TypeSpecifier::lib(name), ImmutabilityLevel::Mutable))
        .collect()
}

/// How an `Unknown` actual level is compared against an expected level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownPolicy {
    /// Rank `Unknown` below `Mutable`: fails `AtLeast`/`Exactly`/`More`,
    /// passes `AtMost`/`Less`.
    #[default]
    Bottom,
    /// Every comparison against `Unknown` fails.
    Unsatisfied,
    /// Every comparison against `Unknown` passes.
    Satisfied,
}

impl UnknownPolicy {
    pub fn parse_str(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "bottom" => Some(Self::Bottom),
            "unsatisfied" => Some(Self::Unsatisfied),
            "satisfied" => Some(Self::Satisfied),
            _ => None,
        }
    }
}
