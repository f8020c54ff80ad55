//! Top-level sealcheck configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{SettingsConfig, TypeDeclarationConfig, UnknownPolicy};
use crate::errors::ConfigError;

/// Project config file looked up in the analysis root.
pub const CONFIG_FILE_NAME: &str = "sealcheck.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SEALCHECK_*`)
/// 2. Project config (`sealcheck.toml` in the analysis root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SealcheckConfig {
    pub settings: SettingsConfig,
    pub rules: RulesConfig,
}

/// `[rules]`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RulesConfig {
    pub type_declaration_immutability: TypeDeclarationConfig,
}

impl SealcheckConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let project_config_path = root.join(CONFIG_FILE_NAME);
        let mut config = if project_config_path.exists() {
            Self::load_file(&project_config_path)?
        } else {
            tracing::debug!(root = %root.display(), "no project config, using defaults");
            Self::default()
        };

        Self::apply_env_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Parse a single TOML file without environment overrides.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing and embedding hosts).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from JSON, the shape linting hosts usually pass options in.
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json_str).map_err(|e| ConfigError::ParseError {
            path: "<json>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate structural constraints that do not need pattern compilation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.settings.validate()?;
        self.rules.type_declaration_immutability.validate()
    }

    /// Apply environment variable overrides.
    /// Pattern: `SEALCHECK_UNKNOWN_POLICY`, `SEALCHECK_IGNORE_INTERFACES`, etc.
    fn apply_env_overrides(config: &mut SealcheckConfig) {
        if let Ok(val) = std::env::var("SEALCHECK_UNKNOWN_POLICY") {
            match UnknownPolicy::parse_str(&val) {
                Some(policy) => config.settings.unknown_policy = Some(policy),
                None => tracing::warn!(value = %val, "ignoring invalid SEALCHECK_UNKNOWN_POLICY"),
            }
        }
        if let Ok(val) = std::env::var("SEALCHECK_IGNORE_INTERFACES") {
            if let Ok(v) = val.parse::<bool>() {
                config.rules.type_declaration_immutability.options.ignore_interfaces = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SEALCHECK_IGNORE_CLASSES") {
            if let Ok(v) = val.parse::<bool>() {
                config.rules.type_declaration_immutability.options.ignore_classes = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SEALCHECK_RULE_ENABLED") {
            if let Ok(v) = val.parse::<bool>() {
                config.rules.type_declaration_immutability.enabled = Some(v);
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
