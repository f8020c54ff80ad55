//! Configuration system for sealcheck.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod rule_config;
pub mod sealcheck_config;
pub mod settings_config;

pub use rule_config::{
    default_rule_entries, FixRuleEntry, FixerSpec, OverrideEntry, RuleEntry, RuleOptions,
    TypeDeclarationConfig,
};
pub use sealcheck_config::{RulesConfig, SealcheckConfig, CONFIG_FILE_NAME};
pub use settings_config::{
    default_level_overrides, ImmutabilitySettings, LevelOverrideEntry, LevelOverridesSetting,
    SettingsConfig, UnknownPolicy,
};
