//! Combat rules configuration

use crate::entity::DEFAULT_HEALTH;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Error loading combat rules
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// How damage amounts are validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamagePolicy {
    /// Any amount is accepted; negative damage heals
    #[default]
    Lenient,
    /// Negative damage is rejected with an error
    Strict,
}

/// Tunable combat rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatRules {
    /// Starting health for entities built with [`Entity::from_rules`](crate::Entity::from_rules)
    #[serde(default = "default_health")]
    pub default_health: i64,
    #[serde(default)]
    pub damage_policy: DamagePolicy,
}

impl Default for CombatRules {
    fn default() -> Self {
        CombatRules {
            default_health: DEFAULT_HEALTH,
            damage_policy: DamagePolicy::Lenient,
        }
    }
}

fn default_health() -> i64 {
    DEFAULT_HEALTH
}

impl CombatRules {
    /// Default rules with negative damage rejected
    pub fn strict() -> Self {
        CombatRules {
            damage_policy: DamagePolicy::Strict,
            ..Default::default()
        }
    }

    /// Load rules from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse rules from a TOML string
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let rules: CombatRules = toml::from_str(toml)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_health <= 0 {
            return Err(ConfigError::ValidationError(format!(
                "default_health must be positive, got {}",
                self.default_health
            )));
        }
        Ok(())
    }
}
