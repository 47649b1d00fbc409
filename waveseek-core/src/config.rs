//! Coordinator configuration

use serde::Deserialize;

use crate::progress::{Progress, RangePolicy, MAX_PROGRESS};

/// Errors produced while loading a [`CoordinatorConfig`]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Initial progress {0} is outside [0, 100]")]
    InitialOutOfRange(u8),
}

/// Settings for a [`ProgressCoordinator`](crate::ProgressCoordinator)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoordinatorConfig {
    /// Value every sink shows on startup
    pub initial: u8,
    /// What to do with out-of-range input
    pub policy: RangePolicy,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            initial: Progress::DEFAULT.value(),
            policy: RangePolicy::Clamp,
        }
    }
}

impl CoordinatorConfig {
    /// Strict validation, default initial value
    pub fn strict() -> Self {
        Self {
            policy: RangePolicy::Strict,
            ..Self::default()
        }
    }

    pub fn with_initial(mut self, initial: u8) -> Self {
        self.initial = initial;
        self
    }

    /// Parse from JSON, e.g. `{"initial": 30, "policy": "strict"}`.
    /// Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial > MAX_PROGRESS {
            return Err(ConfigError::InitialOutOfRange(self.initial));
        }
        Ok(())
    }

    /// Initial value as a [`Progress`]
    pub fn initial_progress(&self) -> Result<Progress, ConfigError> {
        self.validate()?;
        Ok(Progress::clamped(self.initial as i32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = CoordinatorConfig::from_json("{}").unwrap();
        assert_eq!(config, CoordinatorConfig::default());
        assert_eq!(config.initial, 50);
        assert_eq!(config.policy, RangePolicy::Clamp);
    }

    #[test]
    fn test_parse_full() {
        let json = r#"{"initial": 30, "policy": "strict"}"#;
        let config = CoordinatorConfig::from_json(json).unwrap();
        assert_eq!(config.initial, 30);
        assert_eq!(config.policy, RangePolicy::Strict);
    }

    #[test]
    fn test_rejects_initial_above_max() {
        let err = CoordinatorConfig::from_json(r#"{"initial": 101}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InitialOutOfRange(101)));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            CoordinatorConfig::from_json(r#"{"policy": "loose"}"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            CoordinatorConfig::from_json(r#"{"initial": -5}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_builders() {
        let config = CoordinatorConfig::strict().with_initial(0);
        assert_eq!(config.policy, RangePolicy::Strict);
        assert_eq!(config.initial_progress().unwrap(), Progress::MIN);
    }
}
