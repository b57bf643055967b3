//! Configuration types
//!
//! Configuration is layered: compiled defaults, then an optional TOML file,
//! then environment variables. Binaries apply command-line overrides last.

use crate::{ConfigError, CueResult};
use serde::{Deserialize, Serialize};

/// Interactions required at the current depth before the next depth unlocks.
pub const DEFAULT_MIN_INTERACTIONS: u32 = 3;

/// Upper bound accepted for `min_interactions`.
pub const MAX_MIN_INTERACTIONS: u32 = 100;

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CueGateConfig {
    /// Progression gate threshold.
    pub min_interactions: u32,
    /// Cap on the candidate list handed to the renderer. `None` = no cap.
    pub max_candidates: Option<usize>,
    /// Treat any validation issue in a batch as a hard failure.
    pub strict_validation: bool,
}

impl Default for CueGateConfig {
    fn default() -> Self {
        Self {
            min_interactions: DEFAULT_MIN_INTERACTIONS,
            max_candidates: None,
            strict_validation: false,
        }
    }
}

/// TOML file shape. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    min_interactions: Option<u32>,
    max_candidates: Option<usize>,
    strict_validation: Option<bool>,
}

impl CueGateConfig {
    /// Overlay values from a TOML document onto `self`.
    pub fn merge_toml_str(mut self, content: &str) -> CueResult<Self> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        if let Some(min) = file.min_interactions {
            self.min_interactions = min;
        }
        if file.max_candidates.is_some() {
            self.max_candidates = file.max_candidates;
        }
        if let Some(strict) = file.strict_validation {
            self.strict_validation = strict;
        }
        self.validate()?;
        Ok(self)
    }

    /// Defaults overlaid with a TOML document.
    pub fn from_toml_str(content: &str) -> CueResult<Self> {
        Self::default().merge_toml_str(content)
    }

    /// Overlay values from environment variables onto `self`.
    ///
    /// Environment variables:
    /// - `CUEGATE_MIN_INTERACTIONS`: progression threshold (default: 3)
    /// - `CUEGATE_MAX_CANDIDATES`: candidate cap, empty = no cap; `0` is
    ///   rejected, as it is in the TOML file
    /// - `CUEGATE_STRICT_VALIDATION`: "true"/"1" to fail on validation issues
    pub fn merge_env(self) -> CueResult<Self> {
        self.merge_vars(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with environment variables.
    pub fn from_env() -> CueResult<Self> {
        Self::default().merge_env()
    }

    fn merge_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> CueResult<Self> {
        if let Some(raw) = lookup("CUEGATE_MIN_INTERACTIONS") {
            self.min_interactions = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "min_interactions".to_string(),
                value: raw.clone(),
                reason: "must be a non-negative integer".to_string(),
            })?;
        }

        if let Some(raw) = lookup("CUEGATE_MAX_CANDIDATES") {
            let trimmed = raw.trim();
            self.max_candidates = if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                    field: "max_candidates".to_string(),
                    value: raw.clone(),
                    reason: "must be a positive integer".to_string(),
                })?)
            };
        }

        if let Some(raw) = lookup("CUEGATE_STRICT_VALIDATION") {
            self.strict_validation = matches!(raw.trim().to_lowercase().as_str(), "true" | "1");
        }

        self.validate()?;
        Ok(self)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> CueResult<()> {
        if self.min_interactions == 0 || self.min_interactions > MAX_MIN_INTERACTIONS {
            return Err(ConfigError::InvalidValue {
                field: "min_interactions".to_string(),
                value: self.min_interactions.to_string(),
                reason: format!("must be between 1 and {}", MAX_MIN_INTERACTIONS),
            }
            .into());
        }

        if self.max_candidates == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "max_candidates".to_string(),
                value: "0".to_string(),
                reason: "must be greater than 0 when set".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CueError;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_is_valid() {
        let config = CueGateConfig::default();
        assert_eq!(config.min_interactions, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_overlay_keeps_missing_keys() {
        let config = CueGateConfig::from_toml_str("max_candidates = 12\n").unwrap();
        assert_eq!(config.min_interactions, DEFAULT_MIN_INTERACTIONS);
        assert_eq!(config.max_candidates, Some(12));
    }

    #[test]
    fn test_toml_rejects_unknown_keys() {
        let result = CueGateConfig::from_toml_str("min_interaction = 4\n");
        assert!(matches!(result, Err(CueError::Config(ConfigError::Parse { .. }))));
    }

    #[test]
    fn test_toml_rejects_zero_threshold() {
        let result = CueGateConfig::from_toml_str("min_interactions = 0\n");
        assert!(matches!(
            result,
            Err(CueError::Config(ConfigError::InvalidValue { field, .. })) if field == "min_interactions"
        ));
    }

    #[test]
    fn test_env_overlay() {
        let config = CueGateConfig::default()
            .merge_vars(vars(&[
                ("CUEGATE_MIN_INTERACTIONS", "5"),
                ("CUEGATE_MAX_CANDIDATES", " "),
                ("CUEGATE_STRICT_VALIDATION", "TRUE"),
            ]))
            .unwrap();
        assert_eq!(config.min_interactions, 5);
        assert_eq!(config.max_candidates, None);
        assert!(config.strict_validation);
    }

    #[test]
    fn test_zero_candidate_cap_rejected_from_env_and_toml() {
        let from_env = CueGateConfig::default().merge_vars(vars(&[("CUEGATE_MAX_CANDIDATES", "0")]));
        let from_toml = CueGateConfig::from_toml_str("max_candidates = 0\n");
        for result in [from_env, from_toml] {
            assert!(matches!(
                result,
                Err(CueError::Config(ConfigError::InvalidValue { field, .. })) if field == "max_candidates"
            ));
        }
    }

    #[test]
    fn test_env_rejects_garbage() {
        let result = CueGateConfig::default().merge_vars(vars(&[("CUEGATE_MIN_INTERACTIONS", "three")]));
        assert!(matches!(
            result,
            Err(CueError::Config(ConfigError::InvalidValue { field, .. })) if field == "min_interactions"
        ));
    }
}
