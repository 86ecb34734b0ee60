//! Machine configuration.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Runtime options of an [`Animator`](super::Animator).
///
/// Every field has a default, so partial JSON documents are accepted.
///
/// # Example
///
/// ```rust
/// use animstate::machine::AnimatorConfig;
///
/// let config = AnimatorConfig::from_json(r#"{ "history_limit": 8 }"#).unwrap();
/// assert_eq!(config.history_limit, 8);
/// assert!(config.start_initial_animation);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorConfig {
    /// Maximum number of switches kept in history (0 disables it)
    pub history_limit: usize,

    /// Start the animation of the first state added, which becomes current
    pub start_initial_animation: bool,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            history_limit: 64,
            start_initial_animation: true,
        }
    }
}

impl AnimatorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
