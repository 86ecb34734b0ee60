//! Machine error types.

use crate::core::StateId;
use thiserror::Error;

/// Invalid topology requested by the caller.
///
/// The machine is left unchanged whenever one of these is returned.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TopologyError {
    #[error("Cannot connect '{from}' into AnyState")]
    IntoAnyState { from: String },

    #[error("Cannot connect '{state}' to itself")]
    SelfLoop { state: String },

    #[error("State {0} does not belong to this machine")]
    UnknownState(StateId),

    #[error("AnyState cannot become the current state")]
    AnyStateNotActivatable,
}

/// Errors raised while loading an [`AnimatorConfig`](super::AnimatorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
