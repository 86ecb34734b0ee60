//! Build errors for animator and connection builders.

use crate::machine::TopologyError;
use thiserror::Error;

/// Errors that can occur when building animators and connections.
#[derive(Debug, Error, PartialEq)]
pub enum BuildError {
    #[error("No states defined. Add at least one state with .state(..)")]
    NoStates,

    #[error("State name '{0}' is used more than once")]
    DuplicateState(String),

    #[error("No state named '{0}'")]
    UnknownState(String),

    #[error("Connection source state not specified. Call .from(name) or .from_any()")]
    MissingFromState,

    #[error("Connection target state not specified. Call .to(name)")]
    MissingToState,

    #[error(transparent)]
    Topology(#[from] TopologyError),
}
