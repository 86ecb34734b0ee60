//! Topology issues reported by the lint.

use thiserror::Error;

/// A defect in a machine's topology that will not fail at runtime but makes
/// part of the machine dead or ambiguous.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LintIssue {
    #[error("Parameter name '{name}' is registered {count} times; lookups use the first")]
    DuplicateParameterName { name: String, count: usize },

    #[error("Condition on '{from}' -> '{to}' compares {parameter} ({expected}) against a {got} operand and can never match")]
    OperandShapeMismatch {
        from: String,
        to: String,
        parameter: String,
        expected: &'static str,
        got: &'static str,
    },

    #[error("Condition on '{from}' -> '{to}' reads unregistered parameter '{parameter}'")]
    UnregisteredParameter {
        from: String,
        to: String,
        parameter: String,
    },

    #[error("State '{state}' has no animation bound")]
    UnboundState { state: String },

    #[error("Connection '{from}' -> '{to}' requires exit time but '{from}' has no animation")]
    ExitTimeWithoutAnimation { from: String, to: String },

    #[error("State '{state}' is not current and no connection leads to it")]
    UnreachableState { state: String },
}
