//! Builder for declaring connections by state name.

use crate::builder::error::BuildError;
use crate::core::{Condition, ConditionOp, ParamHandle, ParamValue};
use crate::machine::ANY_STATE;

/// A connection declared by state names, resolved when the animator is built.
#[derive(Clone, Debug)]
pub struct ConnectionSpec {
    pub from: String,
    pub to: String,
    pub requires_exit_time: bool,
    pub resets_animation: bool,
    pub conditions: Vec<Condition>,
}

/// Builder for constructing connections with a fluent API.
#[derive(Default)]
pub struct ConnectionBuilder {
    from: Option<String>,
    to: Option<String>,
    requires_exit_time: bool,
    resets_animation: bool,
    conditions: Vec<Condition>,
}

impl ConnectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source state (required).
    pub fn from(mut self, state: impl Into<String>) -> Self {
        self.from = Some(state.into());
        self
    }

    /// Make this a global connection evaluated from any state.
    pub fn from_any(self) -> Self {
        self.from(ANY_STATE)
    }

    /// Set the target state (required).
    pub fn to(mut self, state: impl Into<String>) -> Self {
        self.to = Some(state.into());
        self
    }

    /// Add a prepared condition.
    pub fn condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Add a condition comparing `parameter` to `operand`.
    pub fn when(
        self,
        parameter: &ParamHandle,
        op: ConditionOp,
        operand: impl Into<ParamValue>,
    ) -> Self {
        self.condition(Condition::new(parameter, operand, op))
    }

    /// Wait for the outgoing animation to complete a loop.
    pub fn exit_time(mut self) -> Self {
        self.requires_exit_time = true;
        self
    }

    /// Reset and stop the outgoing animation on traversal.
    pub fn resets_animation(mut self) -> Self {
        self.resets_animation = true;
        self
    }

    /// Build the connection.
    pub fn build(self) -> Result<ConnectionSpec, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(ConnectionSpec {
            from,
            to,
            requires_exit_time: self.requires_exit_time,
            resets_animation: self.resets_animation,
            conditions: self.conditions,
        })
    }
}
