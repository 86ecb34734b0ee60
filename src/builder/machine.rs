//! Builder for constructing animators.

use crate::animation::Animation;
use crate::builder::connection::{ConnectionBuilder, ConnectionSpec};
use crate::builder::error::BuildError;
use crate::core::{ParamHandle, State, StateId};
use crate::machine::{Animator, AnimatorConfig, ANY_STATE};

/// Builder for constructing animators with a fluent API.
///
/// States are referenced by name; names are resolved to ids in
/// [`build`](AnimatorBuilder::build).
pub struct AnimatorBuilder<A> {
    config: AnimatorConfig,
    initial: Option<String>,
    states: Vec<State<A>>,
    parameters: Vec<ParamHandle>,
    connections: Vec<ConnectionSpec>,
}

impl<A: Animation> AnimatorBuilder<A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: AnimatorConfig::default(),
            initial: None,
            states: Vec::new(),
            parameters: Vec::new(),
            connections: Vec::new(),
        }
    }

    pub fn config(mut self, config: AnimatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a state. The first state added is the initial one unless
    /// [`initial`](Self::initial) names another.
    pub fn state(mut self, state: State<A>) -> Self {
        self.states.push(state);
        self
    }

    /// Register a parameter that no connection references yet, so host code
    /// can still write it by name.
    pub fn parameter(mut self, parameter: ParamHandle) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Choose the initial state by name.
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Add a connection using a builder.
    /// Returns an error if the builder fails validation.
    pub fn connect(mut self, builder: ConnectionBuilder) -> Result<Self, BuildError> {
        self.connections.push(builder.build()?);
        Ok(self)
    }

    /// Add a pre-built connection.
    pub fn add_connection(mut self, connection: ConnectionSpec) -> Self {
        self.connections.push(connection);
        self
    }

    /// Build the animator.
    pub fn build(self) -> Result<Animator<A>, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut names: Vec<&str> = vec![ANY_STATE];
        for state in &self.states {
            if names.contains(&state.name()) {
                return Err(BuildError::DuplicateState(state.name().to_string()));
            }
            names.push(state.name());
        }

        let initial = match &self.initial {
            Some(name) => Some(
                names
                    .iter()
                    .position(|n| *n == name.as_str())
                    .filter(|&index| index != 0)
                    .map(StateId)
                    .ok_or_else(|| BuildError::UnknownState(name.clone()))?,
            ),
            None => None,
        };

        let mut animator = Animator::with_config(self.config);
        for state in self.states {
            animator.add_state(state);
        }
        for parameter in self.parameters {
            animator.add_parameter(parameter);
        }

        for spec in self.connections {
            let from = resolve(&animator, &spec.from)?;
            let to = resolve(&animator, &spec.to)?;
            animator.create_connection(
                from,
                to,
                spec.requires_exit_time,
                spec.resets_animation,
                spec.conditions,
            )?;
        }

        if let Some(initial) = initial {
            if animator.current_state() != Some(initial) {
                animator.set_current_state(initial)?;
                animator.clear_history();
            }
        }

        Ok(animator)
    }
}

impl<A: Animation> Default for AnimatorBuilder<A> {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve<A: Animation>(animator: &Animator<A>, name: &str) -> Result<StateId, BuildError> {
    animator
        .state_by_name(name)
        .ok_or_else(|| BuildError::UnknownState(name.to_string()))
}
