//! States and the conditional connections leaving them.

use super::condition::{all_satisfied, Condition};
use crate::animation::Animation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a state inside its machine.
///
/// Index `0` is always the machine's AnyState.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateId(pub(crate) usize);

impl StateId {
    /// The AnyState sentinel of every machine.
    pub const ANY: StateId = StateId(0);

    pub fn index(self) -> usize {
        self.0
    }

    pub fn is_any(self) -> bool {
        self == Self::ANY
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Directed, conditional edge to another state.
#[derive(Clone, Debug)]
pub struct Connection {
    to: StateId,
    requires_exit_time: bool,
    resets_animation: bool,
    conditions: Vec<Condition>,
}

impl Connection {
    pub fn new(
        to: StateId,
        requires_exit_time: bool,
        resets_animation: bool,
        conditions: Vec<Condition>,
    ) -> Self {
        Self {
            to,
            requires_exit_time,
            resets_animation,
            conditions,
        }
    }

    pub fn to(&self) -> StateId {
        self.to
    }

    pub fn requires_exit_time(&self) -> bool {
        self.requires_exit_time
    }

    pub fn set_requires_exit_time(&mut self, requires_exit_time: bool) {
        self.requires_exit_time = requires_exit_time;
    }

    pub fn resets_animation(&self) -> bool {
        self.resets_animation
    }

    pub fn set_resets_animation(&mut self, resets_animation: bool) {
        self.resets_animation = resets_animation;
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Append a condition. Conditions are never removed.
    pub fn add_condition(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    /// All conditions hold; an edge without conditions always passes.
    pub fn is_satisfied(&self) -> bool {
        all_satisfied(&self.conditions)
    }

    /// Conditions hold and the exit-time policy is met.
    ///
    /// `exit_ready` is the loop flag of the animation the edge is leaving.
    pub fn qualifies(&self, exit_ready: bool) -> bool {
        self.is_satisfied() && (!self.requires_exit_time || exit_ready)
    }

    /// Whether traversing this edge stops the outgoing animation.
    pub fn stops_animation(&self) -> bool {
        self.resets_animation || self.requires_exit_time
    }
}

/// Named node of the machine with an optional animation binding.
///
/// Outgoing connections are evaluated in insertion order; the first one
/// that qualifies wins.
#[derive(Debug)]
pub struct State<A> {
    name: String,
    animation: Option<A>,
    connections: Vec<Connection>,
}

impl<A> State<A> {
    pub fn new(name: impl Into<String>, animation: A) -> Self {
        Self {
            name: name.into(),
            animation: Some(animation),
            connections: Vec::new(),
        }
    }

    /// A state with no animation bound.
    pub fn unbound(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            animation: None,
            connections: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn animation(&self) -> Option<&A> {
        self.animation.as_ref()
    }

    pub fn animation_mut(&mut self) -> Option<&mut A> {
        self.animation.as_mut()
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn connection_to(&self, to: StateId) -> Option<&Connection> {
        self.connections.iter().find(|c| c.to == to)
    }

    pub fn connection_to_mut(&mut self, to: StateId) -> Option<&mut Connection> {
        self.connections.iter_mut().find(|c| c.to == to)
    }

    /// Add an edge to `to`. The first edge to a destination wins; later
    /// calls for the same destination are ignored and return `false`.
    pub fn create_connection(
        &mut self,
        to: StateId,
        requires_exit_time: bool,
        resets_animation: bool,
        conditions: Vec<Condition>,
    ) -> bool {
        if self.connection_to(to).is_some() {
            return false;
        }
        self.connections.push(Connection::new(
            to,
            requires_exit_time,
            resets_animation,
            conditions,
        ));
        true
    }

    /// First connection that qualifies given the outgoing animation's loop flag.
    pub fn next_connection(&self, exit_ready: bool) -> Option<&Connection> {
        self.connections.iter().find(|c| c.qualifies(exit_ready))
    }
}

impl<A: Animation> State<A> {
    /// Whether this state's own animation has completed a loop.
    pub fn exit_ready(&self) -> bool {
        self.animation
            .as_ref()
            .is_some_and(|animation| animation.has_looped_once())
    }

    /// Resolve the destination of the first qualifying connection.
    pub fn find_next_state(&self) -> Option<StateId> {
        self.next_connection(self.exit_ready()).map(Connection::to)
    }
}
