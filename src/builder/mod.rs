//! Builder API for ergonomic animator construction.
//!
//! This module provides fluent builders and macros for declaring states,
//! parameters and connections by name, validated when the animator is built.

pub mod connection;
pub mod error;
pub mod machine;
pub mod macros;

pub use connection::{ConnectionBuilder, ConnectionSpec};
pub use error::BuildError;
pub use machine::AnimatorBuilder;

use crate::core::Condition;

/// Create an unconditional connection that fires as soon as it is evaluated.
///
/// # Example
///
/// ```
/// use animstate::animation::FrameAnimation;
/// use animstate::builder::{simple_connection, AnimatorBuilder};
/// use animstate::core::State;
///
/// let mut animator = AnimatorBuilder::new()
///     .state(State::new("Spawn", FrameAnimation::new(vec![0u8], 0.1)))
///     .state(State::new("Idle", FrameAnimation::new(vec![1u8], 0.1)))
///     .add_connection(simple_connection("Spawn", "Idle"))
///     .build()
///     .unwrap();
///
/// animator.update(0.0);
/// assert_eq!(animator.current_state_name(), Some("Idle"));
/// ```
pub fn simple_connection(from: impl Into<String>, to: impl Into<String>) -> ConnectionSpec {
    ConnectionSpec {
        from: from.into(),
        to: to.into(),
        requires_exit_time: false,
        resets_animation: false,
        conditions: Vec::new(),
    }
}

/// Create a connection gated by `conditions`.
pub fn conditional_connection(
    from: impl Into<String>,
    to: impl Into<String>,
    conditions: Vec<Condition>,
) -> ConnectionSpec {
    ConnectionSpec {
        conditions,
        ..simple_connection(from, to)
    }
}

/// Create a connection that waits for the outgoing animation to loop once.
pub fn exit_time_connection(from: impl Into<String>, to: impl Into<String>) -> ConnectionSpec {
    ConnectionSpec {
        requires_exit_time: true,
        ..simple_connection(from, to)
    }
}
