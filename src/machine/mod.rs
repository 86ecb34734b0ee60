//! The animator: a parameterized state machine over animation hosts.
//!
//! This module is the imperative shell around the core types. It owns the
//! state arena and parameter table, applies host time deltas, and performs
//! state switches.
//!
//! # Key Concepts
//!
//! - **AnyState**: sentinel at [`StateId::ANY`](crate::core::StateId::ANY)
//!   whose connections are evaluated before the current state's own
//! - **Exit time**: a connection may wait for the outgoing animation to loop
//! - **Silent parameter I/O**: writes to unknown or mismatched parameters are
//!   ignored, never errors

mod animator;
mod config;
mod error;

pub use animator::{stop_animation, Animator, ANY_STATE};
pub use config::AnimatorConfig;
pub use error::{ConfigError, TopologyError};
