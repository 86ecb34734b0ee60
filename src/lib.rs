//! Animstate: a parameterized animation state machine
//!
//! Animstate drives which animation an entity plays. Host code writes typed
//! parameters (floats, bools, enums), and the animator walks connections
//! between states whenever their conditions hold, starting and stopping the
//! bound animations as it goes.
//!
//! # Core Concepts
//!
//! - **Parameter**: A named, shared, typed value written by host code
//! - **Condition**: A comparison of a parameter against an operand, built from
//!   combinable operator flags
//! - **State**: A named node bound to an animation, owning outgoing connections
//! - **AnyState**: A sentinel state whose connections are checked before the
//!   current state's own, from any state
//! - **Exit time**: A connection policy that waits for the outgoing animation to
//!   finish a loop
//!
//! # Example
//!
//! ```rust
//! use animstate::animation::FrameAnimation;
//! use animstate::builder::{AnimatorBuilder, ConnectionBuilder};
//! use animstate::core::{ConditionOp, ParamHandle, State};
//!
//! let speed = ParamHandle::float("speed", 0.0);
//! let jump = ParamHandle::boolean("jump", false);
//!
//! let mut animator = AnimatorBuilder::new()
//!     .state(State::new("Idle", FrameAnimation::new(vec!["idle"], 0.1)))
//!     .state(State::new("Run", FrameAnimation::new(vec!["run_a", "run_b"], 0.1)))
//!     .state(State::new("Jump", FrameAnimation::new(vec!["jump"], 0.1)))
//!     .connect(ConnectionBuilder::new().from("Idle").to("Run").when(&speed, ConditionOp::GTR, 0.1))
//!     .unwrap()
//!     .connect(ConnectionBuilder::new().from_any().to("Jump").when(&jump, ConditionOp::EQU, true))
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! animator.set_float("speed", 2.0);
//! animator.update(1.0 / 60.0);
//! assert_eq!(animator.current_state_name(), Some("Run"));
//!
//! animator.set_bool("jump", true);
//! animator.update(1.0 / 60.0);
//! assert_eq!(animator.current_animation_value(), "jump");
//! ```

pub mod animation;
pub mod builder;
pub mod core;
pub mod lint;
pub mod machine;

// Re-export commonly used types
pub use animation::{Animation, FrameAnimation};
pub use builder::{AnimatorBuilder, BuildError, ConnectionBuilder};
pub use core::{Condition, ConditionOp, ParamEnum, ParamHandle, ParamValue, State, StateId};
pub use lint::{LintIssue, LintResult};
pub use machine::{Animator, AnimatorConfig, TopologyError, ANY_STATE};
