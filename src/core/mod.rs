//! Core state machine types.
//!
//! This module contains the building blocks the machine is assembled from:
//! - Typed parameters and shared parameter handles
//! - Conditions with bitflag-combinable operators
//! - States and their outgoing connections
//! - Bounded switch history

mod condition;
mod history;
mod param;
mod state;

pub use condition::{all_satisfied, Condition, ConditionOp};
pub use history::{StateSwitch, SwitchCause, SwitchHistory};
pub use param::{EnumValue, ParamEnum, ParamHandle, ParamValue, Parameter};
pub use state::{Connection, State, StateId};
