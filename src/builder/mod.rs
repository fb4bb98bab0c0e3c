//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and the [`fsm_config!`](crate::fsm_config)
//! macro for declaring transition tables in code instead of loading them from
//! a configuration document.

pub mod machine;
pub mod macros;

pub use machine::FsmBuilder;
