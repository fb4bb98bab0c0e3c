//! Waypoint: a small finite state machine with undo/redo history
//!
//! A machine is described by a transition table that maps each state to the
//! events it accepts and the state each event leads to. The engine tracks the
//! current state, applies transitions by event or by direct jump, and keeps a
//! linear history so that moves can be undone.
//!
//! # Core Concepts
//!
//! - **Transition table**: insertion-ordered `state -> event -> target` map,
//!   fixed once the machine is built
//! - **History**: stack of previously active states consumed by `undo`
//! - **Redo slot**: the single state the most recent `undo` left
//!
//! The engine is synchronous and in-memory. Hosts that share a machine across
//! threads wrap it in their own lock.
//!
//! # Example
//!
//! ```rust
//! use waypoint::{Fsm, FsmError};
//!
//! let mut fsm = Fsm::from_json(r#"{
//!     "initial": "Idle",
//!     "states": {
//!         "Idle": { "transitions": { "start": "Running" } },
//!         "Running": { "transitions": { "finish": "Done" } },
//!         "Done": { "transitions": {} }
//!     }
//! }"#)?;
//!
//! fsm.trigger("start")?;
//! fsm.trigger("finish")?;
//! assert_eq!(fsm.state(), "Done");
//!
//! assert!(matches!(fsm.trigger("start"), Err(FsmError::InvalidEvent { .. })));
//!
//! assert!(fsm.undo());
//! assert_eq!(fsm.state(), "Running");
//! assert_eq!(fsm.states(Some("finish")), vec!["Running"]);
//! # Ok::<(), FsmError>(())
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod error;
pub mod machine;

// Re-export commonly used types
pub use builder::FsmBuilder;
pub use config::FsmConfig;
pub use self::core::{StateDef, StateHistory, StateName, TransitionTable};
pub use error::FsmError;
pub use machine::Fsm;
