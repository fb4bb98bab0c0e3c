//! Core value types of the state machine.
//!
//! This module contains the data the engine works with:
//! - State and event names
//! - The insertion-ordered transition table
//! - The undo/redo history store

mod history;
mod ordered;
mod state;
mod table;

pub use history::StateHistory;
pub use ordered::OrderedMap;
pub use state::{EventName, StateName};
pub use table::{StateDef, TransitionTable};
