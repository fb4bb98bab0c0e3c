//! The state machine engine.
//!
//! [`Fsm`] owns a transition table fixed at construction, the current state,
//! and the undo/redo history. All operations are synchronous and complete
//! before returning.

mod fsm;

pub use fsm::Fsm;
