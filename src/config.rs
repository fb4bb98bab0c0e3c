//! Construction value for a state machine.
//!
//! Configurations can be declared in code (see [`crate::builder`]) or loaded
//! from JSON documents of the form:
//!
//! ```json
//! {
//!   "initial": "Idle",
//!   "states": {
//!     "Idle":    { "transitions": { "start": "Running" } },
//!     "Running": { "transitions": { "pause": "Idle", "finish": "Done" } },
//!     "Done":    { "transitions": {} }
//!   }
//! }
//! ```
//!
//! Object key order in the document is the table order.

use crate::core::{StateName, TransitionTable};
use crate::error::FsmError;
use serde::{Deserialize, Serialize};

/// Initial state plus transition table.
///
/// Neither the initial state nor the transition targets are required to be
/// keys of `states`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsmConfig {
    pub initial: StateName,
    pub states: TransitionTable,
}

impl FsmConfig {
    pub fn new(initial: impl Into<StateName>, states: TransitionTable) -> Self {
        Self {
            initial: initial.into(),
            states,
        }
    }

    /// Parse a JSON configuration document.
    ///
    /// A `null` document is a missing configuration.
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        let config: Option<FsmConfig> = serde_json::from_str(json)?;
        config.ok_or(FsmError::Configuration)
    }

    /// Render the configuration as JSON, keeping table order.
    pub fn to_json(&self) -> Result<String, FsmError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
