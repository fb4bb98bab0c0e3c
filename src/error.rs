//! Error types for state machine construction and transitions.

use thiserror::Error;

/// Errors returned by [`Fsm`](crate::Fsm) and its configuration helpers.
///
/// Every variant describes a caller or configuration mistake. Operations that
/// fail never leave the machine partially updated.
#[derive(Debug, Error)]
pub enum FsmError {
    /// No configuration was supplied.
    #[error("Configuration is missing. Provide an initial state and a states table")]
    Configuration,

    /// `change_state` named a state that is not in the transition table.
    #[error("Unknown state '{state}'")]
    UnknownState { state: String },

    /// `trigger` named an event the current state has no transition for.
    #[error("Invalid event '{event}' in state '{state}'")]
    InvalidEvent { state: String, event: String },

    /// The configuration document could not be parsed.
    #[error("Configuration parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FsmError {
    /// Stable code for mapping errors to user-facing messages.
    pub fn error_code(&self) -> &'static str {
        match self {
            FsmError::Configuration => "CONFIGURATION",
            FsmError::UnknownState { .. } => "UNKNOWN_STATE",
            FsmError::InvalidEvent { .. } => "INVALID_EVENT",
            FsmError::Parse(_) => "PARSE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = FsmError::InvalidEvent {
            state: "Idle".to_string(),
            event: "stop".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid event 'stop' in state 'Idle'");

        let err = FsmError::UnknownState {
            state: "Nowhere".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown state 'Nowhere'");
    }

    #[test]
    fn error_codes_are_distinct() {
        let parse = serde_json::from_str::<u8>("{").unwrap_err();
        let codes = [
            FsmError::Configuration.error_code(),
            FsmError::UnknownState {
                state: String::new(),
            }
            .error_code(),
            FsmError::InvalidEvent {
                state: String::new(),
                event: String::new(),
            }
            .error_code(),
            FsmError::from(parse).error_code(),
        ];

        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
