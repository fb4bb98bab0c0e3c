//! State machine with event transitions and undo/redo.

use crate::config::FsmConfig;
use crate::core::{StateDef, StateHistory, StateName, TransitionTable};
use crate::error::FsmError;

/// Finite state machine over a fixed transition table.
///
/// Every successful [`change_state`](Fsm::change_state) or
/// [`trigger`](Fsm::trigger) records the state being left, so it can be
/// restored with [`undo`](Fsm::undo). The most recent undo can be reapplied
/// with [`redo`](Fsm::redo).
///
/// # Example
///
/// ```rust
/// use waypoint::{fsm_config, Fsm};
///
/// let mut fsm = Fsm::new(fsm_config! {
///     initial: Idle,
///     states: {
///         Idle => { start => Running },
///         Running => { stop => Idle },
///     }
/// });
///
/// fsm.trigger("start").unwrap();
/// assert_eq!(fsm.state(), "Running");
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), "Idle");
///
/// assert!(fsm.redo());
/// assert_eq!(fsm.state(), "Running");
/// ```
#[derive(Debug, Clone)]
pub struct Fsm {
    initial: StateName,
    states: TransitionTable,
    current: StateName,
    history: StateHistory,
}

impl Fsm {
    /// Create a machine in the configured initial state.
    pub fn new(config: FsmConfig) -> Self {
        tracing::debug!(
            "Created state machine: initial '{}', {} states",
            config.initial,
            config.states.len()
        );
        Self {
            current: config.initial.clone(),
            initial: config.initial,
            states: config.states,
            history: StateHistory::new(),
        }
    }

    /// Create a machine from a configuration that may be absent.
    ///
    /// Returns [`FsmError::Configuration`] when `config` is `None`.
    pub fn try_new(config: Option<FsmConfig>) -> Result<Self, FsmError> {
        config.map(Self::new).ok_or(FsmError::Configuration)
    }

    /// Create a machine from a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        FsmConfig::from_json(json).map(Self::new)
    }

    /// Active state.
    pub fn state(&self) -> &StateName {
        &self.current
    }

    /// State that [`reset`](Fsm::reset) returns to.
    pub fn initial(&self) -> &StateName {
        &self.initial
    }

    /// Transition table supplied at construction.
    pub fn table(&self) -> &TransitionTable {
        &self.states
    }

    /// Recorded states and the redo slot.
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// Jump directly to `target`, ignoring the current state's transitions.
    ///
    /// `target` must be a key of the transition table, otherwise
    /// [`FsmError::UnknownState`] is returned and nothing changes.
    pub fn change_state(&mut self, target: &str) -> Result<(), FsmError> {
        if !self.states.contains_key(target) {
            return Err(FsmError::UnknownState {
                state: target.to_string(),
            });
        }

        self.advance(StateName::from(target));
        Ok(())
    }

    /// Follow the current state's transition for `event`.
    ///
    /// Returns [`FsmError::InvalidEvent`] and changes nothing when the current
    /// state defines no transition for `event`. The target is adopted even if
    /// it is not a key of the table.
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let Some(target) = self.current_def().and_then(|def| def.target(event)) else {
            return Err(FsmError::InvalidEvent {
                state: self.current.to_string(),
                event: event.to_string(),
            });
        };

        let next = target.clone();
        if !self.states.contains_key(next.as_str()) {
            tracing::warn!(
                "Event '{}' in state '{}' leads to '{}', which has no entry in the table",
                event,
                self.current,
                next
            );
        }
        self.advance(next);
        Ok(())
    }

    /// Return to the initial state. History and the redo slot are kept.
    pub fn reset(&mut self) {
        tracing::debug!("Reset from '{}' to '{}'", self.current, self.initial);
        self.current = self.initial.clone();
    }

    /// State names in table order.
    ///
    /// With `Some(event)`, only states that map `event` to a non-empty target
    /// name are returned. A transition whose target is the empty string does
    /// not count.
    pub fn states(&self, event: Option<&str>) -> Vec<&StateName> {
        match event {
            None => self.states.keys().collect(),
            Some(event) => self
                .states
                .iter()
                .filter(|(_, def)| def.target(event).is_some_and(|t| !t.is_empty()))
                .map(|(name, _)| name)
                .collect(),
        }
    }

    /// Events the current state defines, in table order.
    pub fn events(&self) -> Vec<&str> {
        self.current_def()
            .map(|def| def.transitions.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Whether [`trigger`](Fsm::trigger) would accept `event` right now.
    pub fn can_trigger(&self, event: &str) -> bool {
        self.current_def()
            .is_some_and(|def| def.transitions.contains_key(event))
    }

    /// Whether [`undo`](Fsm::undo) has a state to return to.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Whether [`redo`](Fsm::redo) has a state to reapply.
    pub fn can_redo(&self) -> bool {
        self.history.pending().is_some()
    }

    /// Step back to the most recently left state.
    ///
    /// Returns `false` and changes nothing when there is no history.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.pop_for_undo(self.current.clone()) else {
            return false;
        };

        tracing::debug!("Undo from '{}' to '{}'", self.current, previous);
        self.current = previous;
        true
    }

    /// Return to the state the most recent undo left.
    ///
    /// Returns `false` when no undo has happened yet. The redo slot is not
    /// consumed and history is not touched, so calling this again reapplies
    /// the same state.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.history.pending() else {
            return false;
        };

        tracing::debug!("Redo from '{}' to '{}'", self.current, next);
        self.current = next.clone();
        true
    }

    /// Forget all recorded states. The current state and redo slot are kept.
    pub fn clear_history(&mut self) {
        tracing::debug!("Cleared {} history entries", self.history.len());
        self.history.clear();
    }

    fn current_def(&self) -> Option<&StateDef> {
        self.states.get(self.current.as_str())
    }

    fn advance(&mut self, next: StateName) {
        tracing::debug!("Transition '{}' -> '{}'", self.current, next);
        let previous = std::mem::replace(&mut self.current, next);
        self.history.record(previous);
    }
}

impl From<FsmConfig> for Fsm {
    fn from(config: FsmConfig) -> Self {
        Self::new(config)
    }
}
