//! Builder for constructing state machines.

use crate::config::FsmConfig;
use crate::core::{EventName, StateDef, StateName, TransitionTable};
use crate::error::FsmError;
use crate::machine::Fsm;

/// Builder for constructing state machines with a fluent API.
#[derive(Debug, Clone, Default)]
pub struct FsmBuilder {
    initial: Option<StateName>,
    states: TransitionTable,
}

impl FsmBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateName>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state with its full set of transitions.
    /// Declaring the same state again replaces its transitions but keeps its
    /// position in the table.
    pub fn state<I, E, T>(mut self, name: impl Into<StateName>, transitions: I) -> Self
    where
        I: IntoIterator<Item = (E, T)>,
        E: Into<EventName>,
        T: Into<StateName>,
    {
        self.states
            .insert(name.into(), transitions.into_iter().collect());
        self
    }

    /// Add a single transition, declaring `from` if it is new.
    pub fn transition(
        mut self,
        from: impl Into<StateName>,
        event: impl Into<EventName>,
        to: impl Into<StateName>,
    ) -> Self {
        let from = from.into();
        match self.states.get_mut(from.as_str()) {
            Some(def) => {
                def.transitions.insert(event.into(), to.into());
            }
            None => {
                self.states.insert(from, StateDef::new().on(event, to));
            }
        }
        self
    }

    /// Build the configuration.
    /// Returns an error if no initial state was set.
    pub fn build_config(self) -> Result<FsmConfig, FsmError> {
        let initial = self.initial.ok_or(FsmError::Configuration)?;
        Ok(FsmConfig {
            initial,
            states: self.states,
        })
    }

    /// Build the state machine.
    pub fn build(self) -> Result<Fsm, FsmError> {
        self.build_config().map(Fsm::new)
    }
}
