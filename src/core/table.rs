//! Transition table types.
//!
//! A table maps each state to its [`StateDef`], and each `StateDef` maps event
//! names to target states. Targets are not checked against the table's keys.

use super::ordered::OrderedMap;
use super::state::{EventName, StateName};
use serde::{Deserialize, Serialize};

/// Outgoing transitions of a single state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDef {
    /// Event name to target state, in declaration order.
    #[serde(default)]
    pub transitions: OrderedMap<EventName, StateName>,
}

impl StateDef {
    /// State with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition, replacing any earlier target for the same event.
    pub fn on(mut self, event: impl Into<EventName>, target: impl Into<StateName>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Target for `event`, if this state defines one.
    pub fn target(&self, event: &str) -> Option<&StateName> {
        self.transitions.get(event)
    }
}

impl<E, T> FromIterator<(E, T)> for StateDef
where
    E: Into<EventName>,
    T: Into<StateName>,
{
    fn from_iter<I: IntoIterator<Item = (E, T)>>(iter: I) -> Self {
        Self {
            transitions: iter
                .into_iter()
                .map(|(e, t)| (e.into(), t.into()))
                .collect(),
        }
    }
}

/// State name to [`StateDef`], in declaration order.
pub type TransitionTable = OrderedMap<StateName, StateDef>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_chains_transitions_in_order() {
        let def = StateDef::new().on("start", "Running").on("abort", "Failed");

        let events: Vec<_> = def.transitions.keys().map(String::as_str).collect();
        assert_eq!(events, vec!["start", "abort"]);
        assert_eq!(def.target("start"), Some(&StateName::from("Running")));
        assert_eq!(def.target("missing"), None);
    }

    #[test]
    fn collects_from_pairs() {
        let def: StateDef = [("go", "B"), ("stop", "A")].into_iter().collect();
        assert_eq!(def.transitions.len(), 2);
        assert_eq!(def.target("stop"), Some(&StateName::from("A")));
    }

    #[test]
    fn missing_transitions_key_defaults_to_empty() {
        let def: StateDef = serde_json::from_str("{}").unwrap();
        assert!(def.transitions.is_empty());
    }

    #[test]
    fn table_lookup_by_str() {
        let mut table = TransitionTable::new();
        table.insert("A".into(), StateDef::new().on("go", "B"));

        assert!(table.contains_key("A"));
        assert!(!table.contains_key("B"));
    }
}
