//! State and event names.
//!
//! States are identified by plain string names so that tables can be loaded
//! from configuration documents as well as declared in code.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Name of an event that drives a transition.
pub type EventName = String;

/// Name of a state in the machine.
///
/// # Example
///
/// ```rust
/// use waypoint::core::StateName;
///
/// let state = StateName::from("Idle");
/// assert_eq!(state.as_str(), "Idle");
/// assert_eq!(state, "Idle");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateName(String);

impl StateName {
    /// Create a name from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty name never satisfies an event filter in
    /// [`Fsm::states`](crate::Fsm::states).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the name, returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for StateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for StateName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StateName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StateName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for StateName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for StateName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StateName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn name_round_trips_through_conversions() {
        let from_str = StateName::from("Running");
        let from_string = StateName::from("Running".to_string());
        let built = StateName::new("Running");

        assert_eq!(from_str, from_string);
        assert_eq!(from_str, built);
        assert_eq!(built.into_inner(), "Running");
    }

    #[test]
    fn display_prints_bare_name() {
        assert_eq!(StateName::from("Done").to_string(), "Done");
    }

    #[test]
    fn empty_name_is_detected() {
        assert!(StateName::from("").is_empty());
        assert!(!StateName::from("A").is_empty());
    }

    #[test]
    fn lookup_by_str_uses_borrow() {
        let mut map = HashMap::new();
        map.insert(StateName::from("A"), 1);
        assert_eq!(map.get("A"), Some(&1));
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&StateName::from("Idle")).unwrap();
        assert_eq!(json, "\"Idle\"");

        let back: StateName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, "Idle");
    }
}
