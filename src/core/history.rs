//! Undo/redo history for a state machine.
//!
//! History is a stack of previously active states plus a single pending slot
//! that remembers where the most recent undo came from. Only that one undo can
//! be redone; a later undo overwrites the slot.

use super::state::StateName;

/// Stack of visited states with a one-level redo slot.
///
/// # Example
///
/// ```rust
/// use waypoint::core::{StateHistory, StateName};
///
/// let mut history = StateHistory::new();
/// history.record(StateName::from("A"));
/// history.record(StateName::from("B"));
///
/// // Undo from C: B comes back, C is remembered for redo.
/// let previous = history.pop_for_undo(StateName::from("C"));
/// assert_eq!(previous, Some(StateName::from("B")));
/// assert_eq!(history.pending(), Some(&StateName::from("C")));
/// assert_eq!(history.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateHistory {
    entries: Vec<StateName>,
    pending: Option<StateName>,
}

impl StateHistory {
    /// Create an empty history with no redo slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push the state being left.
    pub fn record(&mut self, previous: StateName) {
        self.entries.push(previous);
    }

    /// Pop the most recent entry and remember `current` for redo.
    ///
    /// Returns `None` and leaves the pending slot untouched when the stack is
    /// empty.
    pub fn pop_for_undo(&mut self, current: StateName) -> Option<StateName> {
        let previous = self.entries.pop()?;
        self.pending = Some(current);
        Some(previous)
    }

    /// State the most recent undo left, if any.
    ///
    /// The slot is not consumed by redo.
    pub fn pending(&self) -> Option<&StateName> {
        self.pending.as_ref()
    }

    /// Drop all recorded entries. The pending slot is kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of recorded states.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there is nothing to undo.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Recorded states, oldest first.
    pub fn entries(&self) -> &[StateName] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> StateName {
        StateName::from(s)
    }

    #[test]
    fn new_history_is_empty() {
        let history = StateHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.len(), 0);
        assert_eq!(history.pending(), None);
    }

    #[test]
    fn record_appends_most_recent_last() {
        let mut history = StateHistory::new();
        history.record(name("A"));
        history.record(name("B"));

        assert_eq!(history.entries(), &[name("A"), name("B")]);
    }

    #[test]
    fn pop_on_empty_leaves_pending_alone() {
        let mut history = StateHistory::new();
        history.record(name("A"));
        history.pop_for_undo(name("B"));

        assert_eq!(history.pop_for_undo(name("A")), None);
        assert_eq!(history.pending(), Some(&name("B")));
    }

    #[test]
    fn second_undo_overwrites_pending() {
        let mut history = StateHistory::new();
        history.record(name("A"));
        history.record(name("B"));

        history.pop_for_undo(name("C"));
        history.pop_for_undo(name("B"));

        assert_eq!(history.pending(), Some(&name("B")));
        assert!(history.is_empty());
    }

    #[test]
    fn clear_keeps_pending() {
        let mut history = StateHistory::new();
        history.record(name("A"));
        history.record(name("B"));
        history.pop_for_undo(name("C"));

        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.pending(), Some(&name("C")));
    }
}
