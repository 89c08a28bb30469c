//! Navigable history of visited states.
//!
//! History is a sequence of entries with a cursor marking the active one.
//! Moving the cursor back and forth implements undo and redo; recording a
//! new state while the cursor is behind the end discards the forward branch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A state entered at a point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Name of the state that was entered
    pub state: String,
    /// When the state was entered
    pub entered_at: DateTime<Utc>,
}

impl HistoryEntry {
    fn now(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            entered_at: Utc::now(),
        }
    }
}

/// Ordered history of entered states with an undo/redo cursor.
///
/// The sequence is never empty: index 0 always holds the root (initial)
/// state, and the cursor always points at a valid entry.
///
/// # Example
///
/// ```rust
/// use fsm_engine::core::StateHistory;
///
/// let mut history = StateHistory::new("draft");
/// history.push("review");
/// history.push("published");
///
/// assert!(history.undo());
/// assert_eq!(history.current(), "review");
///
/// // Recording a new state drops the redo branch
/// history.push("draft");
/// assert!(!history.can_redo());
/// assert_eq!(history.get_path(), vec!["draft", "review", "draft"]);
/// ```
#[derive(Clone, Debug)]
pub struct StateHistory {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl StateHistory {
    /// Create a history holding only the root state.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![HistoryEntry::now(initial)],
            cursor: 0,
        }
    }

    /// Name of the active state.
    pub fn current(&self) -> &str {
        &self.entries[self.cursor].state
    }

    /// Name of the root state.
    pub fn root(&self) -> &str {
        &self.entries[0].state
    }

    /// Index of the active entry.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// All recorded entries, including any redo branch past the cursor.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// State names of the whole sequence.
    pub fn get_path(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.state.as_str()).collect()
    }

    /// State names from the root up to and including the active entry.
    pub fn active_path(&self) -> Vec<&str> {
        self.entries[..=self.cursor]
            .iter()
            .map(|e| e.state.as_str())
            .collect()
    }

    /// Record a newly entered state.
    ///
    /// Entries after the cursor are discarded before the new one is
    /// appended, and the cursor moves to it.
    pub fn push(&mut self, state: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(HistoryEntry::now(state));
        self.cursor = self.entries.len() - 1;
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Step back one entry. Returns `false` at the root.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward one entry. Returns `false` when nothing is ahead.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Drop everything but a fresh root entry.
    pub fn reset(&mut self) {
        let root = std::mem::take(&mut self.entries[0].state);
        *self = Self::new(root);
    }

    /// Time from entering the root to entering the active state.
    ///
    /// Returns `None` while the root is active.
    pub fn duration(&self) -> Option<Duration> {
        if self.cursor == 0 {
            return None;
        }
        let first = &self.entries[0];
        let active = &self.entries[self.cursor];
        active
            .entered_at
            .signed_duration_since(first.entered_at)
            .to_std()
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_holds_only_the_root() {
        let history = StateHistory::new("idle");
        assert_eq!(history.current(), "idle");
        assert_eq!(history.root(), "idle");
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.entries().len(), 1);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(history.duration().is_none());
    }

    #[test]
    fn push_advances_cursor() {
        let mut history = StateHistory::new("a");
        history.push("b");
        history.push("c");

        assert_eq!(history.current(), "c");
        assert_eq!(history.cursor(), 2);
        assert_eq!(history.get_path(), vec!["a", "b", "c"]);
    }

    #[test]
    fn undo_keeps_forward_entries() {
        let mut history = StateHistory::new("a");
        history.push("b");

        assert!(history.undo());
        assert_eq!(history.current(), "a");
        assert_eq!(history.get_path(), vec!["a", "b"]);
        assert_eq!(history.active_path(), vec!["a"]);
        assert!(history.can_redo());
    }

    #[test]
    fn undo_at_root_is_rejected() {
        let mut history = StateHistory::new("a");
        assert!(!history.undo());
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn redo_at_end_is_rejected() {
        let mut history = StateHistory::new("a");
        assert!(!history.redo());

        history.push("b");
        assert!(!history.redo());
        assert_eq!(history.current(), "b");
    }

    #[test]
    fn redo_restores_undone_entry() {
        let mut history = StateHistory::new("a");
        history.push("b");
        history.push("c");

        assert!(history.undo());
        assert!(history.undo());
        assert!(history.redo());
        assert_eq!(history.current(), "b");
        assert!(history.redo());
        assert_eq!(history.current(), "c");
        assert!(!history.redo());
    }

    #[test]
    fn push_discards_redo_branch() {
        let mut history = StateHistory::new("a");
        history.push("b");
        history.push("c");
        history.undo();
        history.undo();

        history.push("d");

        assert_eq!(history.get_path(), vec!["a", "d"]);
        assert_eq!(history.cursor(), 1);
        assert!(!history.can_redo());
    }

    #[test]
    fn reset_returns_to_root() {
        let mut history = StateHistory::new("a");
        history.push("b");
        history.push("c");
        history.undo();

        history.reset();

        assert_eq!(history.get_path(), vec!["a"]);
        assert_eq!(history.current(), "a");
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn duration_measures_root_to_active() {
        let mut history = StateHistory::new("a");
        std::thread::sleep(std::time::Duration::from_millis(10));
        history.push("b");

        let duration = history.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= std::time::Duration::from_millis(10));

        history.undo();
        assert!(history.duration().is_none());
    }

    #[test]
    fn entries_serialize_correctly() {
        let mut history = StateHistory::new("a");
        history.push("b");

        let json = serde_json::to_string(history.entries()).unwrap();
        let entries: Vec<HistoryEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(entries, history.entries());
    }
}
