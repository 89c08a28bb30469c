//! Builder for a single state's transition table.

use crate::builder::error::BuildError;
use crate::core::{StateConfig, TransitionTable};

/// Builder for the outgoing transitions of one state.
#[derive(Clone, Debug, Default)]
pub struct StateBuilder {
    transitions: Vec<(String, String)>,
}

impl StateBuilder {
    /// Create a builder with no transitions.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Add a transition taken on `event` to the state named `target`.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.push((event.into(), target.into()));
        self
    }

    /// Build the state's configuration.
    /// `state` is only used to label errors.
    pub fn build(self, state: &str) -> Result<StateConfig, BuildError> {
        let mut transitions = TransitionTable::new();
        for (event, target) in self.transitions {
            if transitions.contains_key(&event) {
                return Err(BuildError::DuplicateEvent {
                    state: state.to_string(),
                    event,
                });
            }
            transitions.insert(event, target);
        }
        Ok(StateConfig { transitions })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_is_terminal_state() {
        let state = StateBuilder::new().build("done").unwrap();
        assert!(state.transitions.is_empty());
    }

    #[test]
    fn transitions_keep_declaration_order() {
        let state = StateBuilder::new()
            .on("pause", "paused")
            .on("stop", "stopped")
            .on("fail", "failed")
            .build("running")
            .unwrap();

        let events: Vec<&str> = state.transitions.keys().map(String::as_str).collect();
        assert_eq!(events, vec!["pause", "stop", "fail"]);
        assert_eq!(state.target("stop"), Some("stopped"));
    }

    #[test]
    fn duplicate_event_is_rejected() {
        let result = StateBuilder::new()
            .on("go", "a")
            .on("go", "b")
            .build("start");

        assert_eq!(
            result,
            Err(BuildError::DuplicateEvent {
                state: "start".to_string(),
                event: "go".to_string(),
            })
        );
    }
}
