//! Declarative state machine configuration.
//!
//! A configuration names the initial state and, for every state, the table
//! of events leading out of it. Tables keep their insertion order so that
//! state listings come back in the order they were declared.

use super::error::{ConfigViolation, FsmError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Transition table of a single state: event name to destination state name.
pub type TransitionTable = IndexMap<String, String>;

/// Immutable description of a state machine.
///
/// Destination names are not checked when a configuration is created. They
/// are validated lazily when the machine navigates, or up front with
/// [`Config::validate`].
///
/// # Example
///
/// ```rust
/// use fsm_engine::core::Config;
///
/// let config = Config::from_json(r#"{
///     "initial": "idle",
///     "states": {
///         "idle": { "transitions": { "start": "running" } },
///         "running": { "transitions": { "stop": "idle" } }
///     }
/// }"#).unwrap();
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.states.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Name of the starting state
    pub initial: String,
    /// All states in declaration order
    pub states: IndexMap<String, StateConfig>,
}

/// Configuration of a single state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConfig {
    /// Outgoing transitions keyed by event name
    #[serde(default)]
    pub transitions: TransitionTable,
}

impl StateConfig {
    /// Destination reached by `event`, if the state defines it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

impl Config {
    /// Create a configuration with the given initial state and no states.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            states: IndexMap::new(),
        }
    }

    /// Parse a configuration from JSON.
    ///
    /// A `null` document is an absent configuration and fails with
    /// [`FsmError::ConfigMissing`].
    ///
    /// ```rust
    /// use fsm_engine::core::{Config, FsmError};
    ///
    /// assert!(matches!(Config::from_json("null"), Err(FsmError::ConfigMissing)));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        let config: Option<Self> = serde_json::from_str(json)?;
        config.ok_or(FsmError::ConfigMissing)
    }

    /// Serialize the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, FsmError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn contains_state(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Check the whole transition graph.
    ///
    /// Collects every violation instead of stopping at the first one. An
    /// empty list means the initial state and every transition target are
    /// defined.
    pub fn violations(&self) -> Vec<ConfigViolation> {
        let mut violations = Vec::new();

        if !self.contains_state(&self.initial) {
            violations.push(ConfigViolation::UndefinedInitial {
                initial: self.initial.clone(),
            });
        }

        for (state, definition) in &self.states {
            for (event, target) in &definition.transitions {
                if !self.contains_state(target) {
                    violations.push(ConfigViolation::UndefinedTarget {
                        state: state.clone(),
                        event: event.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        violations
    }

    /// Validate the transition graph, failing with all violations found.
    pub fn validate(&self) -> Result<(), FsmError> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(FsmError::InvalidConfig { violations })
        }
    }
}
