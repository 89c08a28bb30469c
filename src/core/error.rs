//! Error types for configuration loading and state machine navigation.

use thiserror::Error;

/// Errors returned by the state machine engine.
///
/// Every failing operation validates before it mutates, so receiving one of
/// these errors means the machine's history and cursor are unchanged.
#[derive(Debug, Error)]
pub enum FsmError {
    /// The engine was constructed without a configuration.
    #[error("The config is not passed")]
    ConfigMissing,

    /// A state change targeted a state that the configuration does not define.
    #[error("The passed state '{state}' is not correct")]
    InvalidState { state: String },

    /// The event has no transition from the active state.
    #[error("The passed event '{event}' is not correct for the current state '{state}'")]
    InvalidEvent { event: String, state: String },

    /// The active state has no entry in the configuration.
    #[error("The current state '{state}' is not defined in the configuration")]
    UndefinedState { state: String },

    /// Strict validation found problems in the transition graph.
    #[error("Invalid configuration: {} violation(s)", .violations.len())]
    InvalidConfig { violations: Vec<ConfigViolation> },

    /// The configuration document could not be parsed.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A single problem found while validating a configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigViolation {
    #[error("Initial state '{initial}' is not defined")]
    UndefinedInitial { initial: String },

    #[error("Transition '{event}' from '{state}' targets undefined state '{target}'")]
    UndefinedTarget {
        state: String,
        event: String,
        target: String,
    },
}
