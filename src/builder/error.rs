//! Build errors for configuration builders.

use thiserror::Error;

/// Errors that can occur when building a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(name) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error("State '{name}' is defined more than once")]
    DuplicateState { name: String },

    #[error("Event '{event}' is defined more than once on state '{state}'")]
    DuplicateEvent { state: String, event: String },
}
