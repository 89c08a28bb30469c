//! Builder API for ergonomic configuration construction.
//!
//! This module provides fluent builders and a macro for declaring state
//! machine configurations in code instead of loading them from JSON.

pub mod config;
pub mod error;
pub mod macros;
pub mod state;

pub use config::ConfigBuilder;
pub use error::BuildError;
pub use state::StateBuilder;

/// Start a state with a single transition.
///
/// # Example
///
/// ```
/// use fsm_engine::builder::{on, terminal, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .initial("red")
///     .state("red", on("timer", "green"))
///     .state("green", on("timer", "yellow"))
///     .state("yellow", on("timer", "red").on("fault", "off"))
///     .state("off", terminal())
///     .build()
///     .unwrap();
///
/// assert_eq!(config.states.len(), 4);
/// ```
pub fn on(event: impl Into<String>, target: impl Into<String>) -> StateBuilder {
    StateBuilder::new().on(event, target)
}

/// A state with no outgoing transitions.
pub fn terminal() -> StateBuilder {
    StateBuilder::new()
}
