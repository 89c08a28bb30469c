//! Builder for constructing configurations.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::core::Config;

/// Builder for constructing a [`Config`] with a fluent API.
///
/// Transition targets are not checked; use [`Config::validate`] or
/// [`Fsm::strict`](crate::Fsm::strict) for that.
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<String>,
    states: Vec<(String, StateBuilder)>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Add a state and its transitions.
    pub fn state(mut self, name: impl Into<String>, state: StateBuilder) -> Self {
        self.states.push((name.into(), state));
        self
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing or names repeat.
    pub fn build(self) -> Result<Config, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut config = Config::new(initial);
        for (name, state) in self.states {
            if config.contains_state(&name) {
                return Err(BuildError::DuplicateState { name });
            }
            let state = state.build(&name)?;
            config.states.insert(name, state);
        }

        Ok(config)
    }
}
