//! Event-driven state machine with undo/redo history.

use crate::core::{Config, FsmError, StateConfig, StateHistory, TransitionTable};
use indexmap::IndexMap;
use tracing::{debug, trace};

/// Finite state machine driven by a declarative [`Config`].
///
/// The configuration is fixed at construction. Every successful transition
/// is recorded in the history so it can be undone and redone; a new
/// transition made after an undo discards the redo branch.
///
/// # Example
///
/// ```rust
/// use fsm_engine::{fsm_config, Fsm};
///
/// let mut fsm = Fsm::new(fsm_config! {
///     initial: idle,
///     idle => { start => running },
///     running => { stop => idle },
/// });
///
/// fsm.trigger("start").unwrap();
/// assert_eq!(fsm.get_state(), "running");
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.get_state(), "idle");
/// assert!(fsm.redo());
///
/// fsm.trigger("stop").unwrap();
/// assert!(!fsm.redo());
/// ```
#[derive(Clone, Debug)]
pub struct Fsm {
    config: Config,
    history: StateHistory,
}

impl Fsm {
    /// Create a machine positioned at the configuration's initial state.
    ///
    /// The transition graph is not validated; undefined states surface as
    /// errors when the machine navigates to them.
    pub fn new(config: Config) -> Self {
        let history = StateHistory::new(config.initial.clone());
        debug!(initial = %config.initial, states = config.states.len(), "state machine created");
        Self { config, history }
    }

    /// Create a machine from a configuration that may be absent.
    ///
    /// ```rust
    /// use fsm_engine::{Fsm, FsmError};
    ///
    /// assert!(matches!(Fsm::try_new(None), Err(FsmError::ConfigMissing)));
    /// ```
    pub fn try_new(config: Option<Config>) -> Result<Self, FsmError> {
        config.map(Self::new).ok_or(FsmError::ConfigMissing)
    }

    /// Create a machine from a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, FsmError> {
        Config::from_json(json).map(Self::new)
    }

    /// Create a machine after validating the whole transition graph.
    ///
    /// Fails with [`FsmError::InvalidConfig`] listing every undefined
    /// initial or target state.
    pub fn strict(config: Config) -> Result<Self, FsmError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Name of the active state.
    pub fn get_state(&self) -> &str {
        self.history.current()
    }

    /// The configuration's state table.
    pub fn states(&self) -> &IndexMap<String, StateConfig> {
        &self.config.states
    }

    /// Transition table of the active state.
    ///
    /// Fails with [`FsmError::UndefinedState`] when the active state has no
    /// entry in the configuration.
    pub fn transitions(&self) -> Result<&TransitionTable, FsmError> {
        let state = self.get_state();
        self.config
            .states
            .get(state)
            .map(|definition| &definition.transitions)
            .ok_or_else(|| FsmError::UndefinedState {
                state: state.to_string(),
            })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// Move to `target`, discarding any redo branch.
    pub fn change_state(&mut self, target: &str) -> Result<(), FsmError> {
        if !self.config.contains_state(target) {
            debug!(from = %self.get_state(), to = target, "rejected change to undefined state");
            return Err(FsmError::InvalidState {
                state: target.to_string(),
            });
        }

        let from = self.get_state().to_string();
        self.history.push(target);
        debug!(%from, to = target, cursor = self.history.cursor(), "state changed");
        Ok(())
    }

    /// Move along the transition `event` defines for the active state.
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let target = match self.transitions()?.get(event) {
            Some(target) => target.clone(),
            None => {
                debug!(state = %self.get_state(), event, "rejected event");
                return Err(FsmError::InvalidEvent {
                    event: event.to_string(),
                    state: self.get_state().to_string(),
                });
            }
        };

        trace!(event, to = %target, "event resolved");
        self.change_state(&target)
    }

    /// Return to the initial state and forget all history.
    pub fn reset(&mut self) {
        self.history.reset();
        debug!(initial = %self.get_state(), "state machine reset");
    }

    /// Forget all history. Same as [`Fsm::reset`].
    pub fn clear_history(&mut self) {
        self.reset();
    }

    /// State names in configuration order.
    ///
    /// With no event (or an empty one) all states are returned; otherwise
    /// only the states that define a transition for `event`.
    pub fn get_states(&self, event: Option<&str>) -> Vec<&str> {
        let states = self.config.states.iter();
        match event.filter(|e| !e.is_empty()) {
            None => states.map(|(name, _)| name.as_str()).collect(),
            Some(event) => states
                .filter(|(_, definition)| definition.handles(event))
                .map(|(name, _)| name.as_str())
                .collect(),
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Go back to the previous state. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        let moved = self.history.undo();
        trace!(moved, state = %self.get_state(), "undo");
        moved
    }

    /// Go forward to the undone state. Returns `false` if there is none.
    pub fn redo(&mut self) -> bool {
        let moved = self.history.redo();
        trace!(moved, state = %self.get_state(), "redo");
        moved
    }
}
