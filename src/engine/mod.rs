//! The state machine engine.
//!
//! [`Fsm`] owns a [`Config`](crate::core::Config) and a
//! [`StateHistory`](crate::core::StateHistory) and exposes the navigation
//! operations on top of them:
//!
//! - **Transitions**: `trigger` resolves an event against the active state,
//!   `change_state` moves to a named state directly
//! - **History**: `undo` and `redo` move the cursor, `reset` and
//!   `clear_history` return to the initial state
//! - **Introspection**: `get_state`, `get_states`, `states`, `transitions`
//!
//! Failed transitions never mutate the machine.

mod machine;

pub use machine::Fsm;
