//! fsm-engine: a declarative finite state machine with undo/redo history
//!
//! A machine is described by a [`Config`]: the initial state and, for each
//! state, the events that lead out of it. The [`Fsm`] engine tracks the active
//! state, validates every move against the configuration and records each
//! successful move so it can be undone and redone.
//!
//! # Core Concepts
//!
//! - **Config**: Immutable map of state name to transition table
//! - **History**: Visited states plus a cursor; a new move after an undo
//!   discards the redo branch
//! - **Lazy validation**: Undefined states are reported when the machine
//!   navigates to them, or up front with [`Fsm::strict`]
//!
//! # Example
//!
//! ```rust
//! use fsm_engine::{Config, Fsm, FsmError};
//!
//! let config = Config::from_json(r#"{
//!     "initial": "idle",
//!     "states": {
//!         "idle": { "transitions": { "start": "running" } },
//!         "running": { "transitions": { "stop": "idle" } }
//!     }
//! }"#)?;
//!
//! let mut fsm = Fsm::new(config);
//! fsm.trigger("start")?;
//! assert_eq!(fsm.get_state(), "running");
//!
//! assert!(matches!(fsm.trigger("start"), Err(FsmError::InvalidEvent { .. })));
//! assert_eq!(fsm.get_states(Some("stop")), vec!["running"]);
//! # Ok::<(), FsmError>(())
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{Config, ConfigViolation, FsmError, StateConfig, StateHistory};
pub use builder::{BuildError, ConfigBuilder, StateBuilder};
pub use engine::Fsm;
