//! Core state machine types and logic.
//!
//! This module contains the data the engine works on:
//! - Declarative configuration of states and transitions
//! - Cursor-based history with undo/redo
//! - The error taxonomy shared by the whole crate

mod config;
mod error;
mod history;

pub use config::{Config, StateConfig, TransitionTable};
pub use error::{ConfigViolation, FsmError};
pub use history::{HistoryEntry, StateHistory};
