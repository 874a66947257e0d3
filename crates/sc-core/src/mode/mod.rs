//! History mode domain module.
//!
//! This module defines the mode state machine that governs how clicks, drags,
//! clear-mode toggles and newly observed clipboard text are interpreted.

mod action;
mod event;
mod state;
mod state_machine;

pub use action::HistoryAction;
pub use event::HistoryEvent;
pub use state::{DropZone, HistoryMode};
pub use state_machine::{HistoryStateMachine, Transition};
