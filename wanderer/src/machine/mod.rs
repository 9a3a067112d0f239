//! The state machine binding the behaviors together.
//!
//! - [`StateId`]: the six states
//! - [`TransitionTable`]: validated (state, event) → state lookup
//! - [`StateMachine`]: runs the active behavior and applies transitions

mod orchestrator;
mod state;
mod table;

pub use orchestrator::{StateMachine, Transition};
pub use state::StateId;
pub use table::{TransitionTable, TransitionTableBuilder};
