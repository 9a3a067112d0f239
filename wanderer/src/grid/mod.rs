//! Exploration memory.
//!
//! [`GridVisitMap`] counts how often each maze cell has been the departure
//! cell of a translation. The agent owns exactly one map and lends it to
//! behaviors each tick: exploration reads it, translation writes it, and
//! the lifecycle reset clears it.

mod visit_map;

pub use visit_map::{GridVisitMap, UNVISITABLE};
