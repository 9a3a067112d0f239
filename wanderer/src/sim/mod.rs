//! Headless maze simulator.
//!
//! Stands in for the motion and sensing collaborators in tests and in the
//! `wanderer-sim` binary: a point body with kinematic motion and
//! stop-on-collision walls, sensing axis-aligned clearance.

mod body;
mod maze;
mod simulation;

pub use body::{DEFAULT_TIME_STEP, SimBody};
pub use maze::{Maze, SENSOR_RANGE};
pub use simulation::Simulation;
