//! # Maze Wanderer: Grid Maze Exploration Agent
//!
//! The decision-and-motion core of an agent that explores a 7×7 grid maze,
//! biased toward cells it has visited least, and that an operator can take
//! over at any time and hand back without losing exploration memory.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use maze_wanderer::sim::{Maze, Simulation};
//! use maze_wanderer::{Wanderer, WandererConfig};
//!
//! let config = WandererConfig::default();
//! let mut sim = Simulation::new(Maze::random(7), config.start_pose.pose());
//! let mut wanderer = Wanderer::new(config).unwrap();
//!
//! loop {
//!     if wanderer.tick(&mut sim).reached_exit() {
//!         break;
//!     }
//! }
//! println!("{}", wanderer.visits());
//! ```
//!
//! ## Coordinate Frame
//!
//! Screen coordinates, origin at the maze centre:
//! - **X-right**: positive X is to the right
//! - **Y-down**: positive Y is downward
//! - **Rotation**: clockwise positive, 0 along +X
//!
//! The start cell (0, 0) is the top-left corner; the exit leads out of the
//! bottom edge of cell (6, 6).
//!
//! ## Architecture
//!
//! - [`core`]: cells, headings, points, poses
//! - [`grid`]: the visit map
//! - [`behavior`]: one behavior per state
//! - [`machine`]: transition table and orchestrator
//! - [`input`]: operator input translation and control mode
//! - [`agent`]: [`Wanderer`], owning all of the above
//! - [`platform`]: interfaces to the body and sensors
//! - [`sim`]: a headless implementation of those interfaces
//!
//! ## State Flow
//!
//! ```text
//! Evaluate    ──move──────────────▶ Translate ──continue-evaluating──▶ Evaluate
//! Evaluate    ──rotate────────────▶ Align ──────continue-evaluating──▶ Evaluate
//! Translate   ──reached-exit──────▶ Reset ──────continue-evaluating──▶ Evaluate
//! ManualDrive ──recenter-request──▶ Recenter ───rotate──────────────▶ Align
//! ```
//!
//! `reset` and `enter-manual` are accepted in every state.

pub mod agent;
pub mod behavior;
pub mod config;
pub mod core;
pub mod error;
pub mod event;
pub mod grid;
pub mod input;
pub mod machine;
pub mod platform;
pub mod sim;

pub use agent::{TickReport, Wanderer};
pub use config::WandererConfig;
pub use crate::core::{Cell, Heading, Point2D, Pose2D, RelativeDirection};
pub use error::{Result, WandererError};
pub use event::{Event, Payload, Rotation};
pub use grid::GridVisitMap;
pub use input::{InputEvent, Key, Mode};
pub use machine::{StateId, Transition};
pub use platform::{ClearanceSensor, MotionDriver, Platform, VelocityCommand};
