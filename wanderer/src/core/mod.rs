//! Core types shared by every part of the wanderer.
//!
//! - [`Cell`]: discrete maze coordinate and its mapping to/from world space
//! - [`Heading`] and [`RelativeDirection`]: discretized orientation
//! - [`Point2D`] and [`Pose2D`]: continuous position and orientation
//! - [`math`]: quarter-turn helpers used for axis alignment
//!
//! # Coordinate Frame
//!
//! The maze uses screen coordinates: X grows to the right, Y grows
//! downward, and orientation increases clockwise with 0 pointing along +X.
//! A clockwise turn therefore adds a quarter turn to the orientation.

mod cell;
pub mod math;
mod point;
mod pose;

pub use cell::{
    CELL_SIZE, Cell, EXIT_CELL, EXIT_TARGET, GRID_SIZE, Heading, MAZE_HALF_EXTENT,
    RelativeDirection,
};
pub use point::Point2D;
pub use pose::Pose2D;
