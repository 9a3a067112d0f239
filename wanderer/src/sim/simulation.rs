//! Maze plus body, presented to the agent as a [`Platform`](crate::platform::Platform).

use crate::core::{Heading, Point2D, Pose2D, RelativeDirection};
use crate::platform::{ClearanceSensor, MotionDriver, VelocityCommand};

use super::body::{DEFAULT_TIME_STEP, SimBody};
use super::maze::Maze;

/// A simulated maze world with one body in it.
#[derive(Clone, Debug)]
pub struct Simulation {
    maze: Maze,
    body: SimBody,
}

impl Simulation {
    /// Place a body at `pose` in `maze` with the default time step.
    pub fn new(maze: Maze, pose: Pose2D) -> Self {
        Self::with_time_step(maze, pose, DEFAULT_TIME_STEP)
    }

    /// Place a body at `pose` in `maze`, advancing `dt` per command.
    pub fn with_time_step(maze: Maze, pose: Pose2D, dt: f64) -> Self {
        Self {
            maze,
            body: SimBody::new(pose, dt),
        }
    }

    /// The maze.
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// The body.
    pub fn body(&self) -> &SimBody {
        &self.body
    }
}

impl MotionDriver for Simulation {
    fn position(&self) -> Point2D {
        self.body.pose().position()
    }

    fn orientation(&self) -> f64 {
        self.body.pose().theta
    }

    fn move_toward(&mut self, target: Point2D, max_speed: f64, max_angular_adjust: f64) {
        self.body.move_toward(target, max_speed, max_angular_adjust, &self.maze);
    }

    fn teleport(&mut self, x: f64, y: f64, theta: f64) {
        self.body.teleport(x, y, theta);
    }

    fn track_velocity(&mut self, velocity: VelocityCommand) {
        self.body.track_velocity(velocity, &self.maze);
    }
}

impl ClearanceSensor for Simulation {
    /// Clearance along the axis nearest to the requested direction.
    fn clearance(&self, direction: RelativeDirection) -> f64 {
        let pose = self.body.pose();
        let heading = Heading::from_orientation(pose.theta).turn(direction);
        self.maze.clearance(pose.position(), heading)
    }
}
