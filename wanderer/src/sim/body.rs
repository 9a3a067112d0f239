//! Kinematic body for the simulator.
//!
//! Commands take effect immediately: each call advances the body by one
//! fixed time step. A move that would cross a wall is dropped and counted
//! as a collision (the body stops; rotation still applies).

use log::trace;

use crate::core::math::angle_diff;
use crate::core::{Point2D, Pose2D};
use crate::platform::VelocityCommand;

use super::maze::Maze;

/// Default simulation time step (seconds per command).
pub const DEFAULT_TIME_STEP: f64 = 0.1;

/// Point body moving through a maze.
#[derive(Clone, Debug)]
pub struct SimBody {
    pose: Pose2D,
    dt: f64,
    velocity: VelocityCommand,
    collisions: u64,
}

impl SimBody {
    /// Create a body at `pose` advancing `dt` seconds per command.
    pub fn new(pose: Pose2D, dt: f64) -> Self {
        Self {
            pose,
            dt,
            velocity: VelocityCommand::stop(),
            collisions: 0,
        }
    }

    /// Current pose.
    pub fn pose(&self) -> Pose2D {
        self.pose
    }

    /// Last tracked velocity.
    pub fn velocity(&self) -> VelocityCommand {
        self.velocity
    }

    /// Moves dropped because they would have crossed a wall.
    pub fn collisions(&self) -> u64 {
        self.collisions
    }

    /// Step toward `target`, at most `max_speed · dt` along the straight
    /// line, turning toward it by at most `max_angular · dt`.
    pub fn move_toward(&mut self, target: Point2D, max_speed: f64, max_angular: f64, maze: &Maze) {
        let here = self.pose.position();
        let (dx, dy) = (target.x - here.x, target.y - here.y);
        let distance = dx.hypot(dy);
        if distance == 0.0 {
            return;
        }

        if max_angular > 0.0 {
            let turn = angle_diff(self.pose.theta, dy.atan2(dx));
            let limit = max_angular * self.dt;
            self.pose.theta += turn.clamp(-limit, limit);
        }

        let step = max_speed * self.dt;
        let next = if distance <= step {
            target
        } else {
            Point2D::new(here.x + dx / distance * step, here.y + dy / distance * step)
        };
        self.translate_to(next, maze);
    }

    /// Integrate unicycle kinematics for one step at `velocity`.
    pub fn track_velocity(&mut self, velocity: VelocityCommand, maze: &Maze) {
        self.velocity = velocity;
        if velocity.is_stop() {
            return;
        }
        let theta = self.pose.theta;
        self.pose.theta += velocity.angular * self.dt;
        let next = Point2D::new(
            self.pose.x + velocity.linear * theta.cos() * self.dt,
            self.pose.y + velocity.linear * theta.sin() * self.dt,
        );
        self.translate_to(next, maze);
    }

    /// Place the body without physics.
    pub fn teleport(&mut self, x: f64, y: f64, theta: f64) {
        self.pose = Pose2D::new(x, y, theta);
        self.velocity = VelocityCommand::stop();
    }

    fn translate_to(&mut self, next: Point2D, maze: &Maze) {
        if maze.can_travel(self.pose.position(), next) {
            self.pose.x = next.x;
            self.pose.y = next.y;
        } else {
            self.collisions += 1;
            trace!(
                "[Sim] Blocked at ({:.1}, {:.1}) -> ({:.1}, {:.1})",
                self.pose.x, self.pose.y, next.x, next.y
            );
        }
    }
}
