//! Interfaces to the collaborators that own the body and the sensors.
//!
//! The wanderer never integrates physics or casts rays itself. It reads
//! pose and clearance through these traits and issues motion commands back
//! through them. [`crate::sim`] provides an implementation for tests and
//! the simulator binary; a host environment provides its own.

use crate::core::{Point2D, Pose2D, RelativeDirection};

/// Linear/angular velocity pair for velocity tracking.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VelocityCommand {
    /// Linear velocity (positive = forward).
    pub linear: f64,
    /// Angular velocity (positive = clockwise).
    pub angular: f64,
}

impl VelocityCommand {
    /// Create a new velocity command.
    pub fn new(linear: f64, angular: f64) -> Self {
        Self { linear, angular }
    }

    /// Create a zero velocity command (stop).
    pub fn stop() -> Self {
        Self::default()
    }

    /// Check if this is a stop command.
    pub fn is_stop(&self) -> bool {
        self.linear == 0.0 && self.angular == 0.0
    }
}

/// Motion/physics collaborator.
pub trait MotionDriver {
    /// Current position.
    fn position(&self) -> Point2D;

    /// Current orientation in radians, clockwise from +X.
    fn orientation(&self) -> f64;

    /// Move toward a target at no more than `max_speed`, turning toward it
    /// by at most `max_angular_adjust`.
    fn move_toward(&mut self, target: Point2D, max_speed: f64, max_angular_adjust: f64);

    /// Place the body instantly, bypassing physics.
    fn teleport(&mut self, x: f64, y: f64, theta: f64);

    /// Hold a continuous velocity command until replaced.
    fn track_velocity(&mut self, velocity: VelocityCommand);

    /// Position and orientation together.
    fn pose(&self) -> Pose2D {
        let p = self.position();
        Pose2D::new(p.x, p.y, self.orientation())
    }
}

/// Proximity sensing collaborator.
pub trait ClearanceSensor {
    /// Free distance in a direction relative to the current heading.
    fn clearance(&self, direction: RelativeDirection) -> f64;
}

/// Everything a behavior needs from the outside world in one tick.
pub trait Platform: MotionDriver + ClearanceSensor {}

impl<T: MotionDriver + ClearanceSensor> Platform for T {}
