//! Agent pose: position plus orientation.

use super::point::Point2D;

/// Continuous pose of the agent.
///
/// Orientation is stored exactly as the motion collaborator reports it;
/// it is not normalized, so repeated manual spinning may leave it outside
/// [0, 2π).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose2D {
    /// X position.
    pub x: f64,
    /// Y position.
    pub y: f64,
    /// Orientation in radians, clockwise from +X.
    pub theta: f64,
}

impl Pose2D {
    /// Create a new pose.
    #[inline]
    pub const fn new(x: f64, y: f64, theta: f64) -> Self {
        Self { x, y, theta }
    }

    /// Get the position as a Point2D.
    #[inline]
    pub fn position(self) -> Point2D {
        Point2D::new(self.x, self.y)
    }
}
