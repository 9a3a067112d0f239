//! Continuous 2D point in maze units.

/// A position in the maze plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2D {
    /// X coordinate (grows to the right).
    pub x: f64,
    /// Y coordinate (grows downward).
    pub y: f64,
}

impl Point2D {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: &Point2D) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// True when both axes are strictly closer than `tolerance`.
    #[inline]
    pub fn within(&self, other: &Point2D, tolerance: f64) -> bool {
        (self.x - other.x).abs() < tolerance && (self.y - other.y).abs() < tolerance
    }
}
