//! Agent configuration.
//!
//! Loaded from TOML with every field optional:
//!
//! ```toml
//! [start_pose]
//! x = -300.0
//! y = -300.0
//! theta = 0.0
//!
//! [bounds]
//! min = -350.0
//! max = 350.0
//!
//! [motion]
//! translate_speed = 30.0
//!
//! [policy]
//! obstacle_threshold = 100.0
//!
//! [manual]
//! linear_speed = 5.0
//! angular_speed = 0.5
//! ```
//!
//! Grid geometry is not configurable; see [`crate::core`].

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::{MAZE_HALF_EXTENT, Point2D, Pose2D};
use crate::error::{Result, WandererError};

/// Top-level agent configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct WandererConfig {
    /// Pose restored by every reset.
    #[serde(default)]
    pub start_pose: StartPose,
    /// Outer maze boundary for manual-mode checks.
    #[serde(default)]
    pub bounds: MazeBounds,
    /// Motion primitive speeds and tolerances.
    #[serde(default)]
    pub motion: MotionConfig,
    /// Exploration policy thresholds.
    #[serde(default)]
    pub policy: PolicyConfig,
    /// Operator key mapping speeds.
    #[serde(default)]
    pub manual: ManualConfig,
}

/// Start pose.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct StartPose {
    /// X position (default: -300, centre of cell (0, 0))
    #[serde(default = "default_start_xy")]
    pub x: f64,
    /// Y position (default: -300)
    #[serde(default = "default_start_xy")]
    pub y: f64,
    /// Orientation in radians (default: 0, facing +X)
    #[serde(default)]
    pub theta: f64,
}

impl Default for StartPose {
    fn default() -> Self {
        Self {
            x: default_start_xy(),
            y: default_start_xy(),
            theta: 0.0,
        }
    }
}

impl StartPose {
    /// As a pose.
    pub fn pose(&self) -> Pose2D {
        Pose2D::new(self.x, self.y, self.theta)
    }
}

/// Square outer boundary of the maze.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct MazeBounds {
    /// Lower edge on both axes (default: -350)
    #[serde(default = "default_bounds_min")]
    pub min: f64,
    /// Upper edge on both axes (default: 350)
    #[serde(default = "default_bounds_max")]
    pub max: f64,
}

impl Default for MazeBounds {
    fn default() -> Self {
        Self {
            min: default_bounds_min(),
            max: default_bounds_max(),
        }
    }
}

impl MazeBounds {
    /// True when the point lies strictly inside the boundary on both axes.
    #[inline]
    pub fn contains(&self, p: Point2D) -> bool {
        p.x > self.min && p.x < self.max && p.y > self.min && p.y < self.max
    }
}

/// Motion primitive parameters.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct MotionConfig {
    /// Translate-to-cell speed bound (default: 30)
    #[serde(default = "default_translate_speed")]
    pub translate_speed: f64,
    /// Per-axis distance at which a translation snaps to its goal (default: 3)
    #[serde(default = "default_translate_tolerance")]
    pub translate_tolerance: f64,
    /// Recenter-in-cell speed bound (default: 20)
    #[serde(default = "default_recenter_speed")]
    pub recenter_speed: f64,
    /// Recenter-in-cell angular adjustment bound (default: 10)
    #[serde(default = "default_recenter_angular")]
    pub recenter_angular: f64,
    /// Per-axis distance at which recentering snaps to the centre (default: 1)
    #[serde(default = "default_recenter_tolerance")]
    pub recenter_tolerance: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            translate_speed: default_translate_speed(),
            translate_tolerance: default_translate_tolerance(),
            recenter_speed: default_recenter_speed(),
            recenter_angular: default_recenter_angular(),
            recenter_tolerance: default_recenter_tolerance(),
        }
    }
}

/// Exploration policy parameters.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct PolicyConfig {
    /// A direction is clear when its clearance exceeds this (default: 100)
    #[serde(default = "default_obstacle_threshold")]
    pub obstacle_threshold: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            obstacle_threshold: default_obstacle_threshold(),
        }
    }
}

/// Operator drive parameters.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct ManualConfig {
    /// Linear speed for forward/back keys (default: 5)
    #[serde(default = "default_manual_linear")]
    pub linear_speed: f64,
    /// Angular speed for turn keys (default: 0.5)
    #[serde(default = "default_manual_angular")]
    pub angular_speed: f64,
}

impl Default for ManualConfig {
    fn default() -> Self {
        Self {
            linear_speed: default_manual_linear(),
            angular_speed: default_manual_angular(),
        }
    }
}

impl WandererConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: WandererConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the agent cannot run with.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("motion.translate_speed", self.motion.translate_speed),
            ("motion.translate_tolerance", self.motion.translate_tolerance),
            ("motion.recenter_speed", self.motion.recenter_speed),
            ("motion.recenter_tolerance", self.motion.recenter_tolerance),
            ("manual.linear_speed", self.manual.linear_speed),
            ("manual.angular_speed", self.manual.angular_speed),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(WandererError::Config(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if !(self.motion.recenter_angular.is_finite() && self.motion.recenter_angular >= 0.0) {
            return Err(WandererError::Config(
                "motion.recenter_angular must be non-negative".to_string(),
            ));
        }
        if !self.policy.obstacle_threshold.is_finite() {
            return Err(WandererError::Config(
                "policy.obstacle_threshold must be finite".to_string(),
            ));
        }
        if !(self.bounds.min < self.bounds.max) {
            return Err(WandererError::Config(format!(
                "bounds.min ({}) must be below bounds.max ({})",
                self.bounds.min, self.bounds.max
            )));
        }
        if !self.bounds.contains(self.start_pose.pose().position()) {
            return Err(WandererError::Config(format!(
                "start pose ({}, {}) lies outside the maze bounds",
                self.start_pose.x, self.start_pose.y
            )));
        }
        Ok(())
    }

    /// Builder-style setter for the start pose.
    pub fn with_start_pose(mut self, x: f64, y: f64, theta: f64) -> Self {
        self.start_pose = StartPose { x, y, theta };
        self
    }

    /// Builder-style setter for the obstacle threshold.
    pub fn with_obstacle_threshold(mut self, threshold: f64) -> Self {
        self.policy.obstacle_threshold = threshold;
        self
    }

    /// Builder-style setter for the translate speed.
    pub fn with_translate_speed(mut self, speed: f64) -> Self {
        self.motion.translate_speed = speed;
        self
    }

    /// Builder-style setter for manual speeds.
    pub fn with_manual_speeds(mut self, linear: f64, angular: f64) -> Self {
        self.manual = ManualConfig {
            linear_speed: linear,
            angular_speed: angular,
        };
        self
    }
}

fn default_start_xy() -> f64 {
    -300.0
}
fn default_bounds_min() -> f64 {
    -MAZE_HALF_EXTENT
}
fn default_bounds_max() -> f64 {
    MAZE_HALF_EXTENT
}
fn default_translate_speed() -> f64 {
    30.0
}
fn default_translate_tolerance() -> f64 {
    3.0
}
fn default_recenter_speed() -> f64 {
    20.0
}
fn default_recenter_angular() -> f64 {
    10.0
}
fn default_recenter_tolerance() -> f64 {
    1.0
}
fn default_obstacle_threshold() -> f64 {
    100.0
}
fn default_manual_linear() -> f64 {
    5.0
}
fn default_manual_angular() -> f64 {
    0.5
}
