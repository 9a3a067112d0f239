//! Angle helpers for quarter-turn alignment.
//!
//! All angles are in radians, clockwise positive (screen frame).

use std::f64::consts::{FRAC_PI_2, TAU};

/// One 90° step.
pub const QUARTER_TURN: f64 = FRAC_PI_2;

/// One full revolution.
pub const FULL_TURN: f64 = TAU;

/// Normalize an orientation to [0, 2π).
#[inline]
pub fn normalize_orientation(angle: f64) -> f64 {
    let a = angle.rem_euclid(FULL_TURN);
    // rem_euclid can return exactly 2π for tiny negative inputs
    if a >= FULL_TURN { 0.0 } else { a }
}

/// Signed shortest angular difference from `from` to `to`, in [-π, π).
#[inline]
pub fn angle_diff(from: f64, to: f64) -> f64 {
    let half = FULL_TURN / 2.0;
    (to - from + half).rem_euclid(FULL_TURN) - half
}
