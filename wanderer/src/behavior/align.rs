//! Align-to-axis motion primitive.
//!
//! Snaps the orientation to the nearest quarter turn and then applies the
//! requested extra turn in the same step. The goal is computed as an
//! integer quarter index so the resulting angle is exactly one of
//! 0, π/2, π or 3π/2.

use log::debug;

use crate::core::math::QUARTER_TURN;
use crate::event::{Event, Rotation};

use super::{Behavior, Context};

/// Orientation goal for a rotation request from `theta`.
pub fn align_goal(theta: f64, rotation: Rotation) -> f64 {
    // Ties at the half step round up
    let nearest = (theta / QUARTER_TURN + 0.5).floor() as i64;
    let index = (nearest + i64::from(rotation.steps())).rem_euclid(4);
    index as f64 * QUARTER_TURN
}

/// The Align state.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlignToAxis {
    goal: f64,
}

impl Behavior for AlignToAxis {
    fn entry(&mut self, event: &Event, ctx: &mut Context<'_>) {
        let theta = ctx.platform.orientation();
        let rotation = event.rotation().unwrap_or(Rotation::Align);
        self.goal = align_goal(theta, rotation);
        debug!(
            "[Align] {:?}: {:.3} -> {:.3} rad",
            rotation, theta, self.goal
        );
    }

    fn step(&mut self, ctx: &mut Context<'_>) -> Option<Event> {
        let p = ctx.platform.position();
        ctx.platform.teleport(p.x, p.y, self.goal);
        Some(Event::continue_evaluating())
    }
}
