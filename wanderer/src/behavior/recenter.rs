//! Recenter-in-cell motion primitive, used when the operator hands control
//! back. Driving freely leaves the agent anywhere inside a cell; the
//! exploration policy assumes it sits on a cell centre.

use log::{debug, trace};

use crate::core::{Cell, Point2D};
use crate::event::Event;
use crate::platform::VelocityCommand;

use super::{Behavior, Context};

/// The Recenter state.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecenterInCell {
    center: Point2D,
}

impl RecenterInCell {
    /// Centre being driven to.
    pub fn center(&self) -> Point2D {
        self.center
    }
}

impl Behavior for RecenterInCell {
    fn entry(&mut self, _event: &Event, ctx: &mut Context<'_>) {
        // Manual drive may end just past the boundary
        let cell = Cell::from_position(ctx.platform.position()).clamped();
        self.center = cell.center();
        ctx.platform.track_velocity(VelocityCommand::stop());
        debug!("[Recenter] Returning to centre of {}", cell);
    }

    fn step(&mut self, ctx: &mut Context<'_>) -> Option<Event> {
        let motion = &ctx.config.motion;
        let here = ctx.platform.position();

        if here.within(&self.center, motion.recenter_tolerance) {
            let theta = ctx.platform.orientation();
            ctx.platform.track_velocity(VelocityCommand::stop());
            ctx.platform.teleport(self.center.x, self.center.y, theta);
            return Some(Event::realign());
        }

        trace!("[Recenter] at ({:.1}, {:.1})", here.x, here.y);
        ctx.platform.move_toward(self.center, motion.recenter_speed, motion.recenter_angular);
        None
    }
}
