//! Operator velocity tracking.

use log::{debug, info};

use crate::event::Event;
use crate::input::Mode;
use crate::platform::VelocityCommand;

use super::{Behavior, Context};

/// The ManualDrive state.
///
/// Holds the latest operator velocity and forwards it every tick. Leaving
/// the maze bounds ends the run with a reset that stays in manual mode.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualDrive {
    velocity: VelocityCommand,
}

impl ManualDrive {
    /// Velocity being tracked.
    pub fn velocity(&self) -> VelocityCommand {
        self.velocity
    }
}

impl Behavior for ManualDrive {
    fn entry(&mut self, event: &Event, _ctx: &mut Context<'_>) {
        self.velocity = event.velocity().unwrap_or_default();
        debug!(
            "[Manual] v={:.2} w={:.2}",
            self.velocity.linear, self.velocity.angular
        );
    }

    fn step(&mut self, ctx: &mut Context<'_>) -> Option<Event> {
        let here = ctx.platform.position();
        if !ctx.config.bounds.contains(here) {
            info!("[Manual] Left the maze at ({:.1}, {:.1})", here.x, here.y);
            return Some(Event::reset(Mode::Manual));
        }
        ctx.platform.track_velocity(self.velocity);
        None
    }

    fn exit(&mut self, ctx: &mut Context<'_>) {
        ctx.platform.track_velocity(VelocityCommand::stop());
    }
}
