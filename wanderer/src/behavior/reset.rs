//! Lifecycle reset: back to the start pose with an empty memory.

use log::{debug, info};

use crate::event::Event;
use crate::input::Mode;
use crate::platform::VelocityCommand;

use super::{Behavior, Context};

/// The Reset state.
///
/// The work happens on the first step rather than on entry, so whoever
/// triggered the reset still sees the visit map as it was. The branch taken
/// afterwards follows the live control mode, not the mode the reset event
/// was sent with: the operator may toggle modes while the reset is pending.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reset {
    requested: Mode,
}

impl Reset {
    /// Mode carried by the event that entered this reset.
    pub fn requested_mode(&self) -> Mode {
        self.requested
    }
}

impl Behavior for Reset {
    fn entry(&mut self, event: &Event, _ctx: &mut Context<'_>) {
        // reached-exit carries no mode
        self.requested = event.mode().unwrap_or(Mode::Autonomous);
    }

    fn step(&mut self, ctx: &mut Context<'_>) -> Option<Event> {
        let start = ctx.config.start_pose.pose();
        info!(
            "[Reset] {} cells visited, back to ({:.0}, {:.0})",
            ctx.visits.visited_cells().len(),
            start.x,
            start.y
        );
        ctx.platform.teleport(start.x, start.y, start.theta);
        ctx.visits.reset();

        if ctx.mode != self.requested {
            debug!(
                "[Reset] Requested {:?}, resuming {:?}",
                self.requested, ctx.mode
            );
        }
        match ctx.mode {
            Mode::Manual => Some(Event::enter_manual(VelocityCommand::stop())),
            Mode::Autonomous => Some(Event::continue_evaluating()),
        }
    }
}
