//! State behaviors run by the orchestrator.
//!
//! Each behavior implements [`Behavior`]: an entry hook that receives the
//! event that caused the transition, a step function called once per tick
//! while the behavior is active, and an exit hook. A step emits at most one
//! event; the orchestrator resolves it against the transition table before
//! the next tick.
//!
//! | Behavior | Role |
//! |----------|------|
//! | [`Evaluate`] | choose move / rotate from clearance and visit counts |
//! | [`TranslateToCell`] | drive to a cell centre, marking the departure cell |
//! | [`AlignToAxis`] | snap orientation to an axis, optionally turning |
//! | [`RecenterInCell`] | return to the centre of the current cell |
//! | [`Reset`] | restore the start pose and clear memory |
//! | [`ManualDrive`] | track the operator velocity |

mod align;
mod evaluate;
mod manual;
mod recenter;
mod reset;
mod translate;

pub use align::AlignToAxis;
pub use evaluate::{Decision, Evaluate, decide};
pub use manual::ManualDrive;
pub use recenter::RecenterInCell;
pub use reset::Reset;
pub use translate::{TranslateToCell, goal_for};

use crate::config::WandererConfig;
use crate::event::Event;
use crate::grid::GridVisitMap;
use crate::input::Mode;
use crate::platform::Platform;

/// Everything a behavior may touch during one hook call.
pub struct Context<'a> {
    /// Body and sensors.
    pub platform: &'a mut dyn Platform,
    /// Exploration memory.
    pub visits: &'a mut GridVisitMap,
    /// Agent configuration.
    pub config: &'a WandererConfig,
    /// Control mode as the operator last set it.
    pub mode: Mode,
}

/// One state of the wanderer's state machine.
pub trait Behavior {
    /// Called when the state becomes active, with the triggering event.
    fn entry(&mut self, _event: &Event, _ctx: &mut Context<'_>) {}

    /// Called once per tick while active.
    fn step(&mut self, ctx: &mut Context<'_>) -> Option<Event>;

    /// Called when the state is left.
    fn exit(&mut self, _ctx: &mut Context<'_>) {}
}
