//! Exploration policy: pick the next move from clearance and visit counts.
//!
//! The policy is greedy and local. Of the clear directions among front,
//! right and left, it prefers the one whose neighbouring cell has been
//! visited least; ties go to front, then right, then left. Moving forward
//! translates one cell; preferring a side rotates toward it so the next
//! evaluation sees it as front. With nothing clear the agent turns
//! clockwise until an opening appears.
//!
//! The exit cell is special: sensing and counts are ignored and the agent
//! turns until it faces down, then steps out through the boundary.

use log::trace;

use crate::core::{Cell, EXIT_CELL, Heading, RelativeDirection};
use crate::event::{Event, Rotation};
use crate::grid::GridVisitMap;

use super::{Behavior, Context};

/// Outcome of one evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Translate to this cell.
    Move(Cell),
    /// Rotate a quarter turn.
    Rotate(Rotation),
}

impl Decision {
    /// The event announcing this decision.
    pub fn into_event(self) -> Event {
        match self {
            Decision::Move(cell) => Event::move_to(cell),
            Decision::Rotate(rotation) => Event::rotate(rotation),
        }
    }
}

/// Decide the next action.
///
/// `clear` is indexed by [`RelativeDirection::index`].
pub fn decide(cell: Cell, heading: Heading, clear: [bool; 3], visits: &GridVisitMap) -> Decision {
    if cell == EXIT_CELL {
        return leave_through_exit(cell, heading);
    }

    // min_by_key keeps the first of equal minima, which gives the
    // front > right > left tie-break.
    let preferred = RelativeDirection::PRIORITY
        .into_iter()
        .filter(|d| clear[d.index()])
        .min_by_key(|&d| visits.get(heading.neighbor(cell, d)));

    match preferred {
        Some(RelativeDirection::Front) => {
            Decision::Move(heading.neighbor(cell, RelativeDirection::Front))
        }
        Some(RelativeDirection::Right) => Decision::Rotate(Rotation::Clockwise),
        Some(RelativeDirection::Left) => Decision::Rotate(Rotation::CounterClockwise),
        None => Decision::Rotate(Rotation::Clockwise),
    }
}

fn leave_through_exit(cell: Cell, heading: Heading) -> Decision {
    match heading {
        Heading::Down => Decision::Move(cell.offset(Heading::Down.step())),
        Heading::Left => Decision::Rotate(Rotation::CounterClockwise),
        Heading::Right | Heading::Up => Decision::Rotate(Rotation::Clockwise),
    }
}

/// The Evaluate state.
///
/// Stateless between ticks: every step re-reads pose and sensors.
#[derive(Clone, Copy, Debug, Default)]
pub struct Evaluate;

impl Behavior for Evaluate {
    fn step(&mut self, ctx: &mut Context<'_>) -> Option<Event> {
        let pose = ctx.platform.pose();
        let cell = Cell::from_position(pose.position());
        let heading = Heading::from_orientation(pose.theta);
        let threshold = ctx.config.policy.obstacle_threshold;

        let mut clear = [false; 3];
        for direction in RelativeDirection::PRIORITY {
            clear[direction.index()] = ctx.platform.clearance(direction) > threshold;
        }

        let decision = decide(cell, heading, clear, ctx.visits);
        if clear == [false; 3] && cell != EXIT_CELL {
            trace!("[Evaluate] {} {:?}: boxed in, spinning clockwise", cell, heading);
        } else {
            trace!(
                "[Evaluate] {} {:?} clear={:?} -> {:?}",
                cell, heading, clear, decision
            );
        }
        Some(decision.into_event())
    }
}
