//! Translate-to-cell motion primitive.

use log::{debug, trace};

use crate::core::{Cell, EXIT_TARGET, MAZE_HALF_EXTENT, Point2D};
use crate::event::Event;

use super::{Behavior, Context};

/// Goal position for a translation into `cell`.
///
/// The cell centre, except for the exit target whose centre lies outside
/// the maze: that goal is pulled back onto the boundary.
pub fn goal_for(cell: Cell) -> Point2D {
    let center = cell.center();
    if cell == EXIT_TARGET {
        Point2D::new(center.x, center.y.min(MAZE_HALF_EXTENT))
    } else {
        center
    }
}

/// The Translate state.
///
/// Drives toward the target cell centre at a bounded speed and snaps onto
/// it once within tolerance on both axes.
#[derive(Clone, Copy, Debug, Default)]
pub struct TranslateToCell {
    target: Option<Cell>,
    goal: Point2D,
}

impl TranslateToCell {
    /// Cell currently being translated to.
    pub fn target(&self) -> Option<Cell> {
        self.target
    }
}

impl Behavior for TranslateToCell {
    fn entry(&mut self, event: &Event, ctx: &mut Context<'_>) {
        let here = ctx.platform.position();
        // A tick re-entry carries no cell: keep the target from before
        if let Some(cell) = event.cell() {
            self.target = Some(cell);
            self.goal = goal_for(cell);
        } else if self.target.is_none() {
            let cell = Cell::from_position(here).clamped();
            self.target = Some(cell);
            self.goal = goal_for(cell);
        }

        let departure = Cell::from_position(here);
        if departure.in_grid() && event.cell().is_some() {
            ctx.visits.increment(departure);
        }
        debug!(
            "[Translate] {} -> {:?} goal=({:.1}, {:.1})",
            departure, self.target, self.goal.x, self.goal.y
        );
    }

    fn step(&mut self, ctx: &mut Context<'_>) -> Option<Event> {
        let motion = &ctx.config.motion;
        let here = ctx.platform.position();

        if !here.within(&self.goal, motion.translate_tolerance) {
            trace!("[Translate] at ({:.1}, {:.1})", here.x, here.y);
            ctx.platform.move_toward(self.goal, motion.translate_speed, 0.0);
            return None;
        }

        let theta = ctx.platform.orientation();
        ctx.platform.teleport(self.goal.x, self.goal.y, theta);
        if self.target == Some(EXIT_TARGET) {
            debug!("[Translate] Left the maze through the exit");
            Some(Event::reached_exit())
        } else {
            Some(Event::continue_evaluating())
        }
    }
}
