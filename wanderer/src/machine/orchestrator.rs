//! Single-active-state orchestrator.

use log::{debug, trace};

use crate::behavior::{
    AlignToAxis, Behavior, Context, Evaluate, ManualDrive, RecenterInCell, Reset, TranslateToCell,
};
use crate::event::Event;

use super::state::StateId;
use super::table::TransitionTable;

/// A transition that fired.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// State that was left.
    pub from: StateId,
    /// State that was entered.
    pub to: StateId,
    /// Name of the triggering event.
    pub event: String,
}

/// One instance of every behavior, indexed by state.
#[derive(Debug, Default)]
struct Behaviors {
    evaluate: Evaluate,
    translate: TranslateToCell,
    align: AlignToAxis,
    reset: Reset,
    manual: ManualDrive,
    recenter: RecenterInCell,
}

impl Behaviors {
    fn get_mut(&mut self, state: StateId) -> &mut dyn Behavior {
        match state {
            StateId::Evaluate => &mut self.evaluate,
            StateId::Translate => &mut self.translate,
            StateId::Align => &mut self.align,
            StateId::Reset => &mut self.reset,
            StateId::ManualDrive => &mut self.manual,
            StateId::Recenter => &mut self.recenter,
        }
    }
}

/// Runs the active behavior and resolves its events against the table.
///
/// Exactly one state is active. [`StateMachine::step`] runs that state's
/// behavior once; [`StateMachine::dispatch`] looks an event up under the
/// active state and, when wired, runs the exit hook of the old state and
/// the entry hook of the new one. At most one transition fires per event.
#[derive(Debug)]
pub struct StateMachine {
    table: TransitionTable,
    current: StateId,
    behaviors: Behaviors,
}

impl StateMachine {
    /// Create a machine sitting in the table's initial state.
    pub fn new(table: TransitionTable) -> Self {
        let current = table.initial();
        Self {
            table,
            current,
            behaviors: Behaviors::default(),
        }
    }

    /// Active state.
    pub fn state(&self) -> StateId {
        self.current
    }

    /// Run the active behavior's step once.
    pub fn step(&mut self, ctx: &mut Context<'_>) -> Option<Event> {
        self.behaviors.get_mut(self.current).step(ctx)
    }

    /// Apply an event to the active state.
    ///
    /// Returns the transition that fired, or `None` when the event is not
    /// wired from the active state (the event is then dropped).
    pub fn dispatch(&mut self, event: &Event, ctx: &mut Context<'_>) -> Option<Transition> {
        let Some(next) = self.table.next(self.current, event.name()) else {
            trace!("[Machine] {} ignores '{}'", self.current, event.name());
            return None;
        };

        let from = self.current;
        self.behaviors.get_mut(from).exit(ctx);
        self.current = next;
        self.behaviors.get_mut(next).entry(event, ctx);
        debug!("[Machine] {} --{}--> {}", from, event.name(), next);

        Some(Transition {
            from,
            to: next,
            event: event.name().to_string(),
        })
    }

    /// The translate behavior, for inspecting its target.
    pub fn translate(&self) -> &TranslateToCell {
        &self.behaviors.translate
    }

    /// The manual drive behavior, for inspecting the tracked velocity.
    pub fn manual(&self) -> &ManualDrive {
        &self.behaviors.manual
    }
}
