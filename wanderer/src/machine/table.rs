//! Transition table: (state, event name) → next state.
//!
//! Built declaratively and validated once, so a bad wiring fails at agent
//! construction rather than as a stuck agent at runtime.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::error::{Result, WandererError};
use crate::event::names;

use super::state::StateId;

/// Validated transition lookup.
#[derive(Clone, Debug)]
pub struct TransitionTable {
    initial: StateId,
    transitions: HashMap<StateId, HashMap<String, StateId>>,
}

impl TransitionTable {
    /// Start building a table whose machine begins in `initial`.
    pub fn builder(initial: StateId) -> TransitionTableBuilder {
        TransitionTableBuilder {
            initial,
            entries: Vec::new(),
        }
    }

    /// The wanderer's wiring, with `tick_name` as the periodic event.
    ///
    /// | event | from | to |
    /// |-------|------|----|
    /// | tick | Translate / Align | Align / Translate |
    /// | `move` | Evaluate | Translate |
    /// | `continue-evaluating` | Translate, Align, Reset | Evaluate |
    /// | `rotate` | Evaluate, Recenter | Align |
    /// | `reached-exit` | Translate | Reset |
    /// | `reset` | any | Reset |
    /// | `enter-manual` | any | ManualDrive |
    /// | `recenter-request` | ManualDrive | Recenter |
    ///
    /// The tick edges are reserved for hosts that animate turns in several
    /// steps; no behavior emits the tick event, so a validated table keeps
    /// them without any runtime path through them.
    pub fn standard(tick_name: &str) -> Result<Self> {
        use StateId::*;

        Self::builder(Evaluate)
            .on(Translate, tick_name, Align)
            .on(Align, tick_name, Translate)
            .on(Evaluate, names::MOVE, Translate)
            .on_any(
                &[Translate, Align, Reset],
                names::CONTINUE_EVALUATING,
                Evaluate,
            )
            .on_any(&[Evaluate, Recenter], names::ROTATE, Align)
            .on(Translate, names::REACHED_EXIT, Reset)
            .on_any(&StateId::ALL, names::RESET, Reset)
            .on_any(&StateId::ALL, names::ENTER_MANUAL, ManualDrive)
            .on(ManualDrive, names::RECENTER_REQUEST, Recenter)
            .build()
    }

    /// Initial state.
    pub fn initial(&self) -> StateId {
        self.initial
    }

    /// Next state for `event` in `from`, if the pair is wired.
    pub fn next(&self, from: StateId, event: &str) -> Option<StateId> {
        self.transitions.get(&from)?.get(event).copied()
    }

    /// Number of wired (state, event) pairs.
    pub fn len(&self) -> usize {
        self.transitions.values().map(HashMap::len).sum()
    }

    /// True when nothing is wired.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Event names wired from `state`, sorted.
    pub fn events_from(&self, state: StateId) -> Vec<&str> {
        let mut events: Vec<&str> = self
            .transitions
            .get(&state)
            .map(|edges| edges.keys().map(String::as_str).collect())
            .unwrap_or_default();
        events.sort_unstable();
        events
    }

    fn reachable(&self) -> HashSet<StateId> {
        let mut seen = HashSet::from([self.initial]);
        let mut queue = VecDeque::from([self.initial]);
        while let Some(state) = queue.pop_front() {
            let Some(edges) = self.transitions.get(&state) else {
                continue;
            };
            for &to in edges.values() {
                if seen.insert(to) {
                    queue.push_back(to);
                }
            }
        }
        seen
    }
}

/// Declarative table builder.
#[derive(Clone, Debug)]
pub struct TransitionTableBuilder {
    initial: StateId,
    entries: Vec<(StateId, String, StateId)>,
}

impl TransitionTableBuilder {
    /// Wire `event` from `from` to `to`.
    pub fn on(mut self, from: StateId, event: &str, to: StateId) -> Self {
        self.entries.push((from, event.to_string(), to));
        self
    }

    /// Wire `event` from each of `from` to `to`.
    pub fn on_any(mut self, from: &[StateId], event: &str, to: StateId) -> Self {
        for &state in from {
            self.entries.push((state, event.to_string(), to));
        }
        self
    }

    /// Validate and build.
    ///
    /// Fails when a (state, event) pair is wired to two different states,
    /// when a state cannot be reached from the initial state, or when a
    /// state has no `reset` transition.
    pub fn build(self) -> Result<TransitionTable> {
        let mut transitions: HashMap<StateId, HashMap<String, StateId>> = HashMap::new();
        for (from, event, to) in self.entries {
            if event.is_empty() {
                return Err(WandererError::TransitionTable(format!(
                    "empty event name from {}",
                    from
                )));
            }
            let edges = transitions.entry(from).or_default();
            if let Some(&existing) = edges.get(&event) {
                if existing != to {
                    return Err(WandererError::TransitionTable(format!(
                        "'{}' from {} leads to both {} and {}",
                        event, from, existing, to
                    )));
                }
            }
            edges.insert(event, to);
        }

        let table = TransitionTable {
            initial: self.initial,
            transitions,
        };

        let reachable = table.reachable();
        if let Some(state) = StateId::ALL.iter().find(|&&s| !reachable.contains(&s)) {
            return Err(WandererError::TransitionTable(format!(
                "{} is unreachable from {}",
                state, table.initial
            )));
        }

        if let Some(state) = StateId::ALL
            .iter()
            .find(|&&s| table.next(s, names::RESET) != Some(StateId::Reset))
        {
            return Err(WandererError::TransitionTable(format!(
                "{} has no reset transition",
                state
            )));
        }

        Ok(table)
    }
}
