//! The wanderer agent.
//!
//! [`Wanderer`] owns everything with a lifetime longer than one tick: the
//! state machine, the visit map, the configuration and the input
//! translator. The body and sensors are borrowed per call through
//! [`Platform`], so the agent never holds on to its collaborators.
//!
//! # Example
//!
//! ```
//! use maze_wanderer::sim::{Maze, Simulation};
//! use maze_wanderer::{Wanderer, WandererConfig};
//!
//! let config = WandererConfig::default();
//! let mut wanderer = Wanderer::new(config.clone()).unwrap();
//! let mut sim = Simulation::new(Maze::open(), config.start_pose.pose());
//!
//! for _ in 0..10 {
//!     let report = wanderer.tick(&mut sim);
//!     if report.reached_exit() {
//!         break;
//!     }
//! }
//! assert!(wanderer.ticks() > 0);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, info, warn};

use crate::behavior::Context;
use crate::config::WandererConfig;
use crate::error::Result;
use crate::event::{Event, Payload, names};
use crate::grid::GridVisitMap;
use crate::input::{InputEvent, InputTranslator, Mode};
use crate::machine::{StateId, StateMachine, Transition, TransitionTable};
use crate::platform::Platform;

/// Source of per-agent tick event names.
static NEXT_AGENT_ID: AtomicU64 = AtomicU64::new(0);

type Handler = Box<dyn FnMut(&Event)>;
type LabelSink = Box<dyn FnMut(&str)>;

/// Result of one [`Wanderer::tick`].
#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    /// State after the tick.
    pub state: StateId,
    /// Event emitted by the active behavior, if any.
    pub event: Option<Event>,
    /// Transition that event caused, if any.
    pub transition: Option<Transition>,
}

impl TickReport {
    /// Did this tick complete the exit translation?
    pub fn reached_exit(&self) -> bool {
        self.event
            .as_ref()
            .is_some_and(|e| e.name() == names::REACHED_EXIT)
    }
}

/// Autonomous maze explorer with manual override.
pub struct Wanderer {
    config: WandererConfig,
    machine: StateMachine,
    visits: GridVisitMap,
    input: InputTranslator,
    tick_name: String,
    ticks: u64,
    subscribers: Vec<(String, Handler)>,
    label_sink: Option<LabelSink>,
}

impl Wanderer {
    /// Create an agent in Evaluate, Autonomous mode, with an empty map.
    ///
    /// The agent does not move the body; place it at the start pose (or
    /// deliver a `reset`) before the first tick.
    pub fn new(config: WandererConfig) -> Result<Self> {
        config.validate()?;
        let id = NEXT_AGENT_ID.fetch_add(1, Ordering::Relaxed);
        // Wired but never emitted; see TransitionTable::standard
        let tick_name = format!("{}{}", names::TICK_PREFIX, id);
        let table = TransitionTable::standard(&tick_name)?;
        let input = InputTranslator::new(config.manual, config.bounds);

        info!(
            "[Wander] Agent '{}' ready, start ({:.0}, {:.0})",
            tick_name, config.start_pose.x, config.start_pose.y
        );

        Ok(Self {
            config,
            machine: StateMachine::new(table),
            visits: GridVisitMap::new(),
            input,
            tick_name,
            ticks: 0,
            subscribers: Vec::new(),
            label_sink: None,
        })
    }

    /// Run the active behavior once and apply the event it emits.
    pub fn tick(&mut self, platform: &mut dyn Platform) -> TickReport {
        self.ticks += 1;
        let event = {
            let mut ctx = Context {
                platform: &mut *platform,
                visits: &mut self.visits,
                config: &self.config,
                mode: self.input.mode(),
            };
            self.machine.step(&mut ctx)
        };

        let transition = match &event {
            Some(e) => self.apply(e, platform),
            None => None,
        };

        TickReport {
            state: self.machine.state(),
            event,
            transition,
        }
    }

    /// Deliver an event from outside the agent.
    pub fn handle_event(
        &mut self,
        event: Event,
        platform: &mut dyn Platform,
    ) -> Option<Transition> {
        self.apply(&event, platform)
    }

    /// Deliver an untyped event, dropping it if its payload is malformed.
    pub fn ingest(
        &mut self,
        name: &str,
        payload: Payload,
        platform: &mut dyn Platform,
    ) -> Option<Transition> {
        match Event::from_parts(name, payload) {
            Ok(event) => self.apply(&event, platform),
            Err(e) => {
                warn!("[Wander] Dropping event: {}", e);
                None
            }
        }
    }

    /// Deliver an operator input.
    pub fn handle_input(
        &mut self,
        input: InputEvent,
        platform: &mut dyn Platform,
    ) -> Option<Transition> {
        let before = self.input.mode();
        let event = self.input.handle(input, platform.position());
        let after = self.input.mode();
        if before != after {
            if let Some(sink) = self.label_sink.as_mut() {
                sink(after.label());
            }
        }
        let event = event?;
        self.apply(&event, platform)
    }

    /// Observe every emitted or delivered event named `name`.
    pub fn subscribe<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: FnMut(&Event) + 'static,
    {
        self.subscribers.push((name.into(), Box::new(handler)));
    }

    /// Receive the mode label now and on every mode change.
    pub fn set_label_sink<F>(&mut self, mut sink: F)
    where
        F: FnMut(&str) + 'static,
    {
        sink(self.input.mode().label());
        self.label_sink = Some(Box::new(sink));
    }

    fn apply(&mut self, event: &Event, platform: &mut dyn Platform) -> Option<Transition> {
        for (name, handler) in self.subscribers.iter_mut() {
            if name.as_str() == event.name() {
                handler(event);
            }
        }

        let mut ctx = Context {
            platform,
            visits: &mut self.visits,
            config: &self.config,
            mode: self.input.mode(),
        };
        let transition = self.machine.dispatch(event, &mut ctx);
        if transition.is_none() {
            debug!(
                "[Wander] No transition for '{}' in {}",
                event.name(),
                self.machine.state()
            );
        }
        transition
    }

    /// Active state.
    pub fn state(&self) -> StateId {
        self.machine.state()
    }

    /// Exploration memory.
    pub fn visits(&self) -> &GridVisitMap {
        &self.visits
    }

    /// Current control mode.
    pub fn mode(&self) -> Mode {
        self.input.mode()
    }

    /// Human-readable mode label.
    pub fn mode_label(&self) -> &'static str {
        self.input.mode().label()
    }

    /// Name of this agent's periodic event.
    pub fn tick_event_name(&self) -> &str {
        &self.tick_name
    }

    /// Ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The underlying state machine.
    pub fn machine(&self) -> &StateMachine {
        &self.machine
    }
}

impl std::fmt::Debug for Wanderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wanderer")
            .field("state", &self.machine.state())
            .field("mode", &self.input.mode())
            .field("tick_name", &self.tick_name)
            .field("ticks", &self.ticks)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}
