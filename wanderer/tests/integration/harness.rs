//! Synchronous harness: one agent driving one simulated body.

use std::cell::RefCell;
use std::rc::Rc;

use maze_wanderer::sim::{Maze, Simulation};
use maze_wanderer::{
    Event, GridVisitMap, InputEvent, Pose2D, StateId, TickReport, Transition, Wanderer,
    WandererConfig,
};

/// Agent plus simulator plus a log of every decision the agent made.
pub struct Harness {
    pub wanderer: Wanderer,
    pub sim: Simulation,
    decisions: Rc<RefCell<Vec<Event>>>,
}

/// What a run to the exit observed.
pub struct ExitRun {
    /// Ticks until reached-exit was emitted.
    pub ticks: u64,
    /// Visit map at the moment of the exit.
    pub visits: GridVisitMap,
}

impl Harness {
    /// Agent with the default config, body at the start pose.
    pub fn new(maze: Maze) -> Self {
        let config = WandererConfig::default();
        let pose = config.start_pose.pose();
        Self::with_pose(maze, config, pose)
    }

    /// Agent with `config`, body at an arbitrary pose.
    pub fn with_pose(maze: Maze, config: WandererConfig, pose: Pose2D) -> Self {
        let mut wanderer = Wanderer::new(config).expect("valid config");
        let decisions = Rc::new(RefCell::new(Vec::new()));
        for name in ["move", "rotate"] {
            let log = Rc::clone(&decisions);
            wanderer.subscribe(name, move |e: &Event| log.borrow_mut().push(e.clone()));
        }
        Self {
            wanderer,
            sim: Simulation::new(maze, pose),
            decisions,
        }
    }

    pub fn tick(&mut self) -> TickReport {
        self.wanderer.tick(&mut self.sim)
    }

    pub fn input(&mut self, input: InputEvent) -> Option<Transition> {
        self.wanderer.handle_input(input, &mut self.sim)
    }

    /// Tick until `done` holds for a report; returns the tick count.
    pub fn run_until<F>(&mut self, max_ticks: u64, mut done: F) -> Option<u64>
    where
        F: FnMut(&TickReport, &Wanderer) -> bool,
    {
        for tick in 1..=max_ticks {
            let report = self.tick();
            if done(&report, &self.wanderer) {
                return Some(tick);
            }
        }
        None
    }

    pub fn run_until_state(&mut self, state: StateId, max_ticks: u64) -> Option<u64> {
        self.run_until(max_ticks, |report, _| report.state == state)
    }

    pub fn run_to_exit(&mut self, max_ticks: u64) -> Option<ExitRun> {
        let ticks = self.run_until(max_ticks, |report, _| report.reached_exit())?;
        Some(ExitRun {
            ticks,
            visits: self.wanderer.visits().clone(),
        })
    }

    /// Move/rotate decisions made so far.
    pub fn decisions(&self) -> Vec<Event> {
        self.decisions.borrow().clone()
    }

    pub fn pose(&self) -> Pose2D {
        self.sim.body().pose()
    }
}
