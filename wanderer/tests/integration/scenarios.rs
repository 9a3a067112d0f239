//! End-to-end scenarios against the simulator.

use std::f64::consts::FRAC_PI_2;
use std::io::Write;

use maze_wanderer::core::math::QUARTER_TURN;
use maze_wanderer::core::{EXIT_CELL, EXIT_TARGET};
use maze_wanderer::sim::Maze;
use maze_wanderer::{
    Cell, Event, InputEvent, Key, Mode, Point2D, Pose2D, Rotation, StateId, WandererConfig,
};

use crate::harness::Harness;

const MAX_TICKS: u64 = 500_000;

fn is_axis_aligned(theta: f64) -> bool {
    [0.0, 1.0, 2.0, 3.0].iter().any(|&k| theta == k * QUARTER_TURN)
}

fn is_cell_centred(p: Point2D) -> bool {
    Cell::from_position(p).center() == p
}

#[test]
fn test_open_maze_reaches_exit() {
    env_logger::try_init().ok();
    let mut harness = Harness::new(Maze::open());

    let run = harness.run_to_exit(MAX_TICKS).expect("agent reaches the exit");

    // Shortest route is 12 cells plus the step out; every departure cell
    // is counted once or twice at most.
    let visited = run.visits.visited_cells();
    assert!(visited.len() >= 13, "visited {:?}", visited);
    assert!(visited.iter().all(|&c| run.visits.get(c) >= 1));
    assert!(run.visits.max_count() <= 2, "\n{}", run.visits);
    assert_eq!(run.visits.get(EXIT_CELL), 1);
    assert_eq!(harness.pose().position(), Point2D::new(300.0, 350.0));
    assert!(run.ticks > 0);

    // The next tick runs the reset
    let report = harness.tick();
    assert_eq!(report.event, Some(Event::continue_evaluating()));
    assert_eq!(report.state, StateId::Evaluate);
    assert_eq!(harness.wanderer.visits().total_visits(), 0);
    assert_eq!(harness.pose(), Pose2D::new(-300.0, -300.0, 0.0));
}

#[test]
fn test_random_mazes_reach_exit() {
    env_logger::try_init().ok();
    for seed in [3, 11, 2024] {
        let mut harness = Harness::new(Maze::random(seed));
        let run = harness.run_to_exit(MAX_TICKS);
        assert!(run.is_some(), "seed {} did not exit:\n{}", seed, harness.sim.maze());
        // Translations follow open passages only
        assert_eq!(harness.sim.body().collisions(), 0, "seed {}", seed);
    }
}

#[test]
fn test_exit_cell_leaves_within_four_decisions() {
    let start = EXIT_CELL.center();
    for k in 0..4 {
        let pose = Pose2D::new(start.x, start.y, f64::from(k) * QUARTER_TURN);
        let mut harness = Harness::with_pose(Maze::open(), WandererConfig::default(), pose);

        harness.run_to_exit(10_000).expect("exit from the exit cell");

        let decisions = harness.decisions();
        assert!(decisions.len() <= 4, "heading {}: {:?}", k, decisions);
        assert_eq!(decisions.last(), Some(&Event::move_to(EXIT_TARGET)));
    }
}

#[test]
fn test_equal_counts_move_forward() {
    let pose = Pose2D::new(0.0, 0.0, 0.0);
    let mut harness = Harness::with_pose(Maze::open(), WandererConfig::default(), pose);

    let report = harness.tick();
    assert_eq!(report.event, Some(Event::move_to(Cell::new(4, 3))));
}

#[test]
fn test_front_wall_turns_clockwise() {
    let maze = Maze::from_walls(&[(Cell::new(3, 3), Cell::new(4, 3))]).unwrap();
    let pose = Pose2D::new(0.0, 0.0, 0.0);
    let mut harness = Harness::with_pose(maze, WandererConfig::default(), pose);

    let report = harness.tick();
    assert_eq!(report.event, Some(Event::rotate(Rotation::Clockwise)));
    assert_eq!(report.state, StateId::Align);

    // Aligning takes one tick and faces +Y
    harness.tick();
    assert_eq!(harness.pose().theta, FRAC_PI_2);
}

#[test]
fn test_boxed_in_spins_until_open() {
    // Only the way back out of (3, 3) is open
    let maze = Maze::from_walls(&[
        (Cell::new(3, 3), Cell::new(4, 3)),
        (Cell::new(3, 3), Cell::new(3, 4)),
        (Cell::new(3, 3), Cell::new(3, 2)),
    ])
    .unwrap();
    let pose = Pose2D::new(0.0, 0.0, 0.0);
    let mut harness = Harness::with_pose(maze, WandererConfig::default(), pose);

    harness
        .run_until(100, |report, _| report.state == StateId::Translate)
        .expect("eventually moves");
    let decisions = harness.decisions();
    assert_eq!(
        decisions,
        vec![
            Event::rotate(Rotation::Clockwise),
            Event::rotate(Rotation::Clockwise),
            Event::move_to(Cell::new(2, 3)),
        ]
    );
}

#[test]
fn test_restart_clears_memory() {
    let mut harness = Harness::new(Maze::open());
    harness
        .run_until(MAX_TICKS, |_, w| w.visits().visited_cells().len() >= 10)
        .expect("ten cells visited");
    assert!(harness.wanderer.visits().total_visits() >= 10);

    let t = harness.input(InputEvent::Restart).unwrap();
    assert_eq!(t.to, StateId::Reset);
    harness.tick();

    assert_eq!(harness.wanderer.state(), StateId::Evaluate);
    assert_eq!(harness.wanderer.visits().total_visits(), 0);
    assert!(harness.wanderer.visits().iter().all(|(_, count)| count == 0));
    assert_eq!(harness.pose(), Pose2D::new(-300.0, -300.0, 0.0));
}

#[test]
fn test_manual_handoff_resumes_centred_and_aligned() {
    env_logger::try_init().ok();
    let mut harness = Harness::new(Maze::open());

    // Interrupt mid-translation
    for _ in 0..50 {
        harness.tick();
    }
    assert_eq!(harness.wanderer.state(), StateId::Translate);
    let visits_before = harness.wanderer.visits().clone();

    let t = harness.input(InputEvent::ModeToggleToManual).unwrap();
    assert_eq!(t.to, StateId::ManualDrive);
    assert_eq!(harness.wanderer.mode(), Mode::Manual);

    harness.input(InputEvent::KeyDown(Key::Forward));
    harness.input(InputEvent::KeyDown(Key::TurnRight));
    for _ in 0..20 {
        harness.tick();
    }
    harness.input(InputEvent::KeyUp(Key::TurnRight));
    harness.input(InputEvent::KeyUp(Key::Forward));
    harness.tick();
    let driven = harness.pose();
    assert!(!is_cell_centred(driven.position()));
    assert!(!is_axis_aligned(driven.theta));

    let t = harness.input(InputEvent::ModeToggleToAutonomous).unwrap();
    assert_eq!(t.to, StateId::Recenter);
    assert_eq!(harness.wanderer.mode(), Mode::Autonomous);

    harness
        .run_until_state(StateId::Evaluate, 1_000)
        .expect("recentering finishes");
    let pose = harness.pose();
    assert!(is_cell_centred(pose.position()), "{:?}", pose);
    assert!(is_axis_aligned(pose.theta), "{:?}", pose);
    assert_eq!(Cell::from_position(pose.position()), Cell::from_position(driven.position()));
    assert_eq!(harness.wanderer.visits(), &visits_before);

    // Exploration carries on from there
    harness.run_to_exit(MAX_TICKS).expect("exit after handoff");
}

#[test]
fn test_manual_exit_through_boundary_resets_in_manual() {
    let pose = Pose2D::new(300.0, 340.0, FRAC_PI_2);
    let mut harness = Harness::with_pose(Maze::open(), WandererConfig::default(), pose);

    harness.input(InputEvent::ModeToggleToManual).unwrap();
    harness.input(InputEvent::KeyDown(Key::Forward)).unwrap();
    harness
        .run_until(200, |report, _| report.state == StateId::Reset)
        .expect("crossing the boundary resets");

    let report = harness.tick();
    assert_eq!(report.state, StateId::ManualDrive);
    assert_eq!(harness.wanderer.mode(), Mode::Manual);
    assert_eq!(harness.pose(), Pose2D::new(-300.0, -300.0, 0.0));
    assert!(harness.sim.body().velocity().is_stop());

    // Keys work again from the start cell
    assert!(harness.input(InputEvent::KeyDown(Key::Back)).is_some());
}

#[test]
fn test_config_file_start_pose() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[start_pose]\nx = -200.0\ny = -300.0\ntheta = 1.5707963267948966").unwrap();
    let config = WandererConfig::from_file(file.path()).unwrap();

    let mut harness = Harness::with_pose(Maze::open(), config, Pose2D::new(100.0, 100.0, 0.0));
    harness.input(InputEvent::Restart).unwrap();
    harness.tick();
    assert_eq!(harness.pose(), Pose2D::new(-200.0, -300.0, FRAC_PI_2));

    // Facing +Y from (1, 0): straight down the column
    let report = harness.tick();
    assert_eq!(report.event, Some(Event::move_to(Cell::new(1, 1))));
}

#[test]
fn test_shipped_config_and_layout() {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let config = WandererConfig::from_file(root.join("configs/wanderer.toml")).unwrap();
    assert_eq!(config, WandererConfig::default());

    let maze = Maze::from_file(root.join("mazes/switchback.toml")).unwrap();
    assert_eq!(maze.wall_count(), 18);
    assert_eq!(maze.reachable_from(Cell::new(0, 0)).len(), 49);

    let mut harness = Harness::new(maze);
    harness.run_to_exit(MAX_TICKS).expect("switchbacks lead to the exit");
    assert_eq!(harness.sim.body().collisions(), 0);
}

#[test]
fn test_release_control_while_reset_pending() {
    let mut harness = Harness::new(Maze::open());
    harness.input(InputEvent::ModeToggleToManual).unwrap();
    harness.input(InputEvent::KeyDown(Key::Forward)).unwrap();
    for _ in 0..10 {
        harness.tick();
    }

    let t = harness.input(InputEvent::Restart).unwrap();
    assert_eq!(t.to, StateId::Reset);
    // Reset has no recenter edge; the mode still flips
    assert!(harness.input(InputEvent::ModeToggleToAutonomous).is_none());
    assert_eq!(harness.wanderer.mode(), Mode::Autonomous);

    let report = harness.tick();
    assert_eq!(report.event, Some(Event::continue_evaluating()));
    assert_eq!(report.state, StateId::Evaluate);
    assert_eq!(harness.pose(), Pose2D::new(-300.0, -300.0, 0.0));

    // Exploring again, not parked in manual drive
    let report = harness.tick();
    assert_eq!(report.event, Some(Event::move_to(Cell::new(1, 0))));
    harness.run_to_exit(MAX_TICKS).expect("exit after the handback");
}
