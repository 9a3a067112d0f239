//! wanderer-sim: run the maze wanderer against a simulated maze.
//!
//! # Usage
//!
//! ```bash
//! # Open maze, default config
//! cargo run --bin wanderer-sim
//!
//! # Random maze from a seed
//! cargo run --bin wanderer-sim -- --seed 42
//!
//! # Layout and config from files, with decision tracing
//! RUST_LOG=trace cargo run --bin wanderer-sim -- --maze maze.toml --config wanderer.toml
//! ```

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::info;

use maze_wanderer::sim::{Maze, Simulation};
use maze_wanderer::{GridVisitMap, Result, Wanderer, WandererConfig};

/// Headless maze wanderer simulation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Agent configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maze layout file (TOML); overrides --seed
    #[arg(short, long)]
    maze: Option<PathBuf>,

    /// Carve a random maze from this seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many ticks
    #[arg(long, default_value = "200000")]
    max_ticks: u64,

    /// Log progress every N ticks (0 = never)
    #[arg(long, default_value = "5000")]
    progress_interval: u64,
}

/// How a run ended.
struct Outcome {
    ticks: u64,
    exited: bool,
    visits: GridVisitMap,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("wanderer-sim: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => WandererConfig::from_file(path)?,
        None => WandererConfig::default(),
    };

    let maze = match (&args.maze, args.seed) {
        (Some(path), _) => Maze::from_file(path)?,
        (None, Some(seed)) => Maze::random(seed),
        (None, None) => Maze::open(),
    };
    println!("{}", maze);

    let mut sim = Simulation::new(maze, config.start_pose.pose());
    let mut wanderer = Wanderer::new(config)?;
    wanderer.set_label_sink(|label| info!("[Sim] Mode: {}", label));

    let outcome = simulate(&mut wanderer, &mut sim, args.max_ticks, args.progress_interval);

    println!("=== Run Summary ===");
    if outcome.exited {
        println!("Reached the exit after {} ticks", outcome.ticks);
    } else {
        println!("No exit within {} ticks", outcome.ticks);
    }
    println!(
        "Cells visited: {} of 49, {} departures, busiest cell {}",
        outcome.visits.visited_cells().len(),
        outcome.visits.total_visits(),
        outcome.visits.max_count()
    );
    println!("Wall contacts: {}", sim.body().collisions());
    println!("\nVisit map:\n{}", outcome.visits);
    Ok(())
}

fn simulate(
    wanderer: &mut Wanderer,
    sim: &mut Simulation,
    max_ticks: u64,
    progress_interval: u64,
) -> Outcome {
    for tick in 1..=max_ticks {
        let report = wanderer.tick(sim);
        if report.reached_exit() {
            return Outcome {
                ticks: tick,
                exited: true,
                visits: wanderer.visits().clone(),
            };
        }
        if progress_interval > 0 && tick % progress_interval == 0 {
            let pose = sim.body().pose();
            info!(
                "[Sim] tick {}: {} at ({:.0}, {:.0}), {} cells visited",
                tick,
                report.state,
                pose.x,
                pose.y,
                wanderer.visits().visited_cells().len()
            );
        }
    }
    Outcome {
        ticks: max_ticks,
        exited: false,
        visits: wanderer.visits().clone(),
    }
}
