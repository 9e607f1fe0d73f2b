//! Plate Drift - headless driver
//!
//! Generates a world of tectonic plates, optionally drifts it for a number
//! of ticks, and writes the result as GeoJSON. Ctrl-C stops a simulation at
//! the end of the current tick and still saves the world.

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

use plate_drift::core::error::Result;
use plate_drift::persistence::{load_world, save_world};
use plate_drift::simulation::RunOutcome;
use plate_drift::{PlateConfig, PlateFactory, SimulationEngine, TickReport, WorldState};

/// Procedural tectonic plate generator and drift simulator
#[derive(Parser, Debug)]
#[command(name = "plate-drift")]
#[command(about = "Generate non-overlapping tectonic plates and simulate their drift")]
struct Args {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Random seed for deterministic runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a fresh world and save it
    Generate {
        /// Number of plates (default: random in the configured range)
        #[arg(long)]
        plates: Option<u32>,

        /// Output GeoJSON file
        #[arg(long, short = 'o', default_value = "world_map.geojson")]
        output: PathBuf,
    },
    /// Load or generate a world, drift it, and save the result
    Simulate {
        /// Start from this GeoJSON world instead of generating one
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,

        /// Number of plates when generating
        #[arg(long)]
        plates: Option<u32>,

        /// Ticks to run
        #[arg(long)]
        steps: Option<u64>,

        /// Pause between ticks in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Output GeoJSON file
        #[arg(long, short = 'o', default_value = "world_map.geojson")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("plate_drift=info")))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => PlateConfig::load(path)?,
        None => PlateConfig::default(),
    };

    let seed = args.seed.or(config.run.seed).unwrap_or_else(rand::random);
    tracing::info!("Using seed {}", seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    match args.command {
        Command::Generate { plates, output } => {
            if plates.is_some() {
                config.generation.plate_count = plates;
            }
            let world = PlateFactory::new(config.generation)?.generate_default(&mut rng)?;
            save_world(&world, &output)?;
            println!("Generated {}", world.summary());
            println!("World written to {}", output.display());
        }
        Command::Simulate {
            input,
            plates,
            steps,
            delay_ms,
            output,
        } => {
            if plates.is_some() {
                config.generation.plate_count = plates;
            }
            let steps = steps.unwrap_or(config.run.steps);
            let delay = Duration::from_millis(delay_ms.unwrap_or(config.run.tick_delay_ms));

            let mut world = match &input {
                Some(path) => load_world(path)?,
                None => PlateFactory::new(config.generation.clone())?.generate_default(&mut rng)?,
            };
            let mut engine = SimulationEngine::from_config(&config)?;

            // The runtime only hosts the Ctrl-C listener; ticks run on this thread.
            let rt = Runtime::new()?;
            let stop = engine.stop_signal();
            rt.spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    tracing::warn!("Interrupt received, stopping after the current tick");
                    stop.raise();
                }
            });

            let mut observer = |report: &TickReport, world: &WorldState| {
                tracing::debug!("Tick {}: {}", report.tick, world.summary());
                if !delay.is_zero() {
                    std::thread::sleep(delay);
                }
                ControlFlow::Continue(())
            };
            let summary = engine.run(&mut world, steps, &mut rng, &mut observer);

            save_world(&world, &output)?;
            println!(
                "Simulated {} of {} tick(s): {} collision(s), {} wrap(s){}",
                summary.ticks_completed,
                steps,
                summary.collisions,
                summary.wraps,
                if summary.outcome == RunOutcome::Cancelled { " (interrupted)" } else { "" }
            );
            println!("World written to {}", output.display());
        }
    }

    Ok(())
}
