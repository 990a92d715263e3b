use std::path::PathBuf;

use clap::Parser;
use sandfall::{ascii, RunnerConfig, Scenario};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario preset to populate the world with
    #[arg(long, value_enum)]
    scenario: Option<Scenario>,

    /// Number of ticks to simulate
    #[arg(long)]
    ticks: Option<u64>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<u32>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<u32>,

    /// Seed for the simulation RNG
    #[arg(long)]
    seed: Option<u64>,

    /// Ambient gravity
    #[arg(long)]
    gravity: Option<f32>,

    /// Extra RON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print an ASCII snapshot of the final grid
    #[arg(long)]
    dump: bool,

    /// Count materials without rules instead of failing the run
    #[arg(long)]
    lenient: bool,
}

impl Args {
    /// Command line flags override every other configuration layer
    fn apply(&self, config: &mut RunnerConfig) {
        let run = &mut config.run;
        if let Some(scenario) = self.scenario {
            run.scenario = scenario;
        }
        if let Some(ticks) = self.ticks {
            run.ticks = ticks;
        }
        if let Some(width) = self.width {
            run.width = width;
        }
        if let Some(height) = self.height {
            run.height = height;
        }
        if let Some(seed) = self.seed {
            run.seed = seed;
        }
        if let Some(gravity) = self.gravity {
            run.gravity = gravity;
        }
        if self.lenient {
            config.sim.strict_materials = false;
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let mut config = RunnerConfig::load(args.config.as_deref())?;
    args.apply(&mut config);

    log::info!("Starting sandfall");
    let (world, total) = sandfall::run(&config)?;
    log::info!(
        "Finished after {} ticks: {} updates, {} moves, {} conversions, {} unsupported",
        world.tick_count(),
        total.particles_updated,
        total.moves,
        total.conversions,
        total.unsupported
    );

    if args.dump {
        print!("{}", ascii::render(&world));
    }
    Ok(())
}
