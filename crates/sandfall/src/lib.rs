//! # Sandfall runner
//!
//! Headless driver for the sandfall automaton: loads a layered
//! configuration, populates a scenario preset and ticks the world.

pub mod ascii;
pub mod config;
pub mod scenario;

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use sandfall_core::{Material, TickReport, World};

pub use config::{RunConfig, RunnerConfig};
pub use scenario::Scenario;

/// Build the configured world and run it to completion
///
/// Returns the final world and the counts summed over every tick.
pub fn run(config: &RunnerConfig) -> Result<(World, TickReport)> {
    let run = &config.run;
    let mut world = World::with_config(run.width, run.height, config.sim.clone())
        .context("Invalid simulation settings")?;
    run.scenario
        .populate(&mut world)
        .with_context(|| format!("Failed to populate scenario '{}'", run.scenario))?;

    log::info!(
        "Running '{}' on a {}x{} grid for {} ticks (seed {})",
        run.scenario,
        run.width,
        run.height,
        run.ticks,
        run.seed
    );

    let mut rng = Xoshiro256StarStar::seed_from_u64(run.seed);
    let mut total = TickReport::default();
    for _ in 0..run.ticks {
        let report = world.tick(run.gravity, &mut rng)?;
        total.accumulate(&report);

        if run.report_every > 0 && world.tick_count() % run.report_every == 0 {
            log::info!(
                "Tick {}: {} moves, {} conversions",
                world.tick_count(),
                report.moves,
                report.conversions
            );
        }
    }

    for material in Material::ALL {
        let count = world.count(material);
        if count > 0 {
            log::info!("{:>10}: {}", material, count);
        }
    }
    Ok((world, total))
}
