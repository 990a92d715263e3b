//! Runner configuration
//!
//! Layered like so (later layers win):
//! 1. Compiled defaults
//! 2. `sandfall.ron` in the working directory (if it exists)
//! 3. An explicit `--config` file
//! 4. Environment variables prefixed with `SANDFALL_`
//! 5. Command line flags (applied by `main`)

use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use sandfall_core::SimConfig;
use serde::{Deserialize, Serialize};

use crate::scenario::Scenario;

/// Everything the runner needs for one headless run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub run: RunConfig,
    /// Material rule constants, passed straight to the world
    pub sim: SimConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Grid width in cells
    pub width: u32,
    /// Grid height in cells
    pub height: u32,
    /// Ticks to simulate
    pub ticks: u64,
    /// Ambient gravity passed to every tick
    pub gravity: f32,
    /// Seed for the simulation RNG
    pub seed: u64,
    /// Log a progress line every N ticks (0 = never)
    pub report_every: u64,
    /// Preset used to populate the world
    pub scenario: Scenario,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 48,
            ticks: 500,
            gravity: 1.0,
            seed: 0,
            report_every: 100,
            scenario: Scenario::Hourglass,
        }
    }
}

impl RunnerConfig {
    /// Load configuration from defaults, config files and the environment
    ///
    /// `extra` must exist when given; the default `sandfall.ron` is optional.
    pub fn load(extra: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            // Layer 1: Compiled defaults
            .set_default("run.width", 64_i64)?
            .set_default("run.height", 48_i64)?
            .set_default("run.ticks", 500_i64)?
            .set_default("run.gravity", 1.0)?
            .set_default("run.seed", 0_i64)?
            .set_default("run.report_every", 100_i64)?
            .set_default("run.scenario", "hourglass")?
            // Layer 2: Config file (optional, won't error if missing)
            .add_source(
                File::with_name("sandfall")
                    .format(config::FileFormat::Ron)
                    .required(false),
            );

        // Layer 3: Explicit config file
        if let Some(path) = extra {
            builder = builder.add_source(File::from(path).format(config::FileFormat::Ron));
        }

        // Layer 4: Environment variables (SANDFALL_RUN__TICKS, SANDFALL_SIM__LAVA_SINK_DELAY, ...)
        let builder = builder.add_source(
            Environment::with_prefix("SANDFALL")
                .prefix_separator("_")
                .separator("__"),
        );

        let config = builder.build().context("Failed to build configuration")?;

        let loaded: Self = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;
        loaded
            .sim
            .validate()
            .context("Invalid simulation settings")?;
        Ok(loaded)
    }
}
