//! Tunable constants of the material rules
//!
//! Every field has a compiled default, so a config file only needs to list
//! what it overrides:
//!
//! ```ron
//! (
//!     condensation_altitude: Some(600),
//!     lava_sink_delay: 5,
//! )
//! ```

use serde::{Deserialize, Serialize};

use crate::SimError;

/// Simulation settings shared by every material behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Row at or above which vapor may condense (None = top row of the grid)
    pub condensation_altitude: Option<i32>,
    /// Vapor condenses on a fair coin AND a 1-in-N roll
    pub condensation_odds: u32,
    /// Accumulated melt needed before snow may turn to water
    pub melt_threshold: u32,
    /// Melt added per update while snow touches something hot
    pub melt_heat_per_update: u32,
    /// Blocked steps lava waits before sinking through water or ash
    pub lava_sink_delay: u32,
    /// Share of leftover velocity kept when sand gets wet
    pub wet_sand_velocity_factor: f32,
    /// Cells oil flattens sideways in one step
    pub oil_spread_distance: u32,
    /// Chance oil keeps spreading for each extra cell
    pub oil_keep_spreading_chance: f32,
    /// Chance oil stops per cell while it keeps moving sideways
    pub oil_stop_chance: f32,
    /// Return an error from `tick` when a material has no behaviour
    ///
    /// On by default in debug builds, off in release builds.
    pub strict_materials: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            condensation_altitude: None,
            condensation_odds: 20,
            melt_threshold: 1000,
            melt_heat_per_update: 250,
            lava_sink_delay: 3,
            wet_sand_velocity_factor: 0.25,
            oil_spread_distance: 3,
            oil_keep_spreading_chance: 0.7,
            oil_stop_chance: 0.7,
            strict_materials: cfg!(debug_assertions),
        }
    }
}

impl SimConfig {
    /// Parse a RON document; missing fields keep their defaults
    pub fn from_ron_str(text: &str) -> Result<Self, SimError> {
        let config: Self = ron::from_str(text).map_err(|e| SimError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.condensation_odds == 0 {
            return Err(SimError::InvalidConfig(
                "condensation_odds must be at least 1".to_string(),
            ));
        }
        if self.melt_threshold == 0 {
            return Err(SimError::InvalidConfig(
                "melt_threshold must be at least 1".to_string(),
            ));
        }
        if self.oil_spread_distance == 0 {
            return Err(SimError::InvalidConfig(
                "oil_spread_distance must be at least 1".to_string(),
            ));
        }

        for (name, value) in [
            ("wet_sand_velocity_factor", self.wet_sand_velocity_factor),
            ("oil_keep_spreading_chance", self.oil_keep_spreading_chance),
            ("oil_stop_chance", self.oil_stop_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SimError::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }

        Ok(())
    }

    /// Condensation row for a grid of the given height
    pub fn condensation_row(&self, grid_height: i32) -> i32 {
        self.condensation_altitude.unwrap_or(grid_height - 1)
    }
}
