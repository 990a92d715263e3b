//! Scenario presets - hand-built starting layouts

use std::fmt;
use std::ops::Range;

use anyhow::{bail, Result};
use clap::ValueEnum;
use sandfall_core::{Material, SimError, World};
use serde::{Deserialize, Serialize};

/// Smallest grid every preset fits into
pub const MIN_SIZE: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// Sand pouring through a stone funnel
    Hourglass,
    /// Water and sand dropped into a walled basin
    Basin,
    /// An oil pool lit by lava at one end
    OilFire,
    /// A snow bank resting on a lava bed
    Snowmelt,
    /// Vapor trapped under a layer of water
    Steam,
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scenario::Hourglass => "hourglass",
            Scenario::Basin => "basin",
            Scenario::OilFire => "oil-fire",
            Scenario::Snowmelt => "snowmelt",
            Scenario::Steam => "steam",
        };
        f.write_str(name)
    }
}

impl Scenario {
    /// Seed the preset's particles into an empty world
    pub fn populate(self, world: &mut World) -> Result<()> {
        let (w, h) = (world.width(), world.height());
        if w < MIN_SIZE as i32 || h < MIN_SIZE as i32 {
            bail!("scenario '{self}' needs at least a {MIN_SIZE}x{MIN_SIZE} grid, got {w}x{h}");
        }

        fill(world, 0..w, 0..1, Material::Stone)?;
        match self {
            Scenario::Hourglass => hourglass(world, w, h)?,
            Scenario::Basin => {
                let (left, right) = (w / 4, w - w / 4);
                fill(world, left..left + 1, 1..h / 2, Material::Stone)?;
                fill(world, right - 1..right, 1..h / 2, Material::Stone)?;
                fill(world, left + 1..right - 1, h - 6..h - 2, Material::Water)?;
                fill(world, w / 2 - 2..w / 2 + 2, h - 10..h - 7, Material::Sand)?;
            }
            Scenario::OilFire => {
                let (left, right) = (w / 6, w - w / 6);
                fill(world, left..left + 1, 1..4, Material::Stone)?;
                fill(world, right - 1..right, 1..4, Material::Stone)?;
                fill(world, left + 1..right - 1, 1..3, Material::Oil)?;
                fill(world, left + 1..left + 3, 3..5, Material::Lava)?;
            }
            Scenario::Snowmelt => {
                fill(world, 0..w, 1..2, Material::Lava)?;
                fill(world, w / 4..w - w / 4, 2..h / 3, Material::Snow)?;
            }
            Scenario::Steam => {
                fill(world, 0..w, 1..4, Material::Vapor)?;
                fill(world, 0..w, 4..7, Material::Water)?;
            }
        }

        log::debug!(
            "Populated '{}' with {} particles",
            self,
            world.grid().occupied_count()
        );
        Ok(())
    }
}

/// Two stone walls narrowing to a one-cell neck, with sand above it
fn hourglass(world: &mut World, w: i32, h: i32) -> Result<(), SimError> {
    let neck = h / 3;
    let center = w / 2;

    for i in 0..(h - neck - 1).min(center - 1) {
        world.seed(center - 1 - i, neck + i, Material::Stone)?;
        world.seed(center + 1 + i, neck + i, Material::Stone)?;
    }

    // Sand sits inside the funnel, clear of the walls
    for y in neck + 2..h - 1 {
        let half = (y - neck).min(center - 1) - 1;
        fill(world, center - half..center + half + 1, y..y + 1, Material::Sand)?;
    }
    Ok(())
}

/// Seed every cell of a rectangle
fn fill(world: &mut World, xs: Range<i32>, ys: Range<i32>, material: Material) -> Result<(), SimError> {
    for y in ys {
        for x in xs.clone() {
            world.seed(x, y, material)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Scenario; 5] = [
        Scenario::Hourglass,
        Scenario::Basin,
        Scenario::OilFire,
        Scenario::Snowmelt,
        Scenario::Steam,
    ];

    #[test]
    fn test_every_preset_fits_the_minimum_grid() {
        for scenario in ALL {
            let mut world = World::new(MIN_SIZE, MIN_SIZE);
            scenario.populate(&mut world).expect("fits");
            assert!(world.count(Material::Stone) >= MIN_SIZE as usize);
        }
    }

    #[test]
    fn test_too_small_grid_is_rejected() {
        let mut world = World::new(8, 8);
        assert!(Scenario::Basin.populate(&mut world).is_err());
    }

    #[test]
    fn test_hourglass_keeps_the_neck_open() {
        let mut world = World::new(32, 30);
        Scenario::Hourglass.populate(&mut world).expect("fits");

        let neck = 30 / 3;
        assert!(world.read(16, neck).is_none());
        assert_eq!(world.read(15, neck).map(|v| v.material), Some(Material::Stone));
        assert_eq!(world.read(17, neck).map(|v| v.material), Some(Material::Stone));
        assert!(world.count(Material::Sand) > 0);
    }

    #[test]
    fn test_oil_fire_has_fuel_and_heat() {
        let mut world = World::new(24, 16);
        Scenario::OilFire.populate(&mut world).expect("fits");
        assert!(world.count(Material::Oil) > 0);
        assert!(world.count(Material::Lava) > 0);
    }

    #[test]
    fn test_display_matches_cli_name() {
        for scenario in ALL {
            let parsed = Scenario::from_str(&scenario.to_string(), false).expect("valid name");
            assert_eq!(parsed, scenario);
        }
    }
}
