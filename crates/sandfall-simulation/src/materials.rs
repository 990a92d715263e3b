//! Material definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParticleFlags;

/// Every material a particle can be made of
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Sand,
    Powder,
    Ash,
    Carbon,
    Lava,
    Oil,
    Smoke,
    Snow,
    Stone,
    Vapor,
    Water,
    WetSand,
    Void,
}

/// How a material behaves physically
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialClass {
    /// Never moves (stone)
    Static,
    /// Falls, piles up (sand, ash, snow)
    Powder,
    /// Falls and spreads sideways (water, oil, lava)
    Liquid,
    /// Rises, disperses (smoke, vapor)
    Gas,
}

/// Integration constants and defaults of a material
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialProps {
    pub class: MaterialClass,
    /// Multiplier applied to the ambient gravity (negative for gases)
    pub gravity_scale: f32,
    /// Upper bound on |velocity| in cells per tick
    pub max_velocity: f32,
    /// Flags a freshly created particle of this material starts with
    pub default_flags: ParticleFlags,
}

impl Material {
    pub const ALL: [Material; 13] = [
        Material::Sand,
        Material::Powder,
        Material::Ash,
        Material::Carbon,
        Material::Lava,
        Material::Oil,
        Material::Smoke,
        Material::Snow,
        Material::Stone,
        Material::Vapor,
        Material::Water,
        Material::WetSand,
        Material::Void,
    ];

    pub fn props(self) -> MaterialProps {
        use MaterialClass::*;

        let (class, gravity_scale, max_velocity, default_flags) = match self {
            Material::Sand => (Powder, 1.0, 1.5, ParticleFlags::WILL_SINK),
            Material::Powder => (
                Powder,
                1.0,
                1.5,
                ParticleFlags::WILL_SINK | ParticleFlags::COMBUSTIBLE,
            ),
            Material::Ash => (Powder, 1.0, 1.3, ParticleFlags::WILL_SINK),
            Material::Carbon => (
                Powder,
                1.0,
                1.5,
                ParticleFlags::WILL_SINK | ParticleFlags::COMBUSTIBLE,
            ),
            // Molten rock counts as already burning so it sets powder alight
            Material::Lava => (
                Liquid,
                1.0,
                1.5,
                ParticleFlags::WILL_SINK | ParticleFlags::HOT | ParticleFlags::HAS_COMBUSTED,
            ),
            Material::Oil => (Liquid, 1.0, 1.5, ParticleFlags::COMBUSTIBLE),
            Material::Smoke => (Gas, -1.0, 1.5, ParticleFlags::HAS_COMBUSTED),
            Material::Snow => (
                Powder,
                1.0,
                1.3,
                ParticleFlags::WILL_SINK | ParticleFlags::COLD,
            ),
            Material::Stone => (Static, 0.0, 0.0, ParticleFlags::STATIC),
            Material::Vapor => (Gas, -1.0, 1.5, ParticleFlags::empty()),
            Material::Water => (Liquid, 1.0, 1.3, ParticleFlags::empty()),
            // Keeps the speed limit of the sand it came from but never integrates
            Material::WetSand => (Powder, 0.0, 1.5, ParticleFlags::WILL_SINK),
            Material::Void => (Powder, 1.0, 1.3, ParticleFlags::empty()),
        };

        MaterialProps {
            class,
            gravity_scale,
            max_velocity,
            default_flags,
        }
    }

    pub fn class(self) -> MaterialClass {
        self.props().class
    }

    pub fn max_velocity(self) -> f32 {
        self.props().max_velocity
    }

    pub fn default_flags(self) -> ParticleFlags {
        self.props().default_flags
    }

    /// Lowercase name used in configs and on the command line
    pub fn name(self) -> &'static str {
        match self {
            Material::Sand => "sand",
            Material::Powder => "powder",
            Material::Ash => "ash",
            Material::Carbon => "carbon",
            Material::Lava => "lava",
            Material::Oil => "oil",
            Material::Smoke => "smoke",
            Material::Snow => "snow",
            Material::Stone => "stone",
            Material::Vapor => "vapor",
            Material::Water => "water",
            Material::WetSand => "wet_sand",
            Material::Void => "void",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Returned when a string names no known material
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseMaterialError(pub String);

impl fmt::Display for ParseMaterialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown material '{}'", self.0)
    }
}

impl std::error::Error for ParseMaterialError {}

impl FromStr for Material {
    type Err = ParseMaterialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Material::ALL
            .into_iter()
            .find(|m| m.name() == wanted)
            .ok_or_else(|| {
                log::debug!("Rejected material name {:?}", s);
                ParseMaterialError(s.to_string())
            })
    }
}
