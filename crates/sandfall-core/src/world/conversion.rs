//! Conversion engine - in-place material replacement
//!
//! Handles every material change the rules produce:
//! - Melting (snow → water)
//! - Ignition (oil neighbour / powder → smoke)
//! - Condensing (vapor → water)
//! - Wetting (sand → wet sand)

use glam::IVec2;

use super::{Grid, Particle};
use sandfall_simulation::Material;

/// System for replacing a particle with a new one of another material
pub struct Conversion;

impl Conversion {
    /// Replace the particle at `pos` with a fresh `material` particle
    ///
    /// The new particle gets a new id and the material's default flags, so
    /// callers re-apply anything they want to keep (e.g. heat) on the returned
    /// particle. Empty or out-of-range cells are left alone and give None.
    pub fn convert(grid: &mut Grid, pos: IVec2, material: Material) -> Option<&mut Particle> {
        // Already counted as updated this tick
        let tick_stamp = grid.at(pos)?.tick_stamp;

        let id = grid.allocate_id();
        let mut particle = Particle::new(id, pos.x, pos.y, material);
        particle.tick_stamp = tick_stamp;

        grid.set(pos.x, pos.y, Some(particle));
        grid.at_mut(pos)
    }
}
