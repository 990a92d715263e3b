//! Material behaviours - velocity integration and per-material step rules

mod gases;
mod integrator;
mod liquids;
mod solids;

use glam::IVec2;

use crate::world::{Grid, SimRng, SimStats};
use crate::{SimConfig, SimError};
use sandfall_simulation::MaterialClass;

pub use integrator::Integrator;

/// Everything a behaviour needs besides the grid
pub struct UpdateContext<'a, R> {
    /// Ambient gravity, scaled per material
    pub gravity: f32,
    pub config: &'a SimConfig,
    pub stats: &'a mut dyn SimStats,
    pub rng: &'a mut R,
}

/// Result of one integration step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    /// Relocated; further steps may follow
    Moved(IVec2),
    /// Blocked or converted; no further steps this update
    Stopped(IVec2),
}

/// Dispatches a particle to its material's rules
pub struct MaterialBehavior;

impl MaterialBehavior {
    /// Update the particle at `pos` once
    ///
    /// Dispatch goes by material class; static materials never update.
    /// Empty cells are ignored. Materials without rules report
    /// `SimError::UnsupportedMaterial` and are left untouched.
    pub fn update<R: SimRng>(
        grid: &mut Grid,
        pos: IVec2,
        ctx: &mut UpdateContext<'_, R>,
    ) -> Result<(), SimError> {
        let Some(material) = grid.material_at(pos) else {
            return Ok(());
        };

        match material.class() {
            MaterialClass::Static => Ok(()),
            MaterialClass::Powder => solids::update(grid, pos, material, ctx),
            MaterialClass::Liquid => liquids::update(grid, pos, material, ctx),
            MaterialClass::Gas => gases::update(grid, pos, material, ctx),
        }
    }
}

/// Integrate the particle at `pos` and run `step` once per whole cell of
/// velocity, stopping early when a step reports `Stopped`
///
/// Returns the particle's final position.
pub(crate) fn run_steps<'a, R, F>(
    grid: &mut Grid,
    pos: IVec2,
    ctx: &mut UpdateContext<'a, R>,
    mut step: F,
) -> IVec2
where
    R: SimRng,
    F: FnMut(&mut Grid, IVec2, &mut UpdateContext<'a, R>) -> Step,
{
    let steps = match grid.at_mut(pos) {
        Some(particle) => Integrator::integrate(particle, ctx.gravity),
        None => return pos,
    };

    let mut current = pos;
    for _ in 0..steps {
        match step(grid, current, ctx) {
            Step::Moved(next) => {
                if next != current {
                    ctx.stats.record_particle_moved();
                }
                current = next;
            }
            Step::Stopped(at) => {
                current = at;
                break;
            }
        }
    }
    current
}

/// Shared solid fall as a step
pub(crate) fn fall_step<R: SimRng>(
    grid: &mut Grid,
    pos: IVec2,
    ctx: &mut UpdateContext<'_, R>,
) -> Step {
    match crate::world::Movement::fall(grid, pos, ctx.rng) {
        Some(next) => Step::Moved(next),
        None => Step::Stopped(pos),
    }
}
