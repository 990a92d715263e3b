//! Falling solids: sand, powder, ash, carbon, snow, void

use glam::IVec2;

use super::{fall_step, run_steps, Step, UpdateContext};
use crate::world::{Conversion, Grid, Movement, NeighborQueries, SimRng};
use crate::SimError;
use sandfall_simulation::{Material, ParticleFlags};

pub(crate) fn update<R: SimRng>(
    grid: &mut Grid,
    pos: IVec2,
    material: Material,
    ctx: &mut UpdateContext<'_, R>,
) -> Result<(), SimError> {
    match material {
        Material::Sand => update_sand(grid, pos, ctx),
        Material::Powder => update_powder(grid, pos, ctx),
        Material::Ash | Material::Carbon | Material::Void => update_falling(grid, pos, ctx),
        Material::Snow => update_snow(grid, pos, ctx),
        other => return Err(SimError::UnsupportedMaterial(other)),
    }
    Ok(())
}

/// Plain fall with no conversions (ash, carbon, void)
fn update_falling<R: SimRng>(grid: &mut Grid, pos: IVec2, ctx: &mut UpdateContext<'_, R>) {
    run_steps(grid, pos, ctx, fall_step);
}

fn update_sand<R: SimRng>(grid: &mut Grid, pos: IVec2, ctx: &mut UpdateContext<'_, R>) {
    run_steps(grid, pos, ctx, sand_step);
}

fn sand_step<R: SimRng>(grid: &mut Grid, pos: IVec2, ctx: &mut UpdateContext<'_, R>) -> Step {
    if !NeighborQueries::any_8(grid, pos, |p| p.is(Material::Water)) {
        return fall_step(grid, pos, ctx);
    }

    let carried =
        grid.at(pos).map_or(0.0, |p| p.velocity) * ctx.config.wet_sand_velocity_factor;
    if let Some(wet) = Conversion::convert(grid, pos, Material::WetSand) {
        wet.velocity = carried;
    }
    ctx.stats.record_conversion();

    // The grain still finishes this step's fall, then settles for good
    match Movement::fall(grid, pos, ctx.rng) {
        Some(next) => {
            ctx.stats.record_particle_moved();
            Step::Stopped(next)
        }
        None => Step::Stopped(pos),
    }
}

fn update_powder<R: SimRng>(grid: &mut Grid, pos: IVec2, ctx: &mut UpdateContext<'_, R>) {
    run_steps(grid, pos, ctx, powder_step);
}

fn powder_step<R: SimRng>(grid: &mut Grid, pos: IVec2, ctx: &mut UpdateContext<'_, R>) -> Step {
    if let Some(hot) = NeighborQueries::find_hot(grid, pos) {
        let burning = grid
            .at(hot)
            .is_some_and(|n| n.flags.is_combustible() || n.flags.has_combusted());

        if burning {
            if let Some(smoke) = Conversion::convert(grid, pos, Material::Smoke) {
                smoke.flags |= ParticleFlags::HOT | ParticleFlags::HAS_COMBUSTED;
            }
            ctx.stats.record_conversion();
            return Step::Stopped(pos);
        }

        if let Some(powder) = grid.at_mut(pos) {
            powder.flags |= ParticleFlags::HOT | ParticleFlags::HAS_COMBUSTED;
        }
    }

    fall_step(grid, pos, ctx)
}

/// Snow falls like sand and melts after enough exposure to heat
///
/// Melting is evaluated on every integration step, after that step's fall.
/// An update that yields no whole step leaves the melt counter alone.
fn update_snow<R: SimRng>(grid: &mut Grid, pos: IVec2, ctx: &mut UpdateContext<'_, R>) {
    run_steps(grid, pos, ctx, snow_step);
}

fn snow_step<R: SimRng>(grid: &mut Grid, pos: IVec2, ctx: &mut UpdateContext<'_, R>) -> Step {
    let step = fall_step(grid, pos, ctx);
    let (Step::Moved(at) | Step::Stopped(at)) = step;

    let Some(snow) = grid.at(at) else {
        return step;
    };

    if snow.melt_step >= ctx.config.melt_threshold {
        if ctx.rng.coin() {
            Conversion::convert(grid, at, Material::Water);
            ctx.stats.record_conversion();
            return Step::Stopped(at);
        }
        return step;
    }

    if NeighborQueries::find_hot(grid, at).is_some() {
        if let Some(snow) = grid.at_mut(at) {
            snow.melt_step = snow.melt_step.saturating_add(ctx.config.melt_heat_per_update);
        }
    }
    step
}
