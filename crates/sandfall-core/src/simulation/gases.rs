//! Gases: smoke, vapor

use glam::IVec2;

use super::{run_steps, Step, UpdateContext};
use crate::world::{Conversion, Grid, Movement, SimRng, UP};
use crate::SimError;
use sandfall_simulation::Material;

pub(crate) fn update<R: SimRng>(
    grid: &mut Grid,
    pos: IVec2,
    material: Material,
    ctx: &mut UpdateContext<'_, R>,
) -> Result<(), SimError> {
    match material {
        Material::Smoke => update_smoke(grid, pos, ctx),
        Material::Vapor => update_vapor(grid, pos, ctx),
        other => return Err(SimError::UnsupportedMaterial(other)),
    }
    Ok(())
}

fn update_smoke<R: SimRng>(grid: &mut Grid, pos: IVec2, ctx: &mut UpdateContext<'_, R>) {
    run_steps(grid, pos, ctx, smoke_step);
}

fn smoke_step<R: SimRng>(grid: &mut Grid, pos: IVec2, ctx: &mut UpdateContext<'_, R>) -> Step {
    let above = pos + UP;
    let bubbles_through = grid
        .material_at(above)
        .is_some_and(|m| m != Material::Stone && m != Material::Smoke);
    if bubbles_through && Movement::swap_with(grid, pos, above) {
        return Step::Moved(above);
    }

    rise_or_drift(grid, pos, ctx)
}

fn update_vapor<R: SimRng>(grid: &mut Grid, pos: IVec2, ctx: &mut UpdateContext<'_, R>) {
    run_steps(grid, pos, ctx, vapor_step);
}

fn vapor_step<R: SimRng>(grid: &mut Grid, pos: IVec2, ctx: &mut UpdateContext<'_, R>) -> Step {
    if pos.y >= ctx.config.condensation_row(grid.height()) {
        let fair = ctx.rng.coin();
        let rare = ctx.rng.one_in(ctx.config.condensation_odds);
        if fair && rare {
            Conversion::convert(grid, pos, Material::Water);
            ctx.stats.record_conversion();
            return Step::Stopped(pos);
        }
    }

    // Trapped under water: trade places so the vapor escapes upwards
    let above = pos + UP;
    if grid.material_at(above) == Some(Material::Water) && Movement::swap_with(grid, pos, above) {
        return Step::Moved(above);
    }

    rise_or_drift(grid, pos, ctx)
}

/// Float up (and one more cell if still clear), else slide to an open side
fn rise_or_drift<R: SimRng>(grid: &mut Grid, pos: IVec2, ctx: &mut UpdateContext<'_, R>) -> Step {
    if let Some(next) = Movement::step(grid, pos, UP) {
        let floated = Movement::step(grid, next, UP).unwrap_or(next);
        return Step::Moved(floated);
    }

    match Movement::drift_sideways(grid, pos, ctx.rng) {
        Some(next) => Step::Moved(next),
        None => Step::Stopped(pos),
    }
}
