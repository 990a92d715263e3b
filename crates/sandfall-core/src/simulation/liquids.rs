//! Liquids: lava, oil, water

use glam::IVec2;

use super::{run_steps, Step, UpdateContext};
use crate::world::{Conversion, Grid, Movement, NeighborQueries, SimRng, DOWN, LEFT, RIGHT};
use crate::SimError;
use sandfall_simulation::{Material, ParticleFlags};

pub(crate) fn update<R: SimRng>(
    grid: &mut Grid,
    pos: IVec2,
    material: Material,
    ctx: &mut UpdateContext<'_, R>,
) -> Result<(), SimError> {
    match material {
        Material::Lava => update_lava(grid, pos, ctx),
        Material::Oil => update_oil(grid, pos, ctx),
        Material::Water => update_water(grid, pos, ctx),
        other => return Err(SimError::UnsupportedMaterial(other)),
    }
    Ok(())
}

fn update_lava<R: SimRng>(grid: &mut Grid, pos: IVec2, ctx: &mut UpdateContext<'_, R>) {
    run_steps(grid, pos, ctx, lava_step);
}

/// Falls like a solid; after resting on water or ash for
/// `lava_sink_delay` blocked steps it swaps below, as long as it still
/// carries `WILL_SINK`
fn lava_step<R: SimRng>(grid: &mut Grid, pos: IVec2, ctx: &mut UpdateContext<'_, R>) -> Step {
    if let Some(next) = Movement::fall(grid, pos, ctx.rng) {
        if let Some(lava) = grid.at_mut(next) {
            lava.sink_counter = 0;
        }
        return Step::Moved(next);
    }

    let Some(lava) = grid.at_mut(pos) else {
        return Step::Stopped(pos);
    };
    if !lava.flags.will_sink() {
        return Step::Stopped(pos);
    }
    lava.sink_counter = lava.sink_counter.saturating_add(1);
    if lava.sink_counter < ctx.config.lava_sink_delay {
        return Step::Stopped(pos);
    }

    let below = pos + DOWN;
    let sinkable = matches!(
        grid.material_at(below),
        Some(Material::Water | Material::Ash)
    );
    if sinkable && Movement::swap_with(grid, pos, below) {
        if let Some(lava) = grid.at_mut(below) {
            lava.sink_counter = 0;
        }
        return Step::Moved(below);
    }

    Step::Stopped(pos)
}

fn update_oil<R: SimRng>(grid: &mut Grid, pos: IVec2, ctx: &mut UpdateContext<'_, R>) {
    run_steps(grid, pos, ctx, oil_step);
}

fn oil_step<R: SimRng>(grid: &mut Grid, pos: IVec2, ctx: &mut UpdateContext<'_, R>) -> Step {
    ignite_neighbor(grid, pos, ctx);

    if let Some(next) = Movement::fall(grid, pos, ctx.rng) {
        return Step::Moved(next);
    }

    let side = match (
        Movement::can_move_left(grid, pos),
        Movement::can_move_right(grid, pos),
    ) {
        (true, true) => {
            let dir = if ctx.rng.coin() { LEFT } else { RIGHT };
            return Step::Moved(spread(grid, pos, dir, ctx));
        }
        (true, false) => LEFT,
        (false, true) => RIGHT,
        (false, false) => return Step::Stopped(pos),
    };

    match Movement::step(grid, pos, side) {
        Some(next) => Step::Moved(next),
        None => Step::Stopped(pos),
    }
}

/// Heat from a neighbour sets it alight (never the oil itself)
///
/// Static cells and existing smoke are not fuel.
fn ignite_neighbor<R: SimRng>(grid: &mut Grid, pos: IVec2, ctx: &mut UpdateContext<'_, R>) {
    let Some(target) = NeighborQueries::find_8(grid, pos, |p| {
        p.flags.is_hot() && !p.flags.is_static() && !p.is(Material::Smoke)
    }) else {
        return;
    };

    // Both coins are always flipped
    let first = ctx.rng.coin();
    let second = ctx.rng.coin();
    if !(first && second) {
        return;
    }

    if let Some(smoke) = Conversion::convert(grid, target, Material::Smoke) {
        smoke.flags |= ParticleFlags::HOT;
    }
    ctx.stats.record_conversion();

    if let Some(oil) = grid.at_mut(pos) {
        oil.flags |= ParticleFlags::HOT;
    }
}

/// Flatten sideways: the first cell always, up to `oil_spread_distance`
/// cells while the keep-spreading roll holds, then keep drifting the same
/// way until blocked or the stop roll hits
fn spread<R: SimRng>(
    grid: &mut Grid,
    pos: IVec2,
    dir: IVec2,
    ctx: &mut UpdateContext<'_, R>,
) -> IVec2 {
    let mut current = pos;

    for cell in 0..ctx.config.oil_spread_distance {
        if cell > 0 && !ctx.rng.check_probability(ctx.config.oil_keep_spreading_chance) {
            break;
        }
        match Movement::step(grid, current, dir) {
            Some(next) => current = next,
            None => return current,
        }
    }

    for _ in 0..grid.width() {
        if ctx.rng.check_probability(ctx.config.oil_stop_chance) {
            break;
        }
        match Movement::step(grid, current, dir) {
            Some(next) => current = next,
            None => break,
        }
    }

    current
}

fn update_water<R: SimRng>(grid: &mut Grid, pos: IVec2, ctx: &mut UpdateContext<'_, R>) {
    run_steps(grid, pos, ctx, water_step);
}

const SLIDE_OFFSETS: [i32; 4] = [1, 2, -1, -2];

fn water_step<R: SimRng>(grid: &mut Grid, pos: IVec2, ctx: &mut UpdateContext<'_, R>) -> Step {
    let below = pos + DOWN;
    if grid.material_at(below) == Some(Material::Vapor) && Movement::swap_with(grid, pos, below) {
        return Step::Moved(below);
    }

    if let Some(next) = Movement::fall(grid, pos, ctx.rng) {
        return Step::Moved(next);
    }

    let mut offsets = SLIDE_OFFSETS;
    ctx.rng.shuffle(&mut offsets);
    for dx in offsets {
        // Teleports: the cells in between may be occupied
        if let Some(next) = Movement::step(grid, pos, IVec2::new(dx, 0)) {
            return Step::Moved(next);
        }
    }

    // Pinned until a neighbour changes
    if let Some(water) = grid.at_mut(pos) {
        water.velocity = 0.0;
    }
    Step::Stopped(pos)
}
