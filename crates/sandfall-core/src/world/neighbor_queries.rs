//! Neighbor particle lookup utilities

use glam::IVec2;

use super::{Grid, Particle};

/// Offsets of the 8 surrounding cells
///
/// Order: NW, N, NE, W, E, SW, S, SE (rows from the top, `y` grows upwards)
pub const NEIGHBORS_8: [IVec2; 8] = [
    IVec2::new(-1, 1),  // NW
    IVec2::new(0, 1),   // N
    IVec2::new(1, 1),   // NE
    IVec2::new(-1, 0),  // W
    IVec2::new(1, 0),   // E
    IVec2::new(-1, -1), // SW
    IVec2::new(0, -1),  // S
    IVec2::new(1, -1),  // SE
];

/// Neighbor lookups - stateless, always by coordinate, never cached
pub struct NeighborQueries;

impl NeighborQueries {
    /// First neighbor (in `NEIGHBORS_8` order) matching the predicate
    pub fn find_8<F>(grid: &Grid, center: IVec2, mut predicate: F) -> Option<IVec2>
    where
        F: FnMut(&Particle) -> bool,
    {
        NEIGHBORS_8
            .iter()
            .map(|&offset| center + offset)
            .find(|pos| grid.at(*pos).is_some_and(&mut predicate))
    }

    /// Whether any neighbor matches the predicate
    pub fn any_8<F>(grid: &Grid, center: IVec2, predicate: F) -> bool
    where
        F: FnMut(&Particle) -> bool,
    {
        Self::find_8(grid, center, predicate).is_some()
    }

    /// First hot neighbor
    pub fn find_hot(grid: &Grid, center: IVec2) -> Option<IVec2> {
        Self::find_8(grid, center, |p| p.flags.is_hot())
    }
}
