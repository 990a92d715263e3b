//! Movement resolver - single-step occupancy checks and relocations

use glam::IVec2;

use super::{Grid, SimRng};

pub const DOWN: IVec2 = IVec2::new(0, -1);
pub const UP: IVec2 = IVec2::new(0, 1);
pub const LEFT: IVec2 = IVec2::new(-1, 0);
pub const RIGHT: IVec2 = IVec2::new(1, 0);
pub const DOWN_LEFT: IVec2 = IVec2::new(-1, -1);
pub const DOWN_RIGHT: IVec2 = IVec2::new(1, -1);

/// Movement utilities - stateless methods for testing and performing moves
///
/// A move is legal when the target is inside the grid and empty. Every
/// relocation moves a particle by one hop; faster particles call these once
/// per integration step.
pub struct Movement;

impl Movement {
    /// True when `pos + offset` is inside the grid and empty
    pub fn can_move(grid: &Grid, pos: IVec2, offset: IVec2) -> bool {
        let target = pos + offset;
        grid.is_vacant(target.x, target.y)
    }

    pub fn can_move_down(grid: &Grid, pos: IVec2) -> bool {
        Self::can_move(grid, pos, DOWN)
    }

    pub fn can_move_up(grid: &Grid, pos: IVec2) -> bool {
        Self::can_move(grid, pos, UP)
    }

    pub fn can_move_left(grid: &Grid, pos: IVec2) -> bool {
        Self::can_move(grid, pos, LEFT)
    }

    pub fn can_move_right(grid: &Grid, pos: IVec2) -> bool {
        Self::can_move(grid, pos, RIGHT)
    }

    pub fn can_move_down_left(grid: &Grid, pos: IVec2) -> bool {
        Self::can_move(grid, pos, DOWN_LEFT)
    }

    pub fn can_move_down_right(grid: &Grid, pos: IVec2) -> bool {
        Self::can_move(grid, pos, DOWN_RIGHT)
    }

    /// Vacuum move into an empty target cell
    /// Returns true if the move succeeded
    pub fn move_to(grid: &mut Grid, from: IVec2, to: IVec2) -> bool {
        grid.move_particle(from, to)
    }

    /// Exchange occupants (a denser particle sinking through a lighter one)
    /// Returns true if the swap happened
    pub fn swap_with(grid: &mut Grid, from: IVec2, to: IVec2) -> bool {
        if grid.at(from).is_none() {
            return false;
        }
        grid.swap(from, to)
    }

    /// Try to move by `offset`, returning the new position on success
    pub fn step(grid: &mut Grid, pos: IVec2, offset: IVec2) -> Option<IVec2> {
        let target = pos + offset;
        Self::move_to(grid, pos, target).then_some(target)
    }

    /// Standard fall: straight down, else a diagonal (random when both are open)
    pub fn fall<R: SimRng>(grid: &mut Grid, pos: IVec2, rng: &mut R) -> Option<IVec2> {
        if let Some(next) = Self::step(grid, pos, DOWN) {
            return Some(next);
        }

        let offset = match (
            Self::can_move_down_left(grid, pos),
            Self::can_move_down_right(grid, pos),
        ) {
            (true, true) => {
                if rng.coin() {
                    DOWN_LEFT
                } else {
                    DOWN_RIGHT
                }
            }
            (true, false) => DOWN_LEFT,
            (false, true) => DOWN_RIGHT,
            (false, false) => return None,
        };

        Self::step(grid, pos, offset)
    }

    /// Pick an open side (random when both are open), without moving
    pub fn open_side<R: SimRng>(grid: &Grid, pos: IVec2, rng: &mut R) -> Option<IVec2> {
        match (Self::can_move_left(grid, pos), Self::can_move_right(grid, pos)) {
            (true, true) => Some(if rng.coin() { LEFT } else { RIGHT }),
            (true, false) => Some(LEFT),
            (false, true) => Some(RIGHT),
            (false, false) => None,
        }
    }

    /// Move one cell to an open side
    pub fn drift_sideways<R: SimRng>(grid: &mut Grid, pos: IVec2, rng: &mut R) -> Option<IVec2> {
        let side = Self::open_side(grid, pos, rng)?;
        Self::step(grid, pos, side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::ScriptedRng;
    use sandfall_simulation::Material;

    fn grid_with(cells: &[(i32, i32, Material)]) -> Grid {
        let mut grid = Grid::new(8, 8);
        for &(x, y, material) in cells {
            grid.spawn(x, y, material);
        }
        grid
    }

    #[test]
    fn test_predicates_respect_occupancy() {
        let grid = grid_with(&[(3, 3, Material::Sand), (3, 2, Material::Stone)]);
        let pos = IVec2::new(3, 3);

        assert!(!Movement::can_move_down(&grid, pos));
        assert!(Movement::can_move_up(&grid, pos));
        assert!(Movement::can_move_left(&grid, pos));
        assert!(Movement::can_move_right(&grid, pos));
        assert!(Movement::can_move_down_left(&grid, pos));
        assert!(Movement::can_move_down_right(&grid, pos));
    }

    #[test]
    fn test_predicates_respect_bounds() {
        let grid = grid_with(&[(0, 0, Material::Sand)]);
        let pos = IVec2::new(0, 0);

        assert!(!Movement::can_move_down(&grid, pos));
        assert!(!Movement::can_move_left(&grid, pos));
        assert!(!Movement::can_move_down_left(&grid, pos));
        assert!(!Movement::can_move_down_right(&grid, pos));
        assert!(Movement::can_move_right(&grid, pos));
        assert!(Movement::can_move_up(&grid, pos));
    }

    #[test]
    fn test_move_to_keeps_identity() {
        let mut grid = grid_with(&[(2, 2, Material::Sand)]);
        let id = grid.get(2, 2).map(|p| p.id());

        assert!(Movement::move_to(&mut grid, IVec2::new(2, 2), IVec2::new(2, 1)));
        assert_eq!(grid.get(2, 1).map(|p| p.id()), id);
        assert_eq!(grid.occupied_count(), 1);
    }

    #[test]
    fn test_move_to_refuses_occupied_target() {
        let mut grid = grid_with(&[(2, 2, Material::Sand), (2, 1, Material::Water)]);
        assert!(!Movement::move_to(&mut grid, IVec2::new(2, 2), IVec2::new(2, 1)));
    }

    #[test]
    fn test_swap_with() {
        let mut grid = grid_with(&[(2, 2, Material::Lava), (2, 1, Material::Water)]);
        assert!(Movement::swap_with(&mut grid, IVec2::new(2, 2), IVec2::new(2, 1)));
        assert_eq!(grid.material_at(IVec2::new(2, 1)), Some(Material::Lava));
        assert_eq!(grid.material_at(IVec2::new(2, 2)), Some(Material::Water));
    }

    #[test]
    fn test_fall_prefers_straight_down() {
        let mut grid = grid_with(&[(4, 4, Material::Sand)]);
        let mut rng = ScriptedRng::always();
        let next = Movement::fall(&mut grid, IVec2::new(4, 4), &mut rng);
        assert_eq!(next, Some(IVec2::new(4, 3)));
    }

    #[test]
    fn test_fall_diagonal_tie_break() {
        let cells = [(4, 4, Material::Sand), (4, 3, Material::Stone)];

        let mut grid = grid_with(&cells);
        let next = Movement::fall(&mut grid, IVec2::new(4, 4), &mut ScriptedRng::always());
        assert_eq!(next, Some(IVec2::new(3, 3)));

        let mut grid = grid_with(&cells);
        let next = Movement::fall(&mut grid, IVec2::new(4, 4), &mut ScriptedRng::never());
        assert_eq!(next, Some(IVec2::new(5, 3)));
    }

    #[test]
    fn test_fall_takes_only_open_diagonal() {
        let mut grid = grid_with(&[
            (4, 4, Material::Sand),
            (4, 3, Material::Stone),
            (3, 3, Material::Stone),
        ]);
        let next = Movement::fall(&mut grid, IVec2::new(4, 4), &mut ScriptedRng::always());
        assert_eq!(next, Some(IVec2::new(5, 3)));
    }

    #[test]
    fn test_fall_blocked() {
        let mut grid = grid_with(&[
            (4, 4, Material::Sand),
            (4, 3, Material::Stone),
            (3, 3, Material::Stone),
            (5, 3, Material::Stone),
        ]);
        let next = Movement::fall(&mut grid, IVec2::new(4, 4), &mut ScriptedRng::always());
        assert_eq!(next, None);
        assert_eq!(grid.material_at(IVec2::new(4, 4)), Some(Material::Sand));
    }

    #[test]
    fn test_drift_sideways() {
        let mut grid = grid_with(&[(0, 4, Material::Smoke)]);
        let next = Movement::drift_sideways(&mut grid, IVec2::new(0, 4), &mut ScriptedRng::always());
        assert_eq!(next, Some(IVec2::new(1, 4)));
    }
}
