//! Grid store - fixed-size cell storage

use glam::IVec2;

use super::particle::{Particle, ParticleId};
use sandfall_simulation::Material;

/// Fixed-size 2D array of cells, each holding at most one particle
///
/// Row 0 is the floor; `y` grows upwards. Reads outside the grid report an
/// empty cell and writes outside it are ignored, so the edge of the world
/// behaves like a wall of vacuum.
#[derive(Clone, Debug)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Option<Particle>>,
    next_id: u64,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        let width = width.min(i32::MAX as u32) as i32;
        let height = height.min(i32::MAX as u32) as i32;
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
            next_id: 1,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.in_bounds(x, y) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&Particle> {
        self.index(x, y).and_then(|i| self.cells[i].as_ref())
    }

    /// Mutable access to velocity, flags and counters (never the position)
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Particle> {
        self.index(x, y).and_then(move |i| self.cells[i].as_mut())
    }

    pub fn at(&self, pos: IVec2) -> Option<&Particle> {
        self.get(pos.x, pos.y)
    }

    pub fn at_mut(&mut self, pos: IVec2) -> Option<&mut Particle> {
        self.get_mut(pos.x, pos.y)
    }

    /// Material at a position, None for empty or out-of-range cells
    pub fn material_at(&self, pos: IVec2) -> Option<Material> {
        self.at(pos).map(Particle::material)
    }

    /// True when the cell is inside the grid and unoccupied
    pub fn is_vacant(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|i| self.cells[i].is_none())
    }

    /// Overwrite a cell, returning its previous occupant
    ///
    /// The incoming particle is re-stamped with the cell's coordinates.
    /// Out-of-range writes do nothing.
    pub fn set(&mut self, x: i32, y: i32, particle: Option<Particle>) -> Option<Particle> {
        let i = self.index(x, y)?;
        let particle = particle.map(|mut p| {
            p.set_position(x, y);
            p
        });
        std::mem::replace(&mut self.cells[i], particle)
    }

    /// Create a fresh particle with a new id and place it, replacing any occupant
    pub fn spawn(&mut self, x: i32, y: i32, material: Material) -> Option<ParticleId> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let id = self.allocate_id();
        self.set(x, y, Some(Particle::new(id, x, y, material)));
        Some(id)
    }

    pub(crate) fn allocate_id(&mut self) -> ParticleId {
        let id = ParticleId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Exchange the occupants of two cells, updating both positions
    pub fn swap(&mut self, a: IVec2, b: IVec2) -> bool {
        let (Some(ia), Some(ib)) = (self.index(a.x, a.y), self.index(b.x, b.y)) else {
            return false;
        };
        if ia == ib {
            return true;
        }

        self.cells.swap(ia, ib);
        if let Some(p) = self.cells[ia].as_mut() {
            p.set_position(a.x, a.y);
        }
        if let Some(p) = self.cells[ib].as_mut() {
            p.set_position(b.x, b.y);
        }
        true
    }

    /// Move the occupant of `from` into the vacant cell `to`
    pub fn move_particle(&mut self, from: IVec2, to: IVec2) -> bool {
        if self.at(from).is_none() || !self.is_vacant(to.x, to.y) {
            return false;
        }
        self.swap(from, to)
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.cells.iter().flatten()
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}
