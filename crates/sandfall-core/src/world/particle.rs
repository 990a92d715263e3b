//! Particle entity

use serde::{Deserialize, Serialize};

use sandfall_simulation::{Material, ParticleFlags};

/// Identity of a particle, unique for the lifetime of a grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticleId(pub u64);

/// A single particle living in one grid cell
///
/// The position is only written by the grid, so a particle's coordinates
/// always match the cell that holds it.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    id: ParticleId,
    x: i32,
    y: i32,
    material: Material,
    /// Signed cells-per-tick speed; the fractional part carries over
    pub velocity: f32,
    pub flags: ParticleFlags,
    /// Heat absorbed so far (snow)
    pub melt_step: u32,
    /// Blocked steps spent resting on something lighter (lava)
    pub sink_counter: u32,
    /// Last tick this particle was updated in
    pub(crate) tick_stamp: u64,
}

impl Particle {
    pub(crate) fn new(id: ParticleId, x: i32, y: i32, material: Material) -> Self {
        Self {
            id,
            x,
            y,
            material,
            velocity: 0.0,
            flags: material.default_flags(),
            melt_step: 0,
            sink_counter: 0,
            tick_stamp: 0,
        }
    }

    pub fn id(&self) -> ParticleId {
        self.id
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn position(&self) -> glam::IVec2 {
        glam::IVec2::new(self.x, self.y)
    }

    pub fn material(&self) -> Material {
        self.material
    }

    pub fn is(&self, material: Material) -> bool {
        self.material == material
    }

    pub(crate) fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    /// Read-only snapshot for renderers
    pub fn view(&self) -> ParticleView {
        ParticleView {
            material: self.material,
            flags: self.flags,
            velocity: self.velocity,
        }
    }
}

/// What a renderer needs to draw a cell
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleView {
    pub material: Material,
    pub flags: ParticleFlags,
    pub velocity: f32,
}
