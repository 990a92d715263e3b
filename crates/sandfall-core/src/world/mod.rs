//! World management - grid storage, movement, queries and the tick loop

mod conversion;
mod grid;
mod movement;
mod neighbor_queries;
mod particle;
pub mod rng_trait;
pub mod stats;
#[allow(clippy::module_inception)]
mod world;

pub use conversion::Conversion;
pub use grid::Grid;
pub use movement::{Movement, DOWN, DOWN_LEFT, DOWN_RIGHT, LEFT, RIGHT, UP};
pub use neighbor_queries::{NeighborQueries, NEIGHBORS_8};
pub use particle::{Particle, ParticleId, ParticleView};
pub use rng_trait::{ScriptedRng, SimRng};
pub use stats::{NoopStats, SimStats, TickReport};
pub use world::World;
