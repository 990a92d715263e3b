//! Falling-sand automaton core
//!
//! A fixed grid of particles advanced one tick at a time: gravity is
//! integrated into whole single-cell steps and each material applies its
//! own movement and conversion rules.

pub mod config;
pub mod error;
pub mod simulation;
pub mod world;

pub use config::SimConfig;
pub use error::SimError;
pub use world::{Grid, Particle, ParticleId, ParticleView, TickReport, World};

// Re-export material data so callers only need one dependency
pub use sandfall_simulation::{Material, MaterialClass, MaterialProps, ParticleFlags};
