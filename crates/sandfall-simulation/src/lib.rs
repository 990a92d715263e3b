//! Material data for the sandfall automaton
//!
//! This crate provides the foundational data types shared by the simulation:
//! - Material tags and their physical classes (Material, MaterialClass)
//! - Per-material integration constants (MaterialProps)
//! - Particle behaviour flags (ParticleFlags)

mod flags;
mod materials;

pub use flags::ParticleFlags;
pub use materials::{Material, MaterialClass, MaterialProps, ParseMaterialError};
