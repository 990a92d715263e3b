//! World - owns the grid and drives the tick loop

use glam::IVec2;

use crate::simulation::{MaterialBehavior, UpdateContext};
use crate::{SimConfig, SimError};
use sandfall_simulation::Material;

use super::{Grid, Particle, ParticleId, ParticleView, SimRng, SimStats, TickReport};

/// A grid plus the settings and counters needed to advance it
pub struct World {
    grid: Grid,
    config: SimConfig,
    tick_count: u64,
}

impl World {
    /// Create an empty world with the default settings
    pub fn new(width: u32, height: u32) -> Self {
        log::debug!("Creating {}x{} world", width, height);
        Self {
            grid: Grid::new(width, height),
            config: SimConfig::default(),
            tick_count: 0,
        }
    }

    /// Create an empty world with custom settings
    pub fn with_config(width: u32, height: u32, config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let mut world = Self::new(width, height);
        world.config = config;
        Ok(world)
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    /// Place a fresh particle, replacing whatever occupied the cell
    pub fn seed(&mut self, x: i32, y: i32, material: Material) -> Result<ParticleId, SimError> {
        self.grid.spawn(x, y, material).ok_or(SimError::OutOfBounds {
            x,
            y,
            width: self.grid.width(),
            height: self.grid.height(),
        })
    }

    /// Snapshot of the particle at a cell, None when empty or out of range
    pub fn read(&self, x: i32, y: i32) -> Option<ParticleView> {
        self.grid.get(x, y).map(Particle::view)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access for adjusting velocity, flags or counters
    pub fn particle_mut(&mut self, x: i32, y: i32) -> Option<&mut Particle> {
        self.grid.get_mut(x, y)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Remove every particle; the tick counter keeps running
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Number of particles of one material
    pub fn count(&self, material: Material) -> usize {
        self.grid.particles().filter(|p| p.is(material)).count()
    }

    /// Advance the simulation by one tick
    ///
    /// Rows are visited from the floor up, alternating direction each row.
    /// Every particle is updated at most once even if it moves into a cell
    /// that has not been visited yet. A material without rules is counted in
    /// the report and skipped; with `strict_materials` the first such error is
    /// returned once the tick has finished.
    pub fn tick<R: SimRng>(&mut self, gravity: f32, rng: &mut R) -> Result<TickReport, SimError> {
        self.tick_count += 1;
        let stamp = self.tick_count;
        let mut report = TickReport::default();
        let mut first_error = None;

        let width = self.grid.width();
        for y in 0..self.grid.height() {
            // Alternate direction each row for symmetry
            let x_iter: Box<dyn Iterator<Item = i32>> = if y % 2 == 0 {
                Box::new(0..width)
            } else {
                Box::new((0..width).rev())
            };

            for x in x_iter {
                let Some(particle) = self.grid.get_mut(x, y) else {
                    continue;
                };
                if particle.tick_stamp == stamp {
                    continue;
                }
                particle.tick_stamp = stamp;
                report.particles_updated += 1;

                let mut ctx = UpdateContext {
                    gravity,
                    config: &self.config,
                    stats: &mut report,
                    rng: &mut *rng,
                };
                let result = MaterialBehavior::update(&mut self.grid, IVec2::new(x, y), &mut ctx);
                if let Err(err) = result {
                    report.record_unsupported();
                    first_error.get_or_insert(err);
                }
            }
        }

        if report.unsupported > 0 {
            if cfg!(debug_assertions) {
                log::warn!(
                    "Tick {}: {} particle(s) have no simulation behavior",
                    stamp,
                    report.unsupported
                );
            } else {
                log::debug!(
                    "Tick {}: {} particle(s) have no simulation behavior",
                    stamp,
                    report.unsupported
                );
            }

            if self.config.strict_materials {
                if let Some(err) = first_error {
                    return Err(err);
                }
            }
        }

        log::trace!("Tick {}: {:?}", stamp, report);
        Ok(report)
    }
}
