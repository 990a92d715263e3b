//! Simulation statistics collection trait

/// Trait for collecting simulation statistics
///
/// Behaviours report through this seam so callers can count work without the
/// grid knowing who is listening.
pub trait SimStats {
    /// Record that a particle changed cells
    fn record_particle_moved(&mut self);

    /// Record that a particle was replaced by another material
    fn record_conversion(&mut self);

    /// Record that a particle's material has no behaviour
    fn record_unsupported(&mut self);
}

/// A no-op implementation for when stats collection is not needed
#[derive(Default)]
pub struct NoopStats;

impl SimStats for NoopStats {
    fn record_particle_moved(&mut self) {}
    fn record_conversion(&mut self) {}
    fn record_unsupported(&mut self) {}
}

/// Counts gathered during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Particles whose behaviour ran this tick
    pub particles_updated: u32,
    pub moves: u32,
    pub conversions: u32,
    pub unsupported: u32,
}

impl SimStats for TickReport {
    fn record_particle_moved(&mut self) {
        self.moves += 1;
    }

    fn record_conversion(&mut self) {
        self.conversions += 1;
    }

    fn record_unsupported(&mut self) {
        self.unsupported += 1;
    }
}

impl TickReport {
    /// Fold another tick's counts into this one
    pub fn accumulate(&mut self, other: &TickReport) {
        self.particles_updated += other.particles_updated;
        self.moves += other.moves;
        self.conversions += other.conversions;
        self.unsupported += other.unsupported;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_stats_all_methods() {
        let mut stats = NoopStats;

        for _ in 0..100 {
            stats.record_particle_moved();
            stats.record_conversion();
            stats.record_unsupported();
        }
        // No-op implementation should not track any state, just pass through
    }

    #[test]
    fn test_tick_report_counts() {
        let mut report = TickReport::default();

        report.record_particle_moved();
        report.record_particle_moved();
        report.record_conversion();
        report.record_unsupported();
        report.record_unsupported();
        report.record_unsupported();

        assert_eq!(report.moves, 2);
        assert_eq!(report.conversions, 1);
        assert_eq!(report.unsupported, 3);
        assert_eq!(report.particles_updated, 0);
    }

    #[test]
    fn test_accumulate() {
        let mut total = TickReport::default();
        let tick = TickReport {
            particles_updated: 4,
            moves: 3,
            conversions: 1,
            unsupported: 0,
        };

        total.accumulate(&tick);
        total.accumulate(&tick);

        assert_eq!(total.particles_updated, 8);
        assert_eq!(total.moves, 6);
        assert_eq!(total.conversions, 2);
    }
}
