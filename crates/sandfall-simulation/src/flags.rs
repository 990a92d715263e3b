//! Particle behaviour flags

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Flag bits for particle state, read and written by neighbour rules
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ParticleFlags: u8 {
        /// Radiates heat (ignites oil, burns powder, melts snow)
        const HOT = 1 << 0;
        const COLD = 1 << 1;
        /// Heavy enough to sink through lighter neighbours
        const WILL_SINK = 1 << 2;
        /// Never moves
        const STATIC = 1 << 3;
        const COMBUSTIBLE = 1 << 4;
        /// Has burned or is burning
        const HAS_COMBUSTED = 1 << 5;
    }
}

impl ParticleFlags {
    pub fn is_hot(self) -> bool {
        self.contains(Self::HOT)
    }

    pub fn is_cold(self) -> bool {
        self.contains(Self::COLD)
    }

    pub fn will_sink(self) -> bool {
        self.contains(Self::WILL_SINK)
    }

    pub fn is_static(self) -> bool {
        self.contains(Self::STATIC)
    }

    pub fn is_combustible(self) -> bool {
        self.contains(Self::COMBUSTIBLE)
    }

    pub fn has_combusted(self) -> bool {
        self.contains(Self::HAS_COMBUSTED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_accessors() {
        let flags = ParticleFlags::HOT | ParticleFlags::HAS_COMBUSTED;
        assert!(flags.is_hot());
        assert!(flags.has_combusted());
        assert!(!flags.is_cold());
        assert!(!flags.is_static());
        assert!(!flags.is_combustible());
        assert!(!flags.will_sink());
    }

    #[test]
    fn test_default_is_empty() {
        assert!(ParticleFlags::default().is_empty());
    }
}
