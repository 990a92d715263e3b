//! Simulation errors

use sandfall_simulation::Material;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    /// The material exists but has no movement or conversion rules yet
    #[error("material '{0}' has no simulation behavior")]
    UnsupportedMaterial(Material),

    #[error("invalid simulation config: {0}")]
    InvalidConfig(String),

    #[error("failed to parse simulation config: {0}")]
    ConfigParse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SimError::OutOfBounds {
            x: 12,
            y: -1,
            width: 10,
            height: 10,
        };
        assert_eq!(err.to_string(), "cell (12, -1) is outside the 10x10 grid");

        let err = SimError::UnsupportedMaterial(Material::WetSand);
        assert_eq!(
            err.to_string(),
            "material 'wet_sand' has no simulation behavior"
        );
    }
}
