//! Sub-cell velocity integrator

use crate::world::Particle;

/// Turns continuous gravity into whole single-cell steps
pub struct Integrator;

impl Integrator {
    /// Accumulate gravity, clamp to the material's speed limit and charge the
    /// whole steps against the velocity
    ///
    /// Returns the number of single-cell steps to attempt this update. The
    /// fractional remainder stays on the particle for the next update; rules
    /// that damp or zero velocity act on that remainder.
    pub fn integrate(particle: &mut Particle, gravity: f32) -> u32 {
        let props = particle.material().props();
        let gravity = if gravity.is_finite() { gravity } else { 0.0 };

        let max = props.max_velocity;
        let velocity = (particle.velocity + gravity * props.gravity_scale).clamp(-max, max);
        let steps = velocity.abs().floor();

        // Charge toward zero so the sign of the remainder never flips
        particle.velocity = velocity - steps.copysign(velocity);
        steps as u32
    }
}
