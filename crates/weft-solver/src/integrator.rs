//! Symplectic kick-drift-kick integrator.
//!
//! ```text
//! kick_drift:    v½ += ½ dt F(t)/m;        x += dt v½
//! (collision on x and v½)
//! kick_finalize: v½ += ½ dt F(t+dt)/m;     v = v½ + ½ dt F(t+dt)/m
//! ```
//!
//! Fixed particles are skipped in both phases.

use weft_grid::Particle;
use weft_types::Scalar;

#[derive(Debug, Clone, Copy, Default)]
pub struct Leapfrog;

impl Leapfrog {
    /// First half-kick from the current forces, then drift positions.
    pub fn kick_drift(&self, particles: &mut [Particle], dt: Scalar) {
        for p in particles.iter_mut().filter(|p| !p.is_fixed()) {
            p.half_velocity += p.acceleration() * (0.5 * dt);
            p.position += p.half_velocity * dt;
        }
    }

    /// Second half-kick from recomputed forces and publish the visible velocity.
    pub fn kick_finalize(&self, particles: &mut [Particle], dt: Scalar) {
        for p in particles.iter_mut().filter(|p| !p.is_fixed()) {
            let kick = p.acceleration() * (0.5 * dt);
            p.half_velocity += kick;
            p.velocity = p.half_velocity + kick;
        }
    }
}
