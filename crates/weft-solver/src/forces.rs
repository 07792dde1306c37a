//! Force accumulation.
//!
//! Each pass resets every accumulator to `gravity * m - global_damping * v`
//! and then adds one spring force per unique edge. The edge list holds
//! each spring once (`a < b`), so no force is ever counted twice.

use weft_grid::{ClothParams, Edge, Particle, ParticleGrid};
use weft_math::Vec3;
use weft_types::Scalar;

use crate::spring::SpringModel;

/// Diagnostics from one force pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ForcePass {
    /// Springs whose length exceeded `rest * stretch_limit`.
    pub clamped_springs: u32,
    /// Total elastic energy stored in the springs.
    pub elastic_energy: Scalar,
}

/// Computes per-particle forces for a grid.
#[derive(Debug, Clone)]
pub struct ForceAccumulator {
    gravity: Vec3,
    global_damping: Scalar,
    springs: SpringModel,
}

impl ForceAccumulator {
    pub fn new(params: &ClothParams) -> Self {
        Self {
            gravity: params.gravity_vec(),
            global_damping: params.global_damping,
            springs: SpringModel::from_params(params),
        }
    }

    #[inline]
    pub fn springs(&self) -> &SpringModel {
        &self.springs
    }

    /// Full pass: external forces, then springs.
    pub fn accumulate(&self, grid: &mut ParticleGrid) -> ForcePass {
        let (particles, topology) = grid.split_mut();
        self.apply_external(particles);
        self.apply_springs(particles, topology.edges())
    }

    /// Overwrite every accumulator with gravity and linear drag.
    pub fn apply_external(&self, particles: &mut [Particle]) {
        for p in particles.iter_mut() {
            p.force = self.gravity * p.mass() - p.velocity * self.global_damping;
        }
    }

    /// Add the force of every edge to both endpoints, equal and opposite.
    pub fn apply_springs(&self, particles: &mut [Particle], edges: &[Edge]) -> ForcePass {
        let mut pass = ForcePass::default();

        for edge in edges {
            let (ia, ib) = (edge.a.index(), edge.b.index());
            let Some(spring) = self.springs.evaluate(&particles[ia], &particles[ib], edge.rest_length) else {
                continue;
            };

            if spring.clamped {
                pass.clamped_springs += 1;
                tracing::trace!(
                    a = %particles[ia].coord(),
                    b = %particles[ib].coord(),
                    "stretch limit exceeded"
                );
            }
            pass.elastic_energy += spring.energy;

            particles[ia].force += spring.force;
            particles[ib].force -= spring.force;
        }

        pass
    }
}
