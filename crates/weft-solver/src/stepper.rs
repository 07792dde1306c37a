//! Step orchestration.
//!
//! One call to [`ClothSimulation::step`] runs, in order:
//!
//! ```text
//! forces(t) → kick + drift → collide → forces(t+dt) → kick + publish velocity
//! ```
//!
//! Fixed particles keep their position and velocity through every phase.

use std::time::Instant;

use weft_contact::{Collider, ContactResult};
use weft_grid::{ClothParams, Particle, ParticleGrid, ParticleSample};
use weft_math::Vec3;
use weft_types::{Scalar, WeftResult};

use crate::forces::ForceAccumulator;
use crate::integrator::Leapfrog;

/// Result of a single simulation step.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepResult {
    /// Collision pass summary.
    pub contacts: ContactResult,
    /// Springs clamped by the stretch limit, summed over both force passes.
    pub clamped_springs: u32,
    /// Elastic energy stored in the springs at the end of the step.
    pub elastic_energy: Scalar,
    /// Wall-clock time for this step (seconds).
    pub wall_time: f64,
}

/// A cloth grid together with the machinery that advances it.
#[derive(Debug, Clone)]
pub struct ClothSimulation {
    params: ClothParams,
    grid: ParticleGrid,
    forces: ForceAccumulator,
    integrator: Leapfrog,
    step_count: u64,
    sim_time: Scalar,
}

impl ClothSimulation {
    /// Build a `rows × cols` cloth at rest in the z = 0 plane.
    pub fn new(rows: usize, cols: usize, params: ClothParams) -> WeftResult<Self> {
        let grid = ParticleGrid::new(rows, cols, &params)?;
        let forces = ForceAccumulator::new(&params);

        tracing::debug!(
            rows,
            cols,
            particles = grid.len(),
            springs = grid.edges().len(),
            "cloth initialized"
        );

        Ok(Self {
            params,
            grid,
            forces,
            integrator: Leapfrog,
            step_count: 0,
            sim_time: 0.0,
        })
    }

    #[inline]
    pub fn params(&self) -> &ClothParams {
        &self.params
    }

    #[inline]
    pub fn grid(&self) -> &ParticleGrid {
        &self.grid
    }

    pub fn particle(&self, x: usize, y: usize) -> Option<&Particle> {
        self.grid.particle(x, y)
    }

    /// Pin or release the particle at column `x`, row `y`.
    /// Out-of-range coordinates are ignored.
    pub fn set_fixed(&mut self, x: usize, y: usize, fixed: bool) {
        self.grid.set_fixed(x, y, fixed);
    }

    /// Positions in row-major order.
    pub fn positions(&self) -> Vec<Vec3> {
        self.grid.positions()
    }

    pub fn snapshot(&self) -> Vec<ParticleSample> {
        self.grid.snapshot()
    }

    /// Number of completed steps.
    #[inline]
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Accumulated simulated time (seconds).
    #[inline]
    pub fn sim_time(&self) -> Scalar {
        self.sim_time
    }

    pub fn kinetic_energy(&self) -> Scalar {
        self.grid.kinetic_energy()
    }

    /// Gravitational potential energy `-Σ m (g · x)` of the free particles.
    pub fn potential_energy(&self) -> Scalar {
        let g = self.params.gravity_vec();
        self.grid
            .particles()
            .iter()
            .filter(|p| !p.is_fixed())
            .map(|p| -p.mass() * g.dot(p.position))
            .sum()
    }

    /// Smallest `sqrt(m / k)` over the grid, with `k` the stiffest spring constant.
    ///
    /// Explicit steps much larger than this are expected to blow up.
    /// Returns infinity when the springs have no stiffness.
    pub fn critical_time_scale(&self) -> Scalar {
        let k = self.forces.springs().max_stiffness();
        if k <= 0.0 {
            return Scalar::INFINITY;
        }
        self.grid
            .particles()
            .iter()
            .map(|p| (p.mass() / k).sqrt())
            .fold(Scalar::INFINITY, Scalar::min)
    }

    /// Advance the cloth by `dt` seconds, resolving against `collider`.
    pub fn step<C: Collider + ?Sized>(&mut self, dt: Scalar, collider: &C) -> StepResult {
        debug_assert!(dt > 0.0, "timestep must be positive, got {dt}");
        let start = Instant::now();

        let first = self.forces.accumulate(&mut self.grid);
        self.integrator.kick_drift(self.grid.particles_mut(), dt);

        let contacts = collider.resolve(self.grid.particles_mut(), self.params.friction_coeff);

        let second = self.forces.accumulate(&mut self.grid);
        self.integrator.kick_finalize(self.grid.particles_mut(), dt);

        self.step_count += 1;
        self.sim_time += dt;

        let result = StepResult {
            contacts,
            clamped_springs: first.clamped_springs + second.clamped_springs,
            elastic_energy: second.elastic_energy,
            wall_time: start.elapsed().as_secs_f64(),
        };

        tracing::debug!(
            step = self.step_count,
            sim_time = self.sim_time,
            collider = collider.name(),
            contacts = result.contacts.resolved_count,
            clamped = result.clamped_springs,
            "step complete"
        );

        result
    }
}
