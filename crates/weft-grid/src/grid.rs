//! The particle grid.
//!
//! Owns every particle of the cloth in a dense row-major arena
//! (`index = y * cols + x`) together with its [`Topology`].
//! The grid is built once per configuration and replaced wholesale,
//! never partially rebuilt.

use serde::{Deserialize, Serialize};
use weft_math::Vec3;
use weft_types::constants::MIN_GRID_DIM;
use weft_types::{GridCoord, ParticleId, Scalar, WeftError, WeftResult};

use crate::params::ClothParams;
use crate::particle::Particle;
use crate::topology::{BoundaryClass, Edge, Topology};

/// Read-only view of one particle's state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleSample {
    pub coord: GridCoord,
    pub position: Vec3,
    pub velocity: Vec3,
    pub fixed: bool,
}

/// A `rows × cols` lattice of cloth particles.
#[derive(Debug, Clone)]
pub struct ParticleGrid {
    rows: usize,
    cols: usize,
    dx: Scalar,
    dy: Scalar,
    particles: Vec<Particle>,
    topology: Topology,
}

impl ParticleGrid {
    /// Build a grid in the XY plane at `z = 0`.
    ///
    /// Particle `(x, y)` rests at `(u * real_width, v * real_height, 0)` with
    /// `u = x / (cols - 1)`, `v = y / (rows - 1)`. Its mass is
    /// `surface_density * cell_area * class multiplier`.
    ///
    /// Fails with [`WeftError::InvalidConfig`] if either dimension is below 2
    /// or `params` does not validate.
    pub fn new(rows: usize, cols: usize, params: &ClothParams) -> WeftResult<Self> {
        if rows < MIN_GRID_DIM || cols < MIN_GRID_DIM {
            return Err(WeftError::InvalidConfig(format!(
                "grid must be at least {MIN_GRID_DIM}x{MIN_GRID_DIM}, got {rows}x{cols} (rows x cols)"
            )));
        }
        if rows.checked_mul(cols).and_then(|n| u32::try_from(n).ok()).is_none() {
            return Err(WeftError::InvalidConfig(format!(
                "grid {rows}x{cols} exceeds the particle index range"
            )));
        }
        params.validate()?;

        let dx = params.real_width / (cols - 1) as Scalar;
        let dy = params.real_height / (rows - 1) as Scalar;
        let cell_area = dx * dy;

        let mut particles = Vec::with_capacity(rows * cols);
        for y in 0..rows {
            for x in 0..cols {
                let coord = GridCoord::new(x, y);
                let u = x as Scalar / (cols - 1) as Scalar;
                let v = y as Scalar / (rows - 1) as Scalar;
                let class = BoundaryClass::classify(coord, cols, rows);
                let position = Vec3::new(u * params.real_width, v * params.real_height, 0.0);
                let mass = params.surface_density * cell_area * params.mass_multiplier(class);
                particles.push(Particle::new(coord, (u, v), class, position, mass));
            }
        }

        Ok(Self {
            rows,
            cols,
            dx,
            dy,
            particles,
            topology: Topology::build(cols, rows, dx, dy),
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of particles, `rows * cols`.
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Always false for a constructed grid; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Cell spacing `(dx, dy)` in meters.
    #[inline]
    pub fn spacing(&self) -> (Scalar, Scalar) {
        (self.dx, self.dy)
    }

    /// Arena index of `(x, y)`, or `None` if out of range.
    #[inline]
    pub fn id(&self, x: usize, y: usize) -> Option<ParticleId> {
        (x < self.cols && y < self.rows).then(|| ParticleId((y * self.cols + x) as u32))
    }

    /// Particle at `(x, y)`, or `None` if out of range.
    pub fn particle(&self, x: usize, y: usize) -> Option<&Particle> {
        self.id(x, y).map(|id| &self.particles[id.index()])
    }

    /// Particle by arena index. Panics on an index from another grid.
    #[inline]
    pub fn get(&self, id: ParticleId) -> &Particle {
        &self.particles[id.index()]
    }

    /// All particles in row-major order.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable particle state for the stepping pipeline.
    ///
    /// The slice length and particle identities cannot change through it.
    /// Writes bypass pin bookkeeping; pin through [`set_fixed`](Self::set_fixed).
    #[doc(hidden)]
    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Mutable particles alongside the (immutable) topology, for force
    /// accumulation.
    #[doc(hidden)]
    #[inline]
    pub fn split_mut(&mut self) -> (&mut [Particle], &Topology) {
        (&mut self.particles, &self.topology)
    }

    #[inline]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Unique springs of the grid.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        self.topology.edges()
    }

    /// Fix or release particle `(x, y)`. Out-of-range coordinates are ignored.
    pub fn set_fixed(&mut self, x: usize, y: usize, fixed: bool) {
        if let Some(id) = self.id(x, y) {
            self.particles[id.index()].set_fixed(fixed);
        }
    }

    /// Positions in row-major order (`y` outer, `x` inner).
    pub fn positions(&self) -> Vec<Vec3> {
        self.particles.iter().map(|p| p.position).collect()
    }

    /// Snapshot of every particle in row-major order.
    pub fn snapshot(&self) -> Vec<ParticleSample> {
        self.particles
            .iter()
            .map(|p| ParticleSample {
                coord: p.coord(),
                position: p.position,
                velocity: p.velocity,
                fixed: p.is_fixed(),
            })
            .collect()
    }

    pub fn total_mass(&self) -> Scalar {
        self.particles.iter().map(Particle::mass).sum()
    }

    /// Total kinetic energy `Σ 0.5 m |v|²` over non-fixed particles.
    pub fn kinetic_energy(&self) -> Scalar {
        self.particles
            .iter()
            .filter(|p| !p.is_fixed())
            .map(Particle::kinetic_energy)
            .sum()
    }
}
