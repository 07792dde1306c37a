//! A single cloth particle.

use weft_math::{Vec3, VectorExt};
use weft_types::{GridCoord, Scalar};

use crate::topology::BoundaryClass;

/// One grid node.
///
/// Identity (`coord`), parametric coordinates, boundary class and mass are
/// fixed at construction. The kinematic state is rewritten every step.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    coord: GridCoord,
    u: Scalar,
    v: Scalar,
    class: BoundaryClass,
    mass: Scalar,
    fixed: bool,

    /// Current position.
    pub position: Vec3,
    /// Externally visible velocity, finalized at the end of each step.
    pub velocity: Vec3,
    /// Leapfrog velocity, offset by half a step.
    pub half_velocity: Vec3,
    /// Force accumulator, rebuilt every force pass.
    pub force: Vec3,
}

impl Particle {
    pub(crate) fn new(
        coord: GridCoord,
        (u, v): (Scalar, Scalar),
        class: BoundaryClass,
        position: Vec3,
        mass: Scalar,
    ) -> Self {
        Self {
            coord,
            u,
            v,
            class,
            mass,
            fixed: false,
            position,
            velocity: Vec3::ZERO,
            half_velocity: Vec3::ZERO,
            force: Vec3::ZERO,
        }
    }

    #[inline]
    pub fn coord(&self) -> GridCoord {
        self.coord
    }

    /// Parametric coordinates `(u, v)` in `[0, 1]²`.
    #[inline]
    pub fn uv(&self) -> (Scalar, Scalar) {
        (self.u, self.v)
    }

    #[inline]
    pub fn class(&self) -> BoundaryClass {
        self.class
    }

    /// Mass in kg. Always strictly positive.
    #[inline]
    pub fn mass(&self) -> Scalar {
        self.mass
    }

    /// Fixed particles are never integrated or collided.
    #[inline]
    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    pub(crate) fn set_fixed(&mut self, fixed: bool) {
        self.fixed = fixed;
    }

    /// Acceleration from the current force accumulator: `F / m`.
    #[inline]
    pub fn acceleration(&self) -> Vec3 {
        self.force.div_or_zero(self.mass)
    }

    /// Kinetic energy `0.5 * m * |v|²` of the visible velocity.
    #[inline]
    pub fn kinetic_energy(&self) -> Scalar {
        0.5 * self.mass * self.velocity.length_squared()
    }
}
