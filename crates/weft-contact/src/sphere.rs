//! Analytical sphere collision.
//!
//! Prevents particles from penetrating a sphere of a given center
//! and radius by projecting them onto its surface.

use serde::{Deserialize, Serialize};
use weft_grid::Particle;
use weft_math::{Vec3, VectorExt};
use weft_types::{Scalar, WeftError, WeftResult};

use crate::response::{Collider, ContactResult};

/// Sphere obstacle. Owned by the caller and passed by reference into each step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereCollider {
    /// Center of the sphere.
    pub center: Vec3,
    /// Radius of the sphere.
    pub radius: Scalar,
}

impl SphereCollider {
    /// Creates a new sphere collider.
    pub fn new(center: Vec3, radius: Scalar) -> Self {
        Self { center, radius }
    }

    /// Rejects non-finite centers and non-positive radii.
    pub fn validate(&self) -> WeftResult<()> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(WeftError::InvalidConfig(format!(
                "sphere radius must be positive, got {}",
                self.radius
            )));
        }
        if !self.center.is_finite() {
            return Err(WeftError::InvalidConfig(format!(
                "sphere center must be finite, got {}",
                self.center
            )));
        }
        Ok(())
    }

    /// True if `p` lies strictly inside the sphere.
    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        (p - self.center).length() < self.radius
    }

    /// Unit normal pointing away from the center through `p`.
    ///
    /// At the center itself the direction is undefined; `+Z` is used.
    #[inline]
    pub fn outward_normal(&self, p: Vec3) -> Vec3 {
        let n = (p - self.center).normalized();
        if n == Vec3::ZERO {
            Vec3::Z
        } else {
            n
        }
    }

    /// Closest point on the sphere surface to `p`, never strictly inside.
    ///
    /// `center + n * radius` can round to a point up to an ulp inside the
    /// surface; the distance is widened until [`contains`](Self::contains)
    /// rejects the result.
    pub fn project(&self, p: Vec3) -> Vec3 {
        let n = self.outward_normal(p);
        let mut reach = self.radius;
        let mut surface = self.center + n * reach;
        while self.contains(surface) {
            reach *= 1.0 + Scalar::EPSILON;
            surface = self.center + n * reach;
        }
        surface
    }

    /// Resolve a single particle. Returns the penetration depth if it was inside.
    pub fn resolve_particle(&self, particle: &mut Particle, friction: Scalar) -> Option<Scalar> {
        if particle.is_fixed() {
            return None;
        }

        let dist = (particle.position - self.center).length();
        if dist >= self.radius {
            return None;
        }

        let depth = self.radius - dist;
        let n = self.outward_normal(particle.position);
        tracing::trace!(
            coord = %particle.coord(),
            penetration = depth,
            "sphere contact"
        );

        // Push to surface
        particle.position = self.project(particle.position);

        // Cancel velocity into the sphere; outward motion is kept
        let v_n = particle.half_velocity.dot(n);
        if v_n < 0.0 {
            particle.half_velocity -= n * v_n;
        }

        // Sliding friction on the tangential part
        let (_, tangent) = particle.half_velocity.split_normal(n);
        particle.half_velocity -= tangent * friction;

        Some(depth)
    }
}

impl Collider for SphereCollider {
    fn resolve(&self, particles: &mut [Particle], friction: Scalar) -> ContactResult {
        let mut result = ContactResult::default();
        for particle in particles.iter_mut() {
            if let Some(depth) = self.resolve_particle(particle, friction) {
                result.record(depth);
            }
        }
        result
    }

    fn name(&self) -> &str {
        "sphere"
    }
}
