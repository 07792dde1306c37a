//! Collider trait and contact results.

use weft_grid::Particle;
use weft_types::Scalar;

/// Summary of one collision pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContactResult {
    /// Number of particles pushed out this pass.
    pub resolved_count: u32,
    /// Deepest penetration found before correction (meters).
    pub max_penetration: Scalar,
    /// Sum of penetration depths corrected (meters).
    pub total_penetration: Scalar,
}

impl ContactResult {
    /// Record one resolved contact of the given depth.
    pub fn record(&mut self, depth: Scalar) {
        self.resolved_count += 1;
        self.max_penetration = self.max_penetration.max(depth);
        self.total_penetration += depth;
    }
}

/// An obstacle the cloth is resolved against once per step.
///
/// # Implementations
/// - [`SphereCollider`](crate::sphere::SphereCollider): analytical sphere
/// - [`NullCollider`]: no obstacle (free fall, hanging scenarios)
pub trait Collider: Send {
    /// Resolve every non-fixed particle against this obstacle.
    ///
    /// `friction` is the tangential damping fraction in `[0, 1]`.
    fn resolve(&self, particles: &mut [Particle], friction: Scalar) -> ContactResult;

    /// Returns the collider name.
    fn name(&self) -> &str;
}

/// Collider with no geometry. Never produces contacts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCollider;

impl Collider for NullCollider {
    fn resolve(&self, _particles: &mut [Particle], _friction: Scalar) -> ContactResult {
        ContactResult::default()
    }

    fn name(&self) -> &str {
        "null_collider"
    }
}
