//! Spring model.
//!
//! A spring between particles A and B with direction `dir = (B - A) / |B - A|`
//! produces
//!
//! ```text
//! F = dir * k * (min(len, rest * stretch_limit) - rest)
//!   + dir * damping * ((v_B - v_A) · dir)
//! ```
//!
//! `F` acts on A and `-F` on B, so a stretched spring pulls both ends together.

use weft_grid::{BoundaryClass, ClothParams, Particle};
use weft_math::{Vec3, VectorExt};
use weft_types::Scalar;

/// Force produced by one spring evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringForce {
    /// Total force on endpoint A. Endpoint B receives the negation.
    pub force: Vec3,
    /// Signed elastic magnitude `k * (clamped_len - rest)`.
    pub elastic: Scalar,
    /// Signed damping magnitude along the spring.
    pub damping: Scalar,
    /// Stored elastic energy `0.5 * k * (clamped_len - rest)²`.
    pub energy: Scalar,
    /// Whether the stretch limit clamped the length.
    pub clamped: bool,
}

/// Evaluate a spring from its geometry.
///
/// - `delta`: `B.position - A.position`
/// - `relative_velocity`: `B.velocity - A.velocity`
///
/// Returns `None` for a zero-length spring, where no direction exists.
pub fn spring_force(
    delta: Vec3,
    relative_velocity: Vec3,
    rest_length: Scalar,
    k: Scalar,
    damping: Scalar,
    stretch_limit: Scalar,
) -> Option<SpringForce> {
    let len = delta.length();
    if len == 0.0 {
        return None;
    }
    let dir = delta.normalized();

    let max_len = rest_length * stretch_limit;
    let clamped = len > max_len;
    let effective = if clamped { max_len } else { len };

    let extension = effective - rest_length;
    let elastic = k * extension;
    let damping = damping * relative_velocity.dot(dir);

    Some(SpringForce {
        force: dir * (elastic + damping),
        elastic,
        damping,
        energy: 0.5 * k * extension * extension,
        clamped,
    })
}

/// Spring constants shared by every edge of a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SpringModel {
    pub base_k: Scalar,
    pub damping: Scalar,
    pub stretch_limit: Scalar,
    pub corner_k: Scalar,
    pub edge_k: Scalar,
    pub normal_k: Scalar,
}

impl SpringModel {
    pub fn from_params(params: &ClothParams) -> Self {
        Self {
            base_k: params.spring_k,
            damping: params.spring_damping,
            stretch_limit: params.stretch_limit,
            corner_k: params.corner_k,
            edge_k: params.edge_k,
            normal_k: params.normal_k,
        }
    }

    #[inline]
    pub fn class_weight(&self, class: BoundaryClass) -> Scalar {
        match class {
            BoundaryClass::Corner => self.corner_k,
            BoundaryClass::Edge => self.edge_k,
            BoundaryClass::Interior => self.normal_k,
        }
    }

    /// Effective spring constant: the base constant scaled by the stiffer endpoint.
    #[inline]
    pub fn stiffness(&self, a: BoundaryClass, b: BoundaryClass) -> Scalar {
        self.base_k * self.class_weight(a).max(self.class_weight(b))
    }

    /// Largest effective constant any spring of this model can have.
    pub fn max_stiffness(&self) -> Scalar {
        self.base_k * self.corner_k.max(self.edge_k).max(self.normal_k)
    }

    /// Evaluate the spring from `a` to `b` at their current state.
    pub fn evaluate(&self, a: &Particle, b: &Particle, rest_length: Scalar) -> Option<SpringForce> {
        spring_force(
            b.position - a.position,
            b.velocity - a.velocity,
            rest_length,
            self.stiffness(a.class(), b.class()),
            self.damping,
            self.stretch_limit,
        )
    }
}
