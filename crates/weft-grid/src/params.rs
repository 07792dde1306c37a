//! Cloth configuration.
//!
//! Physical and numerical parameters shared by grid construction
//! (extents, density, mass multipliers) and the solver (stiffness,
//! damping, stretch limit, friction, gravity).

use serde::{Deserialize, Serialize};
use weft_math::Vec3;
use weft_types::{Scalar, WeftError, WeftResult};

use crate::topology::BoundaryClass;

/// Configuration bundle for a cloth grid and its solver.
///
/// Immutable once a simulation is built. Changing any value means
/// building a new grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClothParams {
    /// Physical extent along X (meters).
    pub real_width: Scalar,
    /// Physical extent along Y (meters).
    pub real_height: Scalar,
    /// Areal density (kg/m²).
    pub surface_density: Scalar,

    /// Base spring constant (N/m), scaled per edge by the class weights.
    pub spring_k: Scalar,
    /// Damping along each spring, proportional to relative velocity.
    pub spring_damping: Scalar,
    /// Per-particle linear drag coefficient.
    pub global_damping: Scalar,
    /// Maximum current/rest length ratio before the elastic term is clamped.
    pub stretch_limit: Scalar,
    /// Tangential velocity fraction removed on sphere contact, in `[0, 1]`.
    pub friction_coeff: Scalar,

    /// Stiffness weight for springs touching a grid corner.
    pub corner_k: Scalar,
    /// Stiffness weight for springs touching a grid edge.
    pub edge_k: Scalar,
    /// Stiffness weight for interior springs.
    pub normal_k: Scalar,

    /// Mass multiplier for corner particles.
    pub corner_mass: Scalar,
    /// Mass multiplier for edge particles.
    pub edge_mass: Scalar,

    /// Gravity vector [gx, gy, gz] in m/s². The cloth lies in the XY plane.
    pub gravity: [Scalar; 3],
}

impl Default for ClothParams {
    fn default() -> Self {
        Self {
            real_width: 1.0,
            real_height: 1.0,
            surface_density: 4.0,
            spring_k: 150.0,
            spring_damping: 3.0,
            global_damping: 0.2,
            stretch_limit: 1.5,
            friction_coeff: 0.2,
            corner_k: 5.0,
            edge_k: 3.0,
            normal_k: 1.0,
            corner_mass: 0.9,
            edge_mass: 0.95,
            gravity: [0.0, 0.0, -weft_types::constants::GRAVITY],
        }
    }
}

impl ClothParams {
    /// Preset with strongly lightened borders (corner 0.25, edge 0.5 mass).
    ///
    /// Boundary particles carry roughly the share of a cell they actually
    /// cover, so a hanging sheet sags less at its rim.
    pub fn light_border() -> Self {
        Self {
            corner_mass: 0.25,
            edge_mass: 0.5,
            ..Default::default()
        }
    }

    /// Gravity as a vector.
    #[inline]
    pub fn gravity_vec(&self) -> Vec3 {
        Vec3::from_array(self.gravity)
    }

    /// Mass multiplier for a particle of the given class.
    #[inline]
    pub fn mass_multiplier(&self, class: BoundaryClass) -> Scalar {
        match class {
            BoundaryClass::Corner => self.corner_mass,
            BoundaryClass::Edge => self.edge_mass,
            BoundaryClass::Interior => 1.0,
        }
    }

    /// Check every parameter against its valid range.
    ///
    /// Runs once at construction; the step loop never re-validates.
    pub fn validate(&self) -> WeftResult<()> {
        positive("real_width", self.real_width)?;
        positive("real_height", self.real_height)?;
        positive("surface_density", self.surface_density)?;
        positive("corner_mass", self.corner_mass)?;
        positive("edge_mass", self.edge_mass)?;

        non_negative("spring_k", self.spring_k)?;
        non_negative("spring_damping", self.spring_damping)?;
        non_negative("global_damping", self.global_damping)?;
        non_negative("corner_k", self.corner_k)?;
        non_negative("edge_k", self.edge_k)?;
        non_negative("normal_k", self.normal_k)?;

        if !(self.stretch_limit.is_finite() && self.stretch_limit >= 1.0) {
            return Err(WeftError::InvalidConfig(format!(
                "stretch_limit must be >= 1.0, got {}",
                self.stretch_limit
            )));
        }
        if !(0.0..=1.0).contains(&self.friction_coeff) {
            return Err(WeftError::InvalidConfig(format!(
                "friction_coeff must be in [0, 1], got {}",
                self.friction_coeff
            )));
        }
        if !self.gravity.iter().all(|g| g.is_finite()) {
            return Err(WeftError::InvalidConfig(format!(
                "gravity must be finite, got {:?}",
                self.gravity
            )));
        }
        Ok(())
    }
}

fn positive(name: &str, value: Scalar) -> WeftResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(WeftError::InvalidConfig(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

fn non_negative(name: &str, value: Scalar) -> WeftResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(WeftError::InvalidConfig(format!(
            "{name} must be non-negative, got {value}"
        )))
    }
}
