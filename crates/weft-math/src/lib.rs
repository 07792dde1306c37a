//! # weft-math
//!
//! Vector math for the weft cloth simulator.
//!
//! Provides:
//! - Re-export of `glam::DVec3` as the canonical 3-vector
//! - [`VectorExt`]: zero-safe normalization and division, and
//!   normal/tangent decomposition used by collision response

pub mod vector;

// Double-precision glam vector is the canonical math type for weft.
pub use glam::DVec3 as Vec3;
pub use vector::VectorExt;
