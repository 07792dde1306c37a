//! # weft-types
//!
//! Shared types, identifiers, error types, and physical constants
//! for the weft cloth simulator.
//!
//! This crate has zero domain logic. It defines the vocabulary
//! that all other weft crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{WeftError, WeftResult};
pub use ids::{GridCoord, ParticleId};
pub use scalar::Scalar;
