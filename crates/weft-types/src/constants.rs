//! Physical constants and simulation defaults.

use crate::Scalar;

/// Gravitational acceleration (m/s²).
pub const GRAVITY: Scalar = 9.81;

/// Default simulation timestep (seconds).
pub const DEFAULT_DT: Scalar = 1.0e-4;

/// Smallest grid dimension along either axis. Cell spacing divides by `n - 1`.
pub const MIN_GRID_DIM: usize = 2;

/// Number of neighbor slots per particle: 4 structural, 4 shear, 4 bend.
pub const NEIGHBOR_SLOTS: usize = 12;
