//! Strongly-typed identifiers for grid particles.
//!
//! A particle is addressed either by its dense arena index
//! ([`ParticleId`]) or by its lattice coordinate ([`GridCoord`]).
//! The two are related by `index = y * cols + x`.

use serde::{Deserialize, Serialize};

/// Index into the particle arena, in row-major grid order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParticleId(pub u32);

impl ParticleId {
    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for ParticleId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

/// Integer lattice coordinate of a particle. Immutable after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCoord {
    /// Column, `0..cols`.
    pub x: usize,
    /// Row, `0..rows`.
    pub y: usize,
}

impl GridCoord {
    #[inline]
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for GridCoord {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for GridCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
