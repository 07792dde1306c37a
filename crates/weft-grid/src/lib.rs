//! # weft-grid
//!
//! The cloth lattice: particles on a `rows × cols` grid and the
//! spring topology that connects them.
//!
//! ## Key Types
//!
//! - [`ParticleGrid`]: Owns every particle in a dense row-major arena and
//!   the immutable neighbor topology built at construction.
//! - [`Topology`]: 12 neighbor slots per particle (structural, shear, bend)
//!   and the unique edge list derived from them.
//! - [`ClothParams`]: The immutable configuration bundle a grid and its
//!   solver are built from.

pub mod grid;
pub mod params;
pub mod particle;
pub mod topology;

pub use grid::{ParticleGrid, ParticleSample};
pub use params::ClothParams;
pub use particle::Particle;
pub use topology::{BoundaryClass, Edge, Neighbor, SpringFamily, Topology};
