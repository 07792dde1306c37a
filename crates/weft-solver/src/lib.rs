//! # weft-solver
//!
//! Force accumulation, time integration and step orchestration for the
//! mass-spring cloth.
//!
//! ## Key Types
//!
//! - [`SpringModel`]: Hookean spring with stretch limiting, class-weighted
//!   stiffness and edge-local damping
//! - [`ForceAccumulator`]: Gravity, linear drag and one force per unique edge
//! - [`Leapfrog`]: Symplectic kick-drift-kick integrator
//! - [`ClothSimulation`]: Owns the grid and advances it one `step` at a time

pub mod forces;
pub mod integrator;
pub mod spring;
pub mod stepper;

pub use forces::{ForceAccumulator, ForcePass};
pub use integrator::Leapfrog;
pub use spring::{spring_force, SpringForce, SpringModel};
pub use stepper::{ClothSimulation, StepResult};

pub use weft_grid::ClothParams;
