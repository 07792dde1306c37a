//! # weft-contact
//!
//! Collision detection and response between cloth particles and a
//! single analytical obstacle.
//!
//! Response is positional: a penetrating particle is moved onto the
//! obstacle surface, the inward normal part of its half-step velocity is
//! removed and the tangential part is scaled by `1 - friction`.
//! Fixed particles are never touched.

pub mod response;
pub mod sphere;

pub use response::{Collider, ContactResult, NullCollider};
pub use sphere::SphereCollider;
