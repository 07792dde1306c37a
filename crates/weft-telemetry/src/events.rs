//! Simulation event types.
//!
//! Lightweight value types emitted by a driver around each cloth step.

use serde::{Deserialize, Serialize};

/// A simulation event tagged with the step it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Step number (0-indexed).
    pub timestep: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Step started.
    TimestepBegin {
        /// Simulated time at the start of the step (seconds).
        sim_time: f64,
    },

    /// Step completed.
    TimestepEnd {
        /// Wall-clock time for the step (seconds).
        wall_time: f64,
    },

    /// Collision pass completed with at least one contact.
    Contacts {
        /// Particles pushed out of the obstacle.
        contact_count: u32,
        /// Deepest penetration corrected (meters).
        max_penetration: f64,
    },

    /// One or more springs hit the stretch limit.
    StretchClamp {
        clamped_springs: u32,
    },

    /// Energy snapshot at the end of a step.
    Energy {
        /// Kinetic energy `Σ ½ m v²`.
        kinetic: f64,
        /// Gravitational potential energy.
        potential: f64,
        /// Elastic energy stored in the springs.
        elastic: f64,
    },

    /// Free-form event.
    Custom {
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given step.
    pub fn new(timestep: u64, kind: EventKind) -> Self {
        Self { timestep, kind }
    }
}
