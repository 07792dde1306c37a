//! # weft-telemetry
//!
//! Event bus for simulation telemetry. Drivers emit structured events
//! (timing, contacts, stretch clamping, energy) that pluggable sinks
//! consume: an in-memory buffer, `tracing`, or a JSON-lines stream.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, JsonLinesSink, TracingSink, VecSink};
