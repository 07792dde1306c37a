//! # weft-bench
//!
//! Canonical cloth scenarios and the fixed-step driver that runs them.
//!
//! ## Key Types
//!
//! - [`Scenario`]: Grid size, parameters, pins, obstacle and step schedule;
//!   built from a preset or loaded from TOML
//! - [`BenchmarkRunner`]: Steps a scenario, exports frames, emits telemetry
//! - [`BenchmarkMetrics`]: Timing and physical summary of one run, CSV-ready

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::BenchmarkMetrics;
pub use runner::BenchmarkRunner;
pub use scenarios::{Scenario, ScenarioKind};
