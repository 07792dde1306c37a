//! # weft-render
//!
//! Frame output for cloth runs.
//!
//! Provides a `Renderer` trait with a `HeadlessRenderer` stub, a
//! `CsvFrameExporter` writing one `cloth_step_<N>.csv` table per frame, and
//! a `JsonFrameExporter` writing the whole animation to one file.

pub mod csv_exporter;
pub mod json_exporter;
pub mod renderer;

pub use csv_exporter::CsvFrameExporter;
pub use json_exporter::JsonFrameExporter;
pub use renderer::{HeadlessRenderer, RenderFrame, Renderer};
