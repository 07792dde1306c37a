//! JSON frame exporter.
//!
//! Buffers every submitted frame and writes the animation as one JSON
//! document on `finalize()`:
//!
//! ```text
//! { "rows": 20, "cols": 20, "frames": [ { "timestep": 0, "positions": [[x,y,z], ...] }, ... ] }
//! ```

use std::path::PathBuf;

use serde::Serialize;
use weft_types::{Scalar, WeftError, WeftResult};

use crate::renderer::{RenderFrame, Renderer};

#[derive(Serialize)]
struct FrameData {
    timestep: u64,
    positions: Vec<[Scalar; 3]>,
}

#[derive(Serialize)]
struct AnimationData<'a> {
    rows: usize,
    cols: usize,
    frames: &'a [FrameData],
}

pub struct JsonFrameExporter {
    output_path: PathBuf,
    rows: usize,
    cols: usize,
    frames: Vec<FrameData>,
}

impl JsonFrameExporter {
    /// Creates a new exporter that will write to the given path.
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            rows: 0,
            cols: 0,
            frames: Vec::new(),
        }
    }

    /// Serialize the buffered animation.
    pub fn to_json(&self) -> WeftResult<String> {
        let data = AnimationData {
            rows: self.rows,
            cols: self.cols,
            frames: &self.frames,
        };
        serde_json::to_string(&data)
            .map_err(|e| WeftError::Serialization(format!("JSON serialization failed: {e}")))
    }
}

impl Renderer for JsonFrameExporter {
    fn init(&mut self, rows: usize, cols: usize) -> WeftResult<()> {
        self.rows = rows;
        self.cols = cols;
        self.frames.clear();
        Ok(())
    }

    fn submit_frame(&mut self, frame: &RenderFrame) -> WeftResult<()> {
        self.frames.push(FrameData {
            timestep: frame.timestep,
            positions: frame.positions.clone(),
        });
        Ok(())
    }

    fn finalize(&mut self) -> WeftResult<()> {
        if let Some(parent) = self.output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.output_path, self.to_json()?)?;
        tracing::info!(
            frames = self.frames.len(),
            path = %self.output_path.display(),
            "json export complete"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> u32 {
        self.frames.len() as u32
    }
}
