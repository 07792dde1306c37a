//! CSV frame exporter.
//!
//! Writes `<dir>/cloth_step_<timestep>.csv` per submitted frame:
//!
//! ```text
//! x,y,z
//! 0,0,-0.0001
//! 0.05,0,-0.0001
//! ...
//! ```
//!
//! Rows follow grid row-major order. `init` creates the directory and
//! removes `.csv` files left over from a previous run.

use std::fmt::Write as _;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use weft_types::WeftResult;

use crate::renderer::{RenderFrame, Renderer};

/// Column header of every frame file.
pub const CSV_HEADER: &str = "x,y,z";

pub struct CsvFrameExporter {
    output_dir: PathBuf,
    frames: u32,
}

impl CsvFrameExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            frames: 0,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the file written for `timestep`.
    pub fn frame_path(&self, timestep: u64) -> PathBuf {
        self.output_dir.join(format!("cloth_step_{timestep}.csv"))
    }

    /// Render a frame as CSV text.
    pub fn frame_to_csv(frame: &RenderFrame) -> String {
        let mut out = String::with_capacity(32 * (frame.positions.len() + 1));
        out.push_str(CSV_HEADER);
        out.push('\n');
        for [x, y, z] in &frame.positions {
            let _ = writeln!(out, "{x},{y},{z}");
        }
        out
    }
}

/// Create `dir` if needed and delete every `.csv` file directly inside it.
///
/// Returns the number of files removed.
pub fn clean_output_dir(dir: &Path) -> WeftResult<usize> {
    fs::create_dir_all(dir)?;
    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "csv") {
            fs::remove_file(&path)?;
            removed += 1;
        }
    }
    Ok(removed)
}

impl Renderer for CsvFrameExporter {
    fn init(&mut self, rows: usize, cols: usize) -> WeftResult<()> {
        let removed = clean_output_dir(&self.output_dir)?;
        tracing::debug!(
            dir = %self.output_dir.display(),
            rows,
            cols,
            removed,
            "csv output directory ready"
        );
        Ok(())
    }

    fn submit_frame(&mut self, frame: &RenderFrame) -> WeftResult<()> {
        let file = fs::File::create(self.frame_path(frame.timestep))?;
        let mut writer = BufWriter::new(file);
        writer.write_all(Self::frame_to_csv(frame).as_bytes())?;
        writer.flush()?;
        self.frames += 1;
        Ok(())
    }

    fn finalize(&mut self) -> WeftResult<()> {
        tracing::info!(
            frames = self.frames,
            dir = %self.output_dir.display(),
            "csv export complete"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "csv_exporter"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
