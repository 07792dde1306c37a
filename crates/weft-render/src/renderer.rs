//! Renderer trait and HeadlessRenderer stub.
//!
//! A driver submits a frame every N steps. The headless renderer only
//! counts frames, serving benchmarks and CI.

use weft_grid::ParticleGrid;
use weft_types::{Scalar, WeftResult};

/// Particle positions at one step, in grid row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    /// Step this frame was captured after.
    pub timestep: u64,
    pub rows: usize,
    pub cols: usize,
    /// `rows * cols` positions, `y` outer and `x` inner.
    pub positions: Vec<[Scalar; 3]>,
}

impl RenderFrame {
    /// Capture the current positions of a grid.
    pub fn capture(timestep: u64, grid: &ParticleGrid) -> Self {
        Self {
            timestep,
            rows: grid.rows(),
            cols: grid.cols(),
            positions: grid.positions().iter().map(|p| p.to_array()).collect(),
        }
    }

    pub fn from_positions(timestep: u64, rows: usize, cols: usize, positions: Vec<[Scalar; 3]>) -> Self {
        debug_assert_eq!(positions.len(), rows * cols);
        Self {
            timestep,
            rows,
            cols,
            positions,
        }
    }
}

/// Trait for consuming simulation output.
///
/// # Implementations
/// - [`HeadlessRenderer`]: Discards frames (benchmarks, CI)
/// - [`CsvFrameExporter`](crate::csv_exporter::CsvFrameExporter): One CSV table per frame
/// - [`JsonFrameExporter`](crate::json_exporter::JsonFrameExporter): Whole animation as JSON
pub trait Renderer: Send {
    /// Prepare for a `rows × cols` cloth.
    fn init(&mut self, rows: usize, cols: usize) -> WeftResult<()>;

    /// Submit a frame.
    fn submit_frame(&mut self, frame: &RenderFrame) -> WeftResult<()>;

    /// Finalize output (flush buffers, close files, etc.).
    fn finalize(&mut self) -> WeftResult<()>;

    /// Returns the renderer name.
    fn name(&self) -> &str;

    /// Returns the number of frames submitted.
    fn frame_count(&self) -> u32;
}

/// Headless renderer: discards all frames.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    frames: u32,
}

impl HeadlessRenderer {
    /// Creates a new headless renderer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for HeadlessRenderer {
    fn init(&mut self, _rows: usize, _cols: usize) -> WeftResult<()> {
        Ok(())
    }

    fn submit_frame(&mut self, _frame: &RenderFrame) -> WeftResult<()> {
        self.frames += 1;
        Ok(())
    }

    fn finalize(&mut self) -> WeftResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
