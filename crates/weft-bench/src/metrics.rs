//! Benchmark metrics: data collected during a run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a scenario run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario name.
    pub scenario: String,
    pub rows: usize,
    pub cols: usize,
    /// Unique springs in the grid.
    pub spring_count: usize,
    /// Number of timesteps executed.
    pub timesteps: u32,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Average wall-clock time per timestep (seconds).
    pub avg_step_time: f64,
    pub min_step_time: f64,
    pub max_step_time: f64,
    /// Kinetic energy after the last step.
    pub final_kinetic_energy: f64,
    /// Largest particle distance from its rest position.
    pub max_displacement: f64,
    /// Most particles in contact during a single step.
    pub peak_contacts: u32,
    /// Stretch-limit clamps summed over the run.
    pub total_clamped_springs: u64,
    /// Frames submitted to the renderer.
    pub frames_exported: u32,
}

impl BenchmarkMetrics {
    pub fn particle_count(&self) -> usize {
        self.rows * self.cols
    }

    /// CSV header matching [`to_csv_row`](Self::to_csv_row).
    pub fn to_csv_header() -> String {
        "scenario,rows,cols,springs,timesteps,total_wall_time_s,avg_step_ms,min_step_ms,max_step_ms,final_ke,max_displacement,peak_contacts,clamped_springs,frames".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{:.6},{:.4},{:.4},{:.4},{:.6e},{:.6},{},{},{}",
            self.scenario,
            self.rows,
            self.cols,
            self.spring_count,
            self.timesteps,
            self.total_wall_time,
            self.avg_step_time * 1000.0,
            self.min_step_time * 1000.0,
            self.max_step_time * 1000.0,
            self.final_kinetic_energy,
            self.max_displacement,
            self.peak_contacts,
            self.total_clamped_springs,
            self.frames_exported,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
