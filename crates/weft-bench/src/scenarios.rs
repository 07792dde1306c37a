//! Benchmark scenarios.
//!
//! Three presets:
//! 1. **Sphere drape**: 20×20 cloth falling onto a sphere, a frame every 20 steps
//! 2. **Hanging corners**: cloth pinned at its two top corners, sagging under gravity
//! 3. **Free fall**: unconstrained cloth with no obstacle
//!
//! Scenario files are TOML:
//!
//! ```toml
//! name = "drape"
//! rows = 20
//! cols = 20
//! dt = 1e-4
//! timesteps = 6000
//! export_every = 20
//! fixed = [[0, 19], [19, 19]]
//!
//! [params]
//! spring_k = 150.0
//!
//! [sphere]
//! center = [0.5, 0.5, -0.4]
//! radius = 0.4
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use weft_contact::{Collider, NullCollider, SphereCollider};
use weft_grid::ClothParams;
use weft_math::Vec3;
use weft_solver::ClothSimulation;
use weft_types::constants::{DEFAULT_DT, MIN_GRID_DIM};
use weft_types::{Scalar, WeftError, WeftResult};

/// Built-in scenario presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    SphereDrape,
    HangingCorners,
    FreeFall,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::SphereDrape,
            ScenarioKind::HangingCorners,
            ScenarioKind::FreeFall,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::SphereDrape => "sphere_drape",
            ScenarioKind::HangingCorners => "hanging_corners",
            ScenarioKind::FreeFall => "free_fall",
        }
    }

    /// Parse a preset from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }
}

fn default_name() -> String {
    "custom".to_string()
}

/// A fully specified run: cloth, pins, obstacle and step schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default = "default_name")]
    pub name: String,
    pub rows: usize,
    pub cols: usize,
    /// Timestep size (seconds).
    pub dt: Scalar,
    /// Number of steps to run.
    pub timesteps: u32,
    /// Export a frame after every step whose index is a multiple of this.
    /// Zero disables export.
    #[serde(default)]
    pub export_every: u32,
    /// Pinned particles as `[x, y]` grid coordinates.
    #[serde(default)]
    pub fixed: Vec<[usize; 2]>,
    #[serde(default)]
    pub params: ClothParams,
    /// Obstacle; `None` runs without collision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sphere: Option<SphereCollider>,
}

impl Scenario {
    /// 20×20 cloth dropped onto a sphere of radius 0.4 centered at
    /// `(0.5, 0.5, -0.4)`: 6000 steps of `1e-4` s, a frame every 20 steps.
    pub fn sphere_drape() -> Self {
        Self {
            name: ScenarioKind::SphereDrape.name().to_string(),
            rows: 20,
            cols: 20,
            dt: DEFAULT_DT,
            timesteps: 6000,
            export_every: 20,
            fixed: Vec::new(),
            params: ClothParams::default(),
            sphere: Some(SphereCollider::new(Vec3::new(0.5, 0.5, -0.4), 0.4)),
        }
    }

    /// 20×20 cloth pinned at both corners of its last row.
    pub fn hanging_corners() -> Self {
        let (rows, cols) = (20, 20);
        Self {
            name: ScenarioKind::HangingCorners.name().to_string(),
            rows,
            cols,
            dt: DEFAULT_DT,
            timesteps: 6000,
            export_every: 20,
            fixed: vec![[0, rows - 1], [cols - 1, rows - 1]],
            params: ClothParams::default(),
            sphere: None,
        }
    }

    /// 10×10 cloth with light borders falling freely.
    pub fn free_fall() -> Self {
        Self {
            name: ScenarioKind::FreeFall.name().to_string(),
            rows: 10,
            cols: 10,
            dt: DEFAULT_DT,
            timesteps: 2000,
            export_every: 50,
            fixed: Vec::new(),
            params: ClothParams::light_border(),
            sphere: None,
        }
    }

    /// Create a scenario from its kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::SphereDrape => Self::sphere_drape(),
            ScenarioKind::HangingCorners => Self::hanging_corners(),
            ScenarioKind::FreeFall => Self::free_fall(),
        }
    }

    /// Parse and validate a TOML scenario.
    pub fn from_toml_str(text: &str) -> WeftResult<Self> {
        let scenario: Self = toml::from_str(text)
            .map_err(|e| WeftError::Serialization(format!("invalid scenario file: {e}")))?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Load and validate a TOML scenario file.
    pub fn load(path: impl AsRef<Path>) -> WeftResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> WeftResult<String> {
        toml::to_string(self).map_err(|e| WeftError::Serialization(format!("TOML serialization failed: {e}")))
    }

    pub fn validate(&self) -> WeftResult<()> {
        if self.rows < MIN_GRID_DIM || self.cols < MIN_GRID_DIM {
            return Err(WeftError::InvalidConfig(format!(
                "scenario '{}': grid must be at least {MIN_GRID_DIM}x{MIN_GRID_DIM}, got {}x{}",
                self.name, self.rows, self.cols
            )));
        }
        if !(self.dt > 0.0 && self.dt.is_finite()) {
            return Err(WeftError::InvalidConfig(format!(
                "dt must be positive and finite, got {}",
                self.dt
            )));
        }
        if let Some(sphere) = &self.sphere {
            sphere.validate()?;
        }
        self.params.validate()
    }

    /// Validate, construct the cloth and apply the pins.
    ///
    /// Pins outside the grid are skipped with a warning.
    pub fn build(&self) -> WeftResult<ClothSimulation> {
        self.validate()?;
        let mut sim = ClothSimulation::new(self.rows, self.cols, self.params.clone())?;
        for &[x, y] in &self.fixed {
            if x >= self.cols || y >= self.rows {
                tracing::warn!(x, y, scenario = %self.name, "pin outside grid ignored");
                continue;
            }
            sim.set_fixed(x, y, true);
        }
        Ok(sim)
    }

    /// The obstacle to resolve against each step.
    pub fn collider(&self) -> Box<dyn Collider> {
        match self.sphere {
            Some(sphere) => Box::new(sphere),
            None => Box::new(NullCollider),
        }
    }
}
