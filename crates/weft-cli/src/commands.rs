//! CLI command implementations.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use weft_bench::{BenchmarkMetrics, BenchmarkRunner, Scenario, ScenarioKind};
use weft_grid::ClothParams;
use weft_render::{CsvFrameExporter, HeadlessRenderer, JsonFrameExporter, Renderer};
use weft_telemetry::{EventBus, JsonLinesSink, TracingSink};

use crate::{FrameFormat, ParamsPreset};

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn available_scenarios() -> String {
    ScenarioKind::all()
        .iter()
        .map(|k| k.name())
        .collect::<Vec<_>>()
        .join(", ")
}

fn preset(name: &str) -> Result<Scenario, Box<dyn std::error::Error>> {
    ScenarioKind::from_name(name)
        .map(Scenario::from_kind)
        .ok_or_else(|| format!("Unknown scenario: '{name}'. Available: {}", available_scenarios()).into())
}

/// Run one scenario, exporting frames to `output_dir`.
/// Telemetry bus for `simulate`, or `None` when no sink was requested.
fn event_bus(events_path: Option<&str>, trace_events: bool) -> std::io::Result<Option<EventBus>> {
    if events_path.is_none() && !trace_events {
        return Ok(None);
    }
    let mut bus = EventBus::new();
    if let Some(path) = events_path {
        bus.add_sink(Box::new(JsonLinesSink::new(BufWriter::new(File::create(path)?))));
    }
    if trace_events {
        bus.add_sink(Box::new(TracingSink::new()));
    }
    Ok(Some(bus))
}

pub fn simulate(
    config_path: Option<&str>,
    scenario_name: &str,
    steps: Option<u32>,
    output_dir: &str,
    format: FrameFormat,
    events_path: Option<&str>,
    trace_events: bool,
) -> CliResult {
    println!("weft Simulation");
    println!("───────────────");

    let mut scenario = match config_path {
        Some(path) => {
            println!("Config:    {path}");
            Scenario::load(path)?
        }
        None => preset(scenario_name)?,
    };
    if let Some(n) = steps {
        scenario.timesteps = n;
    }

    println!("Scenario:  {}", scenario.name);
    println!("Grid:      {} x {} (rows x cols)", scenario.rows, scenario.cols);
    println!("Steps:     {} (dt = {:e} s)", scenario.timesteps, scenario.dt);
    println!();

    let mut renderer: Box<dyn Renderer> = match format {
        FrameFormat::Csv => Box::new(CsvFrameExporter::new(output_dir)),
        FrameFormat::Json => Box::new(JsonFrameExporter::new(Path::new(output_dir).join("animation.json"))),
        FrameFormat::None => Box::new(HeadlessRenderer::new()),
    };

    let mut bus = event_bus(events_path, trace_events)?;

    let metrics = BenchmarkRunner::run_with(&scenario, renderer.as_mut(), bus.as_mut())?;

    println!("  Wall time:     {:.3}s", metrics.total_wall_time);
    println!("  Avg step:      {:.4}ms", metrics.avg_step_time * 1000.0);
    println!("  Frames:        {}", metrics.frames_exported);
    println!("  Peak contacts: {}", metrics.peak_contacts);
    println!("  Final KE:      {:.6e}", metrics.final_kinetic_energy);
    if format != FrameFormat::None {
        println!();
        println!("Frames written to: {output_dir}");
    }
    Ok(())
}

/// Run built-in scenarios.
pub fn benchmark(scenario_name: &str, steps: Option<u32>, output_path: Option<&str>) -> CliResult {
    println!("weft Benchmark Suite");
    println!("════════════════════");
    println!();

    let scenarios: Vec<Scenario> = if scenario_name == "all" {
        ScenarioKind::all().iter().map(|&k| Scenario::from_kind(k)).collect()
    } else {
        vec![preset(scenario_name)?]
    };

    let mut all_metrics = Vec::new();
    for mut scenario in scenarios {
        if let Some(n) = steps {
            scenario.timesteps = n;
        }
        println!(
            "Running: {} ({} particles, {} steps)",
            scenario.name,
            scenario.rows * scenario.cols,
            scenario.timesteps,
        );

        let metrics = BenchmarkRunner::run(&scenario).map_err(|e| format!("Benchmark failed: {e}"))?;

        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg step:      {:.4}ms", metrics.avg_step_time * 1000.0);
        println!("  Final KE:      {:.6e}", metrics.final_kinetic_energy);
        println!("  Max displace:  {:.4}m", metrics.max_displacement);
        println!();

        all_metrics.push(metrics);
    }

    let csv = BenchmarkMetrics::to_csv(&all_metrics);
    if let Some(path) = output_path {
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{csv}");
    }
    Ok(())
}

/// Validate a scenario file and report its stability margin.
pub fn validate(path: &str) -> CliResult {
    println!("weft Validator");
    println!("──────────────");
    println!();

    let scenario = Scenario::load(path)?;
    let sim = scenario.build()?;
    let critical = sim.critical_time_scale();

    println!("Scenario:   {}", scenario.name);
    println!("Particles:  {}", sim.grid().len());
    println!("Springs:    {}", sim.grid().edges().len());
    println!("Pinned:     {}", sim.grid().particles().iter().filter(|p| p.is_fixed()).count());
    println!("Collider:   {}", scenario.collider().name());
    println!("dt:         {:e} s (critical {:e} s)", scenario.dt, critical);
    if scenario.dt > critical {
        println!("⚠️  dt exceeds the critical time scale; the run may diverge.");
    } else {
        println!("✅ Scenario is valid.");
    }
    Ok(())
}

/// Print a parameter preset as TOML.
pub fn params(preset: ParamsPreset) -> CliResult {
    let params = match preset {
        ParamsPreset::Default => ClothParams::default(),
        ParamsPreset::LightBorder => ClothParams::light_border(),
    };
    print!("{}", toml::to_string_pretty(&params)?);
    Ok(())
}
