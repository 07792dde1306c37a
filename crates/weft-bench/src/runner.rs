//! Benchmark runner: steps a scenario and collects metrics.

use std::time::Instant;

use weft_render::{HeadlessRenderer, RenderFrame, Renderer};
use weft_telemetry::{EventBus, EventKind, SimulationEvent};
use weft_types::{WeftError, WeftResult};

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::Scenario;

/// Runs scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a scenario without frame output or telemetry.
    pub fn run(scenario: &Scenario) -> WeftResult<BenchmarkMetrics> {
        Self::run_with(scenario, &mut HeadlessRenderer::new(), None)
    }

    /// Run a scenario, submitting frames to `renderer` and events to `bus`.
    ///
    /// The bus first receives a `Custom` event labelled `"scenario"` whose
    /// payload is the scenario as JSON.
    ///
    /// A frame is captured after step `i` whenever `i % export_every == 0`,
    /// and tagged with `i`.
    pub fn run_with(
        scenario: &Scenario,
        renderer: &mut dyn Renderer,
        mut bus: Option<&mut EventBus>,
    ) -> WeftResult<BenchmarkMetrics> {
        let mut sim = scenario.build()?;
        let collider = scenario.collider();

        let critical = sim.critical_time_scale();
        if scenario.dt > critical {
            tracing::warn!(
                dt = scenario.dt,
                critical,
                scenario = %scenario.name,
                "timestep exceeds the critical time scale; the run may diverge"
            );
        }

        renderer.init(scenario.rows, scenario.cols)?;
        let rest = sim.positions();

        tracing::info!(
            scenario = %scenario.name,
            rows = scenario.rows,
            cols = scenario.cols,
            timesteps = scenario.timesteps,
            collider = collider.name(),
            renderer = renderer.name(),
            "run started"
        );

        if let Some(bus) = bus.as_deref() {
            let payload = serde_json::to_string(scenario)
                .map_err(|e| WeftError::Serialization(format!("scenario encoding failed: {e}")))?;
            bus.emit(SimulationEvent::new(
                0,
                EventKind::Custom {
                    label: "scenario".to_string(),
                    payload,
                },
            ));
        }

        let mut step_times = Vec::with_capacity(scenario.timesteps as usize);
        let mut peak_contacts = 0;
        let mut total_clamped: u64 = 0;
        let total_start = Instant::now();

        for i in 0..scenario.timesteps {
            let step = u64::from(i);
            if let Some(bus) = bus.as_deref() {
                bus.emit(SimulationEvent::new(step, EventKind::TimestepBegin { sim_time: sim.sim_time() }));
            }

            let result = sim.step(scenario.dt, collider.as_ref());
            step_times.push(result.wall_time);
            peak_contacts = peak_contacts.max(result.contacts.resolved_count);
            total_clamped += u64::from(result.clamped_springs);

            let export = scenario.export_every > 0 && i % scenario.export_every == 0;
            if export {
                renderer.submit_frame(&RenderFrame::capture(step, sim.grid()))?;
            }

            if let Some(bus) = bus.as_deref_mut() {
                if result.contacts.resolved_count > 0 {
                    bus.emit(SimulationEvent::new(
                        step,
                        EventKind::Contacts {
                            contact_count: result.contacts.resolved_count,
                            max_penetration: result.contacts.max_penetration,
                        },
                    ));
                }
                if result.clamped_springs > 0 {
                    bus.emit(SimulationEvent::new(
                        step,
                        EventKind::StretchClamp {
                            clamped_springs: result.clamped_springs,
                        },
                    ));
                }
                if export {
                    bus.emit(SimulationEvent::new(
                        step,
                        EventKind::Energy {
                            kinetic: sim.kinetic_energy(),
                            potential: sim.potential_energy(),
                            elastic: result.elastic_energy,
                        },
                    ));
                }
                bus.emit(SimulationEvent::new(step, EventKind::TimestepEnd { wall_time: result.wall_time }));
                bus.flush();
            }
        }

        let total_wall_time = total_start.elapsed().as_secs_f64();
        renderer.finalize()?;
        if let Some(bus) = bus {
            bus.finish();
        }

        let max_displacement = sim
            .positions()
            .iter()
            .zip(&rest)
            .map(|(p, r)| p.distance(*r))
            .fold(0.0, f64::max);

        let avg_step = if step_times.is_empty() {
            0.0
        } else {
            step_times.iter().sum::<f64>() / step_times.len() as f64
        };
        let min_step = step_times.iter().copied().fold(f64::INFINITY, f64::min);
        let max_step = step_times.iter().copied().fold(0.0, f64::max);

        let metrics = BenchmarkMetrics {
            scenario: scenario.name.clone(),
            rows: scenario.rows,
            cols: scenario.cols,
            spring_count: sim.grid().edges().len(),
            timesteps: scenario.timesteps,
            total_wall_time,
            avg_step_time: avg_step,
            min_step_time: if step_times.is_empty() { 0.0 } else { min_step },
            max_step_time: max_step,
            final_kinetic_energy: sim.kinetic_energy(),
            max_displacement,
            peak_contacts,
            total_clamped_springs: total_clamped,
            frames_exported: renderer.frame_count(),
        };

        tracing::info!(
            scenario = %metrics.scenario,
            wall_time = metrics.total_wall_time,
            frames = metrics.frames_exported,
            "run finished"
        );

        Ok(metrics)
    }
}
