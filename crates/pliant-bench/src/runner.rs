//! Benchmark runner — executes scenarios and collects metrics.

use std::time::Instant;

use pliant_math::Vec2;
use pliant_types::PliantResult;

use crate::metrics::BenchMetrics;
use crate::scenarios::{Scenario, ScenarioKind};

/// Runs benchmark scenarios and collects metrics.
pub struct BenchRunner;

impl BenchRunner {
    /// Runs a single scenario to completion.
    pub fn run(scenario: &Scenario) -> PliantResult<BenchMetrics> {
        let mut world = scenario.build()?;

        let initial_centroids: Vec<Vec2> =
            world.bodies().iter().map(|b| b.derived_pos).collect();

        let mut step_times: Vec<f64> = Vec::with_capacity(scenario.timesteps as usize);
        let mut total_contacts: u64 = 0;
        let mut max_penetration: f32 = 0.0;

        let total_start = Instant::now();
        for _ in 0..scenario.timesteps {
            let summary = world.update(scenario.dt)?;
            step_times.push(summary.wall_time);
            total_contacts += summary.contacts_detected as u64;
            max_penetration = max_penetration.max(summary.max_penetration);
        }
        let total_wall_time = total_start.elapsed().as_secs_f64();
        world.telemetry_mut().end_run();

        let max_displacement = world
            .bodies()
            .iter()
            .zip(&initial_centroids)
            .map(|(b, &start)| (b.derived_pos - start).length())
            .fold(0.0_f32, f32::max);

        let avg_step = if step_times.is_empty() {
            0.0
        } else {
            step_times.iter().sum::<f64>() / step_times.len() as f64
        };
        let min_step = step_times.iter().copied().fold(f64::MAX, f64::min);
        let max_step = step_times.iter().copied().fold(0.0, f64::max);

        Ok(BenchMetrics {
            scenario: scenario.kind.name().to_string(),
            total_wall_time,
            timesteps: scenario.timesteps,
            avg_step_time: avg_step,
            min_step_time: min_step,
            max_step_time: max_step,
            final_kinetic_energy: world.kinetic_energy(),
            max_displacement,
            total_contacts,
            max_penetration,
            body_count: world.bodies().len(),
            point_count: world.bodies().iter().map(|b| b.point_count()).sum(),
        })
    }

    /// Runs all scenarios and returns metrics for each.
    pub fn run_all() -> PliantResult<Vec<BenchMetrics>> {
        let mut results = Vec::new();
        for &kind in ScenarioKind::all() {
            let scenario = Scenario::from_kind(kind);
            results.push(Self::run(&scenario)?);
        }
        Ok(results)
    }
}
