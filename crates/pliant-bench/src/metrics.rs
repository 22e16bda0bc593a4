//! Benchmark metrics — data collected during a benchmark run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a benchmark scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Number of steps executed.
    pub timesteps: u32,
    /// Average wall-clock time per step (seconds).
    pub avg_step_time: f64,
    /// Minimum step time.
    pub min_step_time: f64,
    /// Maximum step time.
    pub max_step_time: f64,
    /// Final kinetic energy (approaches zero for settling scenes).
    pub final_kinetic_energy: f64,
    /// Maximum centroid displacement from the initial positions.
    pub max_displacement: f32,
    /// Total narrow-phase contacts across the run.
    pub total_contacts: u64,
    /// Deepest penetration seen across the run.
    pub max_penetration: f32,
    /// Body count.
    pub body_count: usize,
    /// Total point-mass count.
    pub point_count: usize,
}

impl BenchMetrics {
    /// Formats the CSV header row.
    pub fn to_csv_header() -> String {
        "scenario,body_count,point_count,timesteps,total_wall_time_s,avg_step_ms,min_step_ms,max_step_ms,final_ke,max_displacement,total_contacts,max_penetration".to_string()
    }

    /// Formats this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{:.6},{:.4},{:.4},{:.4},{:.6e},{:.6},{},{:.6}",
            self.scenario,
            self.body_count,
            self.point_count,
            self.timesteps,
            self.total_wall_time,
            self.avg_step_time * 1000.0,
            self.min_step_time * 1000.0,
            self.max_step_time * 1000.0,
            self.final_kinetic_energy,
            self.max_displacement,
            self.total_contacts,
            self.max_penetration,
        )
    }

    /// Formats multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
