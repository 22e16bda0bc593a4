//! World configuration.
//!
//! Parameters that control the step pipeline: gravity, collision
//! tolerances, and the broad-phase grid resolution.

use serde::{Deserialize, Serialize};

use pliant_types::constants::{
    DEFAULT_GRID_CELLS, DEFAULT_PENETRATION_ITERATIONS, DEFAULT_PENETRATION_THRESHOLD, GRAVITY,
    MAX_GRID_CELLS,
};
use pliant_types::{PliantError, PliantResult};

/// Configuration for a [`World`](crate::world::World).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Global gravity acceleration `[gx, gy]` in m/s².
    pub gravity: [f32; 2],

    /// Maximum penetration depth resolved per impulse pass. Deeper
    /// contacts are counted and left for later iterations.
    pub penetration_threshold: f32,

    /// Narrow-phase + resolution passes per step (≥ 1).
    pub penetration_iterations: u32,

    /// Broad-phase grid resolution per axis (1–64).
    pub grid_cells: u32,

    /// Number of materials in the pair table.
    pub material_count: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: [0.0, -GRAVITY],
            penetration_threshold: DEFAULT_PENETRATION_THRESHOLD,
            penetration_iterations: DEFAULT_PENETRATION_ITERATIONS,
            grid_cells: DEFAULT_GRID_CELLS,
            material_count: 1,
        }
    }
}

impl WorldConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> PliantResult<()> {
        if !(self.gravity[0].is_finite() && self.gravity[1].is_finite()) {
            return Err(PliantError::InvalidConfig(format!(
                "gravity must be finite, got {:?}",
                self.gravity
            )));
        }
        if !(self.penetration_threshold > 0.0) {
            return Err(PliantError::InvalidConfig(format!(
                "penetration_threshold must be positive, got {}",
                self.penetration_threshold
            )));
        }
        if self.penetration_iterations < 1 {
            return Err(PliantError::InvalidConfig(
                "penetration_iterations must be >= 1".into(),
            ));
        }
        if self.grid_cells < 1 || self.grid_cells > MAX_GRID_CELLS {
            return Err(PliantError::InvalidConfig(format!(
                "grid_cells must be in 1..={}, got {}",
                MAX_GRID_CELLS, self.grid_cells
            )));
        }
        if self.material_count < 1 {
            return Err(PliantError::InvalidConfig(
                "material_count must be >= 1".into(),
            ));
        }
        Ok(())
    }
}
