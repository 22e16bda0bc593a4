//! Gas-pressure component.
//!
//! Pushes the edge ring outward in proportion to the gas amount and
//! inversely to the enclosed area, producing balloon-like bodies.
//! Runs in two passes: vertex normals + enclosed area first, then the
//! per-edge force distribution.

use std::any::Any;

use pliant_math::polygon::polygon_area_abs;
use pliant_math::Vec2;
use pliant_types::constants::DEFAULT_AREA_FLOOR;
use pliant_types::{PliantError, PliantResult};

use crate::body::Body;
use crate::component::BodyComponent;

/// Gas-pressure force on a body's edge ring.
pub struct PressureComponent {
    gas: f32,
    area_floor: f32,
    /// Per-vertex outward normal cache, rebuilt each step.
    normals: Vec<Vec2>,
    /// Per-edge length cache, rebuilt each step.
    edge_lengths: Vec<f32>,
}

impl PressureComponent {
    /// Creates a pressure component with the given gas amount.
    pub fn new(gas: f32) -> Self {
        Self {
            gas,
            area_floor: DEFAULT_AREA_FLOOR,
            normals: Vec::new(),
            edge_lengths: Vec::new(),
        }
    }

    /// Overrides the minimum enclosed area. The floor prevents the
    /// pressure from diverging when the ring collapses.
    pub fn with_area_floor(mut self, floor: f32) -> Self {
        self.area_floor = floor;
        self
    }

    /// Current gas amount.
    #[inline]
    pub fn gas(&self) -> f32 {
        self.gas
    }

    /// Adjusts the gas amount (inflate/deflate).
    pub fn set_gas(&mut self, gas: f32) {
        self.gas = gas;
    }
}

impl BodyComponent for PressureComponent {
    fn prepare(&mut self, body: &Body) -> PliantResult<()> {
        if !self.gas.is_finite() {
            return Err(PliantError::InvalidConfig(format!(
                "gas amount must be finite, got {}",
                self.gas
            )));
        }
        if !(self.area_floor > 0.0) {
            return Err(PliantError::InvalidConfig(format!(
                "area floor must be positive, got {}",
                self.area_floor
            )));
        }
        let n = body.point_count();
        self.normals = vec![Vec2::ZERO; n];
        self.edge_lengths = vec![0.0; n];
        Ok(())
    }

    fn accumulate_internal(&mut self, body: &mut Body) {
        let n = body.point_masses.len();
        if n < 3 {
            return;
        }

        // Pass 1: vertex normals from the two flanking edges, edge
        // lengths, and the floored enclosed area.
        for i in 0..n {
            let prev = (i + n - 1) % n;
            let next = (i + 1) % n;
            let p_prev = body.point_masses[prev].position;
            let p_curr = body.point_masses[i].position;
            let p_next = body.point_masses[next].position;

            let edge_in = p_curr - p_prev;
            let edge_out = p_next - p_curr;
            let sum = edge_in + edge_out;
            // Outward under CCW winding.
            self.normals[i] = Vec2::new(sum.y, -sum.x).normalize_or_zero();
            self.edge_lengths[i] = edge_out.length();
        }

        let positions: Vec<Vec2> = body.point_masses.iter().map(|pm| pm.position).collect();
        let volume = polygon_area_abs(&positions).max(self.area_floor);

        // Pass 2: distribute each edge's pressure to its endpoints
        // along their vertex normals.
        for i in 0..n {
            let j = (i + 1) % n;
            let pressure = self.gas * self.edge_lengths[i] / volume;
            let force_i = self.normals[i] * pressure;
            let force_j = self.normals[j] * pressure;
            body.point_masses[i].apply_force(force_i);
            body.point_masses[j].apply_force(force_j);
        }
    }

    fn name(&self) -> &str {
        "pressure"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
