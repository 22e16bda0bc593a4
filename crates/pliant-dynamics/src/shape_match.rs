//! Shape-matching component.
//!
//! Pulls each point mass toward its position in the undeformed shape
//! transformed by the body's current derived pose. This restores the
//! rest silhouette without forbidding deformation, and gives kinematic
//! bodies their externally-driven stiffness.

use std::any::Any;

use pliant_math::angles::rotate;
use pliant_types::{PliantError, PliantResult};

use crate::body::Body;
use crate::component::BodyComponent;

/// Rest-silhouette restoring force.
pub struct ShapeMatchingComponent {
    stiffness: f32,
    damping: f32,
}

impl ShapeMatchingComponent {
    /// Creates a shape-matching component.
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self { stiffness, damping }
    }
}

impl BodyComponent for ShapeMatchingComponent {
    fn prepare(&mut self, _body: &Body) -> PliantResult<()> {
        if !(self.stiffness >= 0.0) || !(self.damping >= 0.0) {
            return Err(PliantError::InvalidConfig(format!(
                "shape matching stiffness and damping must be non-negative, got k={} c={}",
                self.stiffness, self.damping
            )));
        }
        Ok(())
    }

    fn accumulate_internal(&mut self, body: &mut Body) {
        // Targets use the derived pose of the current step.
        let center = body.derived_pos;
        let angle = body.derived_angle;
        let scale = body.scale;

        let n = body.point_masses.len();
        for i in 0..n {
            let local = body.base_shape().vertices()[i] * scale;
            let target = center + rotate(local, angle);
            let pm = &mut body.point_masses[i];
            let force = (target - pm.position) * self.stiffness - pm.velocity * self.damping;
            pm.apply_force(force);
        }
    }

    fn name(&self) -> &str {
        "shape_matching"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
