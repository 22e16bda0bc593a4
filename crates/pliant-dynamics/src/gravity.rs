//! Constant-acceleration external component.
//!
//! The world applies its own global gravity during the external force
//! phase; attach this component for additional per-body fields (a
//! balloon's lift, a local attractor).

use std::any::Any;

use pliant_math::Vec2;
use pliant_types::{PliantError, PliantResult};

use crate::body::Body;
use crate::component::BodyComponent;

/// Per-body constant acceleration field.
pub struct GravityComponent {
    acceleration: Vec2,
}

impl GravityComponent {
    /// Creates a gravity component with the given acceleration vector.
    pub fn new(acceleration: Vec2) -> Self {
        Self { acceleration }
    }
}

impl BodyComponent for GravityComponent {
    fn prepare(&mut self, _body: &Body) -> PliantResult<()> {
        if !self.acceleration.is_finite() {
            return Err(PliantError::InvalidConfig(format!(
                "gravity acceleration must be finite, got {:?}",
                self.acceleration
            )));
        }
        Ok(())
    }

    fn accumulate_external(&mut self, body: &mut Body) {
        body.apply_acceleration(self.acceleration);
    }

    fn name(&self) -> &str {
        "gravity"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
