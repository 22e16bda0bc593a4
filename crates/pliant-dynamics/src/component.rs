//! Body component trait — the pluggable force-contributor abstraction.
//!
//! Components are stateful objects attached to exactly one body. During
//! the force phase the world asks each body to run its components in
//! attachment order; components only ever *add* to the point-mass force
//! accumulators.

use std::any::Any;

use pliant_types::PliantResult;

use crate::body::Body;

/// Trait for per-body force contributors.
///
/// The body calls these methods in order each step:
///
/// ```text
/// component.prepare(body)?;            // once, at attach time
/// loop {
///     component.accumulate_external(body);
///     component.accumulate_internal(body);
/// }
/// ```
///
/// At least one of the two accumulate methods is overridden per
/// variant.
///
/// # Implementations
///
/// - [`SpringComponent`](crate::spring::SpringComponent) — pairwise spring-damper network
/// - [`PressureComponent`](crate::pressure::PressureComponent) — gas pressure on the edge ring
/// - [`ShapeMatchingComponent`](crate::shape_match::ShapeMatchingComponent) — rest-silhouette restoration
/// - [`GravityComponent`](crate::gravity::GravityComponent) — constant external acceleration
pub trait BodyComponent: Send {
    /// Validates configuration against the body and builds caches
    /// (rest lengths, normal buffers). Called once when attached.
    fn prepare(&mut self, body: &Body) -> PliantResult<()> {
        let _ = body;
        Ok(())
    }

    /// Contributes internal forces (springs, pressure, shape memory).
    fn accumulate_internal(&mut self, body: &mut Body) {
        let _ = body;
    }

    /// Contributes external forces (gravity, wind).
    fn accumulate_external(&mut self, body: &mut Body) {
        let _ = body;
    }

    /// Returns the component's name.
    fn name(&self) -> &str;

    /// Downcasting support for [`Body::component`](crate::body::Body::component).
    fn as_any(&self) -> &dyn Any;

    /// Mutable downcasting support.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// No-op component for tests and benchmarks.
pub struct NullComponent;

impl BodyComponent for NullComponent {
    fn name(&self) -> &str {
        "null_component"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
