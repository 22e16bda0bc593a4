//! Spring-damper network component.
//!
//! Holds pairwise spring entries between point masses of one body:
//! the perimeter ring (built from the shape's edges) plus optional
//! interior shape-holding springs.

use std::any::Any;

use pliant_types::constants::DEGENERATE_EPSILON;
use pliant_types::{PliantError, PliantResult};

use crate::body::Body;
use crate::component::BodyComponent;
use crate::point_mass::PointMass;

/// One spring-damper between two point masses of a body.
#[derive(Debug, Clone, Copy)]
pub struct SpringEntry {
    /// Index of the first point mass.
    pub a: usize,
    /// Index of the second point mass.
    pub b: usize,
    /// Rest length. `NAN` until resolved against the body's shape
    /// during `prepare`.
    pub rest: f32,
    /// Spring stiffness (non-negative).
    pub stiffness: f32,
    /// Damping coefficient (non-negative).
    pub damping: f32,
}

/// Applies one spring-damper force pair.
///
/// Force magnitude `k·(len − rest) + c·(û · v_rel)` along the spring
/// axis, equal and opposite on the two endpoints. Degenerate
/// (zero-length) springs contribute nothing.
pub fn apply_spring_force(pa: &mut PointMass, pb: &mut PointMass, rest: f32, k: f32, c: f32) {
    let d = pb.position - pa.position;
    let len_sq = d.length_squared();
    if len_sq < DEGENERATE_EPSILON {
        return;
    }
    let len = len_sq.sqrt();
    let axis = d / len;
    let rel_vel = pb.velocity - pa.velocity;
    let magnitude = k * (len - rest) + c * axis.dot(rel_vel);
    let force = axis * magnitude;
    pa.apply_force(force);
    pb.apply_force(-force);
}

/// Spring network component.
pub struct SpringComponent {
    springs: Vec<SpringEntry>,
    edge_ring: Option<(f32, f32)>,
}

impl SpringComponent {
    /// Creates an empty network. Add entries with
    /// [`SpringComponent::add_spring`] or [`SpringComponent::add_internal`].
    pub fn new() -> Self {
        Self {
            springs: Vec::new(),
            edge_ring: None,
        }
    }

    /// Creates a network that springs every perimeter edge of the body
    /// with the given stiffness and damping. Rest lengths come from
    /// the shape template during `prepare`.
    pub fn edge_ring(stiffness: f32, damping: f32) -> Self {
        Self {
            springs: Vec::new(),
            edge_ring: Some((stiffness, damping)),
        }
    }

    /// Adds an interior spring between vertices `a` and `b`; the rest
    /// length is resolved from the shape template during `prepare`.
    pub fn add_internal(mut self, a: usize, b: usize, stiffness: f32, damping: f32) -> Self {
        self.springs.push(SpringEntry {
            a,
            b,
            rest: f32::NAN,
            stiffness,
            damping,
        });
        self
    }

    /// Adds a fully-specified spring entry.
    pub fn add_spring(mut self, entry: SpringEntry) -> Self {
        self.springs.push(entry);
        self
    }

    /// The resolved spring entries.
    pub fn springs(&self) -> &[SpringEntry] {
        &self.springs
    }
}

impl Default for SpringComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl BodyComponent for SpringComponent {
    fn prepare(&mut self, body: &Body) -> PliantResult<()> {
        let n = body.point_count();

        if let Some((stiffness, damping)) = self.edge_ring.take() {
            let mut ring = Vec::with_capacity(n);
            for i in 0..n {
                ring.push(SpringEntry {
                    a: i,
                    b: (i + 1) % n,
                    rest: body.base_shape().edge_rest_length(i, body.scale),
                    stiffness,
                    damping,
                });
            }
            // Ring springs precede interior springs.
            ring.append(&mut self.springs);
            self.springs = ring;
        }

        for spring in &mut self.springs {
            if spring.a >= n || spring.b >= n {
                return Err(PliantError::InvalidBody(format!(
                    "spring endpoint out of range: ({}, {}) with {} points",
                    spring.a, spring.b, n
                )));
            }
            if spring.a == spring.b {
                return Err(PliantError::InvalidBody(format!(
                    "spring connects vertex {} to itself",
                    spring.a
                )));
            }
            if !(spring.stiffness >= 0.0) || !(spring.damping >= 0.0) {
                return Err(PliantError::InvalidConfig(format!(
                    "spring stiffness and damping must be non-negative, got k={} c={}",
                    spring.stiffness, spring.damping
                )));
            }
            if spring.rest.is_nan() {
                spring.rest = body
                    .base_shape()
                    .rest_distance(spring.a, spring.b, body.scale)?;
            }
        }
        Ok(())
    }

    fn accumulate_internal(&mut self, body: &mut Body) {
        for spring in &self.springs {
            let lo = spring.a.min(spring.b);
            let hi = spring.a.max(spring.b);
            let (head, tail) = body.point_masses.split_at_mut(hi);
            let (pa, pb) = if spring.a < spring.b {
                (&mut head[lo], &mut tail[0])
            } else {
                (&mut tail[0], &mut head[lo])
            };
            apply_spring_force(pa, pb, spring.rest, spring.stiffness, spring.damping);
        }
    }

    fn name(&self) -> &str {
        "spring"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
