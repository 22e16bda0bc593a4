//! Closed polygon shape templates.
//!
//! A `ClosedShape` is the resting silhouette of a body: an ordered ring
//! of local-space vertices, centered on the vertex mean and wound
//! counter-clockwise. The constructor normalizes both properties so
//! downstream code (derived-pose extraction, shape matching, pressure
//! normals) can rely on them.

use pliant_math::angles::rotate;
use pliant_math::polygon::polygon_area;
use pliant_math::Vec2;
use pliant_types::constants::DEGENERATE_EPSILON;
use pliant_types::{PliantError, PliantResult};

/// An ordered polygon template in local coordinates.
///
/// Invariants held after construction:
/// - at least 3 vertices, all finite
/// - counter-clockwise winding (positive shoelace area)
/// - vertex mean at the local origin
#[derive(Debug, Clone, PartialEq)]
pub struct ClosedShape {
    vertices: Vec<Vec2>,
}

impl ClosedShape {
    /// Builds a shape template from a vertex ring.
    ///
    /// Rejects rings with fewer than 3 vertices, non-finite
    /// coordinates, or a degenerate (near-zero) area. Clockwise input
    /// is reversed to counter-clockwise; the ring is re-centered on
    /// its vertex mean.
    pub fn new(mut vertices: Vec<Vec2>) -> PliantResult<Self> {
        if vertices.len() < 3 {
            return Err(PliantError::InvalidShape(format!(
                "a closed shape needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        for (i, v) in vertices.iter().enumerate() {
            if !v.is_finite() {
                return Err(PliantError::InvalidShape(format!(
                    "vertex {} is not finite: {:?}",
                    i, v
                )));
            }
        }

        let area = polygon_area(&vertices);
        if area.abs() < DEGENERATE_EPSILON {
            return Err(PliantError::InvalidShape(
                "polygon area is degenerate".into(),
            ));
        }
        if area < 0.0 {
            vertices.reverse();
        }

        let inv_n = 1.0 / vertices.len() as f32;
        let center = vertices.iter().copied().sum::<Vec2>() * inv_n;
        for v in &mut vertices {
            *v -= center;
        }

        Ok(Self { vertices })
    }

    /// The local vertex ring.
    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Area of the template at unit scale. Always positive, since the
    /// ring is normalized to counter-clockwise winding.
    pub fn area(&self) -> f32 {
        polygon_area(&self.vertices)
    }

    /// Transforms the ring into world space.
    pub fn transform_vertices(&self, pos: Vec2, angle: f32, scale: Vec2) -> Vec<Vec2> {
        self.vertices
            .iter()
            .map(|&v| pos + rotate(v * scale, angle))
            .collect()
    }

    /// Rest length of edge `i` (from vertex `i` to vertex `i+1`,
    /// wrapping) at the given scale.
    pub fn edge_rest_length(&self, i: usize, scale: Vec2) -> f32 {
        let n = self.vertices.len();
        let a = self.vertices[i % n] * scale;
        let b = self.vertices[(i + 1) % n] * scale;
        a.distance(b)
    }

    /// Rest distance between two arbitrary vertices at the given scale.
    pub fn rest_distance(&self, a: usize, b: usize, scale: Vec2) -> PliantResult<f32> {
        let n = self.vertices.len();
        if a >= n || b >= n {
            return Err(PliantError::InvalidShape(format!(
                "vertex index out of range: {} or {} >= {}",
                a, b, n
            )));
        }
        Ok((self.vertices[a] * scale).distance(self.vertices[b] * scale))
    }
}
