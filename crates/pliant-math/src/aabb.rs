//! Axis-aligned bounding boxes.
//!
//! An `Aabb` is either a valid box (`min <= max` on both axes) or the
//! degenerate inverted box produced by [`Aabb::clear`], which contains
//! nothing and intersects nothing. The inverted state lets a box be
//! rebuilt incrementally with [`Aabb::expand_to_include`] without a
//! special first-point case.

use glam::Vec2;

/// Axis-aligned bounding box in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec2,
    /// Maximum corner.
    pub max: Vec2,
}

impl Aabb {
    /// Creates a box from two corners. The corners are sorted, so the
    /// result is always valid.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// The degenerate inverted box: contains nothing, intersects nothing.
    pub fn inverted() -> Self {
        Self {
            min: Vec2::splat(f32::INFINITY),
            max: Vec2::splat(f32::NEG_INFINITY),
        }
    }

    /// Creates a box from a position and a size.
    pub fn from_rect(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos, pos + size)
    }

    /// Returns the box as `(position, size)`.
    pub fn to_rect(&self) -> (Vec2, Vec2) {
        (self.min, self.max - self.min)
    }

    /// Resets to the inverted state.
    pub fn clear(&mut self) {
        *self = Self::inverted();
    }

    /// True when the box holds at least one point (`min <= max`).
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    /// Grows the box to include `point`.
    pub fn expand_to_include(&mut self, point: Vec2) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Grows the box by `margin` on every side.
    pub fn expand_by(&mut self, margin: Vec2) {
        self.min -= margin;
        self.max += margin;
    }

    /// Smallest box containing both `self` and `other`.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// True when the boxes overlap. An inverted box intersects nothing.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// True when `point` lies inside or on the boundary.
    /// An inverted box contains nothing.
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Box center. Meaningless for an inverted box.
    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Box extents. Meaningless for an inverted box.
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::inverted()
    }
}
