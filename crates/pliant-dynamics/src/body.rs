//! Deformable bodies — ordered rings of point masses.
//!
//! A `Body` owns its point masses and force components. The world
//! drives it through the step phases (force accumulation, integration,
//! pose derivation, AABB update); the body never advances itself.
//!
//! All geometry queries operate in world coordinates and are O(N) in
//! the vertex count.

use std::f32::consts::{PI, TAU};

use pliant_geom::ClosedShape;
use pliant_math::angles::wrap_angle;
use pliant_math::polygon::{edge_outward_normal, segment_intersection, vectors_are_ccw};
use pliant_math::{Aabb, Vec2};
use pliant_types::constants::{DEFAULT_VELOCITY_DAMPING, DEGENERATE_EPSILON};
use pliant_types::{BodyId, MaterialId, PliantError, PliantResult};

use crate::component::BodyComponent;
use crate::point_mass::PointMass;

/// Result of projecting a point onto one body edge.
#[derive(Debug, Clone, Copy)]
pub struct ClosestPoint {
    /// Index of the edge (from vertex `edge` to vertex `edge + 1`, wrapping).
    pub edge: usize,
    /// Parametric position on the edge, clamped to `[0, 1]`.
    pub t: f32,
    /// World-space point on the edge closest to the query point.
    pub point: Vec2,
    /// Outward edge normal.
    pub normal: Vec2,
    /// Squared distance from the query point.
    pub distance_sq: f32,
}

impl ClosestPoint {
    /// Distance from the query point.
    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance_sq.sqrt()
    }
}

/// A closest-edge query hit: the flanking point-mass indices plus the
/// projection data.
#[derive(Debug, Clone, Copy)]
pub struct EdgeHit {
    /// Index of the point mass at the edge start.
    pub v0: usize,
    /// Index of the point mass at the edge end.
    pub v1: usize,
    /// Parametric position on the edge.
    pub t: f32,
    /// World-space point on the edge.
    pub point: Vec2,
    /// Outward edge normal.
    pub normal: Vec2,
    /// Distance from the query point.
    pub distance: f32,
}

/// A deformable polygon body.
pub struct Body {
    id: BodyId,
    base_shape: ClosedShape,
    /// The point-mass ring, one per base-shape vertex, in ring order.
    pub point_masses: Vec<PointMass>,
    components: Vec<Box<dyn BodyComponent>>,

    /// Current world-space bounding box, maintained by the step loop.
    pub aabb: Aabb,
    /// Per-axis template scale.
    pub scale: Vec2,

    /// Derived centroid position (mean of point positions).
    pub derived_pos: Vec2,
    /// Derived linear velocity (mean of point velocities).
    pub derived_vel: Vec2,
    /// Derived orientation angle.
    pub derived_angle: f32,
    /// Derived angular velocity.
    pub derived_omega: f32,
    last_angle: f32,

    /// Per-step velocity damping factor in `(0, 1]`.
    pub vel_damping: f32,

    /// Static bodies skip the entire per-step pipeline.
    pub is_static: bool,
    /// Kinematic bodies are driven externally via
    /// [`Body::set_kinematic_pose`] and skip pose derivation.
    pub is_kinematic: bool,
    /// Pinned bodies keep their externally-set derived position.
    pub is_pinned: bool,
    /// When false, the derived angle is left untouched by derivation.
    pub free_rotate: bool,

    /// Material index into the world's material pair table.
    pub material: MaterialId,
    /// Bodies collide when the AND of their masks is non-zero.
    pub collision_mask: u32,
    /// Free-form user tag.
    pub tag: u64,
}

impl Body {
    /// Builds a body from a shape template with one broadcast mass.
    pub fn new(shape: ClosedShape, mass: f32, position: Vec2, angle: f32) -> PliantResult<Self> {
        let masses = vec![mass; shape.vertex_count()];
        Self::with_masses(shape, &masses, position, angle)
    }

    /// Builds a body with per-vertex masses.
    ///
    /// The mass list length must match the shape's vertex count.
    pub fn with_masses(
        shape: ClosedShape,
        masses: &[f32],
        position: Vec2,
        angle: f32,
    ) -> PliantResult<Self> {
        if masses.len() != shape.vertex_count() {
            return Err(PliantError::InvalidBody(format!(
                "mass list length ({}) != vertex count ({})",
                masses.len(),
                shape.vertex_count()
            )));
        }
        if !(position.is_finite() && angle.is_finite()) {
            return Err(PliantError::InvalidBody(
                "position and angle must be finite".into(),
            ));
        }
        for (i, &m) in masses.iter().enumerate() {
            if m.is_nan() {
                return Err(PliantError::InvalidBody(format!("mass {} is NaN", i)));
            }
        }

        let scale = Vec2::ONE;
        let world = shape.transform_vertices(position, angle, scale);
        let point_masses = world
            .iter()
            .zip(masses)
            .map(|(&p, &m)| PointMass::new(m, p))
            .collect();

        let mut body = Self {
            id: BodyId(0),
            base_shape: shape,
            point_masses,
            components: Vec::new(),
            aabb: Aabb::inverted(),
            scale,
            derived_pos: position,
            derived_vel: Vec2::ZERO,
            derived_angle: angle,
            derived_omega: 0.0,
            last_angle: angle,
            vel_damping: DEFAULT_VELOCITY_DAMPING,
            is_static: false,
            is_kinematic: false,
            is_pinned: false,
            free_rotate: true,
            material: MaterialId(0),
            collision_mask: u32::MAX,
            tag: 0,
        };
        body.update_aabb(0.0);
        Ok(body)
    }

    /// Sets the per-axis template scale and re-templates the ring.
    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        let pos = self.derived_pos;
        let angle = self.derived_angle;
        self.set_position_angle(pos, angle);
        self
    }

    /// Marks the body static and freezes every point mass.
    pub fn make_static(mut self) -> Self {
        self.is_static = true;
        for pm in &mut self.point_masses {
            pm.mass = f32::INFINITY;
            pm.velocity = Vec2::ZERO;
        }
        self
    }

    /// Marks the body kinematic (externally driven pose).
    pub fn kinematic(mut self) -> Self {
        self.is_kinematic = true;
        self
    }

    /// Sets the material index.
    pub fn with_material(mut self, material: MaterialId) -> Self {
        self.material = material;
        self
    }

    /// Sets the collision bitmask.
    pub fn with_collision_mask(mut self, mask: u32) -> Self {
        self.collision_mask = mask;
        self
    }

    /// Sets the user tag.
    pub fn with_tag(mut self, tag: u64) -> Self {
        self.tag = tag;
        self
    }

    /// Attaches a component, running its `prepare` validation.
    /// Components fire in attachment order during the force phase.
    pub fn attach_component(&mut self, mut component: Box<dyn BodyComponent>) -> PliantResult<()> {
        component.prepare(self)?;
        self.components.push(component);
        Ok(())
    }

    /// Builder form of [`Body::attach_component`].
    pub fn with_component(mut self, component: Box<dyn BodyComponent>) -> PliantResult<Self> {
        self.attach_component(component)?;
        Ok(self)
    }

    /// The body's world handle. Zero until added to a world.
    #[inline]
    pub fn id(&self) -> BodyId {
        self.id
    }

    /// Assigns the world handle. Called by the world on add.
    pub fn assign_id(&mut self, id: BodyId) {
        self.id = id;
    }

    /// The shape template.
    #[inline]
    pub fn base_shape(&self) -> &ClosedShape {
        &self.base_shape
    }

    /// Number of point masses (= base shape vertex count).
    #[inline]
    pub fn point_count(&self) -> usize {
        self.point_masses.len()
    }

    /// Current world-space vertex positions, in ring order.
    pub fn vertices(&self) -> Vec<Vec2> {
        self.point_masses.iter().map(|pm| pm.position).collect()
    }

    /// Looks up an attached component by concrete type.
    pub fn component<C: BodyComponent + 'static>(&self) -> Option<&C> {
        self.components
            .iter()
            .find_map(|c| c.as_any().downcast_ref::<C>())
    }

    /// Mutable component lookup by concrete type.
    pub fn component_mut<C: BodyComponent + 'static>(&mut self) -> Option<&mut C> {
        self.components
            .iter_mut()
            .find_map(|c| c.as_any_mut().downcast_mut::<C>())
    }

    // ─── Step phases ──────────────────────────────────────────

    /// Zeroes every force accumulator.
    pub fn clear_forces(&mut self) {
        for pm in &mut self.point_masses {
            pm.force = Vec2::ZERO;
        }
    }

    /// Runs each component's internal-force contribution in
    /// attachment order.
    pub fn accumulate_internal_forces(&mut self) {
        let mut components = std::mem::take(&mut self.components);
        for component in &mut components {
            component.accumulate_internal(self);
        }
        self.components = components;
    }

    /// Runs each component's external-force contribution in
    /// attachment order.
    pub fn accumulate_external_forces(&mut self) {
        let mut components = std::mem::take(&mut self.components);
        for component in &mut components {
            component.accumulate_external(self);
        }
        self.components = components;
    }

    /// Applies a global acceleration as a force on every non-static
    /// point mass.
    pub fn apply_acceleration(&mut self, acceleration: Vec2) {
        for pm in &mut self.point_masses {
            if !pm.is_static() {
                let f = acceleration * pm.mass;
                pm.apply_force(f);
            }
        }
    }

    /// Integrates every point mass by one explicit Euler step.
    ///
    /// Static points skip integration but still drop their accumulated
    /// force, so every accumulator is zero when the next force phase
    /// begins.
    pub fn integrate(&mut self, dt: f32) {
        for pm in &mut self.point_masses {
            if pm.is_static() {
                pm.force = Vec2::ZERO;
            } else {
                pm.integrate(dt);
            }
        }
    }

    /// Multiplies every point velocity by the damping factor.
    pub fn dampen_velocity(&mut self) {
        for pm in &mut self.point_masses {
            pm.velocity *= self.vel_damping;
        }
    }

    /// Derives centroid position, mean velocity, orientation angle,
    /// and angular velocity from the point masses.
    ///
    /// Skipped for static and kinematic bodies. The per-point angles
    /// are unwrapped against point 0's angle so the mean stays
    /// continuous across the ±π seam.
    pub fn derive_position_and_angle(&mut self, dt: f32) {
        if self.is_static || self.is_kinematic {
            return;
        }
        let n = self.point_masses.len();
        let inv_n = 1.0 / n as f32;

        if !self.is_pinned {
            let mut center = Vec2::ZERO;
            let mut vel = Vec2::ZERO;
            for pm in &self.point_masses {
                center += pm.position;
                vel += pm.velocity;
            }
            self.derived_pos = center * inv_n;
            self.derived_vel = vel * inv_n;
        }

        if self.free_rotate {
            let mut angle_sum = 0.0;
            let mut first_angle = 0.0;
            for (i, pm) in self.point_masses.iter().enumerate() {
                let base = self.base_shape.vertices()[i].normalize_or_zero();
                let current = (pm.position - self.derived_pos).normalize_or_zero();
                let dot = base.dot(current).clamp(-1.0, 1.0);
                let mut this_angle = dot.acos();
                if !vectors_are_ccw(base, current) {
                    this_angle = -this_angle;
                }

                if i == 0 {
                    first_angle = this_angle;
                } else {
                    let diff = this_angle - first_angle;
                    if diff.abs() > PI && (this_angle >= 0.0) != (first_angle >= 0.0) {
                        this_angle = if this_angle < 0.0 {
                            this_angle + TAU
                        } else {
                            this_angle - TAU
                        };
                    }
                }
                angle_sum += this_angle;
            }
            self.derived_angle = angle_sum * inv_n;

            let delta = wrap_angle(self.derived_angle - self.last_angle);
            self.derived_omega = delta / dt;
            self.last_angle = self.derived_angle;
        }
    }

    /// Recomputes the AABB as the union of point positions, padded by
    /// each point's velocity sweep over `dt`.
    pub fn update_aabb(&mut self, dt: f32) {
        self.aabb.clear();
        for pm in &self.point_masses {
            self.aabb.expand_to_include(pm.position);
            if dt > 0.0 && !pm.is_static() {
                self.aabb.expand_to_include(pm.position + pm.velocity * dt);
            }
        }
    }

    // ─── Geometry queries ─────────────────────────────────────

    /// Even–odd point-in-polygon test against the current ring.
    ///
    /// Casts a horizontal ray in +X and counts edge crossings with the
    /// half-open rule, so a point is never inside two bodies sharing
    /// an edge. Requires an up-to-date AABB.
    pub fn contains(&self, pt: Vec2) -> bool {
        if !self.aabb.contains_point(pt) {
            return false;
        }
        let n = self.point_masses.len();
        let mut inside = false;
        for i in 0..n {
            let st = self.point_masses[i].position;
            let en = self.point_masses[(i + 1) % n].position;
            if (st.y <= pt.y && en.y > pt.y) || (st.y > pt.y && en.y <= pt.y) {
                let hit_x = st.x + (pt.y - st.y) * (en.x - st.x) / (en.y - st.y);
                if pt.x < hit_x {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// True when the segment `[a, b]` touches the body: an endpoint is
    /// inside or the segment crosses any edge.
    pub fn intersects_line(&self, a: Vec2, b: Vec2) -> bool {
        if self.contains(a) || self.contains(b) {
            return true;
        }
        let n = self.point_masses.len();
        for i in 0..n {
            let p0 = self.point_masses[i].position;
            let p1 = self.point_masses[(i + 1) % n].position;
            if segment_intersection(a, b, p0, p1).is_some() {
                return true;
            }
        }
        false
    }

    /// Casts the segment `[a, b]` against the edge ring and returns the
    /// nearest hit as `(t, point)` with `t` parametric along the segment.
    pub fn raycast(&self, a: Vec2, b: Vec2) -> Option<(f32, Vec2)> {
        let n = self.point_masses.len();
        let mut best: Option<(f32, Vec2)> = None;
        for i in 0..n {
            let p0 = self.point_masses[i].position;
            let p1 = self.point_masses[(i + 1) % n].position;
            if let Some((t, point)) = segment_intersection(a, b, p0, p1) {
                if best.map_or(true, |(bt, _)| t < bt) {
                    best = Some((t, point));
                }
            }
        }
        best
    }

    /// Projects `pt` onto edge `edge`, clamped to the segment.
    pub fn closest_point_on_edge(&self, pt: Vec2, edge: usize) -> ClosestPoint {
        let n = self.point_masses.len();
        let p0 = self.point_masses[edge % n].position;
        let p1 = self.point_masses[(edge + 1) % n].position;
        let d = p1 - p0;
        let len_sq = d.length_squared();
        let t = if len_sq < DEGENERATE_EPSILON {
            0.0
        } else {
            ((pt - p0).dot(d) / len_sq).clamp(0.0, 1.0)
        };
        let point = p0 + d * t;
        ClosestPoint {
            edge: edge % n,
            t,
            point,
            normal: edge_outward_normal(d),
            distance_sq: pt.distance_squared(point),
        }
    }

    /// Closest point on the whole edge ring.
    pub fn closest_point(&self, pt: Vec2) -> ClosestPoint {
        let n = self.point_masses.len();
        let mut best = self.closest_point_on_edge(pt, 0);
        for edge in 1..n {
            let candidate = self.closest_point_on_edge(pt, edge);
            if candidate.distance_sq < best.distance_sq {
                best = candidate;
            }
        }
        best
    }

    /// Closest edge within `tolerance`, with the flanking point-mass
    /// indices. `None` when nothing qualifies.
    pub fn closest_edge(&self, pt: Vec2, tolerance: f32) -> Option<EdgeHit> {
        let best = self.closest_point(pt);
        let distance = best.distance();
        if distance > tolerance {
            return None;
        }
        let n = self.point_masses.len();
        Some(EdgeHit {
            v0: best.edge,
            v1: (best.edge + 1) % n,
            t: best.t,
            point: best.point,
            normal: best.normal,
            distance,
        })
    }

    // ─── Rotational controls ──────────────────────────────────

    /// Adds a torque about the derived centroid as per-point forces.
    pub fn apply_torque(&mut self, torque: f32) {
        let center = self.derived_pos;
        for pm in &mut self.point_masses {
            let arm = (pm.position - center).normalize_or_zero();
            pm.apply_force(arm.perp() * torque);
        }
    }

    /// Replaces every point velocity with the rigid rotation field
    /// `v = perp(r)·omega` about the derived centroid.
    pub fn set_angular_velocity(&mut self, omega: f32) {
        let center = self.derived_pos;
        for pm in &mut self.point_masses {
            if pm.is_static() {
                continue;
            }
            let arm = pm.position - center;
            pm.velocity = arm.perp() * omega;
        }
    }

    /// Adds a rigid rotation field to the point velocities.
    pub fn add_angular_velocity(&mut self, omega: f32) {
        let center = self.derived_pos;
        for pm in &mut self.point_masses {
            if pm.is_static() {
                continue;
            }
            let arm = pm.position - center;
            pm.velocity += arm.perp() * omega;
        }
    }

    /// Applies `force` at `origin`: the force itself on every point,
    /// plus the induced torque about `origin`.
    pub fn add_global_force(&mut self, origin: Vec2, force: Vec2) {
        let torque = (self.derived_pos - origin).perp_dot(force);
        for pm in &mut self.point_masses {
            let arm = pm.position - origin;
            pm.apply_force(force + arm.perp() * torque);
        }
    }

    // ─── Mutators ─────────────────────────────────────────────

    /// Re-templates the ring at a new pose, overwriting every point
    /// position. Velocities are preserved; the derived pose and AABB
    /// are reset to match.
    pub fn set_position_angle(&mut self, position: Vec2, angle: f32) {
        let world = self
            .base_shape
            .transform_vertices(position, angle, self.scale);
        for (pm, &p) in self.point_masses.iter_mut().zip(&world) {
            pm.position = p;
        }
        self.derived_pos = position;
        self.derived_angle = angle;
        self.last_angle = angle;
        self.update_aabb(0.0);
    }

    /// Drives a kinematic body's target pose. Shape matching pulls the
    /// ring toward this pose during the force phase.
    pub fn set_kinematic_pose(&mut self, position: Vec2, angle: f32) {
        self.derived_pos = position;
        self.derived_angle = angle;
        self.last_angle = angle;
    }

    /// Replaces the shape template.
    ///
    /// With an equal vertex count the current point positions are kept
    /// (only the rest silhouette changes); otherwise the ring is
    /// rebuilt at the current derived pose with the broadcast mass of
    /// the first point.
    pub fn set_shape(&mut self, shape: ClosedShape) {
        if shape.vertex_count() == self.point_masses.len() {
            self.base_shape = shape;
            return;
        }
        let mass = self.point_masses.first().map_or(1.0, |pm| pm.mass);
        let world = shape.transform_vertices(self.derived_pos, self.derived_angle, self.scale);
        self.point_masses = world.iter().map(|&p| PointMass::new(mass, p)).collect();
        self.base_shape = shape;
        self.update_aabb(0.0);
    }

    /// Broadcasts one mass to every point.
    pub fn set_mass_all(&mut self, mass: f32) {
        for pm in &mut self.point_masses {
            pm.mass = if mass > 0.0 { mass } else { f32::INFINITY };
        }
    }

    /// Sets per-point masses from a list.
    pub fn set_mass_from_list(&mut self, masses: &[f32]) -> PliantResult<()> {
        if masses.len() != self.point_masses.len() {
            return Err(PliantError::InvalidBody(format!(
                "mass list length ({}) != point count ({})",
                masses.len(),
                self.point_masses.len()
            )));
        }
        for (pm, &m) in self.point_masses.iter_mut().zip(masses) {
            pm.mass = if m > 0.0 { m } else { f32::INFINITY };
        }
        Ok(())
    }

    /// Total kinetic energy of the ring.
    pub fn kinetic_energy(&self) -> f64 {
        self.point_masses.iter().map(|pm| pm.kinetic_energy()).sum()
    }
}
