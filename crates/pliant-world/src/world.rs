//! The simulation world.
//!
//! A `World` exclusively owns its bodies and advances them with
//! [`World::update`]. A step is atomic from the caller's perspective:
//! no point-mass state is observable mid-step, and the call returns
//! only when every body has passed through the full phase sequence.
//! Bodies may be added or removed only between steps.

use std::time::Instant;

use pliant_contact::{
    BitmaskGrid, CollisionPipeline, ImpulseResponse, MaterialPair, MaterialTable, PointEdgeTest,
};
use pliant_dynamics::Body;
use pliant_math::{Aabb, Vec2};
use pliant_telemetry::{EventBus, StepEvent, StepEventKind};
use pliant_types::{BodyId, MaterialId, PliantError, PliantResult};

use crate::config::WorldConfig;

/// Counters and timings from one [`World::update`] call.
#[derive(Debug, Clone, Default)]
pub struct StepSummary {
    /// Step index (0 for the first completed step).
    pub step: u64,
    /// Accumulated simulation time after the step (seconds).
    pub sim_time: f64,
    /// Broad-phase candidate pairs.
    pub candidate_pairs: u32,
    /// Narrow-phase contacts across all penetration iterations.
    pub contacts_detected: u32,
    /// Contacts resolved by the impulse pass.
    pub resolved_count: u32,
    /// Contacts skipped as deeper than the penetration threshold.
    pub deep_count: u32,
    /// Maximum penetration depth seen.
    pub max_penetration: f32,
    /// Wall-clock duration of the step (seconds).
    pub wall_time: f64,
}

/// A raycast hit against a body in the world.
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    /// The body that was hit.
    pub body: BodyId,
    /// Parametric position along the ray segment.
    pub t: f32,
    /// World-space hit point.
    pub point: Vec2,
}

/// The simulation container.
pub struct World {
    bodies: Vec<Body>,
    bounds: Aabb,
    config: WorldConfig,
    materials: MaterialTable,
    pipeline: CollisionPipeline,
    telemetry: EventBus,
    next_body_id: u32,
    step_index: u64,
    sim_time: f64,
}

impl World {
    /// Creates a world over `bounds` with the given gravity and
    /// default configuration.
    pub fn new(bounds: Aabb, gravity: Vec2) -> PliantResult<Self> {
        let config = WorldConfig {
            gravity: gravity.to_array(),
            ..WorldConfig::default()
        };
        Self::with_config(bounds, config)
    }

    /// Creates a world with an explicit configuration.
    pub fn with_config(bounds: Aabb, config: WorldConfig) -> PliantResult<Self> {
        config.validate()?;
        if !bounds.is_valid() {
            return Err(PliantError::InvalidConfig(
                "world bounds must be a valid box".into(),
            ));
        }
        let pipeline = CollisionPipeline::new(
            Box::new(BitmaskGrid::new(config.grid_cells)),
            Box::new(PointEdgeTest),
            Box::new(ImpulseResponse),
            config.penetration_iterations,
            config.penetration_threshold,
        );
        Ok(Self {
            bodies: Vec::new(),
            bounds,
            materials: MaterialTable::new(config.material_count as usize),
            pipeline,
            telemetry: EventBus::new(),
            config,
            next_body_id: 1,
            step_index: 0,
            sim_time: 0.0,
        })
    }

    /// The world bounds used by the broad phase.
    #[inline]
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Completed step count.
    #[inline]
    pub fn step_count(&self) -> u64 {
        self.step_index
    }

    /// Accumulated simulation time in seconds.
    #[inline]
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    // ─── Body management ──────────────────────────────────────

    /// Adds a body and returns its stable handle.
    pub fn add_body(&mut self, mut body: Body) -> BodyId {
        let id = BodyId(self.next_body_id);
        self.next_body_id += 1;
        body.assign_id(id);
        self.bodies.push(body);
        id
    }

    /// Removes a body by handle, returning it if present.
    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        let index = self.bodies.iter().position(|b| b.id() == id)?;
        Some(self.bodies.remove(index))
    }

    /// Borrows a body by handle.
    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id() == id)
    }

    /// Mutably borrows a body by handle. Only use between steps.
    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id() == id)
    }

    /// All bodies in insertion order.
    #[inline]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable access to all bodies. Only use between steps.
    #[inline]
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// Sets the coefficients for a material pair, symmetrically.
    pub fn set_material_pair(&mut self, a: MaterialId, b: MaterialId, pair: MaterialPair) {
        self.materials.set_pair(a, b, pair);
    }

    /// The material pair table.
    #[inline]
    pub fn materials(&self) -> &MaterialTable {
        &self.materials
    }

    /// Replaces the telemetry bus, typically one configured with sinks.
    /// The default bus has no sinks and emission is free.
    pub fn set_telemetry(&mut self, bus: EventBus) {
        self.telemetry = bus;
    }

    /// The telemetry bus, for registering sinks or toggling emission.
    pub fn telemetry_mut(&mut self) -> &mut EventBus {
        &mut self.telemetry
    }

    // ─── Stepping ─────────────────────────────────────────────

    /// Advances the simulation by one fixed step.
    ///
    /// Phase order per body: external forces → internal forces →
    /// integrate (which zeroes accumulators) → dampen → derive pose →
    /// update AABB; then broad phase, narrow phase, and impulse
    /// resolution over all bodies. Telemetry events fire at the phase
    /// boundaries (step begin, collision summary, sampled energy, step
    /// end) and reach the bus's sinks as one batch when the step
    /// completes. Callers wanting frame-rate independence should call
    /// this N times with the same `dt` rather than scaling `dt`.
    pub fn update(&mut self, dt: f32) -> PliantResult<StepSummary> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(PliantError::InvalidConfig(format!(
                "dt must be positive and finite, got {}",
                dt
            )));
        }
        let start = Instant::now();
        let gravity = Vec2::from_array(self.config.gravity);

        self.telemetry.emit(StepEvent::new(
            self.step_index,
            StepEventKind::StepBegin {
                sim_time: self.sim_time,
            },
        ));

        // Force accumulation and integration. Accumulators enter this
        // phase at zero (integration cleared them last step), so forces
        // applied between steps via add_global_force/apply_torque are
        // preserved.
        for body in &mut self.bodies {
            if body.is_static {
                continue;
            }
            body.apply_acceleration(gravity);
            body.accumulate_external_forces();
            body.accumulate_internal_forces();
            body.integrate(dt);
        }

        // Damping, pose derivation, AABB maintenance.
        for body in &mut self.bodies {
            if body.is_static {
                continue;
            }
            body.dampen_velocity();
            body.derive_position_and_angle(dt);
            body.update_aabb(dt);
        }

        // Collision detection and resolution.
        let collisions = self
            .pipeline
            .step(&mut self.bodies, &self.bounds, &self.materials)?;

        let summary = StepSummary {
            step: self.step_index,
            sim_time: self.sim_time + dt as f64,
            candidate_pairs: collisions.candidate_pairs,
            contacts_detected: collisions.contacts_detected,
            resolved_count: collisions.resolved_count,
            deep_count: collisions.deep_count,
            max_penetration: collisions.max_penetration,
            wall_time: start.elapsed().as_secs_f64(),
        };

        if summary.deep_count > 0 {
            tracing::debug!(
                step = summary.step,
                deep = summary.deep_count,
                max_penetration = summary.max_penetration,
                "contacts deeper than threshold left for later iterations"
            );
        }

        self.telemetry.emit(StepEvent::new(
            summary.step,
            StepEventKind::CollisionSummary {
                candidate_pairs: summary.candidate_pairs,
                contact_count: summary.contacts_detected,
                max_penetration: summary.max_penetration,
                deep_count: summary.deep_count,
            },
        ));
        if self.telemetry.wants_energy(self.step_index) {
            let kinetic = self.kinetic_energy();
            self.telemetry.emit(StepEvent::new(
                summary.step,
                StepEventKind::Energy { kinetic },
            ));
        }
        self.telemetry.emit(StepEvent::new(
            summary.step,
            StepEventKind::StepEnd {
                wall_time: summary.wall_time,
            },
        ));
        self.telemetry.end_step();

        self.step_index += 1;
        self.sim_time = summary.sim_time;
        Ok(summary)
    }

    // ─── Queries ──────────────────────────────────────────────

    /// All bodies whose polygon contains `point`, in insertion order.
    pub fn bodies_at_point(&self, point: Vec2) -> Vec<BodyId> {
        self.bodies
            .iter()
            .filter(|b| b.contains(point))
            .map(|b| b.id())
            .collect()
    }

    /// Casts the segment `[a, b]` against every body and returns the
    /// nearest hit.
    pub fn raycast(&self, a: Vec2, b: Vec2) -> Option<RayHit> {
        let mut best: Option<RayHit> = None;
        for body in &self.bodies {
            if let Some((t, point)) = body.raycast(a, b) {
                if best.as_ref().map_or(true, |hit| t < hit.t) {
                    best = Some(RayHit {
                        body: body.id(),
                        t,
                        point,
                    });
                }
            }
        }
        best
    }

    /// Total kinetic energy over all bodies.
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }
}
