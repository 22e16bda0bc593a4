//! Benchmark scenarios — procedural worlds for regression testing.
//!
//! Four canonical scenarios:
//! 1. **Free fall** — a plain body dropping under gravity
//! 2. **Dropped stack** — soft squares piling onto a static floor
//! 3. **Inflated ring** — a pressurized 16-gon settling to equilibrium
//! 4. **Head-on collision** — two soft squares bouncing off each other

use serde::{Deserialize, Serialize};

use pliant_contact::MaterialPair;
use pliant_dynamics::{Body, PressureComponent, ShapeMatchingComponent, SpringComponent};
use pliant_geom::generators::{rectangle, regular_polygon, subdivided_rectangle};
use pliant_math::{Aabb, Vec2};
use pliant_types::{MaterialId, PliantResult};
use pliant_world::World;

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// A plain body dropping under gravity.
    FreeFall,
    /// Soft squares piling onto a static floor.
    DroppedStack,
    /// A pressurized ring settling to its equilibrium radius.
    InflatedRing,
    /// Two soft squares colliding head-on with restitution 1.
    HeadOnCollision,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::FreeFall,
            ScenarioKind::DroppedStack,
            ScenarioKind::InflatedRing,
            ScenarioKind::HeadOnCollision,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::FreeFall => "free_fall",
            ScenarioKind::DroppedStack => "dropped_stack",
            ScenarioKind::InflatedRing => "inflated_ring",
            ScenarioKind::HeadOnCollision => "head_on_collision",
        }
    }
}

/// A fully specified benchmark scenario.
///
/// The world is built fresh by [`Scenario::build`], so repeated runs
/// are deterministic.
pub struct Scenario {
    /// Scenario type.
    pub kind: ScenarioKind,
    /// Number of steps to simulate.
    pub timesteps: u32,
    /// Step size (seconds).
    pub dt: f32,
}

impl Scenario {
    /// Creates a scenario by kind with its canonical step count.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        let timesteps = match kind {
            ScenarioKind::FreeFall => 300,
            ScenarioKind::DroppedStack => 600,
            ScenarioKind::InflatedRing => 480,
            ScenarioKind::HeadOnCollision => 600,
        };
        let dt = match kind {
            ScenarioKind::InflatedRing | ScenarioKind::HeadOnCollision => 1.0 / 120.0,
            _ => 1.0 / 60.0,
        };
        Self {
            kind,
            timesteps,
            dt,
        }
    }

    /// Builds the scenario's world from scratch.
    pub fn build(&self) -> PliantResult<World> {
        match self.kind {
            ScenarioKind::FreeFall => free_fall(),
            ScenarioKind::DroppedStack => dropped_stack(),
            ScenarioKind::InflatedRing => inflated_ring(),
            ScenarioKind::HeadOnCollision => head_on_collision(),
        }
    }
}

fn wide_bounds() -> Aabb {
    Aabb::new(Vec2::new(-50.0, -50.0), Vec2::new(50.0, 50.0))
}

fn soft_square(pos: Vec2) -> PliantResult<Body> {
    Ok(
        Body::new(subdivided_rectangle(1.0, 1.0, 2)?, 1.0, pos, 0.0)?
            .with_component(Box::new(SpringComponent::edge_ring(300.0, 5.0)))?
            .with_component(Box::new(ShapeMatchingComponent::new(100.0, 2.0)))?,
    )
}

fn free_fall() -> PliantResult<World> {
    let mut world = World::new(wide_bounds(), Vec2::new(0.0, -9.8))?;
    let body = Body::new(rectangle(1.0, 1.0)?, 1.0, Vec2::new(0.0, 40.0), 0.0)?;
    world.add_body(body);
    Ok(world)
}

fn dropped_stack() -> PliantResult<World> {
    let mut world = World::new(wide_bounds(), Vec2::new(0.0, -9.8))?;
    let floor = Body::new(rectangle(30.0, 2.0)?, 1.0, Vec2::new(0.0, -5.0), 0.0)?.make_static();
    world.add_body(floor);
    for i in 0..3 {
        world.add_body(soft_square(Vec2::new(0.15 * i as f32, 1.5 * i as f32))?);
    }
    Ok(world)
}

fn inflated_ring() -> PliantResult<World> {
    let mut world = World::new(wide_bounds(), Vec2::ZERO)?;
    let mut ring = Body::new(regular_polygon(1.0, 16)?, 1.0, Vec2::ZERO, 0.0)?
        .with_component(Box::new(SpringComponent::edge_ring(300.0, 10.0)))?
        .with_component(Box::new(PressureComponent::new(40.0)))?;
    ring.vel_damping = 0.98;
    world.add_body(ring);
    Ok(world)
}

fn head_on_collision() -> PliantResult<World> {
    let mut world = World::new(wide_bounds(), Vec2::ZERO)?;
    world.set_material_pair(
        MaterialId(0),
        MaterialId(0),
        MaterialPair {
            restitution: 1.0,
            friction: 0.0,
        },
    );

    let mut left = soft_square(Vec2::new(-0.75, 0.0))?;
    for pm in &mut left.point_masses {
        pm.velocity = Vec2::new(1.0, 0.0);
    }
    let mut right = soft_square(Vec2::new(0.75, 0.0))?;
    for pm in &mut right.point_masses {
        pm.velocity = Vec2::new(-1.0, 0.0);
    }
    world.add_body(left);
    world.add_body(right);
    Ok(world)
}
