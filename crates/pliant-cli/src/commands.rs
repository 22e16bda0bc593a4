//! CLI command implementations.

use pliant_bench::{BenchMetrics, BenchRunner, Scenario, ScenarioKind};
use pliant_debug::WorldSnapshot;
use pliant_dynamics::{Body, PressureComponent, ShapeMatchingComponent, SpringComponent};
use pliant_geom::generators::{rectangle, regular_polygon, subdivided_rectangle};
use pliant_geom::ClosedShape;
use pliant_math::{Aabb, Vec2};
use pliant_world::{World, WorldConfig};

/// Run the demo scene with a config file.
pub fn simulate(
    config_path: &str,
    steps: u32,
    snapshot_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Pliant Simulation");
    println!("─────────────────");
    println!("Config: {config_path}");

    let content = std::fs::read_to_string(config_path)?;
    let config: WorldConfig = toml::from_str(&content)?;
    config.validate()?;

    let mut world = demo_scene(config)?;
    println!(
        "Scene: {} bodies, {} points",
        world.bodies().len(),
        world.bodies().iter().map(|b| b.point_count()).sum::<usize>()
    );
    println!();

    let dt = 1.0 / 60.0;
    let report_every = (steps / 10).max(1);
    for step in 0..steps {
        let summary = world.update(dt)?;
        if step % report_every == 0 {
            println!(
                "step {:>5}  contacts {:>3}  max pen {:.4}  ke {:.4e}",
                summary.step,
                summary.contacts_detected,
                summary.max_penetration,
                world.kinetic_energy(),
            );
        }
    }

    println!();
    println!("Simulated {:.2}s of world time.", world.sim_time());

    if let Some(path) = snapshot_path {
        let snapshot = WorldSnapshot::capture(&world);
        std::fs::write(path, snapshot.to_bytes())?;
        println!("Snapshot written to: {path}");
    }
    Ok(())
}

/// A small mixed scene: static floor, a pressurized ring, and two
/// soft squares.
fn demo_scene(config: WorldConfig) -> Result<World, Box<dyn std::error::Error>> {
    let bounds = Aabb::new(Vec2::new(-50.0, -50.0), Vec2::new(50.0, 50.0));
    let mut world = World::with_config(bounds, config)?;

    let floor = Body::new(rectangle(40.0, 2.0)?, 1.0, Vec2::new(0.0, -6.0), 0.0)?.make_static();
    world.add_body(floor);

    let ring = Body::new(regular_polygon(1.0, 16)?, 1.0, Vec2::new(-2.0, 3.0), 0.0)?
        .with_component(Box::new(SpringComponent::edge_ring(300.0, 10.0)))?
        .with_component(Box::new(PressureComponent::new(40.0)))?;
    world.add_body(ring);

    for i in 0..2 {
        let square = Body::new(
            subdivided_rectangle(1.0, 1.0, 2)?,
            1.0,
            Vec2::new(1.5, 1.0 + 2.0 * i as f32),
            0.0,
        )?
        .with_component(Box::new(SpringComponent::edge_ring(300.0, 5.0)))?
        .with_component(Box::new(ShapeMatchingComponent::new(100.0, 2.0)))?;
        world.add_body(square);
    }
    Ok(world)
}

/// Run the benchmark suite.
pub fn benchmark(
    scenario_name: &str,
    output_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Pliant Benchmark Suite");
    println!("══════════════════════");
    println!();

    let scenarios: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        let kind = match scenario_name {
            "free_fall" => ScenarioKind::FreeFall,
            "dropped_stack" => ScenarioKind::DroppedStack,
            "inflated_ring" => ScenarioKind::InflatedRing,
            "head_on_collision" => ScenarioKind::HeadOnCollision,
            other => {
                eprintln!("Unknown scenario: {other}");
                eprintln!(
                    "Available: free_fall, dropped_stack, inflated_ring, head_on_collision, all"
                );
                return Err("Unknown scenario".into());
            }
        };
        vec![kind]
    };

    let mut all_metrics = Vec::new();
    for &kind in &scenarios {
        let scenario = Scenario::from_kind(kind);
        println!(
            "Running: {} ({} steps at dt={:.4})",
            kind.name(),
            scenario.timesteps,
            scenario.dt,
        );

        let metrics = BenchRunner::run(&scenario).map_err(|e| format!("Benchmark failed: {e}"))?;

        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg step:      {:.3}ms", metrics.avg_step_time * 1000.0);
        println!("  Final KE:      {:.6e}", metrics.final_kinetic_energy);
        println!("  Max displace:  {:.4}", metrics.max_displacement);
        println!("  Contacts:      {}", metrics.total_contacts);
        println!();

        all_metrics.push(metrics);
    }

    if let Some(path) = output_path {
        let csv = BenchMetrics::to_csv(&all_metrics);
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{}", BenchMetrics::to_csv(&all_metrics));
    }

    Ok(())
}

/// Inspect a state snapshot.
pub fn inspect(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Pliant Snapshot Inspector");
    println!("─────────────────────────");
    println!();

    let data = std::fs::read(path)?;
    let snapshot =
        WorldSnapshot::from_bytes(&data).map_err(|e| format!("Failed to read snapshot: {e}"))?;

    println!("Step:       {}", snapshot.step);
    println!("Sim time:   {:.4}s", snapshot.sim_time);
    println!("Bodies:     {}", snapshot.bodies.len());
    println!("Points:     {}", snapshot.point_count());

    for body in &snapshot.bodies {
        let min_y = body
            .positions
            .iter()
            .skip(1)
            .step_by(2)
            .copied()
            .fold(f32::INFINITY, f32::min);
        let max_y = body
            .positions
            .iter()
            .skip(1)
            .step_by(2)
            .copied()
            .fold(f32::NEG_INFINITY, f32::max);
        println!(
            "  body {:>3}: {} points, centroid ({:.3}, {:.3}), Y range [{:.3}, {:.3}]",
            body.id,
            body.positions.len() / 2,
            body.derived_pos[0],
            body.derived_pos[1],
            min_y,
            max_y,
        );
    }

    Ok(())
}

/// Validate a world config or a shape vertex list.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Pliant Validator");
    println!("────────────────");
    println!();

    if path.ends_with(".toml") {
        println!("Validating config: {path}");
        let content = std::fs::read_to_string(path)?;
        let config: WorldConfig = toml::from_str(&content)?;
        match config.validate() {
            Ok(()) => println!("✅ Config is valid."),
            Err(e) => println!("❌ Config validation failed: {e}"),
        }
    } else if path.ends_with(".json") {
        println!("Validating shape: {path}");
        let content = std::fs::read_to_string(path)?;
        let raw: Vec<[f32; 2]> = serde_json::from_str(&content)?;
        let vertices: Vec<Vec2> = raw.into_iter().map(Vec2::from_array).collect();
        match ClosedShape::new(vertices) {
            Ok(shape) => println!(
                "✅ Shape is valid ({} vertices, area {:.4}).",
                shape.vertex_count(),
                shape.area()
            ),
            Err(e) => println!("❌ Shape validation failed: {e}"),
        }
    } else {
        println!("Unsupported file format. Use .toml (config) or .json (shape).");
    }

    Ok(())
}
