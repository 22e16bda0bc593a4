//! Physical constants and simulation defaults.

/// Gravitational acceleration magnitude (m/s²).
pub const GRAVITY: f32 = 9.8;

/// Default simulation timestep (seconds). 1/60th of a second.
pub const DEFAULT_DT: f32 = 1.0 / 60.0;

/// Default maximum penetration depth resolved per impulse pass.
/// Deeper contacts are counted and left for later iterations.
pub const DEFAULT_PENETRATION_THRESHOLD: f32 = 0.3;

/// Default number of narrow-phase + resolution passes per step.
pub const DEFAULT_PENETRATION_ITERATIONS: u32 = 1;

/// Default broad-phase grid resolution (cells per axis).
pub const DEFAULT_GRID_CELLS: u32 = 32;

/// Maximum broad-phase grid resolution. Bit columns are stored in a
/// `u64`, one bit per cell.
pub const MAX_GRID_CELLS: u32 = 64;

/// Default minimum polygon area used by the gas-pressure force.
/// Prevents a singularity when a body collapses.
pub const DEFAULT_AREA_FLOOR: f32 = 0.5;

/// Default per-step velocity damping factor applied to every point mass.
pub const DEFAULT_VELOCITY_DAMPING: f32 = 0.999;

/// Default restitution for a material pair.
pub const DEFAULT_RESTITUTION: f32 = 0.0;

/// Default friction coefficient for a material pair.
pub const DEFAULT_FRICTION: f32 = 0.3;

/// Epsilon for floating-point comparisons.
pub const EPSILON: f32 = 1.0e-7;

/// Epsilon for degenerate geometry detection (squared lengths, areas).
pub const DEGENERATE_EPSILON: f32 = 1.0e-10;
