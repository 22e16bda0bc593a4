//! Point masses with explicit Euler integration.

use pliant_math::Vec2;

/// A particle with position, velocity, mass, and a force accumulator.
///
/// A mass of `f32::INFINITY` marks the particle as static: it never
/// moves regardless of applied forces. A constructor mass of zero is
/// normalized to the static sentinel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMass {
    /// Particle mass. `f32::INFINITY` for static particles.
    pub mass: f32,
    /// World-space position.
    pub position: Vec2,
    /// World-space velocity.
    pub velocity: Vec2,
    /// Force accumulator, cleared by [`PointMass::integrate`].
    pub force: Vec2,
}

impl PointMass {
    /// Creates a particle at `position`. Non-positive masses are
    /// treated as static.
    pub fn new(mass: f32, position: Vec2) -> Self {
        let mass = if mass > 0.0 { mass } else { f32::INFINITY };
        Self {
            mass,
            position,
            velocity: Vec2::ZERO,
            force: Vec2::ZERO,
        }
    }

    /// Creates a static (immovable) particle.
    pub fn fixed(position: Vec2) -> Self {
        Self::new(f32::INFINITY, position)
    }

    /// True when the particle never moves.
    #[inline]
    pub fn is_static(&self) -> bool {
        !self.mass.is_finite()
    }

    /// Inverse mass; zero for static particles.
    #[inline]
    pub fn inv_mass(&self) -> f32 {
        if self.is_static() {
            0.0
        } else {
            1.0 / self.mass
        }
    }

    /// Adds `force` to the accumulator.
    #[inline]
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// One explicit Euler step: `v += (f/m)·dt; p += v·dt; f = 0`.
    ///
    /// No-op for static particles.
    pub fn integrate(&mut self, dt: f32) {
        if self.is_static() {
            return;
        }
        self.velocity += self.force * (dt / self.mass);
        self.position += self.velocity * dt;
        self.force = Vec2::ZERO;
    }

    /// Kinetic energy `0.5·m·|v|²`; zero for static particles.
    pub fn kinetic_energy(&self) -> f64 {
        if self.is_static() {
            return 0.0;
        }
        0.5 * self.mass as f64 * self.velocity.length_squared() as f64
    }
}
