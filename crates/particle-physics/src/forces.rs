//! Per-particle integration: gravity, cursor field, damping and motion
//!
//! NOTE: velocities are in pixels per frame, so `position += velocity` has no dt factor.
//! Gravity and damping still use `FIXED_DT` through their scale constants.

use crate::constants::*;
use crate::particle::Particle;
use glam::Vec2;

/// Radial force field centred on the pointer
/// Positive strength attracts, negative repels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorForce {
    pub position: Vec2,
    pub radius: f32,
    pub strength: f32,
}

impl CursorForce {
    /// Velocity change imparted on a particle at `position`
    /// Linear falloff: full strength at the centre, zero at the rim.
    pub fn impulse_at(&self, position: Vec2) -> Vec2 {
        let delta = self.position - position;
        let dist = delta.length();

        if dist >= self.radius || dist <= CURSOR_DEAD_ZONE {
            return Vec2::ZERO;
        }

        let normal = delta / dist;
        let force_factor = 1.0 - dist / self.radius;
        normal * force_factor * self.strength * CURSOR_FORCE_SCALE
    }
}

/// Inputs shared by every particle during one integration pass
#[derive(Clone, Copy, Debug)]
pub struct IntegrationParams {
    pub gravity: f32,
    pub friction: f32,
    pub cursor: Option<CursorForce>,
}

/// Per-frame multiplicative velocity decay
/// `friction = 0` gives exactly 1.0
#[inline]
pub fn damping_factor(friction: f32, dt: f32) -> f32 {
    (1.0 - friction * dt * DAMPING_SCALE).max(0.0)
}

/// Advance one particle by a single fixed step (walls are handled separately)
pub fn integrate_particle(p: &mut Particle, params: &IntegrationParams, dt: f32) {
    let mut vel = p.vel();

    vel.y += params.gravity * dt * GRAVITY_SCALE;

    if let Some(cursor) = &params.cursor {
        vel += cursor.impulse_at(p.pos());
    }

    vel *= damping_factor(params.friction, dt);

    p.set_vel(vel);
    p.set_pos(p.pos() + vel);
}
