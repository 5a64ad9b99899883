//! # Particle Physics
//!
//! Per-particle and per-pair math for a 2D disc simulation: gravity, a radial
//! cursor field, viscous damping, wall reflection and elastic collisions.

pub mod collision;
pub mod constants;
pub mod forces;
pub mod particle;

pub use collision::*;
pub use constants::*;
pub use forces::*;
pub use particle::*;
