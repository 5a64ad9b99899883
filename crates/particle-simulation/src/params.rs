//! Physics parameters for runtime tuning

use glam::Vec2;
use particle_physics::{Bounds, CursorForce, MIN_CURSOR_RADIUS};

use crate::backend::ComputeMode;

pub const DEFAULT_GRAVITY: f32 = 9.81;
pub const DEFAULT_FRICTION: f32 = 0.1;
pub const DEFAULT_RESTITUTION: f32 = 0.8;
pub const DEFAULT_VELOCITY_SCALE: f32 = 1.0;
pub const DEFAULT_PARTICLE_RADIUS: f32 = 3.0;
pub const DEFAULT_POPULATION: usize = 1000;
pub const DEFAULT_CURSOR_RADIUS: f32 = 150.0;
pub const DEFAULT_CURSOR_STRENGTH: f32 = 4.0;

/// Tunables shared by every particle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParams {
    /// Downward acceleration (slider units, scaled internally)
    pub gravity: f32,
    /// Viscous damping coefficient in [0, 1]
    pub friction: f32,
    /// Bounce coefficient for walls and pairs in [0, 1]
    pub restitution: f32,
    /// Multiplier on spawn speed; changing it rescales live velocities
    pub velocity_scale: f32,
    /// Radius applied to every particle
    pub particle_radius: f32,
    /// Population regenerated on reset
    pub target_population: usize,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            friction: DEFAULT_FRICTION,
            restitution: DEFAULT_RESTITUTION,
            velocity_scale: DEFAULT_VELOCITY_SCALE,
            particle_radius: DEFAULT_PARTICLE_RADIUS,
            target_population: DEFAULT_POPULATION,
        }
    }
}

/// Pointer-driven radial field
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorField {
    pub active: bool,
    /// Last pointer location, `None` while off-canvas or never seen
    pub position: Option<Vec2>,
    pub radius: f32,
    /// Positive attracts, negative repels, zero is inert
    pub strength: f32,
}

impl CursorField {
    /// The force to apply this frame, if any
    pub fn force(&self) -> Option<CursorForce> {
        if !self.active {
            return None;
        }
        self.position.map(|position| CursorForce {
            position,
            radius: self.radius.max(MIN_CURSOR_RADIUS),
            strength: self.strength,
        })
    }
}

impl Default for CursorField {
    fn default() -> Self {
        Self {
            active: false,
            position: None,
            radius: DEFAULT_CURSOR_RADIUS,
            strength: DEFAULT_CURSOR_STRENGTH,
        }
    }
}

/// Everything needed to build a simulation
#[derive(Clone, Debug, Default)]
pub struct SimulationConfig {
    pub params: SimulationParams,
    pub cursor: CursorField,
    pub bounds: Bounds,
    /// Fixed seed for reproducible spawning, entropy-seeded when `None`
    pub seed: Option<u64>,
    pub compute_mode: ComputeMode,
}

impl SimulationConfig {
    pub fn with_bounds(mut self, width: f32, height: f32) -> Self {
        self.bounds = Bounds::new(width, height);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_population(mut self, count: usize) -> Self {
        self.params.target_population = count;
        self
    }
}
