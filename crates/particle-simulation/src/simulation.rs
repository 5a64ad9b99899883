//! Particle simulation manager
//!
//! Owns the only copy of the tunables and the particle collection. Setters are
//! plain synchronous writes that take effect on the next `step`.

use glam::Vec2;
use particle_physics::{Bounds, Particle, COLLISION_CEILING, MIN_CURSOR_RADIUS, VELOCITY_SCALE_EPSILON};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::backend::{backend_for, ComputeBackend, ComputeMode, StepInputs};
use crate::params::{CursorField, SimulationConfig, SimulationParams};
use crate::population::resize_population;

/// Play/pause state. Reset leaves it untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LifecycleState {
    #[default]
    Running,
    Paused,
}

/// Snapshot for overlay text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationStats {
    pub population: usize,
    pub paused: bool,
    pub frames: u64,
    pub compute_mode: ComputeMode,
    /// Whether the pairwise pass ran on the last simulated frame
    pub collisions_resolved: bool,
}

pub struct ParticleSimulation {
    particles: Vec<Particle>,
    params: SimulationParams,
    cursor: CursorField,
    bounds: Bounds,
    state: LifecycleState,

    compute_mode: ComputeMode,
    backend: Box<dyn ComputeBackend>,
    rng: StdRng,

    frames: u64,
    collisions_resolved: bool,
}

/// Accept finite values only; anything else keeps the current value
fn finite_or(name: &str, value: f32, current: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        log::warn!("Ignoring non-finite {}: {}", name, value);
        current
    }
}

impl ParticleSimulation {
    pub fn new(config: SimulationConfig) -> Self {
        log::info!("Initializing ParticleSimulation...");

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut sim = Self {
            particles: Vec::new(),
            params: config.params,
            cursor: config.cursor,
            bounds: config.bounds,
            state: LifecycleState::Running,
            compute_mode: config.compute_mode,
            backend: backend_for(config.compute_mode),
            rng,
            frames: 0,
            collisions_resolved: true,
        };
        sim.reset();

        log::info!(
            "✓ Simulation ready: {} particles in {:.0}x{:.0}",
            sim.particles.len(),
            sim.bounds.width,
            sim.bounds.height
        );
        sim
    }

    /// Run one fixed step. Returns false if paused.
    pub fn step(&mut self) -> bool {
        if self.state == LifecycleState::Paused {
            return false;
        }

        let inputs = StepInputs {
            gravity: self.params.gravity,
            friction: self.params.friction,
            restitution: self.params.restitution,
            cursor: self.cursor.force(),
            bounds: self.bounds,
        };
        let report = self.backend.step(&mut self.particles, &inputs);

        if report.collisions_resolved != self.collisions_resolved {
            if report.collisions_resolved {
                log::info!("Population back under {}, collisions resumed", COLLISION_CEILING);
            } else {
                log::warn!(
                    "Population {} above {}, skipping pairwise collisions",
                    self.particles.len(),
                    COLLISION_CEILING
                );
            }
        }
        self.collisions_resolved = report.collisions_resolved;
        self.frames += 1;
        true
    }

    // Lifecycle ==========================================================================

    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            LifecycleState::Running => LifecycleState::Paused,
            LifecycleState::Paused => LifecycleState::Running,
        };
        log::debug!("Lifecycle -> {:?}", self.state);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.state = if paused {
            LifecycleState::Paused
        } else {
            LifecycleState::Running
        };
    }

    /// Discard every particle and spawn `target_population` fresh ones
    pub fn reset(&mut self) {
        self.particles.clear();
        resize_population(
            &mut self.particles,
            self.params.target_population,
            &mut self.rng,
            &self.bounds,
            self.params.velocity_scale,
            self.params.particle_radius,
        );
        log::info!("Reset: spawned {} particles", self.particles.len());
    }

    // Parameter setters ==================================================================

    pub fn set_gravity(&mut self, gravity: f32) {
        self.params.gravity = finite_or("gravity", gravity, self.params.gravity);
        log::debug!("gravity = {}", self.params.gravity);
    }

    pub fn set_friction(&mut self, friction: f32) {
        self.params.friction = finite_or("friction", friction, self.params.friction).clamp(0.0, 1.0);
        log::debug!("friction = {}", self.params.friction);
    }

    pub fn set_restitution(&mut self, restitution: f32) {
        self.params.restitution =
            finite_or("restitution", restitution, self.params.restitution).clamp(0.0, 1.0);
        log::debug!("restitution = {}", self.params.restitution);
    }

    /// Change the spawn speed multiplier and rescale live velocities by the ratio
    pub fn set_velocity_scale(&mut self, scale: f32) {
        let scale = finite_or("velocity scale", scale, self.params.velocity_scale);
        let previous = self.params.velocity_scale;

        if !self.particles.is_empty() && previous.abs() > VELOCITY_SCALE_EPSILON {
            let ratio = scale / previous;
            for p in &mut self.particles {
                p.velocity[0] *= ratio;
                p.velocity[1] *= ratio;
            }
        }

        self.params.velocity_scale = scale;
        log::debug!("velocity scale = {}", scale);
    }

    /// Apply a new radius to every live particle and future spawns
    pub fn set_particle_radius(&mut self, radius: f32) {
        let radius = finite_or("particle radius", radius, self.params.particle_radius).max(0.0);
        self.params.particle_radius = radius;
        for p in &mut self.particles {
            p.radius = radius;
        }
        log::debug!("particle radius = {}", radius);
    }

    /// Resize the live collection; also becomes the population used by `reset`
    pub fn set_population(&mut self, count: usize) {
        let before = self.particles.len();
        self.params.target_population = count;
        resize_population(
            &mut self.particles,
            count,
            &mut self.rng,
            &self.bounds,
            self.params.velocity_scale,
            self.params.particle_radius,
        );
        if before != count {
            log::info!("Population {} -> {}", before, count);
        }
    }

    // Cursor field =======================================================================

    pub fn set_cursor_active(&mut self, active: bool) {
        self.cursor.active = active;
    }

    pub fn set_cursor_radius(&mut self, radius: f32) {
        self.cursor.radius = finite_or("cursor radius", radius, self.cursor.radius).max(MIN_CURSOR_RADIUS);
    }

    pub fn set_cursor_strength(&mut self, strength: f32) {
        self.cursor.strength = finite_or("cursor strength", strength, self.cursor.strength);
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        if x.is_finite() && y.is_finite() {
            self.cursor.position = Some(Vec2::new(x, y));
        }
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor.position = None;
    }

    // Environment ========================================================================

    /// Particles outside the new bounds are pushed back on the next step
    pub fn on_viewport_resize(&mut self, width: f32, height: f32) {
        self.bounds = Bounds::new(width, height);
        log::debug!("viewport = {:.0}x{:.0}", self.bounds.width, self.bounds.height);
    }

    pub fn set_compute_mode(&mut self, mode: ComputeMode) {
        if mode == self.compute_mode {
            return;
        }
        log::info!("Compute mode {} -> {}", self.compute_mode.label(), mode.label());
        self.compute_mode = mode;
        self.backend = backend_for(mode);
    }

    // Queries ============================================================================

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Direct access for tests and tools that place particles by hand
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn cursor(&self) -> &CursorField {
        &self.cursor
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == LifecycleState::Paused
    }

    pub fn compute_mode(&self) -> ComputeMode {
        self.compute_mode
    }

    /// Mode the active backend really executes on
    pub fn active_backend_mode(&self) -> ComputeMode {
        self.backend.mode()
    }

    pub fn stats(&self) -> SimulationStats {
        SimulationStats {
            population: self.particles.len(),
            paused: self.is_paused(),
            frames: self.frames,
            compute_mode: self.compute_mode,
            collisions_resolved: self.collisions_resolved,
        }
    }
}

impl Default for ParticleSimulation {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}
