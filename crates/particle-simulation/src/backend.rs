//! Compute backends
//!
//! A backend advances the particle slice by one fixed step. Only the CPU path
//! exists; `ComputeMode::Gpu` is accepted and currently served by the CPU.

use particle_physics::{
    integrate_particle, reflect_from_walls, resolve_collisions, Bounds, CursorForce,
    IntegrationParams, Particle, FIXED_DT,
};

/// Requested execution target
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ComputeMode {
    #[default]
    Cpu,
    Gpu,
}

impl ComputeMode {
    pub fn label(&self) -> &'static str {
        match self {
            ComputeMode::Cpu => "CPU",
            ComputeMode::Gpu => "GPU",
        }
    }
}

/// Frame inputs handed to a backend
#[derive(Clone, Copy, Debug)]
pub struct StepInputs {
    pub gravity: f32,
    pub friction: f32,
    pub restitution: f32,
    pub cursor: Option<CursorForce>,
    pub bounds: Bounds,
}

/// What a backend did during one step
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// False when the population was above the collision ceiling
    pub collisions_resolved: bool,
}

/// Executes integration followed by collision resolution
///
/// Implementations must reproduce the CPU arithmetic per particle and per
/// pair so that backends stay interchangeable.
pub trait ComputeBackend {
    /// Mode this backend actually runs on
    fn mode(&self) -> ComputeMode;

    fn step(&mut self, particles: &mut [Particle], inputs: &StepInputs) -> StepReport;
}

/// Single-threaded reference implementation
#[derive(Debug, Default)]
pub struct CpuBackend;

impl ComputeBackend for CpuBackend {
    fn mode(&self) -> ComputeMode {
        ComputeMode::Cpu
    }

    fn step(&mut self, particles: &mut [Particle], inputs: &StepInputs) -> StepReport {
        let params = IntegrationParams {
            gravity: inputs.gravity,
            friction: inputs.friction,
            cursor: inputs.cursor,
        };

        for p in particles.iter_mut() {
            integrate_particle(p, &params, FIXED_DT);
            reflect_from_walls(p, &inputs.bounds, inputs.restitution);
        }

        StepReport {
            collisions_resolved: resolve_collisions(particles, inputs.restitution),
        }
    }
}

/// Pick the backend serving `mode`
pub fn backend_for(mode: ComputeMode) -> Box<dyn ComputeBackend> {
    match mode {
        ComputeMode::Cpu => Box::new(CpuBackend),
        ComputeMode::Gpu => {
            log::warn!("GPU compute path is not available, running on the CPU");
            Box::new(CpuBackend)
        }
    }
}
