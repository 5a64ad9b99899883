//! # Particle Simulation Engine
//!
//! Stateful 2D disc simulation: tunables, play/pause lifecycle, population
//! management and a pluggable compute backend stepping at a fixed rate.

pub mod backend;
pub mod params;
pub mod population;
pub mod simulation;
pub mod timestep;

pub use backend::*;
pub use params::*;
pub use population::*;
pub use simulation::*;
pub use timestep::*;
