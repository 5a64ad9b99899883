//! Simulation constants
//!
//! These are tuned for visually pleasing motion at 60 Hz, not physical accuracy.
//! Velocities are expressed in pixels per frame.

/// Fixed logical timestep (seconds)
pub const FIXED_DT: f32 = 1.0 / 60.0;

/// Gravity multiplier reconciling the slider range with on-screen motion
pub const GRAVITY_SCALE: f32 = 10.0;

/// Friction multiplier used when computing the per-frame damping factor
pub const DAMPING_SCALE: f32 = 2.0;

/// Below this distance the cursor field applies no force
pub const CURSOR_DEAD_ZONE: f32 = 1.0;

/// Cursor field intensity multiplier
pub const CURSOR_FORCE_SCALE: f32 = 2.0;

/// Above this population the pairwise resolver is skipped entirely
pub const COLLISION_CEILING: usize = 2000;

/// Squared-distance floor for collision normals (near-coincident particles are ignored)
pub const COLLISION_EPSILON: f32 = 1.0e-4;

/// Per-axis spawn velocity bound before scaling (pixels per frame)
pub const SPAWN_VELOCITY_RANGE: f32 = 10.0;

/// Spawn velocities are drawn in steps of `1 / SPAWN_VELOCITY_STEPS`
pub const SPAWN_VELOCITY_STEPS: i32 = 10;

/// Lower bound of the randomized red/green spawn channels
pub const SPAWN_COLOR_MIN: u8 = 50;

/// Velocity scales closer to zero than this are treated as a fresh baseline
pub const VELOCITY_SCALE_EPSILON: f32 = 1.0e-6;

/// Smallest accepted cursor field radius
pub const MIN_CURSOR_RADIUS: f32 = 1.0;
