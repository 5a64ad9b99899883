use glam::Vec2;
use particle_physics::{Particle, COLLISION_CEILING};
use particle_simulation::{ParticleSimulation, SimulationConfig};

/// Seeded simulation on an 800x600 viewport
pub fn seeded_sim(count: usize, seed: u64) -> ParticleSimulation {
    ParticleSimulation::new(
        SimulationConfig::default()
            .with_bounds(800.0, 600.0)
            .with_population(count)
            .with_seed(seed),
    )
}

/// No gravity, no friction, no cursor: particles coast
pub fn coasting_sim(count: usize) -> ParticleSimulation {
    let mut sim = seeded_sim(count, 42);
    sim.set_gravity(0.0);
    sim.set_friction(0.0);
    sim
}

pub fn place(sim: &mut ParticleSimulation, index: usize, pos: Vec2, vel: Vec2) {
    let p = &mut sim.particles_mut()[index];
    p.set_pos(pos);
    p.set_vel(vel);
}

fn distance(a: &Particle, b: &Particle) -> f32 {
    (b.pos() - a.pos()).length()
}

// ==================================================================================
// Collisions
// ==================================================================================

#[test]
fn overlapping_pair_separated_after_one_frame() {
    let mut sim = coasting_sim(2);
    sim.set_particle_radius(10.0);
    place(&mut sim, 0, Vec2::new(300.0, 300.0), Vec2::new(1.0, 0.0));
    place(&mut sim, 1, Vec2::new(312.0, 300.0), Vec2::new(-1.0, 0.0));

    sim.step();

    let p = sim.particles();
    assert!(p[0].radius + p[1].radius <= distance(&p[0], &p[1]) + 1e-3);
    // approaching pair bounced apart
    assert!(p[0].velocity[0] < 0.0);
    assert!(p[1].velocity[0] > 0.0);
}

#[test]
fn collisions_skipped_above_ceiling() {
    let mut sim = coasting_sim(2500);
    assert!(sim.particle_count() > COLLISION_CEILING);
    place(&mut sim, 0, Vec2::new(100.0, 100.0), Vec2::ZERO);
    place(&mut sim, 1, Vec2::new(102.0, 100.0), Vec2::ZERO);

    sim.step();

    let p = sim.particles();
    assert!(distance(&p[0], &p[1]) < p[0].radius + p[1].radius);
    assert_eq!(p[0].position, [100.0, 100.0]);
    assert!(!sim.stats().collisions_resolved);
}

// ==================================================================================
// Walls
// ==================================================================================

#[test]
fn lone_particle_stays_inside_viewport() {
    for seed in 0..20 {
        let mut sim = seeded_sim(1, seed);
        sim.set_velocity_scale(4.0);
        sim.set_restitution(1.0);

        for _ in 0..600 {
            sim.step();
            let p = &sim.particles()[0];
            assert!(
                sim.bounds().contains_disc(p.pos(), p.radius),
                "seed {} escaped at {:?}",
                seed,
                p.position
            );
        }
    }
}

#[test]
fn shrinking_viewport_clamps_on_next_step() {
    let mut sim = coasting_sim(1);
    place(&mut sim, 0, Vec2::new(700.0, 500.0), Vec2::ZERO);

    sim.on_viewport_resize(400.0, 300.0);
    // not teleported by the resize itself
    assert_eq!(sim.particles()[0].position, [700.0, 500.0]);

    sim.step();
    let p = &sim.particles()[0];
    assert!(sim.bounds().contains_disc(p.pos(), p.radius));
}

#[test]
fn speed_conserved_without_friction_until_wall() {
    let mut sim = coasting_sim(1);
    place(&mut sim, 0, Vec2::new(100.0, 300.0), Vec2::new(3.0, 0.0));

    // 100 frames at 3 px/frame reaches x = 400, far from the right wall
    for _ in 0..100 {
        sim.step();
        assert!((sim.particles()[0].speed() - 3.0).abs() < 1e-5);
    }
    assert!((sim.particles()[0].position[0] - 400.0).abs() < 1e-2);
}

// ==================================================================================
// Lifecycle
// ==================================================================================

#[test]
fn double_toggle_matches_never_paused() {
    let mut control = seeded_sim(60, 9);
    let mut toggled = seeded_sim(60, 9);
    assert_eq!(control.particles(), toggled.particles());

    toggled.toggle_pause();
    assert!(!toggled.step());
    toggled.toggle_pause();
    assert!(!toggled.is_paused());

    for _ in 0..30 {
        control.step();
        toggled.step();
    }
    assert_eq!(control.particles(), toggled.particles());
}

#[test]
fn reset_regenerates_in_either_state() {
    let mut sim = seeded_sim(50, 5);
    sim.step();
    sim.toggle_pause();
    sim.reset();

    assert!(sim.is_paused());
    assert_eq!(sim.particle_count(), 50);
}

// ==================================================================================
// Tunables
// ==================================================================================

#[test]
fn velocity_rescale_round_trip() {
    let mut sim = seeded_sim(200, 3);
    let before: Vec<[f32; 2]> = sim.particles().iter().map(|p| p.velocity).collect();

    sim.set_velocity_scale(2.0);
    sim.set_velocity_scale(1.0);

    for (p, v) in sim.particles().iter().zip(&before) {
        assert!((p.velocity[0] - v[0]).abs() < 1e-5);
        assert!((p.velocity[1] - v[1]).abs() < 1e-5);
    }
}

#[test]
fn growing_population_keeps_existing_prefix() {
    let mut sim = seeded_sim(0, 8);
    sim.set_population(500);
    let head = sim.particles().to_vec();

    sim.set_population(1000);

    assert_eq!(sim.particle_count(), 1000);
    assert_eq!(&sim.particles()[..500], &head[..]);
    assert_eq!(sim.params().target_population, 1000);
}

#[test]
fn reset_uses_latest_population() {
    let mut sim = seeded_sim(10, 1);
    sim.set_population(35);
    sim.reset();
    assert_eq!(sim.particle_count(), 35);
}

// ==================================================================================
// Cursor field
// ==================================================================================

#[test]
fn cursor_field_pulls_only_inside_radius() {
    let mut sim = coasting_sim(2);
    place(&mut sim, 0, Vec2::new(150.0, 100.0), Vec2::ZERO);
    place(&mut sim, 1, Vec2::new(400.0, 100.0), Vec2::ZERO);

    sim.set_cursor_radius(150.0);
    sim.set_cursor_strength(4.0);
    sim.set_cursor_active(true);
    sim.on_pointer_move(100.0, 100.0);

    sim.step();

    let p = sim.particles();
    // attraction: accelerated toward the cursor at x = 100
    assert!(p[0].velocity[0] < 0.0);
    assert_eq!(p[1].velocity, [0.0, 0.0]);
    assert_eq!(p[1].position, [400.0, 100.0]);
}

#[test]
fn inactive_cursor_is_inert() {
    let mut sim = coasting_sim(1);
    place(&mut sim, 0, Vec2::new(150.0, 100.0), Vec2::ZERO);
    sim.on_pointer_move(100.0, 100.0);

    sim.step();
    assert_eq!(sim.particles()[0].velocity, [0.0, 0.0]);
}
