//! Spawning and resizing the particle collection

use glam::Vec2;
use particle_physics::{Bounds, Particle, SPAWN_COLOR_MIN, SPAWN_VELOCITY_RANGE, SPAWN_VELOCITY_STEPS};
use rand::Rng;

/// Create one particle somewhere inside `bounds`
///
/// Velocity is drawn per axis from [-10, 10] in steps of 0.1 and then scaled.
pub fn spawn_particle<R: Rng>(
    rng: &mut R,
    bounds: &Bounds,
    velocity_scale: f32,
    radius: f32,
) -> Particle {
    let position = Vec2::new(
        rng.random_range(0.0..=bounds.width),
        rng.random_range(0.0..=bounds.height),
    );

    let steps = SPAWN_VELOCITY_RANGE as i32 * SPAWN_VELOCITY_STEPS;
    let mut axis = || rng.random_range(-steps..=steps) as f32 / SPAWN_VELOCITY_STEPS as f32;
    let velocity = Vec2::new(axis(), axis()) * velocity_scale;

    let color = [
        rng.random_range(SPAWN_COLOR_MIN..=u8::MAX),
        rng.random_range(SPAWN_COLOR_MIN..=u8::MAX),
        u8::MAX,
        u8::MAX,
    ];

    Particle::new(position, velocity, radius, color)
}

/// Truncate from the tail or append fresh particles until `particles.len() == count`
///
/// Existing particles keep their index and state when growing.
pub fn resize_population<R: Rng>(
    particles: &mut Vec<Particle>,
    count: usize,
    rng: &mut R,
    bounds: &Bounds,
    velocity_scale: f32,
    radius: f32,
) {
    if count <= particles.len() {
        particles.truncate(count);
        return;
    }

    let missing = count - particles.len();
    particles.reserve(missing);
    for _ in 0..missing {
        particles.push(spawn_particle(rng, bounds, velocity_scale, radius));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_rule() {
        let mut rng = StdRng::seed_from_u64(7);
        let bounds = Bounds::new(320.0, 240.0);

        for _ in 0..500 {
            let p = spawn_particle(&mut rng, &bounds, 2.0, 4.5);
            assert!((0.0..=320.0).contains(&p.position[0]));
            assert!((0.0..=240.0).contains(&p.position[1]));
            assert!(p.velocity[0].abs() <= 20.0 + 1e-4);
            assert!(p.velocity[1].abs() <= 20.0 + 1e-4);
            assert_eq!(p.radius, 4.5);
            assert!(p.color[0] >= 50 && p.color[1] >= 50);
            assert_eq!(&p.color[2..], &[255, 255]);
        }
    }

    #[test]
    fn test_zero_sized_bounds_spawn_at_origin() {
        let mut rng = StdRng::seed_from_u64(1);
        let p = spawn_particle(&mut rng, &Bounds::new(0.0, 0.0), 1.0, 3.0);
        assert_eq!(p.position, [0.0, 0.0]);
    }

    #[test]
    fn test_resize_grows_and_shrinks() {
        let mut rng = StdRng::seed_from_u64(3);
        let bounds = Bounds::default();
        let mut particles = Vec::new();

        resize_population(&mut particles, 10, &mut rng, &bounds, 1.0, 3.0);
        assert_eq!(particles.len(), 10);
        let head = particles.clone();

        resize_population(&mut particles, 25, &mut rng, &bounds, 1.0, 3.0);
        assert_eq!(particles.len(), 25);
        assert_eq!(&particles[..10], &head[..]);

        resize_population(&mut particles, 4, &mut rng, &bounds, 1.0, 3.0);
        assert_eq!(&particles[..], &head[..4]);

        resize_population(&mut particles, 0, &mut rng, &bounds, 1.0, 3.0);
        assert!(particles.is_empty());
    }
}
