//! Wall reflection and pairwise disc collisions
//!
//! The pairwise pass is a plain O(n²) sweep over unordered pairs. Any
//! accelerated replacement has to keep the same per-pair arithmetic.

use crate::constants::{COLLISION_CEILING, COLLISION_EPSILON};
use crate::particle::{Bounds, Particle};

/// Clamp a particle back inside `bounds` and reflect the offending velocity
/// component, scaled by `restitution`.
///
/// Edges are tested independently, so a viewport smaller than the disc
/// leaves the particle pinned against whichever edge is checked last.
pub fn reflect_from_walls(p: &mut Particle, bounds: &Bounds, restitution: f32) {
    let r = p.radius;
    let [mut x, mut y] = p.position;
    let [mut vx, mut vy] = p.velocity;

    // Bottom
    if y > bounds.height - r {
        y = bounds.height - r;
        vy = -vy * restitution;
    }
    // Top
    if y < r {
        y = r;
        vy = -vy * restitution;
    }
    // Right
    if x > bounds.width - r {
        x = bounds.width - r;
        vx = -vx * restitution;
    }
    // Left
    if x < r {
        x = r;
        vx = -vx * restitution;
    }

    p.position = [x, y];
    p.velocity = [vx, vy];
}

/// Resolve one pair. Returns true if the discs were overlapping.
///
/// Positions are always separated by half the overlap each; the impulse is
/// skipped when the pair is already moving apart. Unit masses throughout.
pub fn resolve_pair(a: &mut Particle, b: &mut Particle, restitution: f32) -> bool {
    let delta = b.pos() - a.pos();
    let dist_sq = delta.length_squared();
    let min_dist = a.radius + b.radius;

    if dist_sq >= min_dist * min_dist || dist_sq <= COLLISION_EPSILON {
        return false;
    }

    let dist = dist_sq.sqrt();
    let normal = delta / dist;
    let overlap = min_dist - dist;
    let correction = normal * (overlap * 0.5);

    a.set_pos(a.pos() - correction);
    b.set_pos(b.pos() + correction);

    let dot = (b.vel() - a.vel()).dot(normal);
    if dot > 0.0 {
        return true;
    }

    let impulse = -(1.0 + restitution) * dot / 2.0;
    a.set_vel(a.vel() - normal * impulse);
    b.set_vel(b.vel() + normal * impulse);

    true
}

/// All-pairs collision pass
///
/// Returns `false` without touching anything when the population exceeds
/// [`COLLISION_CEILING`].
pub fn resolve_collisions(particles: &mut [Particle], restitution: f32) -> bool {
    let n = particles.len();
    if n > COLLISION_CEILING {
        return false;
    }

    // Pairs (i, j) with i < j, visited in index order
    for i in 0..n {
        let (head, tail) = particles.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            resolve_pair(a, b, restitution);
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn disc(x: f32, y: f32, vx: f32, vy: f32) -> Particle {
        Particle::new(Vec2::new(x, y), Vec2::new(vx, vy), 5.0, [255; 4])
    }

    #[test]
    fn test_wall_clamps_and_reflects_with_restitution() {
        let bounds = Bounds::new(100.0, 100.0);
        let mut p = disc(98.0, 50.0, 4.0, 0.0);
        reflect_from_walls(&mut p, &bounds, 0.5);

        assert_eq!(p.position, [95.0, 50.0]);
        assert_eq!(p.velocity, [-2.0, 0.0]);
    }

    #[test]
    fn test_floor_and_ceiling() {
        let bounds = Bounds::new(100.0, 100.0);

        let mut p = disc(50.0, 120.0, 0.0, 6.0);
        reflect_from_walls(&mut p, &bounds, 1.0);
        assert_eq!(p.position[1], 95.0);
        assert_eq!(p.velocity[1], -6.0);

        let mut p = disc(50.0, -3.0, 0.0, -6.0);
        reflect_from_walls(&mut p, &bounds, 1.0);
        assert_eq!(p.position[1], 5.0);
        assert_eq!(p.velocity[1], 6.0);
    }

    #[test]
    fn test_inside_particle_untouched() {
        let bounds = Bounds::new(100.0, 100.0);
        let mut p = disc(50.0, 50.0, 1.0, -1.0);
        let before = p;
        reflect_from_walls(&mut p, &bounds, 0.8);
        assert_eq!(p, before);
    }

    #[test]
    fn test_infeasible_viewport_does_not_panic() {
        let bounds = Bounds::new(4.0, 4.0);
        let mut p = disc(2.0, 2.0, 1.0, 1.0);
        reflect_from_walls(&mut p, &bounds, 0.8);
        assert!(p.position[0].is_finite() && p.position[1].is_finite());
    }

    #[test]
    fn test_overlap_closed_exactly() {
        let mut a = disc(0.0, 0.0, 0.0, 0.0);
        let mut b = disc(6.0, 0.0, 0.0, 0.0);
        assert!(resolve_pair(&mut a, &mut b, 1.0));

        let dist = (b.pos() - a.pos()).length();
        assert!((dist - 10.0).abs() < 1e-5);
        assert_eq!(a.position[0], -2.0);
        assert_eq!(b.position[0], 8.0);
    }

    #[test]
    fn test_head_on_elastic_swaps_velocities() {
        let mut a = disc(0.0, 0.0, 3.0, 0.0);
        let mut b = disc(8.0, 0.0, -3.0, 0.0);
        resolve_pair(&mut a, &mut b, 1.0);

        assert!((a.velocity[0] + 3.0).abs() < 1e-6);
        assert!((b.velocity[0] - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_inelastic_pair_stops_along_normal() {
        let mut a = disc(0.0, 0.0, 3.0, 0.0);
        let mut b = disc(8.0, 0.0, -3.0, 0.0);
        resolve_pair(&mut a, &mut b, 0.0);

        assert!(a.velocity[0].abs() < 1e-6);
        assert!(b.velocity[0].abs() < 1e-6);
    }

    #[test]
    fn test_separating_pair_only_gets_positional_fix() {
        let mut a = disc(0.0, 0.0, -1.0, 0.0);
        let mut b = disc(8.0, 0.0, 1.0, 0.0);
        assert!(resolve_pair(&mut a, &mut b, 1.0));

        assert_eq!(a.velocity, [-1.0, 0.0]);
        assert_eq!(b.velocity, [1.0, 0.0]);
        assert!(((b.pos() - a.pos()).length() - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_coincident_pair_skipped() {
        let mut a = disc(10.0, 10.0, 1.0, 0.0);
        let mut b = disc(10.0, 10.0, -1.0, 0.0);
        assert!(!resolve_pair(&mut a, &mut b, 1.0));
        assert_eq!(a.position, b.position);
    }

    #[test]
    fn test_resolver_skipped_above_ceiling() {
        let mut particles: Vec<Particle> = (0..COLLISION_CEILING + 1)
            .map(|i| disc(i as f32 * 20.0, 0.0, 0.0, 0.0))
            .collect();
        particles[0] = disc(0.0, 500.0, 0.0, 0.0);
        particles[1] = disc(4.0, 500.0, 0.0, 0.0);

        assert!(!resolve_collisions(&mut particles, 1.0));
        assert_eq!(particles[0].position, [0.0, 500.0]);
        assert_eq!(particles[1].position, [4.0, 500.0]);
    }

    #[test]
    fn test_resolver_runs_at_ceiling() {
        let mut particles: Vec<Particle> = (0..COLLISION_CEILING)
            .map(|i| disc(i as f32 * 20.0, 0.0, 0.0, 0.0))
            .collect();
        particles[0] = disc(0.0, 500.0, 0.0, 0.0);
        particles[1] = disc(4.0, 500.0, 0.0, 0.0);

        assert!(resolve_collisions(&mut particles, 1.0));
        assert!((particles[1].pos() - particles[0].pos()).length() >= 10.0 - 1e-4);
    }
}
