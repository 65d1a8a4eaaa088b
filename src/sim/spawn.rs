//! Obstacle and star placement
//!
//! Obstacles always start just above the visible area and always fall
//! (vy strictly positive). Placement is random per session, so tests seed
//! the RNG and assert ranges rather than exact positions.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Obstacle, Star};
use crate::consts::OBSTACLE_SIZE;

/// Horizontal drift magnitude for the session's starting field
const INITIAL_DRIFT: f32 = 1.0;
/// Fall-speed range for the starting field
const INITIAL_FALL_MIN: f32 = 1.0;
const INITIAL_FALL_MAX: f32 = 2.0;

/// Wider drift for replacements and interval-timer spawns
const REPLACEMENT_DRIFT: f32 = 2.0;
/// Fall-speed range for replacements; same floor, higher ceiling
const REPLACEMENT_FALL_MIN: f32 = 1.0;
const REPLACEMENT_FALL_MAX: f32 = 4.0;

/// Obstacle for the session's starting field: narrow drift, gentle fall
pub fn initial_obstacle(bounds: Vec2, rng: &mut Pcg32) -> Obstacle {
    Obstacle {
        pos: Vec2::new(rng.random_range(0.0..bounds.x), -OBSTACLE_SIZE),
        vel: Vec2::new(
            rng.random_range(-INITIAL_DRIFT..INITIAL_DRIFT),
            rng.random_range(INITIAL_FALL_MIN..INITIAL_FALL_MAX),
        ),
        size: OBSTACLE_SIZE,
    }
}

/// Obstacle replacing a recycled one, or added by the interval timer:
/// wider drift and a faster fall ceiling than the starting field
pub fn replacement_obstacle(bounds: Vec2, rng: &mut Pcg32) -> Obstacle {
    Obstacle {
        pos: Vec2::new(rng.random_range(0.0..bounds.x), -OBSTACLE_SIZE),
        vel: Vec2::new(
            rng.random_range(-REPLACEMENT_DRIFT..REPLACEMENT_DRIFT),
            rng.random_range(REPLACEMENT_FALL_MIN..REPLACEMENT_FALL_MAX),
        ),
        size: OBSTACLE_SIZE,
    }
}

/// Scatter decorative stars across the whole visible area
pub fn scatter_stars(bounds: Vec2, count: usize, rng: &mut Pcg32) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            pos: Vec2::new(
                rng.random_range(0.0..bounds.x),
                rng.random_range(0.0..bounds.y),
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_obstacles_spawn_above_visible_area() {
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..200 {
            let o = initial_obstacle(BOUNDS, &mut rng);
            assert_eq!(o.pos.y, -OBSTACLE_SIZE);
            assert!(o.pos.x >= 0.0 && o.pos.x < BOUNDS.x);
        }
    }

    #[test]
    fn test_obstacles_always_fall() {
        let mut rng = Pcg32::seed_from_u64(2);
        for _ in 0..200 {
            let a = initial_obstacle(BOUNDS, &mut rng);
            let b = replacement_obstacle(BOUNDS, &mut rng);
            assert!(a.vel.y >= INITIAL_FALL_MIN);
            assert!(a.vel.y < INITIAL_FALL_MAX);
            assert!(b.vel.y >= REPLACEMENT_FALL_MIN);
            assert!(b.vel.y < REPLACEMENT_FALL_MAX);
        }
    }

    #[test]
    fn test_drift_stays_in_symmetric_range() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..200 {
            let a = initial_obstacle(BOUNDS, &mut rng);
            let b = replacement_obstacle(BOUNDS, &mut rng);
            assert!(a.vel.x.abs() <= INITIAL_DRIFT);
            assert!(b.vel.x.abs() <= REPLACEMENT_DRIFT);
        }
    }

    #[test]
    fn test_stars_cover_requested_count_inside_bounds() {
        let mut rng = Pcg32::seed_from_u64(4);
        let stars = scatter_stars(BOUNDS, 100, &mut rng);
        assert_eq!(stars.len(), 100);
        for star in &stars {
            assert!(star.pos.x >= 0.0 && star.pos.x < BOUNDS.x);
            assert!(star.pos.y >= 0.0 && star.pos.y < BOUNDS.y);
        }
    }
}
