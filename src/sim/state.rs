//! Session state and core entity types
//!
//! Everything the loop driver mutates per frame lives here, behind one
//! context object instead of ambient shared state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::spawn;
use crate::consts::*;

/// The player-controlled sprite
#[derive(Debug, Clone, Copy)]
pub struct Player {
    /// Center position in canvas coordinates
    pub pos: Vec2,
    /// Sprite diameter; half of it is the collision radius
    pub size: f32,
}

impl Player {
    /// Player centered in the given bounds
    pub fn centered(bounds: Vec2) -> Self {
        Self {
            pos: bounds / 2.0,
            size: PLAYER_SIZE,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }
}

/// A falling obstacle
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    /// Center position in canvas coordinates
    pub pos: Vec2,
    /// Per-frame position delta
    pub vel: Vec2,
    /// Sprite diameter; half of it is the collision radius
    pub size: f32,
}

impl Obstacle {
    #[inline]
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }

    /// True once the obstacle has fully cleared the bottom edge
    #[inline]
    pub fn off_screen(&self, bounds: Vec2) -> bool {
        self.pos.y > bounds.y + self.size
    }
}

/// A decorative background star; placed once per session, never mutated
#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub pos: Vec2,
}

/// Complete session state, owned by the loop driver
#[derive(Debug, Clone)]
pub struct GameState {
    /// Canvas dimensions in CSS pixels
    pub bounds: Vec2,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub stars: Vec<Star>,
    /// One-way flag; the driver stops scheduling frames once set
    pub game_over: bool,
    /// Optional obstacle population cap. `None` keeps the interval-timer
    /// growth unbounded, which the default difficulty curve relies on.
    pub max_obstacles: Option<usize>,
    /// Session RNG for obstacle and star placement
    pub rng: Pcg32,
}

impl GameState {
    /// Fresh session: player at canvas center, a field of obstacles just
    /// above the top edge, stars rescattered
    pub fn new(bounds: Vec2, num_obstacles: usize, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = spawn::scatter_stars(bounds, NUM_STARS, &mut rng);
        let obstacles = (0..num_obstacles)
            .map(|_| spawn::initial_obstacle(bounds, &mut rng))
            .collect();

        Self {
            bounds,
            player: Player::centered(bounds),
            obstacles,
            stars,
            game_over: false,
            max_obstacles: None,
            rng,
        }
    }

    /// Append an obstacle, honoring the optional population cap
    pub fn push_obstacle(&mut self, obstacle: Obstacle) {
        if let Some(cap) = self.max_obstacles {
            if self.obstacles.len() >= cap {
                return;
            }
        }
        self.obstacles.push(obstacle);
    }

    /// Wall-clock timer spawn: one extra obstacle, independent of the
    /// frame clock and of the per-frame recycling sweep
    pub fn spawn_extra(&mut self) {
        let obstacle = spawn::replacement_obstacle(self.bounds, &mut self.rng);
        self.push_obstacle(obstacle);
    }

    /// Viewport resize. Entities already placed keep their coordinates;
    /// only the bounds used for wrapping and recycling change.
    pub fn set_bounds(&mut self, bounds: Vec2) {
        self.bounds = bounds;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_new_session_resets_everything() {
        let state = GameState::new(BOUNDS, 10, 42);
        assert!(!state.game_over);
        assert_eq!(state.player.pos, BOUNDS / 2.0);
        assert_eq!(state.obstacles.len(), 10);
        assert_eq!(state.stars.len(), NUM_STARS);
    }

    #[test]
    fn test_spawn_extra_grows_population() {
        let mut state = GameState::new(BOUNDS, 3, 42);
        state.spawn_extra();
        assert_eq!(state.obstacles.len(), 4);
    }

    #[test]
    fn test_population_cap_limits_timer_spawns() {
        let mut state = GameState::new(BOUNDS, 3, 42);
        state.max_obstacles = Some(3);
        state.spawn_extra();
        assert_eq!(state.obstacles.len(), 3);
    }

    #[test]
    fn test_resize_keeps_entity_coordinates() {
        let mut state = GameState::new(BOUNDS, 5, 42);
        let player_pos = state.player.pos;
        let star_pos = state.stars[0].pos;
        state.set_bounds(Vec2::new(1024.0, 768.0));
        assert_eq!(state.player.pos, player_pos);
        assert_eq!(state.stars[0].pos, star_pos);
    }
}
