//! Circular-overlap collision between the player and the obstacle field

use super::state::{Obstacle, Player};

/// True when the two circles overlap. Strict inequality: centers exactly
/// one radius-sum apart do not collide.
#[inline]
pub fn circles_overlap(player: &Player, obstacle: &Obstacle) -> bool {
    let distance = player.pos.distance(obstacle.pos);
    distance < player.radius() + obstacle.radius()
}

/// Index of the first obstacle overlapping the player, in collection
/// iteration order. Obstacles after the first hit are not examined.
pub fn first_hit(player: &Player, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles
        .iter()
        .position(|obstacle| circles_overlap(player, obstacle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn player_at_origin() -> Player {
        Player {
            pos: Vec2::ZERO,
            size: 50.0,
        }
    }

    fn obstacle_at(x: f32, y: f32) -> Obstacle {
        Obstacle {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            size: 70.0,
        }
    }

    #[test]
    fn test_overlap_inside_radius_sum() {
        // Radii 25 + 35 = 60: distance 59 collides
        let player = player_at_origin();
        assert!(circles_overlap(&player, &obstacle_at(59.0, 0.0)));
    }

    #[test]
    fn test_no_overlap_at_exact_radius_sum() {
        // Touching is not a hit: the inequality is strict
        let player = player_at_origin();
        assert!(!circles_overlap(&player, &obstacle_at(60.0, 0.0)));
        assert!(!circles_overlap(&player, &obstacle_at(0.0, 60.0)));
    }

    #[test]
    fn test_overlap_uses_euclidean_distance() {
        // (36, 48) is distance 60 away, a miss; (35, 47) is inside
        let player = player_at_origin();
        assert!(!circles_overlap(&player, &obstacle_at(36.0, 48.0)));
        assert!(circles_overlap(&player, &obstacle_at(35.0, 47.0)));
    }

    #[test]
    fn test_first_hit_respects_iteration_order() {
        let player = player_at_origin();
        let obstacles = vec![
            obstacle_at(500.0, 500.0),
            obstacle_at(10.0, 0.0),
            obstacle_at(0.0, 10.0),
        ];
        assert_eq!(first_hit(&player, &obstacles), Some(1));
    }

    #[test]
    fn test_first_hit_none_when_field_is_clear() {
        let player = player_at_origin();
        let obstacles = vec![obstacle_at(500.0, 500.0), obstacle_at(-300.0, 200.0)];
        assert_eq!(first_hit(&player, &obstacles), None);
    }
}
