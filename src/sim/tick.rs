//! Per-frame update step
//!
//! One call advances exactly one display frame. Motion is fixed per frame
//! (frame-coupled like the original arcade pacing), so there is no dt
//! parameter anywhere in the simulation.

use glam::Vec2;

use super::collision;
use super::input::InputState;
use super::spawn;
use super::state::GameState;
use crate::consts::PLAYER_SPEED;

/// Advance the session by one frame. Returns true exactly when this frame
/// ended the session (first collision found).
pub fn tick(state: &mut GameState, input: &InputState) -> bool {
    if state.game_over {
        return false;
    }

    move_player(state, input);
    advance_obstacles(state);
    recycle_off_screen(state);

    if collision::first_hit(&state.player, &state.obstacles).is_some() {
        state.game_over = true;
        return true;
    }
    false
}

/// Teleport an out-of-bounds coordinate to the opposite edge. A single
/// wrap per axis, not modulo: a position further out than one full bound
/// still lands exactly on the far edge.
pub fn wrap(pos: Vec2, bounds: Vec2) -> Vec2 {
    let mut pos = pos;
    if pos.x < 0.0 {
        pos.x = bounds.x;
    } else if pos.x > bounds.x {
        pos.x = 0.0;
    }
    if pos.y < 0.0 {
        pos.y = bounds.y;
    } else if pos.y > bounds.y {
        pos.y = 0.0;
    }
    pos
}

fn move_player(state: &mut GameState, input: &InputState) {
    let player = &mut state.player;
    if input.up {
        player.pos.y -= PLAYER_SPEED;
    }
    if input.down {
        player.pos.y += PLAYER_SPEED;
    }
    if input.left {
        player.pos.x -= PLAYER_SPEED;
    }
    if input.right {
        player.pos.x += PLAYER_SPEED;
    }
    player.pos = wrap(player.pos, state.bounds);
}

fn advance_obstacles(state: &mut GameState) {
    for obstacle in &mut state.obstacles {
        obstacle.pos += obstacle.vel;
    }
}

/// Drop obstacles that have cleared the bottom edge and append one
/// replacement per removal. The field is filtered first and extended
/// afterwards, so the sweep never mutates the collection mid-iteration.
fn recycle_off_screen(state: &mut GameState) {
    let bounds = state.bounds;
    let before = state.obstacles.len();
    state.obstacles.retain(|o| !o.off_screen(bounds));
    let removed = before - state.obstacles.len();
    for _ in 0..removed {
        let replacement = spawn::replacement_obstacle(bounds, &mut state.rng);
        state.push_obstacle(replacement);
    }
}
