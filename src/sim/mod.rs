//! Gameplay simulation module
//!
//! All gameplay logic lives here. This module must stay platform-free:
//! - No rendering or DOM dependencies
//! - Randomness only through the session RNG carried in `GameState`
//! - Collections are rebuilt after iteration, never mutated mid-sweep

pub mod collision;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{circles_overlap, first_hit};
pub use input::{Direction, InputState};
pub use state::{GameState, Obstacle, Player, Star};
pub use tick::{tick, wrap};
