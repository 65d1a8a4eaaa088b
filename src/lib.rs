//! Astro Dodge - a falling-asteroid dodging game
//!
//! Core modules:
//! - `sim`: Gameplay simulation (movement, spawning, wrap-around, collisions)
//! - `renderer`: Canvas2D sprite rendering
//! - `besttime`: Persisted best-survival-time record
//! - `settings`: Session configuration

pub mod besttime;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod settings;
pub mod sim;

pub use besttime::BestTime;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Player sprite diameter; half of it is the collision radius
    pub const PLAYER_SIZE: f32 = 50.0;
    /// Obstacle sprite diameter
    pub const OBSTACLE_SIZE: f32 = 70.0;
    /// Player movement per frame (frame-coupled, not time-corrected)
    pub const PLAYER_SPEED: f32 = 5.0;

    /// Background stars per session
    pub const NUM_STARS: usize = 100;
    /// Star square edge in pixels
    pub const STAR_SIZE: f64 = 2.0;

    /// Obstacle population at session start
    pub const DEFAULT_NUM_OBSTACLES: usize = 10;
    /// Period of the wall-clock spawn timer (milliseconds)
    pub const SPAWN_INTERVAL_MS: i32 = 2000;

    /// Sprite asset paths, resolved relative to the page
    pub const PLAYER_SPRITE: &str = "images/spaceship.png";
    pub const OBSTACLE_SPRITE: &str = "images/asteroid.png";
}
