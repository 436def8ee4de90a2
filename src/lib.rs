//! Flappy - a side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, scoring, game state)
//! - `tuning`: Overridable game balance parameters
//! - `settings`: Persisted player preferences
//! - `platform`: Browser/native platform abstraction (storage, input)
//! - `renderer`: World to device mapping and vertex batches for presentation

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use settings::{Settings, StoredDifficulty};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Logical world dimensions (viewport independent)
    pub const WORLD_WIDTH: f32 = 1920.0;
    pub const WORLD_HEIGHT: f32 = 1080.0;

    /// Downward acceleration applied every tick
    pub const GRAVITY: f32 = 0.5;
    /// Velocity set by a jump (negative = up)
    pub const JUMP_FORCE: f32 = -8.0;

    /// Actor size; x is fixed at a quarter of the world width
    pub const ACTOR_WIDTH: f32 = 68.0;
    pub const ACTOR_HEIGHT: f32 = 48.0;

    /// Obstacle defaults
    pub const OBSTACLE_SPACING: f32 = 600.0;
    pub const GAP_HEIGHT: f32 = 300.0;
    pub const OBSTACLE_WIDTH: f32 = 104.0;
    pub const OBSTACLE_SPEED: f32 = 4.0;
    /// Minimum distance between a gap and the top/bottom of the world
    pub const GAP_MARGIN: f32 = 50.0;

    /// Tilt hint: radians per unit of velocity, clamped to +-MAX_TILT
    pub const TILT_PER_VELOCITY: f32 = 0.1;
    pub const MAX_TILT: f32 = 0.5;

    /// Points between milestone signals
    pub const MILESTONE_INTERVAL: u32 = 10;

    /// Difficulty modifiers
    pub const EASY_MODIFIER: f32 = 0.8;
    pub const NORMAL_MODIFIER: f32 = 1.0;
    pub const HARD_MODIFIER: f32 = 1.25;
}
