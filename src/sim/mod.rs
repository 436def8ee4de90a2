//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per scheduled frame, no wall-clock time
//! - Injected RNG only
//! - Obstacles kept in spawn order
//! - No rendering, storage or platform dependencies

pub mod actor;
pub mod autopilot;
pub mod collision;
pub mod difficulty;
pub mod obstacles;
pub mod scheduler;
pub mod score;
pub mod state;
pub mod tick;

pub use actor::Actor;
pub use collision::{check_collision, hits_obstacle, out_of_bounds};
pub use difficulty::{Difficulty, DifficultyPolicy, DifficultySource};
pub use obstacles::{FieldTick, Obstacle, ObstacleField};
pub use scheduler::{GameEndSink, GameEventSink, Scheduler};
pub use score::ScoreTracker;
pub use state::{GameEvent, GamePhase, GameSession, RenderSnapshot};
pub use tick::{JumpOutcome, ResetOutcome, TickOutcome, jump, reset, tick};
