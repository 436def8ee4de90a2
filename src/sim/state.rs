//! Game state and core simulation types
//!
//! A [`GameSession`] owns everything one run needs. There is no global state,
//! so any number of sessions can exist side by side.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::difficulty::{Difficulty, DifficultyPolicy};
use super::obstacles::{Obstacle, ObstacleField};
use super::score::ScoreTracker;
use crate::tuning::Tuning;

/// Current phase of gameplay.
///
/// Legal transitions: NotStarted -> Running (first jump), Running -> Over
/// (collision), Over -> NotStarted (explicit reset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Actor at rest, waiting for the first jump
    #[default]
    NotStarted,
    /// Active gameplay
    Running,
    /// Run ended; only a reset leaves this phase
    Over,
}

/// Notifications for collaborators (sound, HUD). The scheduler drains the
/// queue at the end of every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// First jump started the run
    Started,
    /// Jump impulse applied
    Jumped,
    /// Actor crossed an obstacle
    Passed { score: u32 },
    /// Score reached a multiple of the milestone interval
    Milestone { score: u32 },
    /// Collision ended the run
    Ended { score: u32 },
    /// Session returned to NotStarted
    Reset,
}

/// Read-only view of a session for presentation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub actor: Actor,
    /// Rotation hint in radians, clamped
    pub tilt: f32,
    /// Obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub obstacle_width: f32,
    pub world_width: f32,
    pub world_height: f32,
    pub score: u32,
    pub phase: GamePhase,
}

/// One run of the game
#[derive(Debug, Clone)]
pub struct GameSession<R = Pcg32> {
    pub(crate) tuning: Tuning,
    pub(crate) policy: DifficultyPolicy,
    pub(crate) difficulty: Difficulty,
    pub(crate) phase: GamePhase,
    pub(crate) actor: Actor,
    pub(crate) field: ObstacleField,
    pub(crate) score: ScoreTracker,
    /// Ticks simulated since the last reset
    pub(crate) time_ticks: u64,
    pub(crate) events: Vec<GameEvent>,
    pub(crate) rng: R,
}

impl GameSession<Pcg32> {
    /// Session with default tuning and a seeded RNG
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Session with custom tuning. Validate tuning loaded from untrusted
    /// input first (see [`Tuning::from_json`]).
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self::with_rng(tuning, Pcg32::seed_from_u64(seed))
    }
}

impl<R: RngCore> GameSession<R> {
    /// Session driven by any random source
    pub fn with_rng(tuning: Tuning, rng: R) -> Self {
        Self {
            policy: DifficultyPolicy::from_tuning(&tuning),
            difficulty: Difficulty::default(),
            phase: GamePhase::NotStarted,
            actor: Actor::spawn(&tuning),
            field: ObstacleField::new(),
            score: ScoreTracker::new(tuning.milestone_interval),
            time_ticks: 0,
            events: Vec::new(),
            tuning,
            rng,
        }
    }
}

impl<R> GameSession<R> {
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        self.field.obstacles()
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if difficulty != self.difficulty {
            log::info!(
                "Difficulty changed: {} -> {}",
                self.difficulty.as_str(),
                difficulty.as_str()
            );
            self.difficulty = difficulty;
        }
    }

    /// Current multiplier for gravity and jump
    pub fn modifier(&self) -> f32 {
        self.policy.modifier_for(self.difficulty)
    }

    /// Horizontal obstacle speed for this tick
    pub fn obstacle_speed(&self) -> f32 {
        if self.tuning.scale_obstacle_speed {
            self.tuning.obstacle_speed * self.modifier()
        } else {
            self.tuning.obstacle_speed
        }
    }

    /// Take all events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            actor: self.actor,
            tilt: self.actor.tilt(),
            obstacles: self.field.obstacles().to_vec(),
            obstacle_width: self.tuning.obstacle_width,
            world_width: self.tuning.world_width,
            world_height: self.tuning.world_height,
            score: self.score.score(),
            phase: self.phase,
        }
    }
}
