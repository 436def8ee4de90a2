//! Data-driven game balance
//!
//! Every numeric constant the simulation uses is read from a [`Tuning`] value
//! so tests and embedders can override it. Defaults come from [`crate::consts`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating tuning parameters
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("invalid tuning JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("gap margin must not be negative, got {0}")]
    NegativeMargin(f32),

    #[error("jump force must point upward (negative), got {0}")]
    JumpNotUpward(f32),

    #[error("gap of {gap} with margin {margin} does not fit in world height {height}")]
    GapDoesNotFit { gap: f32, margin: f32, height: f32 },
}

/// Simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub world_width: f32,
    pub world_height: f32,
    pub gravity: f32,
    pub jump_force: f32,
    pub actor_width: f32,
    pub actor_height: f32,
    pub obstacle_spacing: f32,
    pub gap_height: f32,
    pub obstacle_width: f32,
    pub obstacle_speed: f32,
    pub gap_margin: f32,
    /// Points between milestone events (0 disables milestones)
    pub milestone_interval: u32,
    pub easy_modifier: f32,
    pub normal_modifier: f32,
    pub hard_modifier: f32,
    /// Also scale horizontal obstacle speed by the difficulty modifier
    pub scale_obstacle_speed: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            actor_width: ACTOR_WIDTH,
            actor_height: ACTOR_HEIGHT,
            obstacle_spacing: OBSTACLE_SPACING,
            gap_height: GAP_HEIGHT,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_speed: OBSTACLE_SPEED,
            gap_margin: GAP_MARGIN,
            milestone_interval: MILESTONE_INTERVAL,
            easy_modifier: EASY_MODIFIER,
            normal_modifier: NORMAL_MODIFIER,
            hard_modifier: HARD_MODIFIER,
            scale_obstacle_speed: false,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check that the parameters describe a playable world
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("gravity", self.gravity),
            ("actor_width", self.actor_width),
            ("actor_height", self.actor_height),
            ("obstacle_spacing", self.obstacle_spacing),
            ("gap_height", self.gap_height),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_speed", self.obstacle_speed),
            ("easy_modifier", self.easy_modifier),
            ("normal_modifier", self.normal_modifier),
            ("hard_modifier", self.hard_modifier),
        ];
        for (name, value) in positive {
            // Written this way so NaN is rejected too
            if !(value > 0.0) {
                return Err(TuningError::NonPositive { name, value });
            }
        }

        if !(self.gap_margin >= 0.0) {
            return Err(TuningError::NegativeMargin(self.gap_margin));
        }
        if !(self.jump_force < 0.0) {
            return Err(TuningError::JumpNotUpward(self.jump_force));
        }
        if self.gap_height + 2.0 * self.gap_margin > self.world_height {
            return Err(TuningError::GapDoesNotFit {
                gap: self.gap_height,
                margin: self.gap_margin,
                height: self.world_height,
            });
        }
        Ok(())
    }

    /// Valid range for an obstacle's gap start: `[margin, height - gap - margin]`
    pub fn gap_start_range(&self) -> (f32, f32) {
        (
            self.gap_margin,
            self.world_height - self.gap_height - self.gap_margin,
        )
    }

    /// Actor spawn point: a quarter across, vertically centered
    pub fn actor_spawn(&self) -> (f32, f32) {
        (self.world_width / 4.0, self.world_height / 2.0)
    }
}
