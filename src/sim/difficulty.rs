//! Difficulty levels and the modifiers they map to

use serde::{Deserialize, Serialize};

use crate::consts::{EASY_MODIFIER, HARD_MODIFIER, NORMAL_MODIFIER};
use crate::tuning::Tuning;

/// Difficulty level, selected and persisted outside the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    /// Parse a stored key, `None` if unrecognized
    pub fn parse(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" | "medium" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Parse a stored key, falling back to `Normal` for anything unknown
    pub fn from_key(key: &str) -> Self {
        Self::parse(key).unwrap_or_default()
    }
}

/// Where the simulation loop reads the current difficulty from
pub trait DifficultySource {
    fn current(&self) -> Difficulty;
}

impl DifficultySource for Difficulty {
    fn current(&self) -> Difficulty {
        *self
    }
}

/// Maps difficulty levels to the multiplier applied to gravity and jump
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyPolicy {
    easy: f32,
    normal: f32,
    hard: f32,
}

impl Default for DifficultyPolicy {
    fn default() -> Self {
        Self::new(EASY_MODIFIER, NORMAL_MODIFIER, HARD_MODIFIER)
    }
}

impl DifficultyPolicy {
    pub fn new(easy: f32, normal: f32, hard: f32) -> Self {
        Self { easy, normal, hard }
    }

    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self::new(
            tuning.easy_modifier,
            tuning.normal_modifier,
            tuning.hard_modifier,
        )
    }

    pub fn modifier_for(&self, level: Difficulty) -> f32 {
        match level {
            Difficulty::Easy => self.easy,
            Difficulty::Normal => self.normal,
            Difficulty::Hard => self.hard,
        }
    }

    /// Lookup by raw key; unknown keys get the normal modifier
    pub fn modifier_for_key(&self, key: &str) -> f32 {
        self.modifier_for(Difficulty::from_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::JUMP_FORCE;
    use crate::sim::Actor;

    #[test]
    fn test_default_modifiers() {
        let policy = DifficultyPolicy::default();
        assert_eq!(policy.modifier_for(Difficulty::Easy), 0.8);
        assert_eq!(policy.modifier_for(Difficulty::Normal), 1.0);
        assert_eq!(policy.modifier_for(Difficulty::Hard), 1.25);
    }

    #[test]
    fn test_unknown_key_falls_back_to_normal() {
        let policy = DifficultyPolicy::default();
        assert_eq!(policy.modifier_for_key("nightmare"), 1.0);
        assert_eq!(policy.modifier_for_key(""), 1.0);
        assert_eq!(policy.modifier_for_key(" HARD "), 1.25);
        assert_eq!(Difficulty::from_key("???"), Difficulty::Normal);
        assert_eq!(Difficulty::parse("???"), None);
    }

    #[test]
    fn test_key_round_trip() {
        for level in Difficulty::ALL {
            assert_eq!(Difficulty::parse(level.as_str()), Some(level));
        }
    }

    #[test]
    fn test_jump_scales_exactly_by_modifier() {
        let policy = DifficultyPolicy::default();
        for level in Difficulty::ALL {
            let modifier = policy.modifier_for(level);
            let mut actor = Actor::new(480.0, 540.0, 68.0, 48.0);
            actor.jump(JUMP_FORCE, modifier);
            assert_eq!(actor.velocity, JUMP_FORCE * modifier, "{level:?}");
        }
    }

    #[test]
    fn test_policy_from_tuning() {
        let tuning = Tuning {
            hard_modifier: 1.5,
            ..Default::default()
        };
        let policy = DifficultyPolicy::from_tuning(&tuning);
        assert_eq!(policy.modifier_for(Difficulty::Hard), 1.5);
        assert_eq!(policy.modifier_for(Difficulty::Easy), 0.8);
    }
}
