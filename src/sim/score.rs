//! Score tracking

use serde::{Deserialize, Serialize};

/// Counts pass-throughs and signals milestones every `milestone_interval` points
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTracker {
    score: u32,
    milestone_interval: u32,
}

impl ScoreTracker {
    /// `milestone_interval` of 0 disables milestones
    pub fn new(milestone_interval: u32) -> Self {
        Self {
            score: 0,
            milestone_interval,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Count one pass-through; returns true when the new score is a milestone
    pub fn record_pass(&mut self) -> bool {
        self.score = self.score.saturating_add(1);
        self.milestone_interval != 0 && self.score % self.milestone_interval == 0
    }

    pub fn reset(&mut self) {
        self.score = 0;
    }
}
