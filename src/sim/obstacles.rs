//! Obstacle generation, scrolling and recycling
//!
//! Obstacles live in a `Vec` in spawn order: the rearmost (last) one decides
//! when the next spawns, and the frontmost ones are the first to leave the
//! world and get recycled.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// A vertical barrier with a single traversable gap `[gap_start, gap_end)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    pub gap_start: f32,
    pub gap_end: f32,
    /// Set once the actor has crossed the trailing edge
    pub passed: bool,
}

impl Obstacle {
    pub fn new(x: f32, gap_start: f32, gap_height: f32) -> Self {
        Self {
            x,
            gap_start,
            gap_end: gap_start + gap_height,
            passed: false,
        }
    }

    #[inline]
    pub fn right_edge(&self, width: f32) -> f32 {
        self.x + width
    }

    #[inline]
    pub fn gap_height(&self) -> f32 {
        self.gap_end - self.gap_start
    }
}

/// What happened during one field tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldTick {
    pub spawned: bool,
    /// Obstacles whose trailing edge the actor crossed this tick
    pub passed: u32,
    pub recycled: usize,
}

/// The ordered set of active obstacles
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleField {
    obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active obstacles, frontmost first
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Append an obstacle at the rear. Callers keep x non-decreasing.
    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Spawn, advance, flag pass-throughs, recycle - in that order.
    ///
    /// `speed` is the horizontal distance every obstacle moves this tick.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        actor_x: f32,
        tuning: &Tuning,
        speed: f32,
        rng: &mut R,
    ) -> FieldTick {
        let mut report = FieldTick::default();
        let width = tuning.obstacle_width;

        let spawn_line = tuning.world_width - tuning.obstacle_spacing;
        if self.obstacles.last().is_none_or(|rear| rear.x < spawn_line) {
            let gap_start = random_gap_start(tuning, rng);
            self.obstacles
                .push(Obstacle::new(tuning.world_width, gap_start, tuning.gap_height));
            report.spawned = true;
        }

        for obstacle in &mut self.obstacles {
            obstacle.x -= speed;
        }

        for obstacle in self.obstacles.iter_mut().filter(|o| !o.passed) {
            if actor_x > obstacle.right_edge(width) {
                obstacle.passed = true;
                report.passed += 1;
            }
        }

        let before = self.obstacles.len();
        self.obstacles.retain(|o| o.right_edge(width) >= 0.0);
        report.recycled = before - self.obstacles.len();

        report
    }
}

/// Gap start drawn uniformly from the whole world units in
/// `[margin, height - gap - margin]`.
///
/// Results are snapped to integers (the bounds are rounded inward), not drawn
/// from the continuous interval. Whole units keep `gap_end - gap_start`
/// exactly equal to the gap height.
pub fn random_gap_start<R: Rng + ?Sized>(tuning: &Tuning, rng: &mut R) -> f32 {
    let (min, max) = tuning.gap_start_range();
    let low = min.ceil();
    let high = max.floor();
    if high <= low {
        // Degenerate range: only the lower bound fits
        return if low <= max { low } else { min };
    }
    rng.random_range(low as i32..=high as i32) as f32
}
