//! The falling/jumping body the player controls

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_TILT, TILT_PER_VELOCITY};
use crate::tuning::Tuning;

/// The player's actor. `x` never changes after spawn; the world scrolls past it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub x: f32,
    pub y: f32,
    /// Vertical velocity in world units per tick (positive = down)
    pub velocity: f32,
    pub width: f32,
    pub height: f32,
}

impl Actor {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            velocity: 0.0,
            width,
            height,
        }
    }

    /// Actor at rest at the tuning's spawn point
    pub fn spawn(tuning: &Tuning) -> Self {
        let (x, y) = tuning.actor_spawn();
        Self::new(x, y, tuning.actor_width, tuning.actor_height)
    }

    /// Integrate one tick of gravity. `modifier` scales both the acceleration
    /// and the displacement.
    pub fn advance(&mut self, gravity: f32, modifier: f32) {
        self.velocity += gravity * modifier;
        self.y += self.velocity * modifier;
    }

    /// Instantaneous impulse: replaces the current velocity
    pub fn jump(&mut self, jump_force: f32, modifier: f32) {
        self.velocity = jump_force * modifier;
    }

    /// Rotation hint for presentation (radians, nose up when rising)
    pub fn tilt(&self) -> f32 {
        (self.velocity * TILT_PER_VELOCITY).clamp(-MAX_TILT, MAX_TILT)
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}
