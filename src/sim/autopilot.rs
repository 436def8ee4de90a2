//! Demo player
//!
//! Decides from the current session whether to jump this frame. Used for the
//! attract/demo mode and for soak-testing the loop.

use super::state::{GamePhase, GameSession};

/// How far above the gap bottom the actor's bottom edge should stay
const BOTTOM_CLEARANCE: f32 = 40.0;
/// Don't re-jump while still rising faster than this
const RISING_VELOCITY: f32 = -2.0;

/// Bottom edge line the autopilot tries to stay above
pub fn target_line<R>(session: &GameSession<R>) -> f32 {
    let actor = session.actor();
    let width = session.tuning().obstacle_width;
    session
        .obstacles()
        .iter()
        .find(|o| o.right_edge(width) > actor.x)
        .map(|o| o.gap_end - BOTTOM_CLEARANCE)
        .unwrap_or(session.tuning().world_height / 2.0 + actor.height)
}

/// Whether the demo player would press jump this frame
pub fn should_jump<R>(session: &GameSession<R>) -> bool {
    match session.phase() {
        GamePhase::NotStarted => true,
        GamePhase::Over => false,
        GamePhase::Running => {
            let actor = session.actor();
            actor.bottom() > target_line(session) && actor.velocity > RISING_VELOCITY
        }
    }
}
