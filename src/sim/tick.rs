//! Simulation step and state machine transitions
//!
//! One call to [`tick`] advances a running session by exactly one frame:
//! actor physics, then the obstacle field, then scoring, then collision.

use rand::RngCore;

use super::actor::Actor;
use super::collision::check_collision;
use super::state::{GameEvent, GamePhase, GameSession};

/// Result of one [`tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Session not running; nothing simulated
    Idle,
    /// Frame simulated, run continues
    Advanced,
    /// Collision this frame ended the run
    Ended { score: u32 },
}

/// Result of a [`jump`] request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    /// Over: a reset is required first
    Ignored,
    /// NotStarted -> Running with the first impulse
    Started,
    /// Impulse applied to a running actor
    Jumped,
}

/// Result of a [`reset`] request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// Running: a run in progress cannot be reset
    Ignored,
    /// Session is back in NotStarted
    Reset,
}

/// Advance the session by one frame
pub fn tick<R: RngCore>(session: &mut GameSession<R>) -> TickOutcome {
    if session.phase != GamePhase::Running {
        return TickOutcome::Idle;
    }

    session.time_ticks += 1;
    let modifier = session.modifier();
    let speed = session.obstacle_speed();

    session.actor.advance(session.tuning.gravity, modifier);

    let report = session
        .field
        .tick(session.actor.x, &session.tuning, speed, &mut session.rng);
    if report.spawned || report.recycled > 0 {
        log::debug!(
            "tick {}: spawned={} recycled={} active={}",
            session.time_ticks,
            report.spawned,
            report.recycled,
            session.field.len()
        );
    }

    for _ in 0..report.passed {
        let milestone = session.score.record_pass();
        let score = session.score.score();
        session.events.push(GameEvent::Passed { score });
        if milestone {
            session.events.push(GameEvent::Milestone { score });
        }
    }

    if check_collision(
        &session.actor,
        session.field.obstacles(),
        session.tuning.obstacle_width,
        session.tuning.world_height,
    ) {
        let score = session.score.score();
        session.phase = GamePhase::Over;
        session.events.push(GameEvent::Ended { score });
        log::info!(
            "Game over after {} ticks with score {}",
            session.time_ticks,
            score
        );
        return TickOutcome::Ended { score };
    }

    TickOutcome::Advanced
}

/// Handle a jump input
pub fn jump<R>(session: &mut GameSession<R>) -> JumpOutcome {
    let modifier = session.modifier();
    match session.phase {
        GamePhase::Over => {
            log::debug!("Jump ignored: game over, waiting for reset");
            JumpOutcome::Ignored
        }
        GamePhase::NotStarted => {
            session.phase = GamePhase::Running;
            session.actor.jump(session.tuning.jump_force, modifier);
            session.events.push(GameEvent::Started);
            session.events.push(GameEvent::Jumped);
            log::info!("Run started ({})", session.difficulty.as_str());
            JumpOutcome::Started
        }
        GamePhase::Running => {
            session.actor.jump(session.tuning.jump_force, modifier);
            session.events.push(GameEvent::Jumped);
            JumpOutcome::Jumped
        }
    }
}

/// Return to a fresh NotStarted session: actor respawned, obstacles and
/// score cleared, a single [`GameEvent::Reset`] queued. Calling it twice is
/// the same as calling it once. Ignored while Running.
pub fn reset<R>(session: &mut GameSession<R>) -> ResetOutcome {
    if session.phase == GamePhase::Running {
        log::debug!("Reset ignored: run in progress");
        return ResetOutcome::Ignored;
    }
    session.actor = Actor::spawn(&session.tuning);
    session.field.clear();
    session.score.reset();
    session.time_ticks = 0;
    session.events.clear();
    session.events.push(GameEvent::Reset);
    if session.phase != GamePhase::NotStarted {
        log::info!("Session reset from {:?}", session.phase);
    }
    session.phase = GamePhase::NotStarted;
    ResetOutcome::Reset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Difficulty;
    use crate::sim::obstacles::Obstacle;

    /// Hold the actor in the middle of the gap it is about to cross
    fn hover<R>(session: &mut GameSession<R>) {
        let width = session.tuning.obstacle_width;
        let x = session.actor.x;
        let target = session
            .field
            .obstacles()
            .iter()
            .find(|o| o.right_edge(width) >= x)
            .map(|o| (o.gap_start + o.gap_end) / 2.0)
            .unwrap_or(session.tuning.world_height / 2.0);
        session.actor.y = target - session.actor.height / 2.0;
        session.actor.velocity = 0.0;
    }

    #[test]
    fn test_first_jump_starts_run() {
        let mut session = GameSession::new(12345);
        assert_eq!(session.actor().y, 540.0);

        assert_eq!(jump(&mut session), JumpOutcome::Started);
        assert_eq!(session.phase(), GamePhase::Running);
        assert_eq!(session.actor().velocity, -8.0);
        assert_eq!(
            session.drain_events(),
            vec![GameEvent::Started, GameEvent::Jumped]
        );
    }

    #[test]
    fn test_tick_is_idle_until_started() {
        let mut session = GameSession::new(1);
        for _ in 0..100 {
            assert_eq!(tick(&mut session), TickOutcome::Idle);
        }
        assert_eq!(session.actor().y, 540.0);
        assert!(session.obstacles().is_empty());
        assert_eq!(session.time_ticks(), 0);
    }

    #[test]
    fn test_running_jump_only_applies_impulse() {
        let mut session = GameSession::new(1);
        jump(&mut session);
        for _ in 0..5 {
            tick(&mut session);
        }
        assert_eq!(jump(&mut session), JumpOutcome::Jumped);
        assert_eq!(session.actor().velocity, -8.0);
        assert_eq!(session.phase(), GamePhase::Running);
    }

    #[test]
    fn test_difficulty_scales_jump() {
        let mut session = GameSession::new(1);
        session.set_difficulty(Difficulty::Easy);
        jump(&mut session);
        assert_eq!(session.actor().velocity, -8.0 * 0.8);
    }

    #[test]
    fn test_falling_to_the_floor_ends_the_run() {
        let mut session = GameSession::new(42);
        jump(&mut session);

        let mut ticks = 0;
        let score = loop {
            ticks += 1;
            match tick(&mut session) {
                TickOutcome::Advanced => {
                    // Still inside the world on every surviving tick
                    assert!(session.actor().y >= 0.0);
                    assert!(session.actor().bottom() <= 1080.0);
                }
                TickOutcome::Ended { score } => break score,
                TickOutcome::Idle => panic!("running session went idle"),
            }
            assert!(ticks < 1000, "never hit the floor");
        };

        assert_eq!(score, 0);
        assert_eq!(session.phase(), GamePhase::Over);
        assert!(session.actor().bottom() > 1080.0);
        assert_eq!(
            session.drain_events().last(),
            Some(&GameEvent::Ended { score: 0 })
        );
    }

    #[test]
    fn test_over_ignores_jump_and_tick() {
        let mut session = GameSession::new(3);
        jump(&mut session);
        session.actor.y = -10.0;
        assert_eq!(tick(&mut session), TickOutcome::Ended { score: 0 });

        let frozen = session.snapshot();
        assert_eq!(jump(&mut session), JumpOutcome::Ignored);
        assert_eq!(tick(&mut session), TickOutcome::Idle);
        assert_eq!(session.snapshot(), frozen);
    }

    #[test]
    fn test_ten_pass_throughs_score_ten() {
        let mut session = GameSession::new(2024);
        jump(&mut session);

        let mut passed_events = 0;
        for _ in 0..5000 {
            hover(&mut session);
            assert_eq!(tick(&mut session), TickOutcome::Advanced);
            passed_events += session
                .drain_events()
                .iter()
                .filter(|e| matches!(e, GameEvent::Passed { .. }))
                .count();
            if session.score() == 10 {
                break;
            }
        }

        assert_eq!(session.score(), 10);
        assert_eq!(passed_events, 10);
        let flagged = session.obstacles().iter().filter(|o| o.passed).count();
        assert!(flagged <= 10);
    }

    #[test]
    fn test_score_is_monotonic_and_milestone_fires() {
        let mut session = GameSession::new(77);
        jump(&mut session);

        let mut last = 0;
        let mut milestones = Vec::new();
        while session.score() < 12 {
            hover(&mut session);
            tick(&mut session);
            assert!(session.score() >= last);
            assert!(session.score() - last <= 1);
            last = session.score();
            for event in session.drain_events() {
                if let GameEvent::Milestone { score } = event {
                    milestones.push(score);
                }
            }
        }
        assert_eq!(milestones, vec![10]);
    }

    #[test]
    fn test_obstacle_collision_ends_run() {
        let mut session = GameSession::new(5);
        jump(&mut session);
        // Wall with its gap far below the actor, already overlapping
        session
            .field
            .push(Obstacle::new(470.0, 900.0, session.tuning.gap_height));
        assert!(matches!(tick(&mut session), TickOutcome::Ended { .. }));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut session = GameSession::new(9);
        jump(&mut session);
        for _ in 0..200 {
            hover(&mut session);
            tick(&mut session);
        }
        session.actor.y = 2000.0;
        tick(&mut session);
        assert_eq!(session.phase(), GamePhase::Over);

        assert_eq!(reset(&mut session), ResetOutcome::Reset);
        let once = session.snapshot();
        assert_eq!(once.phase, GamePhase::NotStarted);
        assert_eq!(once.score, 0);
        assert!(once.obstacles.is_empty());
        assert_eq!((once.actor.y, once.actor.velocity), (540.0, 0.0));

        assert_eq!(reset(&mut session), ResetOutcome::Reset);
        assert_eq!(session.snapshot(), once);
        assert_eq!(session.time_ticks(), 0);
        assert_eq!(session.drain_events(), vec![GameEvent::Reset]);
    }

    #[test]
    fn test_reset_while_running_is_ignored() {
        let mut session = GameSession::new(9);
        jump(&mut session);
        for _ in 0..20 {
            tick(&mut session);
        }
        session.drain_events();
        let before = session.snapshot();

        assert_eq!(reset(&mut session), ResetOutcome::Ignored);
        assert_eq!(session.phase(), GamePhase::Running);
        assert_eq!(session.snapshot(), before);
        assert_eq!(session.time_ticks(), 20);
        assert!(session.drain_events().is_empty());
    }

    #[test]
    fn test_reset_from_not_started() {
        let mut session = GameSession::new(9);
        assert_eq!(reset(&mut session), ResetOutcome::Reset);
        assert_eq!(session.phase(), GamePhase::NotStarted);
        assert_eq!(session.drain_events(), vec![GameEvent::Reset]);
    }

    #[test]
    fn test_reset_requires_fresh_jump() {
        let mut session = GameSession::new(9);
        jump(&mut session);
        session.actor.y = -1.0;
        tick(&mut session);
        reset(&mut session);

        assert_eq!(tick(&mut session), TickOutcome::Idle);
        assert_eq!(jump(&mut session), JumpOutcome::Started);
        assert_eq!(tick(&mut session), TickOutcome::Advanced);
    }

    #[test]
    fn test_determinism() {
        let mut a = GameSession::new(99999);
        let mut b = GameSession::new(99999);
        jump(&mut a);
        jump(&mut b);
        for i in 0..600 {
            hover(&mut a);
            hover(&mut b);
            tick(&mut a);
            tick(&mut b);
            if i % 17 == 0 {
                jump(&mut a);
                jump(&mut b);
            }
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }
}
