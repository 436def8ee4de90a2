//! Frame scheduler facade
//!
//! The platform layer calls [`Scheduler::frame`] once per display frame and
//! forwards jump/reset input. The scheduler never schedules itself; it only
//! keeps a `running` flag that says whether frames should simulate at all.
//! Queued [`GameEvent`]s are handed to the event sink (or dropped) at the end
//! of every frame, so the session queue never outlives one frame.

use super::autopilot;
use super::difficulty::DifficultySource;
use super::state::{GameEvent, GamePhase, GameSession, RenderSnapshot};
use super::tick::{self, JumpOutcome, ResetOutcome, TickOutcome};

/// Receives the final score once per finished run
pub trait GameEndSink {
    fn game_ended(&mut self, score: u32);
}

impl<F: FnMut(u32)> GameEndSink for F {
    fn game_ended(&mut self, score: u32) {
        self(score)
    }
}

/// Receives every queued event, in order, once per frame
pub trait GameEventSink {
    fn on_event(&mut self, event: GameEvent);
}

impl<F: FnMut(GameEvent)> GameEventSink for F {
    fn on_event(&mut self, event: GameEvent) {
        self(event)
    }
}

/// Owns a session and drives it from external frame and input callbacks
pub struct Scheduler {
    session: GameSession,
    running: bool,
    /// Set by `start`, cleared by `stop`; survives game over
    started: bool,
    autopilot: bool,
    difficulty_source: Option<Box<dyn DifficultySource>>,
    end_sink: Option<Box<dyn GameEndSink>>,
    event_sink: Option<Box<dyn GameEventSink>>,
}

impl Scheduler {
    /// Wrap a session. Frames are ignored until [`Scheduler::start`].
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            running: false,
            started: false,
            autopilot: false,
            difficulty_source: None,
            end_sink: None,
            event_sink: None,
        }
    }

    /// Read the difficulty from `source` before every frame and jump
    pub fn with_difficulty_source(mut self, source: Box<dyn DifficultySource>) -> Self {
        self.difficulty_source = Some(source);
        self
    }

    pub fn with_end_sink(mut self, sink: Box<dyn GameEndSink>) -> Self {
        self.end_sink = Some(sink);
        self
    }

    /// Forward session events (sound and HUD cues) at the end of each frame
    pub fn with_event_sink(mut self, sink: Box<dyn GameEventSink>) -> Self {
        self.event_sink = Some(sink);
        self
    }

    /// Let the demo player press jump
    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    /// Begin scheduling frames (call once assets are ready)
    pub fn start(&mut self) {
        if !self.running {
            log::info!("Scheduler started");
        }
        self.running = true;
        self.started = true;
    }

    /// Stop scheduling frames; no in-flight work to cancel
    pub fn stop(&mut self) {
        self.running = false;
        self.started = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Per-frame entry point
    pub fn frame(&mut self) -> TickOutcome {
        let outcome = self.step();
        self.flush_events();
        outcome
    }

    fn step(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }

        self.refresh_difficulty();
        if self.autopilot && autopilot::should_jump(&self.session) {
            tick::jump(&mut self.session);
        }

        let outcome = tick::tick(&mut self.session);
        if let TickOutcome::Ended { score } = outcome {
            self.running = false;
            if let Some(sink) = self.end_sink.as_mut() {
                sink.game_ended(score);
            }
        }
        outcome
    }

    fn flush_events(&mut self) {
        let events = self.session.drain_events();
        if let Some(sink) = self.event_sink.as_mut() {
            for event in events {
                sink.on_event(event);
            }
        }
    }

    /// Jump input. Ignored while Over; reset first.
    pub fn jump(&mut self) -> JumpOutcome {
        self.refresh_difficulty();
        tick::jump(&mut self.session)
    }

    /// Clear the session back to NotStarted. Scheduling resumes only if
    /// [`Scheduler::start`] was called before. Ignored while Running.
    pub fn reset(&mut self) -> ResetOutcome {
        let outcome = tick::reset(&mut self.session);
        if outcome == ResetOutcome::Reset && self.started {
            self.running = true;
        }
        outcome
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase()
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        self.session.snapshot()
    }

    fn refresh_difficulty(&mut self) {
        if let Some(source) = self.difficulty_source.as_ref() {
            self.session.set_difficulty(source.current());
        }
    }
}
