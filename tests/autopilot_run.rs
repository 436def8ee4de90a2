//! Full runs through the public API, driven by the demo player

use std::cell::RefCell;
use std::rc::Rc;

use flappy::platform::{MemoryStore, SettingsStore};
use flappy::settings::DIFFICULTY_KEY;
use flappy::sim::{
    Difficulty, GameEvent, GamePhase, GameSession, ResetOutcome, Scheduler, TickOutcome,
};
use flappy::{Settings, StoredDifficulty, Tuning};

const MAX_FRAMES: u32 = 20_000;

/// Play one autopilot run, checking invariants on every frame
fn soak(seed: u64, difficulty: Difficulty) -> (u32, Vec<u32>) {
    let store = Rc::new(RefCell::new(MemoryStore::new()));
    Settings {
        difficulty,
        ..Default::default()
    }
    .save(&mut store.clone())
    .expect("memory store accepts writes");

    let ended = Rc::new(RefCell::new(Vec::new()));
    let sink = {
        let ended = ended.clone();
        move |score: u32| ended.borrow_mut().push(score)
    };

    let events = Rc::new(RefCell::new(Vec::new()));
    let event_sink = {
        let events = events.clone();
        move |event: GameEvent| events.borrow_mut().push(event)
    };

    let mut scheduler = Scheduler::new(GameSession::new(seed))
        .with_difficulty_source(Box::new(StoredDifficulty::new(store)))
        .with_end_sink(Box::new(sink))
        .with_event_sink(Box::new(event_sink));
    scheduler.set_autopilot(true);
    scheduler.start();

    let mut last_score = 0;
    let mut passes = 0;
    let mut frames = 0;
    while scheduler.is_running() && frames < MAX_FRAMES {
        let outcome = scheduler.frame();
        frames += 1;

        let session = scheduler.session();
        assert_eq!(session.difficulty(), difficulty);
        assert!(session.score() >= last_score);
        last_score = session.score();

        let actor = session.actor();
        let in_bounds = actor.y >= 0.0 && actor.bottom() <= session.tuning().world_height;
        if !in_bounds {
            assert!(matches!(outcome, TickOutcome::Ended { .. }));
        }

        for obstacle in session.obstacles() {
            assert_eq!(obstacle.gap_height(), session.tuning().gap_height);
        }

        // Everything queued this frame was already forwarded
        assert!(scheduler.session_mut().drain_events().is_empty());
        passes += events
            .borrow_mut()
            .drain(..)
            .filter(|e| matches!(e, GameEvent::Passed { .. }))
            .count() as u32;
    }

    assert_eq!(passes, scheduler.score());
    let ended = ended.borrow().clone();
    if scheduler.phase() == GamePhase::Over {
        assert_eq!(ended, vec![scheduler.score()]);
    } else {
        assert!(ended.is_empty());
    }
    (scheduler.score(), ended)
}

#[test]
fn test_autopilot_runs_hold_invariants() {
    for seed in [1, 7, 42, 2024] {
        for difficulty in Difficulty::ALL {
            soak(seed, difficulty);
        }
    }
}

#[test]
fn test_same_seed_same_run() {
    assert_eq!(soak(31337, Difficulty::Normal), soak(31337, Difficulty::Normal));
}

#[test]
fn test_difficulty_change_applies_mid_run() {
    let store = Rc::new(RefCell::new(MemoryStore::new()));
    let mut scheduler = Scheduler::new(GameSession::new(5))
        .with_difficulty_source(Box::new(StoredDifficulty::new(store.clone())));
    scheduler.start();
    scheduler.jump();
    assert_eq!(scheduler.session().actor().velocity, -8.0);

    store
        .borrow_mut()
        .set(DIFFICULTY_KEY, "hard")
        .expect("memory store accepts writes");
    scheduler.jump();
    assert_eq!(scheduler.session().difficulty(), Difficulty::Hard);
    assert_eq!(scheduler.session().actor().velocity, -10.0);
}

#[test]
fn test_custom_tuning_from_json() {
    let tuning = Tuning::from_json(r#"{ "gravity": 0.25, "jump_force": -6.0 }"#)
        .expect("valid tuning");
    let mut scheduler = Scheduler::new(GameSession::with_tuning(1, tuning));
    scheduler.start();
    scheduler.jump();
    assert_eq!(scheduler.session().actor().velocity, -6.0);

    scheduler.frame();
    assert_eq!(scheduler.session().actor().velocity, -5.75);
    assert_eq!(scheduler.session().actor().y, 540.0 - 5.75);
}

#[test]
fn test_restart_after_game_over() {
    let mut scheduler = Scheduler::new(GameSession::new(8));
    scheduler.start();
    scheduler.jump();
    while scheduler.is_running() {
        scheduler.frame();
    }
    assert_eq!(scheduler.phase(), GamePhase::Over);

    assert_eq!(scheduler.reset(), ResetOutcome::Reset);
    assert_eq!(scheduler.reset(), ResetOutcome::Reset);
    let snapshot = scheduler.snapshot();
    assert_eq!(snapshot.phase, GamePhase::NotStarted);
    assert_eq!(snapshot.score, 0);
    assert!(snapshot.obstacles.is_empty());
    assert!(scheduler.is_running());
}
