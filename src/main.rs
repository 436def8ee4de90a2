//! Flappy entry point
//!
//! Handles platform-specific initialization and drives the frame scheduler.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use flappy::platform::{InputEvent, LocalStore, SettingsStore, is_jump};
    use flappy::renderer::{Viewport, css_rgba, scene_vertices};
    use flappy::sim::{GameEvent, GamePhase, GameSession, RenderSnapshot, Scheduler};
    use flappy::{Settings, StoredDifficulty, Tuning};

    /// Game instance holding all state
    struct Game {
        scheduler: Scheduler,
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
    }

    impl Game {
        /// Viewport matching the canvas' on-screen size (CSS pixels)
        fn client_viewport(&self) -> Viewport {
            let rect = self.canvas.get_bounding_client_rect();
            let tuning = self.scheduler.session().tuning();
            Viewport::fit(
                tuning.world_width,
                tuning.world_height,
                rect.width() as f32,
                rect.height() as f32,
            )
        }

        /// Space/click: jump, or reset once the run is over
        fn handle(&mut self, event: InputEvent) {
            if !is_jump(&event, &self.client_viewport()) {
                return;
            }
            if self.scheduler.phase() == GamePhase::Over {
                self.scheduler.reset();
            } else {
                self.scheduler.jump();
            }
        }

        /// Viewport matching the canvas backing store
        fn canvas_viewport(&self) -> Viewport {
            let tuning = self.scheduler.session().tuning();
            Viewport::fit(
                tuning.world_width,
                tuning.world_height,
                self.canvas.width() as f32,
                self.canvas.height() as f32,
            )
        }

        fn render(&self) {
            let snapshot = self.scheduler.snapshot();
            draw(&self.ctx, &self.canvas_viewport(), &snapshot);
        }
    }

    fn draw(ctx: &CanvasRenderingContext2d, viewport: &Viewport, s: &RenderSnapshot) {
        let vertices = scene_vertices(s, viewport);
        // One path per color run; whole triangles only, so no seams inside a run
        for run in vertices.chunk_by(|a, b| a.color == b.color) {
            ctx.set_fill_style_str(&css_rgba(run[0].color));
            ctx.begin_path();
            for triangle in run.chunks_exact(3) {
                let [a, b, c] =
                    [0, 1, 2].map(|i| viewport.clip_to_device(Vec2::from(triangle[i].position)));
                ctx.move_to(a.x as f64, a.y as f64);
                ctx.line_to(b.x as f64, b.y as f64);
                ctx.line_to(c.x as f64, c.y as f64);
                ctx.close_path();
            }
            ctx.fill();
        }

        let text = |line: &str, px: f32, world_y: f32| {
            let anchor = viewport.world_to_device(Vec2::new(s.world_width / 2.0, world_y));
            ctx.set_font(&format!("{}px Arial", (px * viewport.scale).round()));
            let _ = ctx.fill_text(line, anchor.x as f64, anchor.y as f64);
        };

        ctx.set_fill_style_str("white");
        ctx.set_text_align("center");
        text(&s.score.to_string(), 48.0, 80.0);

        let mid = s.world_height / 2.0;
        match s.phase {
            GamePhase::NotStarted => text("Click or press Space to start", 36.0, mid),
            GamePhase::Over => {
                text("Game Over", 48.0, mid);
                text("Click to restart", 24.0, mid + 40.0);
                text(&format!("Final score: {}", s.score), 24.0, mid + 80.0);
            }
            GamePhase::Running => {}
        }
    }

    fn log_event(event: GameEvent) {
        match event {
            GameEvent::Milestone { score } => log::info!("Milestone reached: {}", score),
            other => log::debug!("{:?}", other),
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flappy starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let tuning = Tuning::default();
        // Fixed logical resolution; CSS scales the canvas
        canvas.set_width(tuning.world_width as u32);
        canvas.set_height(tuning.world_height as u32);

        let seed = js_sys::Date::now() as u64;
        let session = GameSession::with_tuning(seed, tuning);
        let mut scheduler = Scheduler::new(session)
            .with_end_sink(Box::new(|score: u32| {
                log::info!("Run ended with score {}", score);
            }))
            .with_event_sink(Box::new(log_event));

        match LocalStore::open() {
            Ok(mut store) => {
                let settings = Settings::load(&store);
                log::info!(
                    "Sound cues {}",
                    if settings.sound_enabled { "on" } else { "off" }
                );
                if store.get(flappy::settings::DIFFICULTY_KEY).is_none() {
                    if let Err(err) = settings.save(&mut store) {
                        log::warn!("Could not persist settings: {}", err);
                    }
                }
                scheduler = scheduler.with_difficulty_source(Box::new(StoredDifficulty::new(store)));
            }
            Err(err) => log::warn!("{}, playing on normal difficulty", err),
        }

        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            scheduler,
            canvas: canvas.clone(),
            ctx,
        }));

        setup_input_handlers(&canvas, game.clone());

        game.borrow_mut().scheduler.start();
        request_animation_frame(game);

        log::info!("Flappy running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Keyboard
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.code() == flappy::platform::input::JUMP_KEY {
                    event.prevent_default();
                }
                game.borrow_mut().handle(InputEvent::Key { code: event.code() });
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer
        {
            let canvas_for_rect = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_for_rect.get_bounding_client_rect();
                let x = (event.client_x() as f64 - rect.left()) as f32;
                let y = (event.client_y() as f64 - rect.top()) as f32;
                game.borrow_mut().handle(InputEvent::PointerDown { x, y });
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.scheduler.frame();
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

/// Frame cap for the headless demo run
#[cfg(not(target_arch = "wasm32"))]
const MAX_DEMO_FRAMES: u32 = 60 * 60 * 10;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::cell::Cell;
    use std::rc::Rc;

    use flappy::platform::MemoryStore;
    use flappy::sim::{Difficulty, GameEvent, GameSession, Scheduler, TickOutcome};
    use flappy::{Settings, StoredDifficulty};

    env_logger::init();
    log::info!("Flappy (native) starting...");
    log::info!("Native mode runs a headless demo - serve the wasm build for the playable game");

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let difficulty = args
        .next()
        .map(|key| Difficulty::from_key(&key))
        .unwrap_or_default();

    let mut store = MemoryStore::new();
    let settings = Settings {
        difficulty,
        ..Default::default()
    };
    if let Err(err) = settings.save(&mut store) {
        log::warn!("Could not store settings: {}", err);
    }

    let jumps = Rc::new(Cell::new(0u32));
    let event_sink = {
        let jumps = jumps.clone();
        move |event: GameEvent| match event {
            GameEvent::Jumped => jumps.set(jumps.get() + 1),
            GameEvent::Milestone { score } => log::info!("Milestone reached: {}", score),
            other => log::debug!("{:?}", other),
        }
    };

    let session = GameSession::new(seed);
    let mut scheduler = Scheduler::new(session)
        .with_difficulty_source(Box::new(StoredDifficulty::new(store)))
        .with_end_sink(Box::new(|score: u32| {
            log::info!("Run ended with score {}", score);
        }))
        .with_event_sink(Box::new(event_sink));
    scheduler.set_autopilot(true);
    scheduler.start();

    let mut frames = 0;
    while scheduler.is_running() && frames < MAX_DEMO_FRAMES {
        if let TickOutcome::Ended { .. } = scheduler.frame() {
            log::debug!(
                "Final frame: {}",
                serde_json::to_string(&scheduler.snapshot()).unwrap_or_default()
            );
        }
        frames += 1;
    }

    println!(
        "seed {} on {}: score {} after {} frames and {} jumps ({:?})",
        seed,
        difficulty.as_str(),
        scheduler.score(),
        frames,
        jumps.get(),
        scheduler.phase()
    );
}
