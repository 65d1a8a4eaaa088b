//! Astro Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use glam::Vec2;

    use astro_dodge::besttime::BestTime;
    use astro_dodge::consts::SPAWN_INTERVAL_MS;
    use astro_dodge::renderer::{Renderer, Sprites};
    use astro_dodge::settings::Settings;
    use astro_dodge::sim::{tick, Direction, GameState, InputState};

    /// Everything the loop driver owns: session state, held-key flags,
    /// renderer, configuration, and the best-time record
    struct Game {
        state: GameState,
        input: InputState,
        renderer: Renderer,
        settings: Settings,
        best: BestTime,
        /// Wall-clock session start (milliseconds)
        started_at: f64,
    }

    impl Game {
        fn new(renderer: Renderer, settings: Settings, best: BestTime, bounds: Vec2) -> Self {
            let state = new_session(bounds, &settings);
            Self {
                state,
                input: InputState::default(),
                renderer,
                settings,
                best,
                started_at: js_sys::Date::now(),
            }
        }

        /// Advance and draw one frame. Returns true while the session is
        /// still running.
        fn frame(&mut self) -> bool {
            if tick(&mut self.state, &self.input) {
                self.end_session();
            }
            self.renderer.render(&self.state);
            !self.state.game_over
        }

        /// Session end: fold the survival time into the best-time record
        fn end_session(&mut self) {
            let elapsed = (js_sys::Date::now() - self.started_at) / 1000.0;
            log::info!("Collision! Session over after {elapsed:.1} seconds");
            if self.best.record(elapsed) {
                self.best.save();
            }
        }

        /// Fresh session with the configured obstacle count; the best-time
        /// record carries over
        fn restart(&mut self) {
            let bounds = self.state.bounds;
            self.state = new_session(bounds, &self.settings);
            self.input = InputState::default();
            self.started_at = js_sys::Date::now();
        }
    }

    fn new_session(bounds: Vec2, settings: &Settings) -> GameState {
        let seed = js_sys::Date::now() as u64;
        let mut state = GameState::new(bounds, settings.num_obstacles, seed);
        state.max_obstacles = settings.max_obstacles;
        state
    }

    fn viewport_size(window: &web_sys::Window) -> Vec2 {
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(800.0);
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(600.0);
        Vec2::new(width as f32, height as f32)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Astro Dodge starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let settings = Settings::load();
        let best = BestTime::load();

        let bounds = viewport_size(&window);
        let renderer = Renderer::new(canvas, Sprites::load()?)?;
        renderer.resize(bounds.x as u32, bounds.y as u32);

        let game = Rc::new(RefCell::new(Game::new(renderer, settings, best, bounds)));

        setup_key_listeners(game.clone());
        setup_resize_handler(game.clone());
        setup_restart_button(game.clone());
        setup_spawn_interval(game.clone())?;

        // Start game loop
        request_animation_frame(game);

        log::info!("Astro Dodge running!");
        Ok(())
    }

    fn setup_key_listeners(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(direction) = Direction::from_key(&event.key()) {
                    game.borrow_mut().input.set_key(direction, true);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(direction) = Direction::from_key(&event.key()) {
                    game.borrow_mut().input.set_key(direction, false);
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Resize the drawing surface with the viewport. Entities keep their
    /// coordinates; only the wrap/recycle bounds follow the new size.
    fn setup_resize_handler(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let window = web_sys::window().unwrap();
            let bounds = viewport_size(&window);
            let mut g = game.borrow_mut();
            g.renderer.resize(bounds.x as u32, bounds.y as u32);
            g.state.set_bounds(bounds);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("restart-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let was_over = {
                    let mut g = game.borrow_mut();
                    let was_over = g.state.game_over;
                    g.restart();
                    was_over
                };
                log::info!("Session restarted");

                // A stopped driver needs re-arming; a running one keeps
                // scheduling itself
                if was_over {
                    request_animation_frame(game.clone());
                }
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        } else {
            log::error!("Restart button missing from the page; sessions cannot be restarted");
        }
    }

    /// Wall-clock spawner: adds one obstacle every interval, independent
    /// of the frame clock
    fn setup_spawn_interval(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let mut g = game.borrow_mut();
            if !g.state.game_over {
                g.state.spawn_extra();
            }
        });
        window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            SPAWN_INTERVAL_MS,
        )?;
        closure.forget();
        Ok(())
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
        let running = game.borrow_mut().frame();
        // Game over is terminal: simply stop rescheduling
        if running {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Astro Dodge (native) starting...");
    log::info!("The playable build targets the browser - run with `trunk serve` for the web version");

    println!("\nRunning headless session...");
    headless_session();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn headless_session() {
    use astro_dodge::consts::DEFAULT_NUM_OBSTACLES;
    use astro_dodge::sim::{tick, GameState, InputState};
    use glam::Vec2;

    let mut state = GameState::new(Vec2::new(800.0, 600.0), DEFAULT_NUM_OBSTACLES, 12345);
    let input = InputState::default();

    let mut frames = 0u32;
    while !state.game_over && frames < 60 * 600 {
        tick(&mut state, &input);
        frames += 1;
    }

    if state.game_over {
        println!("✓ Stationary player was hit after {frames} frames");
    } else {
        println!("✓ Survived the whole headless run ({frames} frames)");
    }
}
