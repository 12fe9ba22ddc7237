//! Flappy Canvas entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, TouchEvent};

    use flappy_canvas::Rect;
    use flappy_canvas::audio::AudioManager;
    use flappy_canvas::platform::assets::ImageSet;
    use flappy_canvas::platform::{FixedStep, client_to_canvas, offset_to_canvas};
    use flappy_canvas::renderer::CanvasRenderer;
    use flappy_canvas::sim::{GamePhase, GameState, Tap, TapOutcome, apply_tap, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        clock: FixedStep,
        renderer: CanvasRenderer,
        audio: AudioManager,
        // Track phase for transition logging
        last_phase: GamePhase,
    }

    impl Game {
        fn new(seed: u64, renderer: CanvasRenderer, audio: AudioManager) -> Self {
            let state = GameState::new(seed);
            let last_phase = state.phase;
            Self {
                state,
                clock: FixedStep::new(),
                renderer,
                audio,
                last_phase,
            }
        }

        /// Run whatever fixed steps are due for this frame
        fn update(&mut self, time: f64) {
            let steps = self.clock.advance(time);
            for _ in 0..steps {
                tick(&mut self.state);
            }
            self.flush_events();
            self.track_phase();
        }

        /// Apply a tap from either pointer source
        fn tap(&mut self, tap: Tap) {
            let outcome = apply_tap(&mut self.state, tap);
            if outcome != TapOutcome::Ignored {
                log::debug!("Tap at ({:.0}, {:.0}): {:?}", tap.x, tap.y, outcome);
            }
            self.flush_events();
            self.track_phase();
        }

        fn flush_events(&mut self) {
            for event in self.state.drain_events() {
                self.audio.handle(event);
            }
        }

        fn track_phase(&mut self) {
            let current = self.state.phase;
            if current == self.last_phase {
                return;
            }
            if current == GamePhase::GameOver {
                if let Ok(json) = serde_json::to_string(&self.state) {
                    log::debug!("Final state: {}", json);
                }
            }
            self.last_phase = current;
        }

        fn render(&self) {
            self.renderer.render(&self.state);
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Flappy Canvas starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or_else(|| JsValue::from_str("no #gameCanvas element"))?
            .dyn_into()
            .map_err(|_| JsValue::from_str("#gameCanvas is not a canvas"))?;

        // Assets stream in while the game is already running
        let renderer = CanvasRenderer::new(&canvas, ImageSet::load_all()?)?;
        let audio = AudioManager::load()?;

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, renderer, audio)));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(&canvas, game.clone())?;

        // Start game loop
        request_animation_frame(game);

        log::info!("Flappy Canvas running!");
        Ok(())
    }

    fn canvas_size(canvas: &HtmlCanvasElement) -> (f32, f32) {
        (canvas.width() as f32, canvas.height() as f32)
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        // Mouse down - offsets are already canvas-relative
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let display = (
                    canvas_clone.client_width() as f32,
                    canvas_clone.client_height() as f32,
                );
                let tap = offset_to_canvas(
                    event.offset_x() as f32,
                    event.offset_y() as f32,
                    display,
                    canvas_size(&canvas_clone),
                );
                game.borrow_mut().tap(tap);
            });
            canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch start - viewport coordinates, minus the canvas offset
        {
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                // Suppress the emulated mousedown that would double-tap
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let rect = canvas_clone.get_bounding_client_rect();
                    let bounds = Rect::new(
                        rect.left() as f32,
                        rect.top() as f32,
                        rect.width() as f32,
                        rect.height() as f32,
                    );
                    let tap = client_to_canvas(
                        touch.client_x() as f32,
                        touch.client_y() as f32,
                        bounds,
                        canvas_size(&canvas_clone),
                    );
                    game.borrow_mut().tap(tap);
                }
            });
            canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("No window - game loop stopped");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            // Drawn every frame regardless of state changes
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        web_sys::console::error_1(&e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flappy Canvas (native) starting...");
    log::info!("Native mode has no canvas - serve the wasm build for the real game");

    run_headless();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Untouched run: start the game and let the player fall
#[cfg(not(target_arch = "wasm32"))]
fn run_headless() {
    use flappy_canvas::sim::{GameState, detect, run_untouched};

    const SEED: u64 = 0x5EED;
    const MAX_STEPS: u64 = 10_000;

    let mut state = GameState::new(SEED);
    state.start();

    match run_untouched(&mut state, MAX_STEPS) {
        Some(step) => {
            let cause = detect(&state.player, &state.obstacles);
            log::info!("Run ended on step {} ({:?})", step, cause);
        }
        None => log::warn!("Still running after {} steps", MAX_STEPS),
    }

    for event in state.drain_events() {
        log::info!("Event: {:?}", event);
    }

    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Could not serialize final state: {}", e),
    }
}
