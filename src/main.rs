//! Flappy Gates entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use flappy_gates::GameConfig;
    use flappy_gates::platform::{self, FrameAccumulator, InputQueue};
    use flappy_gates::renderer::{Canvas, RenderState, TextItem, draw_scene};
    use flappy_gates::sim::{Control, GameState, InputEvent, autopilot};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        clock: FrameAccumulator,
        input: InputQueue,
        /// Demo mode - autopilot presses jump
        autopilot: bool,
        /// Cleared by a quit event; stops requesting frames
        running: bool,
        /// Text currently shown in the DOM overlay
        hud_texts: Vec<TextItem>,
    }

    impl Game {
        fn new(state: GameState) -> Self {
            let clock = FrameAccumulator::new(state.config.target_fps);
            Self {
                state,
                render_state: None,
                clock,
                input: InputQueue::default(),
                autopilot: false,
                running: true,
                hud_texts: Vec::new(),
            }
        }

        /// Run simulation ticks
        fn update(&mut self, time: f64) {
            let ticks = self.clock.ticks_due(time);
            for _ in 0..ticks {
                if self.autopilot && autopilot::wants_jump(&self.state) {
                    self.input.push(InputEvent::Jump);
                }
                let (control, report) = platform::update(&mut self.state, &mut self.input);
                if control == Control::Quit {
                    self.running = false;
                    log::info!("Quit requested, stopping game loop");
                    return;
                }
                if report.scored > 0 {
                    log::debug!("Score: {}", self.state.score);
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                draw_scene(&self.state, render_state);
                render_state.present();

                let texts = render_state.take_texts();
                if texts != self.hud_texts {
                    update_text_layer(&texts, &self.state.config);
                    self.hud_texts = texts;
                }
            }
        }
    }

    /// Mirror the frame's text items into the `#hud` overlay
    fn update_text_layer(texts: &[TextItem], config: &GameConfig) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(hud) = document.get_element_by_id("hud") else {
            return;
        };

        hud.set_inner_html("");
        for item in texts {
            let Ok(el) = document.create_element("div") else {
                continue;
            };
            let [r, g, b, a] = item.color;
            let style = format!(
                "left:{:.2}%;top:{:.2}%;color:rgba({},{},{},{})",
                item.pos.x / config.screen_width * 100.0,
                item.pos.y / config.screen_height * 100.0,
                (r * 255.0) as u8,
                (g * 255.0) as u8,
                (b * 255.0) as u8,
                a
            );
            let _ = el.set_attribute("class", "hud-text");
            let _ = el.set_attribute("style", &style);
            el.set_text_content(Some(&item.text));
            let _ = hud.append_child(&el);
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Flappy Gates starting...");

        let config = GameConfig::default();
        let seed = js_sys::Date::now() as u64;
        let state = match GameState::new(config, seed) {
            Ok(state) => state,
            Err(e) => {
                log::error!("Invalid game config: {}", e);
                return;
            }
        };
        log::info!("Game initialized with seed: {}", seed);

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Backing store at device resolution, game coordinates stay logical
        let dpr = window.device_pixel_ratio();
        let logical = glam::Vec2::new(state.config.screen_width, state.config.screen_height);
        let width = (logical.x as f64 * dpr) as u32;
        let height = (logical.y as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let game = Rc::new(RefCell::new(Game::new(state)));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, logical).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Flappy Gates running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse click - jump
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.push(InputEvent::Jump);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start - jump
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().input.push(InputEvent::Jump);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard
        {
            let window = web_sys::window().expect("no window");
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.repeat() {
                    return;
                }
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    " " | "Enter" | "ArrowUp" => {
                        event.prevent_default();
                        g.input.push(InputEvent::Jump);
                    }
                    "Escape" => g.input.push(InputEvent::Quit),
                    "a" | "A" => {
                        g.autopilot = !g.autopilot;
                        log::info!("Autopilot: {}", g.autopilot);
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            if !g.running {
                return;
            }
            g.render();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Frames the native demo runs before quitting (30 seconds at 60 FPS)
#[cfg(not(target_arch = "wasm32"))]
const DEMO_FRAMES: u64 = 30 * 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::process::ExitCode;
    use std::time::{SystemTime, UNIX_EPOCH};

    use flappy_gates::GameConfig;
    use flappy_gates::platform::{FrameClock, InputQueue, SleepClock, run_frame};
    use flappy_gates::renderer::DrawList;
    use flappy_gates::sim::{Control, GamePhase, GameState, InputEvent, autopilot};

    env_logger::init();
    log::info!("Flappy Gates (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - run with `trunk serve` to play");

    let config = match GameConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let mut state = match GameState::new(config, seed) {
        Ok(state) => state,
        Err(e) => {
            log::error!("Invalid game config: {}", e);
            return ExitCode::FAILURE;
        }
    };
    log::info!("Game initialized with seed: {}", seed);

    let mut input = InputQueue::default();
    let mut canvas = DrawList::new();
    let mut clock = SleepClock::new(state.config.target_fps);
    let mut best_score = 0;
    let mut frame = 0u64;

    loop {
        if frame == DEMO_FRAMES {
            input.push(InputEvent::Quit);
        } else if autopilot::wants_jump(&state) {
            input.push(InputEvent::Jump);
        }

        let was_running = state.phase == GamePhase::Running;
        if run_frame(&mut state, &mut input, &mut canvas) == Control::Quit {
            break;
        }
        if was_running && state.phase == GamePhase::GameOver {
            best_score = best_score.max(state.score);
            log::info!("Run {} finished with score {}", state.runs, state.score);
            match serde_json::to_string(&state.snapshot()) {
                Ok(json) => log::debug!("Final state: {}", json),
                Err(e) => log::warn!("Could not serialize snapshot: {}", e),
            }
        }

        frame += 1;
        clock.wait_next_frame();
    }

    log::info!(
        "Demo finished after {} frames: {} runs, best score {}",
        canvas.frames,
        state.runs,
        best_score
    );
    ExitCode::SUCCESS
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
