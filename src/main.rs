//! Canvas Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

    use canvas_pong::consts::TICK_INTERVAL_MS;
    use canvas_pong::platform::canvas::CanvasSurface;
    use canvas_pong::platform::pointer_to_surface;
    use canvas_pong::sim::{GameEvent, GameState, TickInput, tick};
    use canvas_pong::{Settings, draw_scene};
    use glam::Vec2;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        surface: CanvasSurface,
        input: TickInput,
    }

    impl Game {
        fn new(seed: u64, width: f32, height: f32, surface: CanvasSurface, settings: Settings) -> Self {
            Self {
                state: GameState::new(seed, width, height),
                settings,
                surface,
                input: TickInput::default(),
            }
        }

        /// One scheduler tick: simulate, then draw
        fn frame(&mut self) {
            let events = tick(&mut self.state, &self.input);
            // Clicks are one-shot; the pointer position persists
            self.input.click = false;

            for event in events {
                if let GameEvent::GameOver { winner } = event {
                    log::info!(
                        "Final score {} - {} ({:?} wins)",
                        self.state.score.player1,
                        self.state.score.player2,
                        winner
                    );
                }
            }

            draw_scene(&self.state, &self.settings, &mut self.surface);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Canvas Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("get_context failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let settings = Settings::load();
        let surface = CanvasSurface::new(ctx, &settings.font);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(
            seed,
            canvas.width() as f32,
            canvas.height() as f32,
            surface,
            settings,
        )));

        log::info!(
            "Game initialized with seed: {} ({}x{})",
            seed,
            canvas.width(),
            canvas.height()
        );

        setup_input_handlers(&canvas, game.clone());
        start_interval(game);

        log::info!("Canvas Pong running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Player paddle follows the pointer
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                let scroll = web_sys::window()
                    .and_then(|w| w.document())
                    .and_then(|d| d.document_element())
                    .map(|root| Vec2::new(root.scroll_left() as f32, root.scroll_top() as f32))
                    .unwrap_or(Vec2::ZERO);
                let pos = pointer_to_surface(
                    Vec2::new(event.client_x() as f32, event.client_y() as f32),
                    Vec2::new(rect.left() as f32, rect.top() as f32),
                    scroll,
                );
                game.borrow_mut().input.pointer_y = Some(pos.y);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click to start, pause, resume or restart
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input.click = true;
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn start_interval(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::<dyn FnMut()>::new(move || {
            game.borrow_mut().frame();
        });
        window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                TICK_INTERVAL_MS,
            )
            .expect("setInterval failed");
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Ticks the headless session may run before giving up (five minutes at 30 Hz)
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_MAX_TICKS: u32 = 5 * 60 * canvas_pong::consts::FPS;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_pong::consts::{SURFACE_HEIGHT, SURFACE_WIDTH};
    use canvas_pong::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
    use canvas_pong::{DrawList, Settings, draw_scene};

    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode is headless - build for wasm32 to play in the browser");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from_path(&path).unwrap_or_else(|e| {
            log::warn!("{}: {}, using defaults", path, e);
            Settings::default()
        }),
        None => Settings::default(),
    };

    let seed = 0x5EED;
    let mut state = GameState::new(seed, SURFACE_WIDTH, SURFACE_HEIGHT);
    let mut frame = DrawList::new();
    let mut input = TickInput {
        click: true,
        ..Default::default()
    };

    // Scripted player: aims a little off the ball so it can miss
    for n in 0..HEADLESS_MAX_TICKS {
        let wobble = (n as f32 * 0.07).sin() * 60.0;
        input.pointer_y = Some(state.ball.pos.y + wobble);

        for event in tick(&mut state, &input) {
            if let GameEvent::GameOver { winner } = event {
                log::info!("{:?} wins after {} ticks", winner, state.time_ticks);
            }
        }
        input.click = false;

        frame.clear();
        draw_scene(&state, &settings, &mut frame);
        log::trace!("tick {}: {} draw calls", n, frame.len());

        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    println!(
        "Final score: {} - {} ({:?})",
        state.score.player1, state.score.player2, state.phase
    );
}
