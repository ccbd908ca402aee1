//! Brick Dodge entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        HtmlCanvasElement, HtmlElement, HtmlImageElement, KeyboardEvent, MouseEvent, PointerEvent,
    };

    use brick_dodge::Game;
    use brick_dodge::error::StartupError;
    use brick_dodge::platform::input::client_to_canvas;
    use brick_dodge::platform::web::{DomOverlay, document, element_by_id, wait_for_images};
    use brick_dodge::renderer::CanvasSurface;
    use brick_dodge::sim::Arena;
    use brick_dodge::tuning::Tuning;

    /// Everything the frame and input callbacks share
    struct App {
        game: Game,
        surface: CanvasSurface,
        overlay: DomOverlay,
    }

    fn new_seed() -> u64 {
        js_sys::Date::now() as u64
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("logger init failed: {}", e).into());
        }

        log::info!("Brick Dodge starting...");
        if let Err(e) = start().await {
            log::error!("Startup failed: {}", e);
        }
    }

    async fn start() -> Result<(), StartupError> {
        let document = document()?;

        let canvas: HtmlCanvasElement = element_by_id(&document, "game-canvas")?;
        let ship_img: HtmlImageElement = element_by_id(&document, "ship-img")?;
        let brick_img: HtmlImageElement = element_by_id(&document, "brick-img")?;

        // Nothing runs until both sprites are loaded
        wait_for_images(&[(&ship_img, "ship-img"), (&brick_img, "brick-img")]).await?;

        let arena = Arena::new(canvas.width() as f32, canvas.height() as f32);
        let loaded = Tuning::load();
        let tuning = match loaded.validate_for(&arena) {
            Ok(()) => loaded,
            Err(e) => {
                log::warn!("Tuning does not fit the canvas ({}), using defaults", e);
                Tuning::default()
            }
        };
        let seed = new_seed();
        let game = Game::new(seed, arena, tuning)?;
        log::info!(
            "Game initialized ({}x{}) with seed: {}",
            arena.width,
            arena.height,
            seed
        );

        let app = Rc::new(RefCell::new(App {
            game,
            surface: CanvasSurface::new(&canvas, ship_img, brick_img)?,
            overlay: DomOverlay::new(&document)?,
        }));

        setup_pointer(&canvas, app.clone());
        setup_buttons(&document, app.clone())?;
        setup_keyboard(app.clone());

        // Start game loop
        request_animation_frame(app);

        log::info!("Brick Dodge running!");
        Ok(())
    }

    fn setup_pointer(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let canvas_clone = canvas.clone();
        // Pointer events cover mouse, pen and touch
        let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
            event.prevent_default();
            let rect = canvas_clone.get_bounding_client_rect();
            let pos = client_to_canvas(
                Vec2::new(event.client_x() as f32, event.client_y() as f32),
                Vec2::new(rect.left() as f32, rect.top() as f32),
            );
            app.borrow_mut().game.pointer_moved(pos);
        });
        let _ = canvas
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn on_click(
        document: &web_sys::Document,
        id: &'static str,
        app: Rc<RefCell<App>>,
        action: fn(&mut App),
    ) -> Result<(), StartupError> {
        let button: HtmlElement = element_by_id(document, id)?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            action(&mut app.borrow_mut());
        });
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
        Ok(())
    }

    fn setup_buttons(document: &web_sys::Document, app: Rc<RefCell<App>>) -> Result<(), StartupError> {
        on_click(document, "play-btn", app.clone(), |app| {
            let App { game, overlay, .. } = app;
            game.play(new_seed(), overlay);
        })?;
        on_click(document, "main-menu-btn", app.clone(), |app| {
            let App { game, overlay, .. } = app;
            game.main_menu(overlay);
        })?;
        on_click(document, "restart-btn", app, |app| {
            let App { game, overlay, .. } = app;
            game.restart(new_seed(), overlay);
        })
    }

    fn setup_keyboard(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if matches!(event.key().as_str(), "i" | "I") {
                app.borrow_mut().game.toggle_autopilot();
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut app = app.borrow_mut();
            let App {
                game,
                surface,
                overlay,
            } = &mut *app;
            game.frame(time, surface, overlay);
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Brick Dodge (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - run with `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0x5eed);
    let score = headless::run_demo(seed, 60 * 60);
    println!("Autopilot demo (seed {}) finished with score {}", seed, score);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use brick_dodge::platform::Overlay;
    use brick_dodge::renderer::{Sprite, Surface};
    use brick_dodge::sim::{Arena, GamePhase};
    use brick_dodge::{Game, Tuning};

    /// Surface that discards everything
    struct Blank;

    impl Surface for Blank {
        fn clear(&mut self) {}
        fn draw_image(&mut self, _sprite: Sprite, _x: f32, _y: f32, _w: f32, _h: f32) {}
        fn fill_text(&mut self, _text: &str, _x: f32, _y: f32) {}
    }

    /// Overlay that only logs the final score
    struct LogOverlay;

    impl Overlay for LogOverlay {
        fn set_title_visible(&mut self, _visible: bool) {}
        fn set_game_over_visible(&mut self, _visible: bool) {}
        fn set_final_score(&mut self, text: &str) {
            log::debug!("Game over panel: {}", text);
        }
    }

    /// Play up to `frames` frames at 60 Hz with the autopilot, returning the score
    pub fn run_demo(seed: u64, frames: u32) -> u32 {
        let arena = Arena::new(480.0, 640.0);
        let Ok(mut game) = Game::new(seed, arena, Tuning::default()) else {
            log::error!("Default tuning does not fit a {}x{} arena", arena.width, arena.height);
            return 0;
        };
        let mut surface = Blank;
        let mut overlay = LogOverlay;

        game.toggle_autopilot();
        game.play(seed, &mut overlay);
        for frame in 1..=frames {
            let time = frame as f64 * 1000.0 / 60.0;
            game.frame(time, &mut surface, &mut overlay);
            if game.phase() == GamePhase::GameOver {
                break;
            }
        }
        game.state.score
    }
}
