//! Grid Snake entry point
//!
//! Handles platform-specific initialization and wires the session to the page.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use grid_snake::persistence::{KeyValueStore, LocalStore, MemoryStore};
    use grid_snake::platform::IntervalScheduler;
    use grid_snake::renderer::{RenderState, scene};
    use grid_snake::sim::TickOutcome;
    use grid_snake::ui::HudView;
    use grid_snake::{Session, Settings};

    type Store = Box<dyn KeyValueStore>;

    /// Game instance holding all state
    struct Game {
        session: Session<IntervalScheduler, Store>,
        render_state: Option<RenderState>,
        document: Document,
    }

    impl Game {
        /// Repaint the board
        fn render(&mut self) {
            let state = self.session.state();
            let vertices = scene(&state.snake, state.food, self.session.settings().cell_size_px);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let hud = HudView::from_session(&self.session);

            if let Some(el) = self.document.get_element_by_id("score") {
                el.set_text_content(Some(&hud.score));
            }
            if let Some(el) = self.document.get_element_by_id("high-score") {
                el.set_text_content(Some(&hud.best));
            }
            set_hidden(&self.document, "gameOverMessage", !hud.game_over_visible);
            set_hidden(&self.document, "startButton", !hud.start_visible);
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let classes = el.class_list();
            let _ = if hidden {
                classes.add_1("hidden")
            } else {
                classes.remove_1("hidden")
            };
        }
    }

    /// LocalStorage, or an in-memory map when the browser refuses it
    fn open_store() -> Store {
        match LocalStore::open() {
            Ok(store) => Box::new(store),
            Err(e) => {
                log::warn!("{}; best score will not persist", e);
                Box::new(MemoryStore::new())
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialised".into());
        }

        log::info!("Grid Snake starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("gameCanvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #gameCanvas canvas element");
            return;
        };

        let mut store = open_store();
        let settings = Settings::load(&store);
        // Write back the effective values: rejected or partial JSON gets replaced
        settings.save(&mut store);

        // Square board; backing store scaled for crisp cells on HiDPI
        let board = settings.canvas_size();
        let dpr = window.device_pixel_ratio();
        let surface_px = ((board as f64) * dpr) as u32;
        canvas.set_width(surface_px);
        canvas.set_height(surface_px);
        let _ = canvas.set_attribute("style", &format!("width:{0}px;height:{0}px", board));

        let seed = js_sys::Date::now() as u64;
        let session = Session::new(settings, IntervalScheduler::new(), store, seed);
        let game = Rc::new(RefCell::new(Game {
            session,
            render_state: None,
            document: document.clone(),
        }));

        log::info!("Game initialized with seed: {}", seed);

        bind_tick(game.clone());
        setup_keyboard(game.clone());
        setup_start_buttons(game.clone());
        game.borrow().update_hud();

        // Rendering comes up last; the game is playable (if invisible) without it
        match init_renderer(canvas, surface_px, board as f32).await {
            Some(render_state) => {
                let mut g = game.borrow_mut();
                g.render_state = Some(render_state);
                g.render();
            }
            None => log::error!("Rendering unavailable"),
        }

        log::info!("Grid Snake running!");
    }

    async fn init_renderer(
        canvas: HtmlCanvasElement,
        surface_px: u32,
        board_px: f32,
    ) -> Option<RenderState> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
            .map_err(|e| log::error!("Failed to create surface: {}", e))
            .ok()?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| log::error!("Failed to get adapter: {}", e))
            .ok()?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        RenderState::new(surface, &adapter, surface_px, surface_px, board_px)
            .await
            .map_err(|e| log::error!("Failed to create device: {}", e))
            .ok()
    }

    /// Hand the scheduler the closure every timer fire runs
    fn bind_tick(game: Rc<RefCell<Game>>) {
        let tick_game = game.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let mut g = tick_game.borrow_mut();
            let outcome = g.session.on_tick();
            if outcome != TickOutcome::Idle {
                g.render();
                g.update_hud();
            }
        });
        game.borrow_mut().session.scheduler_mut().bind(closure);
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let mut g = game.borrow_mut();
            let key = event.key();
            if g.session.handle_key(&key) {
                // Arrow keys would scroll the page
                event.prevent_default();
            } else if key == "i" || key == "I" {
                g.session.toggle_autopilot();
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_start_buttons(game: Rc<RefCell<Game>>) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        for id in ["startButton", "restartButton"] {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing #{} button", id);
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = game.borrow_mut();
                g.session.start();
                g.render();
                g.update_hud();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
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
    log::info!("Grid Snake (native) starting...");
    log::info!("Native mode runs headless demo sessions - run with `trunk serve` to play");

    run_headless_demo(3);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play a few autopilot sessions against an in-memory store
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_demo(sessions: u32) {
    use grid_snake::persistence::MemoryStore;
    use grid_snake::platform::{ManualScheduler, Scheduler};
    use grid_snake::sim::TickOutcome;
    use grid_snake::{Session, Settings};

    const MAX_TICKS: u64 = 20_000;

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut session = Session::new(Settings::default(), ManualScheduler::new(), MemoryStore::new(), seed);
    session.toggle_autopilot();

    for round in 1..=sessions {
        session.start();
        let mut ticks = 0;
        let mut last = TickOutcome::Idle;
        while session.scheduler().armed().is_some() && ticks < MAX_TICKS {
            last = session.on_tick();
            ticks += 1;
        }

        let state = session.state();
        println!(
            "Session {}: score {} after {} ticks ({:?}), interval {} ms, best {}",
            round,
            state.score,
            ticks,
            last,
            state.interval_ms,
            session.best_score()
        );
    }
}
