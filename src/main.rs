//! Lander entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlElement, KeyboardEvent, MouseEvent};

    use lander::Game;
    use lander::Settings;
    use lander::audio::AudioManager;
    use lander::platform::web::{DomPresenter, canvas_context, document, html_element};
    use lander::platform::{REBOOT_SELECTOR, REPLAY_SELECTOR, START_SELECTOR, SetupError};
    use lander::renderer::canvas::CanvasSurface;
    use lander::ui::Outputs;

    /// Everything the frame callback and event handlers share
    struct App {
        game: Game,
        surface: CanvasSurface,
        outputs: Outputs<DomPresenter, AudioManager>,
        settings: Settings,
    }

    impl App {
        /// Run one frame; true if another should be requested
        fn frame(&mut self) -> bool {
            self.game.frame(&mut self.surface, &mut self.outputs)
        }

        fn restart(&mut self) {
            let seed = js_sys::Date::now() as u64;
            self.game.restart(seed, &mut self.outputs);
        }

        fn toggle_mute(&mut self) {
            let muted = self.settings.toggle_muted();
            self.outputs.audio.apply_settings(&self.settings);
            self.settings.save();
            log::info!("Muted: {}", muted);
        }
    }

    pub fn run() -> Result<(), SetupError> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Lander starting...");

        let window = web_sys::window().ok_or(SetupError::NoWindow)?;
        let document = document()?;

        // Match the canvas to the browser window
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
        let (_canvas, ctx) = canvas_context(&document, width as u32, height as u32)?;

        let settings = Settings::load();
        let presenter = DomPresenter::new(&document)?;
        let audio = AudioManager::new(&settings);

        let seed = js_sys::Date::now() as u64;
        let mut game = Game::new(width.floor(), height.floor(), seed);
        let mut surface = CanvasSurface::new(ctx);
        game.draw_idle(&mut surface);
        log::info!("Game initialized with seed: {}", seed);

        let app = Rc::new(RefCell::new(App {
            game,
            surface,
            outputs: Outputs::new(presenter, audio),
            settings,
        }));

        setup_keyboard(app.clone())?;
        setup_start_button(app.clone())?;
        setup_restart_buttons(app)?;

        log::info!("Lander ready - press start");
        Ok(())
    }

    fn setup_keyboard(app: Rc<RefCell<App>>) -> Result<(), SetupError> {
        let window = web_sys::window().ok_or(SetupError::NoWindow)?;

        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                let key = event.key();
                let handled = {
                    let App { game, outputs, .. } = &mut *a;
                    game.key_down(&key, &mut outputs.audio)
                };
                if handled {
                    event.prevent_default();
                } else if key == "m" || key == "M" {
                    a.toggle_mute();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                let App { game, outputs, .. } = &mut *a;
                if game.key_up(&event.key(), &mut outputs.audio) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        Ok(())
    }

    fn setup_start_button(app: Rc<RefCell<App>>) -> Result<(), SetupError> {
        let document = document()?;
        let btn = html_element(&document, START_SELECTOR)?;

        let btn_clone = btn.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let needs_frame = app.borrow_mut().game.start();
            hide_start(&btn_clone);
            if needs_frame {
                request_animation_frame(app.clone());
            }
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
        Ok(())
    }

    fn hide_start(btn: &HtmlElement) {
        let _ = btn.style().set_property("visibility", "hidden");
    }

    fn setup_restart_buttons(app: Rc<RefCell<App>>) -> Result<(), SetupError> {
        let document = document()?;

        for selector in [REBOOT_SELECTOR, REPLAY_SELECTOR] {
            let btn = html_element(&document, selector)?;
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().restart();
            });
            let _ =
                btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        let again = app.borrow_mut().frame();
        if again {
            request_animation_frame(app);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Lander failed to start: {e}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Lander (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(1);
    headless::run(seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drop the ship with no input and log every effect until it lands or crashes
#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use lander::audio::{AudioSink, SoundCue};
    use lander::sim::{GameState, tick};
    use lander::ui::{Panel, Presenter, Readout};

    const WIDTH: f64 = 800.0;
    const HEIGHT: f64 = 600.0;
    const MAX_TICKS: u64 = 10_000;

    struct LogSink;

    impl Presenter for LogSink {
        fn show_panel(&mut self, panel: Panel) {
            log::trace!("show {:?}", panel);
        }

        fn hide_panel(&mut self, panel: Panel) {
            log::trace!("hide {:?}", panel);
        }

        fn set_readout(&mut self, readout: Readout, text: &str) {
            log::trace!("{:?} = {}", readout, text);
        }
    }

    impl AudioSink for LogSink {
        fn play(&mut self, cue: SoundCue) {
            log::info!("play {}", cue.asset_path());
        }

        fn stop(&mut self, cue: SoundCue) {
            log::info!("stop {}", cue.asset_path());
        }

        fn play_after(&mut self, cue: SoundCue, delay_ms: u32) {
            log::info!("play {} in {}ms", cue.asset_path(), delay_ms);
        }
    }

    pub fn run(seed: u64) {
        let mut state = GameState::new(WIDTH, HEIGHT, seed);
        let mut sink = LogSink;
        log::info!("Pad at x={:.1}, seed {}", state.world.pad.x, seed);

        while state.time_ticks < MAX_TICKS {
            if tick(&mut state, &mut sink).is_terminal() {
                break;
            }
        }
        log::info!(
            "Flight ended after {} ticks: {:?}",
            state.time_ticks,
            state.outcome
        );
    }
}
