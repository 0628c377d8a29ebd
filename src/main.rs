//! Spaceship Shooter entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlElement, KeyboardEvent, MouseEvent, TouchEvent};

    use spaceship_shooter::platform::{InputEvent, LocalStorage, MemoryStorage, Storage};
    use spaceship_shooter::sim::{DisplayState, Playfield, Rect, format_best, format_secs};
    use spaceship_shooter::{Game, Settings};

    /// DOM elements the game draws into
    struct Dom {
        game_area: HtmlElement,
        player: HtmlElement,
        bullet_template: HtmlElement,
        /// Live projectile, cloned from the template
        bullet: HtmlElement,
        target: HtmlElement,
        blast: HtmlElement,
        score_value: HtmlElement,
        time_value: Option<HtmlElement>,
        win_splash: HtmlElement,
        run_time: Option<HtmlElement>,
        fastest_time: Option<HtmlElement>,
        reload_countdown: Option<HtmlElement>,
    }

    impl Dom {
        fn find(document: &Document) -> Self {
            let required = |id: &str| -> HtmlElement {
                document
                    .get_element_by_id(id)
                    .unwrap_or_else(|| panic!("missing #{id}"))
                    .dyn_into()
                    .unwrap_or_else(|_| panic!("#{id} is not an HTML element"))
            };
            let optional = |id: &str| -> Option<HtmlElement> {
                document
                    .get_element_by_id(id)
                    .and_then(|el| el.dyn_into().ok())
            };

            let game_area = required("game-area");
            let bullet_template = required("bullet-template");
            let bullet: HtmlElement = bullet_template
                .clone_node_with_deep(true)
                .expect("clone bullet template")
                .dyn_into()
                .expect("bullet clone is an element");
            bullet.remove_attribute("id").ok();
            let _ = bullet.class_list().add_1("bullet");
            let _ = game_area.append_child(&bullet);

            Self {
                player: required("player"),
                target: required("target"),
                blast: required("blast"),
                score_value: required("score-value"),
                win_splash: required("win-splash"),
                time_value: optional("time-value"),
                run_time: optional("run-time"),
                fastest_time: optional("fastest-time"),
                reload_countdown: optional("reload-countdown"),
                game_area,
                bullet_template,
                bullet,
            }
        }

        /// Measure the playfield and the player marker relative to it
        fn playfield(&self) -> Playfield {
            let area = self.game_area.get_bounding_client_rect();
            let p = self.player.get_bounding_client_rect();
            let player = Rect::new(
                (p.left() - area.left()) as f32,
                (p.top() - area.top()) as f32,
                p.width() as f32,
                p.height() as f32,
            );
            Playfield::with_player(
                self.game_area.client_width() as f32,
                self.game_area.client_height() as f32,
                player,
            )
        }

        fn draw(&self, view: &DisplayState) {
            place(&self.target, Some(view.target));
            place(&self.bullet, view.projectile);
            place(&self.bullet_template, view.idle_projectile);

            match view.blast {
                Some(point) => {
                    set_px(&self.blast, "left", point.x);
                    set_px(&self.blast, "top", point.y);
                    show(&self.blast, "block");
                }
                None => show(&self.blast, "none"),
            }

            set_text(&self.score_value, &view.score.to_string());
            if let Some(el) = &self.time_value {
                set_text(el, &format_secs(view.run_time));
            }

            match &view.win_panel {
                Some(panel) => {
                    if let Some(el) = &self.run_time {
                        set_text(el, &format!("{}s", format_secs(panel.run_time)));
                    }
                    if let Some(el) = &self.fastest_time {
                        set_text(el, &format_best(panel.best_time));
                    }
                    if let Some(el) = &self.reload_countdown {
                        set_text(el, &panel.countdown.to_string());
                    }
                    show(&self.win_splash, "flex");
                }
                None => show(&self.win_splash, "none"),
            }
        }
    }

    fn set_px(el: &HtmlElement, prop: &str, value: f32) {
        let _ = el.style().set_property(prop, &format!("{}px", value));
    }

    fn show(el: &HtmlElement, display: &str) {
        let _ = el.style().set_property("display", display);
    }

    fn set_text(el: &HtmlElement, text: &str) {
        if el.text_content().as_deref() != Some(text) {
            el.set_text_content(Some(text));
        }
    }

    fn place(el: &HtmlElement, rect: Option<Rect>) {
        match rect {
            Some(r) => {
                set_px(el, "left", r.left);
                set_px(el, "top", r.top);
                show(el, "block");
            }
            None => show(el, "none"),
        }
    }

    /// Game instance holding all state
    struct App {
        game: Game<Box<dyn Storage>>,
        dom: Dom,
    }

    impl App {
        fn update(&mut self, time: f64) {
            self.game.set_playfield(self.dom.playfield());
            self.game.frame(time);
            self.dom.draw(&self.game.view());
        }
    }

    fn open_storage() -> Box<dyn Storage> {
        match LocalStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                log::warn!("{}; best time will not persist", e);
                Box::new(MemoryStorage::new())
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Spaceship Shooter starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        let dom = Dom::find(&document);

        let seed = js_sys::Date::now() as u64;
        let now = spaceship_shooter::platform::now_ms();
        let game = Game::new(Settings::default(), dom.playfield(), open_storage(), seed, now);
        let app = Rc::new(RefCell::new(App { game, dom }));

        setup_input_handlers(app.clone());
        request_animation_frame(app);

        log::info!("Spaceship Shooter running!");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let (game_area, win_splash) = {
            let a = app.borrow();
            (a.dom.game_area.clone(), a.dom.win_splash.clone())
        };

        // Click / tap on the playfield
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().game.handle_input(&InputEvent::PointerDown);
            });
            let _ = game_area
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch (non-passive so the synthetic click and scrolling are suppressed)
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                if app.borrow_mut().game.handle_input(&InputEvent::TouchStart) {
                    event.prevent_default();
                }
            });
            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(false);
            let _ = game_area.add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                closure.as_ref().unchecked_ref(),
                &options,
            );
            closure.forget();
        }

        // Keyboard
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if app.borrow_mut().game.handle_input(&InputEvent::Key(event.code())) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Win panel click restarts immediately
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.stop_propagation();
                app.borrow_mut().game.handle_input(&InputEvent::WinPanelClick);
            });
            let _ = win_splash
                .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().update(time);
        request_animation_frame(app);
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

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use anyhow::{Context, Result, bail, ensure};
    use clap::Parser;

    use spaceship_shooter::platform::{FileStorage, MemoryStorage, Storage};
    use spaceship_shooter::sim::{GameEvent, Playfield, format_best, format_secs};
    use spaceship_shooter::{Game, Settings};

    #[derive(Parser)]
    #[command(name = "spaceship-shooter")]
    #[command(about = "Run Spaceship Shooter headless with the autopilot playing")]
    pub struct Args {
        /// Seed for the first round (defaults to the current time)
        #[arg(long)]
        seed: Option<u64>,

        /// Rounds to win before exiting
        #[arg(long, default_value_t = 3)]
        rounds: u32,

        /// Give up after this many frames
        #[arg(long, default_value_t = 60 * 60 * 10)]
        max_frames: u32,

        /// Simulated display refresh rate
        #[arg(long, default_value_t = 60.0)]
        fps: f64,

        /// JSON file holding the fastest time (kept in memory if omitted)
        #[arg(long)]
        best_time_file: Option<PathBuf>,

        /// JSON settings overrides
        #[arg(long)]
        config: Option<PathBuf>,

        /// Playfield width in pixels
        #[arg(long, default_value_t = 600.0)]
        width: f32,

        /// Playfield height in pixels
        #[arg(long, default_value_t = 400.0)]
        height: f32,
    }

    pub fn run(args: Args) -> Result<()> {
        ensure!(args.fps.is_finite() && args.fps > 0.0, "--fps must be positive");
        ensure!(args.rounds > 0, "--rounds must be at least 1");

        let mut settings = match args.config.as_deref() {
            Some(path) => Settings::load(path).context("--config")?,
            None => Settings::default(),
        };
        settings.autopilot = true;

        let storage: Box<dyn Storage> = match &args.best_time_file {
            Some(path) => {
                let storage = FileStorage::new(path);
                log::info!("Best time file: {}", storage.path().display());
                Box::new(storage)
            }
            None => Box::new(MemoryStorage::new()),
        };

        let seed = args.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default()
        });

        let frame_ms = 1000.0 / args.fps;
        let mut game = Game::new(
            settings,
            Playfield::new(args.width, args.height),
            storage,
            seed,
            0.0,
        );

        let mut wins = 0;
        for n in 1..=args.max_frames {
            let events = game.frame(n as f64 * frame_ms);
            if !events.iter().any(|e| matches!(e, GameEvent::Won { .. })) {
                continue;
            }

            wins += 1;
            if let Some(panel) = game.view().win_panel {
                println!(
                    "Round {}: {}s (best {})",
                    wins,
                    format_secs(panel.run_time),
                    format_best(panel.best_time)
                );
            }
            if wins == args.rounds {
                return Ok(());
            }
        }

        bail!(
            "autopilot won {} of {} rounds within {} frames",
            wins,
            args.rounds,
            args.max_frames
        )
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_unreadable_config_fails_the_run() {
            let dir = tempfile::tempdir().unwrap();
            let config = dir.path().join("cfg.json");
            let args = Args::parse_from([
                "spaceship-shooter",
                "--config",
                config.to_str().unwrap(),
                "--rounds",
                "1",
                "--seed",
                "1",
            ]);

            let err = run(args).unwrap_err();
            assert!(format!("{err:#}").contains("cfg.json"));
        }

        #[test]
        fn test_headless_run_wins_requested_rounds() {
            let args = Args::parse_from(["spaceship-shooter", "--rounds", "2", "--seed", "7"]);
            run(args).unwrap();
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Spaceship Shooter (native) starting...");

    headless::run(headless::Args::parse())
}
