//! Box Arena entry point
//!
//! Native builds run a headless demo round; the wasm build draws on the page's
//! `#canvas` element and runs until Escape or the page closes.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use box_arena::consts::MAX_SUBSTEPS;
    use box_arena::platform::WebPlatform;
    use box_arena::{Game, LoopState, Settings};

    /// Game plus the fixed-timestep bookkeeping for requestAnimationFrame
    struct Runner {
        game: Game,
        platform: WebPlatform,
        accumulator: f64,
        last_time: f64,
        /// Seconds per tick
        step: f64,
    }

    impl Runner {
        /// Run as many ticks as the elapsed time allows; false once terminated
        fn update(&mut self, time: f64) -> bool {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / 1000.0).min(0.1)
            } else {
                self.step
            };
            self.last_time = time;
            self.accumulator += dt;

            let mut substeps = 0;
            while self.accumulator >= self.step && substeps < MAX_SUBSTEPS {
                if self.game.frame(&mut self.platform) == LoopState::Terminated {
                    return false;
                }
                self.accumulator -= self.step;
                substeps += 1;
            }
            true
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("logger init failed: {e}").into());
        }

        log::info!("Box Arena starting...");

        let settings = Settings::default();
        let platform = match WebPlatform::new("canvas", &settings) {
            Ok(platform) => platform,
            Err(e) => {
                log::error!("{}", e);
                return;
            }
        };

        let seed = js_sys::Date::now() as u64;
        let step = 1.0 / settings.tick_rate as f64;
        let game = match Game::new(settings, seed) {
            Ok(game) => game,
            Err(e) => {
                log::error!("{}", e);
                return;
            }
        };
        log::info!("Game initialized with seed: {}", seed);

        let runner = Rc::new(RefCell::new(Runner {
            game,
            platform,
            accumulator: 0.0,
            last_time: 0.0,
            step,
        }));
        request_animation_frame(runner);
    }

    fn request_animation_frame(runner: Rc<RefCell<Runner>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(runner, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(runner: Rc<RefCell<Runner>>, time: f64) {
        let running = runner.borrow_mut().update(time);
        if running {
            request_animation_frame(runner);
        } else {
            log::info!("Box Arena stopped");
        }
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

/// Length of the native demo round
#[cfg(not(target_arch = "wasm32"))]
const DEMO_SECONDS: u64 = 10;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Box Arena (native) starting...");
    log::info!("Native mode runs a headless demo - serve the wasm build for the playable version");

    if let Err(e) = run_demo() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn run_demo() -> Result<(), box_arena::Error> {
    use std::time::{SystemTime, UNIX_EPOCH};

    use box_arena::platform::HeadlessPlatform;
    use box_arena::sim::Key;
    use box_arena::{Game, Settings, Variant};

    // Optional first argument picks the variant: "classic" or "versus"
    let variant = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<Variant>()?,
        None => Variant::default(),
    };
    let settings = Settings::from_variant(variant);
    settings.validate()?;

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();

    let ticks = DEMO_SECONDS * settings.tick_rate as u64;
    let mut platform =
        HeadlessPlatform::new(settings.width, settings.height, settings.font_size as i32)?
            .with_frame_clock(settings.tick_rate);

    // Sweep both players around a little so they have a chance to score
    platform.hold_key(Key::A, 0, ticks / 4);
    platform.hold_key(Key::W, ticks / 4, ticks / 2);
    platform.hold_key(Key::Right, 0, ticks / 3);
    platform.hold_key(Key::Down, ticks / 3, ticks * 2 / 3);
    platform.quit_at(ticks);

    let mut game = Game::new(settings, seed)?;
    log::info!("Game initialized with seed: {}", seed);
    let completed = game.run(&mut platform);

    println!("Ran {} ticks of {}", completed, game.settings().variant.as_str());
    for human in game.arena.humans() {
        println!("Player {}: {}", human.player_index, human.score);
    }
    Ok(())
}
