//! Mini Flight entry point
//!
//! Runs a headless demo session: a simulated 60 Hz clock, the built-in
//! pilot holding the stick, and a log of how the run went.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use mini_flight::scene::Overlay;
    use mini_flight::{FrameDriver, GameState, Host, InputEvent, Scene, Tuning};

    const USAGE: &str = "usage: mini-flight [--seed N] [--tuning FILE] [--max-frames N] [--restarts N] [--dump-scene]";

    struct Options {
        seed: u64,
        tuning: Option<PathBuf>,
        max_frames: u64,
        restarts: u32,
        dump_scene: bool,
    }

    impl Default for Options {
        fn default() -> Self {
            Self {
                seed: 0x5EED,
                tuning: None,
                max_frames: 20_000,
                restarts: 1,
                dump_scene: false,
            }
        }
    }

    fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
        let mut options = Options::default();
        while let Some(arg) = args.next() {
            let mut value = |name: &str| args.next().ok_or_else(|| format!("{} needs a value", name));
            match arg.as_str() {
                "--seed" => {
                    let v = value("--seed")?;
                    options.seed = v.parse().map_err(|e| format!("bad seed {:?}: {}", v, e))?;
                }
                "--tuning" => options.tuning = Some(PathBuf::from(value("--tuning")?)),
                "--max-frames" => {
                    let v = value("--max-frames")?;
                    options.max_frames = v.parse().map_err(|e| format!("bad frame count {:?}: {}", v, e))?;
                }
                "--restarts" => {
                    let v = value("--restarts")?;
                    options.restarts = v.parse().map_err(|e| format!("bad restart count {:?}: {}", v, e))?;
                }
                "--dump-scene" => options.dump_scene = true,
                "-h" | "--help" => return Err(USAGE.to_string()),
                other => return Err(format!("unknown argument {:?}\n{}", other, USAGE)),
            }
        }
        Ok(options)
    }

    /// Simulated host: fixed 60 Hz clock, no window, reacts to the overlay
    struct HeadlessHost {
        now_ms: f64,
        frame_ms: f64,
        presented: u64,
        max_frames: u64,
        restarts_left: u32,
        last_scene: Option<Scene>,
    }

    impl Host for HeadlessHost {
        fn now_ms(&mut self) -> f64 {
            self.now_ms += self.frame_ms;
            self.now_ms
        }

        fn poll_events(&mut self, out: &mut Vec<InputEvent>) {
            if self.presented >= self.max_frames {
                log::warn!("Frame limit ({}) reached", self.max_frames);
                out.push(InputEvent::Quit);
                return;
            }
            match self.last_scene.as_ref().map(|s| &s.overlay) {
                Some(Overlay::Dim(_)) if self.restarts_left > 0 => {
                    self.restarts_left -= 1;
                    out.push(InputEvent::Restart);
                }
                Some(Overlay::Dim(_)) | Some(Overlay::Completion(_)) => out.push(InputEvent::Quit),
                _ => {}
            }
        }

        fn present(&mut self, scene: &Scene) {
            self.presented += 1;
            self.last_scene = Some(scene.clone());
        }
    }

    pub fn run() -> ExitCode {
        env_logger::init();
        log::info!("Mini Flight (headless) starting...");

        let options = match parse_args(std::env::args().skip(1)) {
            Ok(options) => options,
            Err(msg) => {
                log::error!("{}", msg);
                eprintln!("{}", msg);
                return ExitCode::from(2);
            }
        };

        let tuning = options
            .tuning
            .as_deref()
            .map(Tuning::load)
            .unwrap_or_default();
        let state = GameState::new(options.seed, tuning);
        log::info!("Game initialized with seed: {}", options.seed);

        let mut host = HeadlessHost {
            now_ms: 0.0,
            frame_ms: tuning.frame_unit_ms as f64,
            presented: 0,
            max_frames: options.max_frames,
            restarts_left: options.restarts,
            last_scene: None,
        };
        let mut driver = FrameDriver::new(state).with_autopilot(true);
        let frames = driver.run(&mut host);

        let state = driver.state();
        log::info!(
            "Finished after {} frames: {:?}, run {}, {:.1}% travelled, {} obstacles in flight",
            frames,
            state.phase,
            state.run,
            state.journey.progress() * 100.0,
            state.obstacles.len()
        );

        if options.dump_scene {
            if let Some(scene) = &host.last_scene {
                match serde_json::to_string_pretty(scene) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        log::error!("Could not serialize scene: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            }
        }

        ExitCode::SUCCESS
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser host drives `FrameDriver` directly; nothing to do here
}
