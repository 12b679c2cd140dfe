//! Brick Bounce headless runner
//!
//! Drives the simulation at a fixed 16 ms frame with the paddle on autopilot
//! and prints the final snapshot as JSON.
//!
//! Usage: `brick-bounce [config.json] [frames]`

#[cfg(not(target_arch = "wasm32"))]
use brick_bounce::{GameConfig, GamePhase, GameState, TickInput, tick};

/// Frame length fed to the simulation (ms)
#[cfg(not(target_arch = "wasm32"))]
const FRAME_MS: f32 = 16.0;
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_FRAMES: u64 = 20_000;

/// Runner holding the game and the phase seen on the previous frame
#[cfg(not(target_arch = "wasm32"))]
struct Demo {
    state: GameState,
    last_phase: GamePhase,
}

#[cfg(not(target_arch = "wasm32"))]
impl Demo {
    fn new(config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            last_phase: GamePhase::Playing,
        }
    }

    /// Run one frame; returns true once the game has ended
    fn update(&mut self) -> bool {
        let input = TickInput {
            elapsed_ms: Some(FRAME_MS),
            idle_mode: true,
            ..Default::default()
        };
        tick(&mut self.state, &input);

        let phase = self.state.phase();
        if phase != self.last_phase {
            log::info!(
                "{:?} after {} frames ({} bricks)",
                phase,
                self.state.frame_count(),
                self.state.counter().get()
            );
            self.last_phase = phase;
        }
        phase.is_terminal()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Brick Bounce (headless) starting...");

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => GameConfig::load_or_default(path),
        None => GameConfig::default(),
    };
    let frames = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let mut demo = Demo::new(config);
    for _ in 0..frames {
        if demo.update() {
            break;
        }
    }

    let phase = demo.state.phase();
    if let Some(banner) = phase.banner() {
        println!("{banner}");
    }
    match serde_json::to_string_pretty(&demo.state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Failed to serialize snapshot: {err}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is driven by the host page's frame callback on wasm
}
