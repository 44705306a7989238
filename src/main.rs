//! Catch Rush entry point
//!
//! Native headless demo: plays one round with an autopilot catcher and logs
//! what a renderer/audio layer would be told. Pass a mode (`easy`, `normal`,
//! `hard`) as the first argument; `RUST_LOG=debug` shows every catch and miss.

use std::path::Path;

use catch_rush::audio::{AudioBackend, AudioManager, SoundEffect};
use catch_rush::sim::GamePhase;
use catch_rush::{Game, GameConfig, Settings};

const SETTINGS_PATH: &str = "catch_rush_settings.json";
/// Demo frame pacing (60 Hz)
const FRAME_DT: f32 = 1.0 / 60.0;
/// Give up on a round after this many frames
const MAX_FRAMES: u32 = 60 * 120;

/// Backend that logs instead of making noise
struct LogBackend;

impl AudioBackend for LogBackend {
    fn play_effect(&mut self, effect: SoundEffect, volume: f32) -> bool {
        log::info!("♪ {} (vol {:.2})", effect.asset(), volume);
        true
    }

    fn play_music(&mut self, track: &str, volume: f32) -> bool {
        log::info!("♫ looping {} (vol {:.2})", track, volume);
        true
    }

    fn stop_music(&mut self) {
        log::info!("♫ stopped");
    }

    fn set_music_volume(&mut self, volume: f32) {
        log::info!("♫ volume {:.2}", volume);
    }
}

/// Steer toward the lowest object that can still be caught
fn autopilot_target(game: &Game<AudioManager<LogBackend>>) -> Option<f32> {
    let session = game.session();
    session
        .objects
        .iter()
        .filter(|o| o.pos.y < session.catcher.y)
        .max_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|o| o.pos.x)
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Catch Rush (native) starting...");

    let settings = Settings::load_from(Path::new(SETTINGS_PATH));
    let mut config = GameConfig::default();
    settings.apply_to(&mut config);
    config.seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(config.seed);

    let audio = AudioManager::new(LogBackend, &settings);
    let mut game = Game::new(&config, audio);

    if let Some(mode) = std::env::args().nth(1) {
        game.select_mode(&mode);
    }
    game.start_selected();

    let mut frames = 0;
    let mut best_score = 0;
    while game.phase() != GamePhase::Menu && frames < MAX_FRAMES {
        if let Some(x) = autopilot_target(&game) {
            game.on_input_position(x);
        }
        game.on_frame(FRAME_DT);
        best_score = best_score.max(game.score());
        frames += 1;
    }

    if game.phase() != GamePhase::Menu {
        log::info!("Autopilot outlasted the demo, returning to menu");
        game.return_to_menu();
    }

    println!(
        "Played {:.1}s on {}: final score {}",
        frames as f32 * FRAME_DT,
        game.session().mode.id.label(),
        best_score
    );
}
