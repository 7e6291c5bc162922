//! Green Tap entry point
//!
//! Headless scripted demo: an auto-player drives the state machine through
//! the virtual clock and logs every transition. Usage:
//!
//! ```text
//! green-tap [seed]
//! ```
//!
//! Set `GREEN_TAP_SETTINGS` to a JSON path to load preferences from disk.

use std::path::Path;

use green_tap::audio::LoggingAudio;
use green_tap::monetize::LoggingAds;
use green_tap::{GameColor, GameController, GameView, Presenter, Settings};

/// Presenter that logs snapshots and toasts.
struct LogPresenter;

impl Presenter for LogPresenter {
    fn render(&mut self, view: GameView) {
        log::debug!(
            "view: color={} active={} score={}",
            view.color,
            view.active(),
            view.score
        );
    }

    fn announce(&mut self, message: &str) {
        log::info!("[toast] {message}");
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let settings = match std::env::var_os("GREEN_TAP_SETTINGS") {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };
    let ads = LoggingAds::new(settings.interstitials, false);

    log::info!("green-tap demo, seed {seed}");
    let mut controller = GameController::new(settings, seed, LogPresenter, LoggingAudio, ads);
    controller.start();

    // Auto-player: tap each fresh target after a simulated reaction time,
    // stop reacting once the target score is reached and let the window
    // lapse.
    let reaction_ms = 180.0;
    let target_score = 12;
    let mut last_seen = GameColor::Idle;
    loop {
        controller.advance(25.0);
        let view = controller.machine().view();
        if !view.active() {
            break;
        }
        let fresh_target = view.color.is_target() && last_seen != view.color;
        last_seen = view.color;
        if fresh_target && view.score < target_score {
            controller.advance(reaction_ms);
            controller.tap();
        }
    }

    let view = controller.machine().view();
    match controller.machine().game_over_reason() {
        Some(reason) => log::info!(
            "demo over after {:.1}s: {} - final score {}",
            controller.machine().now_ms() / 1000.0,
            reason.label(),
            view.score
        ),
        None => log::warn!("demo ended without a game over"),
    }
}
