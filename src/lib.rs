//! Green Tap - a tap-when-green reaction time game
//!
//! Core modules:
//! - `game`: deterministic game loop (colors, rounds, virtual clock, state machine)
//! - `audio`: sound cue catalog and playback seam
//! - `monetize`: ad/purchase collaborator seam
//! - `controller`: wires the core to presentation, audio and ads
//! - `settings`: player preferences and pacing configuration

pub mod audio;
pub mod controller;
pub mod game;
pub mod monetize;
pub mod settings;

pub use controller::{GameController, Presenter};
pub use game::{
    GameColor, GameConfig, GameEvent, GameMachine, GameOverReason, GamePhase, GameView, TapOutcome,
};
pub use settings::Settings;

/// Game pacing constants
pub mod consts {
    /// Starting per-color display interval
    pub const BASE_INTERVAL_MS: f64 = 2000.0;
    /// Difficulty floor - the interval never drops below this
    pub const MIN_INTERVAL_MS: f64 = 500.0;
    /// Window in which a shown target must be tapped
    pub const TARGET_WINDOW_MS: f64 = 1500.0;
    /// Lead-in before the first color of a session
    pub const LEAD_DELAY_MS: f64 = 500.0;
    /// Every this many points...
    pub const SPEEDUP_EVERY: u32 = 5;
    /// ...the interval is multiplied by this factor
    pub const SPEEDUP_FACTOR: f64 = 0.9;
    /// Distinct distractor colors drawn per round
    pub const ROUND_DISTRACTORS: usize = 3;
}
