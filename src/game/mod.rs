//! Deterministic game core
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Virtual clock only (no wall time, no real timers)
//! - Seeded RNG only
//! - Session state has a single writer (the state machine)
//! - No rendering or platform dependencies

pub mod clock;
pub mod color;
pub mod machine;
pub mod round;
pub mod session;

pub use clock::{GameClock, Timer};
pub use color::GameColor;
pub use machine::{GameEvent, GameMachine, GameOverReason, GamePhase, GameView, TapOutcome};
pub use round::Round;
pub use session::{GameConfig, GameSession, ScoreUpdate};
