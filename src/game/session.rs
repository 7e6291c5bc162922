//! Per-session state and the score/difficulty tracker.

use serde::{Deserialize, Serialize};

use super::color::GameColor;
use super::round::Round;
use crate::consts;

/// Pacing knobs for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Per-color display interval at session start
    pub base_interval_ms: f64,
    /// Floor the difficulty ramp may never cross
    pub min_interval_ms: f64,
    /// How long a shown target stays tappable
    pub target_window_ms: f64,
    /// Delay before the first color of a session
    pub lead_delay_ms: f64,
    /// Speed up every this many points (0 disables the ramp)
    pub speedup_every: u32,
    /// Multiplier applied to the interval on each milestone
    pub speedup_factor: f64,
    /// Distinct distractors per round
    pub distractors_per_round: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            base_interval_ms: consts::BASE_INTERVAL_MS,
            min_interval_ms: consts::MIN_INTERVAL_MS,
            target_window_ms: consts::TARGET_WINDOW_MS,
            lead_delay_ms: consts::LEAD_DELAY_MS,
            speedup_every: consts::SPEEDUP_EVERY,
            speedup_factor: consts::SPEEDUP_FACTOR,
            distractors_per_round: consts::ROUND_DISTRACTORS,
        }
    }
}

/// Result of a correct tap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreUpdate {
    pub score: u32,
    pub interval_ms: f64,
    /// True when this tap hit a ramp milestone and shortened the interval
    pub sped_up: bool,
}

/// All mutable state of one run, owned and written by the state machine only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub score: u32,
    /// Current pace; only ever decreases, floored at `min_interval_ms`
    pub interval_ms: f64,
    pub current_color: GameColor,
    pub round: Round,
    /// Index of the next color to draw from `round`
    pub cursor: usize,
}

impl GameSession {
    pub fn new(cfg: &GameConfig, round: Round) -> Self {
        Self {
            score: 0,
            interval_ms: cfg.base_interval_ms,
            current_color: GameColor::Idle,
            round,
            cursor: 0,
        }
    }

    /// Score a correct tap: +1 point, and on every `speedup_every`-th point
    /// shorten the interval multiplicatively, never below the floor.
    pub fn record_correct_tap(&mut self, cfg: &GameConfig) -> ScoreUpdate {
        self.score += 1;
        let mut sped_up = false;
        if cfg.speedup_every > 0 && self.score % cfg.speedup_every == 0 {
            let next = (self.interval_ms * cfg.speedup_factor).max(cfg.min_interval_ms);
            if next < self.interval_ms {
                self.interval_ms = next;
                sped_up = true;
            }
        }
        ScoreUpdate {
            score: self.score,
            interval_ms: self.interval_ms,
            sped_up,
        }
    }
}
