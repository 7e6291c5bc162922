//! The Idle / Active / GameOver state machine driving the game loop.
//!
//! Intents (`start`, `tap`) and virtual time (`advance`) go in; state changes
//! come back out as [`GameEvent`]s for the adapter layer to fan out.

use std::fmt;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::{GameClock, Timer};
use super::color::GameColor;
use super::round::Round;
use super::session::{GameConfig, GameSession, ScoreUpdate};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// No session yet
    #[default]
    Idle,
    /// A session is running
    Active,
    /// Run ended
    GameOver,
}

impl GamePhase {
    pub fn is_active(&self) -> bool {
        *self == GamePhase::Active
    }
}

/// Why a session ended. Expected, player-visible outcomes - not faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    /// Tapped while a distractor was showing
    WrongColor(GameColor),
    /// The target showed and the window lapsed without a tap
    TooSlow,
}

impl GameOverReason {
    /// Short machine-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            GameOverReason::WrongColor(_) => "wrong color",
            GameOverReason::TooSlow => "too slow",
        }
    }
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOverReason::WrongColor(color) => {
                write!(f, "Wrong color! You tapped {color} instead of green.")
            }
            GameOverReason::TooSlow => {
                write!(f, "Too slow! You must tap green within 1.5 seconds.")
            }
        }
    }
}

/// What a tap intent amounted to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TapOutcome {
    /// Not active, or the circle was idle - taps there are no-ops
    Ignored,
    Scored(ScoreUpdate),
    GameOver(GameOverReason),
}

/// Notable state changes, in the order they happened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Started,
    ColorChanged(GameColor),
    Scored { score: u32 },
    SpeedChanged { interval_ms: f64 },
    GameOver(GameOverReason),
}

/// Snapshot pushed to the presentation adapter on every change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameView {
    pub color: GameColor,
    pub phase: GamePhase,
    pub score: u32,
}

impl GameView {
    pub fn active(&self) -> bool {
        self.phase.is_active()
    }
}

/// The game loop state machine.
///
/// Fully deterministic: same seed, same intent/advance script, same run.
#[derive(Clone)]
pub struct GameMachine {
    config: GameConfig,
    phase: GamePhase,
    session: GameSession,
    clock: GameClock,
    rng: Pcg32,
    reason: Option<GameOverReason>,
    events: Vec<GameEvent>,
}

impl GameMachine {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let round = Round::generate(&mut rng, config.distractors_per_round);
        let session = GameSession::new(&config, round);
        Self {
            config,
            phase: GamePhase::Idle,
            session,
            clock: GameClock::new(),
            rng,
            reason: None,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.session.score
    }

    pub fn interval_ms(&self) -> f64 {
        self.session.interval_ms
    }

    pub fn current_color(&self) -> GameColor {
        self.session.current_color
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.reason
    }

    /// Virtual time since machine creation.
    pub fn now_ms(&self) -> f64 {
        self.clock.now_ms()
    }

    pub fn view(&self) -> GameView {
        GameView {
            color: self.session.current_color,
            phase: self.phase,
            score: self.session.score,
        }
    }

    /// Take the events accumulated since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Begin a session. Always resets to a fresh, independent session,
    /// whatever the prior one accumulated.
    pub fn start(&mut self) {
        self.clock.cancel_all();
        let round = Round::generate(&mut self.rng, self.config.distractors_per_round);
        self.session = GameSession::new(&self.config, round);
        self.phase = GamePhase::Active;
        self.reason = None;
        self.clock.schedule_next_color(self.config.lead_delay_ms);
        self.events.push(GameEvent::Started);
        log::info!(
            "session started: {}ms per color, first change in {}ms",
            self.config.base_interval_ms,
            self.config.lead_delay_ms
        );
    }

    /// Advance virtual time by `ms`, firing due timers in deadline order.
    pub fn advance(&mut self, ms: f64) {
        let until = self.clock.now_ms() + ms;
        loop {
            match self.clock.advance_to(until) {
                Some(Timer::NextColor) => self.on_color_timer(),
                Some(Timer::TargetTimeout) => self.end_game(GameOverReason::TooSlow),
                None => break,
            }
        }
    }

    /// The player tapped the circle.
    pub fn tap(&mut self) -> TapOutcome {
        if self.phase != GamePhase::Active {
            return TapOutcome::Ignored;
        }
        let color = self.session.current_color;
        if color.is_idle() {
            return TapOutcome::Ignored;
        }
        if !color.is_target() {
            let reason = GameOverReason::WrongColor(color);
            self.end_game(reason);
            return TapOutcome::GameOver(reason);
        }

        // Correct tap: disarm the timeout before it can fire, score, and
        // truncate the current cycle - a fresh round begins a full interval
        // from the tap, not from the last color change.
        self.clock.cancel_target_timeout();
        let update = self.session.record_correct_tap(&self.config);
        self.session.round = Round::generate(&mut self.rng, self.config.distractors_per_round);
        self.session.cursor = 0;
        self.clock.schedule_next_color(self.session.interval_ms);

        self.events.push(GameEvent::Scored {
            score: update.score,
        });
        log::debug!("correct tap at {:.0}ms, score {}", self.now_ms(), update.score);
        if update.sped_up {
            self.events.push(GameEvent::SpeedChanged {
                interval_ms: update.interval_ms,
            });
            log::info!("speed increased: {:.0}ms per color", update.interval_ms);
        }
        TapOutcome::Scored(update)
    }

    /// NextColor fired: draw the next color, regenerating the round when the
    /// cursor has exhausted it.
    fn on_color_timer(&mut self) {
        if self.session.cursor >= self.session.round.len() {
            self.session.round =
                Round::generate(&mut self.rng, self.config.distractors_per_round);
            self.session.cursor = 0;
        }
        let color = self
            .session
            .round
            .get(self.session.cursor)
            .unwrap_or(GameColor::Green);
        self.session.cursor += 1;
        self.session.current_color = color;

        if color.is_target() {
            self.clock.schedule_target_timeout(self.config.target_window_ms);
        }
        self.clock.schedule_next_color(self.session.interval_ms);

        self.events.push(GameEvent::ColorChanged(color));
        log::trace!(
            "color -> {} at {:.0}ms ({}/{})",
            color,
            self.now_ms(),
            self.session.cursor,
            self.session.round.len()
        );
    }

    fn end_game(&mut self, reason: GameOverReason) {
        self.clock.cancel_all();
        self.phase = GamePhase::GameOver;
        self.reason = Some(reason);
        self.session.current_color = GameColor::Idle;
        self.events.push(GameEvent::GameOver(reason));
        log::info!(
            "game over at {:.0}ms: {} (final score {})",
            self.now_ms(),
            reason.label(),
            self.session.score
        );
    }
}
