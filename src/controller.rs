//! Wires the game core to its collaborators.
//!
//! The controller owns the state machine and fans its events out to the
//! presentation adapter, the audio sink and the ad gateway. Collaborators
//! are plain capability traits; nothing here depends on a platform SDK.

use crate::audio::{AudioSink, SoundCue};
use crate::game::{GameEvent, GameMachine, GameView, TapOutcome};
use crate::monetize::AdGateway;
use crate::settings::Settings;

/// Presentation adapter: receives a state snapshot on every change, plus
/// short player-facing notices (the original UI's toasts).
pub trait Presenter {
    fn render(&mut self, view: GameView);
    fn announce(&mut self, message: &str);
}

/// Presenter that shows nothing. Tests and headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn render(&mut self, _view: GameView) {}
    fn announce(&mut self, _message: &str) {}
}

/// Owns the machine and its collaborators; all player intents come through
/// here.
pub struct GameController<P, A, G>
where
    P: Presenter,
    A: AudioSink,
    G: AdGateway,
{
    machine: GameMachine,
    presenter: P,
    audio: A,
    ads: G,
    settings: Settings,
    /// Game overs across all sessions, fed to the ad gateway
    game_over_count: u32,
}

impl<P, A, G> GameController<P, A, G>
where
    P: Presenter,
    A: AudioSink,
    G: AdGateway,
{
    pub fn new(settings: Settings, seed: u64, presenter: P, audio: A, ads: G) -> Self {
        let machine = GameMachine::new(settings.game.clone(), seed);
        Self {
            machine,
            presenter,
            audio,
            ads,
            settings,
            game_over_count: 0,
        }
    }

    pub fn machine(&self) -> &GameMachine {
        &self.machine
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn game_over_count(&self) -> u32 {
        self.game_over_count
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.settings.muted = muted;
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.settings.muted = !self.settings.muted;
        self.settings.muted
    }

    /// Start (or restart) a session.
    pub fn start(&mut self) {
        self.machine.start();
        self.dispatch();
    }

    /// Forward a tap intent.
    pub fn tap(&mut self) -> TapOutcome {
        let outcome = self.machine.tap();
        self.dispatch();
        outcome
    }

    /// Advance virtual time.
    pub fn advance(&mut self, ms: f64) {
        self.machine.advance(ms);
        self.dispatch();
    }

    fn play(&mut self, cue: SoundCue) {
        if !self.settings.muted {
            self.audio.play(cue);
        }
    }

    /// Drain machine events, route them to collaborators, then push the
    /// current snapshot to the presenter.
    fn dispatch(&mut self) {
        let events = self.machine.drain_events();
        if events.is_empty() {
            return;
        }
        for event in events {
            match event {
                GameEvent::Started | GameEvent::ColorChanged(_) => {}
                GameEvent::Scored { .. } => self.play(SoundCue::Success),
                GameEvent::SpeedChanged { interval_ms } => {
                    self.presenter
                        .announce(&format!("Speed increased! {interval_ms:.0}ms per color"));
                }
                GameEvent::GameOver(reason) => {
                    self.play(SoundCue::Error);
                    self.presenter.announce(&reason.to_string());
                    self.game_over_count += 1;
                    self.ads.on_game_over(self.game_over_count);
                }
            }
        }
        self.presenter.render(self.machine.view());
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::audio::NullAudio;
    use crate::game::{GameColor, GamePhase};
    use crate::monetize::{InterstitialPolicy, NullAds};

    #[derive(Default)]
    struct Recorded {
        views: Vec<GameView>,
        notices: Vec<String>,
        cues: Vec<SoundCue>,
        ad_signals: Vec<u32>,
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Recorded>>);

    impl Presenter for Recorder {
        fn render(&mut self, view: GameView) {
            self.0.borrow_mut().views.push(view);
        }
        fn announce(&mut self, message: &str) {
            self.0.borrow_mut().notices.push(message.to_string());
        }
    }

    impl AudioSink for Recorder {
        fn play(&mut self, cue: SoundCue) {
            self.0.borrow_mut().cues.push(cue);
        }
    }

    impl AdGateway for Recorder {
        fn ads_removed(&self) -> bool {
            false
        }
        fn on_game_over(&mut self, total_game_overs: u32) {
            self.0.borrow_mut().ad_signals.push(total_game_overs);
        }
    }

    fn controller(settings: Settings) -> (GameController<Recorder, Recorder, Recorder>, Recorder) {
        let recorder = Recorder::default();
        let c = GameController::new(
            settings,
            12345,
            recorder.clone(),
            recorder.clone(),
            recorder.clone(),
        );
        (c, recorder)
    }

    fn tap_next_target(c: &mut GameController<Recorder, Recorder, Recorder>) {
        let mut elapsed = 0.0;
        while !c.machine().current_color().is_target() {
            c.advance(10.0);
            elapsed += 10.0;
            assert!(elapsed < 30_000.0);
        }
        c.tap();
    }

    #[test]
    fn test_null_collaborators_smoke() {
        let mut c = GameController::new(Settings::default(), 1, NullPresenter, NullAudio, NullAds);
        c.start();
        c.advance(500.0);
        c.tap(); // distractor showing
        assert_eq!(c.machine().phase(), GamePhase::GameOver);
        assert_eq!(c.game_over_count(), 1);
    }

    #[test]
    fn test_wrong_tap_routes_error_and_ads() {
        let (mut c, recorder) = controller(Settings::default());
        c.start();
        c.advance(500.0);
        c.tap(); // distractor showing

        let recorded = recorder.0.borrow();
        assert_eq!(recorded.cues, vec![SoundCue::Error]);
        assert_eq!(recorded.ad_signals, vec![1]);
        assert!(recorded.notices.iter().any(|n| n.starts_with("Wrong color!")));
        let last = recorded.views.last().unwrap();
        assert_eq!(last.phase, GamePhase::GameOver);
        assert_eq!(last.color, GameColor::Idle);
    }

    #[test]
    fn test_correct_tap_plays_success() {
        let (mut c, recorder) = controller(Settings::default());
        c.start();
        tap_next_target(&mut c);
        let recorded = recorder.0.borrow();
        assert_eq!(recorded.cues, vec![SoundCue::Success]);
        assert_eq!(recorded.views.last().unwrap().score, 1);
    }

    #[test]
    fn test_milestone_announces_new_pace() {
        let (mut c, recorder) = controller(Settings::default());
        c.start();
        for _ in 0..5 {
            tap_next_target(&mut c);
        }
        let recorded = recorder.0.borrow();
        assert!(recorded
            .notices
            .iter()
            .any(|n| n == "Speed increased! 1800ms per color"));
    }

    #[test]
    fn test_mute_suppresses_cues() {
        let settings = Settings {
            muted: true,
            ..Default::default()
        };
        let (mut c, recorder) = controller(settings);
        c.start();
        c.advance(500.0);
        c.tap();
        assert!(recorder.0.borrow().cues.is_empty());
        // Announcements still go through
        assert!(!recorder.0.borrow().notices.is_empty());
    }

    #[test]
    fn test_game_over_count_spans_sessions() {
        let (mut c, recorder) = controller(Settings::default());
        for expected in 1..=3 {
            c.start();
            c.advance(500.0);
            c.tap();
            assert_eq!(c.game_over_count(), expected);
        }
        assert_eq!(recorder.0.borrow().ad_signals, vec![1, 2, 3]);
    }

    #[test]
    fn test_interstitial_policy_matches_counts() {
        let policy = InterstitialPolicy { every: 2 };
        let (mut c, _) = controller(Settings::default());
        let mut shown = Vec::new();
        for _ in 0..4 {
            c.start();
            c.advance(500.0);
            c.tap();
            if policy.should_show(c.game_over_count(), false) {
                shown.push(c.game_over_count());
            }
        }
        assert_eq!(shown, vec![2, 4]);
    }
}
