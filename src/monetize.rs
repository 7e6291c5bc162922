//! Ad / purchase collaborator seam.
//!
//! The core never talks to an ad or billing SDK. It reports game-over counts
//! through [`AdGateway`] and reads an externally persisted "ads removed"
//! flag back. Receipt validation is out of scope here; the flag is whatever
//! the platform says it is.

use serde::{Deserialize, Serialize};

/// Monetization capability injected into the controller.
pub trait AdGateway {
    /// Whether the player purchased ad removal.
    fn ads_removed(&self) -> bool;
    /// Called after every game over with the running total across sessions.
    fn on_game_over(&mut self, total_game_overs: u32);
}

/// Gateway that never shows anything. Tests and headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAds;

impl AdGateway for NullAds {
    fn ads_removed(&self) -> bool {
        false
    }

    fn on_game_over(&mut self, _total_game_overs: u32) {}
}

/// When to present an interstitial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterstitialPolicy {
    /// Show one every this many game overs (0 disables interstitials)
    pub every: u32,
}

impl Default for InterstitialPolicy {
    fn default() -> Self {
        Self { every: 3 }
    }
}

impl InterstitialPolicy {
    pub fn should_show(&self, game_over_count: u32, ads_removed: bool) -> bool {
        !ads_removed
            && self.every > 0
            && game_over_count > 0
            && game_over_count % self.every == 0
    }
}

/// Gateway that logs where a platform would present an interstitial.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingAds {
    policy: InterstitialPolicy,
    removed: bool,
}

impl LoggingAds {
    pub fn new(policy: InterstitialPolicy, removed: bool) -> Self {
        Self { policy, removed }
    }
}

impl AdGateway for LoggingAds {
    fn ads_removed(&self) -> bool {
        self.removed
    }

    fn on_game_over(&mut self, total_game_overs: u32) {
        if self.policy.should_show(total_game_overs, self.removed) {
            log::info!("interstitial shown (game over #{total_game_overs})");
        }
    }
}
