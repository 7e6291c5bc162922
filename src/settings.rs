//! Game settings and preferences.
//!
//! Persisted as JSON at a caller-supplied path; load falls back to defaults
//! with a logged warning rather than failing the game.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::game::GameConfig;
use crate::monetize::InterstitialPolicy;

/// Player preferences plus the core pacing knobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    // === Audio ===
    /// Mute all sound cues
    pub muted: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,

    // === Monetization ===
    pub interstitials: InterstitialPolicy,

    // === Gameplay ===
    pub game: GameConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            muted: false,
            master_volume: 0.8,
            sfx_volume: 1.0,
            interstitials: InterstitialPolicy::default(),
            game: GameConfig::default(),
        }
    }
}

impl Settings {
    /// Effective cue volume after the mute flag.
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    /// Load settings from `path`, falling back to defaults on any failure.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed settings at {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("no settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                log::warn!("could not read settings at {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Save settings to `path` as pretty JSON.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)?;
        log::info!("settings saved to {}", path.display());
        Ok(())
    }
}
