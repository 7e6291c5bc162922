//! Sound cues for game feedback.
//!
//! Procedurally specified tones - no sample assets. The core only names the
//! cue and its oscillator envelope; synthesis belongs to whatever platform
//! implements [`AudioSink`].

use serde::{Deserialize, Serialize};

/// Feedback cues the game emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Correct tap
    Success,
    /// Wrong tap or timeout
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Waveform {
    Sine,
    Sawtooth,
}

/// Oscillator envelope for a cue: a frequency ramp with an exponential gain
/// decay over the tone's duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToneSpec {
    pub waveform: Waveform,
    pub start_hz: f32,
    pub end_hz: f32,
    /// Time the frequency ramp takes
    pub ramp_ms: f32,
    /// Total tone duration
    pub duration_ms: f32,
    /// Initial gain, decaying to near silence by the end
    pub gain: f32,
}

impl SoundCue {
    /// The tone to synthesize for this cue.
    pub fn tone(&self) -> ToneSpec {
        match self {
            // Rising chirp
            SoundCue::Success => ToneSpec {
                waveform: Waveform::Sine,
                start_hz: 800.0,
                end_hz: 1200.0,
                ramp_ms: 100.0,
                duration_ms: 200.0,
                gain: 0.3,
            },
            // Falling buzz
            SoundCue::Error => ToneSpec {
                waveform: Waveform::Sawtooth,
                start_hz: 400.0,
                end_hz: 200.0,
                ramp_ms: 300.0,
                duration_ms: 300.0,
                gain: 0.3,
            },
        }
    }
}

/// Playback seam. Implementations receive cues fire-and-forget; nothing in
/// the core waits on them.
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

/// Silent sink for tests and headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Sink that logs cues instead of synthesizing them.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingAudio;

impl AudioSink for LoggingAudio {
    fn play(&mut self, cue: SoundCue) {
        let tone = cue.tone();
        log::debug!(
            "audio {:?}: {:?} {:.0}Hz -> {:.0}Hz over {:.0}ms",
            cue,
            tone.waveform,
            tone.start_hz,
            tone.end_hz,
            tone.duration_ms
        );
    }
}
