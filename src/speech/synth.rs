//! Speech synthesizer abstraction
//!
//! Provides a unified interface for text-to-speech playback with start/end
//! notification. The narration sequencer drives all slide progression from
//! these events, so backends must deliver them reliably: exactly one Started
//! per accepted utterance, a Finished only on natural completion, and never
//! a Finished for a cancelled utterance.

use crate::Result;
use log::{info, warn};
use std::sync::mpsc::Sender;
use std::time::Duration;

/// Identifies one utterance request
///
/// Tokens are issued by the sequencer and increase monotonically; events
/// carrying a token older than the current one are discarded, which is what
/// guarantees that cancelling speech suppresses its callback-driven effects.
pub type UtteranceToken = u64;

/// Playback notification from a speech backend
///
/// Delivered over an mpsc channel and drained by the event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum SpeechEvent {
    /// The utterance began playing
    Started { token: UtteranceToken },
    /// The utterance completed naturally (not cancelled)
    Finished { token: UtteranceToken },
    /// The utterance failed mid-playback
    Error { token: UtteranceToken, message: String },
}

/// Speech synthesizer trait
///
/// Backends play at most one utterance at a time; `speak` replaces any
/// utterance still in flight.
pub trait Synth: Send {
    /// Begin speaking text, reporting progress under the given token
    ///
    /// `spoken_duration` is the scripted length of the utterance, used by
    /// backends that cannot observe real playback time.
    fn speak(&mut self, token: UtteranceToken, text: &str, spoken_duration: Duration)
        -> Result<()>;

    /// Pause the current utterance
    fn pause(&mut self) -> Result<()>;

    /// Resume a paused utterance
    ///
    /// Emits a fresh Started event once playback is running again. Backends
    /// without native pause support restart the utterance from the beginning.
    fn resume(&mut self) -> Result<()>;

    /// Cancel the current utterance, suppressing its Finished event
    fn cancel(&mut self) -> Result<()>;

    /// Set speech rate (0-100, where 50 is normal)
    fn set_rate(&mut self, rate: u8) -> Result<()>;

    /// Set speech volume (0-100)
    fn set_volume(&mut self, volume: u8) -> Result<()>;

    /// Set voice by index (platform-specific)
    fn set_voice_idx(&mut self, idx: usize) -> Result<()>;

    /// True for the timer-only fallback backend (no audio)
    fn is_simulated(&self) -> bool {
        false
    }
}

/// Create a speech synthesizer, falling back to simulated narration
///
/// Tries the platform TTS engine first. When the platform lacks a usable
/// engine (or utterance callbacks, which the sequencer requires), narration
/// falls back to a silent timer that paces the presentation identically.
/// This never fails: a machine with no audio still gets a working viewer.
pub fn create_synth(events: Sender<SpeechEvent>, force_simulated: bool) -> Box<dyn Synth> {
    use super::backends::{simulated::SimulatedSynth, native::NativeSynth};

    if force_simulated {
        info!("Simulated narration forced by configuration");
        return Box::new(SimulatedSynth::new(events));
    }

    match NativeSynth::new(events.clone()) {
        Ok(synth) => {
            info!("Native TTS backend initialized");
            Box::new(synth)
        }
        Err(e) => {
            warn!("Speech unavailable, using timer-only narration: {}", e);
            Box::new(SimulatedSynth::new(events))
        }
    }
}
