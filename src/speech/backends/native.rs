//! Native TTS backend using the tts crate
//!
//! The `tts` crate provides a unified interface to Speech Dispatcher on
//! Linux, AVFoundation on macOS, and other platform engines. The narration
//! sequencer needs to know when an utterance starts and ends, so this
//! backend requires an engine with utterance-callback support; engines
//! without it fall through to the simulated backend instead.

use crate::speech::{SpeechEvent, Synth, UtteranceToken};
use crate::{Result, SlidecastError};
use log::{debug, error, warn};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tts::Tts as TtsCrate;

/// Platform TTS backend
pub struct NativeSynth {
    /// The tts crate's TTS instance
    tts: TtsCrate,

    /// Token of the utterance currently in flight, shared with the
    /// engine callbacks
    current: Arc<AtomicU64>,

    /// Text of the current utterance, kept for resume
    ///
    /// Platform engines expose no universal pause, so pause cancels the
    /// utterance and resume re-speaks it from the beginning.
    paused_text: Option<String>,

    /// Cached rate setting (0-100)
    rate: Option<u8>,

    /// Cached volume setting (0-100)
    volume: Option<u8>,
}

impl NativeSynth {
    /// Create a new native TTS synthesizer
    ///
    /// Fails when no platform engine is available or the engine cannot
    /// report utterance boundaries.
    pub fn new(events: Sender<SpeechEvent>) -> Result<Self> {
        debug!("Creating native TTS backend");

        let mut tts = TtsCrate::default()
            .map_err(|e| SlidecastError::Speech(format!("Failed to initialize TTS: {}", e)))?;

        let features = tts.supported_features();
        if !features.utterance_callbacks {
            return Err(SlidecastError::Speech(
                "TTS engine does not report utterance boundaries".to_string(),
            ));
        }

        let current = Arc::new(AtomicU64::new(0));

        // Begin/end callbacks carry the token of whatever utterance the
        // backend was last asked to speak. The stop callback stays silent:
        // a cancelled utterance must never look like a natural completion.
        let begin_events = Mutex::new(events.clone());
        let begin_current = Arc::clone(&current);
        tts.on_utterance_begin(Some(Box::new(move |_utterance| {
            let token = begin_current.load(Ordering::SeqCst);
            if let Ok(tx) = begin_events.lock() {
                let _ = tx.send(SpeechEvent::Started { token });
            }
        })))
        .map_err(|e| SlidecastError::Speech(format!("Failed to set begin callback: {}", e)))?;

        let end_events = Mutex::new(events.clone());
        let end_current = Arc::clone(&current);
        tts.on_utterance_end(Some(Box::new(move |_utterance| {
            let token = end_current.load(Ordering::SeqCst);
            if let Ok(tx) = end_events.lock() {
                let _ = tx.send(SpeechEvent::Finished { token });
            }
        })))
        .map_err(|e| SlidecastError::Speech(format!("Failed to set end callback: {}", e)))?;

        tts.on_utterance_stop(Some(Box::new(|_utterance| {})))
            .map_err(|e| SlidecastError::Speech(format!("Failed to set stop callback: {}", e)))?;

        debug!("Native TTS backend created successfully");

        Ok(Self {
            tts,
            current,
            paused_text: None,
            rate: None,
            volume: None,
        })
    }

    /// Convert a 0-100 rate to the tts crate's scale
    fn convert_rate(&self, rate: u8) -> f32 {
        rate as f32
    }

    /// Convert a 0-100 volume to the tts crate's 0.0-1.0 scale
    fn convert_volume(&self, volume: u8) -> f32 {
        volume as f32 / 100.0
    }
}

impl Synth for NativeSynth {
    fn speak(
        &mut self,
        token: UtteranceToken,
        text: &str,
        _spoken_duration: Duration,
    ) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }

        debug!("Speaking utterance {} ({} chars)", token, text.len());
        self.current.store(token, Ordering::SeqCst);
        self.paused_text = Some(text.to_string());

        self.tts.speak(text, true).map_err(|e| {
            error!("Failed to speak: {}", e);
            SlidecastError::Speech(format!("Speak failed: {}", e))
        })?;

        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        debug!("Pausing speech (engine stop, resume re-speaks)");
        self.tts
            .stop()
            .map_err(|e| SlidecastError::Speech(format!("Pause failed: {}", e)))?;
        Ok(())
    }

    fn resume(&mut self) -> Result<()> {
        let Some(text) = self.paused_text.clone() else {
            debug!("Resume with no paused utterance");
            return Ok(());
        };

        debug!("Resuming utterance {} from the beginning", self.current.load(Ordering::SeqCst));
        self.tts.speak(&text, true).map_err(|e| {
            error!("Failed to resume: {}", e);
            SlidecastError::Speech(format!("Resume failed: {}", e))
        })?;

        Ok(())
    }

    fn cancel(&mut self) -> Result<()> {
        debug!("Canceling speech");
        self.paused_text = None;
        self.tts.stop().map_err(|e| {
            error!("Failed to cancel speech: {}", e);
            SlidecastError::Speech(format!("Cancel failed: {}", e))
        })?;

        Ok(())
    }

    fn set_rate(&mut self, rate: u8) -> Result<()> {
        debug!("Setting rate to {}", rate);
        self.rate = Some(rate);

        let features = self.tts.supported_features();
        if !features.rate {
            warn!("Rate control not supported on this platform");
            return Ok(());
        }

        let converted = self.convert_rate(rate);
        self.tts
            .set_rate(converted)
            .map_err(|e| SlidecastError::Speech(format!("Failed to set rate: {}", e)))?;

        Ok(())
    }

    fn set_volume(&mut self, volume: u8) -> Result<()> {
        debug!("Setting volume to {}", volume);
        self.volume = Some(volume);

        let features = self.tts.supported_features();
        if !features.volume {
            warn!("Volume control not supported on this platform");
            return Ok(());
        }

        let converted = self.convert_volume(volume);
        self.tts
            .set_volume(converted)
            .map_err(|e| SlidecastError::Speech(format!("Failed to set volume: {}", e)))?;

        Ok(())
    }

    fn set_voice_idx(&mut self, idx: usize) -> Result<()> {
        debug!("Setting voice index to {}", idx);

        let voices = self
            .tts
            .voices()
            .map_err(|e| SlidecastError::Speech(format!("Failed to get voices: {}", e)))?;

        if let Some(voice) = voices.get(idx) {
            debug!("Selecting voice: {:?}", voice);
            self.tts
                .set_voice(voice)
                .map_err(|e| SlidecastError::Speech(format!("Failed to set voice: {}", e)))?;
        } else {
            warn!(
                "Voice index {} out of range (have {} voices)",
                idx,
                voices.len()
            );
        }

        Ok(())
    }
}
