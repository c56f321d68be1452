//! Application state management
//!
//! The App struct is the central data structure for the viewer, owning the
//! configuration, the deck, the terminal display, the narration sequencer,
//! and the channels that carry speech and enhancement events back into the
//! event loop. There are no ambient singletons: everything that needs the
//! sequencer or the display is handed a reference.

pub mod config;

use crate::clipboard;
use crate::deck::Deck;
use crate::display::{format_clock, TerminalDisplay};
use crate::enhance::{EnhanceClient, EnhanceEvent, EnhanceKind};
use crate::input::HandlerStack;
use crate::sequencer::{NarrationSequencer, PlaybackMode, SequencerState};
use crate::speech::{create_synth, SpeechEvent};
use crate::Result;
use config::Config;
use log::{debug, info, warn};
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

/// Main application state for the presentation viewer
pub struct App {
    /// Configuration loaded from ~/.slidecast.cfg
    pub config: Config,

    /// The presentation deck
    pub deck: Deck,

    /// Terminal renderer
    pub display: TerminalDisplay,

    /// Narration state machine; owns the speech synthesizer
    pub sequencer: NarrationSequencer,

    /// Key handler stack for modal input (help overlay)
    pub handlers: HandlerStack,

    /// Events from the speech backend
    speech_events: Receiver<SpeechEvent>,

    /// Enhancement endpoint client
    enhance: EnhanceClient,

    /// Events from background enhancement work
    enhance_events: Receiver<EnhanceEvent>,

    /// None while the startup availability check is in flight
    enhance_available: Option<bool>,

    /// An enhancement request is outstanding
    enhance_busy: bool,

    /// Transient message for the status line
    notice: Option<String>,
}

impl App {
    /// Create the application state with given terminal dimensions
    pub fn new(config: Config, cols: u16, rows: u16) -> Result<Self> {
        info!("Initializing viewer with {}x{} terminal", cols, rows);

        let deck = Deck::builtin();
        info!("Deck loaded: {} slides", deck.total_slides());

        let (speech_tx, speech_rx) = mpsc::channel();
        let mut synth = create_synth(speech_tx, config.force_simulated());

        // Apply config settings to the synth
        if let Some(rate) = config.rate() {
            synth.set_rate(rate)?;
            info!("Speech rate set to {}", rate);
        }
        if let Some(volume) = config.volume() {
            synth.set_volume(volume)?;
            info!("Speech volume set to {}", volume);
        }
        if let Some(voice_idx) = config.voice_idx() {
            synth.set_voice_idx(voice_idx)?;
            info!("Speech voice index set to {}", voice_idx);
        }

        let buffer_override = config
            .reading_buffer_override()
            .map(Duration::from_secs_f32);
        if let Some(buffer) = buffer_override {
            info!("Reading buffer overridden to {:.1}s", buffer.as_secs_f32());
        }

        let sequencer = NarrationSequencer::new(deck, synth, buffer_override);
        let display = TerminalDisplay::new(deck, cols, rows);

        let (enhance_tx, enhance_rx) = mpsc::channel();
        let enhance = EnhanceClient::new(
            &config.enhance_url(),
            &config.enhance_model(),
            Duration::from_secs(config.enhance_timeout_secs()),
            enhance_tx,
        )?;
        enhance.check_availability();

        Ok(Self {
            config,
            deck,
            display,
            sequencer,
            handlers: HandlerStack::new(),
            speech_events: speech_rx,
            enhance,
            enhance_events: enhance_rx,
            enhance_available: None,
            enhance_busy: false,
            notice: None,
        })
    }

    // ========== Navigation ==========

    /// Jump to a slide, stopping any narration in progress
    pub fn go_to_slide(&mut self, index: u16) -> Result<()> {
        if self.deck.slide(index).is_none() {
            debug!("Navigation to slide {} out of range", index);
            return Ok(());
        }
        if self.sequencer.is_narrating() {
            self.sequencer.stop(&mut self.display)?;
        }
        self.sequencer.set_current_slide(index);
        self.display.show_slide(index)
    }

    pub fn next_slide(&mut self) -> Result<()> {
        let current = self.sequencer.current_slide();
        if current < self.deck.total_slides() {
            self.go_to_slide(current + 1)?;
        }
        Ok(())
    }

    pub fn prev_slide(&mut self) -> Result<()> {
        let current = self.sequencer.current_slide();
        if current > 1 {
            self.go_to_slide(current - 1)?;
        }
        Ok(())
    }

    // ========== Narration controls ==========

    /// Play, pause, or resume depending on the sequencer state
    pub fn toggle_narration(&mut self) -> Result<()> {
        self.notice = None;
        match self.sequencer.state() {
            SequencerState::Playing(_) => self.sequencer.pause(Instant::now()),
            SequencerState::Paused(_) => self.sequencer.resume(),
            _ => self.sequencer.play_current_slide(&mut self.display),
        }
    }

    pub fn play_full_presentation(&mut self) -> Result<()> {
        self.notice = None;
        self.sequencer.play_full_presentation(&mut self.display)
    }

    pub fn stop_narration(&mut self) -> Result<()> {
        self.sequencer.stop(&mut self.display)
    }

    // ========== Panels ==========

    pub fn toggle_notes(&mut self) -> Result<()> {
        self.display.notes_visible = !self.display.notes_visible;
        self.display.render()
    }

    pub fn toggle_enhance_panel(&mut self) -> Result<()> {
        self.display.enhance_visible = !self.display.enhance_visible;
        self.display.render()
    }

    /// Kick off a background enhancement request for the current slide
    pub fn request_enhancement(&mut self, kind: EnhanceKind) -> Result<()> {
        self.display.enhance_visible = true;

        if self.enhance_available == Some(false) {
            return self.display.set_enhance_lines(
                "The enhancement service is not available. \
                 Ensure Ollama is running locally.",
            );
        }
        if self.enhance_busy {
            return self
                .display
                .set_enhance_lines("Still working on the previous request...");
        }

        let Some(slide) = self.deck.slide(self.sequencer.current_slide()) else {
            return Ok(());
        };

        self.enhance_busy = true;
        self.enhance.request(kind, slide);
        self.display
            .set_enhance_lines(&format!("Requesting {}...", kind.label()))
    }

    // ========== Utility ==========

    /// Copy the current slide's speaker notes to the clipboard
    pub fn copy_notes(&mut self) -> Result<()> {
        let Some(slide) = self.deck.slide(self.sequencer.current_slide()) else {
            return Ok(());
        };
        match clipboard::copy_to_clipboard(slide.notes) {
            Ok(()) => self.notice = Some("Speaker notes copied".to_string()),
            Err(e) => {
                warn!("Clipboard copy failed: {}", e);
                self.notice = Some("Clipboard unavailable".to_string());
            }
        }
        Ok(())
    }

    pub fn redraw(&mut self) -> Result<()> {
        self.display.render()
    }

    pub fn show_help(&mut self) -> Result<()> {
        self.display.show_help()
    }

    pub fn resize(&mut self, cols: u16, rows: u16) -> Result<()> {
        self.display.resize(cols, rows)
    }

    // ========== Event pump ==========

    /// Drain pending events, fire due timers, refresh the status line
    ///
    /// Called once per event-loop iteration.
    pub fn pump(&mut self, now: Instant) -> Result<()> {
        let speech: Vec<SpeechEvent> = self.speech_events.try_iter().collect();
        for event in speech {
            self.sequencer
                .handle_speech_event(event, now, &mut self.display)?;
        }
        if let Some(error) = self.sequencer.take_last_error() {
            self.notice = Some(format!("Narration error: {}", error));
        }

        let enhancements: Vec<EnhanceEvent> = self.enhance_events.try_iter().collect();
        for event in enhancements {
            self.handle_enhance_event(event)?;
        }

        self.sequencer.on_tick(now, &mut self.display)?;
        self.refresh_status(now)
    }

    /// Poll timeout for the event loop: never sleep past the advance deadline
    pub fn time_until_advance(&self, now: Instant) -> Option<Duration> {
        self.sequencer.time_until_advance(now)
    }

    fn handle_enhance_event(&mut self, event: EnhanceEvent) -> Result<()> {
        match event {
            EnhanceEvent::Availability(available) => {
                info!("Enhancement service available: {}", available);
                self.enhance_available = Some(available);
                Ok(())
            }
            EnhanceEvent::Completed { kind, outcome } => {
                self.enhance_busy = false;
                match outcome {
                    Ok(text) => self
                        .display
                        .set_enhance_lines(&format!("{}:\n\n{}", kind.label(), text)),
                    Err(message) => {
                        warn!("Enhancement request failed: {}", message);
                        self.display.set_enhance_lines(&message)
                    }
                }
            }
        }
    }

    /// Rebuild the status line from the sequencer and service state
    fn refresh_status(&mut self, now: Instant) -> Result<()> {
        let mut parts: Vec<String> = Vec::new();

        let narration = match self.sequencer.state() {
            SequencerState::Playing(slide) => match self.sequencer.progress(now) {
                Some((elapsed, total)) => format!(
                    "Narrating slide {}  {} / {}",
                    slide,
                    format_clock(elapsed),
                    format_clock(total)
                ),
                None => format!("Narrating slide {}", slide),
            },
            SequencerState::Paused(slide) => match self.sequencer.progress(now) {
                Some((elapsed, total)) => format!(
                    "Paused on slide {}  {} / {}",
                    slide,
                    format_clock(elapsed),
                    format_clock(total)
                ),
                None => format!("Paused on slide {}", slide),
            },
            SequencerState::Advancing => "Advancing...".to_string(),
            SequencerState::Idle if self.sequencer.is_narrating() => "Starting...".to_string(),
            SequencerState::Idle => "Ready (? for help)".to_string(),
        };
        parts.push(narration);

        if self.sequencer.mode() == PlaybackMode::FullPresentation {
            parts.push("full run".to_string());
        }
        if self.sequencer.synth_is_simulated() {
            parts.push("silent narration".to_string());
        }
        if self.enhance_available == Some(false) {
            parts.push("AI offline".to_string());
        }
        if let Some(notice) = &self.notice {
            parts.push(notice.clone());
        }

        self.display.set_status(format!(" {}", parts.join("  |  ")))
    }
}
