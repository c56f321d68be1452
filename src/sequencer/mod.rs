//! Narration sequencing
//!
//! The NarrationSequencer owns the current-slide pointer and the play/pause/
//! stop state, and decides when speech for the current slide starts and
//! when (and whether) the deck advances. Progression is driven entirely by
//! callback dispatch: speech start/finish/error events and a single advance
//! deadline polled by the event loop. Nothing blocks, and every transition
//! is cancellable.
//!
//! State machine per slide: `Idle → Playing → {Paused ⇄ Playing} → Idle`.
//! In full-presentation mode the advance deadline chains
//! `Playing → Advancing → Playing(next)` until the deck runs out, at which
//! point `Advancing → Idle` ends the run.
//!
//! Two invariants keep rapid input (double-play, pause/resume races) from
//! scheduling duplicate advances:
//! - at most one advance deadline exists; scheduling replaces any prior one,
//!   and starting or stopping playback clears it synchronously;
//! - every utterance carries a monotonically increasing token, and events
//!   with a stale token are discarded, so cancelled speech can never trigger
//!   a late advance.

use crate::deck::{Deck, SlideScript};
use crate::display::SlideDisplay;
use crate::speech::{SpeechEvent, Synth, UtteranceToken};
use crate::Result;
use log::{debug, error, info, trace};
use std::time::{Duration, Instant};

/// Playback state of the sequencer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    /// Nothing playing
    Idle,
    /// Narrating the given slide
    Playing(u16),
    /// Narration paused on the given slide
    Paused(u16),
    /// Between slides in a full-presentation run
    Advancing,
}

/// Whether playback covers one slide or the whole deck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    /// Narrate the current slide only
    SingleSlide,
    /// Auto-advance through every remaining slide
    FullPresentation,
}

/// The scheduled auto-advance; at most one exists at any time
#[derive(Debug, Clone, Copy)]
struct PendingAdvance {
    due: Instant,
}

/// An utterance that was requested but has not reported Started yet
#[derive(Debug, Clone, Copy)]
struct AwaitedStart {
    slide: u16,
    token: UtteranceToken,
}

/// Elapsed/total bookkeeping for the progress display
///
/// Pausing freezes the elapsed clock without resetting it; a fresh Started
/// (resume) lets it run again from where it stopped.
#[derive(Debug, Clone, Copy)]
struct ProgressWindow {
    total: Duration,
    accumulated: Duration,
    started_at: Option<Instant>,
}

impl ProgressWindow {
    fn new(total: Duration) -> Self {
        Self {
            total,
            accumulated: Duration::ZERO,
            started_at: None,
        }
    }

    fn start(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    fn pause(&mut self, now: Instant) {
        if let Some(started) = self.started_at.take() {
            self.accumulated += now.saturating_duration_since(started);
        }
    }

    fn elapsed(&self, now: Instant) -> Duration {
        self.accumulated
            + self
                .started_at
                .map(|t| now.saturating_duration_since(t))
                .unwrap_or(Duration::ZERO)
    }
}

/// Drives narration and auto-advance for a deck
pub struct NarrationSequencer {
    deck: Deck,
    synth: Box<dyn Synth>,

    state: SequencerState,
    mode: PlaybackMode,

    /// 1-based pointer to the slide navigation and narration act on
    current: u16,

    /// Token of the most recent utterance request
    token: UtteranceToken,

    /// Set between a speak request and its Started event
    awaiting_start: Option<AwaitedStart>,

    /// The scheduled auto-advance, if any
    pending: Option<PendingAdvance>,

    progress: Option<ProgressWindow>,

    /// Config override for every slide's reading buffer
    reading_buffer_override: Option<Duration>,

    /// Most recent narration failure, for the status line
    last_error: Option<String>,
}

impl NarrationSequencer {
    pub fn new(
        deck: Deck,
        synth: Box<dyn Synth>,
        reading_buffer_override: Option<Duration>,
    ) -> Self {
        Self {
            deck,
            synth,
            state: SequencerState::Idle,
            mode: PlaybackMode::SingleSlide,
            current: 1,
            token: 0,
            awaiting_start: None,
            pending: None,
            progress: None,
            reading_buffer_override,
            last_error: None,
        }
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn mode(&self) -> PlaybackMode {
        self.mode
    }

    pub fn current_slide(&self) -> u16 {
        self.current
    }

    /// Move the slide pointer without starting narration
    ///
    /// Callers stop playback first when navigating away mid-narration.
    pub fn set_current_slide(&mut self, index: u16) {
        self.current = index;
    }

    /// True while narration is playing, paused, or starting up
    pub fn is_narrating(&self) -> bool {
        self.awaiting_start.is_some()
            || !matches!(self.state, SequencerState::Idle)
    }

    pub fn synth_is_simulated(&self) -> bool {
        self.synth.is_simulated()
    }

    /// Elapsed and total time of the current narration window
    pub fn progress(&self, now: Instant) -> Option<(Duration, Duration)> {
        self.progress.as_ref().map(|p| (p.elapsed(now), p.total))
    }

    /// Take the most recent narration failure, if one was surfaced
    pub fn take_last_error(&mut self) -> Option<String> {
        self.last_error.take()
    }

    /// The full advance window for a script: spoken duration + reading buffer
    fn advance_window(&self, script: &SlideScript) -> Duration {
        let buffer = self
            .reading_buffer_override
            .unwrap_or_else(|| script.reading_buffer());
        script.spoken_duration() + buffer
    }

    /// Narrate the current slide only
    pub fn play_current_slide(&mut self, display: &mut dyn SlideDisplay) -> Result<()> {
        self.mode = PlaybackMode::SingleSlide;
        self.play_slide(self.current, display)
    }

    /// Start a full-presentation run from slide 1
    pub fn play_full_presentation(&mut self, display: &mut dyn SlideDisplay) -> Result<()> {
        info!("Starting full presentation run");
        self.mode = PlaybackMode::FullPresentation;
        self.current = 1;
        display.show_slide(1)?;
        self.play_slide(1, display)
    }

    /// Begin narrating a slide
    ///
    /// A slide without a script is a no-op that leaves prior state
    /// untouched. Otherwise any in-flight utterance and any scheduled
    /// advance are cancelled synchronously before the new request is issued,
    /// so two advance chains can never overlap.
    pub fn play_slide(&mut self, index: u16, display: &mut dyn SlideDisplay) -> Result<()> {
        let Some(script) = self.deck.script(index) else {
            debug!("No narration script for slide {}, ignoring play request", index);
            return Ok(());
        };

        self.cancel_playback()?;
        self.current = index;
        self.token += 1;
        self.awaiting_start = Some(AwaitedStart {
            slide: index,
            token: self.token,
        });
        self.progress = Some(ProgressWindow::new(self.advance_window(script)));

        display.highlight_narration(index);
        debug!(
            "Requesting narration of slide {} (utterance {}, {:.0}s + {:.0}s buffer)",
            index,
            self.token,
            script.spoken_duration_secs,
            script.reading_buffer_secs
        );

        if let Err(e) = self.synth.speak(self.token, script.speech_text, script.spoken_duration())
        {
            return self.fail_attempt(e.to_string(), display);
        }

        // Playing begins once the backend confirms the utterance started;
        // a mid-run advance keeps its Advancing state until then.
        if !matches!(self.state, SequencerState::Advancing) {
            self.state = SequencerState::Idle;
        }
        Ok(())
    }

    /// Pause narration; valid only from Playing, a no-op otherwise
    pub fn pause(&mut self, now: Instant) -> Result<()> {
        let SequencerState::Playing(slide) = self.state else {
            debug!("Pause ignored in state {:?}", self.state);
            return Ok(());
        };

        self.synth.pause()?;
        self.pending = None;
        if let Some(p) = self.progress.as_mut() {
            p.pause(now);
        }
        self.state = SequencerState::Paused(slide);
        debug!("Narration paused on slide {}", slide);
        Ok(())
    }

    /// Resume narration; valid only from Paused, a no-op otherwise
    ///
    /// The advance window restarts in full once the backend reports the
    /// fresh Started event: spoken duration plus reading buffer, not the
    /// remaining portion. A pause/resume cycle therefore lengthens the
    /// slide's wall-clock time by the amount played before the pause.
    pub fn resume(&mut self) -> Result<()> {
        let SequencerState::Paused(slide) = self.state else {
            debug!("Resume ignored in state {:?}", self.state);
            return Ok(());
        };

        self.awaiting_start = Some(AwaitedStart {
            slide,
            token: self.token,
        });
        self.synth.resume()?;
        debug!("Narration resuming on slide {}", slide);
        Ok(())
    }

    /// Stop narration from any state
    pub fn stop(&mut self, display: &mut dyn SlideDisplay) -> Result<()> {
        self.cancel_playback()?;
        self.state = SequencerState::Idle;
        self.mode = PlaybackMode::SingleSlide;
        display.clear_highlight(self.current);
        debug!("Narration stopped");
        Ok(())
    }

    /// Dispatch a speech backend event
    pub fn handle_speech_event(
        &mut self,
        event: SpeechEvent,
        now: Instant,
        display: &mut dyn SlideDisplay,
    ) -> Result<()> {
        match event {
            SpeechEvent::Started { token } => self.on_started(token, now),
            SpeechEvent::Finished { token } => self.on_finished(token, display),
            SpeechEvent::Error { token, message } => {
                if token != self.token {
                    trace!("Discarding stale error event (utterance {})", token);
                    return Ok(());
                }
                error!("Speech error on slide {}: {}", self.current, message);
                self.fail_attempt(message, display)
            }
        }
    }

    fn on_started(&mut self, token: UtteranceToken, now: Instant) -> Result<()> {
        let Some(awaited) = self.awaiting_start else {
            trace!("Discarding unexpected start event (utterance {})", token);
            return Ok(());
        };
        if token != awaited.token {
            trace!("Discarding stale start event (utterance {})", token);
            return Ok(());
        }

        self.awaiting_start = None;
        self.state = SequencerState::Playing(awaited.slide);
        if let Some(p) = self.progress.as_mut() {
            p.start(now);
        }

        if self.mode == PlaybackMode::FullPresentation {
            if let Some(script) = self.deck.script(awaited.slide) {
                let due = now + self.advance_window(script);
                // Replaces any prior deadline: at most one advance pending
                self.pending = Some(PendingAdvance { due });
            }
        }
        debug!("Narration of slide {} started", awaited.slide);
        Ok(())
    }

    fn on_finished(&mut self, token: UtteranceToken, display: &mut dyn SlideDisplay) -> Result<()> {
        if token != self.token {
            trace!("Discarding stale finish event (utterance {})", token);
            return Ok(());
        }

        match (self.state, self.mode) {
            (SequencerState::Playing(slide), PlaybackMode::SingleSlide) => {
                debug!("Narration of slide {} completed", slide);
                self.state = SequencerState::Idle;
                self.progress = None;
                display.clear_highlight(slide);
            }
            (_, PlaybackMode::FullPresentation) => {
                // The advance deadline owns progression; speech ending
                // early just leaves reading time on the clock.
                trace!("Speech finished, waiting out the reading buffer");
            }
            _ => trace!("Discarding finish event in state {:?}", self.state),
        }
        Ok(())
    }

    /// Abort the current attempt after a speech failure
    ///
    /// Single-slide mode lands in Idle exactly like natural completion. A
    /// full-presentation run stops instead of advancing: racing silently
    /// through the remaining slides with no audio helps nobody.
    fn fail_attempt(&mut self, message: String, display: &mut dyn SlideDisplay) -> Result<()> {
        if self.mode == PlaybackMode::FullPresentation {
            info!("Stopping full presentation after speech error");
        }
        if let Err(e) = self.synth.cancel() {
            debug!("Cancel after speech failure also failed: {}", e);
        }
        self.pending = None;
        self.awaiting_start = None;
        self.progress = None;
        self.state = SequencerState::Idle;
        self.mode = PlaybackMode::SingleSlide;
        self.last_error = Some(message);
        display.clear_highlight(self.current);
        Ok(())
    }

    /// Fire the advance deadline if it is due
    pub fn on_tick(&mut self, now: Instant, display: &mut dyn SlideDisplay) -> Result<()> {
        let due = match self.pending {
            Some(p) if now >= p.due => true,
            _ => false,
        };
        if !due {
            return Ok(());
        }

        self.pending = None;
        self.state = SequencerState::Advancing;
        self.advance_and_continue(display)
    }

    /// Time until the advance deadline, for the event-loop poll timeout
    pub fn time_until_advance(&self, now: Instant) -> Option<Duration> {
        self.pending
            .map(|p| p.due.saturating_duration_since(now))
    }

    /// Move to the next slide and keep the run going
    fn advance_and_continue(&mut self, display: &mut dyn SlideDisplay) -> Result<()> {
        let next = self.current + 1;
        if next > self.deck.total_slides() {
            info!("Full presentation completed");
            let last = self.current;
            self.state = SequencerState::Idle;
            self.mode = PlaybackMode::SingleSlide;
            self.progress = None;
            display.clear_highlight(last);
            return Ok(());
        }

        debug!("Advancing to slide {}", next);
        self.current = next;
        display.show_slide(next)?;
        self.play_slide(next, display)
    }

    /// Cancel the in-flight utterance and any scheduled advance
    fn cancel_playback(&mut self) -> Result<()> {
        self.synth.cancel()?;
        self.pending = None;
        self.awaiting_start = None;
        self.progress = None;
        Ok(())
    }
}
