//! Narration sequencer tests
//!
//! Drive the state machine headlessly: a scripted synth records every call
//! and emits Started events like a real backend, a recording display stands
//! in for the terminal, and time is synthetic (explicit `Instant`s handed to
//! `on_tick`/`handle_speech_event`), so timing assertions are exact.

use slidecast::deck::{Deck, Slide, SlideScript};
use slidecast::display::SlideDisplay;
use slidecast::sequencer::{NarrationSequencer, PlaybackMode, SequencerState};
use slidecast::speech::{SpeechEvent, Synth, UtteranceToken};
use slidecast::Result;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
enum SynthCall {
    Speak(UtteranceToken),
    Pause,
    Resume,
    Cancel,
}

/// Synth double: records calls, acknowledges utterances like a backend
struct TestSynth {
    events: Sender<SpeechEvent>,
    calls: Arc<Mutex<Vec<SynthCall>>>,
    last_token: Arc<Mutex<UtteranceToken>>,
    /// Emit Started immediately on speak/resume (a cooperative backend)
    auto_start: bool,
}

impl Synth for TestSynth {
    fn speak(&mut self, token: UtteranceToken, _text: &str, _spoken: Duration) -> Result<()> {
        self.calls.lock().unwrap().push(SynthCall::Speak(token));
        *self.last_token.lock().unwrap() = token;
        if self.auto_start {
            let _ = self.events.send(SpeechEvent::Started { token });
        }
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.calls.lock().unwrap().push(SynthCall::Pause);
        Ok(())
    }

    fn resume(&mut self) -> Result<()> {
        self.calls.lock().unwrap().push(SynthCall::Resume);
        if self.auto_start {
            let token = *self.last_token.lock().unwrap();
            let _ = self.events.send(SpeechEvent::Started { token });
        }
        Ok(())
    }

    fn cancel(&mut self) -> Result<()> {
        self.calls.lock().unwrap().push(SynthCall::Cancel);
        Ok(())
    }

    fn set_rate(&mut self, _rate: u8) -> Result<()> {
        Ok(())
    }

    fn set_volume(&mut self, _volume: u8) -> Result<()> {
        Ok(())
    }

    fn set_voice_idx(&mut self, _idx: usize) -> Result<()> {
        Ok(())
    }
}

/// Display double recording every collaborator call
#[derive(Default)]
struct TestDisplay {
    shown: Vec<u16>,
    highlighted: Vec<u16>,
    cleared: Vec<u16>,
}

impl SlideDisplay for TestDisplay {
    fn show_slide(&mut self, index: u16) -> Result<()> {
        self.shown.push(index);
        Ok(())
    }

    fn highlight_narration(&mut self, index: u16) {
        self.highlighted.push(index);
    }

    fn clear_highlight(&mut self, index: u16) {
        self.cleared.push(index);
    }
}

/// Three slides, spoken durations 2s / 3s / 2s, no reading buffer
static SLIDES: &[Slide] = &[
    Slide {
        index: 1,
        title: "one",
        bullets: &["a"],
        notes: "",
        script: SlideScript {
            slide_index: 1,
            speech_text: "first",
            spoken_duration_secs: 2.0,
            reading_buffer_secs: 0.0,
        },
    },
    Slide {
        index: 2,
        title: "two",
        bullets: &["b"],
        notes: "",
        script: SlideScript {
            slide_index: 2,
            speech_text: "second",
            spoken_duration_secs: 3.0,
            reading_buffer_secs: 0.0,
        },
    },
    Slide {
        index: 3,
        title: "three",
        bullets: &["c"],
        notes: "",
        script: SlideScript {
            slide_index: 3,
            speech_text: "third",
            spoken_duration_secs: 2.0,
            reading_buffer_secs: 0.0,
        },
    },
];

struct Harness {
    seq: NarrationSequencer,
    display: TestDisplay,
    events: Receiver<SpeechEvent>,
    /// For injecting events by hand (stale tokens, errors)
    events_tx: Sender<SpeechEvent>,
    calls: Arc<Mutex<Vec<SynthCall>>>,
    t0: Instant,
}

impl Harness {
    fn new(auto_start: bool) -> Self {
        let deck = Deck::new(SLIDES).unwrap();
        let (tx, rx) = mpsc::channel();
        let calls = Arc::new(Mutex::new(Vec::new()));
        let synth = TestSynth {
            events: tx.clone(),
            calls: Arc::clone(&calls),
            last_token: Arc::new(Mutex::new(0)),
            auto_start,
        };
        Self {
            seq: NarrationSequencer::new(deck, Box::new(synth), None),
            display: TestDisplay::default(),
            events: rx,
            events_tx: tx,
            calls,
            t0: Instant::now(),
        }
    }

    /// Feed every queued speech event into the sequencer at time `now`
    fn deliver(&mut self, now: Instant) {
        let pending: Vec<SpeechEvent> = self.events.try_iter().collect();
        for event in pending {
            self.seq
                .handle_speech_event(event, now, &mut self.display)
                .unwrap();
        }
    }

    fn speak_calls(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| matches!(c, SynthCall::Speak(_)))
            .count()
    }

    fn pause_calls(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| **c == SynthCall::Pause)
            .count()
    }
}

#[test]
fn play_then_stop_leaves_idle_with_no_pending_timer() {
    for index in 1..=3u16 {
        let mut h = Harness::new(true);
        h.seq.set_current_slide(index);
        h.seq.play_current_slide(&mut h.display).unwrap();
        h.seq.stop(&mut h.display).unwrap();

        assert_eq!(h.seq.state(), SequencerState::Idle);
        assert_eq!(h.seq.time_until_advance(h.t0), None);

        // A Started queued before the stop must not revive playback
        h.deliver(h.t0);
        assert_eq!(h.seq.state(), SequencerState::Idle);
        assert_eq!(h.seq.time_until_advance(h.t0 + Duration::from_secs(60)), None);
    }
}

#[test]
fn second_pause_is_a_noop() {
    let mut h = Harness::new(true);
    h.seq.play_current_slide(&mut h.display).unwrap();
    h.deliver(h.t0);
    assert_eq!(h.seq.state(), SequencerState::Playing(1));

    h.seq.pause(h.t0 + Duration::from_secs(1)).unwrap();
    assert_eq!(h.seq.state(), SequencerState::Paused(1));
    assert_eq!(h.pause_calls(), 1);

    h.seq.pause(h.t0 + Duration::from_secs(1)).unwrap();
    assert_eq!(h.seq.state(), SequencerState::Paused(1));
    assert_eq!(h.pause_calls(), 1, "second pause must not reach the synth");
}

#[test]
fn full_run_visits_every_slide_once_in_order() {
    let mut h = Harness::new(true);
    h.seq.play_full_presentation(&mut h.display).unwrap();
    let mut now = h.t0;
    h.deliver(now);

    for _ in 0..10 {
        match h.seq.time_until_advance(now) {
            Some(wait) => {
                now += wait;
                h.seq.on_tick(now, &mut h.display).unwrap();
                h.deliver(now);
            }
            None => break,
        }
    }

    assert_eq!(h.display.shown, vec![1, 2, 3]);
    assert_eq!(h.seq.state(), SequencerState::Idle);
    assert_eq!(h.seq.mode(), PlaybackMode::SingleSlide);
    assert_eq!(h.seq.time_until_advance(now), None);
}

#[test]
fn full_run_transitions_at_scripted_times() {
    // Durations [2, 3, 2], no buffer: slide 2 at t=2, slide 3 at t=5,
    // Idle at t=7.
    let mut h = Harness::new(true);
    h.seq.play_full_presentation(&mut h.display).unwrap();
    h.deliver(h.t0);
    assert_eq!(h.display.shown, vec![1]);
    assert_eq!(
        h.seq.time_until_advance(h.t0),
        Some(Duration::from_secs(2))
    );

    // A tick just before the deadline must not advance
    let early = h.t0 + Duration::from_millis(1999);
    h.seq.on_tick(early, &mut h.display).unwrap();
    assert_eq!(h.display.shown, vec![1]);

    let t2 = h.t0 + Duration::from_secs(2);
    h.seq.on_tick(t2, &mut h.display).unwrap();
    h.deliver(t2);
    assert_eq!(h.display.shown, vec![1, 2]);
    assert_eq!(h.seq.time_until_advance(t2), Some(Duration::from_secs(3)));

    let t5 = h.t0 + Duration::from_secs(5);
    h.seq.on_tick(t5, &mut h.display).unwrap();
    h.deliver(t5);
    assert_eq!(h.display.shown, vec![1, 2, 3]);
    assert_eq!(h.seq.time_until_advance(t5), Some(Duration::from_secs(2)));

    let t7 = h.t0 + Duration::from_secs(7);
    h.seq.on_tick(t7, &mut h.display).unwrap();
    h.deliver(t7);
    assert_eq!(h.display.shown, vec![1, 2, 3]);
    assert_eq!(h.seq.state(), SequencerState::Idle);
}

#[test]
fn stop_before_the_advance_deadline_prevents_the_next_slide() {
    let mut h = Harness::new(true);
    h.seq.play_full_presentation(&mut h.display).unwrap();
    h.deliver(h.t0);

    // Speech for slide 1 completes, the advance is still pending
    h.events_tx
        .send(SpeechEvent::Finished { token: 1 })
        .unwrap();
    let t1 = h.t0 + Duration::from_secs(1);
    h.deliver(t1);

    h.seq.stop(&mut h.display).unwrap();

    // The deadline passing later must not show slide 2
    for secs in [2u64, 3, 10] {
        h.seq
            .on_tick(h.t0 + Duration::from_secs(secs), &mut h.display)
            .unwrap();
    }
    assert_eq!(h.display.shown, vec![1]);
    assert_eq!(h.seq.state(), SequencerState::Idle);
}

#[test]
fn stop_while_advancing_kills_the_chain() {
    // Backend that never acknowledges on its own: the gap between the
    // advance tick and the next Started is held open for the test.
    let mut h = Harness::new(false);
    h.seq.play_full_presentation(&mut h.display).unwrap();
    h.events_tx.send(SpeechEvent::Started { token: 1 }).unwrap();
    h.deliver(h.t0);
    assert_eq!(h.seq.state(), SequencerState::Playing(1));

    let t2 = h.t0 + Duration::from_secs(2);
    h.seq.on_tick(t2, &mut h.display).unwrap();
    assert_eq!(h.seq.state(), SequencerState::Advancing);
    assert_eq!(h.display.shown, vec![1, 2]);

    h.seq.stop(&mut h.display).unwrap();
    assert_eq!(h.seq.state(), SequencerState::Idle);

    // Slide 2's Started arriving after the stop is stale and ignored
    h.events_tx.send(SpeechEvent::Started { token: 2 }).unwrap();
    h.deliver(t2 + Duration::from_millis(10));
    assert_eq!(h.seq.state(), SequencerState::Idle);
    assert_eq!(h.seq.time_until_advance(t2 + Duration::from_secs(60)), None);
    assert_eq!(h.display.shown, vec![1, 2], "slide 3 never appears");
}

#[test]
fn play_out_of_range_is_a_noop_preserving_prior_state() {
    let mut h = Harness::new(true);
    h.seq.play_slide(99, &mut h.display).unwrap();
    assert_eq!(h.seq.state(), SequencerState::Idle);
    assert_eq!(h.speak_calls(), 0);
    assert!(h.display.highlighted.is_empty());

    // Same while something is already playing
    h.seq.play_current_slide(&mut h.display).unwrap();
    h.deliver(h.t0);
    assert_eq!(h.seq.state(), SequencerState::Playing(1));

    h.seq.play_slide(99, &mut h.display).unwrap();
    assert_eq!(h.seq.state(), SequencerState::Playing(1));
    assert_eq!(h.seq.current_slide(), 1);
    assert_eq!(h.speak_calls(), 1);
}

#[test]
fn speech_error_in_single_mode_returns_to_idle() {
    let mut h = Harness::new(true);
    h.seq.play_current_slide(&mut h.display).unwrap();
    h.deliver(h.t0);
    assert_eq!(h.seq.state(), SequencerState::Playing(1));

    h.events_tx
        .send(SpeechEvent::Error {
            token: 1,
            message: "engine died".to_string(),
        })
        .unwrap();
    h.deliver(h.t0 + Duration::from_secs(1));

    assert_eq!(h.seq.state(), SequencerState::Idle);
    assert!(h.display.cleared.contains(&1));
    assert!(h.seq.take_last_error().is_some());
}

#[test]
fn speech_error_in_full_mode_stops_the_run() {
    let mut h = Harness::new(true);
    h.seq.play_full_presentation(&mut h.display).unwrap();
    h.deliver(h.t0);

    h.events_tx
        .send(SpeechEvent::Error {
            token: 1,
            message: "engine died".to_string(),
        })
        .unwrap();
    let t1 = h.t0 + Duration::from_secs(1);
    h.deliver(t1);

    assert_eq!(h.seq.state(), SequencerState::Idle);
    assert_eq!(h.seq.mode(), PlaybackMode::SingleSlide);
    assert_eq!(h.seq.take_last_error().as_deref(), Some("engine died"));

    // No auto-advance past the failure
    h.seq
        .on_tick(h.t0 + Duration::from_secs(30), &mut h.display)
        .unwrap();
    assert_eq!(h.display.shown, vec![1]);
}

#[test]
fn natural_completion_in_single_mode_returns_to_idle() {
    let mut h = Harness::new(true);
    h.seq.play_current_slide(&mut h.display).unwrap();
    h.deliver(h.t0);

    h.events_tx
        .send(SpeechEvent::Finished { token: 1 })
        .unwrap();
    h.deliver(h.t0 + Duration::from_secs(2));

    assert_eq!(h.seq.state(), SequencerState::Idle);
    assert!(h.display.cleared.contains(&1));
    assert!(h.seq.take_last_error().is_none());
}

#[test]
fn early_speech_finish_in_full_mode_waits_out_the_window() {
    let mut h = Harness::new(true);
    h.seq.play_full_presentation(&mut h.display).unwrap();
    h.deliver(h.t0);

    h.events_tx
        .send(SpeechEvent::Finished { token: 1 })
        .unwrap();
    let t1 = h.t0 + Duration::from_secs(1);
    h.deliver(t1);

    assert_eq!(h.seq.state(), SequencerState::Playing(1));
    assert_eq!(h.seq.time_until_advance(t1), Some(Duration::from_secs(1)));
}

#[test]
fn resume_restarts_the_full_advance_window() {
    let mut h = Harness::new(true);
    h.seq.play_full_presentation(&mut h.display).unwrap();
    h.deliver(h.t0);
    assert_eq!(
        h.seq.time_until_advance(h.t0),
        Some(Duration::from_secs(2))
    );

    let t1 = h.t0 + Duration::from_secs(1);
    h.seq.pause(t1).unwrap();
    assert_eq!(h.seq.state(), SequencerState::Paused(1));
    assert_eq!(h.seq.time_until_advance(t1), None);

    // Resume much later; the window is the full 2 seconds again
    let t10 = h.t0 + Duration::from_secs(10);
    h.seq.resume().unwrap();
    h.deliver(t10);
    assert_eq!(h.seq.state(), SequencerState::Playing(1));
    assert_eq!(
        h.seq.time_until_advance(t10),
        Some(Duration::from_secs(2))
    );
}

#[test]
fn pause_freezes_elapsed_time_without_resetting_it() {
    let mut h = Harness::new(true);
    h.seq.play_current_slide(&mut h.display).unwrap();
    h.deliver(h.t0);

    let t1 = h.t0 + Duration::from_secs(1);
    let (elapsed, total) = h.seq.progress(t1).unwrap();
    assert_eq!(elapsed, Duration::from_secs(1));
    assert_eq!(total, Duration::from_secs(2));

    h.seq.pause(t1).unwrap();
    let (elapsed, _) = h.seq.progress(h.t0 + Duration::from_secs(5)).unwrap();
    assert_eq!(elapsed, Duration::from_secs(1), "clock frozen while paused");

    let t5 = h.t0 + Duration::from_secs(5);
    h.seq.resume().unwrap();
    h.deliver(t5);
    let (elapsed, _) = h.seq.progress(t5 + Duration::from_secs(1)).unwrap();
    assert_eq!(elapsed, Duration::from_secs(2), "clock continues after resume");
}

#[test]
fn stale_events_from_a_replaced_utterance_are_ignored() {
    let mut h = Harness::new(true);
    h.seq.play_current_slide(&mut h.display).unwrap();
    h.deliver(h.t0);
    assert_eq!(h.seq.state(), SequencerState::Playing(1));

    // Restart narration; the first utterance is cancelled and replaced
    h.seq.play_current_slide(&mut h.display).unwrap();
    h.deliver(h.t0 + Duration::from_millis(100));
    assert_eq!(h.seq.state(), SequencerState::Playing(1));
    assert_eq!(h.speak_calls(), 2);

    // A late Finished from the cancelled utterance changes nothing
    h.events_tx
        .send(SpeechEvent::Finished { token: 1 })
        .unwrap();
    h.deliver(h.t0 + Duration::from_millis(200));
    assert_eq!(h.seq.state(), SequencerState::Playing(1));
}

#[test]
fn replaying_cancels_before_speaking_again() {
    let mut h = Harness::new(true);
    h.seq.play_current_slide(&mut h.display).unwrap();
    h.seq.play_current_slide(&mut h.display).unwrap();

    let calls = h.calls.lock().unwrap().clone();
    let first_speak = calls
        .iter()
        .position(|c| matches!(c, SynthCall::Speak(_)))
        .unwrap();
    assert!(
        calls[first_speak + 1..].contains(&SynthCall::Cancel),
        "the second play must cancel the first utterance: {:?}",
        calls
    );
}
