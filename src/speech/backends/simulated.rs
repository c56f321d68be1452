//! Timer-only simulated narration
//!
//! Fallback backend for platforms without a usable speech engine: no audio
//! plays, but utterances still "start" immediately and "finish" when the
//! scripted duration elapses, so the presentation paces itself exactly as it
//! would with real speech.
//!
//! A worker thread owns the pacing. Commands arrive over a channel and the
//! worker waits out the active utterance with `recv_timeout`, so pause,
//! resume, and cancel all take effect without polling.

use crate::speech::{SpeechEvent, Synth, UtteranceToken};
use crate::{Result, SlidecastError};
use log::debug;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

/// Idle wait when no utterance deadline is pending
const PARK_TIMEOUT: Duration = Duration::from_secs(3600);

enum SimCommand {
    Speak {
        token: UtteranceToken,
        duration: Duration,
    },
    Pause,
    Resume,
    Cancel,
}

struct ActiveUtterance {
    token: UtteranceToken,
    deadline: Instant,
    /// Time left when paused; None while playing
    paused_remaining: Option<Duration>,
}

/// Silent, timer-driven speech backend
pub struct SimulatedSynth {
    commands: Sender<SimCommand>,
}

impl SimulatedSynth {
    /// Spawn the pacing worker
    pub fn new(events: Sender<SpeechEvent>) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || worker(rx, events));
        Self { commands: tx }
    }

    fn send(&self, cmd: SimCommand) -> Result<()> {
        self.commands
            .send(cmd)
            .map_err(|_| SlidecastError::Speech("simulated narration worker exited".to_string()))
    }
}

impl Synth for SimulatedSynth {
    fn speak(
        &mut self,
        token: UtteranceToken,
        text: &str,
        spoken_duration: Duration,
    ) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        debug!(
            "Simulating utterance {} for {:.1}s",
            token,
            spoken_duration.as_secs_f32()
        );
        self.send(SimCommand::Speak {
            token,
            duration: spoken_duration,
        })
    }

    fn pause(&mut self) -> Result<()> {
        self.send(SimCommand::Pause)
    }

    fn resume(&mut self) -> Result<()> {
        self.send(SimCommand::Resume)
    }

    fn cancel(&mut self) -> Result<()> {
        self.send(SimCommand::Cancel)
    }

    fn set_rate(&mut self, rate: u8) -> Result<()> {
        debug!("Simulated backend ignoring rate {}", rate);
        Ok(())
    }

    fn set_volume(&mut self, volume: u8) -> Result<()> {
        debug!("Simulated backend ignoring volume {}", volume);
        Ok(())
    }

    fn set_voice_idx(&mut self, idx: usize) -> Result<()> {
        debug!("Simulated backend ignoring voice index {}", idx);
        Ok(())
    }

    fn is_simulated(&self) -> bool {
        true
    }
}

fn worker(commands: Receiver<SimCommand>, events: Sender<SpeechEvent>) {
    let mut active: Option<ActiveUtterance> = None;

    loop {
        let timeout = match &active {
            Some(a) if a.paused_remaining.is_none() => {
                a.deadline.saturating_duration_since(Instant::now())
            }
            _ => PARK_TIMEOUT,
        };

        match commands.recv_timeout(timeout) {
            Ok(SimCommand::Speak { token, duration }) => {
                active = Some(ActiveUtterance {
                    token,
                    deadline: Instant::now() + duration,
                    paused_remaining: None,
                });
                if events.send(SpeechEvent::Started { token }).is_err() {
                    break;
                }
            }
            Ok(SimCommand::Pause) => {
                if let Some(a) = active.as_mut() {
                    if a.paused_remaining.is_none() {
                        a.paused_remaining =
                            Some(a.deadline.saturating_duration_since(Instant::now()));
                    }
                }
            }
            Ok(SimCommand::Resume) => {
                if let Some(a) = active.as_mut() {
                    if let Some(remaining) = a.paused_remaining.take() {
                        a.deadline = Instant::now() + remaining;
                        // A fresh Started marks the restart of playback
                        if events.send(SpeechEvent::Started { token: a.token }).is_err() {
                            break;
                        }
                    }
                }
            }
            Ok(SimCommand::Cancel) => {
                active = None;
            }
            Err(RecvTimeoutError::Timeout) => {
                let finished = match &active {
                    Some(a) => {
                        a.paused_remaining.is_none() && Instant::now() >= a.deadline
                    }
                    None => false,
                };
                if finished {
                    if let Some(a) = active.take() {
                        if events.send(SpeechEvent::Finished { token: a.token }).is_err() {
                            break;
                        }
                    }
                }
            }
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recv(rx: &Receiver<SpeechEvent>) -> SpeechEvent {
        rx.recv_timeout(Duration::from_secs(2))
            .expect("expected a speech event")
    }

    #[test]
    fn test_started_then_finished() {
        let (tx, rx) = mpsc::channel();
        let mut synth = SimulatedSynth::new(tx);

        synth
            .speak(7, "hello", Duration::from_millis(20))
            .unwrap();

        assert_eq!(recv(&rx), SpeechEvent::Started { token: 7 });
        assert_eq!(recv(&rx), SpeechEvent::Finished { token: 7 });
    }

    #[test]
    fn test_cancel_suppresses_finished() {
        let (tx, rx) = mpsc::channel();
        let mut synth = SimulatedSynth::new(tx);

        synth
            .speak(1, "hello", Duration::from_millis(50))
            .unwrap();
        assert_eq!(recv(&rx), SpeechEvent::Started { token: 1 });

        synth.cancel().unwrap();
        assert_eq!(
            rx.recv_timeout(Duration::from_millis(200)),
            Err(RecvTimeoutError::Timeout)
        );
    }

    #[test]
    fn test_pause_holds_and_resume_restarts() {
        let (tx, rx) = mpsc::channel();
        let mut synth = SimulatedSynth::new(tx);

        synth
            .speak(3, "hello", Duration::from_millis(60))
            .unwrap();
        assert_eq!(recv(&rx), SpeechEvent::Started { token: 3 });

        synth.pause().unwrap();
        // No Finished while paused, even well past the original deadline
        assert_eq!(
            rx.recv_timeout(Duration::from_millis(150)),
            Err(RecvTimeoutError::Timeout)
        );

        synth.resume().unwrap();
        assert_eq!(recv(&rx), SpeechEvent::Started { token: 3 });
        assert_eq!(recv(&rx), SpeechEvent::Finished { token: 3 });
    }

    #[test]
    fn test_empty_text_is_noop() {
        let (tx, rx) = mpsc::channel();
        let mut synth = SimulatedSynth::new(tx);

        synth.speak(9, "", Duration::from_millis(10)).unwrap();
        assert_eq!(
            rx.recv_timeout(Duration::from_millis(100)),
            Err(RecvTimeoutError::Timeout)
        );
    }
}
