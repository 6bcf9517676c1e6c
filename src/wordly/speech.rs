//! # Speech
//!
//! Sessions never talk to an audio backend. They return [`SpeechCue`] values
//! ("say this, after that long") and the client hands them to a
//! [`SpeechScheduler`], which plays them through a [`Speaker`].
//!
//! ## Playback Rules
//!
//! - At most one utterance plays at a time: a [`Speaker`] cancels whatever it
//!   is saying before starting the next text.
//! - Scheduling a new batch of cues cancels every cue of earlier batches that
//!   has not started yet. Rapid input therefore never stacks up delayed
//!   prompts; the most recently scheduled prompt wins.
//!
//! ## Implementations
//!
//! - [`CommandSpeaker`]: drives an external TTS program (`say`, `espeak-ng`).
//! - [`NullSpeaker`]: muted.

use crate::config::WordlyConfig;
use crate::error::{Result, WordlyError};
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Words per minute treated as rate 1.0 by both `say` and `espeak-ng`.
const BASE_WPM: f32 = 175.0;

/// Something to say, optionally after a pause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechCue {
    pub text: String,
    pub delay: Duration,
}

impl SpeechCue {
    pub fn now(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn after(text: impl Into<String>, delay: Duration) -> Self {
        Self {
            text: text.into(),
            delay,
        }
    }
}

/// Text-to-speech output.
pub trait Speaker: Send {
    /// Speak `text` once, cancelling any utterance still in progress.
    fn speak(&mut self, text: &str) -> Result<()>;

    /// Block until the current utterance, if any, has finished.
    fn wait(&mut self) {}
}

pub struct NullSpeaker;

impl Speaker for NullSpeaker {
    fn speak(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }
}

/// Speaks through an external program, one child process per utterance.
pub struct CommandSpeaker {
    program: String,
    voice: String,
    rate: f32,
    current: Option<Child>,
    warned: bool,
}

impl CommandSpeaker {
    pub fn new(program: impl Into<String>, voice: impl Into<String>, rate: f32) -> Self {
        Self {
            program: program.into(),
            voice: voice.into(),
            rate,
            current: None,
            warned: false,
        }
    }

    pub fn from_config(config: &WordlyConfig) -> Self {
        Self::new(
            config.speech_program.trim(),
            config.voice.clone(),
            config.speech_rate,
        )
    }

    /// Arguments for the configured program. `say` takes voice names rather
    /// than language tags, so the voice preference is only passed to espeak.
    pub fn args(&self, text: &str) -> Vec<String> {
        let wpm = ((BASE_WPM * self.rate).round() as u32).max(1).to_string();
        let name = Path::new(&self.program)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&self.program);
        match name {
            "say" => vec!["-r".to_string(), wpm, text.to_string()],
            _ => vec![
                "-v".to_string(),
                self.voice.clone(),
                "-s".to_string(),
                wpm,
                text.to_string(),
            ],
        }
    }

    fn cancel(&mut self) {
        if let Some(mut child) = self.current.take() {
            // already exited is fine
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl Speaker for CommandSpeaker {
    fn speak(&mut self, text: &str) -> Result<()> {
        self.cancel();
        let spawned = Command::new(&self.program)
            .args(self.args(text))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(child) => {
                self.current = Some(child);
                Ok(())
            }
            Err(e) => {
                if !self.warned {
                    self.warned = true;
                    tracing::warn!(program = %self.program, error = %e, "speech unavailable");
                }
                Err(WordlyError::Io(e))
            }
        }
    }

    fn wait(&mut self) {
        if let Some(mut child) = self.current.take() {
            let _ = child.wait();
        }
    }
}

impl Drop for CommandSpeaker {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Plays cue batches in the background with last-batch-wins cancellation.
#[derive(Clone)]
pub struct SpeechScheduler {
    speaker: Arc<Mutex<Box<dyn Speaker>>>,
    generation: Arc<AtomicU64>,
}

impl SpeechScheduler {
    pub fn new(speaker: Box<dyn Speaker>) -> Self {
        Self {
            speaker: Arc::new(Mutex::new(speaker)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn muted() -> Self {
        Self::new(Box::new(NullSpeaker))
    }

    /// Cancels pending cues from earlier batches and plays `cues` in order.
    ///
    /// Returns the playback thread, or `None` when there was nothing to say.
    pub fn schedule(&self, cues: Vec<SpeechCue>) -> Option<JoinHandle<()>> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        if cues.is_empty() {
            return None;
        }

        let speaker = Arc::clone(&self.speaker);
        let current = Arc::clone(&self.generation);
        Some(thread::spawn(move || {
            for cue in cues {
                if !cue.delay.is_zero() {
                    thread::sleep(cue.delay);
                }
                if current.load(Ordering::SeqCst) != generation {
                    return;
                }
                let Ok(mut guard) = speaker.lock() else {
                    return;
                };
                if let Err(e) = guard.speak(&cue.text) {
                    tracing::debug!(error = %e, text = %cue.text, "speech failed");
                }
            }
        }))
    }

    /// Lets `pending` play out and waits for the last utterance to end.
    pub fn finish(&self, pending: Option<JoinHandle<()>>) {
        if let Some(handle) = pending {
            let _ = handle.join();
        }
        if let Ok(mut guard) = self.speaker.lock() {
            guard.wait();
        }
    }

    /// Drops every cue that has not started playing yet.
    pub fn cancel_pending(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}
