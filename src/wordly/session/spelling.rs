use super::identity_order;
use crate::error::{Result, WordlyError};
use crate::model::{fold, LastScore};
use crate::speech::SpeechCue;
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

pub const START_CUE: &str = "Lets start!";
pub const DONE_CUE: &str = "All done!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    Idle,
    Active,
    Finished,
}

/// Outcome of one answered or skipped prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect { expected: String },
    Skipped,
}

/// What a transition asks the client to do.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Step {
    pub verdict: Option<Verdict>,
    pub cues: Vec<SpeechCue>,
    /// Set on the step that finished the quiz; the caller persists it.
    pub completed: Option<LastScore>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpellingView {
    pub state: QuizState,
    /// Zero-based index of the prompt being asked
    pub position: usize,
    pub total: usize,
    pub correct: usize,
    pub progress: f64,
    /// Verdict on the previous prompt
    pub last_verdict: Option<Verdict>,
}

/// First character followed by one underscore per remaining character.
pub fn mask(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut masked = first.to_string();
            masked.extend(chars.map(|_| '_'));
            masked
        }
        None => String::new(),
    }
}

/// One shuffled pass of dictation over a snapshot of words.
#[derive(Debug, Clone)]
pub struct SpellingQuiz {
    words: Vec<String>,
    order: Vec<usize>,
    position: usize,
    correct: usize,
    state: QuizState,
    prompt_delay: Duration,
    last_verdict: Option<Verdict>,
}

impl SpellingQuiz {
    pub fn new(prompt_delay: Duration) -> Self {
        Self {
            words: Vec::new(),
            order: Vec::new(),
            position: 0,
            correct: 0,
            state: QuizState::Idle,
            prompt_delay,
            last_verdict: None,
        }
    }

    pub fn start(&mut self, words: &[String]) -> Step {
        self.start_with(words, &mut rand::rng())
    }

    /// Begins a new pass, discarding any previous one. An empty word set
    /// leaves the quiz `Idle`.
    pub fn start_with<R: Rng + ?Sized>(&mut self, words: &[String], rng: &mut R) -> Step {
        self.words = words.to_vec();
        self.order = identity_order(self.words.len());
        self.position = 0;
        self.correct = 0;
        self.last_verdict = None;
        if words.is_empty() {
            self.state = QuizState::Idle;
            return Step::default();
        }
        self.order.shuffle(rng);
        self.state = QuizState::Active;

        let mut cues = vec![SpeechCue::now(START_CUE)];
        if let Some(word) = self.current_word() {
            cues.push(SpeechCue::after(word, self.prompt_delay));
        }
        Step {
            verdict: None,
            cues,
            completed: None,
        }
    }

    pub fn submit(&mut self, answer: &str) -> Result<Step> {
        let expected = self.require_active("submit")?.to_string();
        let verdict = if fold(answer) == fold(&expected) {
            self.correct += 1;
            Verdict::Correct
        } else {
            Verdict::Incorrect { expected }
        };
        Ok(self.advance(verdict, self.prompt_delay))
    }

    pub fn skip(&mut self) -> Result<Step> {
        self.require_active("skip")?;
        Ok(self.advance(Verdict::Skipped, Duration::ZERO))
    }

    /// Masked form of the current word; `None` unless a prompt is open.
    pub fn hint(&self) -> Option<String> {
        self.current_word().map(mask)
    }

    pub fn progress(&self) -> f64 {
        match self.state {
            QuizState::Idle => 0.0,
            _ if self.order.is_empty() => 0.0,
            _ => self.position as f64 / self.order.len() as f64,
        }
    }

    pub fn current_word(&self) -> Option<&str> {
        if self.state != QuizState::Active {
            return None;
        }
        self.order
            .get(self.position)
            .map(|&ix| self.words[ix].as_str())
    }

    /// Cue to say the current word again.
    pub fn repeat_prompt(&self) -> Option<SpeechCue> {
        self.current_word().map(SpeechCue::now)
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn total(&self) -> usize {
        self.order.len()
    }

    pub fn view(&self) -> SpellingView {
        SpellingView {
            state: self.state,
            position: self.position,
            total: self.order.len(),
            correct: self.correct,
            progress: self.progress(),
            last_verdict: self.last_verdict.clone(),
        }
    }

    fn require_active(&self, op: &str) -> Result<&str> {
        self.current_word()
            .ok_or_else(|| WordlyError::InvalidState(format!("cannot {} while {:?}", op, self.state)))
    }

    fn advance(&mut self, verdict: Verdict, next_delay: Duration) -> Step {
        self.position += 1;
        self.last_verdict = Some(verdict.clone());

        if self.position >= self.order.len() {
            self.state = QuizState::Finished;
            return Step {
                verdict: Some(verdict),
                cues: vec![SpeechCue::now(DONE_CUE)],
                completed: Some(LastScore::new(self.order.len(), self.correct)),
            };
        }

        let cues = self
            .current_word()
            .map(|word| vec![SpeechCue::after(word, next_delay)])
            .unwrap_or_default();
        Step {
            verdict: Some(verdict),
            cues,
            completed: None,
        }
    }
}
