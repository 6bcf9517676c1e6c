use super::identity_order;
use crate::speech::SpeechCue;
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashcardState {
    /// No words loaded
    Empty,
    /// Card face-down
    Ready,
    /// Card face-up
    Revealed,
}

/// What the card shows right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardFace {
    Empty,
    Hidden,
    Shown(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashcardView {
    pub face: CardFace,
    /// Zero-based position in the deck
    pub position: usize,
    pub total: usize,
}

/// Cursor over a shuffleable ordering of one week's words.
#[derive(Debug, Clone)]
pub struct FlashcardSession {
    words: Vec<String>,
    order: Vec<usize>,
    position: usize,
    revealed: bool,
}

impl Default for FlashcardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FlashcardSession {
    pub fn new() -> Self {
        Self {
            words: Vec::new(),
            order: Vec::new(),
            position: 0,
            revealed: false,
        }
    }

    /// Replaces the deck with `words` in their given order, face-down.
    pub fn load(&mut self, words: &[String]) {
        self.words = words.to_vec();
        self.order = identity_order(self.words.len());
        self.position = 0;
        self.revealed = false;
    }

    pub fn state(&self) -> FlashcardState {
        if self.words.is_empty() {
            FlashcardState::Empty
        } else if self.revealed {
            FlashcardState::Revealed
        } else {
            FlashcardState::Ready
        }
    }

    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Re-deals the deck in a uniformly random order and starts over face-down.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.order.shuffle(rng);
        self.position = 0;
        self.revealed = false;
    }

    pub fn flip(&mut self) {
        if !self.words.is_empty() {
            self.revealed = !self.revealed;
        }
    }

    pub fn next(&mut self) {
        if self.words.is_empty() {
            return;
        }
        self.position = (self.position + 1) % self.order.len();
        self.revealed = false;
    }

    pub fn prev(&mut self) {
        if self.words.is_empty() {
            return;
        }
        let len = self.order.len();
        self.position = (self.position + len - 1) % len;
        self.revealed = false;
    }

    pub fn current_word(&self) -> Option<&str> {
        self.order
            .get(self.position)
            .map(|&ix| self.words[ix].as_str())
    }

    /// Cue for reading the current card aloud.
    pub fn speak_current(&self) -> Option<SpeechCue> {
        self.current_word().map(SpeechCue::now)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn view(&self) -> FlashcardView {
        let face = match (self.state(), self.current_word()) {
            (FlashcardState::Revealed, Some(word)) => CardFace::Shown(word.to_string()),
            (FlashcardState::Ready, _) => CardFace::Hidden,
            _ => CardFace::Empty,
        };
        FlashcardView {
            face,
            position: self.position,
            total: self.order.len(),
        }
    }
}
