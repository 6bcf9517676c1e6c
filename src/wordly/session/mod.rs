//! # Practice Sessions
//!
//! Two small state machines over a frozen snapshot of a week's words:
//!
//! - [`flashcard::FlashcardSession`]: navigate a (optionally shuffled) deck and
//!   flip the current card.
//! - [`spelling::SpellingQuiz`]: one shuffled pass of dictation with scoring.
//!
//! Sessions copy the words they are given and never reach back into storage.
//! They also never produce audio or output directly: speech is returned as
//! [`SpeechCue`](crate::speech::SpeechCue) values and rendering goes through
//! [`Presenter`](crate::present::Presenter) using the `view()` snapshots.

pub mod flashcard;
pub mod spelling;

/// `[0, 1, .., len)`
pub(crate) fn identity_order(len: usize) -> Vec<usize> {
    (0..len).collect()
}
