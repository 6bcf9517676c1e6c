//! # Presentation Contract
//!
//! The library never prints. Clients implement [`Presenter`] to turn the
//! plain data below into whatever their surface shows; the terminal client
//! lives in `cli::render`.

use crate::model::WordList;
use crate::session::flashcard::FlashcardView;
use crate::session::spelling::SpellingView;

/// Sorted, filtered weeks ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekListing {
    pub weeks: Vec<WordList>,
    /// The filter that produced `weeks`, if any
    pub filter: Option<String>,
}

impl WeekListing {
    pub fn new(weeks: Vec<WordList>, filter: Option<&str>) -> Self {
        Self {
            weeks,
            filter: filter
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .map(str::to_string),
        }
    }
}

pub trait Presenter {
    fn render_weeks(&mut self, listing: &WeekListing) -> String;
    fn render_flashcard(&mut self, view: &FlashcardView) -> String;
    fn render_spelling(&mut self, view: &SpellingView) -> String;
}
