use crate::error::{Result, WordlyError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

/// A named vocabulary list ("week").
///
/// Words keep their insertion order. Entries produced by [`WordList::new`] are
/// trimmed, lowercase-folded and de-duplicated; entries restored from an import
/// are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordList {
    pub name: String,
    pub words: Vec<String>,
}

impl WordList {
    /// Builds a normalized list, rejecting an empty name or an empty word set.
    pub fn new(
        name: impl AsRef<str>,
        words: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self> {
        let name = name.as_ref().trim().to_string();
        let words = normalize_words(words);
        if name.is_empty() || words.is_empty() {
            return Err(WordlyError::Validation(
                "Please enter a week name and at least one word.".to_string(),
            ));
        }
        Ok(Self { name, words })
    }

    /// Structural validity as required for imported entries: a name and at
    /// least one word, none of them blank.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.words.is_empty()
            && self.words.iter().all(|w| !w.trim().is_empty())
    }
}

/// Locale-insensitive lowercase fold used for equality and de-duplication.
pub fn fold(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Trims, drops empties, folds and de-duplicates, keeping the first occurrence.
pub fn normalize_words(words: impl IntoIterator<Item = impl AsRef<str>>) -> Vec<String> {
    let mut seen = HashSet::new();
    words
        .into_iter()
        .map(|w| fold(w.as_ref()))
        .filter(|w| !w.is_empty())
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

/// Splits free-form input the way the word entry box does: on newlines and commas.
pub fn split_raw_words(raw: &str) -> Vec<&str> {
    raw.split(|c| c == '\n' || c == ',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .collect()
}

/// Name ordering for listings. Case-folded first so "apple" sits next to
/// "Apple", then raw order so the result is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Score of a completed spelling quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastScore {
    pub total: usize,
    pub correct: usize,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,
}

impl LastScore {
    pub fn new(total: usize, correct: usize) -> Self {
        Self {
            total,
            correct,
            date: Utc::now(),
        }
    }

    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }

    /// Reward rating shown after a quiz: 0 to 3 stars.
    pub fn stars(&self) -> u8 {
        let ratio = self.ratio();
        if ratio >= 0.9 {
            3
        } else if ratio >= 0.7 {
            2
        } else if ratio > 0.0 {
            1
        } else {
            0
        }
    }
}

/// The stats document. Only the most recent score is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRecord {
    #[serde(rename = "lastScore", default, skip_serializing_if = "Option::is_none")]
    pub last_score: Option<LastScore>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn new_normalizes_words() {
        let week = WordList::new("  Week 1 ", [" Apple", "banana", "APPLE", "", "  "]).unwrap();
        assert_eq!(week.name, "Week 1");
        assert_eq!(week.words, vec!["apple", "banana"]);
    }

    #[test]
    fn new_rejects_empty_name() {
        let err = WordList::new("   ", ["apple"]).unwrap_err();
        assert!(matches!(err, WordlyError::Validation(_)));
    }

    #[test]
    fn new_rejects_words_that_normalize_to_nothing() {
        let err = WordList::new("Week 1", [" ", ""]).unwrap_err();
        assert!(matches!(err, WordlyError::Validation(_)));
    }

    #[test]
    fn is_valid_rejects_blank_words() {
        let entry = |words: &[&str]| WordList {
            name: "W".to_string(),
            words: words.iter().map(|w| w.to_string()).collect(),
        };
        assert!(entry(&["apple"]).is_valid());
        assert!(!entry(&[]).is_valid());
        assert!(!entry(&[""]).is_valid());
        assert!(!entry(&["apple", "  "]).is_valid());
    }

    #[test]
    fn split_raw_words_handles_commas_and_newlines() {
        assert_eq!(
            split_raw_words("apple, banana\ncherry,,\n\n date"),
            vec!["apple", "banana", "cherry", "date"]
        );
    }

    #[test]
    fn compare_names_folds_case() {
        let mut names = vec!["week b", "Week A", "apple", "Week 10"];
        names.sort_by(|a, b| compare_names(a, b));
        assert_eq!(names, vec!["apple", "Week 10", "Week A", "week b"]);
    }

    #[test]
    fn stars_follow_score_ratio() {
        assert_eq!(LastScore::new(10, 9).stars(), 3);
        assert_eq!(LastScore::new(10, 7).stars(), 2);
        assert_eq!(LastScore::new(10, 1).stars(), 1);
        assert_eq!(LastScore::new(10, 0).stars(), 0);
        assert_eq!(LastScore::new(0, 0).stars(), 0);
    }

    #[test]
    fn stats_document_uses_browser_layout() {
        let stats = StatsRecord {
            last_score: Some(LastScore {
                total: 5,
                correct: 4,
                date: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
            }),
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"lastScore": {"total": 5, "correct": 4, "date": 1_700_000_000_000i64}})
        );
    }

    #[test]
    fn empty_stats_document_parses() {
        let stats: StatsRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(stats, StatsRecord::default());
    }
}
