//! # Command Layer
//!
//! The word list operations of wordly. Each command lives in its own submodule
//! and is a plain function over a [`DataStore`](crate::store::DataStore).
//!
//! Commands:
//! - Operate on [`WordList`] and [`StatsRecord`] values
//! - Return a structured [`CmdResult`] (listed weeks, affected weeks, messages)
//! - Never print, prompt or exit: the UI decides how to present the result
//!
//! Validation and parse failures are returned as errors *before* anything is
//! written, so a failed command never leaves a partial mutation behind.
//!
//! Tests live next to each command and run against `InMemoryStore`.
//!
//! ## Command Modules
//!
//! - [`list`]: Sorted, filtered listing
//! - [`get`]: Load one week by name
//! - [`save`]: Upsert a week (normalizing its words)
//! - [`delete`]: Remove a week by name
//! - [`export`]: Serialize the collection to JSON
//! - [`import`]: Replace the collection from a JSON document
//! - [`csv`]: Parse CSV text into a week and upsert it
//! - [`fetch`]: Download CSV from a published spreadsheet link
//! - [`stats`]: Read and record the last quiz score
//! - [`config`]: Show and change settings

use crate::config::WordlyConfig;
use crate::model::{StatsRecord, WordList};
use serde::Serialize;

pub mod config;
pub mod csv;
pub mod delete;
pub mod export;
pub mod fetch;
pub mod get;
pub mod import;
pub mod list;
pub mod save;
pub mod stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Weeks that were written by the command
    pub affected_weeks: Vec<WordList>,
    /// Weeks to display
    pub listed_weeks: Vec<WordList>,
    pub stats: Option<StatsRecord>,
    pub config: Option<WordlyConfig>,
    /// Serialized export document
    pub exported: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_weeks(mut self, weeks: Vec<WordList>) -> Self {
        self.affected_weeks = weeks;
        self
    }

    pub fn with_listed_weeks(mut self, weeks: Vec<WordList>) -> Self {
        self.listed_weeks = weeks;
        self
    }

    pub fn with_stats(mut self, stats: StatsRecord) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: WordlyConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_exported(mut self, document: String) -> Self {
        self.exported = Some(document);
        self
    }
}
