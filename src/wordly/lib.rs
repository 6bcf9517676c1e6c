//! # Wordly Architecture
//!
//! Wordly keeps vocabulary "weeks" (named word lists) and drills them as
//! flashcards or as a spoken spelling quiz. It is a library with a terminal
//! client, not the other way around.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs interactive loops, prints output  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands and sessions                   │
//! │  - Persists quiz scores on completion                       │
//! └─────────────────────────────────────────────────────────────┘
//!                   │                           │
//!                   ▼                           ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Command Layer (commands/)    │ │  Sessions (session/)      │
//! │  - Word list business logic   │ │  - Flashcards, spelling   │
//! │  - Import, export, fetch      │ │  - Return speech cues     │
//! └───────────────────────────────┘ └───────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never plays
//! audio. Sessions describe speech as [`speech::SpeechCue`] values; the client
//! decides whether and how to play them.
//!
//! ## Testing
//!
//! 1. **Commands** and **sessions**: unit tests against `InMemoryStore` and
//!    seeded RNGs. Most coverage lives here.
//! 2. **API**: dispatch and score persistence.
//! 3. **CLI**: end-to-end runs of the binary in `tests/`.
//!
//! ## Module Overview
//!
//! - [`api`]: Facade
//! - [`commands`]: Word list operations
//! - [`session`]: Flashcard and spelling state machines
//! - [`speech`]: Speech cues, speakers, cue scheduling
//! - [`present`]: Rendering contract for clients
//! - [`store`]: Persistence
//! - [`model`]: Core types
//! - [`config`]: Settings
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod present;
pub mod session;
pub mod speech;
pub mod store;
