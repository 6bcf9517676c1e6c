use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordlyError {
    /// Rejected input on save: empty name or no words left after normalization.
    #[error("{0}")]
    Validation(String),

    /// Malformed import document (JSON or CSV).
    #[error("{0}")]
    Parse(String),

    /// Remote CSV fetch failed. Never retried.
    #[error("{0}")]
    Network(String),

    /// A session operation was called in a state that does not accept it.
    #[error("Invalid session state: {0}")]
    InvalidState(String),

    #[error("Week not found: {0}")]
    WeekNotFound(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, WordlyError>;
