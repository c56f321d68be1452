//! Error types for slidecast

use std::io;
use thiserror::Error;

/// Main error type for slidecast
#[derive(Error, Debug)]
pub enum SlidecastError {
    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Deck error: {0}")]
    Deck(String),

    #[error("Speech synthesis error: {0}")]
    Speech(String),

    #[error("Enhancement service error: {0}")]
    Enhance(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("INI parse error: {0}")]
    IniParse(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for slidecast operations
pub type Result<T> = std::result::Result<T, SlidecastError>;

impl From<String> for SlidecastError {
    fn from(s: String) -> Self {
        SlidecastError::Other(s)
    }
}

impl From<&str> for SlidecastError {
    fn from(s: &str) -> Self {
        SlidecastError::Other(s.to_string())
    }
}

impl From<serde_json::Error> for SlidecastError {
    fn from(e: serde_json::Error) -> Self {
        SlidecastError::Enhance(format!("JSON error: {}", e))
    }
}
