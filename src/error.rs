//! Error types for Fireside

use std::io;
use thiserror::Error;

/// Main error type for Fireside
#[derive(Error, Debug)]
pub enum FiresideError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("No story titled \"{0}\"")]
    StoryNotFound(String),

    #[error("No chapter titled \"{0}\"")]
    ChapterNotFound(String),

    #[error("Chapter \"{0}\" already exists in this story")]
    DuplicateChapter(String),

    #[error("Index {0} is out of bounds")]
    IndexOutOfBounds(usize),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Speech synthesis error: {0}")]
    Speech(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for Fireside operations
pub type Result<T> = std::result::Result<T, FiresideError>;

impl From<String> for FiresideError {
    fn from(s: String) -> Self {
        FiresideError::Other(s)
    }
}

impl From<&str> for FiresideError {
    fn from(s: &str) -> Self {
        FiresideError::Other(s.to_string())
    }
}
