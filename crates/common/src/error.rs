//! Common error types for Storyline components.

use thiserror::Error;

/// Common errors that can occur across Storyline components
#[derive(Error, Debug)]
pub enum StorylineError {
    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using `StorylineError`
pub type Result<T> = std::result::Result<T, StorylineError>;
