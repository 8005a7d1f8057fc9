// crates/michelin-core/src/error.rs

//! Error types shared by the loader and the matcher constructors.
//!
//! Query-level failures (empty input, nothing above threshold) are not errors;
//! they are reported through [`crate::MatchOutcome`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A gazetteer row is missing a column the matcher depends on.
    #[error("Row {row} is missing required column '{column}'")]
    MissingColumn { row: usize, column: &'static str },

    #[error("Threshold must be within 0..=100, got {0}")]
    InvalidThreshold(u8),

    #[error("Unknown rating value: {0}")]
    InvalidRating(String),
}

pub type Result<T> = std::result::Result<T, MatchError>;
