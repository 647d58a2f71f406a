//! Error types for impress-headlines
//!
//! Filtering itself never fails. Errors only come from the edges: reading
//! option files and parsing row input.

use thiserror::Error;

/// Result type alias for impress-headlines operations
pub type Result<T> = std::result::Result<T, HeadlineError>;

/// Main error type for impress-headlines operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeadlineError {
    /// Reading an options or input file failed
    #[error("IO error: {0}")]
    Io(String),

    /// Options file is not valid TOML or has unknown keys
    #[error("Invalid options file: {0}")]
    ConfigParse(String),

    /// Row input is not valid JSON
    #[error("Invalid row input: {0}")]
    InputParse(String),

    /// Similarity threshold outside 0..=100
    #[error("Similarity threshold {0} is outside 0..=100")]
    ThresholdOutOfRange(i64),
}
