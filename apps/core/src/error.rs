use std::io;
use thiserror::Error;

/// Crate-wide error type. Scoring itself never fails; every variant here is
/// raised while configuring a scorer or loading dictionaries.
#[derive(Debug, Error)]
pub enum SentimentError {
    /// The exclusion filter value is not a string, sequence, pattern or callable.
    #[error("Invalid filter spec: {0}")]
    InvalidFilterSpec(String),

    /// A neutrality or exclusion pattern failed to compile.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Represents standard input/output errors while reading dictionaries or config files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents malformed dictionary or configuration payloads.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Represents configuration-related errors (e.g., bad environment variables).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for SentimentError {
    fn from(err: serde_json::Error) -> Self {
        SentimentError::Parse(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for SentimentError {
    fn from(err: validator::ValidationErrors) -> Self {
        SentimentError::Config(format!("Validation errors: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, SentimentError>;
