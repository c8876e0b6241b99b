use thiserror::Error;

/// Custom error types for casper-highlight
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HighlightError {
    #[error("Invalid input: field '{field}' is missing or null")]
    InvalidInput { field: String },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<toml::de::Error> for HighlightError {
    fn from(err: toml::de::Error) -> Self {
        HighlightError::Config(err.message().to_string())
    }
}

pub type Result<T> = std::result::Result<T, HighlightError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
