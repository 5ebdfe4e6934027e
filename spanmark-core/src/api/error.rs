//! Error types for the API

use thiserror::Error;

use crate::domain::lexicon::LexiconError;

/// Error type for API operations
///
/// Normal text processing never fails; errors only arise from configuration
/// supplied at construction time.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid language specification
    #[error("Invalid language: {0}")]
    InvalidLanguage(String),

    /// Lexicon loading or compilation error
    #[error("Lexicon error: {0}")]
    Lexicon(#[from] LexiconError),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
