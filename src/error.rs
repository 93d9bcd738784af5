//! Error handling for FASTA processing operations.
//!
//! Provides error types with context for input handling, header parsing,
//! and DataFrame conversion failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FastaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Unsupported input: {reason}")]
    UnsupportedInput { reason: String },

    #[error("Invalid FASTA header: {reason}")]
    InvalidHeader { reason: String },

    #[error("Unexpected header element: unknown tag '{tag}'")]
    UnexpectedElement { tag: String },

    #[error("Missing required column: {name}")]
    MissingColumn { name: String },

    #[error("Datatype normalization failed: {reason}")]
    Normalization { reason: String },
}

impl FastaError {
    /// Create an unsupported input error
    pub fn unsupported_input(reason: impl Into<String>) -> Self {
        Self::UnsupportedInput {
            reason: reason.into(),
        }
    }

    /// Create an invalid header error
    pub fn invalid_header(reason: impl Into<String>) -> Self {
        Self::InvalidHeader {
            reason: reason.into(),
        }
    }

    /// Create an unexpected element error for an unknown header tag
    pub fn unexpected_element(tag: impl Into<String>) -> Self {
        Self::UnexpectedElement { tag: tag.into() }
    }

    /// Create a missing column error
    pub fn missing_column(name: impl Into<String>) -> Self {
        Self::MissingColumn { name: name.into() }
    }

    /// Create a normalization error
    pub fn normalization(reason: impl Into<String>) -> Self {
        Self::Normalization {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FastaError>;
