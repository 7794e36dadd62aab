// Error types

use thiserror::Error;

/// Errors produced while generating random values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RandomError {
    /// The secure source could not fill the whole request. Covers short
    /// reads, OS entropy failures and I/O errors from reader sources.
    #[error("secure random source failed to supply {requested} bytes: {reason}")]
    RandomSource { requested: usize, reason: String },
}

impl RandomError {
    pub fn source_failure(requested: usize, reason: impl Into<String>) -> Self {
        RandomError::RandomSource { requested, reason: reason.into() }
    }

    /// Number of bytes the failed request asked for
    pub fn requested(&self) -> usize {
        match self {
            RandomError::RandomSource { requested, .. } => *requested,
        }
    }
}

pub type Result<T> = std::result::Result<T, RandomError>;
