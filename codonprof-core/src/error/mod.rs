//! Core error types for codonprof

use thiserror::Error;

/// Main error type for codon profile operations
#[derive(Error, Debug)]
pub enum CodonError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown codon: {0}")]
    UnknownCodon(String),

    #[error("Stop codon has no amino acid: {0}")]
    UnexpectedStop(String),

    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias for codon profile operations
pub type CodonResult<T> = Result<T, CodonError>;

impl CodonError {
    /// Build an `UnknownCodon` from raw triplet bytes, keeping non-UTF-8 input readable
    pub fn unknown_codon(raw: &[u8]) -> Self {
        CodonError::UnknownCodon(String::from_utf8_lossy(raw).into_owned())
    }
}

impl From<anyhow::Error> for CodonError {
    fn from(err: anyhow::Error) -> Self {
        CodonError::Other(err.to_string())
    }
}
