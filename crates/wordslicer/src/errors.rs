//! # Error Types

use crate::regex::ErrorWrapper;

/// Errors from wordslicer operations.
#[derive(Debug, thiserror::Error)]
pub enum WordslicerError {
    /// Two vocabulary tokens share one id; the mapping is not a bijection.
    #[error("vocab conflict: id {id} is assigned to both {first:?} and {second:?}")]
    VocabConflict {
        /// The shared id.
        id: u64,

        /// The lexicographically smaller of the conflicting tokens.
        first: String,

        /// The lexicographically larger of the conflicting tokens.
        second: String,
    },

    /// A span of the input text has no entry in the vocabulary.
    #[error("unknown token: {0:?}")]
    UnknownToken(String),

    /// A token id has no entry in the reverse vocabulary.
    #[error("unknown token id: {0}")]
    UnknownId(u64),

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Token value out of range for the target type.
    #[error("token out of range")]
    TokenOutOfRange,

    /// The delimiter pattern failed to compile or to run.
    #[error("pattern error: {0}")]
    Pattern(#[from] ErrorWrapper),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error (base64, integer, etc.)
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for wordslicer operations.
pub type WSResult<T> = core::result::Result<T, WordslicerError>;
