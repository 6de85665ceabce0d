//! Diagnostic types for pattern translation.
//!
//! Translation never fails: malformed input is recovered locally and the
//! problem is reported as a [`PatternError`] attached to the result.

use thiserror::Error;

/// A problem found while translating a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("extra sub-pattern separator at position {position} ignored")]
    ExtraSectionSeparator { position: usize },

    #[error("unterminated quoted literal starting at position {position}")]
    UnterminatedQuote { position: usize },

    #[error("no pattern supplied")]
    MissingPattern,
}

impl PatternError {
    /// Character position in the pattern the diagnostic refers to, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            PatternError::ExtraSectionSeparator { position }
            | PatternError::UnterminatedQuote { position } => Some(*position),
            PatternError::MissingPattern => None,
        }
    }
}
