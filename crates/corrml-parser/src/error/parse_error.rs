//! The ParseError type returned when the grammar cannot match.

use std::fmt;

use crate::error::Diagnostic;

/// Error type for a failed parse.
///
/// Carries the furthest byte position the grammar reached, a human-readable
/// expectation (what the grammar would have accepted there), and the
/// [`Diagnostic`] used for rich reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    position: usize,
    reason: String,
    diagnostic: Diagnostic,
}

impl ParseError {
    /// Create a new parse error.
    pub fn new(position: usize, reason: impl Into<String>, diagnostic: Diagnostic) -> Self {
        Self {
            position,
            reason: reason.into(),
            diagnostic,
        }
    }

    /// Byte offset of the furthest point the grammar reached.
    pub fn position(&self) -> usize {
        self.position
    }

    /// What was expected at [`position`](Self::position), e.g. "expected `]`".
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Get the diagnostic describing this error.
    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse error at position {}: {}", self.position, self.reason)
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.diagnostic)
    }
}
