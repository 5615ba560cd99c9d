//! Error codes for the Correspondence Markup diagnostic system.
//!
//! All codes belong to the parser (`E1xx`); there is no separate validation
//! phase because the grammar is the only well-formedness check.

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Unexpected character.
    ///
    /// No grammar rule could continue at this character.
    E100,

    /// Unexpected end of input.
    ///
    /// The input ended before a construct was complete, typically an
    /// unclosed `[`, `{` or `(`.
    E101,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "unexpected character",
            ErrorCode::E101 => "unexpected end of input",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
