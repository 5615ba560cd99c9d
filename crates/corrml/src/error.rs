//! Error types for Correspondence Markup operations.
//!
//! This module provides the main error type [`CorrmlError`].

use std::io;

use thiserror::Error;

use corrml_parser::error::ParseError;

/// The main error type for Correspondence Markup operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text next to the error so that the
/// failure position can be shown in context.
#[derive(Debug, Error)]
pub enum CorrmlError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },
}

impl CorrmlError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
