//! Error and diagnostic system for the Correspondence Markup parser.
//!
//! This module provides:
//! - Error codes for documentation and searchability
//! - Labeled spans pointing at the failure in the source
//! - The [`ParseError`] returned by every parse entry point
//!
//! # Overview
//!
//! A failed parse is described by a single [`Diagnostic`]: the grammar does
//! not recover from errors, so there is exactly one failure point, the
//! furthest position any grammar rule reached. [`ParseError`] pairs that
//! diagnostic with the position and the expectation text.
//!
//! # Example
//!
//! ```
//! # use corrml_parser::error::{Diagnostic, ErrorCode};
//! # use corrml_parser::Span;
//!
//! let diag = Diagnostic::error("unexpected character `]`: expected `[`")
//!     .with_code(ErrorCode::E100)
//!     .with_label(Span::new(4..5), "unexpected character")
//!     .with_help("escape literal brackets as `\\[` and `\\]`");
//! ```

mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
