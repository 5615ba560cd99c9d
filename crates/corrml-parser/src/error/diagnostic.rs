//! The core diagnostic type for the Correspondence Markup error system.
//!
//! A [`Diagnostic`] represents a single error with an optional error code,
//! labeled source spans, and help text.

use std::fmt;

use crate::{
    error::{error_code::ErrorCode, label::Label},
    span::Span,
};

/// A rich diagnostic message with source location information.
///
/// # Example
///
/// ```text
/// error[E100]: unexpected character `]`: expected one of `[`, text
///   |
/// 1 | {[[1 x]]]}
///   |         ^ unexpected character
///   |
///   = help: check that every `[`, `{` and `(` is closed
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use corrml_parser::error::{Diagnostic, ErrorCode};
    /// # use corrml_parser::Span;
    ///
    /// let diag = Diagnostic::error("unexpected end of input: expected `]`")
    ///     .with_code(ErrorCode::E101)
    ///     .with_label(Span::new(8..8), "unexpected end of input");
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }

    /// Get the error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::new(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E100]: message" or "error: message"
        write!(f, "error")?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::error("test error");

        assert_eq!(diag.message(), "test error");
        assert!(diag.code().is_none());
        assert!(diag.labels().is_empty());
        assert!(diag.help().is_none());
    }

    #[test]
    fn test_diagnostic_builder_chain() {
        let diag = Diagnostic::error("unexpected character `]`")
            .with_code(ErrorCode::E100)
            .with_label(Span::new(4..5), "unexpected character")
            .with_help("escape literal brackets");

        assert_eq!(diag.code(), Some(ErrorCode::E100));
        assert_eq!(diag.labels().len(), 1);
        assert_eq!(diag.labels()[0].span(), Span::new(4..5));
        assert_eq!(diag.help(), Some("escape literal brackets"));
    }

    #[test]
    fn test_diagnostic_display_with_code() {
        let diag = Diagnostic::error("unexpected end of input").with_code(ErrorCode::E101);

        assert_eq!(diag.to_string(), "error[E101]: unexpected end of input");
    }

    #[test]
    fn test_diagnostic_display_without_code() {
        let diag = Diagnostic::error("something went wrong");

        assert_eq!(diag.to_string(), "error: something went wrong");
    }
}
