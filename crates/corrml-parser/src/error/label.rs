//! Labeled source spans for diagnostic messages.

use crate::span::Span;

/// A labeled span in source code.
///
/// Labels attach a short message to the location where parsing stopped,
/// e.g.
///
/// ```text
/// error[E101]: unexpected end of input: expected `]`
///   |
/// 1 | [34 item
///   |         ^ unexpected end of input
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    span: Span,
    message: String,
}

impl Label {
    /// Create a new label.
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }

    /// Get the span this label applies to.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Get the label message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        let label = Label::new(Span::new(10..11), "unexpected character");

        assert_eq!(label.span().start(), 10);
        assert_eq!(label.span().end(), 11);
        assert_eq!(label.message(), "unexpected character");
    }
}
