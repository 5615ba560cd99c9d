//! # Correspondence Markup Parser
//!
//! Parser for the Correspondence Markup language. This crate turns source
//! text into the translation tree defined in [`corrml_core::ast`], resolving
//! item ids against their line's scope prefix along the way.
//!
//! ## Usage
//!
//! ```
//! # use corrml_parser::{compile_translations, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         ({
//!             english: English
//!             [
//!                 [A:[1 Hello], [2 world]]
//!             ]
//!         })
//!     "#;
//!
//!     let translations = compile_translations(source)?;
//!     assert_eq!(translations.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod error;
mod grammar;
mod span;

pub use grammar::{Node, Rule};
pub use span::Span;

use log::{debug, trace};

use corrml_core::ast::Translation;

use error::ParseError;

/// A successful match of one grammar rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed {
    node: Node,
    span: Span,
}

impl Parsed {
    /// The node built by the rule.
    pub fn node(&self) -> &Node {
        &self.node
    }

    /// The part of the source the rule matched, always starting at 0.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Consumes the match, returning its node.
    pub fn into_node(self) -> Node {
        self.node
    }
}

/// Match a single grammar rule at the start of `source`.
///
/// # Arguments
///
/// * `source` - The text to match.
/// * `rule` - The production to use as the root.
/// * `consume_all` - When `true`, the rule must match all of `source`;
///   otherwise a successful prefix match is enough.
///
/// # Errors
///
/// Returns a [`ParseError`] positioned at the furthest point any terminal
/// was tried, listing what would have been accepted there.
///
/// # Example
///
/// ```
/// # use corrml_parser::{parse, Node, Rule};
///
/// let parsed = parse("[A3 text]", Rule::Item, true).unwrap();
/// assert_eq!(parsed.span().len(), 9);
/// assert!(matches!(parsed.node(), Node::Item(item) if item.id() == "A3"));
///
/// // Only a prefix of the input is a number.
/// assert!(parse("12ab", Rule::Number, true).is_err());
/// assert!(parse("12ab", Rule::Number, false).is_ok());
/// ```
pub fn parse(source: &str, rule: Rule, consume_all: bool) -> Result<Parsed, ParseError> {
    trace!(rule:?, consume_all, len = source.len(); "Parsing rule");

    match grammar::parse_rule(source, rule, consume_all) {
        Ok((node, span)) => {
            trace!(rule:?, span:? = span; "Rule matched");
            Ok(Parsed { node, span })
        }
        Err(err) => {
            debug!(rule:?, position = err.position(), reason = err.reason(); "Rule failed");
            Err(err)
        }
    }
}

/// Parse a complete Correspondence Markup document.
///
/// The whole of `source` must match; every parenthesised group contributes
/// its translations, in order, to the returned list.
///
/// # Errors
///
/// Returns a [`ParseError`] if the document is malformed.
pub fn compile_translations(source: &str) -> Result<Vec<Translation>, ParseError> {
    let translations = grammar::parse_document(source).inspect_err(|err| {
        debug!(position = err.position(), reason = err.reason(); "Document failed to parse");
    })?;

    debug!(translations = translations.len(); "Document parsed");
    Ok(translations)
}
