//! Export functionality for Correspondence Markup documents.
//!
//! This module provides the [`Render`] trait that converts parsed nodes into
//! output markup. It is the final stage in the pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ parse (ids resolved per line)
//! Translations
//!     ↓ export (this module)
//! HTML
//! ```
//!
//! # Available Backends
//!
//! - [`html`] - HTML fragments consumed by the correspondence viewer
//!
//! Rendering is a read-only projection of the tree and cannot fail.

/// HTML export backend.
pub mod html;

/// A node that can be rendered to markup.
///
/// Nodes below the translation level take [`TextOptions`]; translations and
/// whole documents take [`RenderOptions`], which may assign different options
/// to each block.
///
/// [`TextOptions`]: corrml_core::options::TextOptions
/// [`RenderOptions`]: corrml_core::options::RenderOptions
pub trait Render {
    /// The options controlling how this node renders.
    type Options;

    /// Renders the node. Calling this twice with the same options yields the
    /// same output.
    fn render(&self, options: &Self::Options) -> String;
}

/// Renders `node` with `options`.
///
/// # Examples
///
/// ```
/// use corrml::{ast::NonItem, options::TextOptions, render};
///
/// let html = render(&NonItem::new("two\nlines"), &TextOptions::new().with_br(true));
/// assert_eq!(html, "two<br/>lines");
/// ```
pub fn render<N>(node: &N, options: &N::Options) -> String
where
    N: Render + ?Sized,
{
    node.render(options)
}
