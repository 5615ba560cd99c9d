//! Correspondence Markup - aligned translations rendered to HTML.
//!
//! A Correspondence Markup document describes the same content in several
//! "languages" (natural languages, or notations such as code and its
//! pseudo-code) and marks which items correspond to each other. This crate
//! parses such documents and renders them to HTML for the correspondence
//! viewer.

pub mod config;
pub mod export;

mod error;

pub use corrml_core::{ast, identifier, options};
pub use corrml_parser::compile_translations;

pub use error::CorrmlError;
pub use export::{Render, render};

use log::{debug, info, trace};

use ast::Translation;
use config::AppConfig;

/// Builder for parsing and rendering Correspondence Markup documents.
///
/// # Examples
///
/// ```rust
/// use corrml::{DocumentBuilder, config::AppConfig};
///
/// let source = "({ english\n[[A: [1 Hello]]] })";
///
/// let builder = DocumentBuilder::new(AppConfig::default());
///
/// // Parse source to translations
/// let translations = builder.parse(source)
///     .expect("Failed to parse");
///
/// // Render translations to HTML
/// let html = builder.render_html(&translations);
/// assert!(html.contains("<span data-id=\"A1\">Hello</span>"));
///
/// // Or use default config
/// let builder = DocumentBuilder::default();
/// ```
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    config: AppConfig,
}

impl DocumentBuilder {
    /// Create a new document builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration, including render options
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used by this builder.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse source code into translations.
    ///
    /// Every parenthesised group of the document contributes its translations,
    /// in order, to the result. Item ids are fully resolved.
    ///
    /// # Errors
    ///
    /// Returns `CorrmlError::Parse` if the source is malformed.
    pub fn parse(&self, source: &str) -> Result<Vec<Translation>, CorrmlError> {
        info!("Parsing document");

        let translations = compile_translations(source)
            .map_err(|err| CorrmlError::new_parse_error(err, source))?;

        debug!(translations = translations.len(); "Document parsed successfully");
        trace!(translations:?; "Parsed translations");

        Ok(translations)
    }

    /// Render translations to an HTML fragment.
    ///
    /// The configured render options are applied to each translation; one
    /// blank line separates consecutive translations.
    pub fn render_html(&self, translations: &[Translation]) -> String {
        info!(translations = translations.len(); "Rendering HTML");

        let html = render(translations, self.config.render());

        debug!(bytes = html.len(); "HTML rendered successfully");
        html
    }
}
