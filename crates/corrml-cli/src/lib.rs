//! CLI logic for the Correspondence Markup compiler.
//!
//! This module contains the core CLI logic: load configuration, compile the
//! input document and write the HTML output.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use corrml::{CorrmlError, DocumentBuilder};

/// Run the Correspondence Markup CLI application
///
/// This function processes the input file through the parse and render
/// pipeline and writes the resulting HTML to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CorrmlError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
pub fn run(args: &Args) -> Result<(), CorrmlError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing document"
    );

    // Load configuration, then let command-line flags override it
    let app_config = config::load_config(args.config.as_ref())?;
    let app_config = config::apply_overrides(app_config, args);

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // Process document using DocumentBuilder API
    let builder = DocumentBuilder::new(app_config);
    let translations = builder.parse(&source)?;
    let html = builder.render_html(&translations);

    // Write output file
    fs::write(&args.output, html)?;

    info!(output_file = args.output; "HTML exported successfully");

    Ok(())
}
