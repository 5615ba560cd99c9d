//! Reporting [`CorrmlError`]s through miette.
//!
//! The parser's [`Diagnostic`] has no miette dependency; [`DiagnosticAdapter`]
//! maps its code, help and labelled spans onto miette's trait for the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use corrml::CorrmlError;
use corrml_parser::{Span, error::Diagnostic};

/// A parse [`Diagnostic`] paired with the document it points into.
pub struct DiagnosticAdapter<'a> {
    diag: &'a Diagnostic,
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diag.message())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        // A parse stops at one place, so every label marks that place.
        Some(Box::new(labels.iter().map(|label| {
            LabeledSpan::new_primary_with_span(
                Some(label.message().to_string()),
                span_to_miette(label.span()),
            )
        })))
    }
}

/// A [`CorrmlError`] with no source location.
struct ErrorAdapter<'a>(&'a CorrmlError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            CorrmlError::Io(_) => "corrml::io",
            CorrmlError::Parse { .. } => return None,
        };
        Some(Box::new(code))
    }
}

/// Convert a parser [`Span`] to a miette [`SourceSpan`].
fn span_to_miette(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Wrap a [`CorrmlError`] for miette.
///
/// A failed parse stops at one position, so a [`CorrmlError::Parse`] yields
/// exactly one diagnostic, shown against its source. Other variants have no
/// location and are reported as plain errors.
pub fn to_reportable(err: &CorrmlError) -> Box<dyn MietteDiagnostic + '_> {
    match err {
        CorrmlError::Parse {
            err: parse_err,
            src,
        } => Box::new(DiagnosticAdapter::new(parse_err.diagnostic(), src)),
        CorrmlError::Io(_) => Box::new(ErrorAdapter(err)),
    }
}

#[cfg(test)]
mod tests {
    use corrml::DocumentBuilder;
    use corrml_parser::error::ErrorCode;

    use super::*;

    #[test]
    fn test_parse_error_reported_with_source() {
        let err = DocumentBuilder::default()
            .parse("({[[1 x]]")
            .expect_err("unclosed translation should fail");

        let reportable = to_reportable(&err);

        assert!(reportable.to_string().starts_with("unexpected end of input"));
        assert_eq!(
            reportable.code().map(|code| code.to_string()),
            Some(ErrorCode::E101.to_string())
        );
        assert!(reportable.help().is_some());
        assert!(reportable.source_code().is_some());

        let labels: Vec<_> = reportable.labels().expect("labels present").collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 9);
    }

    #[test]
    fn test_parse_error_renders_as_one_report() {
        let err = DocumentBuilder::default()
            .parse("({[[1 x]]]})")
            .expect_err("stray bracket should fail");

        let mut report = String::new();
        miette::GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor())
            .render_report(&mut report, to_reportable(&err).as_ref())
            .expect("report renders");

        assert_eq!(report.matches(&ErrorCode::E100.to_string()).count(), 1);
        assert!(report.contains("unexpected character `]`"));
    }

    #[test]
    fn test_labels_map_to_source_spans() {
        let diag = Diagnostic::error("unexpected character `]`")
            .with_code(ErrorCode::E100)
            .with_label(Span::new(4..5), "unexpected character");

        let adapter = DiagnosticAdapter::new(&diag, "[[1]]]");

        let labels: Vec<_> = adapter.labels().expect("labels present").collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].label(), Some("unexpected character"));
        assert_eq!(labels[0].offset(), 4);
        assert_eq!(labels[0].len(), 1);
        assert!(labels[0].primary());
    }

    #[test]
    fn test_diagnostic_without_labels() {
        let diag = Diagnostic::error("no location");
        let adapter = DiagnosticAdapter::new(&diag, "");

        assert!(adapter.labels().is_none());
    }

    #[test]
    fn test_io_error_has_no_source() {
        let err = CorrmlError::Io(std::io::Error::other("disk on fire"));

        let reportable = to_reportable(&err);

        assert_eq!(reportable.to_string(), "I/O error: disk on fire");
        assert_eq!(
            reportable.code().map(|code| code.to_string()),
            Some("corrml::io".to_string())
        );
        assert!(reportable.source_code().is_none());
    }
}
