//! Error rendering using ariadne
//!
//! Syntax errors are shown with the formula and a label under each
//! problem. Other errors have no source location and render as one line.

use crate::{Diagnostic, Error, Severity};
use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use std::io::Write;

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use reckon::{Declaration, Engine, EngineOptions, render_error};
///
/// let engine = Engine::new(EngineOptions::default(), |_| {});
/// if let Err(e) = engine.compile(&Declaration::new("add", "a + ")) {
///     render_error(&e);
/// }
/// ```
pub fn render_error(error: &Error) {
    render_error_to_writer(error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    render_error_to_writer(error, writer, true)
}

/// Render an error to a String (useful for logs, web UIs, etc.)
pub fn render_error_to_string(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    match error {
        Error::Syntax(err) => {
            let name = err.declaring.as_deref().unwrap_or("<formula>");
            render_diagnostics(name, &err.formula, &err.diagnostics, writer, use_color)
        }
        other => writeln!(writer, "{}", other),
    }
}

fn render_diagnostics(
    name: &str,
    source: &str,
    diagnostics: &[Diagnostic],
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    for diag in diagnostics {
        let mut colors = ColorGenerator::new();
        colors.next(); // Skip the first color.

        let kind = match diag.severity {
            Severity::Error => ReportKind::Error,
            Severity::Warning => ReportKind::Warning,
            Severity::Info => ReportKind::Advice,
        };

        let mut report = Report::build(kind, (name, diag.span.0.clone()))
            .with_message(&diag.message)
            .with_config(ariadne::Config::default().with_color(use_color));

        if let Some(code) = &diag.code {
            report = report.with_code(code);
        }

        let color = colors.next();
        report = report.with_label(
            Label::new((name, diag.span.0.clone()))
                .with_message(&diag.message)
                .with_color(color),
        );

        if let Some(help) = &diag.help {
            report = report.with_help(help);
        }

        // Reborrow the writer so it can be used for the next diagnostic.
        report
            .finish()
            .write((name, Source::from(source)), &mut *writer)?;
    }

    Ok(())
}
