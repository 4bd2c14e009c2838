use core::fmt;

use thiserror::Error;

use crate::api::{Diagnostic, Severity};
use crate::parser::{Rule, Span};

/// Failure to turn formula text into a parse tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// The tree walker met a node the grammar cannot produce.
    #[error("internal parser invariant violated: {0}")]
    Internal(String),
}

/// All syntax problems found in one formula.
///
/// `declaring` names the member (and owner, when known) that declared the
/// formula, e.g. `Basic.add`. The parser leaves it empty; compilation fills
/// it in through [`SyntaxError::with_declaring`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub declaring: Option<String>,
    pub formula: String,
    pub diagnostics: Vec<Diagnostic>,
}

impl SyntaxError {
    pub fn with_declaring(mut self, declaring: impl Into<String>) -> Self {
        self.declaring = Some(declaring.into());
        self
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "syntax error")?;
        if let Some(declaring) = &self.declaring {
            write!(f, " in '{}'", declaring)?;
        }
        write!(f, " for formula '{}'", self.formula)?;
        for diagnostic in &self.diagnostics {
            write!(
                f,
                "\n  {}:{}: {}",
                diagnostic.line, diagnostic.column, diagnostic.message
            )?;
            if let Some(code) = &diagnostic.code {
                write!(f, " [{}]", code)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for SyntaxError {}

/// Specific kinds of syntax problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    UnexpectedToken { expected: String, found: String },
    /// A literal that cannot be represented exactly as a decimal.
    InvalidNumber { text: String },
    MaxDepthExceeded { max_depth: usize },
}

impl ParseErrorKind {
    fn describe(&self) -> (String, &'static str, Option<String>) {
        match self {
            ParseErrorKind::UnexpectedToken { expected, found } => (
                format!("expected {}, found {}", expected, found),
                "P001",
                None,
            ),
            ParseErrorKind::InvalidNumber { text } => (
                format!("number literal '{}' cannot be represented exactly", text),
                "P003",
                Some("Literals are limited to 28 significant digits".to_string()),
            ),
            ParseErrorKind::MaxDepthExceeded { max_depth } => (
                format!(
                    "formula nesting depth exceeds maximum of {} levels",
                    max_depth
                ),
                "P004",
                Some("Reduce nesting or simplify the formula".to_string()),
            ),
        }
    }
}

/// Collects every syntax problem reported while parsing one formula.
///
/// This replaces pest's own error reporting: nothing is printed and the
/// parser never aborts through a panic.
#[derive(Debug, Default)]
pub struct SyntaxErrorListener {
    diagnostics: Vec<Diagnostic>,
}

impl SyntaxErrorListener {
    pub fn syntax_error(&mut self, source: &str, span: Span, kind: ParseErrorKind) {
        let (line, column) = span.line_col(source);
        let (message, code, help) = kind.describe();
        self.diagnostics.push(Diagnostic {
            severity: Severity::Error,
            message,
            span,
            line,
            column,
            help,
            code: Some(code.to_string()),
        });
    }

    /// Record a failure reported by the pest recognizer.
    pub fn pest_error(&mut self, source: &str, err: pest::error::Error<Rule>) {
        use pest::error::{ErrorVariant, InputLocation};

        let span = match err.location {
            InputLocation::Pos(pos) => Span(pos..pos),
            InputLocation::Span((start, end)) => Span(start..end),
        };
        let kind = match err.variant {
            ErrorVariant::ParsingError {
                positives,
                negatives: _,
            } => ParseErrorKind::UnexpectedToken {
                expected: format_expected_rules(&positives),
                found: describe_found(source, span.start()),
            },
            ErrorVariant::CustomError { message } => ParseErrorKind::UnexpectedToken {
                expected: message,
                found: describe_found(source, span.start()),
            },
        };
        self.syntax_error(source, span, kind);
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn into_error(self, source: &str) -> SyntaxError {
        SyntaxError {
            declaring: None,
            formula: source.to_string(),
            diagnostics: self.diagnostics,
        }
    }
}

/// Format expected rules in a human-readable way
fn format_expected_rules(rules: &[Rule]) -> String {
    let mut concepts = Vec::new();

    for rule in rules {
        let concept = match rule {
            Rule::number => "number",
            Rule::ident | Rule::call => "identifier",
            Rule::grouped => "parenthesized expression",
            Rule::add | Rule::sub | Rule::mul | Rule::div => "operator",
            Rule::EOI => "end of input",
            _ => "expression",
        };
        if !concepts.contains(&concept) {
            concepts.push(concept);
        }
    }

    match concepts.split_last() {
        None => "something else".to_string(),
        Some((only, [])) => only.to_string(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

fn describe_found(source: &str, pos: usize) -> String {
    match source.get(pos..).and_then(|rest| rest.chars().next()) {
        Some(c) => format!("'{}'", c),
        None => "end of input".to_string(),
    }
}
