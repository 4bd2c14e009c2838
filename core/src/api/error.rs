//! Public error types for the reckon API.
//!
//! Module-level errors (syntax, evaluation, catalog, context) are converted
//! into [`Error`] at the API boundary.

use core::fmt;

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::evaluator::EvalError;
use crate::model::ModelError;
use crate::numeric::{ArithmeticError, ContextError};
use crate::parser::{ParseError, Span, SyntaxError};
use crate::resolution::ResolutionError;

/// Public error type for all reckon operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The formula text is not valid. Only this formula fails to compile.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("evaluation failed: {0}")]
    Evaluation(#[from] EvalError),

    #[error("invalid numeric context: {0}")]
    InvalidContext(#[from] ContextError),

    #[error("invalid declaration: {0}")]
    InvalidDeclaration(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// An internal invariant was violated. This is a bug.
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Diagnostics of a syntax error; empty for every other error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            Error::Syntax(err) => &err.diagnostics,
            _ => &[],
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Syntax(err) => Error::Syntax(err),
            ParseError::Internal(message) => Error::Internal(message),
        }
    }
}

impl From<ArithmeticError> for Error {
    fn from(err: ArithmeticError) -> Self {
        Error::Evaluation(EvalError::Arithmetic(err))
    }
}

impl From<ModelError> for Error {
    fn from(err: ModelError) -> Self {
        tracing::error!(%err, "compiled model is inconsistent");
        Error::Internal(err.to_string())
    }
}

impl From<ResolutionError> for Error {
    fn from(err: ResolutionError) -> Self {
        tracing::error!(%err, "evaluation does not match its model");
        Error::Internal(err.to_string())
    }
}

/// A diagnostic message (error, warning, or info) with source location.
///
/// Maps cleanly to LSP diagnostics for IDE integration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,

    pub message: String,

    /// Byte range in the formula.
    pub span: Span,

    /// 1-based line of the span start.
    pub line: usize,

    /// 1-based column of the span start, in characters.
    pub column: usize,

    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,

    /// Optional error code (e.g., "P001") for documentation lookup.
    pub code: Option<String>,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}
