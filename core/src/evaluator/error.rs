//! Evaluation errors.

use thiserror::Error;

use crate::catalog::FunctionError;
use crate::numeric::ArithmeticError;

/// Failure to evaluate a compiled formula.
///
/// Evaluation never modifies the model, so after any of these the same
/// model can be evaluated again with other inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Missing input values or arguments a function refused.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("unknown function '{name}' (catalog '{catalog}')")]
    UnknownFunction { name: String, catalog: String },

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

impl EvalError {
    /// Attribute a function failure to the function `name`.
    pub fn from_function(name: &str, err: FunctionError) -> Self {
        match err {
            FunctionError::Arithmetic(err) => EvalError::Arithmetic(err),
            other => EvalError::InvalidArgument(format!("{}: {}", name, other)),
        }
    }
}
