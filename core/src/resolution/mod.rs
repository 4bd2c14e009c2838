//! Step-by-step rendering of an evaluation.
//!
//! A [`Resolution`] repeats the formula, lists the input values, and then
//! shows each operation with its arguments replaced by their values:
//!
//! ```text
//! a * (b - c)
//! a = 2, b = 5, c = 1
//! 5 - 1 = 4
//! 2 * 4 = 8
//! ```
//!
//! Text between arguments is kept as written, so a step reads like the
//! formula it came from. Literal constants are quoted with their original
//! text.

use core::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::evaluator::Evaluation;
use crate::model::{FunctionModel, OperandRef, Operation, OperationId};

/// One line of a resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// `None` for the single line of a formula without operations.
    pub id: Option<OperationId>,
    pub expression: String,
    pub value: Decimal,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.value)
    }
}

/// Textual derivation of a formula's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    formula: String,
    bindings: Vec<(String, Decimal)>,
    steps: Vec<Step>,
    value: Decimal,
}

/// The evaluation does not belong to the model it is rendered with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error("evaluation of '{evaluated}' cannot explain '{formula}'")]
    ForeignEvaluation { evaluated: String, formula: String },

    #[error("no value for {reference} in this evaluation")]
    MissingValue { reference: OperandRef },
}

impl Resolution {
    /// Render `evaluation`, which must come from evaluating `model`.
    pub(crate) fn new(
        model: &FunctionModel,
        evaluation: &Evaluation,
    ) -> Result<Self, ResolutionError> {
        if evaluation.formula() != model.formula()
            || evaluation.inputs().len() != model.inputs().len()
            || evaluation.results().len() != model.operations().len()
        {
            return Err(ResolutionError::ForeignEvaluation {
                evaluated: evaluation.formula().to_string(),
                formula: model.formula().to_string(),
            });
        }

        let bindings = model
            .inputs()
            .iter()
            .zip(evaluation.inputs())
            .map(|(input, value)| (input.name.clone(), *value))
            .collect();

        let steps = if model.operations().is_empty() {
            vec![Step {
                id: None,
                expression: render_operand(model, evaluation, model.root())?,
                value: evaluation.value(),
            }]
        } else {
            model
                .operations()
                .iter()
                .map(|operation| render_step(model, evaluation, operation))
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(Self {
            formula: model.formula().to_string(),
            bindings,
            steps,
            value: evaluation.value(),
        })
    }

    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// Input names and values in order of first appearance.
    pub fn bindings(&self) -> &[(String, Decimal)] {
        &self.bindings
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn value(&self) -> Decimal {
        self.value
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formula)?;
        if !self.bindings.is_empty() {
            writeln!(f)?;
            for (i, (name, value)) in self.bindings.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{} = {}", name, value)?;
            }
        }
        for step in &self.steps {
            write!(f, "\n{}", step)?;
        }
        Ok(())
    }
}

fn render_step(
    model: &FunctionModel,
    evaluation: &Evaluation,
    operation: &Operation,
) -> Result<Step, ResolutionError> {
    let base = operation.span.start();
    let mut expression = String::with_capacity(operation.fragment.len());
    let mut cursor = 0;

    for argument in operation.arguments() {
        let start = argument.span.start() - base;
        expression.push_str(&operation.fragment[cursor..start]);
        expression.push_str(&render_operand(model, evaluation, argument.source)?);
        cursor = argument.span.end() - base;
    }
    expression.push_str(&operation.fragment[cursor..]);

    let reference = OperandRef::Result(operation.id);
    let value = evaluation
        .resolve(model, reference)
        .ok_or(ResolutionError::MissingValue { reference })?;

    Ok(Step {
        id: Some(operation.id),
        expression,
        value,
    })
}

fn render_operand(
    model: &FunctionModel,
    evaluation: &Evaluation,
    reference: OperandRef,
) -> Result<String, ResolutionError> {
    match reference {
        OperandRef::Constant(id) => model
            .constants()
            .get(id.index())
            .map(|constant| constant.text.clone()),
        _ => evaluation
            .resolve(model, reference)
            .map(|value| value.to_string()),
    }
    .ok_or(ResolutionError::MissingValue { reference })
}
