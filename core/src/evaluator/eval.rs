//! Core evaluation logic.

use rust_decimal::Decimal;
use smallvec::SmallVec;

use crate::catalog::FunctionCatalog;
use crate::evaluator::operators::apply_binary;
use crate::evaluator::{Bindings, EvalError};
use crate::model::{FunctionModel, OperandRef, Operation, OperationNode};

/// Evaluator for one model and one set of input values.
pub struct Evaluator<'m> {
    model: &'m FunctionModel,
    catalog: &'m FunctionCatalog,
    inputs: Vec<Decimal>,
    results: Vec<Decimal>,
}

impl<'m> Evaluator<'m> {
    /// Resolve every input of `model` from `bindings`.
    ///
    /// Bindings for names the formula does not use are ignored.
    pub fn new(
        model: &'m FunctionModel,
        catalog: &'m FunctionCatalog,
        bindings: &Bindings,
    ) -> Result<Self, EvalError> {
        let inputs = model
            .inputs()
            .iter()
            .map(|input| {
                bindings.get(&input.name).ok_or_else(|| {
                    EvalError::InvalidArgument(format!(
                        "no value bound for input '{}' of '{}'",
                        input.name,
                        model.qualified_name()
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            model,
            catalog,
            inputs,
            results: Vec::with_capacity(model.operations().len()),
        })
    }

    pub fn run(mut self) -> Result<Evaluation, EvalError> {
        let context = self.model.context();
        tracing::debug!(
            formula = self.model.formula(),
            %context,
            "evaluating formula"
        );

        for operation in self.model.operations() {
            let value = self.step(operation)?;
            tracing::trace!(
                operation = %operation.id,
                fragment = %operation.fragment,
                %value,
                "evaluated step"
            );
            self.results.push(value);
        }

        let value = self.value(self.model.root());
        Ok(Evaluation {
            formula: self.model.formula().to_string(),
            inputs: self.inputs,
            results: self.results,
            value,
        })
    }

    fn step(&self, operation: &Operation) -> Result<Decimal, EvalError> {
        let context = self.model.context();
        match &operation.node {
            OperationNode::Binary { left, op, right } => Ok(apply_binary(
                *op,
                self.value(left.source),
                self.value(right.source),
                &context,
            )?),
            OperationNode::Call { name, arguments } => {
                let function =
                    self.catalog
                        .get(name)
                        .ok_or_else(|| EvalError::UnknownFunction {
                            name: name.clone(),
                            catalog: self.catalog.id().to_string(),
                        })?;
                let args: SmallVec<[Option<Decimal>; 2]> = arguments
                    .iter()
                    .map(|arg| Some(self.value(arg.source)))
                    .collect();
                let result = function
                    .perform(&context, &args)
                    .map_err(|err| EvalError::from_function(name, err))?;
                Ok(context.round(result)?)
            }
        }
    }

    // Operations only read results emitted before them, which the model
    // checks when it is built.
    fn value(&self, reference: OperandRef) -> Decimal {
        match reference {
            OperandRef::Input(id) => self.inputs[id.index()],
            OperandRef::Constant(id) => self.model.constants()[id.index()].value,
            OperandRef::Result(id) => self.results[id.index()],
        }
    }
}

/// Values computed by one evaluation: every input, every step result and
/// the final value.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    formula: String,
    inputs: Vec<Decimal>,
    results: Vec<Decimal>,
    value: Decimal,
}

impl Evaluation {
    /// Formula of the model that produced this evaluation.
    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Input values in the order of [`FunctionModel::inputs`].
    pub fn inputs(&self) -> &[Decimal] {
        &self.inputs
    }

    /// Step results in the order of [`FunctionModel::operations`].
    pub fn results(&self) -> &[Decimal] {
        &self.results
    }

    /// Value of `reference` in this evaluation of `model`.
    pub fn resolve(&self, model: &FunctionModel, reference: OperandRef) -> Option<Decimal> {
        match reference {
            OperandRef::Input(id) => self.inputs.get(id.index()).copied(),
            OperandRef::Constant(id) => model.constants().get(id.index()).map(|c| c.value),
            OperandRef::Result(id) => self.results.get(id.index()).copied(),
        }
    }
}
