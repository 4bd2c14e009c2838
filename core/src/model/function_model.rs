use rust_decimal::Decimal;
use static_assertions::assert_impl_all;
use thiserror::Error;

use crate::builder::BuiltTree;
use crate::evaluator::{Bindings, EvalError};
use crate::model::{ConstantOperand, InputOperand, OperandRef, Operation, OperationId};
use crate::numeric::{NumberKind, NumericContext};

/// Everything needed to assemble a [`FunctionModel`], validated in one place
/// by [`FunctionModel::new`].
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub name: String,
    pub declaring: Option<String>,
    pub kind: NumberKind,
    pub formula: String,
    pub context: NumericContext,
    pub tree: BuiltTree,
}

/// A model whose operations cannot be executed in one forward pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("operation at position {position} has id {id}")]
    MisplacedOperation { position: usize, id: OperationId },

    #[error("operation {operation} reads {reference}, which is not yet available")]
    ForwardReference {
        operation: OperationId,
        reference: OperandRef,
    },

    #[error("root {root} does not match the operation sequence")]
    InvalidRoot { root: OperandRef },
}

/// A compiled formula.
///
/// Immutable once built and safe to share between threads; evaluating it
/// never changes it.
#[derive(Debug, Clone)]
pub struct FunctionModel {
    name: String,
    declaring: Option<String>,
    kind: NumberKind,
    formula: String,
    context: NumericContext,
    inputs: Vec<InputOperand>,
    constants: Vec<ConstantOperand>,
    operations: Vec<Operation>,
    root: OperandRef,
}

assert_impl_all!(FunctionModel: Send, Sync);

impl FunctionModel {
    pub fn new(config: ModelConfig) -> Result<Self, ModelError> {
        let ModelConfig {
            name,
            declaring,
            kind,
            formula,
            context,
            tree,
        } = config;

        let model = Self {
            name,
            declaring,
            kind,
            formula,
            context,
            inputs: tree.inputs,
            constants: tree.constants,
            operations: tree.operations,
            root: tree.root,
        };
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<(), ModelError> {
        for (position, operation) in self.operations.iter().enumerate() {
            if operation.id.index() != position {
                return Err(ModelError::MisplacedOperation {
                    position,
                    id: operation.id,
                });
            }
            for argument in operation.arguments() {
                if !self.is_available(argument.source, position) {
                    return Err(ModelError::ForwardReference {
                        operation: operation.id,
                        reference: argument.source,
                    });
                }
            }
        }

        let root_ok = match self.operations.last() {
            Some(last) => self.root == OperandRef::Result(last.id),
            None => self.is_available(self.root, 0),
        };
        if !root_ok {
            return Err(ModelError::InvalidRoot { root: self.root });
        }
        Ok(())
    }

    // Whether `reference` can be read by the operation at `position`.
    fn is_available(&self, reference: OperandRef, position: usize) -> bool {
        match reference {
            OperandRef::Input(id) => id.index() < self.inputs.len(),
            OperandRef::Constant(id) => id.index() < self.constants.len(),
            OperandRef::Result(id) => id.index() < position,
        }
    }

    /// Declared member name, e.g. `add`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Owner the formula was declared in, if any.
    pub fn declaring(&self) -> Option<&str> {
        self.declaring.as_deref()
    }

    /// `Owner.member`, or just the member name when there is no owner.
    pub fn qualified_name(&self) -> String {
        match &self.declaring {
            Some(owner) => format!("{}.{}", owner, self.name),
            None => self.name.clone(),
        }
    }

    pub fn kind(&self) -> NumberKind {
        self.kind
    }

    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn context(&self) -> NumericContext {
        self.context
    }

    /// Distinct inputs in order of first appearance.
    pub fn inputs(&self) -> &[InputOperand] {
        &self.inputs
    }

    /// Distinct constants in order of first appearance.
    pub fn constants(&self) -> &[ConstantOperand] {
        &self.constants
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// The final operation, or the sole operand of a formula without
    /// operators.
    pub fn root(&self) -> OperandRef {
        self.root
    }

    pub fn input_names(&self) -> impl Iterator<Item = &str> {
        self.inputs.iter().map(|input| input.name.as_str())
    }

    /// Bind `values` to the inputs in order of first appearance.
    pub fn bind_positional(&self, values: &[Decimal]) -> Result<Bindings, EvalError> {
        if values.len() != self.inputs.len() {
            return Err(EvalError::InvalidArgument(format!(
                "'{}' expects {} input(s) ({}), got {}",
                self.qualified_name(),
                self.inputs.len(),
                self.input_names().collect::<Vec<_>>().join(", "),
                values.len()
            )));
        }
        Ok(self
            .input_names()
            .zip(values.iter().copied())
            .collect::<Bindings>())
    }
}
