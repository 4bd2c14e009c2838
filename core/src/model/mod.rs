//! Operand and operation model of a compiled formula.
//!
//! A [`FunctionModel`] is the immutable result of compiling one formula:
//! the distinct inputs it reads, the distinct literal constants it uses and
//! a post-order sequence of [`Operation`]s that one forward pass can
//! execute. Operations refer to their arguments through [`OperandRef`]s,
//! which are plain indices into those three lists.

mod function_model;
mod operand;
mod operation;

pub use function_model::{FunctionModel, ModelConfig, ModelError};
pub use operand::{ConstantId, ConstantOperand, InputId, InputOperand, Operand, OperandRef};
pub use operation::{Argument, Operation, OperationId, OperationNode};
