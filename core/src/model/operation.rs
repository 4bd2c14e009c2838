use core::fmt;

use smallvec::{SmallVec, smallvec};

use crate::model::OperandRef;
use crate::numeric::NumberKind;
use crate::parser::{BinaryOp, Span};

/// Position of an operation in the evaluation sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OperationId(pub(crate) usize);

impl OperationId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// One argument of an operation together with the source text it came
/// from. For a parenthesized argument the span covers the parentheses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub source: OperandRef,
    pub span: Span,
    pub fragment: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationNode {
    Binary {
        left: Argument,
        op: BinaryOp,
        right: Argument,
    },
    Call {
        name: String,
        arguments: SmallVec<[Argument; 2]>,
    },
}

/// A single computation step: a binary operator or a function call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub id: OperationId,
    pub kind: NumberKind,
    pub span: Span,
    /// Source text of the whole sub-expression.
    pub fragment: String,
    pub node: OperationNode,
}

impl Operation {
    /// Operator symbol or function name.
    pub fn symbol(&self) -> &str {
        match &self.node {
            OperationNode::Binary { op, .. } => op.symbol(),
            OperationNode::Call { name, .. } => name,
        }
    }

    /// Arguments in source order.
    pub fn arguments(&self) -> SmallVec<[&Argument; 2]> {
        match &self.node {
            OperationNode::Binary { left, right, .. } => smallvec![left, right],
            OperationNode::Call { arguments, .. } => arguments.iter().collect(),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.node {
            OperationNode::Binary { left, op, right } => {
                write!(f, "{} = {} {} {}", self.id, left.source, op, right.source)
            }
            OperationNode::Call { name, arguments } => {
                write!(f, "{} = {}(", self.id, name)?;
                for (i, arg) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg.source)?;
                }
                write!(f, ")")
            }
        }
    }
}
