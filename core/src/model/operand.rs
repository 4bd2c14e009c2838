use core::fmt;
use core::hash::{Hash, Hasher};

use rust_decimal::Decimal;

use crate::model::OperationId;
use crate::numeric::NumberKind;

/// A named value supplied by the caller at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputOperand {
    pub name: String,
    pub kind: NumberKind,
}

/// A numeric literal written in the formula.
///
/// The literal text is kept verbatim so that traces quote it exactly as
/// written. Two constants are the same constant when their text and kind
/// match; `2.5` and `2.50` are distinct even though their values compare
/// equal.
#[derive(Debug, Clone)]
pub struct ConstantOperand {
    pub text: String,
    pub value: Decimal,
    pub kind: NumberKind,
}

impl ConstantOperand {
    pub fn new(text: impl Into<String>, value: Decimal) -> Self {
        let text = text.into();
        let kind = NumberKind::of_literal(&text);
        Self { text, value, kind }
    }
}

impl PartialEq for ConstantOperand {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.kind == other.kind
    }
}

impl Eq for ConstantOperand {}

impl Hash for ConstantOperand {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
        self.kind.hash(state);
    }
}

/// A leaf of the formula: either an input or a constant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operand {
    Input(InputOperand),
    Constant(ConstantOperand),
}

impl Operand {
    pub fn kind(&self) -> NumberKind {
        match self {
            Operand::Input(input) => input.kind,
            Operand::Constant(constant) => constant.kind,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Input(input) => f.write_str(&input.name),
            Operand::Constant(constant) => f.write_str(&constant.text),
        }
    }
}

/// Position of an input in [`FunctionModel::inputs`](crate::model::FunctionModel::inputs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InputId(pub(crate) usize);

/// Position of a constant in [`FunctionModel::constants`](crate::model::FunctionModel::constants).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstantId(pub(crate) usize);

impl InputId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl ConstantId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for InputId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "i{}", self.0)
    }
}

impl fmt::Display for ConstantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "k{}", self.0)
    }
}

/// Where an operation reads one of its arguments from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandRef {
    Input(InputId),
    Constant(ConstantId),
    /// The result of an earlier operation.
    Result(OperationId),
}

impl fmt::Display for OperandRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandRef::Input(id) => id.fmt(f),
            OperandRef::Constant(id) => id.fmt(f),
            OperandRef::Result(id) => id.fmt(f),
        }
    }
}
