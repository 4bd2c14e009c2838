//! Turns a parse tree into the operand/operation model.
//!
//! The walk is post-order: both sides of a binary operator, or all call
//! arguments, are emitted before the operation that reads them. Operands
//! are deduplicated structurally, so every distinct input name and every
//! distinct literal appears once no matter how often it is written.

use hashbrown::HashMap;

use crate::model::{
    Argument, ConstantId, ConstantOperand, InputId, InputOperand, Operand, OperandRef, Operation,
    OperationId, OperationNode,
};
use crate::numeric::NumberKind;
use crate::parser::{Node, NodeKind, ParseTree};

/// Output of [`TreeBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltTree {
    pub inputs: Vec<InputOperand>,
    pub constants: Vec<ConstantOperand>,
    pub operations: Vec<Operation>,
    pub root: OperandRef,
}

pub struct TreeBuilder {
    kind: NumberKind,
    operands: HashMap<Operand, OperandRef>,
    inputs: Vec<InputOperand>,
    constants: Vec<ConstantOperand>,
    operations: Vec<Operation>,
}

impl TreeBuilder {
    /// `kind` is the declared result kind; inputs and operations carry it.
    pub fn new(kind: NumberKind) -> Self {
        Self {
            kind,
            operands: HashMap::new(),
            inputs: Vec::new(),
            constants: Vec::new(),
            operations: Vec::new(),
        }
    }

    pub fn build(mut self, tree: &ParseTree) -> BuiltTree {
        let root = self.visit(tree, tree.root());
        tracing::trace!(
            inputs = self.inputs.len(),
            constants = self.constants.len(),
            operations = self.operations.len(),
            "built formula tree"
        );
        BuiltTree {
            inputs: self.inputs,
            constants: self.constants,
            operations: self.operations,
            root,
        }
    }

    fn visit(&mut self, tree: &ParseTree, node: &Node) -> OperandRef {
        match &node.kind {
            NodeKind::Grouped(inner) => self.visit(tree, inner),
            NodeKind::Ident(name) => self.operand(Operand::Input(InputOperand {
                name: name.clone(),
                kind: self.kind,
            })),
            NodeKind::Number { text, value } => {
                self.operand(Operand::Constant(ConstantOperand::new(text.as_str(), *value)))
            }
            NodeKind::Binary { op, left, right } => {
                let left = self.argument(tree, left);
                let right = self.argument(tree, right);
                self.emit(
                    tree,
                    node,
                    OperationNode::Binary {
                        left,
                        op: *op,
                        right,
                    },
                )
            }
            NodeKind::Call { name, args } => {
                let arguments = args.iter().map(|arg| self.argument(tree, arg)).collect();
                self.emit(
                    tree,
                    node,
                    OperationNode::Call {
                        name: name.clone(),
                        arguments,
                    },
                )
            }
        }
    }

    fn argument(&mut self, tree: &ParseTree, node: &Node) -> Argument {
        Argument {
            source: self.visit(tree, node),
            span: node.span.clone(),
            fragment: tree.fragment(node).to_string(),
        }
    }

    fn operand(&mut self, operand: Operand) -> OperandRef {
        if let Some(existing) = self.operands.get(&operand) {
            return *existing;
        }
        let reference = match &operand {
            Operand::Input(input) => {
                self.inputs.push(input.clone());
                OperandRef::Input(InputId(self.inputs.len() - 1))
            }
            Operand::Constant(constant) => {
                self.constants.push(constant.clone());
                OperandRef::Constant(ConstantId(self.constants.len() - 1))
            }
        };
        self.operands.insert(operand, reference);
        reference
    }

    fn emit(&mut self, tree: &ParseTree, node: &Node, operation: OperationNode) -> OperandRef {
        let id = OperationId(self.operations.len());
        self.operations.push(Operation {
            id,
            kind: self.kind,
            span: node.span.clone(),
            fragment: tree.fragment(node).to_string(),
            node: operation,
        });
        OperandRef::Result(id)
    }
}
