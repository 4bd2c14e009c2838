use core::fmt;

use rust_decimal::Decimal;

use crate::parser::{BinaryOp, Span};

/// Concrete parse tree of one formula.
///
/// Unlike the compiled model, the tree keeps parenthesized groups so that
/// every sub-expression can be mapped back to its exact source text.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseTree {
    source: String,
    root: Node,
}

impl ParseTree {
    pub(crate) fn new(source: &str, root: Node) -> Self {
        Self {
            source: source.to_string(),
            root,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Source text covered by `node`.
    pub fn fragment(&self, node: &Node) -> &str {
        node.span.str_of(&self.source)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Binary {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    Call {
        name: String,
        args: Vec<Node>,
    },
    Grouped(Box<Node>),
    Ident(String),
    Number {
        text: String,
        value: Decimal,
    },
}

impl Node {
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The node with any enclosing parentheses removed.
    pub fn ungrouped(&self) -> &Node {
        match &self.kind {
            NodeKind::Grouped(inner) => inner.ungrouped(),
            _ => self,
        }
    }
}

// Prefix rendering with explicit nesting, e.g. `(+ a (* b c))`. Groups are
// transparent so that `a + (b * c)` and `a + b * c` render the same.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NodeKind::Binary { op, left, right } => write!(f, "({} {} {})", op, left, right),
            NodeKind::Call { name, args } => {
                write!(f, "({}", name)?;
                for arg in args {
                    write!(f, " {}", arg)?;
                }
                write!(f, ")")
            }
            NodeKind::Grouped(inner) => write!(f, "{}", inner),
            NodeKind::Ident(name) => write!(f, "{}", name),
            NodeKind::Number { text, .. } => write!(f, "{}", text),
        }
    }
}
