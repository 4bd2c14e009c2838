//! Formula lexer and parser.
//!
//! Formulas are recognized by a pest grammar (`formula.pest`) and turned into
//! a concrete [`ParseTree`]. Operator precedence is resolved by a Pratt parser;
//! parenthesized groups are kept in the tree so that later stages can quote
//! the exact source of every sub-expression.
//!
//! ```
//! use reckon_core::parser::parse;
//!
//! let tree = parse("a + b * c").unwrap();
//! assert_eq!(tree.root().to_string(), "(+ a (* b c))");
//! ```

pub mod error;
mod parse_tree;
#[allow(clippy::module_inception)]
pub mod parser;
mod syntax;

pub use error::{ParseError, ParseErrorKind, SyntaxError, SyntaxErrorListener};
pub use parse_tree::{Node, NodeKind, ParseTree};
pub use parser::{DEFAULT_MAX_DEPTH, FormulaParser, Rule, parse, parse_with_max_depth};
pub use syntax::{BinaryOp, Span};


#[cfg(test)]
mod rule_valid_test;

#[cfg(test)]
mod precedence_test;
