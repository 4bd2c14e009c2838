use lazy_static::lazy_static;
use pest::Parser;
use pest::iterators::Pair;
use pest::pratt_parser::{Assoc, Op, PrattParser};
use pest_derive::Parser;
use rust_decimal::Decimal;

use crate::parser::error::{ParseErrorKind, SyntaxErrorListener};
use crate::parser::{BinaryOp, Node, NodeKind, ParseError, ParseTree, Span};

/// Default limit on nested groups, call arguments and operators.
pub const DEFAULT_MAX_DEPTH: usize = 256;

lazy_static! {
    // Note: precedence is defined lowest to highest.
    static ref PRATT_PARSER: PrattParser<Rule> = PrattParser::new()
        .op(
            Op::infix(Rule::add, Assoc::Left) |
            Op::infix(Rule::sub, Assoc::Left)
        )                                               // `+`, `-`
        .op(
            Op::infix(Rule::mul, Assoc::Left) |
            Op::infix(Rule::div, Assoc::Left)
        )                                               // `*`, `/`
        ;
}

#[derive(Parser)]
#[grammar = "parser/formula.pest"]
pub struct FormulaParser;

/// Parse a formula with the default nesting limit.
pub fn parse(source: &str) -> Result<ParseTree, ParseError> {
    parse_with_max_depth(source, DEFAULT_MAX_DEPTH)
}

/// Parse a formula, rejecting groups, calls or operator chains nested
/// deeper than `max_depth`.
pub fn parse_with_max_depth(source: &str, max_depth: usize) -> Result<ParseTree, ParseError> {
    let mut listener = SyntaxErrorListener::default();

    let mut pairs = match FormulaParser::parse(Rule::formula, source) {
        Ok(pairs) => pairs,
        Err(err) => {
            listener.pest_error(source, err);
            return Err(listener.into_error(source).into());
        }
    };

    let expression = pairs
        .next()
        .and_then(|formula| formula.into_inner().next())
        .ok_or_else(|| internal("formula rule produced no expression"))?;

    let mut walker = TreeWalker {
        source,
        max_depth,
        listener: &mut listener,
    };
    match walker.expression(expression, 1) {
        Ok(root) if !listener.has_errors() => Ok(ParseTree::new(source, root)),
        Ok(_) | Err(WalkError::Abandoned) | Err(WalkError::TooDeep(_)) => {
            Err(listener.into_error(source).into())
        }
        Err(WalkError::Internal(message)) => Err(internal(message)),
    }
}

fn internal(message: impl Into<String>) -> ParseError {
    let message = message.into();
    tracing::error!(%message, "parser invariant violated");
    ParseError::Internal(message)
}

enum WalkError {
    /// A syntax error was recorded and the rest of the branch was skipped.
    Abandoned,
    /// An operator chain nested past the limit; reported once by the
    /// expression that owns it.
    TooDeep(Span),
    Internal(String),
}

struct TreeWalker<'s, 'l> {
    source: &'s str,
    max_depth: usize,
    listener: &'l mut SyntaxErrorListener,
}

impl TreeWalker<'_, '_> {
    fn expression(&mut self, pair: Pair<Rule>, depth: usize) -> Result<Node, WalkError> {
        if pair.as_rule() != Rule::expression {
            return Err(WalkError::Internal(format!(
                "expected expression, got {:?}",
                pair.as_rule()
            )));
        }
        if depth > self.max_depth {
            self.listener.syntax_error(
                self.source,
                pair.as_span().into(),
                ParseErrorKind::MaxDepthExceeded {
                    max_depth: self.max_depth,
                },
            );
            return Err(WalkError::Abandoned);
        }

        // Operators nest too: in `a + b + c` the first sum sits one level
        // below the second, so long chains are bounded like groups.
        let max_depth = self.max_depth;
        let walked = PRATT_PARSER
            .map_primary(|primary| self.operand(primary, depth).map(|node| (node, 0)))
            .map_infix(|lhs, op, rhs| {
                let op = match op.as_rule() {
                    Rule::add => BinaryOp::Add,
                    Rule::sub => BinaryOp::Sub,
                    Rule::mul => BinaryOp::Mul,
                    Rule::div => BinaryOp::Div,
                    rule => {
                        return Err(WalkError::Internal(format!(
                            "unknown binary operator: {:?}",
                            rule
                        )));
                    }
                };
                let ((left, left_height), (right, right_height)) = (lhs?, rhs?);
                let height = left_height.max(right_height) + 1;
                let span = Span::combine(&left.span, &right.span);
                if depth + height - 1 > max_depth {
                    return Err(WalkError::TooDeep(span));
                }
                Ok((
                    Node::new(
                        NodeKind::Binary {
                            op,
                            left: Box::new(left),
                            right: Box::new(right),
                        },
                        span,
                    ),
                    height,
                ))
            })
            .parse(pair.into_inner());

        match walked {
            Ok((node, _)) => Ok(node),
            Err(WalkError::TooDeep(span)) => {
                self.listener.syntax_error(
                    self.source,
                    span,
                    ParseErrorKind::MaxDepthExceeded { max_depth },
                );
                Err(WalkError::Abandoned)
            }
            Err(err) => Err(err),
        }
    }

    fn operand(&mut self, pair: Pair<Rule>, depth: usize) -> Result<Node, WalkError> {
        let span = Span::from(pair.as_span());
        match pair.as_rule() {
            Rule::ident => Ok(Node::new(NodeKind::Ident(pair.as_str().to_string()), span)),

            Rule::number => {
                let text = pair.as_str();
                let value = Decimal::from_str_exact(text).unwrap_or_else(|_| {
                    self.listener.syntax_error(
                        self.source,
                        span.clone(),
                        ParseErrorKind::InvalidNumber {
                            text: text.to_string(),
                        },
                    );
                    Decimal::ZERO
                });
                Ok(Node::new(
                    NodeKind::Number {
                        text: text.to_string(),
                        value,
                    },
                    span,
                ))
            }

            Rule::grouped => {
                let inner = pair
                    .into_inner()
                    .next()
                    .ok_or_else(|| WalkError::Internal("empty group".to_string()))?;
                let inner = self.expression(inner, depth + 1)?;
                Ok(Node::new(NodeKind::Grouped(Box::new(inner)), span))
            }

            Rule::call => {
                let mut inner = pair.into_inner();
                let name = inner
                    .next()
                    .filter(|name| name.as_rule() == Rule::ident)
                    .ok_or_else(|| WalkError::Internal("call without a name".to_string()))?
                    .as_str()
                    .to_string();
                let args = inner
                    .map(|arg| self.expression(arg, depth + 1))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Node::new(NodeKind::Call { name, args }, span))
            }

            rule => Err(WalkError::Internal(format!(
                "unexpected rule in operand position: {:?}",
                rule
            ))),
        }
    }
}
