// Tests with valid formulas for each rule in the grammar.

use crate::parser::{FormulaParser, Rule};
use pest::Parser;
use pest::iterators::Pair;

fn contains_rule(pair: Pair<Rule>, target: Rule) -> bool {
    if pair.as_rule() == target {
        return true;
    }
    for inner in pair.into_inner() {
        if contains_rule(inner, target) {
            return true;
        }
    }
    false
}

macro_rules! rule_examples {
    ( $($rule:ident => [$($expr:expr),* $(,)?]),* $(,)? ) => {
        $(
            #[test]
            fn $rule() {
                let inputs = vec![$($expr),*];
                for input in inputs {
                    let result = FormulaParser::parse(Rule::formula, input)
                        .unwrap_or_else(|e| panic!("Failed to parse '{}': {}", input, e));
                    let root = result.into_iter().next().unwrap();
                    assert!(
                        contains_rule(root.clone(), Rule::$rule),
                        "Expected to find rule {:?} in parse tree for input '{}'",
                        Rule::$rule,
                        input
                    );
                }
            }
        )*
    };
}

rule_examples! {
    ident => ["a", "foo", "_bar123", "rate_2", "A"],
    number => ["0", "5", "42", "3.14", "007", "0.5"],
    call => ["sin(a)", "pow(a, 2)", "f()", "sqrt ( x )", "sin(cos(a))"],
    grouped => ["(a)", "a * (b - c)", "((a + b))"],
    add => ["1 + 2", "a * (b + c)"],
    sub => ["a - b", "a-b"],
    mul => ["1 * 2", "a * ( b + c )"],
    div => ["a / b", "(a + b) / 2"],
}

#[test]
fn test_invalid_formulas() {
    let inputs = [
        "",
        "a +",
        "+ a",
        "a b",
        "(a",
        "a)",
        "1.",
        ".5",
        "a ^ b",
        "-a",
        "sin(a,)",
        "2a",
        "a $ b",
    ];
    for input in inputs {
        assert!(
            FormulaParser::parse(Rule::formula, input).is_err(),
            "Expected '{}' to be rejected",
            input
        );
    }
}
