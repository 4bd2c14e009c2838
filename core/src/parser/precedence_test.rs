use super::parser::parse;

// Render the parse tree in prefix form.
//
// We test precedence by comparing whether two formulas parenthesized in
// different ways render the same tree (groups are transparent).
fn tree(source: &str) -> String {
    parse(source)
        .unwrap_or_else(|e| panic!("Formula parsing failed: {}\n{}", source, e))
        .root()
        .to_string()
}

#[test]
fn test_addition_vs_subtraction() {
    assert_eq!(tree("a + b - c"), tree("(a + b) - c"));
    assert_eq!(tree("a - b + c"), tree("(a - b) + c"));
    assert_eq!(
        tree("a + b - c + d - e + f"),
        tree("((((a + b) - c) + d) - e) + f")
    );
}

#[test]
fn test_multiplication_vs_division() {
    assert_eq!(tree("a * b / c"), tree("(a * b) / c"));
    assert_eq!(tree("a / b * c"), tree("(a / b) * c"));
    assert_eq!(
        tree("a * b / c * d / e * f"),
        tree("((((a * b) / c) * d) / e) * f")
    );
}

#[test]
fn test_addition_vs_multiplication() {
    assert_eq!(tree("a + b * c"), tree("a + (b * c)"));
    assert_eq!(tree("a * b + c"), tree("(a * b) + c"));
    assert_eq!(tree("a - b / c"), "(- a (/ b c))");
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(tree("(a + b) * c"), "(* (+ a b) c)");
    assert_ne!(tree("(a + b) * c"), tree("a + b * c"));
    assert_eq!(tree("a / (b / c)"), "(/ a (/ b c))");
}

#[test]
fn test_calls_bind_as_operands() {
    assert_eq!(tree("sin(a) * b"), "(* (sin a) b)");
    assert_eq!(tree("a * sin(b + c)"), "(* a (sin (+ b c)))");
    assert_eq!(tree("pow(a, b * c) + 1"), "(+ (pow a (* b c)) 1)");
}
