//! End-to-end properties of compiling, evaluating and explaining formulas.

use pretty_assertions::assert_eq;
use reckon_core::api::{Declaration, Engine, EngineOptions, Error};
use reckon_core::evaluator::{Bindings, EvalError};
use reckon_core::model::OperandRef;
use reckon_core::numeric::{NumericContext, RoundingMode};
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn bindings(pairs: &[(&str, &str)]) -> Bindings {
    pairs.iter().map(|(k, v)| (*k, dec(v))).collect()
}

#[test]
fn standard_precedence() {
    let engine = Engine::new(EngineOptions::default(), |_| {});
    let model = engine.compile(&Declaration::new("f", "a + b * c")).unwrap();
    let value = engine
        .evaluate(&model, &bindings(&[("a", "2"), ("b", "3"), ("c", "4")]))
        .unwrap();
    assert_eq!(value, dec("14"));
}

#[test]
fn repeated_literal_is_one_constant() {
    let engine = Engine::new(EngineOptions::default(), |_| {});
    let model = engine.compile(&Declaration::new("f", "a + 5 - 5 + b")).unwrap();
    assert_eq!(model.constants().len(), 1);
    assert_eq!(model.constants()[0].text, "5");
    assert_eq!(model.operations().len(), 3);
}

#[test]
fn explain_ends_with_the_value() {
    let engine = Engine::new(EngineOptions::default(), |_| {});
    let context = NumericContext::new(6, RoundingMode::HalfEven).unwrap();
    let formulas = [
        "a + b",
        "a / b / c",
        "(a - b) * (c + a) / b",
        "pow(a, c) - factorial(c)",
        "sin(a) + cos(b)",
        "toDegrees(atan(a / b))",
    ];
    let inputs = bindings(&[("a", "2"), ("b", "7"), ("c", "3")]);

    for formula in formulas {
        let model = engine
            .compile(&Declaration::new("f", formula).with_context(context))
            .unwrap();
        let value = engine.evaluate(&model, &inputs).unwrap();
        let text = engine.explain(&model, &inputs).unwrap().to_string();
        let last = text.lines().last().unwrap();
        assert!(
            last.ends_with(&format!(" = {}", value)),
            "'{}' ended with '{}' but evaluated to {}",
            formula,
            last,
            value
        );
    }
}

#[test]
fn division_under_five_digits_half_up() {
    let engine = Engine::new(EngineOptions::default(), |_| {});
    let model = engine
        .compile(
            &Declaration::new("f", "a / b")
                .with_context(NumericContext::new(5, RoundingMode::HalfUp).unwrap()),
        )
        .unwrap();
    let value = engine
        .evaluate(&model, &bindings(&[("a", "1"), ("b", "3")]))
        .unwrap();
    assert_eq!(value.to_string(), "0.33333");
}

#[test]
fn unary_builtins_check_their_arguments() {
    let engine = Engine::new(EngineOptions::default(), |_| {});
    for (formula, constraint) in [
        ("sin()", "cannot be null or empty"),
        ("sin(a, a)", "Length mismatch"),
    ] {
        let model = engine.compile(&Declaration::new("f", formula)).unwrap();
        match engine.evaluate(&model, &bindings(&[("a", "1")])) {
            Err(Error::Evaluation(EvalError::InvalidArgument(message))) => {
                assert!(message.contains(constraint), "{}: {}", formula, message);
            }
            other => panic!("{}: expected an invalid argument, got {:?}", formula, other),
        }
    }

    let sin = engine.catalog().get("sin").unwrap();
    let err = sin
        .perform(&NumericContext::default(), &[None])
        .unwrap_err();
    assert_eq!(err.to_string(), "Argument 'inputs[0]' cannot be null.");
}

#[test]
fn compiling_twice_is_idempotent() {
    let engine = Engine::new(EngineOptions::default(), |_| {});
    let declaration = Declaration::new("f", "a * (b - c) + sqrt(a)");
    let first = engine.compile(&declaration).unwrap();
    let second = engine.compile(&declaration).unwrap();

    let inputs = bindings(&[("a", "4"), ("b", "5"), ("c", "1")]);
    assert_eq!(first.operations(), second.operations());
    assert_eq!(
        engine.explain(&first, &inputs).unwrap().to_string(),
        engine.explain(&second, &inputs).unwrap().to_string()
    );
}

#[test]
fn syntax_error_does_not_affect_siblings() {
    let engine = Engine::new(EngineOptions::default(), |_| {});
    let group = engine.compile_group(
        "Basic",
        [
            Declaration::new("broken", "a + "),
            Declaration::new("add", "a + b"),
        ],
    );

    let failure = &group.failures()[0];
    match &failure.error {
        Error::Syntax(err) => {
            assert_eq!(err.formula, "a + ");
            assert_eq!(err.declaring.as_deref(), Some("Basic.broken"));
        }
        other => panic!("Expected a syntax error, got {:?}", other),
    }

    let add = group.model("add").unwrap();
    let inputs = bindings(&[("a", "45"), ("b", "70")]);
    assert_eq!(engine.evaluate(add, &inputs).unwrap(), dec("115"));
    let text = engine.explain(add, &inputs).unwrap().to_string();
    assert!(text.ends_with("45 + 70 = 115"));
}

#[test]
fn single_operand_root() {
    let engine = Engine::new(EngineOptions::default(), |_| {});
    let model = engine.compile(&Declaration::new("f", "rate")).unwrap();
    assert!(model.operations().is_empty());
    assert!(matches!(model.root(), OperandRef::Input(_)));

    let inputs = bindings(&[("rate", "0.05")]);
    assert_eq!(engine.evaluate(&model, &inputs).unwrap(), dec("0.05"));
    assert_eq!(
        engine.explain(&model, &inputs).unwrap().to_string(),
        "rate\nrate = 0.05\n0.05 = 0.05"
    );
}

#[test]
fn positional_binding() {
    let engine = Engine::new(EngineOptions::default(), |_| {});
    let model = engine.compile(&Declaration::new("f", "a * (b - c)")).unwrap();
    let inputs = model
        .bind_positional(&[dec("2"), dec("5"), dec("1")])
        .unwrap();
    assert_eq!(engine.evaluate(&model, &inputs).unwrap(), dec("8"));
}

#[test]
fn long_sums_compile_up_to_the_depth_limit() {
    let engine = Engine::new(EngineOptions::default(), |_| {});
    let formula = vec!["a"; 257].join("+");
    let model = engine.compile(&Declaration::new("f", formula)).unwrap();
    let value = engine.evaluate(&model, &bindings(&[("a", "1")])).unwrap();
    assert_eq!(value.to_string(), "257");

    let formula = vec!["a"; 2000].join("+");
    let err = engine.compile(&Declaration::new("f", formula)).unwrap_err();
    assert_eq!(err.diagnostics()[0].code.as_deref(), Some("P004"));
}

#[test]
fn results_are_not_padded_to_the_precision() {
    let engine = Engine::new(EngineOptions::default(), |_| {});
    let model = engine.compile(&Declaration::new("f", "a + b + c")).unwrap();
    let value = engine
        .evaluate(&model, &bindings(&[("a", "45"), ("b", "70"), ("c", "0.5")]))
        .unwrap();
    assert_eq!(value.to_string(), "115.5");
}
