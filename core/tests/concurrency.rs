//! Compiled models and engines are shared between threads without locks.

use std::sync::Arc;

use reckon_core::api::{Declaration, Engine, EngineOptions};
use reckon_core::evaluator::Bindings;
use reckon_core::numeric::{NumericContext, RoundingMode};
use rust_decimal::Decimal;

#[test]
fn evaluate_one_model_from_many_threads() {
    let engine = Engine::new(EngineOptions::default(), |_| {});
    let model = engine
        .compile(
            &Declaration::new("ratio", "a / b + sin(0)")
                .with_context(NumericContext::new(8, RoundingMode::HalfUp).unwrap()),
        )
        .unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (1..=8)
            .map(|i| {
                let engine = &engine;
                let model = &model;
                s.spawn(move || {
                    let bindings = Bindings::new()
                        .bind("a", Decimal::from(i))
                        .bind("b", Decimal::from(4));
                    (0..100)
                        .map(|_| engine.evaluate(model, &bindings).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for (i, handle) in (1..=8).zip(handles) {
            let expected = Decimal::from(i) / Decimal::from(4);
            let values = handle.join().unwrap();
            assert!(values.iter().all(|value| *value == expected));
        }
    });
}

#[test]
fn engine_moves_across_threads() {
    let engine = Arc::new(Engine::new(EngineOptions::default(), |_| {}));

    let handles: Vec<_> = ["a + b", "a - b", "a * b", "a / b"]
        .into_iter()
        .map(|formula| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || {
                let model = engine.compile(&Declaration::new("f", formula)).unwrap();
                let bindings = Bindings::new()
                    .bind("a", Decimal::from(6))
                    .bind("b", Decimal::from(3));
                engine.explain(&model, &bindings).unwrap().to_string()
            })
        })
        .collect();

    let last_lines: Vec<String> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().lines().last().unwrap().to_string())
        .collect();
    assert_eq!(
        last_lines,
        vec!["6 + 3 = 9", "6 - 3 = 3", "6 * 3 = 18", "6 / 3 = 2"]
    );
}
