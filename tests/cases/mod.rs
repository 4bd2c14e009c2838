use once_cell::sync::Lazy;
use reckon::{Bindings, Declaration, Engine, EngineOptions, NumericContext, Resolution};
use rust_decimal::Decimal;

pub static ENGINE: Lazy<Engine> = Lazy::new(|| Engine::new(EngineOptions::default(), |_| {}));

pub fn explain(
    formula: &str,
    context: Option<NumericContext>,
    inputs: &[(&str, &str)],
) -> Result<Resolution, reckon::Error> {
    let mut declaration = Declaration::new("case", formula);
    if let Some(context) = context {
        declaration = declaration.with_context(context);
    }
    let model = ENGINE.compile(&declaration)?;
    let bindings: Bindings = inputs
        .iter()
        .map(|(name, value)| (*name, value.parse::<Decimal>().unwrap()))
        .collect();

    let value = ENGINE.evaluate(&model, &bindings)?;
    let resolution = ENGINE.explain(&model, &bindings)?;
    assert_eq!(resolution.value(), value);
    Ok(resolution)
}

/// Declare a test that explains `formula` and compares the rendered
/// resolution.
macro_rules! resolution_case {
    (
        name: $name:ident,
        formula: $formula:expr,
        $(context: ($precision:expr, $rounding:ident),)?
        inputs: [$(($input:expr, $value:expr)),* $(,)?],
        resolution: $expected:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            #[allow(unused_mut, unused_assignments)]
            let mut context = None;
            $(
                context = Some(
                    reckon::NumericContext::new($precision, reckon::RoundingMode::$rounding)
                        .unwrap(),
                );
            )?
            let resolution = cases::explain($formula, context, &[$(($input, $value)),*])
                .unwrap_or_else(|e| panic!("'{}' failed: {}", $formula, e));
            pretty_assertions::assert_eq!(resolution.to_string(), $expected);
        }
    };
}
