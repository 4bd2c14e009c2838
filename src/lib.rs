//! reckon - compiled decimal formulas with step-by-step resolution
//!
//! # Overview
//!
//! reckon compiles short arithmetic formulas over named inputs, such as
//! `a * (b - c)` or `pow(r, 2) * 3.14159`, and evaluates them with decimal
//! arithmetic under a chosen precision and rounding mode. Every evaluation
//! can also be explained: the resolution lists the inputs and each
//! intermediate step with its values substituted.
//!
//! # Quick Start
//!
//! ```
//! use reckon::{Bindings, Declaration, Engine, EngineOptions};
//! use rust_decimal::Decimal;
//!
//! let engine = Engine::new(EngineOptions::default(), |_catalog| {});
//! let model = engine.compile(&Declaration::new("area", "a * (b - c)")).unwrap();
//!
//! let bindings = Bindings::new()
//!     .bind("a", Decimal::from(2))
//!     .bind("b", Decimal::from(5))
//!     .bind("c", Decimal::from(1));
//!
//! assert_eq!(engine.evaluate(&model, &bindings).unwrap(), Decimal::from(8));
//! println!("{}", engine.explain(&model, &bindings).unwrap());
//! // a * (b - c)
//! // a = 2, b = 5, c = 1
//! // 5 - 1 = 4
//! // 2 * 4 = 8
//! ```
//!
//! # Custom functions
//!
//! Functions are registered in the engine's catalog before it is frozen:
//!
//! ```
//! use reckon::{Engine, EngineOptions};
//! use reckon::catalog::{Function, FunctionError, require_arguments};
//! use reckon::numeric::NumericContext;
//! use rust_decimal::Decimal;
//!
//! struct Half;
//!
//! impl Function for Half {
//!     fn name(&self) -> &str {
//!         "half"
//!     }
//!
//!     fn arity(&self) -> usize {
//!         1
//!     }
//!
//!     fn perform(
//!         &self,
//!         context: &NumericContext,
//!         args: &[Option<Decimal>],
//!     ) -> Result<Decimal, FunctionError> {
//!         let [x] = require_arguments::<1>(args)?;
//!         Ok(context.round(x / Decimal::TWO)?)
//!     }
//! }
//!
//! let engine = Engine::new(EngineOptions::default(), |catalog| {
//!     catalog.register(Half);
//! });
//! assert!(engine.catalog().contains("half"));
//! ```

mod error_renderer;

// Re-export public API from reckon_core
pub use reckon_core::api::{
    CompilationOptions, Declaration, Diagnostic, Engine, EngineOptions, Error, GroupCompilation,
    GroupFailure, Severity, evaluate, evaluate_declared, explain,
};

// Re-export commonly used types
pub use reckon_core::evaluator::{Bindings, EvalError};
pub use reckon_core::model::FunctionModel;
pub use reckon_core::numeric::{Number, NumberKind, NumericContext, RoundingMode};
pub use reckon_core::parser::SyntaxError;
pub use reckon_core::resolution::{Resolution, Step};
pub use reckon_core::{catalog, numeric};

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
