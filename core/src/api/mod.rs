//! Public API for compiling and evaluating formulas.
//!
//! An [`Engine`] holds the function catalog and default options. It turns
//! [`Declaration`]s into [`FunctionModel`](crate::model::FunctionModel)s,
//! evaluates them, and explains how a value was derived.
//!
//! # Example
//!
//! ```
//! use reckon_core::api::{Declaration, Engine, EngineOptions};
//! use reckon_core::evaluator::Bindings;
//! use reckon_core::numeric::{NumericContext, RoundingMode};
//! use rust_decimal::Decimal;
//!
//! let engine = Engine::new(EngineOptions::default(), |_| {});
//! let declaration = Declaration::new("ratio", "a / b")
//!     .with_context(NumericContext::new(5, RoundingMode::HalfUp).unwrap());
//! let model = engine.compile(&declaration).unwrap();
//!
//! let bindings = Bindings::new()
//!     .bind("a", Decimal::ONE)
//!     .bind("b", Decimal::from(3));
//! let resolution = engine.explain(&model, &bindings).unwrap();
//! assert_eq!(resolution.to_string(), "a / b\na = 1, b = 3\n1 / 3 = 0.33333");
//! ```

mod declaration;
pub mod engine;
pub mod error;
mod group;
pub mod options;

pub use declaration::Declaration;
pub use engine::{Engine, evaluate, evaluate_declared, explain};
pub use error::{Diagnostic, Error, Severity};
pub use group::{GroupCompilation, GroupFailure};
pub use options::{CompilationOptions, EngineOptions};
