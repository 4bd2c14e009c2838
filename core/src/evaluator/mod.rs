//! Forward-pass evaluator for compiled formulas.
//!
//! The evaluator walks a [`FunctionModel`]'s operations in order, keeping
//! each result by its id, so every argument is available by the time an
//! operation reads it. All arithmetic runs under the model's
//! [`NumericContext`](crate::numeric::NumericContext).
//!
//! ## Example
//!
//! ```
//! use reckon_core::api::{Declaration, Engine, EngineOptions};
//! use reckon_core::evaluator::{self, Bindings};
//! use rust_decimal::Decimal;
//!
//! let engine = Engine::new(EngineOptions::default(), |_| {});
//! let model = engine.compile(&Declaration::new("add", "a + b")).unwrap();
//!
//! let bindings = Bindings::new()
//!     .bind("a", Decimal::from(45))
//!     .bind("b", Decimal::from(70));
//! let value = evaluator::eval(&model, engine.catalog(), &bindings).unwrap();
//! assert_eq!(value, Decimal::from(115));
//! ```

mod bindings;
mod error;
mod eval;
mod operators;


pub use bindings::Bindings;
pub use error::EvalError;
pub use eval::{Evaluation, Evaluator};
pub use operators::apply_binary;

use rust_decimal::Decimal;

use crate::catalog::FunctionCatalog;
use crate::model::FunctionModel;

/// Evaluate `model` with the given input values.
pub fn eval(
    model: &FunctionModel,
    catalog: &FunctionCatalog,
    bindings: &Bindings,
) -> Result<Decimal, EvalError> {
    Ok(Evaluator::new(model, catalog, bindings)?.run()?.value())
}
