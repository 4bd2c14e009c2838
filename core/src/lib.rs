//! Compiled decimal formulas with step-by-step resolution.
//!
//! A formula such as `a * (b - c)` is parsed, compiled into a
//! [`FunctionModel`](model::FunctionModel) and evaluated with decimal
//! arithmetic under a [`NumericContext`](numeric::NumericContext). Besides
//! the value, an evaluation can be rendered as a
//! [`Resolution`](resolution::Resolution) showing every intermediate step.
//!
//! Most users only need [`api`].

pub mod api;
pub mod builder;
pub mod catalog;
pub mod evaluator;
pub mod model;
pub mod numeric;
pub mod parser;
pub mod resolution;

pub use api::{Declaration, Engine, EngineOptions, Error};
pub use evaluator::Bindings;
pub use numeric::{NumberKind, NumericContext, RoundingMode};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_explain() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
