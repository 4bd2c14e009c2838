//! Configuration options for the reckon engine.
//!
//! Options deserialize from any serde format; missing fields take their
//! defaults.
//!
//! ```
//! use reckon_core::api::EngineOptions;
//! use reckon_core::numeric::RoundingMode;
//!
//! let options: EngineOptions = serde_json::from_str(
//!     r#"{ "default_context": { "precision": 10, "rounding": "HALF_UP" } }"#,
//! )
//! .unwrap();
//! assert_eq!(options.default_context.precision(), 10);
//! assert_eq!(options.default_context.rounding(), RoundingMode::HalfUp);
//! assert_eq!(options.max_depth, 256);
//! ```

use serde::Deserialize;

use crate::numeric::NumericContext;
use crate::parser::DEFAULT_MAX_DEPTH;

/// Per-call overrides for compilation.
///
/// A context given here applies to declarations that do not carry their
/// own; a declaration's context always wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CompilationOptions {
    pub context: Option<NumericContext>,
    pub max_depth: Option<usize>,
}

/// Configuration options for the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Context of declarations that do not specify one.
    ///
    /// Default: precision 28, `HALF_EVEN`.
    pub default_context: NumericContext,

    /// Maximum nesting of groups and call arguments in a formula.
    ///
    /// Default: 256
    pub max_depth: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            default_context: NumericContext::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EngineOptions {
    /// Effective context for a declaration with the given context, if any.
    pub fn context_for(
        &self,
        declared: Option<NumericContext>,
        overrides: &CompilationOptions,
    ) -> NumericContext {
        declared
            .or(overrides.context)
            .unwrap_or(self.default_context)
    }

    pub fn max_depth_for(&self, overrides: &CompilationOptions) -> usize {
        overrides.max_depth.unwrap_or(self.max_depth)
    }
}
