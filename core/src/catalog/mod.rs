//! Named registries of functions callable from formulas.
//!
//! A [`FunctionCatalog`] maps names to [`Function`] implementations. The
//! standard set lives in [`FunctionCatalog::core`]; hosts can register their
//! own functions or merge several catalogs into one.
//!
//! # Example
//!
//! ```
//! use reckon_core::catalog::FunctionCatalog;
//! use reckon_core::numeric::NumericContext;
//! use rust_decimal::Decimal;
//!
//! let catalog = FunctionCatalog::core();
//! let pow = catalog.get("pow").unwrap();
//! let value = pow
//!     .perform(&NumericContext::default(), &[Some(Decimal::TWO), Some(Decimal::TEN)])
//!     .unwrap();
//! assert_eq!(value, Decimal::from(1024));
//! ```

mod builtins;

use core::fmt;
use std::sync::Arc;

use hashbrown::HashMap;
use rust_decimal::Decimal;
use static_assertions::assert_impl_all;
use thiserror::Error;

use crate::numeric::{ArithmeticError, NumericContext};

pub use builtins::{Factorial, Pow, Sqrt, Transcendental};

/// Why a function refused its arguments or failed to compute.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FunctionError {
    #[error("Argument 'inputs' cannot be null or empty.")]
    MissingArguments,

    #[error("Length mismatch for argument 'inputs'. Expected '{expected}' actual '{actual}'")]
    ArityMismatch { expected: usize, actual: usize },

    #[error("Argument 'inputs[{index}]' cannot be null.")]
    NullArgument { index: usize },

    #[error("argument {value} is outside the domain: {reason}")]
    OutOfDomain { value: Decimal, reason: &'static str },

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

/// A function callable from a formula.
///
/// Implementations validate their own arguments (see [`require_arguments`])
/// and round their result under the context they are given.
pub trait Function: Send + Sync {
    fn name(&self) -> &str;

    /// Number of arguments the function accepts.
    fn arity(&self) -> usize;

    /// Compute the function. `None` stands for an argument that has no value.
    fn perform(
        &self,
        context: &NumericContext,
        args: &[Option<Decimal>],
    ) -> Result<Decimal, FunctionError>;
}

/// Check `args` against an arity of `N`.
///
/// Checks run in a fixed order and the first failure wins: no arguments at
/// all, then a wrong count, then the first missing argument.
pub fn require_arguments<const N: usize>(
    args: &[Option<Decimal>],
) -> Result<[Decimal; N], FunctionError> {
    if args.is_empty() {
        return Err(FunctionError::MissingArguments);
    }
    if args.len() != N {
        return Err(FunctionError::ArityMismatch {
            expected: N,
            actual: args.len(),
        });
    }
    let mut values = [Decimal::ZERO; N];
    for (index, (slot, arg)) in values.iter_mut().zip(args).enumerate() {
        *slot = arg.ok_or(FunctionError::NullArgument { index })?;
    }
    Ok(values)
}

/// Failure to combine catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("function '{name}' is defined by both catalog '{first}' and catalog '{second}'")]
    Conflict {
        name: String,
        first: String,
        second: String,
    },
}

/// A named set of functions, looked up by name.
#[derive(Clone)]
pub struct FunctionCatalog {
    id: String,
    functions: HashMap<String, Arc<dyn Function>>,
}

assert_impl_all!(FunctionCatalog: Send, Sync);

impl FunctionCatalog {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            functions: HashMap::new(),
        }
    }

    /// Build a catalog from ready-made functions. Later entries shadow
    /// earlier ones with the same name.
    pub fn from_functions(
        id: impl Into<String>,
        functions: impl IntoIterator<Item = Arc<dyn Function>>,
    ) -> Self {
        let mut catalog = Self::new(id);
        for function in functions {
            catalog.register_shared(function);
        }
        catalog
    }

    /// The built-in functions: `pow`, `factorial`, `sqrt`, `sin`, `cos`,
    /// `tan`, `asin`, `acos`, `atan`, `toRadians` and `toDegrees`.
    pub fn core() -> Self {
        let catalog = Self::from_functions("core", builtins::core_functions());
        tracing::debug!(catalog = %catalog.id, functions = catalog.len(), "assembled catalog");
        catalog
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Add `function`, returning the function it shadows, if any.
    pub fn register<F: Function + 'static>(&mut self, function: F) -> Option<Arc<dyn Function>> {
        self.register_shared(Arc::new(function))
    }

    pub fn register_shared(&mut self, function: Arc<dyn Function>) -> Option<Arc<dyn Function>> {
        let previous = self
            .functions
            .insert(function.name().to_string(), function);
        if let Some(previous) = &previous {
            tracing::warn!(
                catalog = %self.id,
                function = previous.name(),
                "registration shadows an existing function"
            );
        }
        previous
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Function>> {
        self.functions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Function names in lexicographic order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Combine `catalogs` into a new catalog named `id`.
    ///
    /// A name defined by more than one of the catalogs is a
    /// [`CatalogError::Conflict`].
    pub fn merge<'a>(
        id: impl Into<String>,
        catalogs: impl IntoIterator<Item = &'a FunctionCatalog>,
    ) -> Result<Self, CatalogError> {
        let mut merged = Self::new(id);
        let mut origins: HashMap<&str, &str> = HashMap::new();

        for catalog in catalogs {
            for (name, function) in &catalog.functions {
                if let Some(first) = origins.insert(name.as_str(), catalog.id.as_str()) {
                    return Err(CatalogError::Conflict {
                        name: name.clone(),
                        first: first.to_string(),
                        second: catalog.id.clone(),
                    });
                }
                merged.functions.insert(name.clone(), Arc::clone(function));
            }
        }

        tracing::debug!(catalog = %merged.id, functions = merged.len(), "merged catalogs");
        Ok(merged)
    }
}

impl fmt::Debug for FunctionCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionCatalog")
            .field("id", &self.id)
            .field("functions", &self.names())
            .finish()
    }
}
