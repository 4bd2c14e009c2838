//! The reckon compilation engine.

use std::sync::Arc;

use rust_decimal::Decimal;
use static_assertions::assert_impl_all;

use super::{CompilationOptions, Declaration, EngineOptions, Error, GroupCompilation};
use crate::builder::TreeBuilder;
use crate::catalog::FunctionCatalog;
use crate::evaluator::{Bindings, Evaluation, Evaluator};
use crate::model::{FunctionModel, ModelConfig};
use crate::numeric::Number;
use crate::parser::{self, ParseError};
use crate::resolution::Resolution;

/// Compiles declarations and evaluates the resulting models.
///
/// The engine owns the function catalog formulas are evaluated against.
/// The catalog is assembled once, before the engine is created, and is
/// read-only afterwards, so an engine can be shared between threads.
///
/// # Example
///
/// ```
/// use reckon_core::api::{Declaration, Engine, EngineOptions};
/// use reckon_core::evaluator::Bindings;
/// use rust_decimal::Decimal;
///
/// let engine = Engine::new(EngineOptions::default(), |_catalog| {});
/// let model = engine
///     .compile(&Declaration::new("area", "a * (b - c)"))
///     .unwrap();
///
/// let bindings = Bindings::from([
///     ("a", Decimal::from(2)),
///     ("b", Decimal::from(5)),
///     ("c", Decimal::from(1)),
/// ]);
/// assert_eq!(engine.evaluate(&model, &bindings).unwrap(), Decimal::from(8));
/// assert_eq!(
///     engine.explain(&model, &bindings).unwrap().to_string(),
///     "a * (b - c)\na = 2, b = 5, c = 1\n5 - 1 = 4\n2 * 4 = 8"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    catalog: Arc<FunctionCatalog>,
    options: EngineOptions,
}

assert_impl_all!(Engine: Send, Sync);

impl Engine {
    /// Create an engine over the core catalog.
    ///
    /// The initialization closure may register additional functions before
    /// the catalog is frozen.
    pub fn new(options: EngineOptions, init: impl FnOnce(&mut FunctionCatalog)) -> Self {
        let mut catalog = FunctionCatalog::core();
        init(&mut catalog);
        Self::with_catalog(options, catalog)
    }

    /// Create an engine over a catalog assembled by the caller.
    pub fn with_catalog(options: EngineOptions, catalog: impl Into<Arc<FunctionCatalog>>) -> Self {
        let catalog = catalog.into();
        tracing::debug!(
            catalog = catalog.id(),
            functions = catalog.len(),
            "created engine"
        );
        Self { catalog, options }
    }

    pub fn catalog(&self) -> &FunctionCatalog {
        &self.catalog
    }

    pub fn shared_catalog(&self) -> Arc<FunctionCatalog> {
        Arc::clone(&self.catalog)
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Compile one declaration with the engine's default options.
    pub fn compile(&self, declaration: &Declaration) -> Result<FunctionModel, Error> {
        self.compile_with(declaration, &CompilationOptions::default())
    }

    /// Compile one declaration.
    ///
    /// Syntax errors name the declaration (`Owner.member`) and carry every
    /// problem found in the formula. Function names are not checked here;
    /// an unknown function fails when the model is evaluated.
    pub fn compile_with(
        &self,
        declaration: &Declaration,
        options: &CompilationOptions,
    ) -> Result<FunctionModel, Error> {
        declaration.validate()?;

        let context = self.options.context_for(declaration.context, options);
        let max_depth = self.options.max_depth_for(options);
        let qualified = declaration.qualified_name();
        tracing::debug!(
            declaring = %qualified,
            formula = %declaration.formula,
            %context,
            "compiling formula"
        );

        let tree = parser::parse_with_max_depth(&declaration.formula, max_depth).map_err(
            |err| match err {
                ParseError::Syntax(err) => Error::Syntax(err.with_declaring(qualified.clone())),
                other => Error::from(other),
            },
        )?;
        let built = TreeBuilder::new(declaration.result_kind).build(&tree);

        let model = FunctionModel::new(ModelConfig {
            name: declaration.name.clone(),
            declaring: declaration.declaring.clone(),
            kind: declaration.result_kind,
            formula: declaration.formula.clone(),
            context,
            tree: built,
        })?;
        Ok(model)
    }

    /// Compile every declaration of `owner` together.
    ///
    /// See [`GroupCompilation`].
    pub fn compile_group(
        &self,
        owner: &str,
        declarations: impl IntoIterator<Item = Declaration>,
    ) -> GroupCompilation {
        GroupCompilation::compile(self, owner, declarations)
    }

    pub fn evaluate(&self, model: &FunctionModel, bindings: &Bindings) -> Result<Decimal, Error> {
        evaluate(model, &self.catalog, bindings)
    }

    /// Evaluate and convert the value to the model's declared kind.
    pub fn evaluate_declared(
        &self,
        model: &FunctionModel,
        bindings: &Bindings,
    ) -> Result<Number, Error> {
        evaluate_declared(model, &self.catalog, bindings)
    }

    pub fn explain(&self, model: &FunctionModel, bindings: &Bindings) -> Result<Resolution, Error> {
        explain(model, &self.catalog, bindings)
    }
}

fn run(
    model: &FunctionModel,
    catalog: &FunctionCatalog,
    bindings: &Bindings,
) -> Result<Evaluation, Error> {
    Ok(Evaluator::new(model, catalog, bindings)?.run()?)
}

/// Value of `model` for the given inputs.
pub fn evaluate(
    model: &FunctionModel,
    catalog: &FunctionCatalog,
    bindings: &Bindings,
) -> Result<Decimal, Error> {
    Ok(run(model, catalog, bindings)?.value())
}

/// Value of `model` converted to its declared kind.
pub fn evaluate_declared(
    model: &FunctionModel,
    catalog: &FunctionCatalog,
    bindings: &Bindings,
) -> Result<Number, Error> {
    let value = evaluate(model, catalog, bindings)?;
    Ok(model.kind().convert(value)?)
}

/// Step-by-step derivation of `model`'s value for the given inputs.
///
/// The final step's value is always the value [`evaluate`] returns.
pub fn explain(
    model: &FunctionModel,
    catalog: &FunctionCatalog,
    bindings: &Bindings,
) -> Result<Resolution, Error> {
    let evaluation = run(model, catalog, bindings)?;
    Ok(Resolution::new(model, &evaluation)?)
}
