use serde::Deserialize;

use crate::api::Error;
use crate::numeric::{NumberKind, NumericContext};

/// A formula to compile, with the name and kind it is declared under.
///
/// ```
/// use reckon_core::api::Declaration;
/// use reckon_core::numeric::{NumberKind, NumericContext, RoundingMode};
///
/// let declaration = Declaration::new("ratio", "a / b")
///     .with_kind(NumberKind::Double)
///     .with_context(NumericContext::new(5, RoundingMode::HalfUp).unwrap())
///     .declared_by("Basic");
/// assert_eq!(declaration.qualified_name(), "Basic.ratio");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Declaration {
    pub name: String,
    pub formula: String,
    #[serde(default)]
    pub result_kind: NumberKind,
    /// Falls back to the engine's default context when absent.
    #[serde(default)]
    pub context: Option<NumericContext>,
    #[serde(default)]
    pub declaring: Option<String>,
}

impl Declaration {
    pub fn new(name: impl Into<String>, formula: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            formula: formula.into(),
            result_kind: NumberKind::default(),
            context: None,
            declaring: None,
        }
    }

    pub fn with_kind(mut self, kind: NumberKind) -> Self {
        self.result_kind = kind;
        self
    }

    pub fn with_context(mut self, context: NumericContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn declared_by(mut self, owner: impl Into<String>) -> Self {
        self.declaring = Some(owner.into());
        self
    }

    /// `Owner.member`, or just the member name when there is no owner.
    pub fn qualified_name(&self) -> String {
        match &self.declaring {
            Some(owner) => format!("{}.{}", owner, self.name),
            None => self.name.clone(),
        }
    }

    /// Check the fields that the formula itself does not cover. An empty
    /// formula is left to the parser, which reports it as a syntax error.
    pub fn validate(&self) -> Result<(), Error> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidDeclaration(format!(
                "declaration of '{}' has no name",
                self.formula
            )));
        }
        if matches!(&self.declaring, Some(owner) if owner.trim().is_empty()) {
            return Err(Error::InvalidDeclaration(format!(
                "'{}' has an empty owner name",
                self.name
            )));
        }
        Ok(())
    }
}
