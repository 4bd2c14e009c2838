use hashbrown::HashSet;

use super::{Declaration, Engine, Error};
use crate::model::{ConstantOperand, FunctionModel};

/// A declaration of a group that did not compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupFailure {
    /// `Owner.member` of the failed declaration.
    pub declaring: String,
    pub error: Error,
}

/// Result of compiling all declarations of one owner together.
///
/// Declarations compile independently: a syntax error in one member is
/// recorded in [`failures`](Self::failures) and the other members still
/// produce models. Constants are pooled across the successful models, so a
/// literal used by several members appears once in
/// [`constants`](Self::constants).
#[derive(Debug, Clone)]
pub struct GroupCompilation {
    owner: String,
    models: Vec<FunctionModel>,
    failures: Vec<GroupFailure>,
    constants: Vec<ConstantOperand>,
}

impl GroupCompilation {
    pub(super) fn compile(
        engine: &Engine,
        owner: &str,
        declarations: impl IntoIterator<Item = Declaration>,
    ) -> Self {
        let mut models = Vec::new();
        let mut failures = Vec::new();

        for declaration in declarations {
            let declaration = declaration.declared_by(owner);
            match engine.compile(&declaration) {
                Ok(model) => models.push(model),
                Err(error) => {
                    tracing::debug!(
                        declaring = %declaration.qualified_name(),
                        %error,
                        "declaration failed to compile"
                    );
                    failures.push(GroupFailure {
                        declaring: declaration.qualified_name(),
                        error,
                    });
                }
            }
        }

        let constants = {
            let mut seen = HashSet::new();
            models
                .iter()
                .flat_map(|model| model.constants())
                .filter(|constant| seen.insert(*constant))
                .cloned()
                .collect()
        };

        tracing::debug!(
            owner,
            models = models.len(),
            failures = failures.len(),
            "compiled declaration group"
        );

        Self {
            owner: owner.to_string(),
            models,
            failures,
            constants,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Successfully compiled models, in declaration order.
    pub fn models(&self) -> &[FunctionModel] {
        &self.models
    }

    pub fn model(&self, name: &str) -> Option<&FunctionModel> {
        self.models.iter().find(|model| model.name() == name)
    }

    pub fn failures(&self) -> &[GroupFailure] {
        &self.failures
    }

    /// Distinct constants across all successful models.
    pub fn constants(&self) -> &[ConstantOperand] {
        &self.constants
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// The models, or the first failure.
    pub fn into_result(self) -> Result<Vec<FunctionModel>, Error> {
        match self.failures.into_iter().next() {
            Some(failure) => Err(failure.error),
            None => Ok(self.models),
        }
    }
}
