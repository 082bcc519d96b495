use std::sync::Arc;

use crate::clause::Clause;
use crate::generator::{
    BuiltinRelation, ClauseGenerator, GenerateArgs, GenerateError, GeneratorContext,
};
use crate::host::{Host, HostError};

/// Heading levels offered for `has heading`.
pub const HEADING_LEVELS: [&str; 4] = ["1", "2", "3", "0"];

/// Computes target suggestions from the host's current data.
pub trait OptionProvider: Send + Sync {
    fn options(&self, source: &str, host: &Host) -> Result<Vec<String>, HostError>;
}

impl<F> OptionProvider for F
where
    F: Fn(&str, &Host) -> Result<Vec<String>, HostError> + Send + Sync,
{
    fn options(&self, source: &str, host: &Host) -> Result<Vec<String>, HostError> {
        self(source, host)
    }
}

/// Catalog queries used by the built-in relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostQuery {
    PageTitles,
    UserDisplayNames,
}

impl OptionProvider for HostQuery {
    fn options(&self, _source: &str, host: &Host) -> Result<Vec<String>, HostError> {
        match self {
            HostQuery::PageTitles => host.catalog.page_titles(),
            HostQuery::UserDisplayNames => host.catalog.user_display_names(),
        }
    }
}

/// Where a relation's target suggestions come from.
#[derive(Clone)]
pub enum TargetOptions {
    Static(Vec<String>),
    Dynamic(Arc<dyn OptionProvider>),
}

impl TargetOptions {
    pub fn resolve(&self, source: &str, host: &Host) -> Result<Vec<String>, HostError> {
        match self {
            TargetOptions::Static(values) => Ok(values.clone()),
            TargetOptions::Dynamic(provider) => provider.options(source, host),
        }
    }
}

impl std::fmt::Debug for TargetOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetOptions::Static(values) => f.debug_tuple("Static").field(values).finish(),
            TargetOptions::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Clause generation strategy of a handler.
#[derive(Clone)]
pub enum Generator {
    Builtin(BuiltinRelation),
    Custom(Arc<dyn ClauseGenerator>),
}

impl Generator {
    pub fn generate(
        &self,
        args: &GenerateArgs<'_>,
        ctx: &GeneratorContext<'_>,
    ) -> Result<Vec<Clause>, GenerateError> {
        match self {
            Generator::Builtin(relation) => relation.generate(args, ctx),
            Generator::Custom(generator) => generator.generate(args, ctx),
        }
    }
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::Builtin(relation) => f.debug_tuple("Builtin").field(relation).finish(),
            Generator::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Everything registered under one relation name.
#[derive(Debug, Clone)]
pub struct RelationHandler {
    pub generator: Generator,
    pub target_options: Option<TargetOptions>,
}

impl RelationHandler {
    pub fn builtin(relation: BuiltinRelation) -> Self {
        let target_options = match relation {
            BuiltinRelation::HasTitle
            | BuiltinRelation::HasAttribute
            | BuiltinRelation::ReferencesTitle
            | BuiltinRelation::IsInPageWithTitle => {
                Some(TargetOptions::Dynamic(Arc::new(HostQuery::PageTitles)))
            }
            BuiltinRelation::CreatedBy | BuiltinRelation::EditedBy => {
                Some(TargetOptions::Dynamic(Arc::new(HostQuery::UserDisplayNames)))
            }
            BuiltinRelation::HasHeading => Some(TargetOptions::Static(
                HEADING_LEVELS.iter().map(|s| s.to_string()).collect(),
            )),
            _ => None,
        };
        RelationHandler {
            generator: Generator::Builtin(relation),
            target_options,
        }
    }

    pub fn custom(generator: impl ClauseGenerator + 'static) -> Self {
        RelationHandler {
            generator: Generator::Custom(Arc::new(generator)),
            target_options: None,
        }
    }

    pub fn with_target_options(mut self, options: TargetOptions) -> Self {
        self.target_options = Some(options);
        self
    }

    pub fn builtin_relation(&self) -> Option<BuiltinRelation> {
        match self.generator {
            Generator::Builtin(relation) => Some(relation),
            Generator::Custom(_) => None,
        }
    }
}
