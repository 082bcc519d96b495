//! Condition translation
//!
//! A [`Condition`] goes through three steps:
//!
//! 1. **Resolve** the relation text against the registry (exact, then fuzzy).
//! 2. **Generate** clauses with the resolved handler. An unresolved relation
//!    yields no clauses; it is not an error.
//! 3. **Negate** when requested: a non-empty sequence is wrapped in a single
//!    `not` clause, an empty one is returned as is.
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clause::Clause;
use crate::config::TranslatorConfig;
use crate::generator::{BuiltinRelation, GenerateArgs, GeneratorContext, DEFAULT_DAY_NOTE_PATTERN};
use crate::host::Host;
use crate::relation::RelationRegistry;

mod errors;

pub use errors::TranslateError;

/// One user-authored condition row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Logic variable the condition constrains
    pub source: String,
    /// Relation text as typed; need not match a key exactly
    pub relation: String,
    /// Logic variable or literal, depending on the relation
    pub target: String,
    /// Wrap the generated clauses in `not`
    #[serde(default, rename = "not")]
    pub negate: bool,
    /// Identifier of the condition row
    #[serde(default)]
    pub uid: String,
}

impl Condition {
    pub fn new(
        source: impl Into<String>,
        relation: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Condition {
            source: source.into(),
            relation: relation.into(),
            target: target.into(),
            negate: false,
            uid: String::new(),
        }
    }

    pub fn negated(mut self) -> Self {
        self.negate = true;
        self
    }
}

/// Translates conditions into clause sequences against a shared registry.
#[derive(Debug, Clone)]
pub struct Translator {
    registry: Arc<RelationRegistry>,
    host: Host,
    day_note_pattern: String,
}

impl Translator {
    pub fn new(registry: Arc<RelationRegistry>, host: Host) -> Self {
        Translator {
            registry,
            host,
            day_note_pattern: DEFAULT_DAY_NOTE_PATTERN.to_string(),
        }
    }

    /// Built-in relations minus `disabled_relations`, with the configured day-note pattern.
    pub fn from_config(config: &TranslatorConfig, host: Host) -> Self {
        let registry = RelationRegistry::with_builtins();
        for name in &config.disabled_relations {
            match BuiltinRelation::from_name(name) {
                Some(relation) => {
                    registry.unregister(relation.name());
                    log::debug!("Disabled built-in relation '{}'", relation);
                }
                None => log::warn!("Cannot disable unknown relation '{}'", name),
            }
        }
        Translator {
            registry: Arc::new(registry),
            host,
            day_note_pattern: config.day_note_pattern.clone(),
        }
    }

    pub fn registry(&self) -> &Arc<RelationRegistry> {
        &self.registry
    }

    /// Resolve → Generate → Negate for one condition.
    pub fn condition_to_datalog(&self, condition: &Condition) -> Result<Vec<Clause>, TranslateError> {
        let Some(resolved) = self.registry.resolve(&condition.relation) else {
            return Ok(Vec::new());
        };

        let args = GenerateArgs {
            source: &condition.source,
            target: &condition.target,
            uid: &condition.uid,
        };
        let ctx = GeneratorContext {
            host: &self.host,
            day_note_pattern: &self.day_note_pattern,
        };
        let clauses = resolved
            .handler
            .generator
            .generate(&args, &ctx)
            .map_err(|source| TranslateError::Generation {
                relation: resolved.key.clone(),
                source,
            })?;

        if condition.negate && !clauses.is_empty() {
            log::debug!("Negating {} clause(s) for '{}'", clauses.len(), resolved.key);
            return Ok(vec![Clause::not(clauses)]);
        }
        Ok(clauses)
    }

    /// Translate several conditions and concatenate their clauses in order.
    pub fn conditions_to_datalog(
        &self,
        conditions: &[Condition],
    ) -> Result<Vec<Clause>, TranslateError> {
        let mut clauses = Vec::new();
        for condition in conditions {
            clauses.extend(self.condition_to_datalog(condition)?);
        }
        Ok(clauses)
    }

    /// Suggested target values for `relation` (exact key lookup only).
    pub fn target_options(&self, source: &str, relation: &str) -> Result<Vec<String>, TranslateError> {
        let Some(options) = self
            .registry
            .get(relation)
            .and_then(|handler| handler.target_options)
        else {
            return Ok(Vec::new());
        };
        options
            .resolve(source, &self.host)
            .map_err(|source| TranslateError::TargetOptions {
                relation: relation.to_string(),
                source,
            })
    }

    pub fn labels(&self) -> Vec<String> {
        self.registry.list_labels()
    }
}
