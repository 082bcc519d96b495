/// Relation name resolution
///
/// Free-text relation names are resolved in two steps:
/// 1. Exact, case-sensitive key lookup.
/// 2. Fuzzy fallback: the first key (in registration order) that, compiled as a
///    case-insensitive regex, finds a match anywhere in the input.
///
/// The registered key is the pattern and the user's text is the subject, so a
/// key may spell out accepted variants with regex syntax (`has (child|kid)`).
use regex::{Regex, RegexBuilder};

use super::handler::RelationHandler;

/// How a relation name was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Fuzzy,
}

/// A successful resolution: the key that matched and a snapshot of its handler.
#[derive(Debug, Clone)]
pub struct ResolvedRelation {
    pub key: String,
    pub handler: RelationHandler,
    pub match_kind: MatchKind,
}

/// One registry slot: key, its compiled fuzzy pattern, and the handler.
#[derive(Debug, Clone)]
pub(super) struct RegistryEntry {
    pub key: String,
    pub pattern: Option<Regex>,
    pub handler: RelationHandler,
}

impl RegistryEntry {
    pub fn new(key: String, handler: RelationHandler) -> Self {
        let pattern = compile_key(&key);
        RegistryEntry {
            key,
            pattern,
            handler,
        }
    }
}

/// Compile a registered key for fuzzy matching; `None` if it is not a valid regex.
pub(super) fn compile_key(key: &str) -> Option<Regex> {
    match RegexBuilder::new(key).case_insensitive(true).build() {
        Ok(pattern) => Some(pattern),
        Err(e) => {
            log::warn!(
                "Relation key '{}' is not a valid pattern and will only match exactly: {}",
                key,
                e
            );
            None
        }
    }
}

pub(super) fn resolve_in(entries: &[RegistryEntry], relation: &str) -> Option<ResolvedRelation> {
    if let Some(entry) = entries.iter().find(|e| e.key == relation) {
        return Some(ResolvedRelation {
            key: entry.key.clone(),
            handler: entry.handler.clone(),
            match_kind: MatchKind::Exact,
        });
    }

    entries
        .iter()
        .find(|e| {
            e.pattern
                .as_ref()
                .is_some_and(|pattern| pattern.is_match(relation))
        })
        .map(|entry| ResolvedRelation {
            key: entry.key.clone(),
            handler: entry.handler.clone(),
            match_kind: MatchKind::Fuzzy,
        })
}
