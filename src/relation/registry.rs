/// Relation registry
///
/// Maps relation names to handlers. The registry is seeded with the built-in
/// relations at startup and grows or shrinks only through `register` /
/// `unregister`. All reads and writes go through a single `RwLock`, so one
/// registry can be shared as `Arc<RelationRegistry>` across threads.
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::handler::RelationHandler;
use super::resolver::{resolve_in, RegistryEntry, ResolvedRelation};
use crate::generator::{BuiltinRelation, SELF_RELATION};

#[derive(Debug, Default)]
pub struct RelationRegistry {
    /// Entries in registration order
    entries: RwLock<Vec<RegistryEntry>>,
}

impl RelationRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        RelationRegistry {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Create a registry seeded with every built-in relation
    pub fn with_builtins() -> Self {
        let entries = BuiltinRelation::ALL
            .iter()
            .map(|r| RegistryEntry::new(r.name().to_string(), RelationHandler::builtin(*r)))
            .collect();
        RelationRegistry {
            entries: RwLock::new(entries),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<RegistryEntry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<RegistryEntry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert or replace the handler for `name`
    ///
    /// Replacing keeps the entry's position in registration order.
    pub fn register(&self, name: impl Into<String>, handler: RelationHandler) {
        let name = name.into();
        let mut entries = self.write();
        if let Some(entry) = entries.iter_mut().find(|e| e.key == name) {
            log::info!("Replacing handler for relation '{}'", name);
            entry.handler = handler;
        } else {
            log::info!("Registering relation '{}'", name);
            entries.push(RegistryEntry::new(name, handler));
        }
    }

    /// Remove the handler for `name`; returns whether one was present
    pub fn unregister(&self, name: &str) -> bool {
        let mut entries = self.write();
        let before = entries.len();
        entries.retain(|e| e.key != name);
        let removed = entries.len() != before;
        if removed {
            log::info!("Unregistered relation '{}'", name);
        }
        removed
    }

    /// Relation names offered to users, longest first
    ///
    /// The identity relation is excluded. Labels of equal length keep their
    /// registration order.
    pub fn list_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self
            .read()
            .iter()
            .filter(|e| e.key != SELF_RELATION)
            .map(|e| e.key.clone())
            .collect();
        labels.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        labels
    }

    /// Resolve free-text relation `relation` to a handler (exact, then fuzzy)
    pub fn resolve(&self, relation: &str) -> Option<ResolvedRelation> {
        let resolved = resolve_in(&self.read(), relation);
        match &resolved {
            Some(r) => log::debug!(
                "Relation '{}' resolved to '{}' ({:?})",
                relation,
                r.key,
                r.match_kind
            ),
            None => log::debug!("Relation '{}' did not resolve", relation),
        }
        resolved
    }

    /// Exact lookup without fuzzy fallback
    pub fn get(&self, name: &str) -> Option<RelationHandler> {
        self.read()
            .iter()
            .find(|e| e.key == name)
            .map(|e| e.handler.clone())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read().iter().any(|e| e.key == name)
    }

    /// All keys in registration order, including the identity relation
    pub fn keys(&self) -> Vec<String> {
        self.read().iter().map(|e| e.key.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
