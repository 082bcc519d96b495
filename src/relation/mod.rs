//! Relation registry, resolution and handler types
mod handler;
mod registry;
mod resolver;

pub use handler::{
    Generator, HostQuery, OptionProvider, RelationHandler, TargetOptions, HEADING_LEVELS,
};
pub use registry::RelationRegistry;
pub use resolver::{MatchKind, ResolvedRelation};
