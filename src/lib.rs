//! Condition Datalog - relation conditions to Datalog clauses
//!
//! This crate turns user-authored conditions such as "block A references page B"
//! or "block A created after yesterday" into clause sequences for a Datalog query
//! engine:
//! - Clause model with central quoting of constants
//! - Relation registry with exact and regex-based fuzzy resolution
//! - Built-in clause generators for the block/page schema
//! - Negation wrapping and target-option suggestions

pub mod clause;
pub mod config;
pub mod generator;
pub mod host;
pub mod relation;
pub mod translator;

pub use clause::{Clause, Term, ToDatalog};
pub use relation::{RelationHandler, RelationRegistry, TargetOptions};
pub use translator::{Condition, TranslateError, Translator};
