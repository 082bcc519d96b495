//! Clause generators
//!
//! Every built-in relation maps a (source, target) pair onto a fixed clause
//! template over the block/page schema. Extensions plug in their own
//! generators through [`ClauseGenerator`].
use crate::clause::Clause;
use crate::host::Host;

mod builtins;
pub mod day_note;
mod errors;

pub use day_note::{is_date_placeholder, DATE_REGEX_VARIABLE, DEFAULT_DAY_NOTE_PATTERN};
pub use errors::GenerateError;

/// Inputs of one generator call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateArgs<'a> {
    /// Logic variable of the condition's subject.
    pub source: &'a str,
    /// Logic variable or literal, depending on the relation.
    pub target: &'a str,
    /// Identifier of the condition row; unused by built-ins.
    pub uid: &'a str,
}

impl<'a> GenerateArgs<'a> {
    pub fn new(source: &'a str, target: &'a str) -> Self {
        GenerateArgs {
            source,
            target,
            uid: "",
        }
    }
}

/// Services and settings available while generating clauses.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorContext<'a> {
    pub host: &'a Host,
    pub day_note_pattern: &'a str,
}

impl<'a> GeneratorContext<'a> {
    pub fn new(host: &'a Host) -> Self {
        GeneratorContext {
            host,
            day_note_pattern: DEFAULT_DAY_NOTE_PATTERN,
        }
    }
}

/// Generator for a dynamically registered relation.
///
/// Must be a pure function of its inputs; host services may be read.
pub trait ClauseGenerator: Send + Sync {
    fn generate(
        &self,
        args: &GenerateArgs<'_>,
        ctx: &GeneratorContext<'_>,
    ) -> Result<Vec<Clause>, GenerateError>;
}

impl<F> ClauseGenerator for F
where
    F: Fn(&GenerateArgs<'_>, &GeneratorContext<'_>) -> Result<Vec<Clause>, GenerateError>
        + Send
        + Sync,
{
    fn generate(
        &self,
        args: &GenerateArgs<'_>,
        ctx: &GeneratorContext<'_>,
    ) -> Result<Vec<Clause>, GenerateError> {
        self(args, ctx)
    }
}

/// Relations known at startup, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinRelation {
    /// Source is the entity whose uid is the source name itself.
    SelfUid,
    References,
    IsReferencedBy,
    IsInPage,
    HasTitle,
    WithTextInTitle,
    HasAttribute,
    HasChild,
    HasParent,
    HasAncestor,
    HasDescendant,
    WithText,
    CreatedBy,
    EditedBy,
    ReferencesTitle,
    HasHeading,
    IsInPageWithTitle,
    CreatedAfter,
    CreatedBefore,
    EditedAfter,
    EditedBefore,
}

/// Name of the identity relation, hidden from label listings.
pub const SELF_RELATION: &str = "self";

impl BuiltinRelation {
    pub const ALL: [BuiltinRelation; 21] = [
        BuiltinRelation::SelfUid,
        BuiltinRelation::References,
        BuiltinRelation::IsReferencedBy,
        BuiltinRelation::IsInPage,
        BuiltinRelation::HasTitle,
        BuiltinRelation::WithTextInTitle,
        BuiltinRelation::HasAttribute,
        BuiltinRelation::HasChild,
        BuiltinRelation::HasParent,
        BuiltinRelation::HasAncestor,
        BuiltinRelation::HasDescendant,
        BuiltinRelation::WithText,
        BuiltinRelation::CreatedBy,
        BuiltinRelation::EditedBy,
        BuiltinRelation::ReferencesTitle,
        BuiltinRelation::HasHeading,
        BuiltinRelation::IsInPageWithTitle,
        BuiltinRelation::CreatedAfter,
        BuiltinRelation::CreatedBefore,
        BuiltinRelation::EditedAfter,
        BuiltinRelation::EditedBefore,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BuiltinRelation::SelfUid => SELF_RELATION,
            BuiltinRelation::References => "references",
            BuiltinRelation::IsReferencedBy => "is referenced by",
            BuiltinRelation::IsInPage => "is in page",
            BuiltinRelation::HasTitle => "has title",
            BuiltinRelation::WithTextInTitle => "with text in title",
            BuiltinRelation::HasAttribute => "has attribute",
            BuiltinRelation::HasChild => "has child",
            BuiltinRelation::HasParent => "has parent",
            BuiltinRelation::HasAncestor => "has ancestor",
            BuiltinRelation::HasDescendant => "has descendant",
            BuiltinRelation::WithText => "with text",
            BuiltinRelation::CreatedBy => "created by",
            BuiltinRelation::EditedBy => "edited by",
            BuiltinRelation::ReferencesTitle => "references title",
            BuiltinRelation::HasHeading => "has heading",
            BuiltinRelation::IsInPageWithTitle => "is in page with title",
            BuiltinRelation::CreatedAfter => "created after",
            BuiltinRelation::CreatedBefore => "created before",
            BuiltinRelation::EditedAfter => "edited after",
            BuiltinRelation::EditedBefore => "edited before",
        }
    }

    /// Exact, case-sensitive lookup by relation name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.name() == name)
    }

    pub fn generate(
        &self,
        args: &GenerateArgs<'_>,
        ctx: &GeneratorContext<'_>,
    ) -> Result<Vec<Clause>, GenerateError> {
        builtins::generate(*self, args, ctx)
    }
}

impl std::fmt::Display for BuiltinRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
