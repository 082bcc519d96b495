//! Clause templates for the built-in relations
use super::day_note::{day_note_title_clauses, is_date_placeholder};
use super::{BuiltinRelation, GenerateArgs, GenerateError, GeneratorContext};
use crate::clause::{Clause, Term};

fn var(name: &str) -> Term {
    Term::variable(name)
}

/// `<node>-<suffix>`, the naming scheme for helper variables.
fn helper(node: &str, suffix: &str) -> Term {
    Term::variable(format!("{}-{}", node, suffix))
}

fn edge(from: &str, attribute: &str, to: &str) -> Clause {
    Clause::pattern(var(from), attribute, var(to))
}

pub(super) fn generate(
    relation: BuiltinRelation,
    args: &GenerateArgs<'_>,
    ctx: &GeneratorContext<'_>,
) -> Result<Vec<Clause>, GenerateError> {
    let GenerateArgs { source, target, .. } = *args;
    let normalized = |text: &str| Term::string(&ctx.host.titles.normalize(text));

    let clauses = match relation {
        BuiltinRelation::SelfUid => {
            vec![Clause::pattern(var(source), ":block/uid", Term::string(source))]
        }
        BuiltinRelation::References => vec![edge(source, ":block/refs", target)],
        BuiltinRelation::IsReferencedBy => vec![edge(target, ":block/refs", source)],
        BuiltinRelation::IsInPage => vec![edge(source, ":block/page", target)],
        BuiltinRelation::HasTitle => {
            if is_date_placeholder(target) {
                day_note_title_clauses(source, ctx.day_note_pattern)
            } else {
                vec![Clause::pattern(var(source), ":node/title", normalized(target))]
            }
        }
        BuiltinRelation::WithTextInTitle => vec![
            Clause::pattern(var(source), ":node/title", helper(source, "Title")),
            Clause::predicate(
                "clojure.string/includes?",
                vec![helper(source, "Title"), normalized(target)],
            ),
        ],
        BuiltinRelation::HasAttribute => vec![
            Clause::pattern(helper(target, "Attribute"), ":node/title", Term::string(target)),
            Clause::pattern(var(target), ":block/refs", helper(target, "Attribute")),
            edge(target, ":block/parents", source),
        ],
        BuiltinRelation::HasChild => vec![edge(source, ":block/children", target)],
        BuiltinRelation::HasParent => vec![edge(target, ":block/children", source)],
        BuiltinRelation::HasAncestor => vec![edge(source, ":block/parents", target)],
        BuiltinRelation::HasDescendant => vec![edge(target, ":block/parents", source)],
        BuiltinRelation::WithText => vec![
            Clause::or(vec![
                Clause::pattern(var(source), ":block/string", helper(source, "String")),
                Clause::pattern(var(source), ":node/title", helper(source, "String")),
            ]),
            Clause::predicate(
                "clojure.string/includes?",
                vec![helper(source, "String"), normalized(target)],
            ),
        ],
        BuiltinRelation::CreatedBy => user_clauses(source, ":create/user", normalized(target)),
        BuiltinRelation::EditedBy => user_clauses(source, ":edit/user", normalized(target)),
        BuiltinRelation::ReferencesTitle => {
            titled_target(edge(source, ":block/refs", target), target, normalized(target), ctx)
        }
        BuiltinRelation::HasHeading => {
            vec![Clause::pattern(var(source), ":block/heading", heading_level(target))]
        }
        BuiltinRelation::IsInPageWithTitle => {
            titled_target(edge(source, ":block/page", target), target, normalized(target), ctx)
        }
        BuiltinRelation::CreatedAfter => {
            time_clauses(source, ":create/time", "CreateTime", "<", target, ctx)?
        }
        BuiltinRelation::CreatedBefore => {
            time_clauses(source, ":create/time", "CreateTime", ">", target, ctx)?
        }
        BuiltinRelation::EditedAfter => {
            time_clauses(source, ":edit/time", "EditTime", "<", target, ctx)?
        }
        BuiltinRelation::EditedBefore => {
            time_clauses(source, ":edit/time", "EditTime", ">", target, ctx)?
        }
    };
    Ok(clauses)
}

/// Join through the user entity to its display name.
fn user_clauses(source: &str, attribute: &str, display_name: Term) -> Vec<Clause> {
    vec![
        Clause::pattern(var(source), attribute, helper(source, "User")),
        Clause::pattern(helper(source, "User"), ":user/display-name", display_name),
    ]
}

/// Link clause followed by a title check on the target page.
fn titled_target(link: Clause, target: &str, title: Term, ctx: &GeneratorContext<'_>) -> Vec<Clause> {
    let mut clauses = vec![link];
    if is_date_placeholder(target) {
        clauses.extend(day_note_title_clauses(target, ctx.day_note_pattern));
    } else {
        clauses.push(Clause::pattern(var(target), ":node/title", title));
    }
    clauses
}

/// Heading levels are numeric in the store; anything else stays a string.
fn heading_level(target: &str) -> Term {
    match target.trim().parse::<i64>() {
        Ok(level) => Term::number(level),
        Err(_) => Term::string(target),
    }
}

/// Bind the timestamp, then compare `(op <parsed instant> <timestamp>)`.
fn time_clauses(
    source: &str,
    attribute: &str,
    suffix: &str,
    op: &str,
    target: &str,
    ctx: &GeneratorContext<'_>,
) -> Result<Vec<Clause>, GenerateError> {
    let instant = ctx.host.dates.parse(target)?;
    Ok(vec![
        Clause::pattern(var(source), attribute, helper(source, suffix)),
        Clause::predicate(
            op,
            vec![Term::number(instant.timestamp_millis()), helper(source, suffix)],
        ),
    ])
}
