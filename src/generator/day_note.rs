//! Day-note placeholder handling
//!
//! A target of `{date}` (any case, optionally padded with whitespace) stands for
//! "any day-note page". Relations whose target is a page title swap their
//! literal title match for a regex match on the title.
use lazy_static::lazy_static;
use regex::Regex;

use crate::clause::{Clause, Term};

/// `(January|...|December) [0-3]?[0-9](st|nd|rd|th), [0-9][0-9][0-9][0-9]`
pub const DEFAULT_DAY_NOTE_PATTERN: &str = "(January|February|March|April|May|June|July|August|September|October|November|December) [0-3]?[0-9](st|nd|rd|th), [0-9][0-9][0-9][0-9]";

/// Variable the compiled day-note regex is bound to.
pub const DATE_REGEX_VARIABLE: &str = "date-regex";

lazy_static! {
    static ref DATE_PLACEHOLDER: Regex = Regex::new(r"(?i)^\s*\{date\}\s*$").unwrap();
}

pub fn is_date_placeholder(target: &str) -> bool {
    DATE_PLACEHOLDER.is_match(target)
}

/// `[node :node/title node-Title]`, bind the day-note regex, then `re-find` it.
pub fn day_note_title_clauses(node: &str, day_note_pattern: &str) -> Vec<Clause> {
    let title = format!("{}-Title", node);
    vec![
        Clause::pattern(Term::variable(node), ":node/title", Term::variable(&title)),
        Clause::bind(
            "re-pattern",
            vec![Term::string(day_note_pattern)],
            DATE_REGEX_VARIABLE,
        ),
        Clause::predicate(
            "re-find",
            vec![Term::variable(DATE_REGEX_VARIABLE), Term::variable(title)],
        ),
    ]
}
