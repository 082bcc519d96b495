//! Datalog clause model
//!
//! The clause types mirror what the downstream query engine consumes: pattern
//! triples, `or`/`not` groups, function bindings and predicate tests. Values are
//! only ever built through the constructors on [`Term`], which quote and escape
//! string constants in one place.
use serde::{Deserialize, Serialize};

mod binding_check;
mod escape;
mod to_datalog;

pub use binding_check::unbound_variables;
pub use escape::escape_string;
pub use to_datalog::ToDatalog;

/// A single argument of a clause: a logic variable or an already-rendered constant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Term {
    Variable(String),
    Constant(String),
}

impl Term {
    pub fn variable(name: impl Into<String>) -> Self {
        Term::Variable(name.into())
    }

    /// Attribute keyword such as `:block/refs`, emitted verbatim.
    pub fn keyword(keyword: &str) -> Self {
        Term::Constant(keyword.to_string())
    }

    /// String literal, wrapped in double quotes with special characters escaped.
    pub fn string(value: &str) -> Self {
        Term::Constant(format!("\"{}\"", escape_string(value)))
    }

    pub fn number(value: i64) -> Self {
        Term::Constant(value.to_string())
    }

    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Term::Variable(name) => Some(name),
            Term::Constant(_) => None,
        }
    }
}

/// How a function expression binds its result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Binding {
    #[serde(rename = "bind-scalar")]
    Scalar { variable: Term },
}

impl Binding {
    pub fn scalar(variable: impl Into<String>) -> Self {
        Binding::Scalar {
            variable: Term::variable(variable),
        }
    }

    pub fn variable(&self) -> &str {
        match self {
            Binding::Scalar { variable } => match variable {
                Term::Variable(name) | Term::Constant(name) => name,
            },
        }
    }
}

/// One emittable query fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Clause {
    /// `[entity attribute value]`
    #[serde(rename = "data-pattern")]
    Pattern { arguments: [Term; 3] },

    /// Satisfied if any branch matches.
    #[serde(rename = "or-clause")]
    Or { clauses: Vec<Clause> },

    /// Satisfied if the enclosed clauses do not match.
    #[serde(rename = "not-clause")]
    Not { clauses: Vec<Clause> },

    /// Calls a pure function and binds its result to a fresh variable.
    #[serde(rename = "fn-expr")]
    FunctionBinding {
        #[serde(rename = "fn")]
        function: String,
        arguments: Vec<Term>,
        binding: Binding,
    },

    /// Boolean filter over bound variables and constants.
    #[serde(rename = "pred-expr")]
    PredicateTest {
        #[serde(rename = "pred")]
        predicate: String,
        arguments: Vec<Term>,
    },
}

impl Clause {
    pub fn pattern(entity: Term, attribute: &str, value: Term) -> Self {
        Clause::Pattern {
            arguments: [entity, Term::keyword(attribute), value],
        }
    }

    pub fn or(clauses: Vec<Clause>) -> Self {
        Clause::Or { clauses }
    }

    pub fn not(clauses: Vec<Clause>) -> Self {
        Clause::Not { clauses }
    }

    pub fn bind(function: &str, arguments: Vec<Term>, variable: impl Into<String>) -> Self {
        Clause::FunctionBinding {
            function: function.to_string(),
            arguments,
            binding: Binding::scalar(variable),
        }
    }

    pub fn predicate(predicate: &str, arguments: Vec<Term>) -> Self {
        Clause::PredicateTest {
            predicate: predicate.to_string(),
            arguments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pattern_json_shape() {
        let clause = Clause::pattern(Term::variable("A"), ":block/refs", Term::variable("B"));
        let value = serde_json::to_value(&clause).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "data-pattern",
                "arguments": [
                    {"type": "variable", "value": "A"},
                    {"type": "constant", "value": ":block/refs"},
                    {"type": "variable", "value": "B"}
                ]
            })
        );
    }

    #[test]
    fn test_function_binding_json_shape() {
        let clause = Clause::bind("re-pattern", vec![Term::string("a|b")], "date-regex");
        let value = serde_json::to_value(&clause).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "fn-expr",
                "fn": "re-pattern",
                "arguments": [{"type": "constant", "value": "\"a|b\""}],
                "binding": {
                    "type": "bind-scalar",
                    "variable": {"type": "variable", "value": "date-regex"}
                }
            })
        );
    }

    #[test]
    fn test_predicate_and_groups_json_shape() {
        let clause = Clause::not(vec![Clause::or(vec![Clause::predicate(
            "<",
            vec![Term::number(5), Term::variable("x")],
        )])]);
        let value = serde_json::to_value(&clause).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "not-clause",
                "clauses": [{
                    "type": "or-clause",
                    "clauses": [{
                        "type": "pred-expr",
                        "pred": "<",
                        "arguments": [
                            {"type": "constant", "value": "5"},
                            {"type": "variable", "value": "x"}
                        ]
                    }]
                }]
            })
        );
    }

    #[test]
    fn test_clauses_deserialize_from_engine_shape() {
        let raw = r#"{"type":"data-pattern","arguments":[
            {"type":"variable","value":"A"},
            {"type":"constant","value":":block/heading"},
            {"type":"constant","value":"2"}]}"#;
        let clause: Clause = serde_json::from_str(raw).unwrap();
        assert_eq!(
            clause,
            Clause::pattern(Term::variable("A"), ":block/heading", Term::number(2))
        );
    }

    #[test]
    fn test_string_constant_is_quoted_and_escaped() {
        assert_eq!(
            Term::string(r#"say "hi""#),
            Term::Constant(r#""say \"hi\"""#.to_string())
        );
        assert_eq!(Term::keyword(":node/title").as_variable(), None);
        assert_eq!(Term::variable("x").as_variable(), Some("x"));
    }
}
