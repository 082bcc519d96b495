use super::{Binding, Clause, Term};

/// Render a clause tree as Datalog `:where` text.
pub trait ToDatalog {
    fn to_datalog(&self) -> String;
}

impl ToDatalog for Term {
    fn to_datalog(&self) -> String {
        match self {
            Term::Variable(name) => format!("?{}", encode_variable(name)),
            Term::Constant(value) => value.clone(),
        }
    }
}

impl ToDatalog for Binding {
    fn to_datalog(&self) -> String {
        match self {
            Binding::Scalar { variable } => variable.to_datalog(),
        }
    }
}

impl ToDatalog for Clause {
    fn to_datalog(&self) -> String {
        match self {
            Clause::Pattern { arguments } => format!("[{}]", join(arguments)),
            Clause::Or { clauses } => format!("(or {})", clauses.to_datalog()),
            Clause::Not { clauses } => format!("(not {})", clauses.to_datalog()),
            Clause::FunctionBinding {
                function,
                arguments,
                binding,
            } => format!(
                "[({} {}) {}]",
                function,
                join(arguments),
                binding.to_datalog()
            ),
            Clause::PredicateTest {
                predicate,
                arguments,
            } => format!("[({} {})]", predicate, join(arguments)),
        }
    }
}

impl ToDatalog for [Clause] {
    fn to_datalog(&self) -> String {
        self.iter()
            .map(|c| c.to_datalog())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl ToDatalog for Vec<Clause> {
    fn to_datalog(&self) -> String {
        self.as_slice().to_datalog()
    }
}

fn join(terms: &[Term]) -> String {
    terms
        .iter()
        .map(|t| t.to_datalog())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Variable names are free text upstream. Symbol-safe characters pass through,
/// `_` doubles and anything else becomes `_u<hex>_`, so distinct names never
/// render to the same symbol. The empty name renders as a lone `_`, which no
/// other name can produce.
fn encode_variable(name: &str) -> String {
    if name.is_empty() {
        return "_".to_string();
    }
    let mut encoded = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' => encoded.push(c),
            '_' => encoded.push_str("__"),
            other => encoded.push_str(&format!("_u{:x}_", other as u32)),
        }
    }
    encoded
}
