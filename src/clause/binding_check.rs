use std::collections::HashSet;

use super::{Clause, Term};

/// Collect variables that are referenced before anything introduces them.
///
/// `seeds` are variables bound by the caller (typically the condition's source
/// and target). Patterns introduce every variable they mention, a function
/// binding introduces its result variable, predicates and function arguments
/// only reference. An `or` group introduces what all of its branches introduce;
/// a `not` group introduces nothing outside itself.
pub fn unbound_variables(clauses: &[Clause], seeds: &[&str]) -> Vec<String> {
    let mut bound: HashSet<String> = seeds.iter().map(|s| s.to_string()).collect();
    let mut unbound = Vec::new();
    walk(clauses, &mut bound, &mut unbound);
    unbound
}

fn walk(clauses: &[Clause], bound: &mut HashSet<String>, unbound: &mut Vec<String>) {
    for clause in clauses {
        match clause {
            Clause::Pattern { arguments } => {
                for name in arguments.iter().filter_map(Term::as_variable) {
                    bound.insert(name.to_string());
                }
            }
            Clause::Or { clauses } => {
                let mut introduced: Option<HashSet<String>> = None;
                for branch in clauses {
                    let mut scope = bound.clone();
                    walk(std::slice::from_ref(branch), &mut scope, unbound);
                    introduced = Some(match introduced {
                        None => scope,
                        Some(acc) => acc.intersection(&scope).cloned().collect(),
                    });
                }
                if let Some(introduced) = introduced {
                    bound.extend(introduced);
                }
            }
            Clause::Not { clauses } => {
                let mut scope = bound.clone();
                walk(clauses, &mut scope, unbound);
            }
            Clause::FunctionBinding {
                arguments, binding, ..
            } => {
                check_references(arguments, bound, unbound);
                bound.insert(binding.variable().to_string());
            }
            Clause::PredicateTest { arguments, .. } => {
                check_references(arguments, bound, unbound);
            }
        }
    }
}

fn check_references(arguments: &[Term], bound: &HashSet<String>, unbound: &mut Vec<String>) {
    for name in arguments.iter().filter_map(Term::as_variable) {
        if !bound.contains(name) {
            unbound.push(name.to_string());
        }
    }
}
