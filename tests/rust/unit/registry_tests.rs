use std::sync::Arc;
use std::thread;

use condition_datalog::{
    generator::{GenerateArgs, GenerateError, GeneratorContext},
    host::Host,
    relation::MatchKind,
    Clause, Condition, RelationHandler, RelationRegistry, TargetOptions, Term, Translator,
};

fn tagged(tag: &'static str) -> RelationHandler {
    RelationHandler::custom(
        move |args: &GenerateArgs<'_>, _: &GeneratorContext<'_>| -> Result<Vec<Clause>, GenerateError> {
            Ok(vec![Clause::pattern(
                Term::variable(args.source),
                ":tag",
                Term::string(tag),
            )])
        },
    )
}

fn generate(registry: &Arc<RelationRegistry>, relation: &str) -> Vec<Clause> {
    Translator::new(registry.clone(), Host::default())
        .condition_to_datalog(&Condition::new("A", relation, "B"))
        .unwrap()
}

#[test]
fn test_register_then_resolve_returns_handler() {
    let registry = Arc::new(RelationRegistry::with_builtins());
    registry.register("is tagged", tagged("first"));

    let resolved = registry.resolve("is tagged").unwrap();
    assert_eq!(resolved.key, "is tagged");
    assert_eq!(resolved.match_kind, MatchKind::Exact);
    assert_eq!(
        generate(&registry, "is tagged"),
        vec![Clause::pattern(Term::variable("A"), ":tag", Term::string("first"))]
    );

    // Last write wins
    registry.register("is tagged", tagged("second"));
    assert_eq!(
        generate(&registry, "is tagged"),
        vec![Clause::pattern(Term::variable("A"), ":tag", Term::string("second"))]
    );
}

#[test]
fn test_unregister_then_exact_lookup_fails() {
    let registry = Arc::new(RelationRegistry::with_builtins());
    registry.register("is tagged", tagged("x"));
    registry.unregister("is tagged");
    assert!(registry.get("is tagged").is_none());
    assert!(generate(&registry, "is tagged").is_empty());
}

#[test]
fn test_fuzzy_fallback_after_unregister() {
    let registry = Arc::new(RelationRegistry::with_builtins());
    registry.unregister("references title");
    // "references" is registered earlier and its pattern matches the longer text
    let resolved = registry.resolve("references title").unwrap();
    assert_eq!(resolved.key, "references");
    assert_eq!(resolved.match_kind, MatchKind::Fuzzy);
}

#[test]
fn test_regex_key_accepts_variants() {
    let registry = Arc::new(RelationRegistry::new());
    registry.register("^is (tagged|labelled)$", tagged("regex"));
    assert_eq!(generate(&registry, "Is Labelled").len(), 1);
    assert!(generate(&registry, "is tagged twice").is_empty());
}

#[test]
fn test_custom_static_options() {
    let registry = Arc::new(RelationRegistry::with_builtins());
    registry.register(
        "has status",
        tagged("status").with_target_options(TargetOptions::Static(vec![
            "todo".to_string(),
            "done".to_string(),
        ])),
    );
    let translator = Translator::new(registry, Host::default());
    assert_eq!(
        translator.target_options("A", "has status").unwrap(),
        vec!["todo", "done"]
    );
    assert_eq!(translator.labels()[0], "is in page with title");
}

#[test]
fn test_concurrent_register_and_resolve() {
    let registry = Arc::new(RelationRegistry::with_builtins());
    let writers: Vec<_> = (0..4)
        .map(|i| {
            let registry = registry.clone();
            thread::spawn(move || {
                for j in 0..50 {
                    let name = format!("custom {} {}", i, j);
                    registry.register(name.clone(), tagged("t"));
                    assert!(registry.resolve(&name).is_some());
                    registry.unregister(&name);
                }
            })
        })
        .collect();
    for writer in writers {
        writer.join().unwrap();
    }
    assert_eq!(registry.keys().len(), 21);
}
