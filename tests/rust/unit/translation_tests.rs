use std::sync::Arc;

use chrono::{TimeZone, Utc};
use condition_datalog::{
    clause::unbound_variables,
    generator::BuiltinRelation,
    host::{Host, NaturalDateParser, StaticCatalog, VerbatimTitles},
    Clause, Condition, RelationRegistry, Term, ToDatalog, Translator,
};

fn translator() -> Translator {
    let host = Host::new(
        Arc::new(VerbatimTitles),
        Arc::new(NaturalDateParser::with_reference(
            Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap(),
        )),
        Arc::new(StaticCatalog::new(
            vec!["Inbox".to_string(), "March 14th, 2024".to_string()],
            vec!["Ada".to_string(), "Grace".to_string()],
        )),
    );
    Translator::new(Arc::new(RelationRegistry::with_builtins()), host)
}

#[test]
fn test_has_child_example() {
    let clauses = translator()
        .condition_to_datalog(&Condition::new("A", "has child", "B"))
        .unwrap();
    assert_eq!(
        clauses,
        vec![Clause::pattern(
            Term::variable("A"),
            ":block/children",
            Term::variable("B")
        )]
    );
}

#[test]
fn test_created_after_example() {
    let clauses = translator()
        .condition_to_datalog(&Condition::new("A", "created after", "yesterday"))
        .unwrap();
    let yesterday = Utc
        .with_ymd_and_hms(2024, 3, 14, 0, 0, 0)
        .unwrap()
        .timestamp_millis();
    assert_eq!(
        clauses,
        vec![
            Clause::pattern(
                Term::variable("A"),
                ":create/time",
                Term::variable("A-CreateTime")
            ),
            Clause::predicate(
                "<",
                vec![Term::number(yesterday), Term::variable("A-CreateTime")]
            ),
        ]
    );
}

#[test]
fn test_negated_heading_example() {
    let clauses = translator()
        .condition_to_datalog(&Condition::new("A", "has heading", "2").negated())
        .unwrap();
    assert_eq!(
        clauses,
        vec![Clause::not(vec![Clause::pattern(
            Term::variable("A"),
            ":block/heading",
            Term::number(2)
        )])]
    );
    assert_eq!(clauses.to_datalog(), "(not [?A :block/heading 2])");
}

#[test]
fn test_date_placeholder_uses_regex_branch() {
    let t = translator();
    for target in ["{date}", "  {Date}  "] {
        let clauses = t
            .condition_to_datalog(&Condition::new("P", "has title", target))
            .unwrap();
        assert!(matches!(clauses[1], Clause::FunctionBinding { .. }));
        assert!(matches!(clauses[2], Clause::PredicateTest { .. }));
        assert!(!clauses.iter().any(|c| matches!(
            c,
            Clause::Pattern { arguments } if arguments[2].as_variable().is_none()
        )));
    }

    let literal = t
        .condition_to_datalog(&Condition::new("P", "has title", "{date} notes"))
        .unwrap();
    assert_eq!(
        literal,
        vec![Clause::pattern(
            Term::variable("P"),
            ":node/title",
            Term::string("{date} notes")
        )]
    );
}

#[test]
fn test_fuzzy_relation_text() {
    let clauses = translator()
        .condition_to_datalog(&Condition::new("A", "HAS CHILD", "B"))
        .unwrap();
    assert_eq!(clauses.to_datalog(), "[?A :block/children ?B]");
}

#[test]
fn test_titles_with_quotes_are_escaped() {
    let clauses = translator()
        .condition_to_datalog(&Condition::new("A", "with text", r#"say "hi""#))
        .unwrap();
    assert_eq!(
        clauses.to_datalog(),
        r#"(or [?A :block/string ?A-String] [?A :node/title ?A-String]) [(clojure.string/includes? ?A-String "say \"hi\"")]"#
    );
}

#[test]
fn test_json_output_shape() {
    let clauses = translator()
        .condition_to_datalog(&Condition::new("A", "references", "B").negated())
        .unwrap();
    let json = serde_json::to_value(&clauses).unwrap();
    assert_eq!(json[0]["type"], "not-clause");
    assert_eq!(json[0]["clauses"][0]["type"], "data-pattern");
    assert_eq!(json[0]["clauses"][0]["arguments"][1]["value"], ":block/refs");
}

#[test]
fn test_every_builtin_binds_before_use() {
    let t = translator();
    for relation in BuiltinRelation::ALL {
        let target = if relation.name().ends_with("after") || relation.name().ends_with("before")
        {
            "2024-01-01"
        } else {
            "B"
        };
        let clauses = t
            .condition_to_datalog(&Condition::new("A", relation.name(), target))
            .unwrap();
        assert!(!clauses.is_empty(), "{} produced no clauses", relation);
        assert!(
            unbound_variables(&clauses, &["A", target]).is_empty(),
            "{} references a variable before binding it",
            relation
        );
    }
}

#[test]
fn test_target_options_from_catalog() {
    let t = translator();
    assert_eq!(
        t.target_options("A", "references title").unwrap(),
        vec!["Inbox", "March 14th, 2024"]
    );
    assert_eq!(t.target_options("A", "created by").unwrap(), vec!["Ada", "Grace"]);
    assert!(t.target_options("A", "unknown").unwrap().is_empty());
}

#[test]
fn test_rendered_variables_do_not_collide() {
    let t = translator();
    let spaced = t
        .condition_to_datalog(&Condition::new("a b", "references", "ab"))
        .unwrap();
    assert_eq!(spaced.to_datalog(), "[?a_u20_b :block/refs ?ab]");

    let braced = t
        .condition_to_datalog(&Condition::new("date", "is in page with title", "{date}"))
        .unwrap();
    assert!(braced
        .to_datalog()
        .starts_with("[?date :block/page ?_u7b_date_u7d_]"));

    let unnamed = t
        .condition_to_datalog(&Condition::new("", "has child", "B"))
        .unwrap();
    assert_eq!(unnamed.to_datalog(), "[?_ :block/children ?B]");
}
