use crate::ast::FieldDefinition;
use crate::mergers::merge_fields;
use crate::mergers::print_type;
use crate::mergers::tests::test_utils::named;
use crate::mergers::tests::test_utils::names;
use crate::mergers::tests::test_utils::parse_fields;
use crate::MergeConfig;
use crate::MergeError;
use proptest::prelude::*;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, MergeError>;

#[test]
fn fields_keep_first_appearance_order() -> Result<()> {
    let existing = parse_fields("type T { a: Int b: Int }");
    let incoming = parse_fields("type T { b: Int c: Int }");

    let merged = merge_fields("T", &existing, &incoming, &MergeConfig::default())?;

    assert_eq!(names(&merged), vec!["a", "b", "c"]);
    Ok(())
}

#[test]
fn shared_field_keeps_existing_type_and_location() -> Result<()> {
    let existing = parse_fields("type T {\n  a: Int\n}");
    let incoming = parse_fields("type T { a: Int! }");

    let merged = merge_fields("T", &existing, &incoming, &MergeConfig::default())?;

    assert_eq!(merged.len(), 1);
    assert_eq!(print_type(&merged[0].field_type), "Int");
    assert_eq!(merged[0].loc, existing[0].loc);
    Ok(())
}

#[test]
fn missing_description_is_filled_from_incoming() -> Result<()> {
    let existing = parse_fields(r#"type T { a: Int "kept" b: Int }"#);
    let incoming = parse_fields(r#"type T { "filled" a: Int "ignored" b: Int }"#);

    let merged = merge_fields("T", &existing, &incoming, &MergeConfig::default())?;

    assert_eq!(merged[0].description.as_deref(), Some("filled"));
    assert_eq!(merged[1].description.as_deref(), Some("kept"));
    Ok(())
}

/// Field merging hands the collected arguments to `merge_arguments` as its
/// first list and the incoming ones as its second, so an argument declared
/// on both sides ends up with the incoming definition, listed first.
#[test]
fn incoming_argument_definitions_take_precedence() -> Result<()> {
    let existing = parse_fields(r#"type T { f("existing" x: Int, z: Int): Int }"#);
    let incoming = parse_fields(r#"type T { f("incoming" x: Int, y: String): Int }"#);

    let merged = merge_fields("T", &existing, &incoming, &MergeConfig::default())?;

    let args = &merged[0].arguments;
    assert_eq!(names(args), vec!["x", "y", "z"]);
    assert_eq!(args[0].description.as_deref(), Some("incoming"));
    Ok(())
}

#[test]
fn field_directives_are_merged() -> Result<()> {
    let existing = parse_fields("type T { a: Int @deprecated }");
    let incoming = parse_fields("type T { a: Int @deprecated @external }");

    let merged = merge_fields("T", &existing, &incoming, &MergeConfig::default())?;

    assert_eq!(names(&merged[0].directives), vec!["deprecated", "external"]);
    Ok(())
}

#[test]
fn different_named_types_conflict() {
    let existing = parse_fields("type T { a: Int }");
    let incoming = parse_fields("type T { a: [String] }");

    let err = merge_fields("T", &existing, &incoming, &MergeConfig::default())
        .expect_err("merge should fail");

    assert_eq!(
        err.to_string(),
        "Field \"a\" already defined with a different type. Declared as \
        \"Int\", but you tried to override with \"String\"",
    );
}

#[test]
fn different_list_structure_conflicts() {
    let existing = parse_fields("type T { a: [Int] }");
    let incoming = parse_fields("type T { a: Int }");

    let err = merge_fields("T", &existing, &incoming, &MergeConfig::default())
        .expect_err("merge should fail");

    assert_eq!(err.to_string(), "Field 'T.a' changed type from '[Int]' to 'Int'");
}

#[test]
fn nullability_change_conflicts_only_when_throwing() -> Result<()> {
    let existing = parse_fields("type T { a: [Int!] }");
    let incoming = parse_fields("type T { a: [Int]! }");

    merge_fields("T", &existing, &incoming, &MergeConfig::default())?;

    let err = merge_fields(
        "T",
        &existing,
        &incoming,
        &MergeConfig::new().with_throw_on_conflict(true),
    ).expect_err("merge should fail");
    assert_eq!(err.to_string(), "Field 'T.a' changed type from '[Int!]' to '[Int]!'");
    Ok(())
}

#[test]
fn ignored_conflicts_keep_existing_type() -> Result<()> {
    let existing = parse_fields("type T { a: Int }");
    let incoming = parse_fields("type T { a: String }");

    let merged = merge_fields(
        "T",
        &existing,
        &incoming,
        &MergeConfig::new().with_ignore_field_conflicts(true),
    )?;

    assert_eq!(print_type(&merged[0].field_type), "Int");
    Ok(())
}

#[test]
fn conflict_resolver_can_replace_the_base_field() -> Result<()> {
    let existing = parse_fields("type T { a(x: Int): Int }");
    let incoming = parse_fields(r#"type T { "new" a(y: Int): String }"#);
    let config = MergeConfig::new().with_on_field_conflict(|type_name, _existing, incoming| {
        assert_eq!(type_name, "T");
        Ok(Some(FieldDefinition::new(incoming.name.as_str(), incoming.field_type.clone())))
    });

    let merged = merge_fields("T", &existing, &incoming, &config)?;

    assert_eq!(print_type(&merged[0].field_type), "String");
    assert_eq!(names(&merged[0].arguments), vec!["y"]);
    assert_eq!(merged[0].description.as_deref(), Some("new"));
    Ok(())
}

#[test]
fn conflict_resolver_declining_falls_back_to_type_check() {
    let existing = parse_fields("type T { a: Int }");
    let incoming = parse_fields("type T { a: String }");
    let config = MergeConfig::new().with_on_field_conflict(|_, _, _| Ok(None));

    let err = merge_fields("T", &existing, &incoming, &config)
        .expect_err("merge should fail");

    assert!(matches!(err, MergeError::FieldTypeConflict { .. }));
}

#[test]
fn conflict_resolver_rejection_is_reported() {
    let existing = parse_fields("type T { a: Int }");
    let incoming = parse_fields("type T { a: Int }");
    let config = MergeConfig::new()
        .with_on_field_conflict(|_, _, _| Err("no duplicates allowed".to_string()));

    let err = merge_fields("T", &existing, &incoming, &config)
        .expect_err("merge should fail");

    assert_eq!(err, MergeError::FieldConflictRejected {
        type_name: "T".to_string(),
        field_name: "a".to_string(),
        reason: "no duplicates allowed".to_string(),
    });
}

#[test]
fn excluded_fields_are_dropped() -> Result<()> {
    let existing = parse_fields("type T { a: Int secret: String }");
    let incoming = parse_fields("type T { b: Int }");

    let merged = merge_fields(
        "T",
        &existing,
        &incoming,
        &MergeConfig::new().with_exclusion("T.secret"),
    )?;

    assert_eq!(names(&merged), vec!["a", "b"]);
    Ok(())
}

#[test]
fn sorted_result_does_not_depend_on_input_order() -> Result<()> {
    let config = MergeConfig::new().with_sort(true);
    let first = merge_fields(
        "T",
        &parse_fields("type T { c: Int a: Int }"),
        &parse_fields("type T { b: Int }"),
        &config,
    )?;
    let second = merge_fields(
        "T",
        &parse_fields("type T { b: Int a: Int }"),
        &parse_fields("type T { c: Int }"),
        &config,
    )?;

    assert_eq!(names(&first), vec!["a", "b", "c"]);
    assert_eq!(names(&first), names(&second));
    Ok(())
}

fn fields_named(field_names: &[String]) -> Vec<FieldDefinition> {
    field_names.iter()
        .map(|name| FieldDefinition::new(name.as_str(), named("String")))
        .collect()
}

proptest! {
    #[test]
    fn merged_field_names_are_unique(
        existing in prop::collection::vec("[a-f]", 0..8),
        incoming in prop::collection::vec("[a-f]", 0..8),
    ) {
        let merged = merge_fields(
            "T",
            &fields_named(&existing),
            &fields_named(&incoming),
            &MergeConfig::default(),
        ).expect("same-typed fields always merge");

        let merged_names = names(&merged);
        let unique: HashSet<&String> = merged_names.iter().collect();
        prop_assert_eq!(unique.len(), merged_names.len());

        let expected: HashSet<&String> = existing.iter().chain(incoming.iter()).collect();
        prop_assert_eq!(unique, expected);
    }

    #[test]
    fn merging_fields_with_themselves_is_a_no_op(
        field_names in prop::collection::hash_set("[a-z]{1,6}", 0..8),
    ) {
        let field_names: Vec<String> = field_names.into_iter().collect();
        let fields = fields_named(&field_names);

        let merged = merge_fields("T", &fields, &fields, &MergeConfig::default())
            .expect("identical fields always merge");

        prop_assert_eq!(merged, fields);
    }
}
