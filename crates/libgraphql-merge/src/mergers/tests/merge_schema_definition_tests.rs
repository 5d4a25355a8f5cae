use crate::mergers::merge_schema_definition;
use crate::mergers::tests::test_utils::parse_schema_def;
use crate::MergeConfig;
use crate::MergeError;

type Result<T> = std::result::Result<T, MergeError>;

#[test]
fn root_types_from_both_sides_combine() -> Result<()> {
    let existing = parse_schema_def("schema { query: Query }");
    let incoming = parse_schema_def("schema { query: Query mutation: Mutation }");

    let merged = merge_schema_definition(incoming, Some(&existing), &MergeConfig::default())?;

    assert_eq!(merged.query.map(|root| root.name).as_deref(), Some("Query"));
    assert_eq!(merged.mutation.map(|root| root.name).as_deref(), Some("Mutation"));
    assert!(merged.subscription.is_none());
    Ok(())
}

#[test]
fn different_roots_for_one_operation_conflict() {
    let existing = parse_schema_def("schema { query: Query }");
    let incoming = parse_schema_def("schema { query: RootQuery }");

    let err = merge_schema_definition(incoming, Some(&existing), &MergeConfig::default())
        .expect_err("merge should fail");

    assert_eq!(
        err.to_string(),
        "Unable to merge GraphQL schema definition \"schema\": conflicting \
        `query` root operation types: \"Query\" and \"RootQuery\"",
    );
}
