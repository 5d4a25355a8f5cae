use crate::ast::Definition;
use crate::parse_type_defs;

#[test]
fn types_and_directives_are_looked_up_separately() {
    let doc = parse_type_defs(
        "directive @Thing on OBJECT\ntype Thing { a: Int }\nschema { query: Thing }",
        None,
    ).expect("parse error");

    assert!(matches!(doc.type_def("Thing"), Some(Definition::Object(_))));
    assert_eq!(doc.directive_def("Thing").map(|node| node.name.as_str()), Some("Thing"));
    assert!(doc.type_def("Missing").is_none());
    assert!(doc.directive_def("Missing").is_none());
}

#[test]
fn schema_definitions_are_unnamed() {
    let doc = parse_type_defs("schema { query: Query }", None).expect("parse error");

    assert_eq!(doc.definitions.len(), 1);
    assert_eq!(doc.definitions[0].name(), None);
    assert!(doc.definitions[0].loc().is_some());
}
