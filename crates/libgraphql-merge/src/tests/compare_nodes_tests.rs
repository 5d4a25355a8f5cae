use crate::ast::FieldDefinition;
use crate::ast::Type;
use crate::compare_nodes;
use crate::parse_type_defs;
use crate::sort_nodes;
use crate::NamedNode;
use std::cmp::Ordering;

fn field(name: &str) -> FieldDefinition {
    FieldDefinition::new(name, Type::NamedType("Int".to_string()))
}

#[test]
fn same_kind_nodes_order_by_name() {
    assert_eq!(compare_nodes(&field("a"), &field("b")), Ordering::Less);
    assert_eq!(compare_nodes(&field("b"), &field("a")), Ordering::Greater);
    assert_eq!(compare_nodes(&field("a"), &field("a")), Ordering::Equal);
}

#[test]
fn definitions_order_by_kind_then_name() {
    let mut definitions = parse_type_defs(
        "type B { a: Int }\nenum Z { X }\nextend type A { a: Int }\ntype A { a: Int }",
        None,
    ).expect("parse error").definitions;

    sort_nodes(&mut definitions);

    let order: Vec<(String, &str)> =
        definitions.iter()
            .map(|def| (def.node_kind().to_string(), def.node_name()))
            .collect();
    assert_eq!(order, vec![
        ("EnumTypeDefinition".to_string(), "Z"),
        ("ObjectTypeDefinition".to_string(), "A"),
        ("ObjectTypeDefinition".to_string(), "B"),
        ("ObjectTypeExtension".to_string(), "A"),
    ]);
}

#[test]
fn sorting_is_stable() {
    let mut described = field("a");
    described.description = Some("first".to_string());
    let mut fields = vec![field("b"), described, field("a")];

    sort_nodes(&mut fields);

    assert_eq!(fields[0].description.as_deref(), Some("first"));
    assert_eq!(fields[1].description, None);
    assert_eq!(fields[2].name, "b");
}
