use crate::ast;
use crate::ast::DefinitionKind;
use crate::parse_type_defs;
use crate::print_type_defs;
use crate::ParseError;
use std::path::Path;
use std::path::PathBuf;

#[test]
fn positions_are_recorded_with_the_file() -> Result<(), ParseError> {
    let file = Path::new("schema/user.graphql");
    let doc = parse_type_defs("\ntype User {\n  id: ID!\n}\n", Some(file))?;

    let Some(ast::Definition::Object(user)) = doc.definitions.first() else {
        panic!("expected an object type");
    };
    assert_eq!(user.loc, Some(ast::SourceLocation {
        column: 1,
        file: Some(PathBuf::from("schema/user.graphql")),
        line: 2,
    }));
    assert_eq!(user.fields[0].loc.as_ref().map(|loc| loc.line), Some(3));
    Ok(())
}

#[test]
fn extensions_are_marked_as_such() -> Result<(), ParseError> {
    let doc = parse_type_defs(
        "extend type Query { a: Int }\nextend union U = A\nextend enum E { X }",
        None,
    )?;

    for def in &doc.definitions {
        let kind = match def {
            ast::Definition::Enum(node) => node.kind,
            ast::Definition::Object(node) => node.kind,
            ast::Definition::Union(node) => node.kind,
            other => panic!("unexpected definition {other:?}"),
        };
        assert_eq!(kind, DefinitionKind::Extension);
    }
    Ok(())
}

#[test]
fn syntax_errors_name_the_file() {
    let err = parse_type_defs("type {", Some(Path::new("broken.graphql")))
        .expect_err("parse should fail");

    assert_eq!(err.file, Some(PathBuf::from("broken.graphql")));
    assert!(err.to_string().starts_with(
        "Failed to parse GraphQL schema document `broken.graphql`: ",
    ));
}

#[test]
fn printed_documents_parse_back_to_the_same_nodes() -> Result<(), ParseError> {
    let source = r#"
        schema {
          query: Query
        }

        directive @key(fields: String!) on OBJECT | INTERFACE

        "The root"
        type Query implements Node @key(fields: "id") {
          id: ID!
          "Look things up"
          search(term: String = "x", limit: Int): [Result!]!
        }

        extend type Query {
          extra: Int @deprecated(reason: "no")
        }

        interface Node {
          id: ID!
        }

        union Result = Query | Other

        enum Color {
          RED
          GREEN @deprecated
        }

        scalar DateTime

        input Filter {
          name: String = "any"
        }
    "#;

    let parsed = parse_type_defs(source, None)?;
    let reparsed = parse_type_defs(print_type_defs(&parsed).as_str(), None)?;

    assert_eq!(strip_locations(parsed), strip_locations(reparsed));
    Ok(())
}

/// Printing re-flows the text, so only the structure is compared.
fn strip_locations(mut doc: ast::Document) -> ast::Document {
    fn strip_directives(directives: &mut [ast::DirectiveNode]) {
        directives.iter_mut().for_each(|directive| directive.loc = None);
    }
    fn strip_input_values(values: &mut [ast::InputValueDefinition]) {
        for value in values.iter_mut() {
            value.loc = None;
            strip_directives(&mut value.directives);
        }
    }
    fn strip_fields(fields: &mut [ast::FieldDefinition]) {
        for field in fields.iter_mut() {
            field.loc = None;
            strip_directives(&mut field.directives);
            strip_input_values(&mut field.arguments);
        }
    }

    for def in doc.definitions.iter_mut() {
        match def {
            ast::Definition::Directive(node) => {
                node.loc = None;
                strip_input_values(&mut node.arguments);
            },
            ast::Definition::Enum(node) => {
                node.loc = None;
                strip_directives(&mut node.directives);
                for value in node.values.iter_mut() {
                    value.loc = None;
                    strip_directives(&mut value.directives);
                }
            },
            ast::Definition::InputObject(node) => {
                node.loc = None;
                strip_directives(&mut node.directives);
                strip_input_values(&mut node.fields);
            },
            ast::Definition::Interface(node) => {
                node.loc = None;
                strip_directives(&mut node.directives);
                strip_fields(&mut node.fields);
            },
            ast::Definition::Object(node) => {
                node.loc = None;
                strip_directives(&mut node.directives);
                strip_fields(&mut node.fields);
            },
            ast::Definition::Scalar(node) => {
                node.loc = None;
                strip_directives(&mut node.directives);
            },
            ast::Definition::Schema(node) => {
                node.loc = None;
                strip_directives(&mut node.directives);
            },
            ast::Definition::Union(node) => {
                node.loc = None;
                strip_directives(&mut node.directives);
            },
        }
    }
    doc
}
