use crate::ast;
use crate::ast::DefinitionKind;
use std::path::Path;

type GpDocument = graphql_parser::schema::Document<'static, String>;
type GpDirective = graphql_parser::query::Directive<'static, String>;
type GpEnumValue = graphql_parser::schema::EnumValue<'static, String>;
type GpField = graphql_parser::schema::Field<'static, String>;
type GpInputValue = graphql_parser::schema::InputValue<'static, String>;

/// Converts a parsed `graphql_parser` schema document into merge nodes.
///
/// `graphql_parser` keeps no positions for interface/union member names or
/// schema root types, so those [ast::NamedTypeRef]s carry no location.
pub fn from_graphql_parser_schema_ast(
    doc: &GpDocument,
    file: Option<&Path>,
) -> ast::Document {
    use graphql_parser::schema::Definition as GpDef;
    use graphql_parser::schema::TypeDefinition as GpTd;
    use graphql_parser::schema::TypeExtension as GpTe;

    let conv = Converter { file };
    let definitions = doc.definitions.iter().map(|def| match def {
        GpDef::SchemaDefinition(sd) => ast::Definition::Schema(
            ast::SchemaDefinitionNode {
                directives: conv.directives(&sd.directives),
                kind: DefinitionKind::Definition,
                loc: conv.loc(sd.position),
                mutation: sd.mutation.as_deref().map(ast::NamedTypeRef::new),
                query: sd.query.as_deref().map(ast::NamedTypeRef::new),
                subscription: sd.subscription.as_deref().map(ast::NamedTypeRef::new),
            },
        ),

        GpDef::DirectiveDefinition(dd) => ast::Definition::Directive(
            ast::DirectiveDefinitionNode {
                arguments: conv.input_values(&dd.arguments),
                description: dd.description.to_owned(),
                loc: conv.loc(dd.position),
                locations: dd.locations.to_owned(),
                name: dd.name.to_owned(),
                repeatable: dd.repeatable,
            },
        ),

        GpDef::TypeDefinition(GpTd::Enum(e)) => ast::Definition::Enum(
            ast::EnumTypeNode {
                description: e.description.to_owned(),
                directives: conv.directives(&e.directives),
                kind: DefinitionKind::Definition,
                loc: conv.loc(e.position),
                name: e.name.to_owned(),
                values: conv.enum_values(&e.values),
            },
        ),

        GpDef::TypeExtension(GpTe::Enum(e)) => ast::Definition::Enum(
            ast::EnumTypeNode {
                description: None,
                directives: conv.directives(&e.directives),
                kind: DefinitionKind::Extension,
                loc: conv.loc(e.position),
                name: e.name.to_owned(),
                values: conv.enum_values(&e.values),
            },
        ),

        GpDef::TypeDefinition(GpTd::InputObject(io)) => ast::Definition::InputObject(
            ast::InputObjectTypeNode {
                description: io.description.to_owned(),
                directives: conv.directives(&io.directives),
                fields: conv.input_values(&io.fields),
                kind: DefinitionKind::Definition,
                loc: conv.loc(io.position),
                name: io.name.to_owned(),
            },
        ),

        GpDef::TypeExtension(GpTe::InputObject(io)) => ast::Definition::InputObject(
            ast::InputObjectTypeNode {
                description: None,
                directives: conv.directives(&io.directives),
                fields: conv.input_values(&io.fields),
                kind: DefinitionKind::Extension,
                loc: conv.loc(io.position),
                name: io.name.to_owned(),
            },
        ),

        GpDef::TypeDefinition(GpTd::Interface(i)) => ast::Definition::Interface(
            ast::InterfaceTypeNode {
                description: i.description.to_owned(),
                directives: conv.directives(&i.directives),
                fields: conv.fields(&i.fields),
                interfaces: named_type_refs(&i.implements_interfaces),
                kind: DefinitionKind::Definition,
                loc: conv.loc(i.position),
                name: i.name.to_owned(),
            },
        ),

        GpDef::TypeExtension(GpTe::Interface(i)) => ast::Definition::Interface(
            ast::InterfaceTypeNode {
                description: None,
                directives: conv.directives(&i.directives),
                fields: conv.fields(&i.fields),
                interfaces: named_type_refs(&i.implements_interfaces),
                kind: DefinitionKind::Extension,
                loc: conv.loc(i.position),
                name: i.name.to_owned(),
            },
        ),

        GpDef::TypeDefinition(GpTd::Object(o)) => ast::Definition::Object(
            ast::ObjectTypeNode {
                description: o.description.to_owned(),
                directives: conv.directives(&o.directives),
                fields: conv.fields(&o.fields),
                interfaces: named_type_refs(&o.implements_interfaces),
                kind: DefinitionKind::Definition,
                loc: conv.loc(o.position),
                name: o.name.to_owned(),
            },
        ),

        GpDef::TypeExtension(GpTe::Object(o)) => ast::Definition::Object(
            ast::ObjectTypeNode {
                description: None,
                directives: conv.directives(&o.directives),
                fields: conv.fields(&o.fields),
                interfaces: named_type_refs(&o.implements_interfaces),
                kind: DefinitionKind::Extension,
                loc: conv.loc(o.position),
                name: o.name.to_owned(),
            },
        ),

        GpDef::TypeDefinition(GpTd::Scalar(s)) => ast::Definition::Scalar(
            ast::ScalarTypeNode {
                description: s.description.to_owned(),
                directives: conv.directives(&s.directives),
                kind: DefinitionKind::Definition,
                loc: conv.loc(s.position),
                name: s.name.to_owned(),
            },
        ),

        GpDef::TypeExtension(GpTe::Scalar(s)) => ast::Definition::Scalar(
            ast::ScalarTypeNode {
                description: None,
                directives: conv.directives(&s.directives),
                kind: DefinitionKind::Extension,
                loc: conv.loc(s.position),
                name: s.name.to_owned(),
            },
        ),

        GpDef::TypeDefinition(GpTd::Union(u)) => ast::Definition::Union(
            ast::UnionTypeNode {
                description: u.description.to_owned(),
                directives: conv.directives(&u.directives),
                kind: DefinitionKind::Definition,
                loc: conv.loc(u.position),
                members: named_type_refs(&u.types),
                name: u.name.to_owned(),
            },
        ),

        GpDef::TypeExtension(GpTe::Union(u)) => ast::Definition::Union(
            ast::UnionTypeNode {
                description: None,
                directives: conv.directives(&u.directives),
                kind: DefinitionKind::Extension,
                loc: conv.loc(u.position),
                members: named_type_refs(&u.types),
                name: u.name.to_owned(),
            },
        ),
    }).collect();

    ast::Document { definitions }
}

fn named_type_refs(names: &[String]) -> Vec<ast::NamedTypeRef> {
    names.iter().map(ast::NamedTypeRef::new).collect()
}

struct Converter<'a> {
    file: Option<&'a Path>,
}
impl Converter<'_> {
    fn loc(&self, pos: graphql_parser::Pos) -> Option<ast::SourceLocation> {
        Some(ast::SourceLocation::from_pos(self.file, pos))
    }

    fn directives(&self, directives: &[GpDirective]) -> Vec<ast::DirectiveNode> {
        directives.iter().map(|directive| ast::DirectiveNode {
            arguments: directive.arguments.to_owned(),
            loc: self.loc(directive.position),
            name: directive.name.to_owned(),
        }).collect()
    }

    fn enum_values(&self, values: &[GpEnumValue]) -> Vec<ast::EnumValueDefinition> {
        values.iter().map(|value| ast::EnumValueDefinition {
            description: value.description.to_owned(),
            directives: self.directives(&value.directives),
            loc: self.loc(value.position),
            name: value.name.to_owned(),
        }).collect()
    }

    fn fields(&self, fields: &[GpField]) -> Vec<ast::FieldDefinition> {
        fields.iter().map(|field| ast::FieldDefinition {
            arguments: self.input_values(&field.arguments),
            description: field.description.to_owned(),
            directives: self.directives(&field.directives),
            field_type: field.field_type.to_owned(),
            loc: self.loc(field.position),
            name: field.name.to_owned(),
        }).collect()
    }

    fn input_values(&self, values: &[GpInputValue]) -> Vec<ast::InputValueDefinition> {
        values.iter().map(|value| ast::InputValueDefinition {
            default_value: value.default_value.to_owned(),
            description: value.description.to_owned(),
            directives: self.directives(&value.directives),
            loc: self.loc(value.position),
            name: value.name.to_owned(),
            value_type: value.value_type.to_owned(),
        }).collect()
    }
}
