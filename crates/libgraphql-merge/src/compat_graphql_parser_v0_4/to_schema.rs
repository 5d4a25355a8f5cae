use crate::ast;

type GpDefinition = graphql_parser::schema::Definition<'static, String>;
type GpDocument = graphql_parser::schema::Document<'static, String>;
type GpDirective = graphql_parser::query::Directive<'static, String>;
type GpEnumValue = graphql_parser::schema::EnumValue<'static, String>;
type GpField = graphql_parser::schema::Field<'static, String>;
type GpInputValue = graphql_parser::schema::InputValue<'static, String>;

fn pos(loc: &Option<ast::SourceLocation>) -> graphql_parser::Pos {
    loc.as_ref()
        .map(|loc| loc.to_pos())
        .unwrap_or(graphql_parser::Pos { line: 0, column: 0 })
}

fn directives_to_gp(directives: &[ast::DirectiveNode]) -> Vec<GpDirective> {
    directives.iter().map(|directive| GpDirective {
        position: pos(&directive.loc),
        name: directive.name.to_owned(),
        arguments: directive.arguments.to_owned(),
    }).collect()
}

fn enum_values_to_gp(values: &[ast::EnumValueDefinition]) -> Vec<GpEnumValue> {
    values.iter().map(|value| GpEnumValue {
        position: pos(&value.loc),
        description: value.description.to_owned(),
        name: value.name.to_owned(),
        directives: directives_to_gp(&value.directives),
    }).collect()
}

fn fields_to_gp(fields: &[ast::FieldDefinition]) -> Vec<GpField> {
    fields.iter().map(|field| GpField {
        position: pos(&field.loc),
        description: field.description.to_owned(),
        name: field.name.to_owned(),
        arguments: input_values_to_gp(&field.arguments),
        field_type: field.field_type.to_owned(),
        directives: directives_to_gp(&field.directives),
    }).collect()
}

fn input_values_to_gp(values: &[ast::InputValueDefinition]) -> Vec<GpInputValue> {
    values.iter().map(|value| GpInputValue {
        position: pos(&value.loc),
        description: value.description.to_owned(),
        name: value.name.to_owned(),
        value_type: value.value_type.to_owned(),
        default_value: value.default_value.to_owned(),
        directives: directives_to_gp(&value.directives),
    }).collect()
}

fn names_to_gp(type_refs: &[ast::NamedTypeRef]) -> Vec<String> {
    type_refs.iter().map(|type_ref| type_ref.name.to_owned()).collect()
}

fn definition_to_gp(def: &ast::Definition) -> GpDefinition {
    use ast::DefinitionKind::Definition as Def;
    use ast::DefinitionKind::Extension as Ext;
    use graphql_parser::schema as gp;
    use graphql_parser::schema::Definition as GpDef;
    use graphql_parser::schema::TypeDefinition as GpTd;
    use graphql_parser::schema::TypeExtension as GpTe;

    match def {
        // graphql_parser v0.4 has no `extend schema` form, so schema
        // extensions are printed as plain schema definitions.
        ast::Definition::Schema(sd) => GpDef::SchemaDefinition(gp::SchemaDefinition {
            position: pos(&sd.loc),
            directives: directives_to_gp(&sd.directives),
            query: sd.query.as_ref().map(|type_ref| type_ref.name.to_owned()),
            mutation: sd.mutation.as_ref().map(|type_ref| type_ref.name.to_owned()),
            subscription: sd.subscription.as_ref().map(|type_ref| type_ref.name.to_owned()),
        }),

        ast::Definition::Directive(dd) => GpDef::DirectiveDefinition(gp::DirectiveDefinition {
            position: pos(&dd.loc),
            description: dd.description.to_owned(),
            name: dd.name.to_owned(),
            arguments: input_values_to_gp(&dd.arguments),
            repeatable: dd.repeatable,
            locations: dd.locations.to_owned(),
        }),

        ast::Definition::Enum(e) => match e.kind {
            Def => GpDef::TypeDefinition(GpTd::Enum(gp::EnumType {
                position: pos(&e.loc),
                description: e.description.to_owned(),
                name: e.name.to_owned(),
                directives: directives_to_gp(&e.directives),
                values: enum_values_to_gp(&e.values),
            })),
            Ext => GpDef::TypeExtension(GpTe::Enum(gp::EnumTypeExtension {
                position: pos(&e.loc),
                name: e.name.to_owned(),
                directives: directives_to_gp(&e.directives),
                values: enum_values_to_gp(&e.values),
            })),
        },

        ast::Definition::InputObject(io) => match io.kind {
            Def => GpDef::TypeDefinition(GpTd::InputObject(gp::InputObjectType {
                position: pos(&io.loc),
                description: io.description.to_owned(),
                name: io.name.to_owned(),
                directives: directives_to_gp(&io.directives),
                fields: input_values_to_gp(&io.fields),
            })),
            Ext => GpDef::TypeExtension(GpTe::InputObject(gp::InputObjectTypeExtension {
                position: pos(&io.loc),
                name: io.name.to_owned(),
                directives: directives_to_gp(&io.directives),
                fields: input_values_to_gp(&io.fields),
            })),
        },

        ast::Definition::Interface(i) => match i.kind {
            Def => GpDef::TypeDefinition(GpTd::Interface(gp::InterfaceType {
                position: pos(&i.loc),
                description: i.description.to_owned(),
                name: i.name.to_owned(),
                implements_interfaces: names_to_gp(&i.interfaces),
                directives: directives_to_gp(&i.directives),
                fields: fields_to_gp(&i.fields),
            })),
            Ext => GpDef::TypeExtension(GpTe::Interface(gp::InterfaceTypeExtension {
                position: pos(&i.loc),
                name: i.name.to_owned(),
                implements_interfaces: names_to_gp(&i.interfaces),
                directives: directives_to_gp(&i.directives),
                fields: fields_to_gp(&i.fields),
            })),
        },

        ast::Definition::Object(o) => match o.kind {
            Def => GpDef::TypeDefinition(GpTd::Object(gp::ObjectType {
                position: pos(&o.loc),
                description: o.description.to_owned(),
                name: o.name.to_owned(),
                implements_interfaces: names_to_gp(&o.interfaces),
                directives: directives_to_gp(&o.directives),
                fields: fields_to_gp(&o.fields),
            })),
            Ext => GpDef::TypeExtension(GpTe::Object(gp::ObjectTypeExtension {
                position: pos(&o.loc),
                name: o.name.to_owned(),
                implements_interfaces: names_to_gp(&o.interfaces),
                directives: directives_to_gp(&o.directives),
                fields: fields_to_gp(&o.fields),
            })),
        },

        ast::Definition::Scalar(s) => match s.kind {
            Def => GpDef::TypeDefinition(GpTd::Scalar(gp::ScalarType {
                position: pos(&s.loc),
                description: s.description.to_owned(),
                name: s.name.to_owned(),
                directives: directives_to_gp(&s.directives),
            })),
            Ext => GpDef::TypeExtension(GpTe::Scalar(gp::ScalarTypeExtension {
                position: pos(&s.loc),
                name: s.name.to_owned(),
                directives: directives_to_gp(&s.directives),
            })),
        },

        ast::Definition::Union(u) => match u.kind {
            Def => GpDef::TypeDefinition(GpTd::Union(gp::UnionType {
                position: pos(&u.loc),
                description: u.description.to_owned(),
                name: u.name.to_owned(),
                directives: directives_to_gp(&u.directives),
                types: names_to_gp(&u.members),
            })),
            Ext => GpDef::TypeExtension(GpTe::Union(gp::UnionTypeExtension {
                position: pos(&u.loc),
                name: u.name.to_owned(),
                directives: directives_to_gp(&u.directives),
                types: names_to_gp(&u.members),
            })),
        },
    }
}

/// Converts merge nodes back into a `graphql_parser` schema document, e.g.
/// for printing.
///
/// Descriptions on extension nodes are dropped since SDL extensions cannot
/// carry one.
pub fn to_graphql_parser_schema_ast(doc: &ast::Document) -> GpDocument {
    GpDocument {
        definitions: doc.definitions.iter().map(definition_to_gp).collect(),
    }
}
