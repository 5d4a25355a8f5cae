/// The syntactic category of a merge node.
///
/// The [Display](std::fmt::Display) form of a kind matches the node names
/// used by most GraphQL tooling (e.g. `ObjectTypeDefinition`), and is what
/// [crate::compare_nodes] orders by.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeKind {
    Directive,
    DirectiveDefinition,
    EnumTypeDefinition,
    EnumTypeExtension,
    EnumValueDefinition,
    FieldDefinition,
    InputObjectTypeDefinition,
    InputObjectTypeExtension,
    InputValueDefinition,
    InterfaceTypeDefinition,
    InterfaceTypeExtension,
    NamedType,
    ObjectTypeDefinition,
    ObjectTypeExtension,
    ScalarTypeDefinition,
    ScalarTypeExtension,
    SchemaDefinition,
    SchemaExtension,
    UnionTypeDefinition,
    UnionTypeExtension,
}
impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Directive => "Directive",
            Self::DirectiveDefinition => "DirectiveDefinition",
            Self::EnumTypeDefinition => "EnumTypeDefinition",
            Self::EnumTypeExtension => "EnumTypeExtension",
            Self::EnumValueDefinition => "EnumValueDefinition",
            Self::FieldDefinition => "FieldDefinition",
            Self::InputObjectTypeDefinition => "InputObjectTypeDefinition",
            Self::InputObjectTypeExtension => "InputObjectTypeExtension",
            Self::InputValueDefinition => "InputValueDefinition",
            Self::InterfaceTypeDefinition => "InterfaceTypeDefinition",
            Self::InterfaceTypeExtension => "InterfaceTypeExtension",
            Self::NamedType => "NamedType",
            Self::ObjectTypeDefinition => "ObjectTypeDefinition",
            Self::ObjectTypeExtension => "ObjectTypeExtension",
            Self::ScalarTypeDefinition => "ScalarTypeDefinition",
            Self::ScalarTypeExtension => "ScalarTypeExtension",
            Self::SchemaDefinition => "SchemaDefinition",
            Self::SchemaExtension => "SchemaExtension",
            Self::UnionTypeDefinition => "UnionTypeDefinition",
            Self::UnionTypeExtension => "UnionTypeExtension",
        }
    }
}
impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
