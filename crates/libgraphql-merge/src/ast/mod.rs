//! The merge-node model: plain, owned syntax nodes describing the pieces of a
//! GraphQL schema document that participate in type-definition merging.
//!
//! Nodes are produced from a [`graphql_parser`] schema document (see
//! [crate::parse_type_defs]) and can be converted back for printing.

mod definition;
mod definition_kind;
mod directive_definition_node;
mod directive_node;
mod enum_type_node;
mod enum_value_definition;
mod field_definition;
mod input_object_type_node;
mod input_value_definition;
mod interface_type_node;
mod named_type_ref;
mod node_kind;
mod object_type_node;
mod scalar_type_node;
mod schema_definition_node;
mod source_location;
mod union_type_node;

pub use definition::Definition;
pub use definition::Document;
pub use definition_kind::DefinitionKind;
pub use directive_definition_node::DirectiveDefinitionNode;
pub use directive_node::DirectiveNode;
pub use enum_type_node::EnumTypeNode;
pub use enum_value_definition::EnumValueDefinition;
pub use field_definition::FieldDefinition;
pub use input_object_type_node::InputObjectTypeNode;
pub use input_value_definition::InputValueDefinition;
pub use interface_type_node::InterfaceTypeNode;
pub use named_type_ref::NamedTypeRef;
pub use node_kind::NodeKind;
pub use object_type_node::ObjectTypeNode;
pub use scalar_type_node::ScalarTypeNode;
pub use schema_definition_node::SchemaDefinitionNode;
pub use source_location::SourceLocation;
pub use union_type_node::UnionTypeNode;

/// Location at which a directive may be applied (e.g. `FIELD_DEFINITION`).
pub type DirectiveLocation = graphql_parser::schema::DirectiveLocation;

/// A (possibly wrapped) type reference such as `[String!]!`.
pub type Type = graphql_parser::schema::Type<'static, String>;

/// A constant value used for directive arguments and default values.
pub type Value = graphql_parser::query::Value<'static, String>;

#[cfg(test)]
mod tests;
