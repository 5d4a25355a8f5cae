use crate::ast::DefinitionKind;
use crate::ast::DirectiveNode;
use crate::ast::NamedTypeRef;
use crate::ast::SourceLocation;

/// `schema { query: Query mutation: Mutation }`.
///
/// A document holds at most one schema definition, so it has no name of its
/// own; its root operation types are plain [NamedTypeRef]s.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinitionNode {
    pub directives: Vec<DirectiveNode>,
    pub kind: DefinitionKind,
    pub loc: Option<SourceLocation>,
    pub mutation: Option<NamedTypeRef>,
    pub query: Option<NamedTypeRef>,
    pub subscription: Option<NamedTypeRef>,
}
