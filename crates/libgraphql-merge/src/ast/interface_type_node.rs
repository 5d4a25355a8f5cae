use crate::ast::DefinitionKind;
use crate::ast::DirectiveNode;
use crate::ast::FieldDefinition;
use crate::ast::NamedTypeRef;
use crate::ast::SourceLocation;

/// `interface Node { ... }` or its `extend interface` form.
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeNode {
    pub description: Option<String>,
    pub directives: Vec<DirectiveNode>,
    pub fields: Vec<FieldDefinition>,
    pub interfaces: Vec<NamedTypeRef>,
    pub kind: DefinitionKind,
    pub loc: Option<SourceLocation>,
    pub name: String,
}
impl InterfaceTypeNode {
    pub fn new(name: impl Into<String>, kind: DefinitionKind) -> Self {
        Self {
            description: None,
            directives: vec![],
            fields: vec![],
            interfaces: vec![],
            kind,
            loc: None,
            name: name.into(),
        }
    }
}
