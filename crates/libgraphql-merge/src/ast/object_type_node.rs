use crate::ast::DefinitionKind;
use crate::ast::DirectiveNode;
use crate::ast::FieldDefinition;
use crate::ast::NamedTypeRef;
use crate::ast::SourceLocation;

/// `type Foo implements Bar @dir { ... }` or its `extend type` form.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeNode {
    pub description: Option<String>,
    pub directives: Vec<DirectiveNode>,
    pub fields: Vec<FieldDefinition>,
    pub interfaces: Vec<NamedTypeRef>,
    pub kind: DefinitionKind,
    pub loc: Option<SourceLocation>,
    pub name: String,
}
impl ObjectTypeNode {
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
