use crate::ast::DefinitionKind;
use crate::ast::DirectiveNode;
use crate::ast::NamedTypeRef;
use crate::ast::SourceLocation;

/// `union SearchResult = User | Post` or its `extend union` form.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeNode {
    pub description: Option<String>,
    pub directives: Vec<DirectiveNode>,
    pub kind: DefinitionKind,
    pub loc: Option<SourceLocation>,
    pub members: Vec<NamedTypeRef>,
    pub name: String,
}
impl UnionTypeNode {
    pub fn new(name: impl Into<String>, kind: DefinitionKind) -> Self {
        Self {
            description: None,
            directives: vec![],
            kind,
            loc: None,
            members: vec![],
            name: name.into(),
        }
    }
}
