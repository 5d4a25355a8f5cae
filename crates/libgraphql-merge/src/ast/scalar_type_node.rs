use crate::ast::DefinitionKind;
use crate::ast::DirectiveNode;
use crate::ast::SourceLocation;

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeNode {
    pub description: Option<String>,
    pub directives: Vec<DirectiveNode>,
    pub kind: DefinitionKind,
    pub loc: Option<SourceLocation>,
    pub name: String,
}
