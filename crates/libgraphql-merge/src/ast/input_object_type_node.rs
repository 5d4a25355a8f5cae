use crate::ast::DefinitionKind;
use crate::ast::DirectiveNode;
use crate::ast::InputValueDefinition;
use crate::ast::SourceLocation;

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeNode {
    pub description: Option<String>,
    pub directives: Vec<DirectiveNode>,
    pub fields: Vec<InputValueDefinition>,
    pub kind: DefinitionKind,
    pub loc: Option<SourceLocation>,
    pub name: String,
}
