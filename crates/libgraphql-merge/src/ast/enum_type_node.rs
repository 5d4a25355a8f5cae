use crate::ast::DefinitionKind;
use crate::ast::DirectiveNode;
use crate::ast::EnumValueDefinition;
use crate::ast::SourceLocation;

#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeNode {
    pub description: Option<String>,
    pub directives: Vec<DirectiveNode>,
    pub kind: DefinitionKind,
    pub loc: Option<SourceLocation>,
    pub name: String,
    pub values: Vec<EnumValueDefinition>,
}
impl EnumTypeNode {
    pub fn new(name: impl Into<String>, kind: DefinitionKind) -> Self {
        Self {
            description: None,
            directives: vec![],
            kind,
            loc: None,
            name: name.into(),
            values: vec![],
        }
    }
}
