use crate::ast::DirectiveNode;
use crate::ast::SourceLocation;

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition {
    pub description: Option<String>,
    pub directives: Vec<DirectiveNode>,
    pub loc: Option<SourceLocation>,
    pub name: String,
}
impl EnumValueDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            description: None,
            directives: vec![],
            loc: None,
            name: name.into(),
        }
    }
}
