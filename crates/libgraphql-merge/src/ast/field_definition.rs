use crate::ast::DirectiveNode;
use crate::ast::InputValueDefinition;
use crate::ast::SourceLocation;
use crate::ast::Type;

/// A field declared on an object or interface type.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub arguments: Vec<InputValueDefinition>,
    pub description: Option<String>,
    pub directives: Vec<DirectiveNode>,
    pub field_type: Type,
    pub loc: Option<SourceLocation>,
    pub name: String,
}
impl FieldDefinition {
    pub fn new(name: impl Into<String>, field_type: Type) -> Self {
        Self {
            arguments: vec![],
            description: None,
            directives: vec![],
            field_type,
            loc: None,
            name: name.into(),
        }
    }
}
