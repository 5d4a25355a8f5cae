use crate::ast::DirectiveNode;
use crate::ast::SourceLocation;
use crate::ast::Type;
use crate::ast::Value;

/// A field argument, directive argument or input-object field.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition {
    pub default_value: Option<Value>,
    pub description: Option<String>,
    pub directives: Vec<DirectiveNode>,
    pub loc: Option<SourceLocation>,
    pub name: String,
    pub value_type: Type,
}
impl InputValueDefinition {
    pub fn new(name: impl Into<String>, value_type: Type) -> Self {
        Self {
            default_value: None,
            description: None,
            directives: vec![],
            loc: None,
            name: name.into(),
            value_type,
        }
    }
}
