use crate::ast::DirectiveLocation;
use crate::ast::InputValueDefinition;
use crate::ast::SourceLocation;

/// `directive @cacheControl(maxAge: Int) repeatable on FIELD_DEFINITION`.
///
/// Directive definitions have no extension form.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinitionNode {
    pub arguments: Vec<InputValueDefinition>,
    pub description: Option<String>,
    pub loc: Option<SourceLocation>,
    pub locations: Vec<DirectiveLocation>,
    pub name: String,
    pub repeatable: bool,
}
