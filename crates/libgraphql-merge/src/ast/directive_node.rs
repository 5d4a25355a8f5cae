use crate::ast::SourceLocation;
use crate::ast::Value;

/// An application of a directive, e.g. `@deprecated(reason: "use `id`")`.
///
/// Multiple applications of the same directive on one node are legal, so
/// `name` is not unique within a list of [DirectiveNode]s.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveNode {
    pub arguments: Vec<(String, Value)>,
    pub loc: Option<SourceLocation>,
    pub name: String,
}
impl DirectiveNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            arguments: vec![],
            loc: None,
            name: name.into(),
        }
    }
}
