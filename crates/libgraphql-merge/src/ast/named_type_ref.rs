use crate::ast::SourceLocation;

/// A reference, by name, to another type. Used for the interfaces a type
/// implements and for the member types of a union.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeRef {
    pub loc: Option<SourceLocation>,
    pub name: String,
}
impl NamedTypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            loc: None,
            name: name.into(),
        }
    }
}
