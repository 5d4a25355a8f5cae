use crate::ast::DirectiveDefinitionNode;
use crate::ast::EnumTypeNode;
use crate::ast::InputObjectTypeNode;
use crate::ast::InterfaceTypeNode;
use crate::ast::ObjectTypeNode;
use crate::ast::ScalarTypeNode;
use crate::ast::SchemaDefinitionNode;
use crate::ast::SourceLocation;
use crate::ast::UnionTypeNode;

/// Any top-level definition (or extension) in a schema document.
#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Directive(DirectiveDefinitionNode),
    Enum(EnumTypeNode),
    InputObject(InputObjectTypeNode),
    Interface(InterfaceTypeNode),
    Object(ObjectTypeNode),
    Scalar(ScalarTypeNode),
    Schema(SchemaDefinitionNode),
    Union(UnionTypeNode),
}
impl Definition {
    pub fn as_enum(&self) -> Option<&EnumTypeNode> {
        if let Self::Enum(node) = self { Some(node) } else { None }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectTypeNode> {
        if let Self::InputObject(node) = self { Some(node) } else { None }
    }

    pub fn as_interface(&self) -> Option<&InterfaceTypeNode> {
        if let Self::Interface(node) = self { Some(node) } else { None }
    }

    pub fn as_object(&self) -> Option<&ObjectTypeNode> {
        if let Self::Object(node) = self { Some(node) } else { None }
    }

    pub fn as_scalar(&self) -> Option<&ScalarTypeNode> {
        if let Self::Scalar(node) = self { Some(node) } else { None }
    }

    pub fn as_union(&self) -> Option<&UnionTypeNode> {
        if let Self::Union(node) = self { Some(node) } else { None }
    }

    pub fn loc(&self) -> Option<&SourceLocation> {
        match self {
            Self::Directive(node) => node.loc.as_ref(),
            Self::Enum(node) => node.loc.as_ref(),
            Self::InputObject(node) => node.loc.as_ref(),
            Self::Interface(node) => node.loc.as_ref(),
            Self::Object(node) => node.loc.as_ref(),
            Self::Scalar(node) => node.loc.as_ref(),
            Self::Schema(node) => node.loc.as_ref(),
            Self::Union(node) => node.loc.as_ref(),
        }
    }

    /// The name of the defined entity. Schema definitions are unnamed.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Directive(node) => Some(node.name.as_str()),
            Self::Enum(node) => Some(node.name.as_str()),
            Self::InputObject(node) => Some(node.name.as_str()),
            Self::Interface(node) => Some(node.name.as_str()),
            Self::Object(node) => Some(node.name.as_str()),
            Self::Scalar(node) => Some(node.name.as_str()),
            Self::Schema(_) => None,
            Self::Union(node) => Some(node.name.as_str()),
        }
    }
}

/// An ordered list of schema definitions, typically parsed from one file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    pub definitions: Vec<Definition>,
}
impl Document {
    pub fn new(definitions: Vec<Definition>) -> Self {
        Self { definitions }
    }

    /// Finds the first type (not directive) definition with the given name.
    pub fn type_def(&self, name: &str) -> Option<&Definition> {
        self.definitions.iter().find(|def| {
            !matches!(def, Definition::Directive(_))
                && def.name() == Some(name)
        })
    }

    pub fn directive_def(&self, name: &str) -> Option<&DirectiveDefinitionNode> {
        self.definitions.iter().find_map(|def| match def {
            Definition::Directive(node) if node.name == name => Some(node),
            _ => None,
        })
    }
}
