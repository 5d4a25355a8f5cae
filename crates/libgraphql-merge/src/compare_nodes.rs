use crate::ast;
use crate::ast::NodeKind;
use std::cmp::Ordering;

/// Implemented by every merge node that can be put into canonical order.
pub trait NamedNode {
    fn node_kind(&self) -> NodeKind;
    fn node_name(&self) -> &str;
}

/// The canonical node order: by kind tag, then by name.
pub fn compare_nodes<A: NamedNode, B: NamedNode>(a: &A, b: &B) -> Ordering {
    a.node_kind().as_str()
        .cmp(b.node_kind().as_str())
        .then_with(|| a.node_name().cmp(b.node_name()))
}

/// Stable sort of `nodes` by [compare_nodes]; ties keep their input order.
pub fn sort_nodes<T: NamedNode>(nodes: &mut [T]) {
    nodes.sort_by(compare_nodes);
}

impl NamedNode for ast::DirectiveNode {
    fn node_kind(&self) -> NodeKind {
        NodeKind::Directive
    }

    fn node_name(&self) -> &str {
        self.name.as_str()
    }
}

impl NamedNode for ast::InputValueDefinition {
    fn node_kind(&self) -> NodeKind {
        NodeKind::InputValueDefinition
    }

    fn node_name(&self) -> &str {
        self.name.as_str()
    }
}

impl NamedNode for ast::FieldDefinition {
    fn node_kind(&self) -> NodeKind {
        NodeKind::FieldDefinition
    }

    fn node_name(&self) -> &str {
        self.name.as_str()
    }
}

impl NamedNode for ast::EnumValueDefinition {
    fn node_kind(&self) -> NodeKind {
        NodeKind::EnumValueDefinition
    }

    fn node_name(&self) -> &str {
        self.name.as_str()
    }
}

impl NamedNode for ast::NamedTypeRef {
    fn node_kind(&self) -> NodeKind {
        NodeKind::NamedType
    }

    fn node_name(&self) -> &str {
        self.name.as_str()
    }
}

impl NamedNode for ast::Definition {
    fn node_kind(&self) -> NodeKind {
        use ast::DefinitionKind::Definition as Def;
        match self {
            Self::Directive(_) => NodeKind::DirectiveDefinition,
            Self::Enum(node) if node.kind == Def => NodeKind::EnumTypeDefinition,
            Self::Enum(_) => NodeKind::EnumTypeExtension,
            Self::InputObject(node) if node.kind == Def => NodeKind::InputObjectTypeDefinition,
            Self::InputObject(_) => NodeKind::InputObjectTypeExtension,
            Self::Interface(node) if node.kind == Def => NodeKind::InterfaceTypeDefinition,
            Self::Interface(_) => NodeKind::InterfaceTypeExtension,
            Self::Object(node) if node.kind == Def => NodeKind::ObjectTypeDefinition,
            Self::Object(_) => NodeKind::ObjectTypeExtension,
            Self::Scalar(node) if node.kind == Def => NodeKind::ScalarTypeDefinition,
            Self::Scalar(_) => NodeKind::ScalarTypeExtension,
            Self::Schema(node) if node.kind == Def => NodeKind::SchemaDefinition,
            Self::Schema(_) => NodeKind::SchemaExtension,
            Self::Union(node) if node.kind == Def => NodeKind::UnionTypeDefinition,
            Self::Union(_) => NodeKind::UnionTypeExtension,
        }
    }

    fn node_name(&self) -> &str {
        self.name().unwrap_or("")
    }
}
