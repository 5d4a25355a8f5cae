use crate::ast::NodeKind;
use thiserror::Error;

/// The category of entity named in a [MergeError::EntityMerge] message.
/// Only entities whose merge can fail appear here.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntityKind {
    Directive,
    InputObject,
    Interface,
    Object,
    Schema,
}
impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Directive => "directive",
            Self::InputObject => "input type",
            Self::Interface => "interface",
            Self::Object => "type",
            Self::Schema => "schema definition",
        }
    }
}
impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum MergeError {
    #[error(
        "Unable to merge GraphQL {entity_kind} \"{name}\": {reason}"
    )]
    EntityMerge {
        entity_kind: EntityKind,
        name: String,
        #[source]
        reason: Box<MergeError>,
    },

    #[error("{reason}")]
    FieldConflictRejected {
        type_name: String,
        field_name: String,
        reason: String,
    },

    #[error(
        "Field '{type_name}.{field_name}' changed type from \
        '{existing_type}' to '{incoming_type}'"
    )]
    FieldTypeChanged {
        type_name: String,
        field_name: String,
        existing_type: String,
        incoming_type: String,
    },

    #[error(
        "Field \"{field_name}\" already defined with a different type. \
        Declared as \"{existing_type}\", but you tried to override with \
        \"{incoming_type}\""
    )]
    FieldTypeConflict {
        type_name: String,
        field_name: String,
        existing_type: String,
        incoming_type: String,
    },

    #[error(
        "`{name}` is already defined as a {existing_kind} and cannot be \
        merged with a {incoming_kind}"
    )]
    KindMismatch {
        name: String,
        existing_kind: NodeKind,
        incoming_kind: NodeKind,
    },

    #[error(
        "conflicting `{operation}` root operation types: \"{existing_type}\" \
        and \"{incoming_type}\""
    )]
    SchemaRootConflict {
        operation: &'static str,
        existing_type: String,
        incoming_type: String,
    },
}
impl MergeError {
    pub(crate) fn in_entity(
        self,
        entity_kind: EntityKind,
        name: impl Into<String>,
    ) -> Self {
        MergeError::EntityMerge {
            entity_kind,
            name: name.into(),
            reason: Box::new(self),
        }
    }
}
