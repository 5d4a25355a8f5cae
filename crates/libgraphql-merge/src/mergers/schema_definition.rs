use crate::ast::DefinitionKind;
use crate::ast::NamedTypeRef;
use crate::ast::SchemaDefinitionNode;
use crate::mergers::merge_directives;
use crate::EntityKind;
use crate::MergeConfig;
use crate::MergeError;

type Result<T> = std::result::Result<T, MergeError>;

fn merge_root_type(
    operation: &'static str,
    existing: &Option<NamedTypeRef>,
    incoming: Option<NamedTypeRef>,
) -> Result<Option<NamedTypeRef>> {
    match (existing, incoming) {
        (Some(existing), Some(incoming)) if existing.name != incoming.name => {
            Err(MergeError::SchemaRootConflict {
                operation,
                existing_type: existing.name.to_owned(),
                incoming_type: incoming.name,
            })
        },
        (Some(existing), _) => Ok(Some(existing.clone())),
        (None, incoming) => Ok(incoming),
    }
}

/// Merges two `schema { ... }` definitions (or extensions). Each root
/// operation type may be declared on either side, but two different types
/// for the same operation are a conflict.
pub fn merge_schema_definition(
    incoming: SchemaDefinitionNode,
    existing: Option<&SchemaDefinitionNode>,
    config: &MergeConfig,
) -> Result<SchemaDefinitionNode> {
    let Some(existing) = existing else {
        return Ok(SchemaDefinitionNode {
            kind: incoming.kind.first_sighting(config.convert_extensions),
            ..incoming
        });
    };

    let wrap = |err: MergeError| err.in_entity(EntityKind::Schema, "schema");
    Ok(SchemaDefinitionNode {
        directives: merge_directives(&existing.directives, &incoming.directives),
        kind: DefinitionKind::merged(
            incoming.kind,
            existing.kind,
            config.convert_extensions,
        ),
        loc: incoming.loc,
        mutation: merge_root_type("mutation", &existing.mutation, incoming.mutation)
            .map_err(wrap)?,
        query: merge_root_type("query", &existing.query, incoming.query)
            .map_err(wrap)?,
        subscription: merge_root_type(
            "subscription",
            &existing.subscription,
            incoming.subscription,
        ).map_err(wrap)?,
    })
}
