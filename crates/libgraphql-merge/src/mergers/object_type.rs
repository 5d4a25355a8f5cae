use crate::ast::DefinitionKind;
use crate::ast::ObjectTypeNode;
use crate::mergers::merge_directives;
use crate::mergers::merge_fields;
use crate::mergers::merge_named_type_list;
use crate::EntityKind;
use crate::MergeConfig;
use crate::MergeError;

type Result<T> = std::result::Result<T, MergeError>;

/// Merges an incoming object type (definition or extension) onto the
/// already-collected one, if any.
///
/// On first sighting the incoming node is returned untouched, except that
/// `convert_extensions` turns an extension into a definition. Otherwise a
/// fresh node is built from both sides. Failures are reported as
/// [MergeError::EntityMerge] naming the type.
pub fn merge_object_type(
    incoming: ObjectTypeNode,
    existing: Option<&ObjectTypeNode>,
    config: &MergeConfig,
) -> Result<ObjectTypeNode> {
    let Some(existing) = existing else {
        return Ok(ObjectTypeNode {
            kind: incoming.kind.first_sighting(config.convert_extensions),
            ..incoming
        });
    };

    let fields = merge_fields(
        &incoming.name,
        &existing.fields,
        &incoming.fields,
        config,
    ).map_err(|err| err.in_entity(EntityKind::Object, &incoming.name))?;

    Ok(ObjectTypeNode {
        description: incoming.description.or_else(|| existing.description.clone()),
        directives: merge_directives(&existing.directives, &incoming.directives),
        fields,
        interfaces: merge_named_type_list(
            &existing.interfaces,
            &incoming.interfaces,
            config,
        ),
        kind: DefinitionKind::merged(
            incoming.kind,
            existing.kind,
            config.convert_extensions,
        ),
        loc: incoming.loc,
        name: incoming.name,
    })
}
