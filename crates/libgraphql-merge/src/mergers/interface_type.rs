use crate::ast::DefinitionKind;
use crate::ast::InterfaceTypeNode;
use crate::mergers::merge_directives;
use crate::mergers::merge_fields;
use crate::mergers::merge_named_type_list;
use crate::EntityKind;
use crate::MergeConfig;
use crate::MergeError;

type Result<T> = std::result::Result<T, MergeError>;

/// Interface counterpart of [merge_object_type](crate::mergers::merge_object_type).
pub fn merge_interface(
    incoming: InterfaceTypeNode,
    existing: Option<&InterfaceTypeNode>,
    config: &MergeConfig,
) -> Result<InterfaceTypeNode> {
    let Some(existing) = existing else {
        return Ok(InterfaceTypeNode {
            kind: incoming.kind.first_sighting(config.convert_extensions),
            ..incoming
        });
    };

    let fields = merge_fields(
        &incoming.name,
        &existing.fields,
        &incoming.fields,
        config,
    ).map_err(|err| err.in_entity(EntityKind::Interface, &incoming.name))?;

    Ok(InterfaceTypeNode {
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
