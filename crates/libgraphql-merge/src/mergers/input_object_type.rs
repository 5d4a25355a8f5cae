use crate::ast::DefinitionKind;
use crate::ast::InputObjectTypeNode;
use crate::mergers::merge_directives;
use crate::mergers::merge_input_fields;
use crate::EntityKind;
use crate::MergeConfig;
use crate::MergeError;

type Result<T> = std::result::Result<T, MergeError>;

pub fn merge_input_object(
    incoming: InputObjectTypeNode,
    existing: Option<&InputObjectTypeNode>,
    config: &MergeConfig,
) -> Result<InputObjectTypeNode> {
    let Some(existing) = existing else {
        return Ok(InputObjectTypeNode {
            kind: incoming.kind.first_sighting(config.convert_extensions),
            ..incoming
        });
    };

    let fields = merge_input_fields(
        &incoming.name,
        &existing.fields,
        &incoming.fields,
        config,
    ).map_err(|err| err.in_entity(EntityKind::InputObject, &incoming.name))?;

    Ok(InputObjectTypeNode {
        description: incoming.description.or_else(|| existing.description.clone()),
        directives: merge_directives(&existing.directives, &incoming.directives),
        fields,
        kind: DefinitionKind::merged(
            incoming.kind,
            existing.kind,
            config.convert_extensions,
        ),
        loc: incoming.loc,
        name: incoming.name,
    })
}
