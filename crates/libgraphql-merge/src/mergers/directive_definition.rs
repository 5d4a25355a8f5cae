use crate::ast::DirectiveDefinitionNode;
use crate::mergers::merge_arguments;
use crate::mergers::type_compatibility::check_field_types;
use crate::EntityKind;
use crate::MergeConfig;
use crate::MergeError;

type Result<T> = std::result::Result<T, MergeError>;

/// Merges two definitions of the same directive.
///
/// Arguments are merged like field arguments (incoming wins), but an
/// argument declared on both sides must have a compatible type unless
/// `ignore_field_conflicts` is set. The merged directive is `repeatable` if
/// either side is, and its locations are the union of both sides in
/// first-seen order.
pub fn merge_directive_definition(
    incoming: DirectiveDefinitionNode,
    existing: Option<&DirectiveDefinitionNode>,
    config: &MergeConfig,
) -> Result<DirectiveDefinitionNode> {
    let Some(existing) = existing else {
        return Ok(incoming);
    };

    if !config.ignore_field_conflicts {
        for arg in &incoming.arguments {
            let Some(existing_arg) =
                existing.arguments.iter().find(|existing_arg| existing_arg.name == arg.name)
            else {
                continue;
            };
            check_field_types(
                &incoming.name,
                &arg.name,
                &existing_arg.value_type,
                &arg.value_type,
                config.throw_on_conflict,
            ).map_err(|err| err.in_entity(EntityKind::Directive, &incoming.name))?;
        }
    }

    let mut locations = existing.locations.clone();
    for location in incoming.locations {
        if !locations.contains(&location) {
            locations.push(location);
        }
    }

    Ok(DirectiveDefinitionNode {
        arguments: merge_arguments(&existing.arguments, &incoming.arguments, config),
        description: incoming.description.or_else(|| existing.description.clone()),
        loc: incoming.loc,
        locations,
        name: incoming.name,
        repeatable: incoming.repeatable || existing.repeatable,
    })
}
