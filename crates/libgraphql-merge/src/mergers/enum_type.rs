use crate::ast::DefinitionKind;
use crate::ast::EnumTypeNode;
use crate::ast::EnumValueDefinition;
use crate::compare_nodes::sort_nodes;
use crate::mergers::merge_directives;
use crate::MergeConfig;
use indexmap::IndexMap;

/// Merges an incoming enum onto the already-collected one, if any. Enum
/// merging cannot fail.
pub fn merge_enum(
    incoming: EnumTypeNode,
    existing: Option<&EnumTypeNode>,
    config: &MergeConfig,
) -> EnumTypeNode {
    let Some(existing) = existing else {
        return EnumTypeNode {
            kind: incoming.kind.first_sighting(config.convert_extensions),
            ..incoming
        };
    };

    EnumTypeNode {
        description: incoming.description.or_else(|| existing.description.clone()),
        directives: merge_directives(&existing.directives, &incoming.directives),
        kind: DefinitionKind::merged(
            incoming.kind,
            existing.kind,
            config.convert_extensions,
        ),
        loc: incoming.loc,
        name: incoming.name,
        values: merge_enum_values(&existing.values, &incoming.values, config),
    }
}

/// Folds `second` onto `first` by value name.
///
/// A value present in both keeps its position from `first`, takes the
/// description from `second` when `second` has one, and has its directives
/// merged. Values only in `second` are appended.
pub fn merge_enum_values(
    first: &[EnumValueDefinition],
    second: &[EnumValueDefinition],
    config: &MergeConfig,
) -> Vec<EnumValueDefinition> {
    let mut values: IndexMap<String, EnumValueDefinition> =
        first.iter()
            .map(|value| (value.name.to_owned(), value.clone()))
            .collect();

    for value in second {
        match values.get_mut(value.name.as_str()) {
            Some(collected) => {
                if value.description.is_some() {
                    collected.description = value.description.to_owned();
                }
                collected.directives = merge_directives(
                    &collected.directives,
                    &value.directives,
                );
            },

            None => {
                values.insert(value.name.to_owned(), value.clone());
            },
        }
    }

    let mut values: Vec<EnumValueDefinition> = values.into_values().collect();
    if config.sort {
        sort_nodes(&mut values);
    }
    values
}
