use crate::ast::FieldDefinition;
use crate::ast::InputValueDefinition;
use crate::compare_nodes::sort_nodes;
use crate::mergers::merge_arguments;
use crate::mergers::merge_directives;
use crate::mergers::type_compatibility::check_field_types;
use crate::MergeConfig;
use crate::MergeError;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, MergeError>;

/// Merges the fields of two partial definitions of the type `type_name`.
///
/// Fields keep the order in which their names first appear across `existing`
/// then `incoming`. A field declared on both sides keeps the existing type
/// and location, picks up the incoming description only if it has none, and
/// has its arguments and directives merged.
pub fn merge_fields(
    type_name: &str,
    existing: &[FieldDefinition],
    incoming: &[FieldDefinition],
    config: &MergeConfig,
) -> Result<Vec<FieldDefinition>> {
    let mut merged: IndexMap<&str, FieldDefinition> = IndexMap::new();
    for field in existing {
        merged.entry(field.name.as_str()).or_insert_with(|| field.clone());
    }

    for field in incoming {
        let Some(collected) = merged.get_mut(field.name.as_str()) else {
            merged.insert(field.name.as_str(), field.clone());
            continue;
        };

        let resolved =
            if let Some(on_conflict) = &config.on_field_conflict {
                on_conflict(type_name, &*collected, field).map_err(|reason| {
                    MergeError::FieldConflictRejected {
                        type_name: type_name.to_string(),
                        field_name: field.name.to_string(),
                        reason,
                    }
                })?
            } else {
                None
            };

        match resolved {
            Some(replacement) => *collected = replacement,
            None if config.ignore_field_conflicts => (),
            None => check_field_types(
                type_name,
                field.name.as_str(),
                &collected.field_type,
                &field.field_type,
                config.throw_on_conflict,
            )?,
        }

        collected.arguments = merge_arguments(
            &collected.arguments,
            &field.arguments,
            config,
        );
        collected.directives = merge_directives(
            &collected.directives,
            &field.directives,
        );
        if collected.description.is_none() {
            collected.description = field.description.to_owned();
        }
    }

    let mut fields: Vec<FieldDefinition> =
        merged.into_values()
            .filter(|field| !config.is_field_excluded(type_name, &field.name))
            .collect();

    if config.sort {
        sort_nodes(&mut fields);
    }

    Ok(fields)
}

/// Same as [merge_fields], for the fields of an input object type.
pub fn merge_input_fields(
    type_name: &str,
    existing: &[InputValueDefinition],
    incoming: &[InputValueDefinition],
    config: &MergeConfig,
) -> Result<Vec<InputValueDefinition>> {
    let mut merged: IndexMap<&str, InputValueDefinition> = IndexMap::new();
    for field in existing {
        merged.entry(field.name.as_str()).or_insert_with(|| field.clone());
    }

    for field in incoming {
        let Some(collected) = merged.get_mut(field.name.as_str()) else {
            merged.insert(field.name.as_str(), field.clone());
            continue;
        };

        if !config.ignore_field_conflicts {
            check_field_types(
                type_name,
                field.name.as_str(),
                &collected.value_type,
                &field.value_type,
                config.throw_on_conflict,
            )?;
        }

        collected.directives = merge_directives(
            &collected.directives,
            &field.directives,
        );
        if collected.description.is_none() {
            collected.description = field.description.to_owned();
        }
        if collected.default_value.is_none() {
            collected.default_value = field.default_value.to_owned();
        }
    }

    let mut fields: Vec<InputValueDefinition> =
        merged.into_values()
            .filter(|field| !config.is_field_excluded(type_name, &field.name))
            .collect();

    if config.sort {
        sort_nodes(&mut fields);
    }

    Ok(fields)
}
