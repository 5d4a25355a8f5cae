use crate::ast::NamedTypeRef;
use crate::compare_nodes::sort_nodes;
use crate::MergeConfig;
use std::collections::HashSet;

/// Merges two lists of named type references (implemented interfaces or
/// union members) so that each name appears at most once, in first-seen
/// order over `existing` followed by `incoming`.
pub fn merge_named_type_list(
    existing: &[NamedTypeRef],
    incoming: &[NamedTypeRef],
    config: &MergeConfig,
) -> Vec<NamedTypeRef> {
    let mut seen_names = HashSet::new();
    let mut merged: Vec<NamedTypeRef> =
        existing.iter()
            .chain(incoming.iter())
            .filter(|type_ref| seen_names.insert(type_ref.name.as_str()))
            .cloned()
            .collect();

    if config.sort {
        sort_nodes(&mut merged);
    }

    merged
}
