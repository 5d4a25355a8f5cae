use crate::ast::DirectiveNode;
use std::collections::HashSet;

/// Appends to `existing` every application in `incoming` whose directive
/// name has not been seen yet.
///
/// `existing` is kept whole, repeated applications included. An incoming
/// application is dropped when `existing` or an earlier incoming
/// application already uses its directive name.
pub fn merge_directives(
    existing: &[DirectiveNode],
    incoming: &[DirectiveNode],
) -> Vec<DirectiveNode> {
    let mut seen_names: HashSet<&str> =
        existing.iter()
            .map(|directive| directive.name.as_str())
            .collect();

    existing.iter()
        .chain(incoming.iter().filter(|directive| {
            seen_names.insert(directive.name.as_str())
        }))
        .cloned()
        .collect()
}
