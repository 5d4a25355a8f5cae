use crate::ast::InputValueDefinition;
use crate::compare_nodes::sort_nodes;
use crate::MergeConfig;
use std::collections::HashSet;

/// Merges two argument lists, de-duplicating by name.
///
/// `args2` is placed *before* `args1`, so when both declare an argument with
/// the same name the one from `args2` is kept. Field merging passes the
/// already-collected arguments as `args1` and the incoming ones as `args2`,
/// which makes incoming argument definitions win.
pub fn merge_arguments(
    args1: &[InputValueDefinition],
    args2: &[InputValueDefinition],
    config: &MergeConfig,
) -> Vec<InputValueDefinition> {
    let mut seen_names = HashSet::new();
    let mut merged: Vec<InputValueDefinition> =
        args2.iter()
            .chain(args1.iter())
            .filter(|arg| seen_names.insert(arg.name.as_str()))
            .cloned()
            .collect();

    if config.sort {
        sort_nodes(&mut merged);
    }

    merged
}
