use crate::ast::DefinitionKind;
use crate::ast::UnionTypeNode;
use crate::mergers::merge_directives;
use crate::mergers::merge_named_type_list;
use crate::MergeConfig;

/// Merges an incoming union onto the already-collected one, if any. Member
/// types are de-duplicated by name. Union merging cannot fail.
pub fn merge_union(
    incoming: UnionTypeNode,
    existing: Option<&UnionTypeNode>,
    config: &MergeConfig,
) -> UnionTypeNode {
    let Some(existing) = existing else {
        return UnionTypeNode {
            kind: incoming.kind.first_sighting(config.convert_extensions),
            ..incoming
        };
    };

    UnionTypeNode {
        description: incoming.description.or_else(|| existing.description.clone()),
        directives: merge_directives(&existing.directives, &incoming.directives),
        kind: DefinitionKind::merged(
            incoming.kind,
            existing.kind,
            config.convert_extensions,
        ),
        loc: incoming.loc,
        members: merge_named_type_list(
            &existing.members,
            &incoming.members,
            config,
        ),
        name: incoming.name,
    }
}
