use crate::ast::DefinitionKind;
use crate::ast::ScalarTypeNode;
use crate::mergers::merge_directives;
use crate::MergeConfig;

pub fn merge_scalar(
    incoming: ScalarTypeNode,
    existing: Option<&ScalarTypeNode>,
    config: &MergeConfig,
) -> ScalarTypeNode {
    let Some(existing) = existing else {
        return ScalarTypeNode {
            kind: incoming.kind.first_sighting(config.convert_extensions),
            ..incoming
        };
    };

    ScalarTypeNode {
        description: incoming.description.or_else(|| existing.description.clone()),
        directives: merge_directives(&existing.directives, &incoming.directives),
        kind: DefinitionKind::merged(
            incoming.kind,
            existing.kind,
            config.convert_extensions,
        ),
        loc: incoming.loc,
        name: incoming.name,
    }
}
