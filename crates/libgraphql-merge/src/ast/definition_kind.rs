/// Whether a node introduces an entity (`type Foo { ... }`) or augments a
/// previously introduced one (`extend type Foo { ... }`).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DefinitionKind {
    Definition,
    Extension,
}
impl DefinitionKind {
    pub fn is_extension(&self) -> bool {
        matches!(self, Self::Extension)
    }

    /// The kind of the node produced by merging `incoming` onto `existing`.
    ///
    /// The result is a [DefinitionKind::Definition] when either side is one
    /// (or when `convert_extensions` is requested). Only two extensions merge
    /// into an extension.
    pub fn merged(
        incoming: DefinitionKind,
        existing: DefinitionKind,
        convert_extensions: bool,
    ) -> DefinitionKind {
        if convert_extensions
            || incoming == Self::Definition
            || existing == Self::Definition {
            Self::Definition
        } else {
            Self::Extension
        }
    }

    /// The kind of an entity seen for the first time.
    pub fn first_sighting(
        self,
        convert_extensions: bool,
    ) -> DefinitionKind {
        if convert_extensions {
            Self::Definition
        } else {
            self
        }
    }
}
