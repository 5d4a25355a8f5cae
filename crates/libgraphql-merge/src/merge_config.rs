use crate::ast::FieldDefinition;
use std::sync::Arc;

/// Hook consulted whenever two fields with the same name are merged.
///
/// Receives the already-collected field and the incoming one (plus the owning
/// type's name). Returning `Ok(Some(field))` replaces the base field that the
/// incoming field's arguments, directives and description are folded onto;
/// `Ok(None)` falls back to the built-in type-compatibility check; `Err`
/// aborts the merge with the given reason.
pub type FieldConflictResolver = Arc<
    dyn Fn(&str, &FieldDefinition, &FieldDefinition) -> Result<Option<FieldDefinition>, String>
        + Send
        + Sync,
>;

/// Options recognized by every merger in this crate.
#[derive(Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MergeConfig {
    /// Force extension nodes into definition nodes, both on first sighting
    /// and when merging.
    pub convert_extensions: bool,

    /// Entities (`Type` or `Type.*`) and fields (`Type.field`) to leave out
    /// of the merged result.
    pub exclusions: Vec<String>,

    /// Skip the field-type compatibility check entirely and keep the
    /// already-collected field's type.
    pub ignore_field_conflicts: bool,

    #[serde(skip)]
    pub on_field_conflict: Option<FieldConflictResolver>,

    /// Put merged lists (fields, arguments, named types, enum values and the
    /// top-level definitions) into canonical order.
    pub sort: bool,

    /// Treat a nullability-only difference between two definitions of the
    /// same field as a conflict.
    pub throw_on_conflict: bool,
}
impl MergeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_convert_extensions(mut self, convert_extensions: bool) -> Self {
        self.convert_extensions = convert_extensions;
        self
    }

    pub fn with_exclusion(mut self, exclusion: impl Into<String>) -> Self {
        self.exclusions.push(exclusion.into());
        self
    }

    pub fn with_ignore_field_conflicts(mut self, ignore_field_conflicts: bool) -> Self {
        self.ignore_field_conflicts = ignore_field_conflicts;
        self
    }

    pub fn with_on_field_conflict<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&str, &FieldDefinition, &FieldDefinition) -> Result<Option<FieldDefinition>, String>
            + Send
            + Sync
            + 'static,
    {
        self.on_field_conflict = Some(Arc::new(resolver));
        self
    }

    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_throw_on_conflict(mut self, throw_on_conflict: bool) -> Self {
        self.throw_on_conflict = throw_on_conflict;
        self
    }

    /// Whether the whole entity named `type_name` is excluded.
    pub fn is_type_excluded(&self, type_name: &str) -> bool {
        self.exclusions.iter().any(|exclusion| {
            exclusion == type_name
                || exclusion.strip_suffix(".*") == Some(type_name)
        })
    }

    /// Whether `type_name.field_name` (or the whole type) is excluded.
    pub fn is_field_excluded(&self, type_name: &str, field_name: &str) -> bool {
        self.is_type_excluded(type_name)
            || self.exclusions.iter().any(|exclusion| {
                exclusion.split_once('.') == Some((type_name, field_name))
            })
    }
}
impl std::fmt::Debug for MergeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MergeConfig")
            .field("convert_extensions", &self.convert_extensions)
            .field("exclusions", &self.exclusions)
            .field("ignore_field_conflicts", &self.ignore_field_conflicts)
            .field("on_field_conflict", &self.on_field_conflict.as_ref().map(|_| "<fn>"))
            .field("sort", &self.sort)
            .field("throw_on_conflict", &self.throw_on_conflict)
            .finish()
    }
}
