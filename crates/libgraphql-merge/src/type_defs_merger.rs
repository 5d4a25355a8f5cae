use crate::ast::Definition;
use crate::ast::DirectiveDefinitionNode;
use crate::ast::Document;
use crate::ast::SchemaDefinitionNode;
use crate::compare_nodes::sort_nodes;
use crate::mergers;
use crate::MergeConfig;
use crate::MergeError;
use crate::NamedNode;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, MergeError>;

/// Returns the already-collected definition as a `T` when it is of the same
/// category as the incoming one, or hands it back as the error otherwise.
fn same_kind<'a, T>(
    existing: Option<&'a Definition>,
    as_kind: impl Fn(&'a Definition) -> Option<&'a T>,
) -> std::result::Result<Option<&'a T>, &'a Definition> {
    match existing {
        None => Ok(None),
        Some(def) => as_kind(def).map(Some).ok_or(def),
    }
}

/// Folds many schema documents into one, merging every entity that is
/// defined (or extended) more than once.
///
/// Entities are merged one at a time in the order they are added: the first
/// sighting of a name is recorded as-is and each later definition of the
/// same name is merged onto it with the matching entity merger from
/// [crate::mergers]. Types and directive definitions live in separate
/// namespaces; the schema definition is a singleton.
#[derive(Debug)]
pub struct TypeDefsMerger {
    config: MergeConfig,
    directives: IndexMap<String, DirectiveDefinitionNode>,
    schema: Option<SchemaDefinitionNode>,
    types: IndexMap<String, Definition>,
}
impl TypeDefsMerger {
    pub fn new(config: MergeConfig) -> Self {
        Self {
            config,
            directives: IndexMap::new(),
            schema: None,
            types: IndexMap::new(),
        }
    }

    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    pub fn add_document(&mut self, doc: Document) -> Result<()> {
        tracing::debug!(
            "Merging a document with {} definitions.",
            doc.definitions.len(),
        );
        for def in doc.definitions {
            self.add_definition(def)?;
        }
        Ok(())
    }

    pub fn add_definition(&mut self, def: Definition) -> Result<()> {
        match def {
            Definition::Directive(node) => self.add_directive_definition(node),
            Definition::Schema(node) => self.add_schema_definition(node),
            type_def => self.add_type_definition(type_def),
        }
    }

    fn add_directive_definition(&mut self, node: DirectiveDefinitionNode) -> Result<()> {
        let name = node.name.to_owned();
        tracing::trace!("Merging directive definition `@{name}`.");
        let merged = mergers::merge_directive_definition(
            node,
            self.directives.get(name.as_str()),
            &self.config,
        )?;
        self.directives.insert(name, merged);
        Ok(())
    }

    fn add_schema_definition(&mut self, node: SchemaDefinitionNode) -> Result<()> {
        tracing::trace!("Merging schema definition.");
        self.schema = Some(mergers::merge_schema_definition(
            node,
            self.schema.as_ref(),
            &self.config,
        )?);
        Ok(())
    }

    fn add_type_definition(&mut self, def: Definition) -> Result<()> {
        let name = def.node_name().to_string();
        if self.config.is_type_excluded(name.as_str()) {
            tracing::trace!("Skipping excluded type `{name}`.");
            return Ok(());
        }

        let incoming_kind = def.node_kind();
        let existing = self.types.get(name.as_str());
        tracing::trace!(
            "Merging {incoming_kind} `{name}` ({}).",
            if existing.is_some() { "seen before" } else { "first sighting" },
        );
        let mismatch = |existing: &Definition| MergeError::KindMismatch {
            name: name.to_owned(),
            existing_kind: existing.node_kind(),
            incoming_kind,
        };

        let config = &self.config;
        let merged = match def {
            Definition::Enum(node) => Definition::Enum(mergers::merge_enum(
                node,
                same_kind(existing, Definition::as_enum).map_err(mismatch)?,
                config,
            )),

            Definition::InputObject(node) => Definition::InputObject(mergers::merge_input_object(
                node,
                same_kind(existing, Definition::as_input_object).map_err(mismatch)?,
                config,
            )?),

            Definition::Interface(node) => Definition::Interface(mergers::merge_interface(
                node,
                same_kind(existing, Definition::as_interface).map_err(mismatch)?,
                config,
            )?),

            Definition::Object(node) => Definition::Object(mergers::merge_object_type(
                node,
                same_kind(existing, Definition::as_object).map_err(mismatch)?,
                config,
            )?),

            Definition::Scalar(node) => Definition::Scalar(mergers::merge_scalar(
                node,
                same_kind(existing, Definition::as_scalar).map_err(mismatch)?,
                config,
            )),

            Definition::Union(node) => Definition::Union(mergers::merge_union(
                node,
                same_kind(existing, Definition::as_union).map_err(mismatch)?,
                config,
            )),

            other @ (Definition::Directive(_) | Definition::Schema(_)) => {
                return self.add_definition(other);
            },
        };

        self.types.insert(name, merged);
        Ok(())
    }

    /// The merged definition collected so far for the type named `name`.
    pub fn get_type(&self, name: &str) -> Option<&Definition> {
        self.types.get(name)
    }

    pub fn get_directive(&self, name: &str) -> Option<&DirectiveDefinitionNode> {
        self.directives.get(name)
    }

    /// Produces the merged document: the schema definition (if any), then
    /// directive definitions, then types, each in first-seen order or, with
    /// `sort`, in canonical order.
    pub fn finish(self) -> Document {
        let config = self.config;
        let mut directives: Vec<Definition> =
            self.directives.into_values()
                .map(Definition::Directive)
                .collect();
        let mut types: Vec<Definition> =
            self.types.into_values()
                .map(|def| without_excluded_fields(def, &config))
                .collect();

        if config.sort {
            sort_nodes(&mut directives);
            sort_nodes(&mut types);
        }

        let mut definitions = Vec::with_capacity(directives.len() + types.len() + 1);
        definitions.extend(self.schema.map(Definition::Schema));
        definitions.append(&mut directives);
        definitions.append(&mut types);
        Document::new(definitions)
    }
}

/// A type's first sighting bypasses field merging, so `Type.field`
/// exclusions are applied once more on the final definitions.
fn without_excluded_fields(def: Definition, config: &MergeConfig) -> Definition {
    if config.exclusions.is_empty() {
        return def;
    }

    match def {
        Definition::InputObject(mut node) => {
            node.fields.retain(|field| !config.is_field_excluded(&node.name, &field.name));
            Definition::InputObject(node)
        },
        Definition::Interface(mut node) => {
            node.fields.retain(|field| !config.is_field_excluded(&node.name, &field.name));
            Definition::Interface(node)
        },
        Definition::Object(mut node) => {
            node.fields.retain(|field| !config.is_field_excluded(&node.name, &field.name));
            Definition::Object(node)
        },
        other => other,
    }
}

/// Merges `documents` in order and returns the combined document.
pub fn merge_type_defs<I>(documents: I, config: MergeConfig) -> Result<Document>
where
    I: IntoIterator<Item = Document>,
{
    let mut merger = TypeDefsMerger::new(config);
    for doc in documents {
        merger.add_document(doc)?;
    }
    Ok(merger.finish())
}
