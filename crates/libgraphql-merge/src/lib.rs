//! Utilities for merging GraphQL type definitions.
//!
//! Schemas are often split across many files or contributed by many
//! independent fragments, each of which may define or extend the same named
//! type. This crate folds those fragments together one entity at a time:
//! fields, arguments, directives, interfaces, union members and enum values
//! are de-duplicated by name, and the result can optionally be put into a
//! deterministic order.
//!
//! Parsing and printing of GraphQL text is delegated to
//! [`graphql_parser`]; see [parse_type_defs] and [print_type_defs].

pub mod ast;
mod compare_nodes;
mod compat_graphql_parser_v0_4;
mod file_reader;
mod loader;
mod merge_config;
mod merge_error;
pub mod mergers;
mod type_defs_merger;

pub use compare_nodes::compare_nodes;
pub use compare_nodes::sort_nodes;
pub use compare_nodes::NamedNode;
pub use compat_graphql_parser_v0_4::from_graphql_parser_schema_ast;
pub use compat_graphql_parser_v0_4::parse_type_defs;
pub use compat_graphql_parser_v0_4::print_type_defs;
pub use compat_graphql_parser_v0_4::to_graphql_parser_schema_ast;
pub use compat_graphql_parser_v0_4::ParseError;
pub use file_reader::read_content;
pub use file_reader::ReadContentError;
pub use loader::LoadError;
pub use loader::LoadedFiles;
pub use loader::TypeDefsLoader;
pub use merge_config::FieldConflictResolver;
pub use merge_config::MergeConfig;
pub use merge_error::EntityKind;
pub use merge_error::MergeError;
pub use type_defs_merger::merge_type_defs;
pub use type_defs_merger::TypeDefsMerger;

#[cfg(test)]
mod tests;
