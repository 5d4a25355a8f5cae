//! Conversions between `graphql_parser` v0.4 schema documents and the
//! merge-node model. `graphql_parser` is the only component that reads or
//! writes GraphQL text.

mod from_schema;
mod to_schema;

pub use from_schema::from_graphql_parser_schema_ast;
pub use to_schema::to_graphql_parser_schema_ast;

use crate::ast;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
#[error(
    "Failed to parse GraphQL schema document{}: {message}",
    .file.as_ref().map(|file| format!(" `{}`", file.display())).unwrap_or_default(),
)]
pub struct ParseError {
    pub file: Option<PathBuf>,
    pub message: String,
}

/// Parses GraphQL SDL into a merge-node [ast::Document]. Source locations
/// record `file` when one is given.
pub fn parse_type_defs(
    source: &str,
    file: Option<&Path>,
) -> Result<ast::Document, ParseError> {
    let doc =
        graphql_parser::schema::parse_schema::<String>(source)
            .map_err(|err| ParseError {
                file: file.map(|file| file.to_path_buf()),
                message: err.to_string(),
            })?
            .into_static();

    Ok(from_graphql_parser_schema_ast(&doc, file))
}

/// Prints a merge-node [ast::Document] as GraphQL SDL.
pub fn print_type_defs(doc: &ast::Document) -> String {
    to_graphql_parser_schema_ast(doc).to_string()
}

#[cfg(test)]
mod tests;
