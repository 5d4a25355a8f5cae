use crate::ast;
use crate::file_reader;
use crate::parse_type_defs;
use crate::ParseError;
use crate::ReadContentError;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;
use walkdir::WalkDir;

const DEFAULT_FILE_EXTENSIONS: [&str; 3] = ["gql", "graphql", "graphqls"];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to resolve `{}`: {err}", .path.display())]
    Canonicalize {
        path: PathBuf,
        err: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Read(#[from] ReadContentError),

    #[error("Failed to scan `{}`: {err}", .path.display())]
    Walk {
        path: PathBuf,
        err: walkdir::Error,
    },
}

/// The outcome of scanning a set of input paths for GraphQL files.
#[derive(Debug, Default)]
pub struct LoadedFiles {
    /// Errors hit while scanning. Scanning carries on past them.
    pub errors: Vec<LoadError>,
    pub file_paths: Vec<PathBuf>,
    /// Filesystem entries that were not GraphQL files.
    pub num_skipped: usize,
}

/// Finds, reads and parses GraphQL schema files.
#[derive(Clone, Debug)]
pub struct TypeDefsLoader {
    file_extensions: HashSet<String>,
}
impl TypeDefsLoader {
    pub fn new() -> Self {
        Self::with_file_extensions(DEFAULT_FILE_EXTENSIONS)
    }

    /// Restricts directory scans to files with one of `file_extensions`
    /// (with or without a leading `.`).
    pub fn with_file_extensions<I, S>(file_extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            file_extensions: file_extensions.into_iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_string())
                .collect(),
        }
    }

    pub fn file_extensions(&self) -> &HashSet<String> {
        &self.file_extensions
    }

    fn has_graphql_extension(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| self.file_extensions.contains(ext.to_string_lossy().as_ref()))
            .unwrap_or(false)
    }

    /// Recursively collects the GraphQL files located at or under each of
    /// `paths`. Paths are scanned in the order given, each directory's
    /// entries by file name, so the result does not depend on how the
    /// filesystem lists directories.
    ///
    /// If exactly one path is given and it names a file, that file is taken
    /// even when its extension doesn't match.
    pub fn find_files<P: AsRef<Path>>(&self, paths: &[P]) -> LoadedFiles {
        let mut loaded = LoadedFiles::default();
        let mut seen = HashSet::new();

        tracing::debug!("Scanning {} input paths...", paths.len());
        for path in paths {
            let path = path.as_ref();
            for entry in WalkDir::new(path).follow_links(true).sort_by_file_name() {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        tracing::warn!("Failed to scan an entry under {path:?}: {err}");
                        loaded.errors.push(LoadError::Walk {
                            path: path.to_path_buf(),
                            err,
                        });
                        continue;
                    },
                };

                let entry_path = entry.path();
                if !entry.file_type().is_file() || !self.has_graphql_extension(entry_path) {
                    tracing::trace!("Skipping {entry_path:?}.");
                    loaded.num_skipped += 1;
                    continue;
                }

                match std::fs::canonicalize(entry_path) {
                    Ok(file_path) => {
                        if seen.insert(file_path.to_owned()) {
                            tracing::trace!("Found GraphQL file at {file_path:?}.");
                            loaded.file_paths.push(file_path);
                        }
                    },
                    Err(err) => loaded.errors.push(LoadError::Canonicalize {
                        path: entry_path.to_path_buf(),
                        err,
                    }),
                }
            }
        }

        if loaded.file_paths.is_empty()
            && let [only_path] = paths
            && only_path.as_ref().is_file() {
            let only_path = only_path.as_ref();
            tracing::warn!(
                "Loading {only_path:?} even though it doesn't match any of \
                the GraphQL file extensions ({}).",
                self.file_extensions.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            loaded.num_skipped = loaded.num_skipped.saturating_sub(1);
            match std::fs::canonicalize(only_path) {
                Ok(file_path) => loaded.file_paths.push(file_path),
                Err(err) => loaded.errors.push(LoadError::Canonicalize {
                    path: only_path.to_path_buf(),
                    err,
                }),
            }
        }

        tracing::debug!(
            "Found {} GraphQL files ({} other entries skipped).",
            loaded.file_paths.len(),
            loaded.num_skipped,
        );
        loaded
    }

    pub fn load_file(&self, file_path: impl AsRef<Path>) -> Result<ast::Document, LoadError> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_content(file_path)?;
        Ok(parse_type_defs(content.as_str(), Some(file_path))?)
    }

    /// Reads and parses every file in `file_paths`, in order. Stops at the
    /// first file that fails.
    pub fn load_files<P: AsRef<Path>>(
        &self,
        file_paths: &[P],
    ) -> Result<Vec<ast::Document>, LoadError> {
        file_paths.iter()
            .map(|file_path| self.load_file(file_path))
            .collect()
    }
}
impl Default for TypeDefsLoader {
    fn default() -> Self {
        Self::new()
    }
}
