use crate::LoadError;
use crate::TypeDefsLoader;
use std::path::Path;
use std::path::PathBuf;

/// A fresh scratch directory under the system temp dir, removed on drop.
struct ScratchDir(PathBuf);
impl ScratchDir {
    fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "libgraphql-merge-{name}-{}",
            std::process::id(),
        ));
        let _ = std::fs::remove_dir_all(&path);
        std::fs::create_dir_all(&path).expect("create scratch dir");
        Self(path)
    }

    fn write(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.0.join(rel_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dir");
        }
        std::fs::write(&path, content).expect("write file");
        path
    }

    fn path(&self) -> &Path {
        self.0.as_path()
    }
}
impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

fn file_names(paths: &[PathBuf]) -> Vec<String> {
    paths.iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().to_string())
        .collect()
}

#[test]
fn finds_graphql_files_recursively() {
    let dir = ScratchDir::new("recursive");
    dir.write("a.graphql", "type A { a: Int }");
    dir.write("nested/b.gql", "type B { b: Int }");
    dir.write("nested/deeper/c.graphqls", "type C { c: Int }");
    dir.write("nested/readme.md", "# not graphql");

    let loaded = TypeDefsLoader::new().find_files(&[dir.path()]);

    assert!(loaded.errors.is_empty());
    assert_eq!(file_names(&loaded.file_paths), vec!["a.graphql", "b.gql", "c.graphqls"]);
    assert!(loaded.num_skipped >= 1);
}

#[test]
fn files_are_returned_in_file_name_order() {
    let dir = ScratchDir::new("ordering");
    for name in ["f", "a", "c", "h", "b", "e", "g", "d"] {
        dir.write(format!("{name}.graphql").as_str(), "type A { a: Int }");
    }
    dir.write("0-nested/z.graphql", "type Z { z: Int }");

    let loaded = TypeDefsLoader::new().find_files(&[dir.path()]);

    assert_eq!(file_names(&loaded.file_paths), vec![
        "z.graphql",
        "a.graphql",
        "b.graphql",
        "c.graphql",
        "d.graphql",
        "e.graphql",
        "f.graphql",
        "g.graphql",
        "h.graphql",
    ]);
}

#[test]
fn input_paths_are_scanned_in_the_order_given() {
    let dir = ScratchDir::new("arg-order");
    let second = dir.write("b/second.graphql", "type B { b: Int }");
    let first = dir.write("a/first.graphql", "type A { a: Int }");

    let loaded = TypeDefsLoader::new().find_files(&[second.as_path(), first.as_path()]);

    assert_eq!(file_names(&loaded.file_paths), vec!["second.graphql", "first.graphql"]);
}

#[test]
fn custom_extensions_replace_the_defaults() {
    let dir = ScratchDir::new("custom-exts");
    dir.write("a.graphql", "type A { a: Int }");
    dir.write("b.sdl", "type B { b: Int }");

    let loader = TypeDefsLoader::with_file_extensions([".sdl"]);
    let loaded = loader.find_files(&[dir.path()]);

    assert!(loader.file_extensions().contains("sdl"));
    assert_eq!(file_names(&loaded.file_paths), vec!["b.sdl"]);
}

#[test]
fn a_single_named_file_is_loaded_regardless_of_extension() {
    let dir = ScratchDir::new("single-file");
    let path = dir.write("schema.txt", "type A { a: Int }");

    let loaded = TypeDefsLoader::new().find_files(&[path.as_path()]);

    assert_eq!(file_names(&loaded.file_paths), vec!["schema.txt"]);
    assert_eq!(loaded.num_skipped, 0);
}

#[test]
fn overlapping_paths_yield_each_file_once() {
    let dir = ScratchDir::new("overlap");
    let file = dir.write("a.graphql", "type A { a: Int }");

    let loaded = TypeDefsLoader::new().find_files(&[dir.path(), file.as_path()]);

    assert_eq!(loaded.file_paths.len(), 1);
}

#[test]
fn missing_paths_are_reported_without_aborting() {
    let dir = ScratchDir::new("missing");
    dir.write("a.graphql", "type A { a: Int }");
    let missing = dir.path().join("does-not-exist");

    let loaded = TypeDefsLoader::new().find_files(&[missing.as_path(), dir.path()]);

    assert_eq!(loaded.errors.len(), 1);
    assert!(matches!(loaded.errors[0], LoadError::Walk { .. }));
    assert_eq!(loaded.file_paths.len(), 1);
}

#[test]
fn loaded_documents_carry_their_file_path() -> Result<(), LoadError> {
    let dir = ScratchDir::new("load");
    let path = dir.write("a.graphql", "type A { a: Int }");

    let docs = TypeDefsLoader::new().load_files(&[path.as_path()])?;

    assert_eq!(docs.len(), 1);
    let loc = docs[0].definitions[0].loc().expect("location");
    assert_eq!(loc.file.as_deref(), Some(path.as_path()));
    Ok(())
}

#[test]
fn syntax_errors_surface_as_parse_errors() {
    let dir = ScratchDir::new("syntax-error");
    let path = dir.write("broken.graphql", "type {");

    let err = TypeDefsLoader::new().load_file(&path).expect_err("load should fail");

    assert!(matches!(err, LoadError::Parse(_)));
}

#[test]
fn non_utf8_files_are_rejected() {
    let dir = ScratchDir::new("non-utf8");
    let path = dir.path().join("bad.graphql");
    std::fs::write(&path, [0xff, 0xfe, 0x00]).expect("write file");

    let err = TypeDefsLoader::new().load_file(&path).expect_err("load should fail");

    assert!(matches!(
        err,
        LoadError::Read(crate::ReadContentError::FileDecodeError { .. }),
    ));
}
