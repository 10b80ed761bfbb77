use crate::matcher;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Sequential recursive walk yielding the matching regular files under `root`.
///
/// The extension filter runs inside the walker, so non-matching files are
/// skipped without ever being opened. Hidden files are visited and ignore
/// files are not consulted; symlinks are not followed. Traversal order is
/// unspecified. Entries the walker cannot read are skipped.
pub fn walk_files(root: &Path) -> impl Iterator<Item = PathBuf> {
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false).follow_links(false);

    builder.filter_entry(|entry| {
        // Always descend into directories.
        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            return true;
        }
        matcher::path_matches(entry.path())
    });

    builder.build().filter_map(|entry| {
        let entry = entry.ok()?;
        entry
            .file_type()
            .is_some_and(|ft| ft.is_file())
            .then(|| entry.into_path())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn collect_names(root: &Path) -> Vec<String> {
        let mut names: Vec<String> = walk_files(root)
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        names.sort();
        names
    }

    #[test]
    fn yields_matching_files_at_any_depth() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("top.txt"), "").unwrap();
        fs::write(dir.path().join("a/mid.mdx"), "").unwrap();
        fs::write(dir.path().join("a/b/deep.md"), "").unwrap();
        fs::write(dir.path().join("a/b/code.rs"), "").unwrap();

        assert_eq!(collect_names(dir.path()), ["deep.md", "mid.mdx", "top.txt"]);
    }

    #[test]
    fn hidden_files_are_visited() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".notes.md"), "").unwrap();

        assert_eq!(collect_names(dir.path()), [".notes.md"]);
    }

    #[test]
    fn gitignore_rules_are_not_consulted() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "*.md\n").unwrap();
        fs::write(dir.path().join("kept.md"), "").unwrap();

        assert_eq!(collect_names(dir.path()), ["kept.md"]);
    }

    #[test]
    fn empty_directory_yields_nothing() {
        let dir = tempdir().unwrap();
        assert!(walk_files(dir.path()).next().is_none());
    }
}
