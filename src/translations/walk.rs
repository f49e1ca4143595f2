/// Discovery of translation JSON files under a locale directory.
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// List all `*.json` files under `dir`, sorted for deterministic reports.
///
/// Standard ignore filters are disabled: translation trees live outside
/// version-controlled source conventions and every file counts.
#[must_use]
pub fn list_translation_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkBuilder::new(dir)
        .standard_filters(false)
        .build()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_some_and(|t| t.is_file()))
        .map(ignore::DirEntry::into_path)
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_lists_nested_json_sorted() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("plugin")).unwrap();
        fs::write(dir.path().join("plugin/options.json"), "{}").unwrap();
        fs::write(dir.path().join("code.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "skip me").unwrap();

        let files = list_translation_files(dir.path());
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("code.json"));
        assert!(files[1].ends_with("plugin/options.json"));
    }

    #[test]
    fn test_missing_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        let files = list_translation_files(&dir.path().join("absent"));
        assert!(files.is_empty());
    }
}
