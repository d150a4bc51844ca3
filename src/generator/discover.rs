//! @acp:module "Metadata Discovery"
//! @acp:summary "Glob-based discovery of action metadata files"
//! @acp:domain cli
//! @acp:layer io

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Find metadata files matching `pattern` under `root`, sorted by path
pub fn discover_metadata(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let escaped_root = glob::Pattern::escape(&root.to_string_lossy());
    let full_pattern = format!("{}/{}", escaped_root.trim_end_matches('/'), pattern);
    tracing::debug!(pattern = %full_pattern, "discovering action metadata");

    Ok(collect_files(glob::glob(&full_pattern)?))
}

/// Keep regular files, sorted; unreadable entries are logged and skipped
fn collect_files<I, E>(entries: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = std::result::Result<PathBuf, E>>,
    E: std::fmt::Display,
{
    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(err) => tracing::warn!(error = %err, "skipping unreadable path during discovery"),
        }
    }
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "name: test\n").unwrap();
    }

    #[test]
    fn test_discovers_two_levels_only() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "b-ns/act/action.yml");
        touch(temp.path(), "a-ns/act/action.yml");
        touch(temp.path(), "top/action.yml");
        touch(temp.path(), "deep/er/act/action.yml");
        touch(temp.path(), "a-ns/other/action.yaml");

        let found = discover_metadata(temp.path(), "*/*/action.yml").unwrap();
        let rel: Vec<PathBuf> = found
            .iter()
            .map(|p| p.strip_prefix(temp.path()).unwrap().to_path_buf())
            .collect();
        assert_eq!(
            rel,
            vec![
                PathBuf::from("a-ns/act/action.yml"),
                PathBuf::from("b-ns/act/action.yml"),
            ]
        );
    }

    #[test]
    fn test_ignores_directories_named_like_metadata() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("ns/act/action.yml")).unwrap();
        assert!(discover_metadata(temp.path(), "*/*/action.yml")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_unreadable_entry_does_not_stop_discovery() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "ns/act/action.yml");
        let good = temp.path().join("ns/act/action.yml");

        let entries = vec![
            Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "locked/dir",
            )),
            Ok(good.clone()),
        ];
        assert_eq!(collect_files(entries), vec![good]);
    }

    #[test]
    fn test_invalid_pattern() {
        let temp = TempDir::new().unwrap();
        assert!(discover_metadata(temp.path(), "*/[/action.yml").is_err());
    }
}
