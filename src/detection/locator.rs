//! Project root location
//!
//! Archives are frequently zipped with a single wrapping folder around the
//! actual project. The locator handles exactly that case and nothing more:
//! the check is deliberately shallow, never a recursive search.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Filenames whose presence marks a directory as a project root
pub const MARKER_FILES: &[&str] = &["requirements.txt", "pyproject.toml", "package.json"];

/// Returns the directory that represents the actual project.
///
/// If the extracted tree contains exactly one entry, that entry is a
/// directory, and the directory holds at least one recognized marker file,
/// the locator descends into it. In every other case (multiple top-level
/// entries, a lone file, no markers in the lone directory) the tree root is
/// used directly. Always returns a path.
pub fn locate_project_root(extract_root: &Path) -> PathBuf {
    let entries: Vec<_> = match fs::read_dir(extract_root) {
        Ok(read_dir) => read_dir.flatten().collect(),
        Err(_) => return extract_root.to_path_buf(),
    };

    if entries.len() == 1 {
        let candidate = entries[0].path();
        if candidate.is_dir() && contains_marker(&candidate) {
            debug!(root = %candidate.display(), "descended into wrapping folder");
            return candidate;
        }
    }

    extract_root.to_path_buf()
}

fn contains_marker(dir: &Path) -> bool {
    MARKER_FILES.iter().any(|marker| dir.join(marker).is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_descends_into_single_wrapping_folder() {
        let dir = TempDir::new().unwrap();
        let inner = dir.path().join("my-project");
        fs::create_dir(&inner).unwrap();
        fs::write(inner.join("requirements.txt"), "flask\n").unwrap();

        assert_eq!(locate_project_root(dir.path()), inner);
    }

    #[test]
    fn test_root_used_when_markers_at_top_level() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), "{}").unwrap();

        assert_eq!(locate_project_root(dir.path()), dir.path());
    }

    #[test]
    fn test_root_used_when_multiple_top_level_entries() {
        let dir = TempDir::new().unwrap();
        let inner = dir.path().join("my-project");
        fs::create_dir(&inner).unwrap();
        fs::write(inner.join("requirements.txt"), "flask\n").unwrap();
        fs::write(dir.path().join("README.md"), "readme").unwrap();

        // A nested project exists, but the shallow check does not search for it.
        assert_eq!(locate_project_root(dir.path()), dir.path());
    }

    #[test]
    fn test_root_used_when_single_folder_has_no_markers() {
        let dir = TempDir::new().unwrap();
        let inner = dir.path().join("docs");
        fs::create_dir(&inner).unwrap();
        fs::write(inner.join("notes.txt"), "notes").unwrap();

        assert_eq!(locate_project_root(dir.path()), dir.path());
    }

    #[test]
    fn test_root_used_when_single_entry_is_a_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("script.py"), "print('hi')\n").unwrap();

        assert_eq!(locate_project_root(dir.path()), dir.path());
    }

    #[test]
    fn test_missing_directory_falls_back_to_input() {
        let missing = Path::new("/nonexistent/deploykit-test");
        assert_eq!(locate_project_root(missing), missing);
    }
}
