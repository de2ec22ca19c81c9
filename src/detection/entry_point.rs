//! Entry point resolution for Python projects
//!
//! Picks the most plausible process start file through a priority cascade:
//! main-guard scan, conventional filenames, framework-import scan, then a
//! last-resort `app.py` guess. The walk order is sorted so resolution is
//! deterministic for identical file contents.

use ignore::WalkBuilder;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

/// The idiomatic "run if executed directly" sentinel, both quote styles.
/// The single mismatched-delimiter variant seen in the wild never matches
/// real source; only the correctly delimited literals are used here.
const MAIN_GUARD_DOUBLE_QUOTED: &str = "if __name__ == \"__main__\"";
const MAIN_GUARD_SINGLE_QUOTED: &str = "if __name__ == '__main__'";

/// Conventional entry filenames checked at the project root, in order
const CONVENTIONAL_ENTRY_FILES: &[&str] =
    &["app.py", "main.py", "server.py", "api.py", "run.py", "wsgi.py"];

/// Fallback when nothing matches; a deliberate guess, not validated
const DEFAULT_ENTRY_POINT: &str = "app.py";

fn framework_import_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?m)^\s*(?:from|import)\s+(?:flask|fastapi|django|bottle|tornado|sanic|aiohttp)\b")
            .unwrap()
    })
}

/// Resolves the entry point for a Python project.
///
/// Returns a path relative to `project_root` with forward-slash separators,
/// ready for template insertion. Never fails; the final cascade stage guesses
/// `app.py` even when it does not exist.
pub fn resolve_entry_point(project_root: &Path) -> String {
    let sources = python_sources(project_root);

    // Stage 1: first file carrying a main guard, in walk order.
    for path in &sources {
        if let Ok(content) = fs::read_to_string(path) {
            if content.contains(MAIN_GUARD_DOUBLE_QUOTED)
                || content.contains(MAIN_GUARD_SINGLE_QUOTED)
            {
                debug!(file = %path.display(), "entry point via main guard");
                return relative_forward_slashes(project_root, path);
            }
        }
    }

    // Stage 2: conventional filenames at the project root.
    for name in CONVENTIONAL_ENTRY_FILES {
        if project_root.join(name).is_file() {
            debug!(file = name, "entry point via conventional filename");
            return (*name).to_string();
        }
    }

    // Stage 3: first file importing a known web framework.
    for path in &sources {
        if let Ok(content) = fs::read_to_string(path) {
            if framework_import_re().is_match(&content) {
                debug!(file = %path.display(), "entry point via framework import");
                return relative_forward_slashes(project_root, path);
            }
        }
    }

    debug!("entry point defaulted to {}", DEFAULT_ENTRY_POINT);
    DEFAULT_ENTRY_POINT.to_string()
}

/// All `.py` files under the root, in sorted depth-first walk order.
fn python_sources(project_root: &Path) -> Vec<PathBuf> {
    WalkBuilder::new(project_root)
        .standard_filters(false)
        .hidden(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
        .flatten()
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().map(|ext| ext == "py").unwrap_or(false))
        .collect()
}

fn relative_forward_slashes(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .filter_map(|c| c.as_os_str().to_str())
        .collect::<Vec<_>>()
        .join("/")
}
