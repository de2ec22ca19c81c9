//! Error taxonomy for the classification and generation pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the deploykit pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// Input is not a zip archive or project directory, or the archive is corrupt
    #[error("invalid upload: {0}")]
    InvalidUpload(String),

    /// No recognized marker file was found in the project root
    #[error("unsupported project type: no recognized marker file (requirements.txt, pyproject.toml, package.json)")]
    UnsupportedProjectType,

    /// A package manifest exists but could not be parsed
    #[error("invalid manifest {}: {source}", path.display())]
    InvalidManifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A pipeline invariant was broken; indicates a bug, not bad input
    #[error("internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
