//! deploykit - project stack classification and deployment artifact generation
//!
//! This library inspects a project (a zip archive or a directory), classifies
//! its technology stack from marker files, and generates deployment
//! artifacts: a Dockerfile + docker-compose.yml pair, Kubernetes manifests,
//! or a packaged export bundle containing the project plus the generated
//! files.
//!
//! # Core Concepts
//!
//! - **Materialization**: turning the input into a readable directory tree
//!   (zip archives are extracted into a request-scoped scratch directory)
//! - **Classification**: a fixed priority cascade over marker files
//!   (`requirements.txt`, `pyproject.toml`, `package.json`), with frontend
//!   sub-classification from the package.json dependency set
//! - **Generation**: filling fixed templates with classification-derived
//!   parameters; artifacts stay in memory until an export bundle asks for
//!   them on disk
//!
//! # Example Usage
//!
//! ```no_run
//! use deploykit::detection::{classify, locate_project_root};
//! use deploykit::generator::generate_docker;
//! use std::path::Path;
//!
//! fn artifacts_for(tree: &Path) -> anyhow::Result<()> {
//!     let root = locate_project_root(tree);
//!     let classification = classify(&root)?;
//!     let artifacts = generate_docker(&root, &classification)?;
//!     println!("{}", artifacts.dockerfile);
//!     Ok(())
//! }
//! ```

// Public modules
pub mod archive;
pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod generator;
pub mod util;

// Re-export key types for convenient access
pub use config::{ConfigError, DeploykitConfig};
pub use detection::{
    classify, locate_project_root, resolve_entry_point, DetectionReport, FrontendDetails,
    FrontendFramework, ProjectClassification, ProjectKind,
};
pub use error::{Error, Result};
pub use generator::{
    assemble_bundle, generate_docker, generate_k8s, Artifact, ArtifactSet, DeploymentTarget,
    DockerArtifacts, K8sArtifacts,
};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_deploykit() {
        assert_eq!(NAME, "deploykit");
    }
}
