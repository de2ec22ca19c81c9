//! Deployment artifact generation
//!
//! Artifacts are produced as in-memory text, grouped in an [`ArtifactSet`];
//! writing anything to disk is the export assembler's concern.

pub mod docker;
pub mod export;
pub mod kubernetes;
pub mod templates;

pub use docker::{generate_docker, DockerArtifacts};
pub use export::{assemble_bundle, DeploymentTarget};
pub use kubernetes::{generate_k8s, K8sArtifacts};

/// A single generated artifact: a filename and its text content.
///
/// Filenames may carry a relative subdirectory (`k8s/deployment.yaml`), with
/// forward-slash separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub filename: String,
    pub content: String,
}

/// An ordered collection of generated artifacts, fresh per invocation
#[derive(Debug, Clone, Default)]
pub struct ArtifactSet {
    files: Vec<Artifact>,
}

impl ArtifactSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, filename: impl Into<String>, content: impl Into<String>) {
        self.files.push(Artifact {
            filename: filename.into(),
            content: content.into(),
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.files.iter()
    }

    pub fn get(&self, filename: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|a| a.filename == filename)
            .map(|a| a.content.as_str())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
