//! Export bundle assembly
//!
//! Copies the project tree into a staging directory and writes the generated
//! deployment files next to it. Each artifact is written through its own file
//! handle. Zipping the staged tree is the archive module's job.

use ignore::WalkBuilder;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::{docker::generate_docker, kubernetes::generate_k8s, ArtifactSet};
use crate::detection::ProjectClassification;
use crate::error::Result;

/// Which deployment artifacts the export bundle should carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentTarget {
    /// Dockerfile + docker-compose.yml at the bundle root
    Docker,
    /// deployment.yaml + service.yaml under `k8s/`
    K8s,
}

impl fmt::Display for DeploymentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeploymentTarget::Docker => write!(f, "docker"),
            DeploymentTarget::K8s => write!(f, "k8s"),
        }
    }
}

/// Stages an export bundle: the original project tree plus the generated
/// deployment files for `target`. Returns the artifacts that were added.
///
/// `staging` must not live inside `project_root`.
pub fn assemble_bundle(
    project_root: &Path,
    classification: &ProjectClassification,
    target: DeploymentTarget,
    staging: &Path,
) -> Result<ArtifactSet> {
    copy_tree(project_root, staging)?;

    let artifacts = match target {
        DeploymentTarget::Docker => generate_docker(project_root, classification)?.artifact_set(),
        DeploymentTarget::K8s => generate_k8s(classification.kind).artifact_set(),
    };

    write_artifacts(staging, &artifacts)?;
    debug!(target = %target, count = artifacts.len(), "staged export bundle");
    Ok(artifacts)
}

/// Writes each artifact under `dir`, one independent file handle per artifact.
fn write_artifacts(dir: &Path, artifacts: &ArtifactSet) -> Result<()> {
    for artifact in artifacts.iter() {
        let dest = dir.join(&artifact.filename);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&dest, &artifact.content)?;
    }
    Ok(())
}

/// Copies every file in the project tree, hidden files included.
fn copy_tree(src: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest)?;
    for entry in WalkBuilder::new(src)
        .standard_filters(false)
        .hidden(false)
        .build()
        .flatten()
    {
        let rel = match entry.path().strip_prefix(src) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
            _ => continue,
        };
        let target = dest.join(&rel);
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
