//! Kubernetes manifest generation
//!
//! The manifest set is fixed per category (deployment + service), not per
//! detected framework: every frontend gets the same pair, every Python
//! project gets the same pair.

use serde::Serialize;
use std::collections::BTreeMap;

use super::templates::{
    FRONTEND_K8S_DEPLOYMENT, FRONTEND_K8S_SERVICE, PYTHON_K8S_DEPLOYMENT, PYTHON_K8S_SERVICE,
};
use super::ArtifactSet;
use crate::detection::ProjectKind;

pub const DEPLOYMENT_MANIFEST: &str = "deployment.yaml";
pub const SERVICE_MANIFEST: &str = "service.yaml";

/// Manifest-mode response body: `{"project_type": ..., "k8s": {file: content}}`
#[derive(Debug, Clone, Serialize)]
pub struct K8sArtifacts {
    pub project_type: ProjectKind,
    #[serde(rename = "k8s")]
    pub manifests: BTreeMap<String, String>,
}

impl K8sArtifacts {
    /// The manifest files, placed under `k8s/` for export bundles
    pub fn artifact_set(&self) -> ArtifactSet {
        let mut set = ArtifactSet::new();
        for (filename, content) in &self.manifests {
            set.push(format!("k8s/{}", filename), content.clone());
        }
        set
    }
}

/// Produces the fixed two-document manifest set for a category.
pub fn generate_k8s(kind: ProjectKind) -> K8sArtifacts {
    let (deployment, service) = match kind {
        ProjectKind::Python => (PYTHON_K8S_DEPLOYMENT, PYTHON_K8S_SERVICE),
        ProjectKind::Frontend => (FRONTEND_K8S_DEPLOYMENT, FRONTEND_K8S_SERVICE),
    };

    let mut manifests = BTreeMap::new();
    manifests.insert(DEPLOYMENT_MANIFEST.to_string(), deployment.to_string());
    manifests.insert(SERVICE_MANIFEST.to_string(), service.to_string());

    K8sArtifacts {
        project_type: kind,
        manifests,
    }
}
