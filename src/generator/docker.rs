//! Dockerfile and compose generation

use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::templates::{
    FrontendDockerfileParams, PythonComposeParams, PythonDockerfileParams,
    FRONTEND_DOCKER_COMPOSE,
};
use super::ArtifactSet;
use crate::detection::{
    resolve_entry_point, FrontendDetails, FrontendFramework, ProjectClassification, ProjectKind,
};
use crate::error::{Error, Result};

const PYTHON_IMAGE_TAG: &str = "pythonapp";
const FRONTEND_IMAGE_TAG: &str = "reactapp";

/// Generated container build artifacts plus derived convenience commands.
///
/// Serializes to the docker-mode response body: rendered texts alongside the
/// classification-derived fields.
#[derive(Debug, Clone, Serialize)]
pub struct DockerArtifacts {
    pub project_type: ProjectKind,
    pub dockerfile: String,
    pub docker_compose: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_point: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<FrontendFramework>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_output: Option<String>,
    pub build_command: String,
    pub run_command: String,
    pub docker_compose_command: String,
}

impl DockerArtifacts {
    /// The artifact files this result contributes to an export bundle
    pub fn artifact_set(&self) -> ArtifactSet {
        let mut set = ArtifactSet::new();
        set.push("Dockerfile", self.dockerfile.clone());
        set.push("docker-compose.yml", self.docker_compose.clone());
        set
    }
}

/// Generates the Dockerfile and compose file for a classified project.
pub fn generate_docker(
    project_root: &Path,
    classification: &ProjectClassification,
) -> Result<DockerArtifacts> {
    match classification.kind {
        ProjectKind::Python => generate_python(project_root),
        ProjectKind::Frontend => {
            let details = classification.frontend.as_ref().ok_or_else(|| {
                Error::Internal("frontend classification is missing framework details".to_string())
            })?;
            Ok(generate_frontend(details))
        }
    }
}

fn generate_python(project_root: &Path) -> Result<DockerArtifacts> {
    let entry_point = resolve_entry_point(project_root);
    let install_commands = if has_nonempty_requirements(project_root) {
        "RUN pip install -r requirements.txt\n"
    } else {
        ""
    };

    debug!(entry_point = %entry_point, "generating python docker artifacts");

    let dockerfile = PythonDockerfileParams {
        install_commands,
        entry_point: &entry_point,
    }
    .render();
    let docker_compose = PythonComposeParams {
        entry_point: &entry_point,
    }
    .render();

    Ok(DockerArtifacts {
        project_type: ProjectKind::Python,
        dockerfile,
        docker_compose,
        entry_point: Some(entry_point),
        framework: None,
        build_output: None,
        build_command: format!("docker build -t {} .", PYTHON_IMAGE_TAG),
        run_command: format!("docker run -p 5000:5000 {}", PYTHON_IMAGE_TAG),
        docker_compose_command: "docker-compose up".to_string(),
    })
}

fn generate_frontend(details: &FrontendDetails) -> DockerArtifacts {
    // Next.js static export needs the doubled build-and-export step; every
    // other configuration runs the project's build command as-is.
    let build_step = if details.framework == FrontendFramework::NextJs && details.has_export_script
    {
        "RUN npm run build && npm run export".to_string()
    } else {
        format!("RUN {}", details.build_command)
    };

    debug!(framework = %details.framework, build_output = %details.build_output,
        "generating frontend docker artifacts");

    let dockerfile = FrontendDockerfileParams {
        build_command: &build_step,
        build_output: &details.build_output,
    }
    .render();

    DockerArtifacts {
        project_type: ProjectKind::Frontend,
        dockerfile,
        docker_compose: FRONTEND_DOCKER_COMPOSE.to_string(),
        entry_point: None,
        framework: Some(details.framework),
        build_output: Some(details.build_output.clone()),
        build_command: format!("docker build -t {} .", FRONTEND_IMAGE_TAG),
        run_command: format!("docker run -p 80:80 {}", FRONTEND_IMAGE_TAG),
        docker_compose_command: "docker-compose up".to_string(),
    }
}

/// True when requirements.txt exists and lists at least one dependency
/// (blank lines and comments do not count).
fn has_nonempty_requirements(project_root: &Path) -> bool {
    match fs::read_to_string(project_root.join("requirements.txt")) {
        Ok(content) => content
            .lines()
            .any(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#')),
        Err(_) => false,
    }
}
