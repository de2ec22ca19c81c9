//! Classification data model
//!
//! Everything here is request-scoped: a classification is produced per
//! invocation and discarded once artifacts have been generated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level technology category of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectKind {
    /// Server-side Python project (requirements.txt / pyproject.toml)
    #[serde(rename = "python")]
    Python,
    /// Web frontend project (package.json)
    #[serde(rename = "react")]
    Frontend,
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectKind::Python => write!(f, "python"),
            ProjectKind::Frontend => write!(f, "react"),
        }
    }
}

/// Frontend meta-framework detected from package.json dependencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrontendFramework {
    #[serde(rename = "next")]
    NextJs,
    #[serde(rename = "gatsby")]
    Gatsby,
    /// Plain React (Create React App conventions)
    #[serde(rename = "react")]
    React,
}

impl FrontendFramework {
    /// Default build output directory for this framework
    pub fn default_build_output(&self) -> &'static str {
        match self {
            FrontendFramework::NextJs => ".next",
            FrontendFramework::Gatsby => "public",
            FrontendFramework::React => "build",
        }
    }
}

impl fmt::Display for FrontendFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontendFramework::NextJs => write!(f, "next"),
            FrontendFramework::Gatsby => write!(f, "gatsby"),
            FrontendFramework::React => write!(f, "react"),
        }
    }
}

/// Frontend-specific parameters derived during classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrontendDetails {
    pub framework: FrontendFramework,
    /// Directory the framework's build step emits static files into
    pub build_output: String,
    /// The project's declared build script, or the conventional default
    pub build_command: String,
    /// Whether the manifest declares an `export` script (Next.js static export)
    pub has_export_script: bool,
}

/// Result of classifying a project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectClassification {
    pub kind: ProjectKind,
    /// Present only for frontend projects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontend: Option<FrontendDetails>,
}

impl ProjectClassification {
    pub fn python() -> Self {
        Self {
            kind: ProjectKind::Python,
            frontend: None,
        }
    }

    pub fn frontend(details: FrontendDetails) -> Self {
        Self {
            kind: ProjectKind::Frontend,
            frontend: Some(details),
        }
    }
}

/// Flattened classification summary for the `detect` command
#[derive(Debug, Clone, Serialize)]
pub struct DetectionReport {
    pub project_type: ProjectKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<FrontendFramework>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_point: Option<String>,
}

impl DetectionReport {
    pub fn new(classification: &ProjectClassification, entry_point: Option<String>) -> Self {
        let frontend = classification.frontend.as_ref();
        Self {
            project_type: classification.kind,
            framework: frontend.map(|d| d.framework),
            build_output: frontend.map(|d| d.build_output.clone()),
            build_command: frontend.map(|d| d.build_command.clone()),
            entry_point,
        }
    }
}
