//! Marker-file classification
//!
//! Classification is a fixed priority cascade over marker files, first match
//! wins. The cascade is kept as a declarative rule list so each rule is
//! independently testable.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use super::types::{FrontendDetails, FrontendFramework, ProjectClassification, ProjectKind};
use crate::error::{Error, Result};

/// Conventional build command when package.json declares no build script
const DEFAULT_BUILD_COMMAND: &str = "npm run build";

/// Build output directory for Next.js static export mode
const NEXT_EXPORT_OUTPUT: &str = "out";

/// A single classification rule: any marker present selects the kind.
struct MarkerRule {
    markers: &'static [&'static str],
    kind: ProjectKind,
}

/// Evaluated in order; first rule with a matching marker wins.
const RULES: &[MarkerRule] = &[
    MarkerRule {
        markers: &["requirements.txt", "pyproject.toml"],
        kind: ProjectKind::Python,
    },
    MarkerRule {
        markers: &["package.json"],
        kind: ProjectKind::Frontend,
    },
];

/// Relevant subset of package.json
#[derive(Debug, Default, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    dependencies: BTreeMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: BTreeMap<String, String>,
    #[serde(default)]
    scripts: BTreeMap<String, String>,
}

impl PackageManifest {
    /// Checks the combined dependency set (dependencies ∪ devDependencies)
    fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.contains_key(name) || self.dev_dependencies.contains_key(name)
    }

    fn build_command(&self) -> String {
        self.scripts
            .get("build")
            .cloned()
            .unwrap_or_else(|| DEFAULT_BUILD_COMMAND.to_string())
    }

    fn has_export_script(&self) -> bool {
        self.scripts.contains_key("export")
    }
}

/// Classifies the project at `project_root`.
///
/// Fails with [`Error::UnsupportedProjectType`] when no marker file matches
/// and with [`Error::InvalidManifest`] when package.json cannot be parsed.
pub fn classify(project_root: &Path) -> Result<ProjectClassification> {
    let rule = RULES
        .iter()
        .find(|rule| {
            rule.markers
                .iter()
                .any(|marker| project_root.join(marker).is_file())
        })
        .ok_or(Error::UnsupportedProjectType)?;

    let classification = match rule.kind {
        ProjectKind::Python => ProjectClassification::python(),
        ProjectKind::Frontend => ProjectClassification::frontend(classify_frontend(project_root)?),
    };

    debug!(kind = %classification.kind, "classified project");
    Ok(classification)
}

/// Sub-classifies a frontend project from its package.json.
fn classify_frontend(project_root: &Path) -> Result<FrontendDetails> {
    let manifest_path = project_root.join("package.json");
    let content = fs::read_to_string(&manifest_path)?;
    let manifest: PackageManifest =
        serde_json::from_str(&content).map_err(|source| Error::InvalidManifest {
            path: manifest_path,
            source,
        })?;

    let build_command = manifest.build_command();
    let has_export_script = manifest.has_export_script();

    let (framework, build_output) = if manifest.has_dependency("next") {
        let output = if has_export_script {
            NEXT_EXPORT_OUTPUT.to_string()
        } else {
            FrontendFramework::NextJs.default_build_output().to_string()
        };
        (FrontendFramework::NextJs, output)
    } else if manifest.has_dependency("gatsby") {
        (
            FrontendFramework::Gatsby,
            FrontendFramework::Gatsby.default_build_output().to_string(),
        )
    } else {
        (
            FrontendFramework::React,
            FrontendFramework::React.default_build_output().to_string(),
        )
    };

    Ok(FrontendDetails {
        framework,
        build_output,
        build_command,
        has_export_script,
    })
}
