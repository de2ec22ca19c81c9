//! Output formatting for detection and generation results
//!
//! JSON output is the machine-readable response body; human output is a
//! readable summary with the rendered artifact texts under headers.

use anyhow::{Context, Result};

use crate::detection::types::DetectionReport;
use crate::generator::{DockerArtifacts, K8sArtifacts};

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// Human-readable formatted text
    Human,
}

/// Formatter for pipeline results
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format_detection(&self, report: &DetectionReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(report)
                .context("Failed to serialize detection report to JSON"),
            OutputFormat::Human => Ok(self.detection_human(report)),
        }
    }

    pub fn format_docker(&self, artifacts: &DockerArtifacts) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(artifacts)
                .context("Failed to serialize docker artifacts to JSON"),
            OutputFormat::Human => Ok(self.docker_human(artifacts)),
        }
    }

    pub fn format_k8s(&self, artifacts: &K8sArtifacts) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(artifacts)
                .context("Failed to serialize k8s artifacts to JSON"),
            OutputFormat::Human => Ok(self.k8s_human(artifacts)),
        }
    }

    fn detection_human(&self, report: &DetectionReport) -> String {
        let mut out = String::new();
        out.push_str(&format!("Project type:  {}\n", report.project_type));
        if let Some(framework) = &report.framework {
            out.push_str(&format!("Framework:     {}\n", framework));
        }
        if let Some(build_output) = &report.build_output {
            out.push_str(&format!("Build output:  {}\n", build_output));
        }
        if let Some(build_command) = &report.build_command {
            out.push_str(&format!("Build command: {}\n", build_command));
        }
        if let Some(entry_point) = &report.entry_point {
            out.push_str(&format!("Entry point:   {}\n", entry_point));
        }
        out
    }

    fn docker_human(&self, artifacts: &DockerArtifacts) -> String {
        let mut out = String::new();
        out.push_str(&format!("Project type: {}\n", artifacts.project_type));
        if let Some(entry_point) = &artifacts.entry_point {
            out.push_str(&format!("Entry point:  {}\n", entry_point));
        }
        if let Some(framework) = &artifacts.framework {
            out.push_str(&format!("Framework:    {}\n", framework));
        }
        if let Some(build_output) = &artifacts.build_output {
            out.push_str(&format!("Build output: {}\n", build_output));
        }
        out.push_str(&format!("Build:        {}\n", artifacts.build_command));
        out.push_str(&format!("Run:          {}\n", artifacts.run_command));
        out.push_str(&format!(
            "Compose:      {}\n",
            artifacts.docker_compose_command
        ));
        out.push_str("\n--- Dockerfile ---\n");
        out.push_str(&artifacts.dockerfile);
        out.push_str("\n--- docker-compose.yml ---\n");
        out.push_str(&artifacts.docker_compose);
        out
    }

    fn k8s_human(&self, artifacts: &K8sArtifacts) -> String {
        let mut out = String::new();
        out.push_str(&format!("Project type: {}\n", artifacts.project_type));
        for (filename, content) in &artifacts.manifests {
            out.push_str(&format!("\n--- k8s/{} ---\n", filename));
            out.push_str(content);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::{ProjectClassification, ProjectKind};
    use crate::generator::generate_k8s;

    #[test]
    fn test_detection_json_round_trips() {
        let report = DetectionReport::new(&ProjectClassification::python(), Some("main.py".into()));
        let formatter = OutputFormatter::new(OutputFormat::Json);

        let json = formatter.format_detection(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["project_type"], "python");
        assert_eq!(value["entry_point"], "main.py");
    }

    #[test]
    fn test_detection_human_output() {
        let report = DetectionReport::new(&ProjectClassification::python(), Some("main.py".into()));
        let formatter = OutputFormatter::new(OutputFormat::Human);

        let text = formatter.format_detection(&report).unwrap();
        assert!(text.contains("Project type:  python"));
        assert!(text.contains("Entry point:   main.py"));
        assert!(!text.contains("Framework"));
    }

    #[test]
    fn test_k8s_human_output_lists_manifests() {
        let artifacts = generate_k8s(ProjectKind::Frontend);
        let formatter = OutputFormatter::new(OutputFormat::Human);

        let text = formatter.format_k8s(&artifacts).unwrap();
        assert!(text.contains("Project type: react"));
        assert!(text.contains("--- k8s/deployment.yaml ---"));
        assert!(text.contains("--- k8s/service.yaml ---"));
    }
}
