//! Subcommand handlers
//!
//! Each handler runs the pipeline for one command and maps the outcome to an
//! exit code. Scratch directories are `TempDir`s owned by the handler, so
//! cleanup happens on every exit path.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::{error, info};

use super::commands::{DetectArgs, ExportArgs, GenerateArgs};
use super::output::OutputFormatter;
use crate::archive;
use crate::config::DeploykitConfig;
use crate::detection::{
    classify, locate_project_root, resolve_entry_point, DetectionReport, ProjectClassification,
    ProjectKind,
};
use crate::generator::{assemble_bundle, generate_docker, generate_k8s, DeploymentTarget};

/// A materialized, located, classified project.
///
/// Holds the scratch directory alive for as long as the project root may
/// point into it.
#[derive(Debug)]
struct PreparedProject {
    _scratch: Option<TempDir>,
    root: PathBuf,
    classification: ProjectClassification,
}

fn prepare(input: &Path) -> Result<PreparedProject> {
    let config = DeploykitConfig::from_env().context("Failed to load configuration")?;

    let scratch = TempDir::new_in(&config.scratch_dir)
        .context("Failed to create scratch directory")?;
    let materialized = archive::materialize(input, scratch.path(), config.max_archive_size)?;
    let root = locate_project_root(&materialized);
    let classification = classify(&root)?;

    // The scratch directory only needs to outlive the pipeline when the
    // project was extracted into it.
    let scratch = if materialized.starts_with(scratch.path()) {
        Some(scratch)
    } else {
        None
    };

    Ok(PreparedProject {
        _scratch: scratch,
        root,
        classification,
    })
}

fn emit(output: Option<&Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            info!(file = %path.display(), "wrote output");
        }
        None => println!("{}", text),
    }
    Ok(())
}

pub fn handle_detect(args: &DetectArgs) -> i32 {
    match run_detect(args) {
        Ok(()) => 0,
        Err(e) => {
            error!("detection failed: {:#}", e);
            1
        }
    }
}

fn run_detect(args: &DetectArgs) -> Result<()> {
    let project = prepare(&args.path)?;
    let entry_point = match project.classification.kind {
        ProjectKind::Python => Some(resolve_entry_point(&project.root)),
        ProjectKind::Frontend => None,
    };
    let report = DetectionReport::new(&project.classification, entry_point);

    let formatter = OutputFormatter::new(args.format.into());
    emit(
        args.output.as_deref(),
        &formatter.format_detection(&report)?,
    )
}

pub fn handle_docker(args: &GenerateArgs) -> i32 {
    match run_docker(args) {
        Ok(()) => 0,
        Err(e) => {
            error!("docker artifact generation failed: {:#}", e);
            1
        }
    }
}

fn run_docker(args: &GenerateArgs) -> Result<()> {
    let project = prepare(&args.path)?;
    let artifacts = generate_docker(&project.root, &project.classification)?;

    let formatter = OutputFormatter::new(args.format.into());
    emit(args.output.as_deref(), &formatter.format_docker(&artifacts)?)
}

pub fn handle_k8s(args: &GenerateArgs) -> i32 {
    match run_k8s(args) {
        Ok(()) => 0,
        Err(e) => {
            error!("manifest generation failed: {:#}", e);
            1
        }
    }
}

fn run_k8s(args: &GenerateArgs) -> Result<()> {
    let project = prepare(&args.path)?;
    let artifacts = generate_k8s(project.classification.kind);

    let formatter = OutputFormatter::new(args.format.into());
    emit(args.output.as_deref(), &formatter.format_k8s(&artifacts)?)
}

pub fn handle_export(args: &ExportArgs) -> i32 {
    match run_export(args) {
        Ok(()) => 0,
        Err(e) => {
            error!("export failed: {:#}", e);
            1
        }
    }
}

fn run_export(args: &ExportArgs) -> Result<()> {
    let project = prepare(&args.path)?;
    let target: DeploymentTarget = args.deployment.into();

    // Staging lives in its own scratch directory so it can never end up
    // inside the project tree being copied.
    let staging = TempDir::new().context("Failed to create staging directory")?;
    let bundle_dir = staging.path().join("export_bundle");
    let artifacts = assemble_bundle(&project.root, &project.classification, target, &bundle_dir)?;
    archive::pack(&bundle_dir, &args.output)?;

    info!(
        bundle = %args.output.display(),
        deployment = %target,
        added = artifacts.len(),
        "export bundle written"
    );
    println!("{}", args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::{DeploymentTargetArg, OutputFormatArg};
    use serial_test::serial;
    use tempfile::TempDir;

    fn python_zip(dir: &Path) -> PathBuf {
        let staging = dir.join("src-tree");
        fs::create_dir_all(&staging).unwrap();
        fs::write(staging.join("requirements.txt"), "flask\n").unwrap();
        fs::write(
            staging.join("main.py"),
            "if __name__ == \"__main__\":\n    run()\n",
        )
        .unwrap();
        let zip_path = dir.join("project.zip");
        archive::pack(&staging, &zip_path).unwrap();
        zip_path
    }

    #[test]
    #[serial]
    fn test_prepare_from_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("requirements.txt"), "flask\n").unwrap();

        let project = prepare(dir.path()).unwrap();
        assert_eq!(project.classification.kind, ProjectKind::Python);
        assert_eq!(project.root, dir.path());
        assert!(project._scratch.is_none());
    }

    #[test]
    #[serial]
    fn test_prepare_from_zip_keeps_scratch_alive() {
        let dir = TempDir::new().unwrap();
        let zip_path = python_zip(dir.path());

        let project = prepare(&zip_path).unwrap();
        assert_eq!(project.classification.kind, ProjectKind::Python);
        assert!(project._scratch.is_some());
        assert!(project.root.join("main.py").is_file());
    }

    #[test]
    #[serial]
    fn test_prepare_rejects_unclassifiable_project() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("README.md"), "nothing to see").unwrap();

        let err = prepare(dir.path()).unwrap_err();
        assert!(err.to_string().contains("unsupported project type"));
    }

    #[test]
    #[serial]
    fn test_handle_detect_writes_output_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("requirements.txt"), "flask\n").unwrap();
        fs::write(
            dir.path().join("main.py"),
            "if __name__ == \"__main__\":\n    run()\n",
        )
        .unwrap();
        let out = dir.path().join("report.json");

        let args = DetectArgs {
            path: dir.path().to_path_buf(),
            format: OutputFormatArg::Json,
            output: Some(out.clone()),
        };
        assert_eq!(handle_detect(&args), 0);

        let body: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(body["project_type"], "python");
        assert_eq!(body["entry_point"], "main.py");
    }

    #[test]
    #[serial]
    fn test_handle_docker_writes_output_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("requirements.txt"), "flask\n").unwrap();
        let out = dir.path().join("artifacts.json");

        let args = GenerateArgs {
            path: dir.path().to_path_buf(),
            format: OutputFormatArg::Json,
            output: Some(out.clone()),
        };
        assert_eq!(handle_docker(&args), 0);

        let body: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(body["project_type"], "python");
        assert!(body["dockerfile"].as_str().unwrap().contains("FROM python"));
    }

    #[test]
    #[serial]
    fn test_handle_docker_fails_on_unsupported_project() {
        let dir = TempDir::new().unwrap();
        let args = GenerateArgs {
            path: dir.path().to_path_buf(),
            format: OutputFormatArg::Json,
            output: None,
        };
        assert_eq!(handle_docker(&args), 1);
    }

    #[test]
    #[serial]
    fn test_handle_export_produces_bundle() {
        let dir = TempDir::new().unwrap();
        let zip_path = python_zip(dir.path());
        let bundle = dir.path().join("export_package.zip");

        let args = ExportArgs {
            path: zip_path,
            deployment: DeploymentTargetArg::K8s,
            output: bundle.clone(),
        };
        assert_eq!(handle_export(&args), 0);
        assert!(bundle.is_file());

        let file = fs::File::open(&bundle).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        let names: Vec<_> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        assert!(names.contains(&"requirements.txt".to_string()));
        assert!(names.contains(&"main.py".to_string()));
        assert!(names.contains(&"k8s/deployment.yaml".to_string()));
        assert!(names.contains(&"k8s/service.yaml".to_string()));
    }
}
