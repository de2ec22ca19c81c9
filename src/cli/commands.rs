use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::generator::DeploymentTarget;

/// Project stack classification and deployment artifact generation
#[derive(Parser, Debug)]
#[command(
    name = "deploykit",
    about = "Project stack classification and deployment artifact generation",
    version,
    long_about = "deploykit inspects a project archive or directory, classifies its \
                  technology stack, and generates deployment artifacts: Dockerfile and \
                  docker-compose.yml, Kubernetes manifests, or a packaged export bundle."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Verbose output (debug logging)")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Classify a project without generating artifacts",
        long_about = "Classifies the project's technology stack from its marker files and, \
                      for Python projects, resolves the process entry point.\n\n\
                      Examples:\n  \
                      deploykit detect ./my-project\n  \
                      deploykit detect project.zip --format json"
    )]
    Detect(DetectArgs),

    #[command(
        about = "Generate a Dockerfile and docker-compose.yml",
        long_about = "Classifies the project and generates a container build file and \
                      compose file for it.\n\n\
                      Examples:\n  \
                      deploykit docker project.zip\n  \
                      deploykit docker ./my-project --format json -o artifacts.json"
    )]
    Docker(GenerateArgs),

    #[command(
        about = "Generate Kubernetes deployment and service manifests",
        long_about = "Classifies the project and emits the fixed deployment.yaml + \
                      service.yaml manifest pair for its category.\n\n\
                      Examples:\n  \
                      deploykit k8s project.zip --format json"
    )]
    K8s(GenerateArgs),

    #[command(
        about = "Package the project plus generated deployment files into a zip",
        long_about = "Copies the project into an export bundle, adds the generated \
                      deployment files (Dockerfile + compose, or manifests under k8s/), \
                      and writes the bundle as a zip archive.\n\n\
                      Examples:\n  \
                      deploykit export project.zip\n  \
                      deploykit export ./my-project --deployment k8s -o bundle.zip"
    )]
    Export(ExportArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    #[arg(value_name = "PATH", help = "Project zip archive or directory")]
    pub path: PathBuf,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write output to file instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(value_name = "PATH", help = "Project zip archive or directory")]
    pub path: PathBuf,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write output to file instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct ExportArgs {
    #[arg(value_name = "PATH", help = "Project zip archive or directory")]
    pub path: PathBuf,

    #[arg(
        short = 'd',
        long,
        value_enum,
        default_value = "docker",
        help = "Which deployment files the bundle carries"
    )]
    pub deployment: DeploymentTargetArg,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        default_value = "export_package.zip",
        help = "Bundle output path"
    )]
    pub output: PathBuf,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentTargetArg {
    Docker,
    K8s,
}

impl From<DeploymentTargetArg> for DeploymentTarget {
    fn from(arg: DeploymentTargetArg) -> Self {
        match arg {
            DeploymentTargetArg::Docker => DeploymentTarget::Docker,
            DeploymentTargetArg::K8s => DeploymentTarget::K8s,
        }
    }
}
