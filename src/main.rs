use deploykit::cli::commands::{CliArgs, Commands};
use deploykit::cli::handlers::{handle_detect, handle_docker, handle_export, handle_k8s};
use deploykit::util::logging::{init_logging, parse_level, LoggingConfig};
use deploykit::VERSION;

use clap::Parser;
use std::env;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("deploykit v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match &args.command {
        Commands::Detect(detect_args) => handle_detect(detect_args),
        Commands::Docker(docker_args) => handle_docker(docker_args),
        Commands::K8s(k8s_args) => handle_k8s(k8s_args),
        Commands::Export(export_args) => handle_export(export_args),
    };

    std::process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        let level_str = env::var("DEPLOYKIT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        parse_level(&level_str)
    };

    init_logging(LoggingConfig::with_level(level));
}
