pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CliArgs, Commands, DetectArgs, ExportArgs, GenerateArgs};
pub use output::{OutputFormat, OutputFormatter};
