use crate::constants::{DEFAULT_METADATA_PATH, DEFAULT_OUTPUT_ROOT};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for os-config-applier.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to template root directory.
    #[arg(short, long, value_name = "TEMPLATE_ROOT")]
    pub templates: Option<PathBuf>,

    /// Root directory for output.
    #[arg(short, long, value_name = "OUT_DIR", default_value = DEFAULT_OUTPUT_ROOT)]
    pub output: PathBuf,

    /// Path to metadata file.
    #[arg(short, long, value_name = "METADATA_FILE", default_value = DEFAULT_METADATA_PATH)]
    pub metadata: PathBuf,

    /// Validate only. Do not write files.
    #[arg(short, long)]
    pub validate: bool,

    /// Fail when two templates render to the same output file.
    #[arg(long = "strict-collisions")]
    pub strict_collisions: bool,

    /// Kill executable templates that run longer than this many seconds.
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Also append log lines to this file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Increase logging verbosity (`--verbose`, `--verbose --verbose`).
    #[arg(long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments.
pub fn get_args() -> Args {
    Args::parse()
}
