use std::path::PathBuf;

use clap::Parser;

/// Convert GitHub collaborator listings (JSON) into per-repository permission files (YAML)
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory containing the <repository>.json collaborator listings
    #[arg(short, long, env = "C2Y_INPUT_DIR", default_value = "../collabs")]
    pub input_dir: PathBuf,

    /// Directory where the <repository>.yaml files are written
    #[arg(short, long, env = "C2Y_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Do not actually write the YAML files
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Log-level (error, warn, info, debug, trace)
    #[arg(short, long, env = "C2Y_LOG_LEVEL", default_value = "info")]
    pub log_level: log::LevelFilter,
}
