//! CLI parse: clap types for playgen. No behavior; definitions only.

use crate::variant::Variant;
use clap::Parser;
use std::path::PathBuf;

/// playgen - append generated Sandpack playgrounds to lesson pages
#[derive(Parser, Debug)]
#[command(name = "playgen")]
#[command(about = "Generate interactive Sandpack playgrounds for lesson pages and commit them in batches")]
pub struct Cli {
    /// Resume from this section; earlier sections are skipped
    pub section: Option<String>,

    /// Process at most N pending lessons per section
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: Option<u32>,

    /// Repository root containing the lesson pages
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Generation variant (verbose, simplified)
    #[arg(long)]
    pub variant: Option<Variant>,

    /// Skip the completion notification
    #[arg(long)]
    pub no_notify: bool,

    /// Enable verbose logging
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
