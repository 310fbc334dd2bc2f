//! playgen CLI Binary
//!
//! Appends generated Sandpack playgrounds to lesson pages and commits them in batches.

use clap::Parser;
use playgen::cli::{map_error, Cli, RunContext};
use playgen::config::ConfigLoader;
use playgen::logging::{init_logging, resolve_log_file_path, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let mut context = match RunContext::new(cli.repo.clone(), cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };
    context.apply_overrides(&cli);

    match context.execute(&cli) {
        Ok(output) => {
            info!("Run completed");
            println!("{}", output);
        }
        Err(e) => {
            error!("Run failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args and config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let loaded = match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(&cli.repo),
    };
    let mut config = loaded.map(|c| c.logging).unwrap_or_default();

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if config.output == "file" {
        config.file = Some(resolve_log_file_path(
            cli.log_file.clone(),
            config.file.clone(),
            &cli.repo,
        ));
    } else if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }

    config
}
