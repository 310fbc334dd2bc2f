//! CLI route: run context wiring configuration, collaborators and the driver.

use crate::cli::parse::Cli;
use crate::cli::presentation::format_run_summary;
use crate::config::{ConfigLoader, PlaygenConfig};
use crate::driver::{DriverSettings, RunOptions, RunSummary, SectionDriver};
use crate::error::PlaygenError;
use crate::generation::{PlaygroundGenerator, TokioClock};
use crate::notify::{CommandNotifier, NoopNotifier, Notifier};
use crate::provider::GeminiClient;
use crate::vcs::{BatchCommitter, GitCli};
use std::path::{Path, PathBuf};
use tracing::info;

/// Runtime context for CLI execution: repository root and resolved configuration.
pub struct RunContext {
    repo_root: PathBuf,
    config: PlaygenConfig,
}

impl RunContext {
    /// Create run context from repository root and optional config path. Uses ConfigLoader only.
    pub fn new(repo_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, PlaygenError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&repo_root)?,
        };
        Ok(Self::with_config(repo_root, config))
    }

    pub fn with_config(repo_root: PathBuf, config: PlaygenConfig) -> Self {
        Self { repo_root, config }
    }

    pub fn config(&self) -> &PlaygenConfig {
        &self.config
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    /// Fold command-line overrides into the loaded configuration.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(variant) = cli.variant {
            self.config.generation.variant = variant;
        }
        if cli.no_notify {
            self.config.notify.enabled = false;
        }
    }

    /// Read the API key named by the configuration. Missing or blank is an error.
    pub fn api_key(&self) -> Result<String, PlaygenError> {
        let name = &self.config.generation.api_key_env;
        match std::env::var(name) {
            Ok(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(PlaygenError::MissingCredential(name.clone())),
        }
    }

    pub fn driver_settings(&self) -> DriverSettings {
        let variant = self.config.generation.variant;
        DriverSettings {
            pages_root: self.config.repository.pages_root(&self.repo_root),
            extension: self.config.repository.extension.clone(),
            sections: self.config.sections.clone(),
            batch_size: self.config.batch.size,
            request_delay: self.config.batch.request_delay(variant),
            batch_delay: self.config.batch.batch_delay(variant),
            variant,
        }
    }

    /// Run the generator and return the rendered summary.
    pub fn execute(&self, cli: &Cli) -> Result<String, PlaygenError> {
        let summary = self.run(&RunOptions {
            start_section: cli.section.clone(),
            limit: cli.limit.map(|n| n as usize),
        })?;
        Ok(format_run_summary(&summary))
    }

    /// Check the credential, build the collaborators and drive all sections.
    pub fn run(&self, options: &RunOptions) -> Result<RunSummary, PlaygenError> {
        let api_key = self.api_key()?;
        let generation = &self.config.generation;
        let variant = generation.variant;

        let client = GeminiClient::new(
            generation.model(),
            api_key,
            generation.endpoint.clone(),
            generation.request_timeout(),
        )?;
        let vcs = GitCli::new(
            &self.repo_root,
            self.config.repository.remote.clone(),
            self.config.repository.branch.clone(),
        );
        let notifier: Box<dyn Notifier> = if self.config.notify.enabled {
            Box::new(CommandNotifier::new(self.config.notify.command.clone()))
        } else {
            Box::new(NoopNotifier)
        };
        let clock = TokioClock;

        let generator = PlaygroundGenerator::new(
            &client,
            &clock,
            variant,
            generation.retry_policy(),
            generation.options(),
        );
        let committer = BatchCommitter::new(&vcs, variant.profile().commit_prefix);
        let driver = SectionDriver::new(
            self.driver_settings(),
            generator,
            committer,
            notifier.as_ref(),
            &clock,
        );

        info!(
            variant = %variant,
            model = %generation.model(),
            sections = self.config.sections.len(),
            "Starting playground generation"
        );

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(runtime.block_on(driver.run(options)))
    }
}
