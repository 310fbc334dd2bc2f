//! Config loading entry point: assembles sources and validates the result.

use super::merge::merge_policy;
use super::sources::{global_file, workspace_file};
use super::PlaygenConfig;
use crate::error::PlaygenError;
use config::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads [`PlaygenConfig`] from layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load defaults, the global file and the repository files under `repo_root`.
    pub fn load(repo_root: &Path) -> Result<PlaygenConfig, PlaygenError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, repo_root)?;

        let config: PlaygenConfig = builder.build()?.try_deserialize()?;
        Self::validated(config)
    }

    /// Load defaults plus a single explicit file, which must exist.
    pub fn load_from_file(path: &Path) -> Result<PlaygenConfig, PlaygenError> {
        let config: PlaygenConfig = merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()?;
        Self::validated(config)
    }

    /// Built-in defaults with no file sources.
    pub fn default() -> PlaygenConfig {
        PlaygenConfig::default()
    }

    pub fn xdg_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }

    fn validated(config: PlaygenConfig) -> Result<PlaygenConfig, PlaygenError> {
        config.validate().map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            PlaygenError::ConfigError(messages.join("; "))
        })?;
        debug!(
            sections = config.sections.len(),
            variant = %config.generation.variant,
            "Configuration loaded"
        );
        Ok(config)
    }
}
