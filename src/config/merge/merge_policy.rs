//! Merge rules: defaults first, later sources override earlier ones key by key.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("repository.pages_dir", "pages")?
        .set_default("repository.extension", "mdx")?
        .set_default("repository.remote", "origin")?
        .set_default("repository.branch", "main")?
        .set_default("generation.api_key_env", "GOOGLE_GEMINI_API_KEY")?
        .set_default("generation.request_timeout_secs", 120)?
        .set_default("batch.size", 10)
}
