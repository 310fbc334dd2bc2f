//! Configuration System
//!
//! Layered configuration: built-in defaults, the user's global file, then the
//! repository's own files. Every value has a default, so running without any
//! file reproduces the stock behavior of the selected variant.

use crate::generation::RetryPolicy;
use crate::logging::LoggingConfig;
use crate::provider::GenerationOptions;
use crate::section::{default_sections, Section};
use crate::variant::Variant;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaygenConfig {
    #[serde(default)]
    pub repository: RepositoryConfig,

    #[serde(default)]
    pub generation: GenerationConfig,

    #[serde(default)]
    pub batch: BatchConfig,

    /// Sections in processing order
    #[serde(default = "default_sections")]
    pub sections: Vec<Section>,

    #[serde(default)]
    pub notify: NotifyConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for PlaygenConfig {
    fn default() -> Self {
        Self {
            repository: RepositoryConfig::default(),
            generation: GenerationConfig::default(),
            batch: BatchConfig::default(),
            sections: default_sections(),
            notify: NotifyConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Lesson layout and git target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Lesson tree, relative to the repository root
    #[serde(default = "default_pages_dir")]
    pub pages_dir: PathBuf,

    /// Lesson file extension, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_branch")]
    pub branch: String,
}

fn default_pages_dir() -> PathBuf {
    PathBuf::from("pages")
}

fn default_extension() -> String {
    "mdx".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            pages_dir: default_pages_dir(),
            extension: default_extension(),
            remote: default_remote(),
            branch: default_branch(),
        }
    }
}

impl RepositoryConfig {
    pub fn pages_root(&self, repo_root: &Path) -> PathBuf {
        repo_root.join(&self.pages_dir)
    }
}

/// Generation service settings. Unset values fall back to the variant profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default)]
    pub variant: Variant,

    #[serde(default)]
    pub model: Option<String>,

    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// Base URL override for the generation API
    #[serde(default)]
    pub endpoint: Option<String>,

    #[serde(default)]
    pub temperature: Option<f32>,

    #[serde(default)]
    pub max_output_tokens: Option<u32>,

    #[serde(default)]
    pub max_attempts: Option<u32>,

    #[serde(default)]
    pub retry_delay_ms: Option<u64>,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_api_key_env() -> String {
    "GOOGLE_GEMINI_API_KEY".to_string()
}

fn default_request_timeout_secs() -> u64 {
    120
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            model: None,
            api_key_env: default_api_key_env(),
            endpoint: None,
            temperature: None,
            max_output_tokens: None,
            max_attempts: None,
            retry_delay_ms: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl GenerationConfig {
    pub fn model(&self) -> String {
        self.model
            .clone()
            .unwrap_or_else(|| self.variant.profile().model.to_string())
    }

    pub fn options(&self) -> GenerationOptions {
        let profile = self.variant.profile();
        GenerationOptions {
            temperature: self.temperature.unwrap_or(profile.temperature),
            max_output_tokens: self.max_output_tokens.unwrap_or(profile.max_output_tokens),
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        let profile = self.variant.profile();
        RetryPolicy::new(
            self.max_attempts.unwrap_or(profile.max_attempts),
            self.retry_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(profile.retry_delay),
        )
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Batching and pacing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Modified lessons per commit
    #[serde(default = "default_batch_size")]
    pub size: usize,

    /// Pause after every lesson
    #[serde(default)]
    pub request_delay_ms: Option<u64>,

    /// Pause after every full-batch commit
    #[serde(default)]
    pub batch_delay_ms: Option<u64>,
}

fn default_batch_size() -> usize {
    crate::driver::DEFAULT_BATCH_SIZE
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            size: default_batch_size(),
            request_delay_ms: None,
            batch_delay_ms: None,
        }
    }
}

impl BatchConfig {
    pub fn request_delay(&self, variant: Variant) -> Duration {
        self.request_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(variant.profile().request_delay)
    }

    pub fn batch_delay(&self, variant: Variant) -> Duration {
        self.batch_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(variant.profile().batch_delay)
    }
}

/// Completion notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotifyConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Program and arguments; `{message}` is replaced with the completion text
    #[serde(default = "default_notify_command")]
    pub command: Vec<String>,
}

fn default_true() -> bool {
    true
}

fn default_notify_command() -> Vec<String> {
    ["openclaw", "system", "event", "--text", "{message}", "--mode", "now"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: default_notify_command(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Section(String, String),
    Batch(String),
    Generation(String),
    Notify(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Section(name, msg) => write!(f, "Section '{}': {}", name, msg),
            ValidationError::Batch(msg) => write!(f, "Batch: {}", msg),
            ValidationError::Generation(msg) => write!(f, "Generation: {}", msg),
            ValidationError::Notify(msg) => write!(f, "Notify: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl PlaygenConfig {
    /// Validate the whole configuration, collecting every problem found.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.sections.is_empty() {
            errors.push(ValidationError::Section(
                String::new(),
                "at least one section must be configured".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for section in &self.sections {
            if section.name.trim().is_empty() {
                errors.push(ValidationError::Section(
                    section.name.clone(),
                    "name cannot be empty".to_string(),
                ));
            } else if !seen.insert(section.name.as_str()) {
                errors.push(ValidationError::Section(
                    section.name.clone(),
                    "configured more than once".to_string(),
                ));
            }
        }

        if self.batch.size == 0 {
            errors.push(ValidationError::Batch("size must be at least 1".to_string()));
        }

        if self.generation.api_key_env.trim().is_empty() {
            errors.push(ValidationError::Generation(
                "api_key_env cannot be empty".to_string(),
            ));
        }
        if let Some(model) = &self.generation.model {
            if model.trim().is_empty() {
                errors.push(ValidationError::Generation(
                    "model cannot be empty".to_string(),
                ));
            }
        }
        if self.generation.request_timeout_secs == 0 {
            errors.push(ValidationError::Generation(
                "request_timeout_secs must be at least 1".to_string(),
            ));
        }

        if self.notify.enabled && self.notify.command.is_empty() {
            errors.push(ValidationError::Notify(
                "command cannot be empty when notifications are enabled".to_string(),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
