//! Error types for the playground generator.

use thiserror::Error;

/// Errors raised by the generation pipeline and its collaborators.
///
/// Only `MissingCredential`, `ConfigError` and `LoggingError` stop a run;
/// everything else is handled per lesson or per batch by the driver.
#[derive(Debug, Error)]
pub enum PlaygenError {
    #[error("{0} is not set. Export it with your generation service API key and run again.")]
    MissingCredential(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Provider error: {0}")]
    ProviderError(String),

    #[error("Provider request failed: {0}")]
    ProviderRequestFailed(String),

    #[error("Provider authentication failed: {0}")]
    ProviderAuthFailed(String),

    #[error("Provider rate limit exceeded: {0}")]
    ProviderRateLimit(String),

    #[error("Provider model not found: {0}")]
    ProviderModelNotFound(String),

    #[error("Git operation failed: {0}")]
    GitError(String),

    #[error("Notification failed: {0}")]
    NotificationFailed(String),
}

impl From<config::ConfigError> for PlaygenError {
    fn from(err: config::ConfigError) -> Self {
        PlaygenError::ConfigError(err.to_string())
    }
}
