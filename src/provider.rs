//! Generation Provider Abstraction
//!
//! Interface to the remote text-generation service. The pipeline only needs
//! a single prompt-in, text-out call; [`GeminiClient`] implements it over the
//! Gemini REST API and tests substitute scripted clients.

use crate::error::PlaygenError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub mod gemini;

pub use gemini::GeminiClient;

/// Sampling configuration sent with every request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

/// Token usage information
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Generation response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub text: String,
    pub model: String,
    pub usage: TokenUsage,
    pub finish_reason: Option<String>,
}

/// Text generation client
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Generate text for a single prompt
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<GenerationResponse, PlaygenError>;

    /// Get the provider name
    fn provider_name(&self) -> &str;

    /// Get the model name
    fn model_name(&self) -> &str;
}

// Helper function to map transport errors to PlaygenError
pub(crate) fn map_http_error(error: reqwest::Error) -> PlaygenError {
    if let Some(status) = error.status() {
        map_status_error(status, &error.to_string())
    } else if error.is_timeout() {
        PlaygenError::ProviderRequestFailed(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        PlaygenError::ProviderRequestFailed(format!("Connection error: {}", error))
    } else {
        PlaygenError::ProviderError(format!("HTTP error: {}", error))
    }
}

// Map a non-success HTTP status and its body to PlaygenError
pub(crate) fn map_status_error(status: StatusCode, detail: &str) -> PlaygenError {
    match status.as_u16() {
        401 | 403 => PlaygenError::ProviderAuthFailed(format!("Authentication failed: {}", detail)),
        429 => PlaygenError::ProviderRateLimit(format!("Rate limit exceeded: {}", detail)),
        404 => PlaygenError::ProviderModelNotFound(format!("Model not found: {}", detail)),
        _ => PlaygenError::ProviderRequestFailed(format!(
            "Request failed with status {}: {}",
            status, detail
        )),
    }
}

const PROVIDER_HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

pub(crate) fn build_provider_http_client(request_timeout: Duration) -> Result<Client, PlaygenError> {
    Client::builder()
        .connect_timeout(PROVIDER_HTTP_CONNECT_TIMEOUT)
        .timeout(request_timeout)
        .build()
        .map_err(|e| PlaygenError::ProviderError(format!("Failed to create HTTP client: {}", e)))
}
