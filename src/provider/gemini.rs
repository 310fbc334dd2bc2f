//! Google Gemini client for the `generateContent` REST endpoint.

use super::{
    build_provider_http_client, map_http_error, map_status_error, GenerationClient,
    GenerationOptions, GenerationResponse, TokenUsage,
};
use crate::error::PlaygenError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini provider client
pub struct GeminiClient {
    client: Client,
    model: String,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(
        model: String,
        api_key: String,
        base_url: Option<String>,
        request_timeout: Duration,
    ) -> Result<Self, PlaygenError> {
        let client = build_provider_http_client(request_timeout)?;
        let base_url = base_url
            .unwrap_or_else(|| GEMINI_API_BASE.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client,
            model,
            api_key,
            base_url,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    usage_metadata: Option<UsageMetadata>,
    model_version: Option<String>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<u32>,
    candidates_token_count: Option<u32>,
    total_token_count: Option<u32>,
}

fn build_request<'a>(prompt: &'a str, options: &GenerationOptions) -> GenerateContentRequest<'a> {
    GenerateContentRequest {
        contents: vec![RequestContent {
            role: "user",
            parts: vec![RequestPart { text: prompt }],
        }],
        generation_config: GenerationConfig {
            temperature: options.temperature,
            max_output_tokens: options.max_output_tokens,
        },
    }
}

fn into_generation_response(
    response: GenerateContentResponse,
    requested_model: &str,
) -> Result<GenerationResponse, PlaygenError> {
    let block_reason = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason);
    let candidate = match response.candidates.into_iter().next() {
        Some(candidate) => candidate,
        None => {
            return Err(PlaygenError::ProviderError(match block_reason {
                Some(reason) => format!("Prompt blocked (block reason: {})", reason),
                None => "No candidates in response".to_string(),
            }))
        }
    };

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(PlaygenError::ProviderError(format!(
            "Empty response text (finish reason: {})",
            candidate.finish_reason.as_deref().unwrap_or("unknown")
        )));
    }

    let usage = response
        .usage_metadata
        .map(|u| TokenUsage {
            prompt_tokens: u.prompt_token_count.unwrap_or(0),
            completion_tokens: u.candidates_token_count.unwrap_or(0),
            total_tokens: u.total_token_count.unwrap_or(0),
        })
        .unwrap_or_default();

    Ok(GenerationResponse {
        text,
        model: response
            .model_version
            .unwrap_or_else(|| requested_model.to_string()),
        usage,
        finish_reason: candidate.finish_reason,
    })
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<GenerationResponse, PlaygenError> {
        let request = build_request(prompt, options);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(map_http_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(map_status_error(status, &error_text));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| PlaygenError::ProviderError(format!("Failed to parse response: {}", e)))?;

        let generated = into_generation_response(body, &self.model)?;
        debug!(
            model = %generated.model,
            prompt_tokens = generated.usage.prompt_tokens,
            completion_tokens = generated.usage.completion_tokens,
            finish_reason = generated.finish_reason.as_deref().unwrap_or("unknown"),
            "Generation completed"
        );
        Ok(generated)
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
