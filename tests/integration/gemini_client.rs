//! Gemini client against a mock HTTP server.

use super::test_utils::{write_lesson, RecordingClock, VALID_BLOCK};
use playgen::driver::{DriverSettings, RunOptions, SectionDriver};
use playgen::error::PlaygenError;
use playgen::generation::PlaygroundGenerator;
use playgen::notify::NoopNotifier;
use playgen::provider::{GeminiClient, GenerationClient, GenerationOptions};
use playgen::section::{Section, TemplateKind};
use playgen::variant::Variant;
use playgen::vcs::{BatchCommitter, VersionControl};
use serde_json::json;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "gemini-2.0-flash";
const ENDPOINT_PATH: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

fn client(server: &MockServer) -> GeminiClient {
    GeminiClient::new(
        MODEL.to_string(),
        "test-key".to_string(),
        Some(format!("{}/v1beta", server.uri())),
        Duration::from_secs(5),
    )
    .unwrap()
}

fn options() -> GenerationOptions {
    GenerationOptions {
        temperature: 0.3,
        max_output_tokens: 4096,
    }
}

fn reply(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 20, "totalTokenCount": 30}
    })
}

async fn respond_with_status(status: u16) -> PlaygenError {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string("{\"error\": {}}"))
        .mount(&server)
        .await;
    client(&server)
        .generate("prompt", &options())
        .await
        .unwrap_err()
}

#[tokio::test]
async fn test_generate_sends_prompt_and_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{"parts": [{"text": "make a loop demo"}]}],
            "generationConfig": {"maxOutputTokens": 4096}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply(VALID_BLOCK)))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .generate("make a loop demo", &options())
        .await
        .unwrap();

    assert_eq!(response.text, VALID_BLOCK);
    assert_eq!(response.model, MODEL);
    assert_eq!(response.usage.total_tokens, 30);
}

#[tokio::test]
async fn test_status_codes_map_to_errors() {
    assert!(matches!(
        respond_with_status(401).await,
        PlaygenError::ProviderAuthFailed(_)
    ));
    assert!(matches!(
        respond_with_status(429).await,
        PlaygenError::ProviderRateLimit(_)
    ));
    assert!(matches!(
        respond_with_status(404).await,
        PlaygenError::ProviderModelNotFound(_)
    ));
    assert!(matches!(
        respond_with_status(503).await,
        PlaygenError::ProviderRequestFailed(_)
    ));
}

#[tokio::test]
async fn test_blocked_prompt_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"promptFeedback": {"blockReason": "SAFETY"}})),
        )
        .mount(&server)
        .await;

    let err = client(&server)
        .generate("prompt", &options())
        .await
        .unwrap_err();
    assert!(matches!(err, PlaygenError::ProviderError(ref msg) if msg.contains("blocked") && msg.contains("SAFETY")));
}

#[tokio::test]
async fn test_unreachable_server_is_request_failure() {
    let client = GeminiClient::new(
        MODEL.to_string(),
        "k".to_string(),
        Some("http://127.0.0.1:9".to_string()),
        Duration::from_secs(2),
    )
    .unwrap();
    let err = client.generate("prompt", &options()).await.unwrap_err();
    assert!(matches!(err, PlaygenError::ProviderRequestFailed(_)));
}

struct NullVcs;

impl VersionControl for NullVcs {
    fn stage(&self, _paths: &[PathBuf]) -> Result<(), PlaygenError> {
        Ok(())
    }

    fn commit(&self, _message: &str) -> Result<(), PlaygenError> {
        Ok(())
    }

    fn push(&self) -> Result<(), PlaygenError> {
        Ok(())
    }
}

#[tokio::test]
async fn test_driver_retries_truncated_output_over_http() {
    let server = MockServer::start().await;
    let truncated = "## Interactive Example\n\n<Sandpack\n  template=\"react\"\n  files={{";
    Mock::given(method("POST"))
        .and(path(ENDPOINT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply(truncated)))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply(VALID_BLOCK)))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let pages = dir.path().join("pages");
    let lesson = write_lesson(&pages, "react", "hooks.mdx", "# Hooks\n");

    let client = client(&server);
    let clock = RecordingClock::default();
    let vcs = NullVcs;
    let mut settings = DriverSettings::for_variant(&pages, Variant::Simplified);
    settings.sections = vec![Section::new("react", TemplateKind::React)];

    let generator = PlaygroundGenerator::for_variant(&client, &clock, Variant::Simplified);
    let committer = BatchCommitter::new(&vcs, "feat");
    let driver = SectionDriver::new(settings, generator, committer, &NoopNotifier, &clock);
    let summary = driver.run(&RunOptions::default()).await;

    assert_eq!(summary.total_added, 1);
    assert_eq!(
        std::fs::read_to_string(&lesson).unwrap(),
        format!("# Hooks\n\n{}\n", VALID_BLOCK)
    );
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
    assert!(clock.sleeps().contains(&Duration::from_secs(2)));
}
