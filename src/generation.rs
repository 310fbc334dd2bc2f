//! Playground generation: prompt, remote call, extraction and retry for one lesson.

use crate::lesson::LessonDocument;
use crate::prompt::build_prompt;
use crate::provider::{GenerationClient, GenerationOptions};
use crate::section::Section;
use crate::variant::Variant;
use tracing::{debug, error, warn};

pub mod extract;
pub mod retry;

pub use extract::{extract_block, strip_code_fences, PlaygroundBlock, CLOSING_TAG};
pub use retry::{Clock, RetryPolicy, TokioClock};

/// Characters of a rejected response kept in diagnostics.
const RESPONSE_PREVIEW_CHARS: usize = 300;

/// One lesson to generate a playground for.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    pub document: &'a LessonDocument,
    pub section: &'a Section,
}

/// Why a single attempt produced no block.
#[derive(Debug)]
enum AttemptFailure {
    Client(crate::error::PlaygenError),
    IncompleteBlock { preview: String },
}

impl std::fmt::Display for AttemptFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttemptFailure::Client(e) => write!(f, "{}", e),
            AttemptFailure::IncompleteBlock { preview } => {
                write!(f, "no complete <Sandpack block in response: {:?}", preview)
            }
        }
    }
}

/// Turns lessons into validated playground blocks.
pub struct PlaygroundGenerator<'a> {
    client: &'a dyn GenerationClient,
    clock: &'a dyn Clock,
    variant: Variant,
    policy: RetryPolicy,
    options: GenerationOptions,
    require_closing_tag: bool,
}

impl<'a> PlaygroundGenerator<'a> {
    pub fn new(
        client: &'a dyn GenerationClient,
        clock: &'a dyn Clock,
        variant: Variant,
        policy: RetryPolicy,
        options: GenerationOptions,
    ) -> Self {
        Self {
            client,
            clock,
            variant,
            policy,
            options,
            require_closing_tag: variant.profile().require_closing_tag,
        }
    }

    /// Generator configured with the variant's default policy and sampling.
    pub fn for_variant(
        client: &'a dyn GenerationClient,
        clock: &'a dyn Clock,
        variant: Variant,
    ) -> Self {
        let profile = variant.profile();
        let options = GenerationOptions {
            temperature: profile.temperature,
            max_output_tokens: profile.max_output_tokens,
        };
        Self::new(
            client,
            clock,
            variant,
            RetryPolicy::from_profile(&profile),
            options,
        )
    }

    pub fn model_name(&self) -> &str {
        self.client.model_name()
    }

    /// Generate a block for the lesson, or `None` once the retry policy is exhausted.
    pub async fn generate(&self, request: GenerationRequest<'_>) -> Option<PlaygroundBlock> {
        let prompt = build_prompt(request.document, request.section, self.variant);
        let lesson = request.document.lesson_name();
        let max_attempts = self.policy.max_attempts();

        for attempt in 1..=max_attempts {
            debug!(
                lesson,
                attempt,
                provider = self.client.provider_name(),
                model = self.client.model_name(),
                "Requesting playground"
            );

            let failure = match self.client.generate(&prompt, &self.options).await {
                Ok(response) => match extract_block(&response.text, self.require_closing_tag) {
                    Some(block) => return Some(block),
                    None => AttemptFailure::IncompleteBlock {
                        preview: response.text.chars().take(RESPONSE_PREVIEW_CHARS).collect(),
                    },
                },
                Err(e) => AttemptFailure::Client(e),
            };

            if self.policy.has_attempts_after(attempt) {
                let delay = self.policy.delay_for(attempt);
                warn!(
                    lesson,
                    attempt,
                    max_attempts,
                    "Attempt failed, retrying in {:?}: {}",
                    delay,
                    failure
                );
                self.clock.sleep(delay).await;
            } else {
                error!(
                    lesson,
                    attempt, max_attempts, "Generation failed after all attempts: {}", failure
                );
            }
        }

        None
    }
}
