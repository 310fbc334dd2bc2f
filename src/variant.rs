//! Generation strategy variants.
//!
//! Two prompt styles exist: a verbose multi-file playground and a simplified
//! single-file one. Everything that differs between them lives in
//! [`VariantProfile`] so the rest of the pipeline has a single code path.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Prompt and extraction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Multi-file playgrounds, single attempt per lesson.
    Verbose,
    /// One short file per playground, retried until the block is complete.
    #[default]
    Simplified,
}

/// Tunables that differ between variants.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantProfile {
    pub model: &'static str,
    pub content_budget: usize,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub max_attempts: u32,
    pub retry_delay: Duration,
    pub request_delay: Duration,
    pub batch_delay: Duration,
    /// Reject blocks that do not literally end with the closing tag.
    pub require_closing_tag: bool,
    pub commit_prefix: &'static str,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Verbose => "verbose",
            Variant::Simplified => "simplified",
        }
    }

    pub fn profile(&self) -> VariantProfile {
        match self {
            Variant::Verbose => VariantProfile {
                model: "gemini-2.0-flash",
                content_budget: 3000,
                temperature: 0.3,
                max_output_tokens: 4096,
                max_attempts: 1,
                retry_delay: Duration::from_secs(2),
                request_delay: Duration::from_millis(1500),
                batch_delay: Duration::from_secs(2),
                require_closing_tag: false,
                commit_prefix: "feat: add Sandpack playgrounds",
            },
            Variant::Simplified => VariantProfile {
                model: "gemini-3.1-pro-preview",
                content_budget: 2000,
                temperature: 0.2,
                max_output_tokens: 16384,
                max_attempts: 3,
                retry_delay: Duration::from_secs(2),
                request_delay: Duration::from_millis(1500),
                batch_delay: Duration::from_secs(3),
                require_closing_tag: true,
                commit_prefix: "feat: add simplified Sandpack playgrounds",
            },
        }
    }

    /// Text sent to the notification sink when a run completes.
    pub fn completion_message(&self, total: usize, section_count: usize, model: &str) -> String {
        match self {
            Variant::Verbose => format!(
                "Done: generated playgrounds. Added {} playgrounds across {} sections.",
                total, section_count
            ),
            Variant::Simplified => {
                format!("Done: added {} simplified playgrounds ({}).", total, model)
            }
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "verbose" | "v1" => Ok(Variant::Verbose),
            "simplified" | "v2" => Ok(Variant::Simplified),
            other => Err(format!(
                "Invalid variant: {} (must be 'verbose' or 'simplified')",
                other
            )),
        }
    }
}
