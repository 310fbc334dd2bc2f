//! Lesson documents: the on-disk pages a playground is appended to.

use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

pub mod appender;
pub mod scanner;

pub use appender::append_block;
pub use scanner::{scan_section, SectionScan};

/// Heading line that opens every generated playground block.
pub const INTERACTIVE_HEADING: &str = "## Interactive Example";

/// Title used in prompts when a lesson has no heading.
pub const FALLBACK_TITLE: &str = "lesson";

/// Substrings that mark a lesson as already having a playground.
pub const PLAYGROUND_MARKERS: [&str; 3] = ["<Sandpack", "<Playground", INTERACTIVE_HEADING];

static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#+ (.+)$").expect("Invalid heading regex"));

/// A lesson page read from a section directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonDocument {
    pub section: String,
    pub file_name: String,
    pub path: PathBuf,
    pub content: String,
}

impl LessonDocument {
    /// Lesson name as shown in progress logs (file name without extension).
    pub fn lesson_name(&self) -> &str {
        self.file_name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(&self.file_name)
    }

    pub fn title(&self) -> &str {
        extract_title(&self.content)
    }

    pub fn has_playground(&self) -> bool {
        has_playground(&self.content)
    }
}

/// True when the content already carries a generated or hand-written playground.
pub fn has_playground(content: &str) -> bool {
    PLAYGROUND_MARKERS
        .iter()
        .any(|marker| content.contains(marker))
}

/// First markdown heading of the lesson, or [`FALLBACK_TITLE`].
pub fn extract_title(content: &str) -> &str {
    HEADING_REGEX
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim_end_matches('\r'))
        .unwrap_or(FALLBACK_TITLE)
}
