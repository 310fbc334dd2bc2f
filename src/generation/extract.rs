//! Block extractor: isolates the Sandpack block from a raw generation.

use crate::lesson::INTERACTIVE_HEADING;
use regex::Regex;
use std::sync::LazyLock;

/// Closing tag every accepted block ends with.
pub const CLOSING_TAG: &str = "/>";

const WIDGET_OPEN: &str = "<Sandpack";

static FENCE_OPEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:html|jsx|mdx|tsx)?\n").expect("Invalid fence regex"));

static FENCE_CLOSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)\n```\s*$").expect("Invalid fence regex"));

static HEADED_BLOCK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"({}\s*\n+<Sandpack[\s\S]*?/>)",
        regex::escape(INTERACTIVE_HEADING)
    ))
    .expect("Invalid block regex")
});

static BARE_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(<Sandpack[\s\S]*?/>)").expect("Invalid block regex"));

/// A validated playground block: heading line through the closing tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaygroundBlock(String);

impl PlaygroundBlock {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Remove markdown code fences the generator may have wrapped its answer in.
pub fn strip_code_fences(text: &str) -> String {
    let text = FENCE_OPEN_REGEX.replace_all(text, "");
    let text = FENCE_CLOSE_REGEX.replace_all(&text, "");
    text.trim().to_string()
}

/// Extract the playground block from a raw response.
///
/// Returns `None` when no `<Sandpack ... />` block is present, or when
/// `require_closing_tag` is set and the block does not end with `/>`.
pub fn extract_block(response: &str, require_closing_tag: bool) -> Option<PlaygroundBlock> {
    let text = strip_code_fences(response);

    let found = [&*HEADED_BLOCK_REGEX, &*BARE_BLOCK_REGEX]
        .iter()
        .find_map(|regex| regex.captures(&text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())?;

    if require_closing_tag && !found.ends_with(CLOSING_TAG) {
        return None;
    }

    let block = if found.starts_with("##") {
        found
    } else {
        format!("{}\n\n{}", INTERACTIVE_HEADING, found)
    };

    if !block.contains(WIDGET_OPEN) {
        return None;
    }
    Some(PlaygroundBlock(block))
}
