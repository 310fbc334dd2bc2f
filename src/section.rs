//! Lesson sections and the Sandpack template each one is generated with.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sandpack template identifier selecting the file layout of a playground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    Vanilla,
    VanillaTs,
    React,
    Static,
}

impl TemplateKind {
    /// Identifier passed to `<Sandpack template="...">`.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Vanilla => "vanilla",
            TemplateKind::VanillaTs => "vanilla-ts",
            TemplateKind::React => "react",
            TemplateKind::Static => "static",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A topic directory of lessons under the pages root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub template: TemplateKind,
}

impl Section {
    pub fn new(name: impl Into<String>, template: TemplateKind) -> Self {
        Self {
            name: name.into(),
            template,
        }
    }
}

/// Sections processed when the configuration does not override them.
///
/// jquery and git lessons are left out: they have no meaningful sandbox.
pub fn default_sections() -> Vec<Section> {
    vec![
        Section::new("javascript", TemplateKind::Vanilla),
        Section::new("typescript", TemplateKind::VanillaTs),
        Section::new("css", TemplateKind::Vanilla),
        Section::new("html", TemplateKind::Vanilla),
        // PHP cannot run in the browser; the prompt asks for a JavaScript equivalent.
        Section::new("php", TemplateKind::Vanilla),
        Section::new("react", TemplateKind::React),
    ]
}
