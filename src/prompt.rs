//! Prompt builder for playground generation.
//!
//! Produces the natural-language instruction sent to the generation service.
//! The expected output format is spelled out verbatim so the response can be
//! extracted with [`crate::generation::extract_block`].

use crate::lesson::{LessonDocument, INTERACTIVE_HEADING};
use crate::section::{Section, TemplateKind};
use crate::variant::Variant;

/// Section whose language cannot execute in the browser sandbox.
const BROWSER_INCOMPATIBLE_SECTION: &str = "php";

/// Build the generation prompt for one lesson.
pub fn build_prompt(document: &LessonDocument, section: &Section, variant: Variant) -> String {
    let budget = variant.profile().content_budget;
    let title = document.title();
    let excerpt = truncate_content(&document.content, budget);

    match variant {
        Variant::Verbose => verbose_prompt(title, excerpt, budget, section, &document.file_name),
        Variant::Simplified => simplified_prompt(title, excerpt, section),
    }
}

/// Prefix of `content` holding at most `budget` characters.
pub fn truncate_content(content: &str, budget: usize) -> &str {
    match content.char_indices().nth(budget) {
        Some((idx, _)) => &content[..idx],
        None => content,
    }
}

fn verbose_prompt(
    title: &str,
    excerpt: &str,
    budget: usize,
    section: &Section,
    file_name: &str,
) -> String {
    let template = section.template;
    let language_note = if section.name == BROWSER_INCOMPATIBLE_SECTION {
        "\nIMPORTANT: this is a PHP lesson, but Sandpack only runs in the browser. \
         Write a JavaScript example that demonstrates THE SAME concepts as the lesson \
         (arrays, functions, classes, strings and so on) in JavaScript."
    } else {
        ""
    };

    format!(
        r#"You are creating an interactive Sandpack playground for a web development lesson.

Lesson topic: {title}
Section: {section}
File: {file_name}
{language_note}

Lesson content (first {budget} characters):
---
{excerpt}
---

Task: create a working, interactive Sandpack example on the topic of this lesson.

Return ONLY a block in this format (starting with ## and ending with />):

{heading}

<Sandpack
  template="{template}"
  files={{{{
    {files}
  }}}}
  options={{{{
    showNavigator: false,
    showLineNumbers: true,
    editorHeight: 400
  }}}}
/>

STRICT FORMATTING RULES:
1. Inside template literals (between backticks) escape every ${{...}} as \${{...}}
2. Inside a backtick string write the </script> tag as <\/script>
3. Write nested backticks as \`
4. The code must work and demonstrate the lesson topic
5. Make the example INTERACTIVE: buttons, user input, dynamic changes
6. Write code comments in the same language as the lesson
7. Use {files_desc}
8. Style: dark/neutral color scheme, padding: 20px, font-family: sans-serif
"#,
        title = title,
        section = section.name,
        file_name = file_name,
        language_note = language_note,
        budget = budget,
        excerpt = excerpt,
        heading = INTERACTIVE_HEADING,
        template = template,
        files = multi_file_template(template),
        files_desc = multi_file_description(template),
    )
}

fn simplified_prompt(title: &str, excerpt: &str, section: &Section) -> String {
    let template = section.template;
    let (file_name, file_desc) = match template {
        TemplateKind::React => ("/App.tsx", "a single App.tsx file with a React component"),
        _ => (
            "/index.html",
            "a single HTML file with inline styles and script",
        ),
    };

    format!(
        r#"Create a MINIMAL working Sandpack playground for a web development lesson.

Topic: {title}
Section: {section}

Lesson excerpt:
---
{excerpt}
---

TASK: Create the simplest interactive example on the topic of the lesson.

FORMAT (return ONLY this block):

{heading}

<Sandpack
  template="{template}"
  files={{{{
    "{file_name}": `
[FILE CODE]
`
  }}}}
/>

RULES:
1. {file_desc}
2. The code must be MINIMAL (20-50 lines max)
3. The example is INTERACTIVE: a button, an input, or changes on click/hover
4. Write code comments in the same language as the lesson
5. Escape everything: \${{}} for template literals, <\/script> for tags
6. Dark theme: background #282c34, color white

CRITICAL: The block MUST end with `/>` (the closing Sandpack tag).
"#,
        title = title,
        section = section.name,
        excerpt = excerpt,
        heading = INTERACTIVE_HEADING,
        template = template,
        file_name = file_name,
        file_desc = file_desc,
    )
}

fn multi_file_template(template: TemplateKind) -> &'static str {
    match template {
        TemplateKind::Vanilla => {
            "\"/index.html\": `...html code...`,\n    \"/styles.css\": `...css code...`,\n    \"/index.js\": `...js code...`"
        }
        TemplateKind::VanillaTs => "\"/index.ts\": `...typescript code...`",
        TemplateKind::React => "\"/App.tsx\": `...react code...`",
        TemplateKind::Static => {
            "\"/index.html\": `...html code...`,\n    \"/index.js\": `...js code...`"
        }
    }
}

fn multi_file_description(template: TemplateKind) -> &'static str {
    match template {
        TemplateKind::Vanilla => "the files /index.html, /styles.css, /index.js",
        TemplateKind::VanillaTs => "the file /index.ts",
        TemplateKind::React => "the file /App.tsx",
        TemplateKind::Static => "the files /index.html, /index.js",
    }
}
