//! # README Emojify Prompts
//!
//! The rule block shared by both output shapes, the format-specific rule and
//! worked example for each shape, and the builder that stitches them together
//! around the caller's README content.

use crate::types::OutputFormat;

/// The rules given to the model regardless of the requested output shape.
pub const COMMON_INSTRUCTIONS: &str = r###"You are an expert GitHub README writer specializing in making technical documentation visually engaging, scannable, and compelling. Your task is to take a plain Markdown list of features and enhance it.

RULES:
1.  Analyze the input, which is a Markdown list under a header like "## Key Features".
2.  For each list item, you must:
    a. Make the feature name bold.
    b. Add one or two relevant emojis right after the feature name.
    c. Write a concise, compelling description for the feature.
3.  Also add a relevant emoji to the main header (e.g., "## Key Features" becomes "## ✨ Key Features").
4.  Preserve the original feature names. Do not rephrase them.
5.  Return ONLY the modified Markdown content. Do not include any explanations, greetings, or markdown code fences like ```markdown."###;

/// Rule 6 for the bulleted list shape.
pub const LIST_FORMAT_RULE: &str = "6.  Format the output as a bulleted list, where each line looks like this: `- **Feature Name** 🚀 – Compelling description.`";

/// Worked input/output pair for the bulleted list shape.
pub const LIST_FORMAT_EXAMPLE: &str = r#"---
EXAMPLE (LIST FORMAT)
---
INPUT:
## Key Features
- Astro v5 Fast
- Tailwind v4
- Accessible, semantic HTML markup

OUTPUT:
## ✨ Key Features
- **Astro v5 Fast** 🚀 – Blazing-fast static site generation.
- **Tailwind v4** 🎨 – Utility-first styling at your fingertips.
- **Accessible, semantic HTML markup** ♿️ – WCAG-compliant, screen-reader friendly.
---"#;

/// Rule 6 for the three-column table shape.
pub const TABLE_FORMAT_RULE: &str = r#"6.  Format the output as a three-column Markdown table with headers: "Feature", "Emoji 💡", and "Description"."#;

/// Worked input/output pair for the table shape.
pub const TABLE_FORMAT_EXAMPLE: &str = r#"---
EXAMPLE (TABLE FORMAT)
---
INPUT:
## Key Features
- Astro v5 Fast
- Tailwind v4
- Accessible, semantic HTML markup

OUTPUT:
## ✨ Key Features

| Feature | Emoji 💡 | Description |
|---|---|---|
| **Astro v5 Fast** | 🚀 | Blazing-fast static site generation. |
| **Tailwind v4** | 🎨 | Utility-first styling at your fingertips. |
| **Accessible, semantic HTML markup** | ♿️ | WCAG-compliant, screen-reader friendly. |
---"#;

/// Returns the format-specific rule and worked example for `format`.
fn format_block(format: OutputFormat) -> (&'static str, &'static str) {
    match format {
        OutputFormat::List => (LIST_FORMAT_RULE, LIST_FORMAT_EXAMPLE),
        OutputFormat::Table => (TABLE_FORMAT_RULE, TABLE_FORMAT_EXAMPLE),
    }
}

/// Builds the full instruction prompt for `content` in the requested shape.
///
/// The prompt is assembled in a fixed order: the shared rules, the rule and
/// worked example for `format`, then `content` verbatim. Nothing follows the
/// content, so the prompt always ends with it character for character.
pub fn build_prompt(content: &str, format: OutputFormat) -> String {
    let (rule, example) = format_block(format);
    let label = format.as_str().to_uppercase();
    format!(
        "{COMMON_INSTRUCTIONS}\n{rule}\n\n{example}\n\nNow, transform the following README content into the ENHANCED {label} format:\n\n{content}"
    )
}

/// Builds a prompt from an unvalidated format name.
///
/// An unrecognized name yields `content` unchanged.
pub fn build_prompt_for(content: &str, format: &str) -> String {
    match format.parse::<OutputFormat>() {
        Ok(format) => build_prompt(content, format),
        Err(_) => content.to_string(),
    }
}
