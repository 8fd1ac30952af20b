//! Cleanup of raw model output before it is handed back to the caller.

/// The opening fence the model occasionally wraps its answer in.
pub const MARKDOWN_FENCE_OPEN: &str = "```markdown";
/// The closing fence paired with [`MARKDOWN_FENCE_OPEN`].
pub const FENCE_CLOSE: &str = "```";

/// Strips surrounding whitespace and one stray Markdown fence from `raw`.
///
/// Only the literal ```` ```markdown ```` prefix and a plain ```` ``` ````
/// suffix are recognized, each removed at most once. An opening fence with
/// any other language tag is left in place.
pub fn sanitize_output(raw: &str) -> String {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix(MARKDOWN_FENCE_OPEN) {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix(FENCE_CLOSE) {
        text = rest;
    }
    text.trim().to_string()
}
