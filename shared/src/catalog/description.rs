//! Description previews
//!
//! Product descriptions are markdown-flavoured. Cards and the order review
//! step show a plain-text preview instead.

use regex::Regex;
use std::sync::LazyLock;

/// Preview length in characters, before the ellipsis
pub const PREVIEW_CHARS: usize = 100;

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

static MARKDOWN_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    [
        (r"\*\*(.*?)\*\*", "$1"),   // bold
        (r"\*(.*?)\*", "$1"),       // italic
        (r"#{1,6}\s?", ""),         // headers
        (r"\[(.*?)\]\(.*?\)", "$1"), // links
        (r"`(.*?)`", "$1"),         // inline code
        (r"(?m)^\s*[-*+]\s+", ""),  // bullets
        (r"(?m)^\s*\d+\.\s+", ""),  // numbered items
    ]
    .into_iter()
    .map(|(pattern, replacement)| Rule {
        pattern: Regex::new(pattern).expect("valid markdown pattern"),
        replacement,
    })
    .collect()
});

/// Remove markdown emphasis, headers, links, code and list markers
pub fn strip_markdown(text: &str) -> String {
    let mut out = text.to_string();
    for rule in MARKDOWN_RULES.iter() {
        out = rule
            .pattern
            .replace_all(&out, rule.replacement)
            .into_owned();
    }
    out.trim().to_string()
}

/// Cut to `max_chars` characters and append `...` when longer
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Plain-text preview of a description
pub fn preview(description: &str) -> String {
    truncate(&strip_markdown(description), PREVIEW_CHARS)
}
