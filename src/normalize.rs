//! Text normalization for rendered notes.
//!
//! The renderer deliberately over-produces whitespace (padding around bold
//! and code spans, bullet markers on their own line). `normalize` cleans that
//! up and strips citation markers before the text is exported.

use std::borrow::Cow;

use regex::Captures;

use crate::patterns::{BOLD_SPAN, BULLET_BREAK, CODE_SPAN, MULTIPLE_NEWLINES, REFERENCE_NUMBERS};

/// Normalize rendered note text for export.
///
/// Applies, in order:
/// 1. `-` followed by newlines becomes `"- "` (joins a bullet to its text)
/// 2. citation groups such as `[1]`, `[1, 2]`, `[3-5]` are removed
/// 3. runs of three or more newlines collapse to a blank line
/// 4. whitespace just inside `` `code` `` spans is trimmed (spans fenced with
///    two backticks may contain single backticks)
/// 5. whitespace just inside `**bold**` spans is trimmed (the content may
///    contain single `*`)
///
/// The sequence is repeated until the text is stable, so the function is
/// idempotent. Every rule either shortens the text or removes a newline,
/// which bounds the number of rounds.
///
/// # Examples
///
/// ```
/// use notebooklm_notes2md::normalize;
///
/// assert_eq!(normalize("See [1, 2] and [3]"), "See and");
/// assert_eq!(normalize("-\n\nFirst point"), "- First point");
/// assert_eq!(normalize("Use ` cargo ` and ** care **"), "Use `cargo` and **care**");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = normalize_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn normalize_once(text: &str) -> String {
    let text = BULLET_BREAK.replace_all(text, "- ");
    // References go before newline collapsing: a removed group can leave
    // several blank lines behind.
    let text = REFERENCE_NUMBERS.replace_all(&text, "");
    let text = MULTIPLE_NEWLINES.replace_all(&text, "\n\n");
    let text = trim_code_spans(&text);
    let text = trim_bold_spans(&text);
    text.into_owned()
}

fn trim_code_spans(text: &str) -> Cow<'_, str> {
    CODE_SPAN.replace_all(text, |caps: &Captures| {
        if let Some(inner) = caps.get(1) {
            let trimmed = inner.as_str().trim();
            // A backtick against the delimiter would merge into it.
            if trimmed.starts_with('`') || trimmed.ends_with('`') {
                return caps[0].to_string();
            }
            format!("``{trimmed}``")
        } else {
            format!("`{}`", caps[2].trim())
        }
    })
}

fn trim_bold_spans(text: &str) -> Cow<'_, str> {
    BOLD_SPAN.replace_all(text, |caps: &Captures| format!("**{}**", caps[1].trim()))
}
