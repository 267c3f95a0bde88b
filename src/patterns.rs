//! Compiled regex patterns for text normalization and note titles.
//!
//! All patterns are compiled once on first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Normalization Patterns
// =============================================================================

/// A bullet marker left on its own line by the renderer, plus the newlines
/// separating it from the bullet text.
pub static BULLET_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-\n+").expect("BULLET_BREAK regex")
});

/// Citation groups like `[1]`, `[1, 2]` or `[3-5]`, with the horizontal
/// whitespace in front of them.
pub static REFERENCE_NUMBERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[ \t]*\[\s*\d+(?:\s*[-,]\s*\d+)*\s*\]").expect("REFERENCE_NUMBERS regex")
});

/// Three or more consecutive newlines.
pub static MULTIPLE_NEWLINES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n{3,}").expect("MULTIPLE_NEWLINES regex")
});

/// Inline code span. Group 1 is the content of a ``` `` ``` delimited span,
/// which may hold single backticks; group 2 the content of a single-backtick
/// span.
pub static CODE_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"``((?:[^`]|`[^`])+?)``|`([^`]+)`").expect("CODE_SPAN regex")
});

/// Bold span; group 1 is the content between the `**` pairs. Single `*`
/// inside the content are allowed.
pub static BOLD_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*((?:[^*]|\*[^*])+?)\*\*").expect("BOLD_SPAN regex")
});

// =============================================================================
// Note Title Patterns
// =============================================================================

/// Leading Markdown heading markers.
pub static HEADING_MARKERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#+\s*").expect("HEADING_MARKERS regex")
});

// =============================================================================
// Obsidian Tag Patterns
// =============================================================================

/// Characters Obsidian does not accept inside a tag.
pub static TAG_DISALLOWED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{L}\p{N}_\-]").expect("TAG_DISALLOWED regex")
});
