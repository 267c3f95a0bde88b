//! Obsidian-compatible Markdown formatter.
//!
//! Output layout:
//!
//! ```text
//! ---
//! title: "<title>"
//! tags:
//!   - "<tag>"
//! date: YYYY-MM-DD
//! citekey: {{citekey}}
//! status: unread
//! ---
//!
//! > [!summary]
//! > <summary line>
//!
//! # <title>
//!
//! <notes>
//! ```

use chrono::{Local, NaiveDate};

use crate::normalize;
use crate::patterns::TAG_DISALLOWED;
use crate::result::{Metadata, Note};

use super::push_notes;

/// Format notes as Obsidian Markdown.
///
/// `metadata.date` is used for the front matter when set, today's local date
/// otherwise.
#[must_use]
pub fn format_obsidian(notes: &[Note], metadata: &Metadata) -> String {
    let date = metadata.date.unwrap_or_else(|| Local::now().date_naive());
    let mut out = front_matter(metadata, date);

    if let Some(summary) = metadata.summary.as_deref().filter(|s| !s.is_empty()) {
        out.push_str(&summary_callout(summary));
    }

    out.push_str(&format!("# {}\n\n", metadata.title));
    push_notes(&mut out, notes);
    out
}

/// YAML front matter block, followed by a blank line.
#[must_use]
pub fn front_matter(metadata: &Metadata, date: NaiveDate) -> String {
    let mut lines = vec!["---".to_string()];

    if !metadata.title.is_empty() {
        lines.push(format!("title: \"{}\"", escape_yaml(&metadata.title)));
    }

    let tags: Vec<String> = metadata.tags.iter().filter_map(|t| sanitize_tag(t)).collect();
    if !tags.is_empty() {
        lines.push("tags:".to_string());
        lines.extend(tags.iter().map(|tag| format!("  - \"{tag}\"")));
    }

    lines.push(format!("date: {}", date.format("%Y-%m-%d")));
    // Left for citation managers to fill in.
    lines.push("citekey: {{citekey}}".to_string());
    lines.push("status: unread".to_string());
    lines.push("---".to_string());

    let mut block = lines.join("\n");
    block.push_str("\n\n");
    block
}

/// Summary as an Obsidian `[!summary]` callout, followed by a blank line.
#[must_use]
pub fn summary_callout(summary: &str) -> String {
    let clean = normalize(summary);
    let mut callout = String::from("> [!summary]\n");
    for line in clean.split('\n') {
        callout.push_str("> ");
        callout.push_str(line);
        callout.push('\n');
    }
    callout.push('\n');
    callout
}

/// Make a topic usable as an Obsidian tag.
///
/// Spaces become hyphens, anything but letters, digits, `-` and `_` is
/// dropped, and a leading digit gets a `t` prefix. Returns `None` when
/// nothing is left.
///
/// # Examples
///
/// ```
/// use notebooklm_notes2md::format::sanitize_tag;
///
/// assert_eq!(sanitize_tag("Tag with #special! chars&").as_deref(), Some("Tag-with-special-chars"));
/// assert_eq!(sanitize_tag("123-numeric-start").as_deref(), Some("t123-numeric-start"));
/// assert_eq!(sanitize_tag("#!&"), None);
/// ```
#[must_use]
pub fn sanitize_tag(tag: &str) -> Option<String> {
    let hyphenated = tag.replace(' ', "-");
    let cleaned = TAG_DISALLOWED.replace_all(&hyphenated, "");

    if cleaned.is_empty() {
        return None;
    }
    if cleaned.starts_with(char::is_numeric) {
        return Some(format!("t{cleaned}"));
    }
    Some(cleaned.into_owned())
}

fn escape_yaml(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    fn metadata() -> Metadata {
        Metadata {
            title: "Test Document".to_string(),
            tags: vec!["Tag1".to_string(), "Tag2".to_string(), "Tag3".to_string()],
            summary: Some("This is a test summary with **bold** text.".to_string()),
            date: Some(date()),
        }
    }

    #[test]
    fn test_front_matter_layout() {
        let fm = front_matter(&metadata(), date());
        assert_eq!(
            fm,
            "---\n\
             title: \"Test Document\"\n\
             tags:\n  - \"Tag1\"\n  - \"Tag2\"\n  - \"Tag3\"\n\
             date: 2025-03-14\n\
             citekey: {{citekey}}\n\
             status: unread\n\
             ---\n\n"
        );
    }

    #[test]
    fn test_front_matter_without_tags_or_title() {
        let metadata = Metadata {
            title: String::new(),
            tags: vec!["!!!".to_string()],
            ..Metadata::default()
        };
        let fm = front_matter(&metadata, date());
        assert!(!fm.contains("title:"));
        assert!(!fm.contains("tags:"));
        assert!(fm.starts_with("---\ndate: 2025-03-14\n"));
    }

    #[test]
    fn test_title_quotes_are_escaped() {
        let metadata = Metadata {
            title: r#"The "Fair" Market"#.to_string(),
            ..Metadata::default()
        };
        let fm = front_matter(&metadata, date());
        assert!(fm.contains(r#"title: "The \"Fair\" Market""#));
    }

    #[test]
    fn test_summary_callout() {
        let callout = summary_callout("Line one [2]\nLine ** two **");
        assert_eq!(callout, "> [!summary]\n> Line one\n> Line **two**\n\n");
    }

    #[test]
    fn test_sanitize_tag_cases() {
        assert_eq!(sanitize_tag("Simple Tag").as_deref(), Some("Simple-Tag"));
        assert_eq!(
            sanitize_tag("Tag with #special! chars&").as_deref(),
            Some("Tag-with-special-chars")
        );
        assert_eq!(sanitize_tag("123-numeric-start").as_deref(), Some("t123-numeric-start"));
        assert_eq!(sanitize_tag("Valid_under_score").as_deref(), Some("Valid_under_score"));
        assert_eq!(sanitize_tag("Mixed-Case-Tag").as_deref(), Some("Mixed-Case-Tag"));
        assert_eq!(sanitize_tag("Économie régionale").as_deref(), Some("Économie-régionale"));
        assert_eq!(sanitize_tag("&&&"), None);
        assert_eq!(sanitize_tag(""), None);
    }

    #[test]
    fn test_tags_keep_order_and_duplicates() {
        let metadata = Metadata {
            tags: vec!["b".to_string(), "?".to_string(), "a".to_string(), "b".to_string()],
            ..Metadata::default()
        };
        let fm = front_matter(&metadata, date());
        assert!(fm.contains("tags:\n  - \"b\"\n  - \"a\"\n  - \"b\"\ndate:"));
    }

    #[test]
    fn test_format_obsidian_order() {
        let notes = vec![
            Note {
                title: "Note 1".to_string(),
                body: "# Note 1\n\nThis is note 1 content.".to_string(),
            },
            Note {
                title: "Note 2".to_string(),
                body: "# Note 2\n\nThis is note 2 content.".to_string(),
            },
        ];
        let md = format_obsidian(&notes, &metadata());

        assert!(md.starts_with("---\n"));
        let callout = md.find("> [!summary]\n").unwrap();
        let heading = md.find("# Test Document\n\n").unwrap();
        let first = md.find("This is note 1 content.").unwrap();
        let second = md.find("This is note 2 content.").unwrap();
        assert!(callout < heading && heading < first && first < second);
        assert!(md.contains("date: 2025-03-14\n"));
    }

    #[test]
    fn test_format_obsidian_without_summary() {
        let metadata = Metadata {
            summary: None,
            ..metadata()
        };
        let md = format_obsidian(&[], &metadata);
        assert!(!md.contains("[!summary]"));
        assert!(md.ends_with("---\n\n# Test Document\n\n"));
    }

    #[test]
    fn test_format_obsidian_defaults_to_today() {
        let metadata = Metadata {
            date: None,
            ..metadata()
        };
        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
        let md = format_obsidian(&[], &metadata);
        // Guard against running across midnight.
        let tomorrow = (Local::now().date_naive() + chrono::Days::new(1))
            .format("%Y-%m-%d")
            .to_string();
        assert!(md.contains(&format!("date: {today}")) || md.contains(&format!("date: {tomorrow}")));
    }
}
