//! Markdown formatters.
//!
//! Two styles share the same note rendering (normalized bodies separated by
//! blank lines) and differ in what precedes them:
//!
//! - [`format_standard`]: an optional `# title` heading
//! - [`format_obsidian`]: YAML front matter, a summary callout, then the
//!   heading

pub mod obsidian;
pub mod standard;

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::normalize;
use crate::result::Note;

pub use obsidian::{format_obsidian, front_matter, sanitize_tag, summary_callout};
pub use standard::format_standard;

/// Markdown output style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarkdownStyle {
    /// Plain Markdown.
    #[default]
    Standard,
    /// Obsidian-compatible Markdown with front matter and callouts.
    Obsidian,
}

impl FromStr for MarkdownStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "obsidian" => Ok(Self::Obsidian),
            _ => Err(Error::UnknownStyle(s.trim().to_string())),
        }
    }
}

impl fmt::Display for MarkdownStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Standard => "standard",
            Self::Obsidian => "obsidian",
        })
    }
}

/// Append each note's normalized body followed by a blank line.
fn push_notes(out: &mut String, notes: &[Note]) {
    for note in notes {
        out.push_str(&normalize(&note.body));
        out.push_str("\n\n");
    }
}
