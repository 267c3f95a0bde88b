//! Result types for conversion output.
//!
//! This module defines the notes and metadata recovered from an export,
//! and the `Conversion` that bundles them for the formatters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::format::{self, MarkdownStyle};

/// Title used when a note's first fragment is empty after stripping
/// heading markers.
pub const UNTITLED_NOTE: &str = "Untitled Note";

/// Title used when the document title cannot be found.
pub const UNTITLED_DOCUMENT: &str = "Untitled Document";

/// One note recovered from the export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// First fragment of the note without heading markers.
    pub title: String,

    /// Raw note text: the note's fragments joined by newlines, before
    /// normalization.
    #[serde(rename = "note")]
    pub body: String,
}

/// Metadata about the exported notebook page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Source title. Defaults to `"Untitled Document"`.
    pub title: String,

    /// Key topics, in page order. Duplicates are kept.
    pub tags: Vec<String>,

    /// Summary paragraph, if the page has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Export date. Never filled by extraction; formatters use today's
    /// date when it is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            title: UNTITLED_DOCUMENT.to_string(),
            tags: Vec::new(),
            summary: None,
            date: None,
        }
    }
}

/// Result of converting one HTML export.
#[derive(Debug, Clone, Default)]
pub struct Conversion {
    /// Notes in output order.
    pub notes: Vec<Note>,

    /// Page metadata.
    pub metadata: Metadata,

    /// Non-fatal issues, such as a missing notes container.
    pub warnings: Vec<String>,
}

impl Conversion {
    /// Render the conversion as Markdown in the given style.
    #[must_use]
    pub fn to_markdown(&self, style: MarkdownStyle) -> String {
        match style {
            MarkdownStyle::Standard => format::format_standard(&self.notes, Some(&self.metadata)),
            MarkdownStyle::Obsidian => format::format_obsidian(&self.notes, &self.metadata),
        }
    }

    /// Normalized note bodies, one PDF section each.
    #[must_use]
    pub fn sections(&self) -> Vec<String> {
        self.notes
            .iter()
            .map(|note| crate::normalize(&note.body))
            .collect()
    }
}
