//! Export schema configuration.
//!
//! The `Options` struct names the pieces of the NotebookLM export markup the
//! parser relies on: the container tag, the class vocabulary used by the
//! renderer, and the CSS selectors used for metadata. The defaults match the
//! current NotebookLM export; a JSON file can override any subset of them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration options for parsing a notes export.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the NotebookLM schema.
///
/// # Example
///
/// ```rust
/// use notebooklm_notes2md::Options;
///
/// let options = Options {
///     container_tag: "notes-viewer".to_string(),
///     ..Options::default()
/// };
/// assert_eq!(options.bullet_class, "bullet");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Tag name of the element holding every note block.
    ///
    /// Default: `"labs-tailwind-doc-viewer"`
    pub container_tag: String,

    /// Span class rendered as `**bold**`.
    ///
    /// Default: `"bold"`
    pub bold_class: String,

    /// Span class rendered as inline `` `code` ``.
    ///
    /// Default: `"code"`
    pub code_class: String,

    /// Div class rendered as a `## ` heading.
    ///
    /// Default: `"heading3"`
    pub heading_class: String,

    /// Div class starting a new paragraph.
    ///
    /// Default: `"paragraph"`
    pub paragraph_class: String,

    /// Div class marking a bullet. The renderer emits only the marker and
    /// leaves the bullet text to the following sibling.
    ///
    /// Default: `"bullet"`
    pub bullet_class: String,

    /// Selector for the document title.
    ///
    /// Default: `".source-title"`
    pub title_selector: String,

    /// Selector for the document summary paragraph.
    ///
    /// Default: `".summary .mat-body-medium p"`
    pub summary_selector: String,

    /// Selector matching every key topic.
    ///
    /// Default: `".key-topics-chip .key-topics-text p"`
    pub topic_selector: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            container_tag: "labs-tailwind-doc-viewer".to_string(),
            bold_class: "bold".to_string(),
            code_class: "code".to_string(),
            heading_class: "heading3".to_string(),
            paragraph_class: "paragraph".to_string(),
            bullet_class: "bullet".to_string(),
            title_selector: ".source-title".to_string(),
            summary_selector: ".summary .mat-body-medium p".to_string(),
            topic_selector: ".key-topics-chip .key-topics-text p".to_string(),
        }
    }
}

impl Options {
    /// Parse options from a JSON object. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Schema(e.to_string()))
    }

    /// Load options from a JSON schema file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::Schema(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }
}
