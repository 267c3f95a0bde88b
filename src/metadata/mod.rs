//! Metadata extraction module.
//!
//! Pulls the source title, summary and key topics out of a NotebookLM page
//! with the CSS selectors configured in [`Options`]. Every lookup fails soft:
//! a missing element yields the default value, never an error.

use dom_query::Document;
use tracing::debug;

use crate::dom;
use crate::result::{Metadata, UNTITLED_DOCUMENT};
use crate::Options;

/// Extract all metadata from a document.
///
/// # Arguments
/// * `doc` - The parsed export
/// * `opts` - Export schema (selectors)
///
/// # Returns
/// * Metadata with `title` defaulted, `summary` set only when present, and
///   `date` left unset for the formatters
#[must_use]
pub fn extract_metadata(doc: &Document, opts: &Options) -> Metadata {
    let metadata = Metadata {
        title: extract_title(doc, opts),
        tags: extract_key_topics(doc, opts),
        summary: extract_summary(doc, opts),
        date: None,
    };

    debug!(
        title = %metadata.title,
        tags = metadata.tags.len(),
        has_summary = metadata.summary.is_some(),
        "extracted metadata"
    );
    metadata
}

/// Source title, or `"Untitled Document"`.
#[must_use]
pub fn extract_title(doc: &Document, opts: &Options) -> String {
    dom::select_first_text(doc, &opts.title_selector)
        .unwrap_or_else(|| UNTITLED_DOCUMENT.to_string())
}

/// Summary paragraph, if present and non-empty.
#[must_use]
pub fn extract_summary(doc: &Document, opts: &Options) -> Option<String> {
    dom::select_first_text(doc, &opts.summary_selector)
}

/// Key topics in page order, duplicates kept, empty entries dropped.
#[must_use]
pub fn extract_key_topics(doc: &Document, opts: &Options) -> Vec<String> {
    dom::select_all_texts(doc, &opts.topic_selector)
}
