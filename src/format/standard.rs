//! Standard Markdown formatter.

use crate::result::{Metadata, Note};

use super::push_notes;

/// Format notes as plain Markdown.
///
/// The document title becomes a `#` heading when metadata with a non-empty
/// title is supplied.
#[must_use]
pub fn format_standard(notes: &[Note], metadata: Option<&Metadata>) -> String {
    let mut out = String::new();

    if let Some(title) = metadata.map(|m| m.title.as_str()).filter(|t| !t.is_empty()) {
        out.push_str(&format!("# {title}\n\n"));
    }

    push_notes(&mut out, notes);
    out
}
