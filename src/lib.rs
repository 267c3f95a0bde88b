//! # notebooklm-notes2md
//!
//! Convert NotebookLM HTML note exports to Markdown or PDF.
//!
//! A NotebookLM export holds every saved note under a single viewer element.
//! This library finds that element, splits its content into notes, renders
//! them as Markdown, and reads the page's title, summary and key topics.
//!
//! ## Quick Start
//!
//! ```rust
//! use notebooklm_notes2md::{convert_default, MarkdownStyle};
//!
//! let html = r#"<html><body>
//! <div class="source-title">Fair Markets</div>
//! <labs-tailwind-doc-viewer><div>
//!   <div class="heading3"><span>Intro</span></div>
//!   <div class="paragraph"><span>Prices settle.</span></div>
//! </div></labs-tailwind-doc-viewer>
//! </body></html>"#;
//!
//! let conversion = convert_default(html);
//! assert_eq!(conversion.notes.len(), 1);
//! assert_eq!(conversion.notes[0].title, "Intro");
//!
//! let markdown = conversion.to_markdown(MarkdownStyle::Standard);
//! assert!(markdown.starts_with("# Fair Markets\n\n## Intro"));
//! ```
//!
//! ## Features
//!
//! - **Note segmentation**: empty comment markers and empty blocks split notes
//! - **Metadata**: source title, summary and key topics via CSS selectors
//! - **Two Markdown styles**: plain, or Obsidian with front matter and a
//!   summary callout
//! - **PDF**: one page-started section per note
//! - **Configurable**: class names and selectors load from a JSON schema

mod error;
mod normalize;
mod options;
mod patterns;
mod result;

/// DOM adapter over `dom_query`.
pub mod dom;

/// Element-to-Markdown rendering.
pub mod render;

/// Note boundary detection.
pub mod segment;

/// Title, summary and key topic extraction.
pub mod metadata;

/// Standard and Obsidian Markdown formatters.
pub mod format;

/// PDF rendering.
pub mod pdf;

/// Path validation, input reading and output writing.
pub mod export;

// Public API - re-exports
pub use error::{Error, Result};
pub use export::OutputFormat;
pub use format::MarkdownStyle;
pub use normalize::normalize;
pub use options::Options;
pub use pdf::{PdfRenderer, PdfSink};
pub use result::{Conversion, Metadata, Note, UNTITLED_DOCUMENT, UNTITLED_NOTE};

use tracing::debug;

/// Converts a NotebookLM export with the default schema.
///
/// Never fails: input without the notes container converts to zero notes
/// and a warning in [`Conversion::warnings`].
#[must_use]
pub fn convert_default(html: &str) -> Conversion {
    convert(html, &Options::default())
}

/// Converts a NotebookLM export with a custom schema.
///
/// # Example
///
/// ```rust
/// use notebooklm_notes2md::{convert, Options};
///
/// let options = Options {
///     container_tag: "notes-viewer".to_string(),
///     ..Options::default()
/// };
/// let conversion = convert("<html><body><p>nothing here</p></body></html>", &options);
/// assert!(conversion.notes.is_empty());
/// assert_eq!(conversion.warnings, ["Could not find 'notes-viewer' in the HTML."]);
/// ```
#[must_use]
pub fn convert(html: &str, options: &Options) -> Conversion {
    let doc = dom::parse(html);
    let segmentation = segment::segment(&doc, options);
    let metadata = metadata::extract_metadata(&doc, options);

    debug!(
        notes = segmentation.notes.len(),
        warnings = segmentation.warnings.len(),
        "converted export"
    );

    Conversion {
        notes: segmentation.notes,
        metadata,
        warnings: segmentation.warnings,
    }
}
