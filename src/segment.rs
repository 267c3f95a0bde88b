//! Note segmentation.
//!
//! A NotebookLM export keeps every note under one container element. Note
//! boundaries are not marked by wrapper elements; they are implied by the
//! children of each block:
//!
//! - an empty comment (`<!---->`) ends the current note
//! - a child that renders to nothing ends the current note
//! - anything else that renders to text is a fragment of the current note
//!
//! Each child becomes a [`Signal`] and the signals drive a two-state
//! [`Segmenter`].

use tracing::{debug, warn};

use crate::dom::{find_element_by_tag, Document, Element, Node};
use crate::patterns::HEADING_MARKERS;
use crate::render::Renderer;
use crate::result::{Note, UNTITLED_NOTE};
use crate::Options;

/// What one child of a block contributes to segmentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
    /// Trimmed rendering of an element child. Empty text is a boundary when
    /// a note is in progress.
    Content(String),
    /// An empty comment marker.
    Separator,
}

/// Notes found in a document plus non-fatal diagnostics.
#[derive(Debug, Clone, Default)]
pub struct Segmentation {
    pub notes: Vec<Note>,
    pub warnings: Vec<String>,
}

/// Split the notes container of `doc` into notes.
///
/// A document without the container yields no notes and a warning.
#[must_use]
pub fn segment(doc: &Document, options: &Options) -> Segmentation {
    let Some(container) = find_element_by_tag(doc, &options.container_tag) else {
        let warning = format!("Could not find '{}' in the HTML.", options.container_tag);
        warn!("{warning}");
        return Segmentation {
            notes: Vec::new(),
            warnings: vec![warning],
        };
    };

    let renderer = Renderer::new(options);
    let mut segmenter = Segmenter::new();
    for block in container.element_children() {
        for signal in block_signals(renderer, &block) {
            segmenter.feed(signal);
        }
    }

    let notes = segmenter.finish();
    debug!(count = notes.len(), container = %options.container_tag, "segmented notes");
    Segmentation {
        notes,
        warnings: Vec::new(),
    }
}

/// Signals for the children of one block, in document order.
///
/// Text nodes and non-empty comments between elements produce no signal.
pub fn block_signals<'a>(
    renderer: Renderer<'a>,
    block: &Element<'a>,
) -> impl Iterator<Item = Signal> + 'a {
    block
        .children()
        .into_iter()
        .filter_map(move |child| match &child {
            node if node.is_empty_comment() => Some(Signal::Separator),
            Node::Element(_) => Some(Signal::Content(renderer.render(&child).trim().to_string())),
            Node::Text(_) | Node::Comment(_) | Node::Other => None,
        })
}

#[derive(Debug, Default)]
enum State {
    #[default]
    AwaitingContent,
    /// Fragments of the note in progress; never empty.
    Accumulating(Vec<String>),
}

/// State machine turning signals into notes.
#[derive(Debug, Default)]
pub struct Segmenter {
    state: State,
    notes: Vec<Note>,
}

impl Segmenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one signal.
    pub fn feed(&mut self, signal: Signal) {
        let state = std::mem::take(&mut self.state);
        self.state = match (state, signal) {
            (State::AwaitingContent, Signal::Content(text)) if !text.is_empty() => {
                State::Accumulating(vec![text, "\n".to_string()])
            }
            (State::AwaitingContent, _) => State::AwaitingContent,
            (State::Accumulating(mut pending), Signal::Content(text)) if !text.is_empty() => {
                pending.push(text);
                pending.push("\n".to_string());
                State::Accumulating(pending)
            }
            (State::Accumulating(pending), _) => {
                self.emit(&pending);
                State::AwaitingContent
            }
        };
    }

    /// Flush the note in progress and return all notes.
    #[must_use]
    pub fn finish(mut self) -> Vec<Note> {
        if let State::Accumulating(pending) = std::mem::take(&mut self.state) {
            self.emit(&pending);
        }
        // Notes are returned last-discovered first. Exported files depend on
        // this order, so the reversal stays an explicit step.
        self.notes.reverse();
        self.notes
    }

    fn emit(&mut self, fragments: &[String]) {
        let note = note_from_fragments(fragments);
        debug!(title = %note.title, fragments = fragments.len(), "note boundary");
        self.notes.push(note);
    }
}

/// Build a note: the title is the first fragment without heading markers,
/// the body is every fragment joined by newlines.
#[must_use]
pub fn note_from_fragments(fragments: &[String]) -> Note {
    let Some(first) = fragments.first() else {
        return Note {
            title: UNTITLED_NOTE.to_string(),
            body: String::new(),
        };
    };

    let title = HEADING_MARKERS.replace(first.trim(), "").trim().to_string();
    let title = if title.is_empty() {
        UNTITLED_NOTE.to_string()
    } else {
        title
    };

    Note {
        title,
        body: fragments.join("\n"),
    }
}
