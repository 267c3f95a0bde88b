//! DOM Operations Adapter
//!
//! Parses HTML with the `dom_query` crate and exposes nodes as a small sum
//! type, so the renderer and segmenter can match on node kinds instead of
//! probing `dom_query` nodes for capabilities.

use std::fmt;

pub use dom_query::{Document, NodeRef, Selection};
use dom_query::NodeData;

pub use tendril::StrTendril;

/// A DOM node, classified by kind.
pub enum Node<'a> {
    /// An element with its tag name and class list.
    Element(Element<'a>),
    /// A text node and its contents.
    Text(StrTendril),
    /// A comment node and its contents (empty for `<!---->`).
    Comment(StrTendril),
    /// Doctype, processing instruction, or anything else.
    Other,
}

impl<'a> Node<'a> {
    /// Classify a `dom_query` node.
    #[must_use]
    pub fn new(node: NodeRef<'a>) -> Self {
        if node.is_element() {
            return Node::Element(Element::new(node));
        }
        if node.is_text() {
            return Node::Text(node.text());
        }
        match comment_contents(&node) {
            Some(contents) => Node::Comment(contents),
            None => Node::Other,
        }
    }

    /// True for a comment node with no contents, the note separator used by
    /// the export.
    #[must_use]
    pub fn is_empty_comment(&self) -> bool {
        matches!(self, Node::Comment(contents) if contents.is_empty())
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(el) => el.fmt(f),
            Node::Text(text) => f.debug_tuple("Text").field(&&**text).finish(),
            Node::Comment(text) => f.debug_tuple("Comment").field(&&**text).finish(),
            Node::Other => f.write_str("Other"),
        }
    }
}

fn comment_contents(node: &NodeRef) -> Option<StrTendril> {
    node.query(|tree_node| match &tree_node.data {
        NodeData::Comment { contents } => Some(contents.clone()),
        _ => None,
    })
    .flatten()
}

/// An element node with its lowercase tag name and class list.
pub struct Element<'a> {
    node: NodeRef<'a>,
    name: String,
    classes: Vec<String>,
}

impl<'a> Element<'a> {
    fn new(node: NodeRef<'a>) -> Self {
        let name = node
            .node_name()
            .map(|n| n.to_ascii_lowercase())
            .unwrap_or_default();
        let classes = node
            .attrs()
            .iter()
            .filter(|attr| &*attr.name.local == "class")
            .flat_map(|attr| {
                attr.value
                    .split_whitespace()
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect();
        Self { node, name, classes }
    }

    /// Tag name, lowercase.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// All text content of the element and its descendants.
    #[must_use]
    pub fn text(&self) -> StrTendril {
        self.node.text()
    }

    /// Child nodes in document order, including text and comments.
    #[must_use]
    pub fn children(&self) -> Vec<Node<'a>> {
        self.node.children().into_iter().map(Node::new).collect()
    }

    /// Element children only, in document order.
    #[must_use]
    pub fn element_children(&self) -> Vec<Element<'a>> {
        self.node
            .children()
            .into_iter()
            .filter(NodeRef::is_element)
            .map(Element::new)
            .collect()
    }
}

impl fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("name", &self.name)
            .field("classes", &self.classes)
            .finish()
    }
}

// === Document Queries ===

/// Find the first element with the given tag name, in document order.
#[must_use]
pub fn find_element_by_tag<'a>(doc: &'a Document, tag: &str) -> Option<Element<'a>> {
    doc.root()
        .descendants()
        .into_iter()
        .find(|node| {
            node.is_element()
                && node
                    .node_name()
                    .is_some_and(|name| name.eq_ignore_ascii_case(tag))
        })
        .map(Element::new)
}

/// Trimmed text of the first match of `selector`, if it has any.
///
/// An invalid selector behaves like a selector that matches nothing.
#[must_use]
pub fn select_first_text(doc: &Document, selector: &str) -> Option<String> {
    let matches = doc.try_select(selector)?;
    let text = matches.first().text();
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Trimmed, non-empty texts of every match of `selector`, in document order.
#[must_use]
pub fn select_all_texts(doc: &Document, selector: &str) -> Vec<String> {
    let Some(matches) = doc.try_select(selector) else {
        return Vec::new();
    };
    matches
        .nodes()
        .iter()
        .map(|node| node.text().trim().to_string())
        .filter(|text| !text.is_empty())
        .collect()
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}
