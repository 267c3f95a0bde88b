//! Tree-to-text rendering.
//!
//! Converts a DOM subtree of the notes export into Markdown-flavored text.
//! Only the class vocabulary configured in [`Options`] is interpreted; every
//! other element is transparent and contributes the rendering of its
//! children.

use crate::dom::{Element, Node};
use crate::Options;

/// How a `div` contributes to the rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivKind {
    /// `## ` heading.
    Heading,
    /// Paragraph break.
    Paragraph,
    /// Bullet marker; children are not rendered.
    Bullet,
    /// No formatting of its own.
    Plain,
}

impl DivKind {
    /// Text emitted before the div's children.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            DivKind::Heading => "## ",
            DivKind::Paragraph => "\n",
            DivKind::Bullet => "- ",
            DivKind::Plain => "",
        }
    }
}

/// Recursive renderer over [`Node`]s.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'o> {
    options: &'o Options,
}

impl<'o> Renderer<'o> {
    #[must_use]
    pub fn new(options: &'o Options) -> Self {
        Self { options }
    }

    /// Render a node and its descendants.
    ///
    /// Text and comment nodes render to nothing on their own: text is only
    /// read through its enclosing `span`.
    #[must_use]
    pub fn render(&self, node: &Node) -> String {
        let mut out = String::new();
        self.render_into(node, &mut out);
        out
    }

    fn render_into(&self, node: &Node, out: &mut String) {
        let Node::Element(el) = node else {
            return;
        };

        match el.name() {
            "span" => out.push_str(&self.span_text(el)),
            "div" => {
                let kind = self.classify_div(el);
                out.push_str(kind.prefix());
                // Stop at bullets: the bullet text is the next sibling, which
                // the segmenter picks up as its own fragment.
                if kind != DivKind::Bullet {
                    self.render_children(el, out);
                }
            }
            _ => self.render_children(el, out),
        }
    }

    fn render_children(&self, el: &Element, out: &mut String) {
        for child in el.children() {
            self.render_into(&child, out);
        }
    }

    /// Full text of a span, wrapped for bold and/or code.
    ///
    /// The wrappers carry a space on both sides; the normalizer takes care
    /// of the excess.
    #[must_use]
    pub fn span_text(&self, span: &Element) -> String {
        let mut text = span.text().to_string();
        if span.has_class(&self.options.bold_class) {
            text = format!(" **{text}** ");
        }
        if span.has_class(&self.options.code_class) {
            let fence = if text.contains('`') { "``" } else { "`" };
            text = format!(" {fence}{text}{fence} ");
        }
        text
    }

    /// Classify a div by its classes. Heading wins over paragraph, which
    /// wins over bullet.
    #[must_use]
    pub fn classify_div(&self, div: &Element) -> DivKind {
        if div.has_class(&self.options.heading_class) {
            DivKind::Heading
        } else if div.has_class(&self.options.paragraph_class) {
            DivKind::Paragraph
        } else if div.has_class(&self.options.bullet_class) {
            DivKind::Bullet
        } else {
            DivKind::Plain
        }
    }
}
