//! PDF export.
//!
//! The exporter hands normalized Markdown sections to a [`PdfSink`]. The
//! bundled [`PdfRenderer`] parses each section with `pulldown-cmark`, lays
//! headings, paragraphs, list items and code blocks out on A4 pages with the
//! standard Type1 fonts, and serializes the result with `lopdf`. Every
//! section starts on a new page.

use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Object, Stream, StringFormat};
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag};
use tracing::debug;

use crate::error::{Error, Result};
use crate::export;

/// Destination for ordered Markdown sections.
pub trait PdfSink {
    /// Render `sections` in order and write the PDF to `path`.
    fn render(&self, sections: &[String], path: &Path) -> Result<()>;
}

// A4 in points.
const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;

/// Standard fonts, by resource name.
const FONTS: [(&str, &str); 3] = [
    ("F1", "Helvetica"),
    ("F2", "Helvetica-Bold"),
    ("F3", "Courier"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Font {
    Regular,
    Bold,
    Mono,
}

impl Font {
    fn resource(self) -> &'static str {
        match self {
            Font::Regular => FONTS[0].0,
            Font::Bold => FONTS[1].0,
            Font::Mono => FONTS[2].0,
        }
    }

    /// Approximate glyph width as a fraction of the font size, in tenths.
    fn width_tenths(self) -> i64 {
        match self {
            Font::Regular => 5,
            Font::Bold | Font::Mono => 6,
        }
    }
}

/// A block of a Markdown section.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Block {
    Heading(u8, String),
    Paragraph(String),
    /// List item text at the given nesting depth. `first` marks the line
    /// that carries the bullet.
    Item { depth: usize, first: bool, text: String },
    Code(String),
}

/// One laid-out line before pagination.
#[derive(Debug, Clone)]
struct Line {
    font: Font,
    size: i64,
    indent: i64,
    space_before: i64,
    text: String,
}

/// Lays Markdown sections out on A4 pages.
#[derive(Debug, Clone)]
pub struct PdfRenderer {
    /// Page margin in points.
    pub margin: i64,
    /// Body font size in points.
    pub body_size: i64,
    /// Flate-compress content streams.
    pub compress: bool,
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self {
            margin: 56,
            body_size: 11,
            compress: true,
        }
    }
}

impl PdfSink for PdfRenderer {
    fn render(&self, sections: &[String], path: &Path) -> Result<()> {
        let bytes = self.to_bytes(sections)?;
        debug!(sections = sections.len(), bytes = bytes.len(), path = %path.display(), "writing pdf");
        export::write_bytes(path, &bytes)
    }
}

impl PdfRenderer {
    /// Render sections to an in-memory PDF document.
    ///
    /// Fails with [`Error::Pdf`] when `body_size` is below 2 points or the
    /// margins leave no room on the page.
    pub fn to_bytes(&self, sections: &[String]) -> Result<Vec<u8>> {
        self.check_geometry()?;
        let mut pages: Vec<Vec<Operation>> = Vec::new();
        for section in sections {
            let lines = self.layout(&parse_blocks(section));
            self.paginate(&lines, &mut pages);
        }
        if pages.is_empty() {
            pages.push(Vec::new());
        }
        self.assemble(pages)
    }

    fn check_geometry(&self) -> Result<()> {
        // Code blocks are set one point below the body size.
        if self.body_size < 2 {
            return Err(Error::Pdf(format!(
                "body size must be at least 2 points (got {})",
                self.body_size
            )));
        }
        if self.margin < 0 || self.usable_width() <= 0 || PAGE_HEIGHT - 2 * self.margin <= 0 {
            return Err(Error::Pdf(format!(
                "margin of {} points leaves no room on an A4 page",
                self.margin
            )));
        }
        Ok(())
    }

    fn usable_width(&self) -> i64 {
        PAGE_WIDTH - 2 * self.margin
    }

    fn layout(&self, blocks: &[Block]) -> Vec<Line> {
        let body = self.body_size;
        let mut lines = Vec::new();

        for block in blocks {
            let (font, size, indent, space_before, text) = match block {
                Block::Heading(level, text) => {
                    let size = match level {
                        1 => body + 9,
                        2 => body + 5,
                        3 => body + 3,
                        _ => body + 1,
                    };
                    (Font::Bold, size, 0, size, text.clone())
                }
                Block::Paragraph(text) => (Font::Regular, body, 0, body / 2, text.clone()),
                Block::Item { depth, first, text } => {
                    let indent = 14 * (*depth as i64);
                    let text = if *first { format!("\u{2022} {text}") } else { text.clone() };
                    (Font::Regular, body, indent, 2, text)
                }
                Block::Code(text) => (Font::Mono, body - 1, 14, 0, text.clone()),
            };

            let glyph_width = (size * font.width_tenths()).max(1);
            let chars = ((self.usable_width() - indent) * 10 / glyph_width).max(1);
            for (i, wrapped) in textwrap::wrap(&text, chars as usize).into_iter().enumerate() {
                lines.push(Line {
                    font,
                    size,
                    indent,
                    space_before: if i == 0 { space_before } else { 0 },
                    text: wrapped.into_owned(),
                });
            }
        }
        lines
    }

    /// Place lines on pages. The section always opens a new page.
    fn paginate(&self, lines: &[Line], pages: &mut Vec<Vec<Operation>>) {
        let top = PAGE_HEIGHT - self.margin;
        let mut page = Vec::new();
        let mut y = top;

        for line in lines {
            let leading = line.size * 14 / 10;
            let at_top = y == top;
            let next_y = y - leading - if at_top { 0 } else { line.space_before };
            if next_y < self.margin && !at_top {
                pages.push(std::mem::take(&mut page));
                y = top - leading;
            } else {
                y = next_y;
            }

            page.push(Operation::new("BT", vec![]));
            page.push(Operation::new(
                "Tf",
                vec![line.font.resource().into(), line.size.into()],
            ));
            page.push(Operation::new(
                "Td",
                vec![(self.margin + line.indent).into(), y.into()],
            ));
            page.push(Operation::new(
                "Tj",
                vec![Object::String(encode_win_ansi(&line.text), StringFormat::Literal)],
            ));
            page.push(Operation::new("ET", vec![]));
        }
        pages.push(page);
    }

    fn assemble(&self, pages: Vec<Vec<Operation>>) -> Result<Vec<u8>> {
        let mut doc = lopdf::Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut fonts = Dictionary::new();
        for (name, base_font) in FONTS {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => base_font,
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(name, font_id);
        }
        let resources_id = doc.add_object(dictionary! {
            "Font" => fonts,
        });

        let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
        for operations in pages {
            let content = Content { operations }
                .encode()
                .map_err(|e| Error::Pdf(e.to_string()))?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, content));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        if self.compress {
            doc.compress();
        }

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).map_err(|e| Error::Pdf(e.to_string()))?;
        Ok(bytes)
    }
}

/// Split a Markdown section into layout blocks.
fn parse_blocks(markdown: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut text = String::new();
    let mut heading: Option<u8> = None;
    let mut list_depth = 0usize;
    let mut item_first = false;
    let mut in_code = false;

    let flush = |text: &mut String,
                 blocks: &mut Vec<Block>,
                 heading: Option<u8>,
                 list_depth: usize,
                 item_first: &mut bool| {
        let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
        text.clear();
        if collapsed.is_empty() {
            return;
        }
        let block = match heading {
            Some(level) => Block::Heading(level, collapsed),
            None if list_depth > 0 => Block::Item {
                depth: list_depth,
                first: std::mem::take(item_first),
                text: collapsed,
            },
            None => Block::Paragraph(collapsed),
        };
        blocks.push(block);
    };

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading(level, _, _)) => {
                flush(&mut text, &mut blocks, heading, list_depth, &mut item_first);
                heading = Some(heading_number(level));
            }
            Event::End(Tag::Heading(..)) => {
                flush(&mut text, &mut blocks, heading, list_depth, &mut item_first);
                heading = None;
            }
            Event::Start(Tag::List(_)) => {
                flush(&mut text, &mut blocks, heading, list_depth, &mut item_first);
                list_depth += 1;
            }
            Event::End(Tag::List(_)) => {
                flush(&mut text, &mut blocks, heading, list_depth, &mut item_first);
                list_depth = list_depth.saturating_sub(1);
            }
            Event::Start(Tag::Item) => {
                flush(&mut text, &mut blocks, heading, list_depth, &mut item_first);
                item_first = true;
            }
            Event::End(Tag::Item | Tag::Paragraph) => {
                flush(&mut text, &mut blocks, heading, list_depth, &mut item_first);
            }
            Event::Start(Tag::CodeBlock(_)) => {
                flush(&mut text, &mut blocks, heading, list_depth, &mut item_first);
                in_code = true;
            }
            Event::End(Tag::CodeBlock(_)) => {
                in_code = false;
            }
            Event::Text(t) if in_code => {
                blocks.extend(t.lines().map(|line| Block::Code(line.to_string())));
            }
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak => text.push(' '),
            Event::HardBreak => {
                flush(&mut text, &mut blocks, heading, list_depth, &mut item_first);
            }
            _ => {}
        }
    }
    flush(&mut text, &mut blocks, heading, list_depth, &mut item_first);
    blocks
}

fn heading_number(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Encode text for the standard fonts' WinAnsi encoding. Characters outside
/// it become `?`.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' | '\u{a0}'..='\u{ff}' => c as u8,
            '\u{20ac}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201c}' => 0x93,
            '\u{201d}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            _ => b'?',
        })
        .collect()
}
