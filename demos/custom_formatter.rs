//! Custom formatter example for notebooklm-notes2md.
//!
//! Builds an academic-style document directly from the parsed notes and
//! metadata instead of using the bundled formatters.
//!
//! Run with: `cargo run --example custom_formatter -- [INPUT.html] [OUTPUT.md]`

use std::fmt::Write as _;
use std::path::PathBuf;

use chrono::Local;
use notebooklm_notes2md::export::{read_input, write_markdown};
use notebooklm_notes2md::{convert_default, normalize, Metadata, Note};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/two_notes.html");

/// Front matter with keywords and a bibliography, an abstract from the
/// summary, then every note.
fn format_academic(notes: &[Note], metadata: &Metadata) -> String {
    let mut out = String::from("---\n");
    let _ = writeln!(out, "title: \"{}\"", metadata.title);
    if !metadata.tags.is_empty() {
        out.push_str("keywords:\n");
        for tag in &metadata.tags {
            let _ = writeln!(out, "  - \"{tag}\"");
        }
    }
    let _ = writeln!(out, "date: {}", Local::now().date_naive().format("%Y-%m-%d"));
    out.push_str("author: \"Generated from NotebookLM\"\n");
    out.push_str("bibliography: references.bib\n");
    out.push_str("reference-section-title: References\n");
    out.push_str("---\n\n");

    if let Some(summary) = &metadata.summary {
        let _ = write!(out, "## Abstract\n\n{}\n\n", normalize(summary));
    }

    let _ = write!(out, "# {}\n\n", metadata.title);
    for note in notes {
        out.push_str(&normalize(&note.body));
        out.push_str("\n\n");
    }
    out
}

fn main() -> Result<(), notebooklm_notes2md::Error> {
    let mut args = std::env::args().skip(1);
    let input = args.next().map_or_else(|| PathBuf::from(FIXTURE), PathBuf::from);
    let output = args.next().map(PathBuf::from);

    let html = read_input(&input)?;
    let conversion = convert_default(&html);
    let markdown = format_academic(&conversion.notes, &conversion.metadata);

    match output {
        Some(path) => {
            write_markdown(&path, &markdown)?;
            println!("Successfully exported to academic format: {}", path.display());
        }
        None => print!("{markdown}"),
    }

    Ok(())
}
