//! Obsidian export example for notebooklm-notes2md.
//!
//! Converts a saved NotebookLM page and writes Obsidian Markdown. Without
//! arguments it converts the bundled two-note fixture and prints the result.
//!
//! Run with: `cargo run --example obsidian_export -- [INPUT.html] [OUTPUT.md]`

use std::path::PathBuf;

use notebooklm_notes2md::export::{read_input, write_markdown};
use notebooklm_notes2md::{convert_default, MarkdownStyle};

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/two_notes.html");

fn main() -> Result<(), notebooklm_notes2md::Error> {
    let mut args = std::env::args().skip(1);
    let input = args.next().map_or_else(|| PathBuf::from(FIXTURE), PathBuf::from);
    let output = args.next().map(PathBuf::from);

    let html = read_input(&input)?;
    let conversion = convert_default(&html);

    println!("=== Metadata ===\n");
    println!("Title: {}", conversion.metadata.title);
    println!("Summary: {:?}", conversion.metadata.summary);
    println!("Topics: {:?}", conversion.metadata.tags);

    println!("\n=== Notes ===\n");
    for note in &conversion.notes {
        println!("- {}", note.title);
    }
    for warning in &conversion.warnings {
        println!("Warning: {warning}");
    }

    let markdown = conversion.to_markdown(MarkdownStyle::Obsidian);
    match output {
        Some(path) => {
            write_markdown(&path, &markdown)?;
            println!("\nWrote {} notes to {}", conversion.notes.len(), path.display());
        }
        None => println!("\n=== Obsidian Markdown ===\n\n{markdown}"),
    }

    Ok(())
}
