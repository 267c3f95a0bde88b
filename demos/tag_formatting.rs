//! Tag formatting example for notebooklm-notes2md.
//!
//! Shows how key topics are turned into Obsidian-compatible tags in the
//! front matter.
//!
//! Run with: `cargo run --example tag_formatting`

use chrono::Local;
use notebooklm_notes2md::format::{front_matter, sanitize_tag};
use notebooklm_notes2md::Metadata;

fn main() {
    let metadata = Metadata {
        title: "Tag Formatting Example".to_string(),
        tags: vec![
            "Simple Tag".to_string(),
            "Tag with #special! chars&".to_string(),
            "123-numeric-start".to_string(),
            "Valid_under_score".to_string(),
            "Mixed-Case-Tag".to_string(),
            "Very long tag with many words".to_string(),
            "&&&".to_string(),
        ],
        ..Metadata::default()
    };

    println!("=== Tags ===\n");
    for tag in &metadata.tags {
        match sanitize_tag(tag) {
            Some(clean) => println!("{tag:?} -> {clean:?}"),
            None => println!("{tag:?} -> dropped"),
        }
    }

    println!("\n=== Front Matter ===\n");
    print!("{}", front_matter(&metadata, Local::now().date_naive()));
}
