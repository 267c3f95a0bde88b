//! Export NotebookLM notes from an HTML page to Markdown or PDF.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use notebooklm_notes2md::export::{export, read_input, validate_paths};
use notebooklm_notes2md::{convert, MarkdownStyle, Options, PdfRenderer};

#[derive(Parser)]
#[command(
    name = "notebooklm-export",
    version,
    about = "Export NotebookLM notes from HTML to Markdown or PDF"
)]
struct Cli {
    /// Saved NotebookLM HTML page
    input_path: PathBuf,

    /// Output file; the extension (.md or .pdf) picks the format
    output_path: PathBuf,

    /// Markdown style: standard or obsidian (ignored for PDF output)
    #[arg(long, default_value_t = MarkdownStyle::Standard)]
    format: MarkdownStyle,

    /// JSON file overriding the export schema (tag, classes, selectors)
    #[arg(long)]
    schema: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let options = match &cli.schema {
        Some(path) => Options::from_json_file(path)
            .with_context(|| format!("loading schema {}", path.display()))?,
        None => Options::default(),
    };

    let format = validate_paths(&cli.input_path, &cli.output_path)?;
    let html = read_input(&cli.input_path)?;

    let conversion = convert(&html, &options);
    for warning in &conversion.warnings {
        eprintln!("Warning: {warning}");
    }

    export(
        &conversion,
        &cli.output_path,
        format,
        cli.format,
        &PdfRenderer::default(),
    )?;

    let count = conversion.notes.len();
    if count == 0 {
        println!("Warning: No notes were found in the input file.");
    }
    println!(
        "Successfully exported {count} notes to {}",
        cli.output_path.display()
    );
    Ok(())
}
