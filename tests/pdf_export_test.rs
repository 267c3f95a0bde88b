use notebooklm_notes2md::export::{export, OutputFormat};
use notebooklm_notes2md::{convert_default, MarkdownStyle, PdfRenderer, PdfSink};

const FIXTURE: &str = include_str!("fixtures/two_notes.html");

#[test]
fn fixture_exports_one_page_per_note() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("notes.pdf");
    let conversion = convert_default(FIXTURE);

    export(
        &conversion,
        &out,
        OutputFormat::Pdf,
        MarkdownStyle::Standard,
        &PdfRenderer::default(),
    )
    .unwrap();

    let doc = lopdf::Document::load(&out).unwrap();
    assert_eq!(doc.get_pages().len(), 2);
}

#[test]
fn renderer_writes_requested_path() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("single.pdf");

    PdfRenderer::default()
        .render(&["# Heading\n\nBody".to_string()], &out)
        .unwrap();

    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn renderer_reports_unwritable_path() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("missing").join("notes.pdf");

    assert!(PdfRenderer::default().render(&[], &out).is_err());
}
