//! File-level export: path validation, input decoding and output writing.
//!
//! Everything that touches the filesystem lives here so that conversion
//! itself stays pure. I/O failures are mapped onto the [`Error`] variants the
//! command line reports.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::format::MarkdownStyle;
use crate::pdf::PdfSink;
use crate::result::Conversion;

/// Output file type, chosen by the output path's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Pdf,
}

impl OutputFormat {
    /// Detect the format from `.md` or `.pdf`, case-insensitively.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use notebooklm_notes2md::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path(Path::new("notes.MD")).unwrap(), OutputFormat::Markdown);
    /// assert!(OutputFormat::from_path(Path::new("notes.txt")).is_err());
    /// ```
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("md") => Ok(Self::Markdown),
            Some("pdf") => Ok(Self::Pdf),
            _ => Err(Error::InvalidExtension(path.to_path_buf())),
        }
    }
}

/// Check the input exists and the output can be created.
///
/// Checks run in order: input file, output extension, output directory.
pub fn validate_paths(input: &Path, output: &Path) -> Result<OutputFormat> {
    if !input.is_file() {
        return Err(Error::InputNotFound(input.to_path_buf()));
    }

    let format = OutputFormat::from_path(output)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.is_dir() {
            return Err(Error::MissingOutputDir(parent.to_path_buf()));
        }
    }

    Ok(format)
}

/// Read an export as UTF-8 text.
///
/// A whitespace-only file is returned as-is with a logged warning; it simply
/// converts to zero notes.
pub fn read_input(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => Error::InputNotFound(path.to_path_buf()),
        io::ErrorKind::PermissionDenied => Error::PermissionDenied(path.to_path_buf()),
        _ => Error::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let html = String::from_utf8(bytes).map_err(|_| Error::Encoding(path.to_path_buf()))?;

    if html.trim().is_empty() {
        warn!(path = %path.display(), "input file is empty");
    }
    debug!(path = %path.display(), bytes = html.len(), "read input");
    Ok(html)
}

/// Write a Markdown document as UTF-8.
pub fn write_markdown(path: &Path, content: &str) -> Result<()> {
    write_bytes(path, content.as_bytes())
}

pub(crate) fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|source| write_error(path, source))
}

fn write_error(path: &Path, source: io::Error) -> Error {
    if source.kind() == io::ErrorKind::PermissionDenied {
        Error::PermissionDenied(path.to_path_buf())
    } else {
        Error::Write {
            path: PathBuf::from(path),
            source,
        }
    }
}

/// Write a conversion to `output`.
///
/// Markdown output uses `style`; PDF output hands one normalized section per
/// note to `sink`.
pub fn export(
    conversion: &Conversion,
    output: &Path,
    format: OutputFormat,
    style: MarkdownStyle,
    sink: &dyn PdfSink,
) -> Result<()> {
    match format {
        OutputFormat::Markdown => write_markdown(output, &conversion.to_markdown(style))?,
        OutputFormat::Pdf => sink.render(&conversion.sections(), output)?,
    }
    info!(
        notes = conversion.notes.len(),
        output = %output.display(),
        ?format,
        "export complete"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::result::Note;

    #[derive(Default)]
    struct RecordingSink {
        calls: RefCell<Vec<(Vec<String>, PathBuf)>>,
    }

    impl PdfSink for RecordingSink {
        fn render(&self, sections: &[String], path: &Path) -> Result<()> {
            self.calls
                .borrow_mut()
                .push((sections.to_vec(), path.to_path_buf()));
            Ok(())
        }
    }

    fn conversion() -> Conversion {
        Conversion {
            notes: vec![
                Note {
                    title: "A".to_string(),
                    body: "## A\nfirst [1]".to_string(),
                },
                Note {
                    title: "B".to_string(),
                    body: "## B\nsecond".to_string(),
                },
            ],
            ..Conversion::default()
        }
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutputFormat::from_path(Path::new("a.pdf")).unwrap(), OutputFormat::Pdf);
        assert_eq!(OutputFormat::from_path(Path::new("a.PDF")).unwrap(), OutputFormat::Pdf);
        assert_eq!(OutputFormat::from_path(Path::new("dir/a.md")).unwrap(), OutputFormat::Markdown);
        assert!(matches!(
            OutputFormat::from_path(Path::new("a")),
            Err(Error::InvalidExtension(_))
        ));
        assert!(matches!(
            OutputFormat::from_path(Path::new("a.markdown")),
            Err(Error::InvalidExtension(_))
        ));
    }

    #[test]
    fn test_validate_paths_order() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.html");
        let missing = dir.path().join("missing.html");
        fs::write(&input, "<html></html>").unwrap();

        // Missing input wins over a bad extension.
        assert!(matches!(
            validate_paths(&missing, &dir.path().join("out.txt")),
            Err(Error::InputNotFound(_))
        ));
        assert!(matches!(
            validate_paths(&input, &dir.path().join("out.txt")),
            Err(Error::InvalidExtension(_))
        ));
        assert!(matches!(
            validate_paths(&input, &dir.path().join("nope").join("out.md")),
            Err(Error::MissingOutputDir(_))
        ));
        assert_eq!(
            validate_paths(&input, &dir.path().join("out.pdf")).unwrap(),
            OutputFormat::Pdf
        );
    }

    #[test]
    fn test_validate_paths_bare_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.html");
        fs::write(&input, "x").unwrap();
        assert_eq!(
            validate_paths(&input, Path::new("out.md")).unwrap(),
            OutputFormat::Markdown
        );
    }

    #[test]
    fn test_directory_is_not_an_input() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            validate_paths(dir.path(), Path::new("out.md")),
            Err(Error::InputNotFound(_))
        ));
    }

    #[test]
    fn test_read_input() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.html");
        let bad = dir.path().join("bad.html");
        let blank = dir.path().join("blank.html");
        fs::write(&good, "<p>héllo</p>").unwrap();
        fs::write(&bad, [0xff, 0xfe, 0x00, 0x3c]).unwrap();
        fs::write(&blank, "  \n").unwrap();

        assert_eq!(read_input(&good).unwrap(), "<p>héllo</p>");
        assert!(matches!(read_input(&bad), Err(Error::Encoding(_))));
        assert_eq!(read_input(&blank).unwrap(), "  \n");
        assert!(matches!(
            read_input(&dir.path().join("absent.html")),
            Err(Error::InputNotFound(_))
        ));
    }

    #[test]
    fn test_export_markdown() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("notes.md");
        let sink = RecordingSink::default();

        export(&conversion(), &out, OutputFormat::Markdown, MarkdownStyle::Standard, &sink).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert!(written.starts_with("# Untitled Document\n\n## A\nfirst\n\n"));
        assert!(sink.calls.borrow().is_empty());
    }

    #[test]
    fn test_export_pdf_hands_sections_to_sink() {
        let out = PathBuf::from("notes.pdf");
        let sink = RecordingSink::default();

        export(&conversion(), &out, OutputFormat::Pdf, MarkdownStyle::Obsidian, &sink).unwrap();

        let calls = sink.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, ["## A\nfirst", "## B\nsecond"]);
        assert_eq!(calls[0].1, out);
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("missing").join("notes.md");
        assert!(matches!(
            write_markdown(&out, "x"),
            Err(Error::Write { .. })
        ));
    }
}
