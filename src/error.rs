//! Error types for notebooklm-notes2md.
//!
//! Parsing never fails: a document without the notes container yields an
//! empty note list plus a warning. Errors only come from the process
//! boundary (reading input, validating paths, writing output).

use std::path::PathBuf;

/// Error type for conversion and export operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file does not exist or is not a regular file.
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// The operating system refused access to a path.
    #[error("Permission denied when accessing {}", .0.display())]
    PermissionDenied(PathBuf),

    /// The input file is not valid UTF-8.
    #[error("File encoding issue. Please ensure {} is UTF-8 encoded.", .0.display())]
    Encoding(PathBuf),

    /// Any other failure while reading the input file.
    #[error("Error reading input file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output path does not end in a supported extension.
    #[error("Output path must end with one of: .pdf, .md (got {})", .0.display())]
    InvalidExtension(PathBuf),

    /// The directory the output should be written to does not exist.
    #[error("Output directory does not exist: {}", .0.display())]
    MissingOutputDir(PathBuf),

    /// Unexpected failure while writing the output file.
    #[error("Error writing output file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A Markdown style name other than `standard` or `obsidian`.
    #[error("unknown markdown style '{0}' (expected standard or obsidian)")]
    UnknownStyle(String),

    /// PDF document construction failed.
    #[error("Error creating PDF file: {0}")]
    Pdf(String),

    /// An export schema file could not be loaded.
    #[error("Invalid export schema: {0}")]
    Schema(String),
}

/// Result type alias for conversion and export operations.
pub type Result<T> = std::result::Result<T, Error>;
