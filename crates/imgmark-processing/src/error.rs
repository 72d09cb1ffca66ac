//! Error types for the processing crate.
//!
//! Failures are split by cause so callers and tests can tell a missing
//! file from a codec problem. The interactive layer still collapses
//! everything except validation into one generic user-facing line.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    /// A file the user named does not exist. Detected before any decode
    /// is attempted; the message is shown to the user verbatim.
    #[error("The file {} doesn't exist.", .0.display())]
    MissingFile(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Image codec error: {0}")]
    Codec(#[from] image::ImageError),

    #[error("Embedded font failed to parse")]
    Font(#[from] ab_glyph::InvalidFont),
}
