//! Filename resolution and output-name derivation.
//!
//! Every file the program touches lives directly under one root directory
//! (`./img` in the shipped binary); users refer to files by bare name.

use std::path::PathBuf;

use crate::error::ProcessingError;

/// Directory-scoped filename resolution.
#[derive(Clone, Debug)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Full path for a bare filename.
    pub fn resolve(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    pub fn exists(&self, filename: &str) -> bool {
        self.resolve(filename).exists()
    }

    /// Resolve a bare filename, requiring that the file exists.
    pub fn resolve_existing(&self, filename: &str) -> Result<PathBuf, ProcessingError> {
        let path = self.resolve(filename);
        if path.exists() {
            Ok(path)
        } else {
            Err(ProcessingError::MissingFile(path))
        }
    }
}

/// Insert `-<suffix>` before the extension of `filename`.
///
/// The name is split on the FIRST dot: the stem is everything before it
/// and the extension is the next dot-separated segment only. So
/// `archive.tar.gz` derives `archive-<suffix>.tar` and a dotless name
/// derives `name-<suffix>`. Known quirk, kept as-is; no uniqueness check
/// is performed, so an existing output file is silently overwritten.
pub fn derive_output_name(filename: &str, suffix: &str) -> String {
    let mut parts = filename.split('.');
    let stem = parts.next().unwrap_or(filename);
    match parts.next() {
        Some(ext) => format!("{}-{}.{}", stem, suffix, ext),
        None => format!("{}-{}", stem, suffix),
    }
}
