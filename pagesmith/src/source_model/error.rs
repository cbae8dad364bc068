//! Error types for reading page sources

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a page source
///
/// Parsing itself never fails; malformed directives are tolerated.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The source file could not be read
    #[error("Failed to read source {path}: {source}", path = .path.display())]
    Read {
        /// Path of the source file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}
