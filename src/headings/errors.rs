/// Errors from the heading-id layer.
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while rewriting Markdown headings.
#[derive(Debug, Error)]
pub enum HeadingError {
    /// The Markdown file could not be read or written.
    #[error("Failed to access Markdown file '{}': {source}", path.display())]
    Io {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
