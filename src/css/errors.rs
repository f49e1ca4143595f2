/// Errors from the CSS post-processing layer.
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or transforming stylesheets.
#[derive(Debug, Error)]
pub enum CssError {
    /// The stylesheet could not be read or written.
    #[error("Failed to access stylesheet '{}': {source}", path.display())]
    Io {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The stylesheet could not be parsed.
    #[error("Failed to parse stylesheet '{}' at line {line}: {reason}", path.display())]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// 1-indexed line of the failure.
        line: usize,
        /// What went wrong.
        reason: String,
    },
}
