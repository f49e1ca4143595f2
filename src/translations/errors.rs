/// Errors from the translation-file domain layer.
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading, merging, or writing translation files.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// The translation file could not be read or written.
    #[error("Failed to access translation file '{}': {source}", path.display())]
    Io {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The translation file is not valid JSON.
    #[error("Malformed translation file '{}': {source}", path.display())]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The translation file parsed but does not have the expected shape.
    #[error("Invalid translation file '{}': {reason}", path.display())]
    Shape {
        /// Path of the offending file.
        path: PathBuf,
        /// Human-readable description of the shape violation.
        reason: String,
    },

    /// The source locale directory does not exist.
    #[error("No translation files found for locale '{locale}' (expected directory '{}')", dir.display())]
    SourceLocaleMissing {
        /// The locale whose files were requested.
        locale: String,
        /// The directory that was expected to exist.
        dir: PathBuf,
    },
}
