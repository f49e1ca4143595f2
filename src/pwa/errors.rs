/// Errors from the PWA option-schema layer.
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading and validating PWA plugin options.
#[derive(Debug, Error)]
pub enum PwaOptionError {
    /// The options file could not be read.
    #[error("Failed to read PWA options file '{}': {source}", path.display())]
    Io {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The options file is not valid JSON.
    #[error("Malformed PWA options file '{}': {source}", path.display())]
    Parse {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The options object violates the schema. All violations are collected.
    #[error("Invalid PWA options in '{}':\n  {}", path.display(), errors.join("\n  "))]
    Invalid {
        /// Path of the offending file.
        path: PathBuf,
        /// Path-qualified violation messages.
        errors: Vec<String>,
    },
}
