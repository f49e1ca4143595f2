/// Errors from the site-generator integration layer.
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while forwarding to the host generator or cleaning
/// its artifacts.
#[derive(Debug, Error)]
pub enum SiteError {
    /// A generated artifact could not be removed.
    #[error("Failed to remove '{}': {source}", path.display())]
    Io {
        /// Path of the offending artifact.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The host generator binary could not be launched.
    #[error(
        "Failed to launch site generator '{program}': {source}. \
         Set SITECLI_GENERATOR to the generator binary to use"
    )]
    Spawn {
        /// The program that was attempted.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The host generator ran and exited with a failure code.
    #[error("Site generator '{program}' exited with code {code}")]
    Failed {
        /// The program that ran.
        program: String,
        /// Its exit code.
        code: i32,
    },

    /// The host generator was terminated by a signal.
    #[error("Site generator '{program}' was terminated by a signal")]
    Interrupted {
        /// The program that ran.
        program: String,
    },
}
