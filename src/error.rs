/// Top-level CLI error type and exit-code mapping.
use thiserror::Error;

use crate::css::CssError;
use crate::headings::HeadingError;
use crate::pwa::PwaOptionError;
use crate::site::SiteError;
use crate::translations::TranslationError;

/// Any error a command can surface to `main`.
#[derive(Debug, Error)]
pub enum CliError {
    /// Translation file read/merge/write failure.
    #[error(transparent)]
    Translation(#[from] TranslationError),

    /// PWA option validation failure.
    #[error(transparent)]
    Pwa(#[from] PwaOptionError),

    /// CSS read/parse failure.
    #[error(transparent)]
    Css(#[from] CssError),

    /// Markdown heading rewrite failure.
    #[error(transparent)]
    Heading(#[from] HeadingError),

    /// Site-generator forwarding or artifact-cleanup failure.
    #[error(transparent)]
    Site(#[from] SiteError),

    /// Invalid flag/argument combination not expressible in clap.
    #[error("{message}")]
    Usage {
        /// Explanation of the misuse.
        message: String,
    },
}

/// Exit code mapping for `CliError` variants.
impl CliError {
    /// Return the CLI exit code for this error.
    ///
    /// Validation and schema failures exit 2, missing inputs exit 4, a
    /// forwarded generator failure propagates the child's own code, and
    /// everything else exits 1.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage { .. } => 2,
            Self::Translation(e) => match e {
                TranslationError::Parse { .. } | TranslationError::Shape { .. } => 2,
                TranslationError::SourceLocaleMissing { .. } => 4,
                TranslationError::Io { .. } => 1,
            },
            Self::Pwa(e) => match e {
                PwaOptionError::Parse { .. } | PwaOptionError::Invalid { .. } => 2,
                PwaOptionError::Io { .. } => 1,
            },
            Self::Css(e) => match e {
                CssError::Parse { .. } => 2,
                CssError::Io { .. } => 1,
            },
            Self::Heading(_) => 1,
            Self::Site(e) => match e {
                SiteError::Failed { code, .. } => *code,
                SiteError::Io { .. } | SiteError::Spawn { .. } | SiteError::Interrupted { .. } => 1,
            },
        }
    }
}
