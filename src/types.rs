/// Shared serializable output types for all commands.
///
/// These types are what gets written to stdout — either as JSON or rendered
/// as a table. They are decoupled from the internal domain types.
use serde::{Deserialize, Serialize};

/// Per-file result of `sitecli write-translations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationFileOutput {
    /// Target file path, relative to the site directory.
    pub file: String,
    /// Total number of message keys in the written file.
    pub keys: usize,
    /// Number of keys that did not exist in the target file before.
    pub added: usize,
    /// Number of stale target keys dropped because the source no longer has them.
    pub dropped: usize,
    /// Whether the file on disk was created or modified.
    pub changed: bool,
}

/// Per-file result of `sitecli localize --out-dir`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalizeOutput {
    /// Target file path, relative to the output directory.
    pub file: String,
    /// Total number of message keys in the localized content.
    pub keys: usize,
    /// Keys that fell back to the source-locale message.
    pub untranslated: usize,
    /// Stale localized keys dropped because the source no longer has them.
    pub dropped: usize,
    /// Whether the file on disk was created or modified.
    pub changed: bool,
}

/// Per-file result of `sitecli write-heading-ids`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadingIdsOutput {
    /// Markdown file path as given on the command line (or discovered).
    pub file: String,
    /// Number of headings that received a new or rewritten anchor.
    pub updated: usize,
}

/// Per-path result of `sitecli clear`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearOutput {
    /// Generated-artifact path, relative to the site directory.
    pub path: String,
    /// Whether the path existed and was removed.
    pub removed: bool,
}

/// Per-file result of `sitecli strip-css-overrides`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CssStripOutput {
    /// Stylesheet file path.
    pub file: String,
    /// Number of declarations removed.
    pub removed: usize,
    /// Custom-property names that had overridden declarations removed.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub properties: Vec<String>,
    /// Whether the file on disk was modified (`--write` only).
    pub changed: bool,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional list of individual violations (for option-validation errors).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl ErrorOutput {
    /// Construct from a `CliError`.
    #[must_use]
    pub fn from_cli_error(err: &crate::error::CliError) -> Self {
        use crate::css::CssError;
        use crate::error::CliError;
        use crate::pwa::PwaOptionError;
        use crate::site::SiteError;
        use crate::translations::TranslationError;

        let (code, details) = match err {
            CliError::Translation(e) => (
                match e {
                    TranslationError::Io { .. } => "translation_io_error",
                    TranslationError::Parse { .. } => "malformed_translation_file",
                    TranslationError::Shape { .. } => "invalid_translation_file",
                    TranslationError::SourceLocaleMissing { .. } => "source_locale_missing",
                },
                None,
            ),
            CliError::Pwa(e) => match e {
                PwaOptionError::Io { .. } => ("pwa_config_io_error", None),
                PwaOptionError::Parse { .. } => ("malformed_pwa_config", None),
                PwaOptionError::Invalid { errors, .. } => {
                    ("invalid_pwa_options", Some(errors.clone()))
                }
            },
            CliError::Css(e) => (
                match e {
                    CssError::Io { .. } => "css_io_error",
                    CssError::Parse { .. } => "css_parse_error",
                },
                None,
            ),
            CliError::Heading(_) => ("markdown_io_error", None),
            CliError::Site(e) => (
                match e {
                    SiteError::Io { .. } => "site_io_error",
                    SiteError::Spawn { .. } => "generator_spawn_failed",
                    SiteError::Failed { .. } | SiteError::Interrupted { .. } => "generator_failed",
                },
                None,
            ),
            CliError::Usage { .. } => ("usage", None),
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message: err.to_string(),
                details,
            },
        }
    }
}
