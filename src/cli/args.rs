/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// sitecli — peripheral utilities for documentation sites.
#[derive(Debug, Parser)]
#[command(
    name = "sitecli",
    about = "Peripheral utilities for documentation sites: translations, heading IDs, CSS cleanup, PWA config checks",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output format. Auto-detects: table when TTY, json when piped.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "auto")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Comma-separated field names to include in table output (projection).
    #[arg(long, global = true, value_name = "FIELDS")]
    pub fields: Option<String>,

    /// Omit table headers (useful for awk/cut processing).
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Print per-step timing to stderr for debugging.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Auto-detect: table when stdout is a TTY, json when piped.
    #[default]
    Auto,
    /// JSON array or object (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
    /// Aligned table with headers (human-readable).
    Table,
    /// File path only, one per line (for piping to other commands).
    Path,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the static site (forwarded to the host generator).
    Build(BuildArgs),
    /// Start the dev server (forwarded to the host generator).
    Start(StartArgs),
    /// Serve a previously built site (forwarded to the host generator).
    Serve(ServeArgs),
    /// Deploy the built site (forwarded to the host generator).
    Deploy(DeployArgs),
    /// Copy a theme component into the site for customization (forwarded).
    Swizzle(SwizzleArgs),
    /// Remove generated build artifacts and caches.
    Clear(ClearArgs),
    /// Merge the source locale's translation files into a target locale.
    WriteTranslations(WriteTranslationsArgs),
    /// Produce the render-time messages for a locale (translations over defaults).
    Localize(LocalizeArgs),
    /// Add explicit {#id} anchors to Markdown headings.
    WriteHeadingIds(WriteHeadingIdsArgs),
    /// Validate a PWA plugin options file and print the normalized config.
    CheckPwa(CheckPwaArgs),
    /// Remove overridden CSS custom-property declarations.
    StripCssOverrides(StripCssArgs),
}

/// Arguments for `sitecli build`.
#[derive(Debug, Parser)]
pub struct BuildArgs {
    /// Directory where the built site is emitted.
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Path to the site config file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Build only the given locale.
    #[arg(long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Skip HTML/JS/CSS minification.
    #[arg(long)]
    pub no_minify: bool,

    /// Build in development mode (faster, unoptimized).
    #[arg(long)]
    pub dev: bool,
}

/// Arguments for `sitecli start`.
#[derive(Debug, Parser)]
pub struct StartArgs {
    /// Port for the dev server.
    #[arg(long, value_name = "PORT", default_value = "3000")]
    pub port: u16,

    /// Host interface to bind.
    #[arg(long, value_name = "HOST", default_value = "localhost")]
    pub host: String,

    /// Serve only the given locale.
    #[arg(long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Do not open a browser window.
    #[arg(long)]
    pub no_open: bool,

    /// Use filesystem polling instead of native watch events.
    #[arg(long)]
    pub poll: bool,
}

/// Arguments for `sitecli serve`.
#[derive(Debug, Parser)]
pub struct ServeArgs {
    /// Port for the static server.
    #[arg(long, value_name = "PORT", default_value = "3000")]
    pub port: u16,

    /// Host interface to bind.
    #[arg(long, value_name = "HOST", default_value = "localhost")]
    pub host: String,

    /// Directory containing the built site.
    #[arg(long, value_name = "DIR", default_value = "build")]
    pub dir: PathBuf,

    /// Run a build before serving.
    #[arg(long)]
    pub build: bool,

    /// Do not open a browser window.
    #[arg(long)]
    pub no_open: bool,
}

/// Arguments for `sitecli deploy`.
#[derive(Debug, Parser)]
pub struct DeployArgs {
    /// Deploy only the given locale.
    #[arg(long, value_name = "LOCALE")]
    pub locale: Option<String>,

    /// Directory where the built site was emitted.
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Deploy the existing build output without rebuilding.
    #[arg(long)]
    pub skip_build: bool,
}

/// Arguments for `sitecli swizzle`.
#[derive(Debug, Parser)]
pub struct SwizzleArgs {
    /// Theme package name (e.g., "@docusaurus/theme-classic").
    pub theme: Option<String>,

    /// Component name within the theme (e.g., "Footer").
    pub component: Option<String>,

    /// Emit TypeScript sources.
    #[arg(long)]
    pub typescript: bool,

    /// Allow swizzling components marked unsafe.
    #[arg(long)]
    pub danger: bool,

    /// Copy the component source into the site (full ownership).
    #[arg(long, conflicts_with = "wrap")]
    pub eject: bool,

    /// Create a wrapper component delegating to the original.
    #[arg(long)]
    pub wrap: bool,

    /// List swizzlable components instead of swizzling.
    #[arg(long)]
    pub list: bool,
}

/// Arguments for `sitecli clear`.
#[derive(Debug, Parser)]
pub struct ClearArgs {
    /// Site directory to clean.
    #[arg(value_name = "SITE_DIR", default_value = ".")]
    pub site_dir: PathBuf,
}

/// Arguments for `sitecli write-translations`.
#[derive(Debug, Parser)]
pub struct WriteTranslationsArgs {
    /// Site directory containing the i18n/ tree.
    #[arg(value_name = "SITE_DIR", default_value = ".")]
    pub site_dir: PathBuf,

    /// Target locale to write translation files for.
    #[arg(long, value_name = "LOCALE")]
    pub locale: String,

    /// Locale whose files define the canonical message set.
    #[arg(long, value_name = "LOCALE", default_value = "en")]
    pub source_locale: String,

    /// Replace existing target messages instead of keeping them.
    #[arg(long = "override")]
    pub override_existing: bool,

    /// Prefix added to newly written messages (to spot untranslated strings).
    #[arg(long, value_name = "PREFIX")]
    pub message_prefix: Option<String>,
}

/// Arguments for `sitecli localize`.
#[derive(Debug, Parser)]
pub struct LocalizeArgs {
    /// Site directory containing the i18n/ tree.
    #[arg(value_name = "SITE_DIR", default_value = ".")]
    pub site_dir: PathBuf,

    /// Locale to produce render-time messages for.
    #[arg(long, value_name = "LOCALE")]
    pub locale: String,

    /// Locale whose files define the canonical message set.
    #[arg(long, value_name = "LOCALE", default_value = "en")]
    pub source_locale: String,

    /// Write the localized files under this directory instead of printing.
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

/// Arguments for `sitecli write-heading-ids`.
#[derive(Debug, Parser)]
pub struct WriteHeadingIdsArgs {
    /// Markdown files or directories to process.
    #[arg(value_name = "PATH", default_value = "docs")]
    pub paths: Vec<PathBuf>,

    /// Keep the original casing in generated ids.
    #[arg(long)]
    pub maintain_case: bool,

    /// Recompute and replace existing explicit anchors.
    #[arg(long)]
    pub overwrite: bool,
}

/// Arguments for `sitecli check-pwa`.
#[derive(Debug, Parser)]
pub struct CheckPwaArgs {
    /// JSON file holding the PWA plugin options object.
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

/// Arguments for `sitecli strip-css-overrides`.
#[derive(Debug, Parser)]
pub struct StripCssArgs {
    /// Stylesheet files to process.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Rewrite the files in place (default prints the result to stdout).
    #[arg(long)]
    pub write: bool,
}
