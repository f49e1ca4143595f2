/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod build;
pub mod check_pwa;
pub mod clear;
pub mod deploy;
pub mod localize;
pub mod serve;
pub mod start;
pub mod strip_css_overrides;
pub mod swizzle;
pub mod write_heading_ids;
pub mod write_translations;

use crate::cli::OutputCtx;
use crate::cli::args::Command;
use crate::error::CliError;

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `CliError` on any command failure.
pub fn dispatch(command: &Command, ctx: &OutputCtx) -> Result<(), CliError> {
    match command {
        Command::Build(args) => build::run(args, ctx),
        Command::Start(args) => start::run(args, ctx),
        Command::Serve(args) => serve::run(args, ctx),
        Command::Deploy(args) => deploy::run(args, ctx),
        Command::Swizzle(args) => swizzle::run(args, ctx),
        Command::Clear(args) => clear::run(args, ctx),
        Command::WriteTranslations(args) => write_translations::run(args, ctx),
        Command::Localize(args) => localize::run(args, ctx),
        Command::WriteHeadingIds(args) => write_heading_ids::run(args, ctx),
        Command::CheckPwa(args) => check_pwa::run(args, ctx),
        Command::StripCssOverrides(args) => strip_css_overrides::run(args, ctx),
    }
}
