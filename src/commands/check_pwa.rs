/// `check-pwa` command: validate a PWA plugin options file.
use std::fs;

use crate::cli::OutputCtx;
use crate::cli::args::CheckPwaArgs;
use crate::cli::output::write_pwa_options;
use crate::error::CliError;
use crate::pwa::{PwaOptionError, validate_pwa_options};

/// Run `sitecli check-pwa`.
///
/// Prints the normalized config (all defaults applied) on success.
///
/// # Errors
///
/// Returns `CliError` when the file cannot be read, is not JSON, or violates
/// the option schema.
pub fn run(args: &CheckPwaArgs, ctx: &OutputCtx) -> Result<(), CliError> {
    let raw = fs::read_to_string(&args.config).map_err(|source| PwaOptionError::Io {
        path: args.config.clone(),
        source,
    })?;

    let value: serde_json::Value =
        serde_json::from_str(&raw).map_err(|source| PwaOptionError::Parse {
            path: args.config.clone(),
            source,
        })?;

    let _t = ctx.timer("validate_pwa_options");
    let options = validate_pwa_options(&value).map_err(|errors| PwaOptionError::Invalid {
        path: args.config.clone(),
        errors,
    })?;
    drop(_t);

    write_pwa_options(&options, ctx);
    Ok(())
}
