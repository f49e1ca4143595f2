/// `build` command: forward to the host generator.
use crate::cli::OutputCtx;
use crate::cli::args::BuildArgs;
use crate::error::CliError;
use crate::site::runner::{build_args, run_generator};

/// Run `sitecli build`.
///
/// # Errors
///
/// Returns `CliError` when the generator cannot be launched or fails.
pub fn run(args: &BuildArgs, ctx: &OutputCtx) -> Result<(), CliError> {
    let argv = build_args(args);
    let _t = ctx.timer("run_generator");
    run_generator(&argv).map_err(CliError::from)
}
