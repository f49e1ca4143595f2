/// `start` command: forward to the host generator's dev server.
use crate::cli::OutputCtx;
use crate::cli::args::StartArgs;
use crate::error::CliError;
use crate::site::runner::{run_generator, start_args};

/// Run `sitecli start`.
///
/// # Errors
///
/// Returns `CliError` when the generator cannot be launched or fails.
pub fn run(args: &StartArgs, ctx: &OutputCtx) -> Result<(), CliError> {
    let argv = start_args(args);
    let _t = ctx.timer("run_generator");
    run_generator(&argv).map_err(CliError::from)
}
