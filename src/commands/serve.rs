/// `serve` command: forward to the host generator's static server.
use crate::cli::OutputCtx;
use crate::cli::args::ServeArgs;
use crate::error::CliError;
use crate::site::runner::{run_generator, serve_args};

/// Run `sitecli serve`.
///
/// # Errors
///
/// Returns `CliError` when the generator cannot be launched or fails.
pub fn run(args: &ServeArgs, ctx: &OutputCtx) -> Result<(), CliError> {
    let argv = serve_args(args);
    let _t = ctx.timer("run_generator");
    run_generator(&argv).map_err(CliError::from)
}
