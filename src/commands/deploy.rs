/// `deploy` command: forward to the host generator.
use crate::cli::OutputCtx;
use crate::cli::args::DeployArgs;
use crate::error::CliError;
use crate::site::runner::{deploy_args, run_generator};

/// Run `sitecli deploy`.
///
/// # Errors
///
/// Returns `CliError` when the generator cannot be launched or fails.
pub fn run(args: &DeployArgs, ctx: &OutputCtx) -> Result<(), CliError> {
    let argv = deploy_args(args);
    let _t = ctx.timer("run_generator");
    run_generator(&argv).map_err(CliError::from)
}
