/// `swizzle` command: forward to the host generator's theme tooling.
use crate::cli::OutputCtx;
use crate::cli::args::SwizzleArgs;
use crate::error::CliError;
use crate::site::runner::{run_generator, swizzle_args};

/// Run `sitecli swizzle`.
///
/// # Errors
///
/// Returns `CliError` when the generator cannot be launched or fails.
pub fn run(args: &SwizzleArgs, ctx: &OutputCtx) -> Result<(), CliError> {
    let argv = swizzle_args(args);
    let _t = ctx.timer("run_generator");
    run_generator(&argv).map_err(CliError::from)
}
