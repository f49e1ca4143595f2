/// `clear` command: remove generated build artifacts and caches.
use crate::cli::OutputCtx;
use crate::cli::args::ClearArgs;
use crate::cli::output::write_clear_reports;
use crate::error::CliError;
use crate::site::clear_generated;
use crate::types::ClearOutput;

/// Run `sitecli clear`.
///
/// # Errors
///
/// Returns `CliError` when an existing artifact cannot be removed.
pub fn run(args: &ClearArgs, ctx: &OutputCtx) -> Result<(), CliError> {
    let _t_clear = ctx.timer("clear_generated");
    let cleared = clear_generated(&args.site_dir)?;
    drop(_t_clear);

    let reports: Vec<ClearOutput> = cleared
        .into_iter()
        .map(|c| ClearOutput {
            path: c.path,
            removed: c.removed,
        })
        .collect();

    write_clear_reports(&reports, ctx);
    Ok(())
}
