/// `strip-css-overrides` command: remove overridden custom-property
/// declarations from stylesheets.
use std::fs;

use crate::cli::OutputCtx;
use crate::cli::args::StripCssArgs;
use crate::cli::output::write_css_reports;
use crate::css::{CssError, remove_overridden_custom_properties};
use crate::error::CliError;
use crate::types::CssStripOutput;

/// Run `sitecli strip-css-overrides`.
///
/// Without `--write` the transformed stylesheet goes to stdout, so only one
/// file is accepted; with `--write` every file is rewritten in place and a
/// per-file report is printed instead.
///
/// # Errors
///
/// Returns `CliError` when a stylesheet cannot be read, parsed, or written.
pub fn run(args: &StripCssArgs, ctx: &OutputCtx) -> Result<(), CliError> {
    if !args.write && args.files.len() > 1 {
        return Err(CliError::Usage {
            message: "strip-css-overrides without --write accepts exactly one file; \
                      pass --write to rewrite multiple files in place"
                .to_owned(),
        });
    }

    let mut reports = Vec::with_capacity(args.files.len());
    for file in &args.files {
        let io_err = |source: std::io::Error| CssError::Io {
            path: file.clone(),
            source,
        };
        let source = fs::read_to_string(file).map_err(io_err)?;

        let _t = ctx.timer("remove_overridden_custom_properties");
        let outcome = remove_overridden_custom_properties(&source).map_err(|e| CssError::Parse {
            path: file.clone(),
            line: e.line,
            reason: e.reason,
        })?;
        drop(_t);

        if args.write {
            let changed = outcome.output != source;
            if changed {
                fs::write(file, &outcome.output).map_err(io_err)?;
            }
            reports.push(CssStripOutput {
                file: file.display().to_string(),
                removed: outcome.removed.len(),
                properties: unique_in_order(outcome.removed),
                changed,
            });
        } else {
            print!("{}", outcome.output);
        }
    }

    if args.write {
        write_css_reports(&reports, ctx);
    }
    Ok(())
}

/// Deduplicate property names, keeping first-seen order.
fn unique_in_order(properties: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(properties.len());
    for p in properties {
        if !unique.contains(&p) {
            unique.push(p);
        }
    }
    unique
}
