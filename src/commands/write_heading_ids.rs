/// `write-heading-ids` command: add explicit anchors to Markdown headings.
use std::fs;
use std::path::PathBuf;

use ignore::WalkBuilder;

use crate::cli::OutputCtx;
use crate::cli::args::WriteHeadingIdsArgs;
use crate::cli::output::write_heading_reports;
use crate::error::CliError;
use crate::headings::{HeadingError, HeadingIdOptions, write_heading_ids};
use crate::types::HeadingIdsOutput;

/// Run `sitecli write-heading-ids`.
///
/// # Errors
///
/// Returns `CliError` when a Markdown file cannot be read or written.
pub fn run(args: &WriteHeadingIdsArgs, ctx: &OutputCtx) -> Result<(), CliError> {
    let options = HeadingIdOptions {
        maintain_case: args.maintain_case,
        overwrite: args.overwrite,
    };

    let _t_collect = ctx.timer("collect_markdown_files");
    let files = collect_markdown_files(&args.paths);
    drop(_t_collect);

    let _t_rewrite = ctx.timer("write_heading_ids");
    let mut reports = Vec::with_capacity(files.len());
    for file in files {
        let io_err = |source: std::io::Error| HeadingError::Io {
            path: file.clone(),
            source,
        };
        let content = fs::read_to_string(&file).map_err(io_err)?;
        let (rewritten, updated) = write_heading_ids(&content, &options);
        if rewritten != content {
            fs::write(&file, rewritten).map_err(io_err)?;
        }
        reports.push(HeadingIdsOutput {
            file: file.display().to_string(),
            updated,
        });
    }
    drop(_t_rewrite);

    write_heading_reports(&reports, ctx);
    Ok(())
}

/// Expand files and directories into a sorted list of Markdown files.
///
/// Explicit file arguments are taken as-is; directories are walked for
/// `.md`/`.mdx`, honoring ignore files as the rest of the toolchain does.
fn collect_markdown_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }
        files.extend(
            WalkBuilder::new(path)
                .build()
                .filter_map(Result::ok)
                .filter(|e| e.file_type().is_some_and(|t| t.is_file()))
                .map(ignore::DirEntry::into_path)
                .filter(|p| p.extension().is_some_and(|ext| ext == "md" || ext == "mdx")),
        );
    }
    files.sort();
    files.dedup();
    files
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_collects_markdown_recursively() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("guides")).unwrap();
        fs::write(dir.path().join("intro.md"), "## Hi\n").unwrap();
        fs::write(dir.path().join("guides/setup.mdx"), "## Hi\n").unwrap();
        fs::write(dir.path().join("guides/notes.txt"), "skip").unwrap();

        let files = collect_markdown_files(&[dir.path().to_owned()]);
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_explicit_file_argument_taken_as_is() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("page.markdown");
        fs::write(&file, "## Hi\n").unwrap();

        let files = collect_markdown_files(&[file.clone()]);
        assert_eq!(files, vec![file]);
    }
}
