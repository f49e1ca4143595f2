/// `localize` command: produce the render-time messages for one locale by
/// overlaying its translations on the source locale's defaults.
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::cli::OutputCtx;
use crate::cli::args::LocalizeArgs;
use crate::cli::output::{write_localize_reports, write_localized_content};
use crate::error::CliError;
use crate::translations::{
    TranslationError, TranslationFileContent, list_translation_files,
    localize_translation_content, read_translation_file, write_translation_file,
};
use crate::types::LocalizeOutput;

/// Run `sitecli localize`.
///
/// Without `--out-dir` the combined content is printed as one JSON object
/// keyed by file path; with it, each localized file is written under the
/// output directory and a per-file report is printed instead.
///
/// # Errors
///
/// Returns `CliError` when the source locale directory is missing or any
/// translation file cannot be read, parsed, or written.
pub fn run(args: &LocalizeArgs, ctx: &OutputCtx) -> Result<(), CliError> {
    let _t = ctx.timer("localize_locale_files");
    let files = localize_locale_files(args)?;
    drop(_t);

    if let Some(out_dir) = &args.out_dir {
        let mut reports = Vec::with_capacity(files.len());
        for file in &files {
            let target = out_dir.join(&file.rel);
            let changed = write_translation_file(&target, &file.content)
                .map_err(CliError::Translation)?;
            reports.push(LocalizeOutput {
                file: file.rel.display().to_string(),
                keys: file.content.len(),
                untranslated: file.untranslated,
                dropped: file.dropped,
                changed,
            });
        }
        write_localize_reports(&reports, ctx);
    } else {
        let combined: BTreeMap<String, &TranslationFileContent> = files
            .iter()
            .map(|f| (f.rel.display().to_string(), &f.content))
            .collect();
        write_localized_content(&combined, ctx);
    }
    Ok(())
}

/// The localized content of one source-locale file.
struct LocalizedFile {
    /// Path relative to the locale directory.
    rel: PathBuf,
    content: TranslationFileContent,
    /// Keys that fell back to the source-locale message.
    untranslated: usize,
    /// Stale localized keys absent from the source locale.
    dropped: usize,
}

/// Overlay the target locale's files onto every source-locale file.
fn localize_locale_files(args: &LocalizeArgs) -> Result<Vec<LocalizedFile>, TranslationError> {
    let source_dir = args.site_dir.join("i18n").join(&args.source_locale);
    if !source_dir.is_dir() {
        return Err(TranslationError::SourceLocaleMissing {
            locale: args.source_locale.clone(),
            dir: source_dir,
        });
    }
    let locale_dir = args.site_dir.join("i18n").join(&args.locale);

    let mut files = Vec::new();
    for source_file in list_translation_files(&source_dir) {
        let rel = source_file
            .strip_prefix(&source_dir)
            .unwrap_or(&source_file)
            .to_owned();

        let defaults = read_translation_file(&source_file)?;
        let localized = read_translation_file(&locale_dir.join(&rel))?;

        let untranslated = defaults
            .keys()
            .filter(|k| !localized.contains_key(k.as_str()))
            .count();
        let dropped = localized
            .keys()
            .filter(|k| !defaults.contains_key(k.as_str()))
            .count();
        let content = localize_translation_content(&defaults, &localized);

        files.push(LocalizedFile {
            rel,
            content,
            untranslated,
            dropped,
        });
    }
    Ok(files)
}
