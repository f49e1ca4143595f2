/// `write-translations` command: merge the source locale's translation files
/// into a target locale's tree.
use std::path::Path;

use crate::cli::OutputCtx;
use crate::cli::args::WriteTranslationsArgs;
use crate::cli::output::write_translation_reports;
use crate::error::CliError;
use crate::translations::{
    MergeOptions, TranslationError, list_translation_files, merge_translation_content,
    read_translation_file, write_translation_file,
};
use crate::types::TranslationFileOutput;

/// Run `sitecli write-translations`.
///
/// # Errors
///
/// Returns `CliError` when the source locale directory is missing or any
/// translation file cannot be read, parsed, or written.
pub fn run(args: &WriteTranslationsArgs, ctx: &OutputCtx) -> Result<(), CliError> {
    let _t = ctx.timer("write_locale_files");
    let reports = write_locale_files(args)?;
    drop(_t);

    write_translation_reports(&reports, ctx);
    Ok(())
}

/// Merge every source-locale file into the mirrored target-locale path.
fn write_locale_files(
    args: &WriteTranslationsArgs,
) -> Result<Vec<TranslationFileOutput>, TranslationError> {
    let source_dir = args.site_dir.join("i18n").join(&args.source_locale);
    if !source_dir.is_dir() {
        return Err(TranslationError::SourceLocaleMissing {
            locale: args.source_locale.clone(),
            dir: source_dir,
        });
    }
    let target_dir = args.site_dir.join("i18n").join(&args.locale);

    let options = MergeOptions {
        override_existing: args.override_existing,
        message_prefix: args.message_prefix.clone(),
    };

    let mut reports = Vec::new();
    for source_file in list_translation_files(&source_dir) {
        let rel = source_file.strip_prefix(&source_dir).unwrap_or(&source_file);
        let target_file = target_dir.join(rel);

        let incoming = read_translation_file(&source_file)?;
        let existing = read_translation_file(&target_file)?;
        let outcome = merge_translation_content(&existing, &incoming, &options);
        let changed = write_translation_file(&target_file, &outcome.content)?;

        reports.push(TranslationFileOutput {
            file: display_relative(&target_file, &args.site_dir),
            keys: outcome.content.len(),
            added: outcome.added.len(),
            dropped: outcome.dropped.len(),
            changed,
        });
    }
    Ok(reports)
}

fn display_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;

    fn args(site_dir: PathBuf, locale: &str) -> WriteTranslationsArgs {
        WriteTranslationsArgs {
            site_dir,
            locale: locale.to_owned(),
            source_locale: "en".to_owned(),
            override_existing: false,
            message_prefix: None,
        }
    }

    #[test]
    fn test_creates_target_locale_tree() {
        let dir = TempDir::new().unwrap();
        let en = dir.path().join("i18n/en");
        fs::create_dir_all(en.join("plugin")).unwrap();
        fs::write(en.join("code.json"), r#"{"a": {"message": "Hello"}}"#).unwrap();
        fs::write(en.join("plugin/options.json"), r#"{"b": {"message": "World"}}"#).unwrap();

        let reports = write_locale_files(&args(dir.path().to_owned(), "fr")).unwrap();
        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|r| r.changed && r.added == 1));
        assert!(dir.path().join("i18n/fr/code.json").exists());
        assert!(dir.path().join("i18n/fr/plugin/options.json").exists());
    }

    #[test]
    fn test_second_run_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let en = dir.path().join("i18n/en");
        fs::create_dir_all(&en).unwrap();
        fs::write(en.join("code.json"), r#"{"a": {"message": "Hello"}}"#).unwrap();

        let first = write_locale_files(&args(dir.path().to_owned(), "fr")).unwrap();
        assert!(first[0].changed);
        let second = write_locale_files(&args(dir.path().to_owned(), "fr")).unwrap();
        assert!(!second[0].changed);
        assert_eq!(second[0].added, 0);
    }

    #[test]
    fn test_existing_translation_is_kept() {
        let dir = TempDir::new().unwrap();
        let en = dir.path().join("i18n/en");
        let fr = dir.path().join("i18n/fr");
        fs::create_dir_all(&en).unwrap();
        fs::create_dir_all(&fr).unwrap();
        fs::write(en.join("code.json"), r#"{"a": {"message": "Hello"}}"#).unwrap();
        fs::write(fr.join("code.json"), r#"{"a": {"message": "Bonjour"}}"#).unwrap();

        write_locale_files(&args(dir.path().to_owned(), "fr")).unwrap();
        let written = fs::read_to_string(fr.join("code.json")).unwrap();
        assert!(written.contains("Bonjour"));
    }

    #[test]
    fn test_missing_source_locale_errors() {
        let dir = TempDir::new().unwrap();
        let result = write_locale_files(&args(dir.path().to_owned(), "fr"));
        assert!(matches!(
            result,
            Err(TranslationError::SourceLocaleMissing { .. })
        ));
    }
}
