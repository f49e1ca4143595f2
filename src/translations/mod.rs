/// Translation-file domain layer: read, merge, localize, write.
pub mod errors;
pub mod file;
pub mod localize;
pub mod merge;
pub mod walk;

pub use errors::TranslationError;
pub use file::{
    TranslationFileContent, TranslationMessage, read_translation_file, write_translation_file,
};
pub use localize::localize_translation_content;
pub use merge::{MergeOptions, MergeOutcome, merge_translation_content};
pub use walk::list_translation_files;
