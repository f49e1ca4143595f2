/// Key-by-key reconciliation of translation file content.
///
/// The incoming (source-locale) content defines the canonical key set. For
/// keys already present in the target, the existing translated message is
/// kept and only the description is refreshed; `override` replaces the whole
/// entry. Target keys absent from the source are stale and dropped.
use super::file::{TranslationFileContent, TranslationMessage};

/// Policy knobs for [`merge_translation_content`].
#[derive(Debug, Clone, Default)]
pub struct MergeOptions {
    /// Replace existing target messages with the incoming ones.
    pub override_existing: bool,
    /// Prefix prepended to any message taken from the incoming side, so
    /// untranslated strings stand out in the rendered site.
    pub message_prefix: Option<String>,
}

impl MergeOptions {
    fn apply_prefix(&self, message: &str) -> String {
        match &self.message_prefix {
            Some(prefix) => format!("{prefix}{message}"),
            None => message.to_owned(),
        }
    }
}

/// Result of a merge: the merged content plus what changed.
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// The merged file content.
    pub content: TranslationFileContent,
    /// Keys that were not present in the existing content.
    pub added: Vec<String>,
    /// Existing keys dropped because the incoming content no longer has them.
    pub dropped: Vec<String>,
}

/// Merge incoming content over existing content.
///
/// The merge is idempotent: merging the outcome with the same incoming
/// content again produces the same result.
#[must_use]
pub fn merge_translation_content(
    existing: &TranslationFileContent,
    incoming: &TranslationFileContent,
    options: &MergeOptions,
) -> MergeOutcome {
    let mut content = TranslationFileContent::new();
    let mut added = Vec::new();

    for (key, entry) in incoming {
        let merged = match existing.get(key) {
            Some(old) if !options.override_existing => TranslationMessage {
                message: old.message.clone(),
                description: entry.description.clone(),
            },
            Some(_) => TranslationMessage {
                message: options.apply_prefix(&entry.message),
                description: entry.description.clone(),
            },
            None => {
                added.push(key.clone());
                TranslationMessage {
                    message: options.apply_prefix(&entry.message),
                    description: entry.description.clone(),
                }
            }
        };
        content.insert(key.clone(), merged);
    }

    let dropped = existing
        .keys()
        .filter(|k| !incoming.contains_key(*k))
        .cloned()
        .collect();

    MergeOutcome {
        content,
        added,
        dropped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str, description: Option<&str>) -> TranslationMessage {
        TranslationMessage {
            message: message.to_owned(),
            description: description.map(str::to_owned),
        }
    }

    fn content(entries: &[(&str, &str, Option<&str>)]) -> TranslationFileContent {
        entries
            .iter()
            .map(|(k, m, d)| ((*k).to_owned(), entry(m, *d)))
            .collect()
    }

    #[test]
    fn test_new_keys_take_incoming_value() {
        let existing = content(&[]);
        let incoming = content(&[("a", "Hello", Some("greeting"))]);

        let outcome = merge_translation_content(&existing, &incoming, &MergeOptions::default());
        assert_eq!(outcome.content["a"], entry("Hello", Some("greeting")));
        assert_eq!(outcome.added, vec!["a"]);
        assert!(outcome.dropped.is_empty());
    }

    #[test]
    fn test_existing_keys_keep_message_take_description() {
        let existing = content(&[("a", "Bonjour", Some("old desc"))]);
        let incoming = content(&[("a", "Hello", Some("new desc"))]);

        let outcome = merge_translation_content(&existing, &incoming, &MergeOptions::default());
        assert_eq!(outcome.content["a"], entry("Bonjour", Some("new desc")));
        assert!(outcome.added.is_empty());
    }

    #[test]
    fn test_override_replaces_entry() {
        let existing = content(&[("a", "Bonjour", Some("old desc"))]);
        let incoming = content(&[("a", "Hello", None)]);
        let options = MergeOptions {
            override_existing: true,
            message_prefix: None,
        };

        let outcome = merge_translation_content(&existing, &incoming, &options);
        assert_eq!(outcome.content["a"], entry("Hello", None));
    }

    #[test]
    fn test_stale_keys_are_dropped() {
        let existing = content(&[("old", "Vieux", None), ("kept", "Gardé", None)]);
        let incoming = content(&[("kept", "Kept", None)]);

        let outcome = merge_translation_content(&existing, &incoming, &MergeOptions::default());
        assert!(!outcome.content.contains_key("old"));
        assert_eq!(outcome.dropped, vec!["old"]);
        assert_eq!(outcome.content["kept"].message, "Gardé");
    }

    #[test]
    fn test_merge_is_idempotent_without_new_keys() {
        let incoming = content(&[("a", "Hello", Some("d")), ("b", "World", None)]);
        let first = merge_translation_content(
            &TranslationFileContent::new(),
            &incoming,
            &MergeOptions::default(),
        );
        let second = merge_translation_content(&first.content, &incoming, &MergeOptions::default());

        assert_eq!(first.content, second.content);
        assert!(second.added.is_empty());
        assert!(second.dropped.is_empty());
    }

    #[test]
    fn test_prefix_applies_to_new_messages_only() {
        let existing = content(&[("a", "Bonjour", None)]);
        let incoming = content(&[("a", "Hello", None), ("b", "World", None)]);
        let options = MergeOptions {
            override_existing: false,
            message_prefix: Some("(TODO) ".to_owned()),
        };

        let outcome = merge_translation_content(&existing, &incoming, &options);
        assert_eq!(outcome.content["a"].message, "Bonjour");
        assert_eq!(outcome.content["b"].message, "(TODO) World");
    }
}
