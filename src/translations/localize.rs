/// Overlay a locale's translations over the canonical default messages.
use super::file::{TranslationFileContent, TranslationMessage};

/// Produce the content used at render time for one locale.
///
/// Every key of `defaults` appears in the result. Keys the localized file
/// translates take its message; everything else falls back to the default
/// message. Localized keys with no default counterpart are stale and do not
/// leak into the result. Descriptions always come from the defaults.
#[must_use]
pub fn localize_translation_content(
    defaults: &TranslationFileContent,
    localized: &TranslationFileContent,
) -> TranslationFileContent {
    defaults
        .iter()
        .map(|(key, default_entry)| {
            let message = localized
                .get(key)
                .map_or_else(|| default_entry.message.clone(), |e| e.message.clone());
            (
                key.clone(),
                TranslationMessage {
                    message,
                    description: default_entry.description.clone(),
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> TranslationMessage {
        TranslationMessage {
            message: message.to_owned(),
            description: None,
        }
    }

    #[test]
    fn test_localized_message_wins() {
        let defaults: TranslationFileContent =
            [("a".to_owned(), entry("Hello"))].into_iter().collect();
        let localized: TranslationFileContent =
            [("a".to_owned(), entry("Bonjour"))].into_iter().collect();

        let result = localize_translation_content(&defaults, &localized);
        assert_eq!(result["a"].message, "Bonjour");
    }

    #[test]
    fn test_missing_key_falls_back_to_default() {
        let defaults: TranslationFileContent = [
            ("a".to_owned(), entry("Hello")),
            ("b".to_owned(), entry("World")),
        ]
        .into_iter()
        .collect();
        let localized: TranslationFileContent =
            [("a".to_owned(), entry("Bonjour"))].into_iter().collect();

        let result = localize_translation_content(&defaults, &localized);
        assert_eq!(result["b"].message, "World");
    }

    #[test]
    fn test_stale_localized_keys_do_not_leak() {
        let defaults: TranslationFileContent =
            [("a".to_owned(), entry("Hello"))].into_iter().collect();
        let localized: TranslationFileContent = [
            ("a".to_owned(), entry("Bonjour")),
            ("gone".to_owned(), entry("Disparu")),
        ]
        .into_iter()
        .collect();

        let result = localize_translation_content(&defaults, &localized);
        assert_eq!(result.len(), 1);
        assert!(!result.contains_key("gone"));
    }

    #[test]
    fn test_descriptions_come_from_defaults() {
        let defaults: TranslationFileContent = [(
            "a".to_owned(),
            TranslationMessage {
                message: "Hello".to_owned(),
                description: Some("greeting".to_owned()),
            },
        )]
        .into_iter()
        .collect();
        let localized: TranslationFileContent = [(
            "a".to_owned(),
            TranslationMessage {
                message: "Bonjour".to_owned(),
                description: Some("salutation".to_owned()),
            },
        )]
        .into_iter()
        .collect();

        let result = localize_translation_content(&defaults, &localized);
        assert_eq!(result["a"].description.as_deref(), Some("greeting"));
    }
}
