/// Translation file read/write.
///
/// A translation file is a flat JSON object mapping a message key to an entry
/// `{"message": "...", "description": "..."}` where `description` is optional.
/// Files are written pretty-printed with sorted keys so merges are
/// deterministic and diff-friendly.
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::TranslationError;

/// One localized message plus its optional translator-facing description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationMessage {
    /// The localized text shown to site visitors.
    pub message: String,
    /// Context for translators. Not rendered anywhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Full content of a translation file, keyed by message id.
///
/// `BTreeMap` keeps keys sorted, which fixes the on-disk order.
pub type TranslationFileContent = BTreeMap<String, TranslationMessage>;

/// Read and shape-check a translation file.
///
/// Returns an empty map when the file does not exist, so a missing target
/// locale file behaves like an empty one during merges.
///
/// # Errors
///
/// - `TranslationError::Io` — the file exists but cannot be read
/// - `TranslationError::Parse` — the file is not valid JSON
/// - `TranslationError::Shape` — the JSON does not have the expected shape
pub fn read_translation_file(path: &Path) -> Result<TranslationFileContent, TranslationError> {
    if !path.exists() {
        return Ok(TranslationFileContent::new());
    }

    let raw = fs::read_to_string(path).map_err(|source| TranslationError::Io {
        path: path.to_owned(),
        source,
    })?;

    let value: serde_json::Value =
        serde_json::from_str(&raw).map_err(|source| TranslationError::Parse {
            path: path.to_owned(),
            source,
        })?;

    content_from_value(path, &value)
}

/// Convert a parsed JSON value into [`TranslationFileContent`], reporting the
/// offending key on shape violations.
fn content_from_value(
    path: &Path,
    value: &serde_json::Value,
) -> Result<TranslationFileContent, TranslationError> {
    let shape_err = |reason: String| TranslationError::Shape {
        path: path.to_owned(),
        reason,
    };

    let root = value
        .as_object()
        .ok_or_else(|| shape_err("root is not a JSON object".to_owned()))?;

    let mut content = TranslationFileContent::new();
    for (key, entry) in root {
        let obj = entry
            .as_object()
            .ok_or_else(|| shape_err(format!("entry '{key}' is not an object")))?;

        let message = obj
            .get("message")
            .ok_or_else(|| shape_err(format!("entry '{key}' is missing \"message\"")))?
            .as_str()
            .ok_or_else(|| shape_err(format!("entry '{key}': \"message\" is not a string")))?
            .to_owned();

        let description = match obj.get("description") {
            None => None,
            Some(d) => Some(
                d.as_str()
                    .ok_or_else(|| {
                        shape_err(format!("entry '{key}': \"description\" is not a string"))
                    })?
                    .to_owned(),
            ),
        };

        if let Some(unknown) = obj.keys().find(|k| *k != "message" && *k != "description") {
            return Err(shape_err(format!(
                "entry '{key}' has unknown field \"{unknown}\""
            )));
        }

        content.insert(
            key.clone(),
            TranslationMessage {
                message,
                description,
            },
        );
    }
    Ok(content)
}

/// Write a translation file, creating parent directories as needed.
///
/// Returns `true` when the file was created or its content changed, `false`
/// when the on-disk content was already identical (the write is skipped).
///
/// # Errors
///
/// Returns `TranslationError::Io` on any filesystem failure.
pub fn write_translation_file(
    path: &Path,
    content: &TranslationFileContent,
) -> Result<bool, TranslationError> {
    let io_err = |source: std::io::Error| TranslationError::Io {
        path: path.to_owned(),
        source,
    };

    let mut serialized =
        serde_json::to_string_pretty(content).map_err(|source| TranslationError::Parse {
            path: path.to_owned(),
            source,
        })?;
    serialized.push('\n');

    if path.exists() {
        let existing = fs::read_to_string(path).map_err(io_err)?;
        if existing == serialized {
            return Ok(false);
        }
    } else if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    fs::write(path, serialized).map_err(io_err)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_read_valid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("code.json");
        fs::write(
            &path,
            r#"{"homepage.title": {"message": "Welcome", "description": "Hero title"}}"#,
        )
        .unwrap();

        let content = read_translation_file(&path).unwrap();
        assert_eq!(content.len(), 1);
        let entry = &content["homepage.title"];
        assert_eq!(entry.message, "Welcome");
        assert_eq!(entry.description.as_deref(), Some("Hero title"));
    }

    #[test]
    fn test_read_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let content = read_translation_file(&dir.path().join("nope.json")).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn test_read_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "not json").unwrap();

        let result = read_translation_file(&path);
        assert!(matches!(result, Err(TranslationError::Parse { .. })));
    }

    #[test]
    fn test_read_entry_missing_message() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"key": {"description": "only"}}"#).unwrap();

        let result = read_translation_file(&path);
        match result {
            Err(TranslationError::Shape { reason, .. }) => {
                assert!(reason.contains("key"), "reason should name the key: {reason}");
            }
            other => panic!("expected shape error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_non_object_root() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let result = read_translation_file(&path);
        assert!(matches!(result, Err(TranslationError::Shape { .. })));
    }

    #[test]
    fn test_read_unknown_entry_field() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{"key": {"message": "m", "extra": 1}}"#).unwrap();

        let result = read_translation_file(&path);
        assert!(matches!(result, Err(TranslationError::Shape { .. })));
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("code.json");

        let mut content = TranslationFileContent::new();
        content.insert(
            "a".to_owned(),
            TranslationMessage {
                message: "A".to_owned(),
                description: None,
            },
        );

        let changed = write_translation_file(&path, &content).unwrap();
        assert!(changed);
        assert_eq!(read_translation_file(&path).unwrap(), content);
    }

    #[test]
    fn test_write_identical_content_is_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("code.json");

        let mut content = TranslationFileContent::new();
        content.insert(
            "a".to_owned(),
            TranslationMessage {
                message: "A".to_owned(),
                description: Some("d".to_owned()),
            },
        );

        assert!(write_translation_file(&path, &content).unwrap());
        assert!(!write_translation_file(&path, &content).unwrap());
    }
}
