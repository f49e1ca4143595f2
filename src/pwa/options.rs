/// Declarative schema for the PWA plugin options object.
///
/// Recognized keys, their defaults, and allowed value sets mirror the plugin's
/// documented configuration surface. Validation collects every violation with
/// a path-qualified message instead of stopping at the first one.
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Allowed values for `offlineModeActivationStrategies`.
pub const ACTIVATION_STRATEGIES: &[&str] = &[
    "appInstalled",
    "standalone",
    "queryString",
    "mobile",
    "saveData",
    "always",
];

/// Default activation strategies.
pub const DEFAULT_ACTIVATION_STRATEGIES: &[&str] = &["appInstalled", "standalone", "queryString"];

/// Default service-worker registration module.
pub const DEFAULT_SW_REGISTER: &str = "docusaurus-plugin-pwa/src/registerSw.js";

/// Default reload-popup component.
pub const DEFAULT_RELOAD_POPUP: &str = "@theme/PwaReloadPopup";

/// The normalized PWA options, with all defaults applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PwaOptions {
    /// Log service-worker lifecycle events to the console.
    pub debug: bool,
    /// Conditions under which offline mode turns on.
    pub offline_mode_activation_strategies: Vec<String>,
    /// Extra configuration forwarded to the manifest-injection step.
    pub inject_manifest_config: Map<String, Value>,
    /// `<head>` tags (manifest link, theme color, ...) added to every page.
    pub pwa_head: Vec<HeadTag>,
    /// Module with custom service-worker logic, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sw_custom: Option<String>,
    /// Registration module, or disabled.
    pub sw_register: ModuleRef,
    /// Reload-popup component, or disabled.
    pub reload_popup: ModuleRef,
}

impl Default for PwaOptions {
    fn default() -> Self {
        Self {
            debug: false,
            offline_mode_activation_strategies: DEFAULT_ACTIVATION_STRATEGIES
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
            inject_manifest_config: Map::new(),
            pwa_head: Vec::new(),
            sw_custom: None,
            sw_register: ModuleRef::Module(DEFAULT_SW_REGISTER.to_owned()),
            reload_popup: ModuleRef::Module(DEFAULT_RELOAD_POPUP.to_owned()),
        }
    }
}

/// One `<head>` tag: a tag name plus arbitrary string attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadTag {
    /// Element name (e.g., "link", "meta").
    pub tag_name: String,
    /// Remaining attributes, in input order.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// A module path, or `false` to disable the feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleRef {
    /// Use the given module.
    Module(String),
    /// Feature disabled (JSON `false`).
    Disabled,
}

impl Serialize for ModuleRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Module(path) => serializer.serialize_str(path),
            Self::Disabled => serializer.serialize_bool(false),
        }
    }
}

/// Validate a raw options object and apply defaults.
///
/// # Errors
///
/// Returns the collected, path-qualified violation messages. An `Err` is
/// never empty.
pub fn validate_pwa_options(value: &Value) -> Result<PwaOptions, Vec<String>> {
    let Some(root) = value.as_object() else {
        return Err(vec![format!(
            "options root: expected an object, got {}",
            type_name(value)
        )]);
    };

    let mut errors = Vec::new();
    let mut options = PwaOptions::default();

    for (key, val) in root {
        match key.as_str() {
            "debug" => match val.as_bool() {
                Some(b) => options.debug = b,
                None => errors.push(format!("debug: expected boolean, got {}", type_name(val))),
            },
            "offlineModeActivationStrategies" => {
                if let Some(strategies) = validate_strategies(val, &mut errors) {
                    options.offline_mode_activation_strategies = strategies;
                }
            }
            "injectManifestConfig" => match val.as_object() {
                Some(obj) => options.inject_manifest_config = obj.clone(),
                None => errors.push(format!(
                    "injectManifestConfig: expected object, got {}",
                    type_name(val)
                )),
            },
            "pwaHead" => {
                if let Some(tags) = validate_pwa_head(val, &mut errors) {
                    options.pwa_head = tags;
                }
            }
            "swCustom" => match val.as_str() {
                Some(s) => options.sw_custom = Some(s.to_owned()),
                None => errors.push(format!("swCustom: expected string, got {}", type_name(val))),
            },
            "swRegister" => match validate_module_ref("swRegister", val) {
                Ok(m) => options.sw_register = m,
                Err(e) => errors.push(e),
            },
            "reloadPopup" => match validate_module_ref("reloadPopup", val) {
                Ok(m) => options.reload_popup = m,
                Err(e) => errors.push(e),
            },
            unknown => errors.push(format!("unknown option '{unknown}'")),
        }
    }

    if errors.is_empty() {
        Ok(options)
    } else {
        Err(errors)
    }
}

fn validate_strategies(value: &Value, errors: &mut Vec<String>) -> Option<Vec<String>> {
    let key = "offlineModeActivationStrategies";
    let Some(items) = value.as_array() else {
        errors.push(format!("{key}: expected array, got {}", type_name(value)));
        return None;
    };
    if items.is_empty() {
        errors.push(format!("{key}: must not be empty"));
        return None;
    }

    let before = errors.len();
    let mut strategies: Vec<String> = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match item.as_str() {
            Some(s) if ACTIVATION_STRATEGIES.contains(&s) => {
                if strategies.iter().any(|seen| seen == s) {
                    errors.push(format!("{key}[{i}]: duplicate strategy \"{s}\""));
                } else {
                    strategies.push(s.to_owned());
                }
            }
            Some(s) => errors.push(format!(
                "{key}[{i}]: \"{s}\" is not one of {}",
                ACTIVATION_STRATEGIES.join(", ")
            )),
            None => errors.push(format!(
                "{key}[{i}]: expected string, got {}",
                type_name(item)
            )),
        }
    }
    (errors.len() == before).then_some(strategies)
}

fn validate_pwa_head(value: &Value, errors: &mut Vec<String>) -> Option<Vec<HeadTag>> {
    let Some(items) = value.as_array() else {
        errors.push(format!("pwaHead: expected array, got {}", type_name(value)));
        return None;
    };

    let before = errors.len();
    let mut tags = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let Some(obj) = item.as_object() else {
            errors.push(format!("pwaHead[{i}]: expected object, got {}", type_name(item)));
            continue;
        };

        let tag_name = match obj.get("tagName") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                errors.push(format!(
                    "pwaHead[{i}].tagName: expected string, got {}",
                    type_name(other)
                ));
                None
            }
            None => {
                errors.push(format!("pwaHead[{i}]: missing required \"tagName\""));
                None
            }
        };

        let mut attributes = Map::new();
        for (attr, attr_val) in obj {
            if attr == "tagName" {
                continue;
            }
            if attr_val.is_string() {
                attributes.insert(attr.clone(), attr_val.clone());
            } else {
                errors.push(format!(
                    "pwaHead[{i}].{attr}: expected string, got {}",
                    type_name(attr_val)
                ));
            }
        }

        if let Some(tag_name) = tag_name {
            tags.push(HeadTag {
                tag_name,
                attributes,
            });
        }
    }
    (errors.len() == before).then_some(tags)
}

fn validate_module_ref(key: &str, value: &Value) -> Result<ModuleRef, String> {
    match value {
        Value::String(s) => Ok(ModuleRef::Module(s.clone())),
        Value::Bool(false) => Ok(ModuleRef::Disabled),
        other => Err(format!(
            "{key}: expected string or false, got {}",
            type_name(other)
        )),
    }
}

/// JSON type name for error messages.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_empty_object_gets_all_defaults() {
        let options = validate_pwa_options(&json!({})).unwrap();
        assert!(!options.debug);
        assert_eq!(
            options.offline_mode_activation_strategies,
            vec!["appInstalled", "standalone", "queryString"]
        );
        assert!(options.inject_manifest_config.is_empty());
        assert!(options.pwa_head.is_empty());
        assert_eq!(options.sw_custom, None);
        assert_eq!(
            options.sw_register,
            ModuleRef::Module(DEFAULT_SW_REGISTER.to_owned())
        );
        assert_eq!(
            options.reload_popup,
            ModuleRef::Module(DEFAULT_RELOAD_POPUP.to_owned())
        );
    }

    #[test]
    fn test_full_valid_config() {
        let options = validate_pwa_options(&json!({
            "debug": true,
            "offlineModeActivationStrategies": ["always"],
            "injectManifestConfig": {"maximumFileSizeToCacheInBytes": {}},
            "pwaHead": [
                {"tagName": "link", "rel": "manifest", "href": "/manifest.json"},
                {"tagName": "meta", "name": "theme-color", "content": "#1f6feb"}
            ],
            "swCustom": "src/sw.js",
            "swRegister": false,
            "reloadPopup": "@theme/CustomPopup"
        }))
        .unwrap();

        assert!(options.debug);
        assert_eq!(options.offline_mode_activation_strategies, vec!["always"]);
        assert_eq!(options.pwa_head.len(), 2);
        assert_eq!(options.pwa_head[0].tag_name, "link");
        assert_eq!(
            options.pwa_head[0].attributes.get("rel"),
            Some(&json!("manifest"))
        );
        assert_eq!(options.sw_custom.as_deref(), Some("src/sw.js"));
        assert_eq!(options.sw_register, ModuleRef::Disabled);
        assert_eq!(
            options.reload_popup,
            ModuleRef::Module("@theme/CustomPopup".to_owned())
        );
    }

    #[test]
    fn test_out_of_enum_strategy_rejected() {
        let errors = validate_pwa_options(&json!({
            "offlineModeActivationStrategies": ["standalone", "sometimes"]
        }))
        .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("offlineModeActivationStrategies[1]"));
    }

    #[test]
    fn test_duplicate_strategy_rejected() {
        let errors = validate_pwa_options(&json!({
            "offlineModeActivationStrategies": ["mobile", "mobile"]
        }))
        .unwrap_err();
        assert!(errors[0].contains("duplicate"));
    }

    #[test]
    fn test_empty_strategies_rejected() {
        let errors =
            validate_pwa_options(&json!({"offlineModeActivationStrategies": []})).unwrap_err();
        assert!(errors[0].contains("must not be empty"));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let errors = validate_pwa_options(&json!({"debugg": true})).unwrap_err();
        assert_eq!(errors, vec!["unknown option 'debugg'"]);
    }

    #[test]
    fn test_sw_register_true_rejected() {
        let errors = validate_pwa_options(&json!({"swRegister": true})).unwrap_err();
        assert!(errors[0].contains("expected string or false"));
    }

    #[test]
    fn test_pwa_head_missing_tag_name() {
        let errors =
            validate_pwa_options(&json!({"pwaHead": [{"rel": "manifest"}]})).unwrap_err();
        assert_eq!(errors, vec!["pwaHead[0]: missing required \"tagName\""]);
    }

    #[test]
    fn test_multiple_errors_collected() {
        let errors = validate_pwa_options(&json!({
            "debug": "yes",
            "swCustom": 42,
            "unknownThing": {}
        }))
        .unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_non_object_root_rejected() {
        let errors = validate_pwa_options(&json!([1, 2])).unwrap_err();
        assert!(errors[0].contains("expected an object"));
    }

    #[test]
    fn test_normalized_serialization_uses_false_for_disabled() {
        let options = validate_pwa_options(&json!({"swRegister": false})).unwrap();
        let rendered = serde_json::to_value(&options).unwrap();
        assert_eq!(rendered["swRegister"], json!(false));
        assert_eq!(rendered["reloadPopup"], json!(DEFAULT_RELOAD_POPUP));
    }
}
