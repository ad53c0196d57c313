use exchange::CredentialField;
use log::debug;
use serde_json::{Map, Value};

pub type RuntimeConfig = Map<String, Value>;

/// Section keys that never count as runtime options.
const SECTION_KEYS: &[&str] = &["api_key_file", "config"];

/// Every key of either input; an override wins unless it is `null`.
pub fn merge_config_and_args(base: &RuntimeConfig, overrides: &RuntimeConfig) -> RuntimeConfig {
    let mut merged = base.clone();
    for (key, value) in overrides {
        if !value.is_null() {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// Runtime options of a section: its top-level entries minus credentials,
/// with the nested `config` object layered on top.
pub fn option_base(section: &RuntimeConfig) -> RuntimeConfig {
    let mut base: RuntimeConfig = section
        .iter()
        .filter(|(key, _)| {
            CredentialField::from_str(key).is_none() && !SECTION_KEYS.contains(&key.as_str())
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    if let Some(Value::Object(config)) = section.get("config") {
        for (key, value) in config {
            if CredentialField::from_str(key).is_some() {
                continue;
            }
            if let Some(previous) = base.insert(key.clone(), value.clone()) {
                debug!("option {} from nested config replaces {}", key, previous);
            }
        }
    }
    base
}
