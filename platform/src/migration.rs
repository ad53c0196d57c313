//! Moves inline API secrets out of the config document into the exchange's
//! key file.
//!
//! Rewrites are read-modify-write on values: the parser hands back the new
//! section and the host folds it into the document with [`persist_section`].

use crate::errors::{ConfigError, Result};
use crate::merge::RuntimeConfig;
use exchange::{CredentialSchema, Credentials, ExchangeKind, key_file};
use log::info;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

pub const API_KEY_FILE: &str = "api_key_file";

#[derive(Debug, Clone)]
pub struct CredentialMigration {
    /// Key file that was written.
    pub key_file: PathBuf,
    /// Section with the secrets replaced by an `api_key_file` reference.
    pub section: RuntimeConfig,
}

pub fn has_inline_credentials(schema: &CredentialSchema, section: &RuntimeConfig) -> bool {
    schema
        .key_file_fields
        .iter()
        .any(|field| section.contains_key(field.as_str()))
}

/// Only JSON documents are rewritten in place.
pub fn can_persist(document: &Path) -> bool {
    document
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Collects the inline secrets. Every key file field must be present as a
/// string, otherwise the key file would be written with a hole in it.
pub fn inline_credentials(
    schema: &CredentialSchema,
    section: &RuntimeConfig,
) -> Result<Credentials> {
    let mut credentials = Credentials::default();
    for field in schema.key_file_fields {
        match section.get(field.as_str()) {
            Some(Value::String(value)) => credentials.set(*field, value.as_str()),
            _ => {
                return Err(ConfigError::InvalidCredentialField {
                    exchange: schema.kind,
                    field: *field,
                });
            }
        }
    }
    Ok(credentials)
}

pub fn migrate_section(
    schema: &CredentialSchema,
    section: &RuntimeConfig,
    key_file: &str,
) -> RuntimeConfig {
    let mut migrated = section.clone();
    for field in schema.key_file_fields {
        migrated.remove(field.as_str());
    }
    migrated.insert(API_KEY_FILE.to_string(), Value::String(key_file.to_string()));
    migrated
}

/// New document with only `kind`'s section replaced.
pub fn rewrite_document(
    document: &Map<String, Value>,
    kind: ExchangeKind,
    section: RuntimeConfig,
) -> Map<String, Value> {
    let mut rewritten = document.clone();
    rewritten.insert(kind.as_str().to_string(), Value::Object(section));
    rewritten
}

/// Writes the key file under `base_dir` when the section still carries
/// inline secrets. Returns `None` when there is nothing to migrate.
pub fn migrate(
    schema: &CredentialSchema,
    section: &RuntimeConfig,
    base_dir: &Path,
) -> Result<Option<CredentialMigration>> {
    if !has_inline_credentials(schema, section) {
        return Ok(None);
    }
    info!(">>> migrating api keys to {} <<<", schema.key_file);

    let credentials = inline_credentials(schema, section)?;
    let key_file = base_dir.join(schema.key_file);
    key_file::write(&key_file, &credentials, schema)?;

    Ok(Some(CredentialMigration {
        key_file,
        section: migrate_section(schema, section, schema.key_file),
    }))
}

/// Read-modify-write of the JSON config document at `path`, replaced
/// atomically. Other exchanges' sections are preserved.
pub fn persist_section(path: &Path, kind: ExchangeKind, section: RuntimeConfig) -> Result<()> {
    let io_error = |e: json::JsonError| ConfigError::MigrationIoError {
        exchange: kind,
        message: format!("{}: {}", path.display(), e),
    };

    let document = json::load(path).map_err(io_error)?;
    let rewritten = rewrite_document(&document, kind, section);
    json::dump_atomic(&Value::Object(rewritten), path).map_err(io_error)?;

    info!("{} section of {} rewritten", kind, path.display());
    Ok(())
}
