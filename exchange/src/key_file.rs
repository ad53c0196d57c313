//! Plaintext per-exchange key files: one credential per line in the
//! schema's order, no escaping.

use crate::{
    credentials::Credentials,
    errors::{ExchangeError, Result},
    schema::CredentialSchema,
};
use std::{fs, path::Path};

/// Reads the key file, trimming trailing whitespace from every line. Lines
/// missing at the end of the file read as empty values, which the schema
/// then rejects.
pub fn read(path: impl AsRef<Path>, schema: &CredentialSchema) -> Result<Credentials> {
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).map_err(|e| ExchangeError::CredentialFileUnreadable {
            exchange: schema.kind,
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    Ok(parse(&content, schema))
}

pub fn parse(content: &str, schema: &CredentialSchema) -> Credentials {
    let mut lines = content.lines();
    let mut credentials = Credentials::default();
    for field in schema.key_file_fields {
        let value = lines.next().unwrap_or_default().trim_end();
        credentials.set(*field, value);
    }
    credentials
}

pub fn render(credentials: &Credentials, schema: &CredentialSchema) -> String {
    schema
        .key_file_fields
        .iter()
        .map(|field| credentials.get(*field).unwrap_or_default())
        .collect::<Vec<&str>>()
        .join("\n")
}

pub fn write(
    path: impl AsRef<Path>,
    credentials: &Credentials,
    schema: &CredentialSchema,
) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, render(credentials, schema)).map_err(|e| ExchangeError::CredentialFileWrite {
        exchange: schema.kind,
        path: path.display().to_string(),
        message: e.to_string(),
    })
}
