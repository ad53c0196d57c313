mod consts;
pub use consts::*;

use crate::{
    credentials::CredentialField,
    kind::ExchangeKind,
    schema::{CredentialSchema, FieldRule},
};

pub static SCHEMA: CredentialSchema = CredentialSchema {
    kind: ExchangeKind::Coinbase,
    key_file: KEY_FILE,
    key_file_fields: &[CredentialField::ApiKey, CredentialField::ApiSecret],
    api_key: FieldRule::new(r"^[A-Za-z0-9]{16}$"),
    api_secret: FieldRule::new(r"^[A-Za-z0-9]{32}$"),
    api_passphrase: None,
    valid_urls: VALID_URLS,
    default_pair: None,
};
