mod consts;
pub use consts::*;

use crate::{
    credentials::CredentialField,
    kind::ExchangeKind,
    schema::{CredentialSchema, FieldRule, PASSPHRASE_PATTERN},
};

pub static SCHEMA: CredentialSchema = CredentialSchema {
    kind: ExchangeKind::CoinbasePro,
    key_file: KEY_FILE,
    key_file_fields: &[
        CredentialField::ApiKey,
        CredentialField::ApiSecret,
        CredentialField::ApiPassphrase,
    ],
    api_key: FieldRule::new(r"^[a-f0-9]{32}$"),
    api_secret: FieldRule::new(r"^[A-Za-z0-9+/]+==$"),
    api_passphrase: Some(FieldRule::new(PASSPHRASE_PATTERN)),
    valid_urls: VALID_URLS,
    default_pair: None,
};
