pub mod coinbase;
pub mod coinbase_pro;
pub mod credentials;
pub mod errors;
pub mod key_file;
pub mod kind;
pub mod kucoin;
pub mod schema;

pub use credentials::{CredentialField, Credentials};
pub use errors::{ExchangeError, Result};
pub use kind::ExchangeKind;
pub use schema::{CredentialSchema, FieldRule, PASSPHRASE_PATTERN};

#[cfg(test)]
mod credentials_test;
#[cfg(test)]
mod key_file_test;
