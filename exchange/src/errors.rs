use crate::{credentials::CredentialField, kind::ExchangeKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("{exchange} API {field} is invalid")]
    InvalidCredentialField {
        exchange: ExchangeKind,
        field: CredentialField,
    },

    #[error("{exchange} API URL is invalid: {url}")]
    InvalidEndpoint { exchange: ExchangeKind, url: String },

    #[error(
        "Unable to read {path} for {exchange} ({message}), please check the file exists and is readable. \
         Set \"api_key_file\" to null in the config file for test mode"
    )]
    CredentialFileUnreadable {
        exchange: ExchangeKind,
        path: String,
        message: String,
    },

    #[error("Unable to write {path} for {exchange}: {message}")]
    CredentialFileWrite {
        exchange: ExchangeKind,
        path: String,
        message: String,
    },

    #[error("Credential pattern {pattern} does not compile: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Unknown exchange: {name}")]
    UnknownExchange { name: String },
}

pub type Result<T> = std::result::Result<T, ExchangeError>;
