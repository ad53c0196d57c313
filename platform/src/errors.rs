use exchange::{CredentialField, ExchangeError, ExchangeKind};
use thiserror::Error;

/// Exit status for a missing or unreadable key file.
pub const EXIT_CREDENTIAL_FILE: i32 = 1;
/// Exit status for every other configuration failure.
pub const EXIT_CONFIG: i32 = 2;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No application state is passed")]
    MissingApplicationState,

    #[error("Market invalid: {market}")]
    InvalidMarket { market: String },

    #[error("{field} is invalid: {value}")]
    InvalidCurrency { field: &'static str, value: String },

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

    #[error("{exchange} api key migration failed (io error): {message}")]
    MigrationIoError {
        exchange: ExchangeKind,
        message: String,
    },

    #[error("Credential pattern {pattern} does not compile: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error(
        "{exchange} API keys are inline in {path}, which is not a JSON document and cannot be \
         rewritten. Move them to the key file and set \"api_key_file\""
    )]
    MigrationUnsupported { exchange: ExchangeKind, path: String },

    #[error("Granularity is invalid: {value}")]
    InvalidGranularity { value: String },

    #[error("Option {key} is invalid: {message}")]
    InvalidOption { key: String, message: String },

    #[error("Unknown exchange: {name}")]
    UnknownExchange { name: String },

    #[error("Configuration file error: {message}")]
    FileError { message: String },

    #[error("Configuration parse error: {message}")]
    ParseError { message: String },
}

impl ConfigError {
    /// Fatal errors must stop the host from starting at all.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ConfigError::CredentialFileUnreadable { .. })
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_fatal() {
            EXIT_CREDENTIAL_FILE
        } else {
            EXIT_CONFIG
        }
    }
}

impl From<ExchangeError> for ConfigError {
    fn from(e: ExchangeError) -> Self {
        match e {
            ExchangeError::InvalidCredentialField { exchange, field } => {
                ConfigError::InvalidCredentialField { exchange, field }
            }
            ExchangeError::InvalidEndpoint { exchange, url } => {
                ConfigError::InvalidEndpoint { exchange, url }
            }
            ExchangeError::CredentialFileUnreadable {
                exchange,
                path,
                message,
            } => ConfigError::CredentialFileUnreadable {
                exchange,
                path,
                message,
            },
            ExchangeError::CredentialFileWrite {
                exchange,
                path,
                message,
            } => ConfigError::MigrationIoError {
                exchange,
                message: format!("{}: {}", path, message),
            },
            ExchangeError::InvalidPattern { pattern, message } => {
                ConfigError::InvalidPattern { pattern, message }
            }
            ExchangeError::UnknownExchange { name } => ConfigError::UnknownExchange { name },
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
