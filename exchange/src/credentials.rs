use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CredentialField {
    #[serde(rename = "api_key")]
    ApiKey,
    #[serde(rename = "api_secret")]
    ApiSecret,
    #[serde(rename = "api_passphrase")]
    ApiPassphrase,
    #[serde(rename = "api_url")]
    ApiUrl,
}

impl CredentialField {
    /// Config document key.
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialField::ApiKey => "api_key",
            CredentialField::ApiSecret => "api_secret",
            CredentialField::ApiPassphrase => "api_passphrase",
            CredentialField::ApiUrl => "api_url",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "api_key" => Some(CredentialField::ApiKey),
            "api_secret" => Some(CredentialField::ApiSecret),
            "api_passphrase" => Some(CredentialField::ApiPassphrase),
            "api_url" => Some(CredentialField::ApiUrl),
            _ => None,
        }
    }
}

impl fmt::Display for CredentialField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CredentialField::ApiKey => "key",
            CredentialField::ApiSecret => "secret",
            CredentialField::ApiPassphrase => "passphrase",
            CredentialField::ApiUrl => "URL",
        };
        f.write_str(label)
    }
}

/// API credentials for one exchange. Every field is optional until the
/// schema has checked it; `None` means "not configured", which is distinct
/// from a configured but empty value.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_passphrase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl Credentials {
    pub fn get(&self, field: CredentialField) -> Option<&str> {
        match field {
            CredentialField::ApiKey => self.api_key.as_deref(),
            CredentialField::ApiSecret => self.api_secret.as_deref(),
            CredentialField::ApiPassphrase => self.api_passphrase.as_deref(),
            CredentialField::ApiUrl => self.api_url.as_deref(),
        }
    }

    pub fn set(&mut self, field: CredentialField, value: impl Into<String>) {
        let value = Some(value.into());
        match field {
            CredentialField::ApiKey => self.api_key = value,
            CredentialField::ApiSecret => self.api_secret = value,
            CredentialField::ApiPassphrase => self.api_passphrase = value,
            CredentialField::ApiUrl => self.api_url = value,
        }
    }

    pub fn is_present(&self, field: CredentialField) -> bool {
        self.get(field).is_some()
    }
}

// Secrets never reach the logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn redact(value: &Option<String>) -> &'static str {
            match value {
                Some(_) => "<redacted>",
                None => "<unset>",
            }
        }

        f.debug_struct("Credentials")
            .field("api_key", &redact(&self.api_key))
            .field("api_secret", &redact(&self.api_secret))
            .field("api_passphrase", &redact(&self.api_passphrase))
            .field("api_url", &self.api_url)
            .finish()
    }
}
