//! Table-driven credential rules.
//!
//! Each exchange declares one [`CredentialSchema`]: a [`FieldRule`] per
//! credential field, the endpoint allow-list and the key-file layout.
//! A rule is an anchored regular expression, compiled on first use.

use crate::{
    credentials::{CredentialField, Credentials},
    errors::{ExchangeError, Result},
    kind::ExchangeKind,
};
use log::debug;
use regex::Regex;
use std::sync::OnceLock;

/// Passphrase grammar shared by the exchanges that use one.
pub const PASSPHRASE_PATTERN: &str = r"^[A-Za-z0-9#$%=@!{},`~&*()<>?.:;_|^/+\[\]]{8,32}$";

#[derive(Debug)]
pub struct FieldRule {
    pattern: &'static str,
    compiled: OnceLock<std::result::Result<Regex, regex::Error>>,
}

impl FieldRule {
    pub const fn new(pattern: &'static str) -> Self {
        Self {
            pattern,
            compiled: OnceLock::new(),
        }
    }

    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    pub fn regex(&self) -> Result<&Regex> {
        self.compiled
            .get_or_init(|| Regex::new(self.pattern))
            .as_ref()
            .map_err(|e| ExchangeError::InvalidPattern {
                pattern: self.pattern.to_string(),
                message: e.to_string(),
            })
    }

    pub fn matches(&self, value: &str) -> Result<bool> {
        Ok(self.regex()?.is_match(value))
    }
}

#[derive(Debug)]
pub struct CredentialSchema {
    pub kind: ExchangeKind,
    /// Default key file name, relative to the working directory.
    pub key_file: &'static str,
    /// Line order of the key file.
    pub key_file_fields: &'static [CredentialField],
    pub api_key: FieldRule,
    pub api_secret: FieldRule,
    pub api_passphrase: Option<FieldRule>,
    pub valid_urls: &'static [&'static str],
    /// Pair assumed once live credentials are accepted, before options apply.
    pub default_pair: Option<(&'static str, &'static str)>,
}

impl CredentialSchema {
    pub fn rule(&self, field: CredentialField) -> Option<&FieldRule> {
        match field {
            CredentialField::ApiKey => Some(&self.api_key),
            CredentialField::ApiSecret => Some(&self.api_secret),
            CredentialField::ApiPassphrase => self.api_passphrase.as_ref(),
            CredentialField::ApiUrl => None,
        }
    }

    /// Key file fields plus the endpoint.
    pub fn required_fields(&self) -> impl Iterator<Item = CredentialField> + '_ {
        self.key_file_fields
            .iter()
            .copied()
            .chain(std::iter::once(CredentialField::ApiUrl))
    }

    pub fn has_required(&self, credentials: &Credentials) -> bool {
        self.required_fields().all(|f| credentials.is_present(f))
    }

    pub fn is_url_allowed(&self, url: &str) -> bool {
        self.valid_urls.contains(&url)
    }

    /// Checks every present field. Nothing is accepted partially: the first
    /// failing field aborts.
    pub fn validate(&self, credentials: &Credentials) -> Result<()> {
        for field in self.key_file_fields {
            let (Some(value), Some(rule)) = (credentials.get(*field), self.rule(*field)) else {
                continue;
            };
            if !rule.matches(value)? {
                debug!("{} {} does not match {}", self.kind, field.as_str(), rule.pattern());
                return Err(ExchangeError::InvalidCredentialField {
                    exchange: self.kind,
                    field: *field,
                });
            }
        }

        if let Some(url) = credentials.api_url.as_deref() {
            if !self.is_url_allowed(url) {
                return Err(ExchangeError::InvalidEndpoint {
                    exchange: self.kind,
                    url: url.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Validates live credentials. Returns `Ok(false)` without checking
    /// anything when the required set is incomplete (test / dry-run mode).
    pub fn accept(&self, credentials: &Credentials) -> Result<bool> {
        if !self.has_required(credentials) {
            debug!(
                "{} credentials incomplete, skipping validation: {:?}",
                self.kind, credentials
            );
            return Ok(false);
        }
        self.validate(credentials)?;
        Ok(true)
    }
}
