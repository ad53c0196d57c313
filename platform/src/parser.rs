//! One parser for every exchange, driven by the exchange's credential
//! schema.

use crate::{
    errors::{ConfigError, Result},
    merge::{self, RuntimeConfig},
    migration::{self, API_KEY_FILE},
    models::{ApplicationState, Granularity, MarketSpec, is_currency_valid, parse_market},
};
use exchange::{CredentialField, CredentialSchema, Credentials, ExchangeKind, key_file};
use log::{error, info, warn};
use serde_json::Value;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    /// Rewritten section after inline secrets moved to the key file. The
    /// host persists it with [`migration::persist_section`].
    pub migrated_section: Option<RuntimeConfig>,
    /// Whether live credentials were validated and committed.
    pub credentials_validated: bool,
}

#[derive(Debug, Clone)]
pub struct ExchangeParser {
    kind: ExchangeKind,
    schema: &'static CredentialSchema,
    base_dir: PathBuf,
    document: Option<PathBuf>,
}

impl ExchangeParser {
    pub fn new(kind: ExchangeKind) -> Self {
        Self {
            kind,
            schema: kind.schema(),
            base_dir: PathBuf::from("."),
            document: None,
        }
    }

    /// Directory that relative key file paths resolve against.
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Config document the section was read from. Inline secrets are only
    /// migrated when it can be rewritten.
    pub fn with_config_document(mut self, document: impl Into<PathBuf>) -> Self {
        self.document = Some(document.into());
        self
    }

    pub fn kind(&self) -> ExchangeKind {
        self.kind
    }

    /// Resolves the exchange section and overrides onto `state`.
    ///
    /// `section` is `None` when the config document has no object for this
    /// exchange; credentials are left untouched in that case. All changes are
    /// staged and committed together, so on error `state` is unchanged. A
    /// [`ConfigError::CredentialFileUnreadable`] is fatal and the host is
    /// expected to stop.
    pub fn apply(
        &self,
        state: Option<&mut ApplicationState>,
        section: Option<&RuntimeConfig>,
        overrides: &RuntimeConfig,
    ) -> Result<ParseOutcome> {
        let state = state.ok_or(ConfigError::MissingApplicationState)?;
        let mut staged = state.clone();
        staged.exchange = Some(self.kind);

        let mut outcome = ParseOutcome::default();
        let mut section = section.cloned();

        if let Some(raw) = section.as_mut() {
            self.check_migratable(raw)?;
            if let Some(migrated) = migration::migrate(self.schema, raw, &self.base_dir)? {
                *raw = migrated.section.clone();
                outcome.migrated_section = Some(migrated.section);
            }

            let key_file = self.resolve_key_file(raw, overrides)?;
            let mut credentials = match &key_file {
                Some(path) => self.read_key_file(path)?,
                None => Credentials::default(),
            };
            staged.api_key_file = key_file;
            credentials.api_url = api_url(raw)?;

            if self.schema.accept(&credentials)? {
                staged.credentials = credentials;
                if let Some((base, quote)) = self.schema.default_pair {
                    staged.base_currency = base.to_string();
                    staged.quote_currency = quote.to_string();
                }
                outcome.credentials_validated = true;
            }
        }

        let base = section.as_ref().map(merge::option_base).unwrap_or_default();
        let config = merge::merge_config_and_args(&base, overrides);
        apply_options(&mut staged, &config)?;

        info!(
            "{} configured: market {} granularity {}",
            self.kind,
            staged.market,
            staged.granularity.as_str()
        );
        *state = staged;
        Ok(outcome)
    }

    /// Override argument, then the section's own entry (`null` disables key
    /// file loading), then the exchange default.
    fn resolve_key_file(
        &self,
        section: &RuntimeConfig,
        overrides: &RuntimeConfig,
    ) -> Result<Option<PathBuf>> {
        let configured = match overrides.get(API_KEY_FILE) {
            Some(value) if !value.is_null() => Some(value),
            _ => section.get(API_KEY_FILE),
        };
        let path = match configured {
            None => Some(self.schema.key_file),
            Some(Value::Null) => None,
            Some(Value::String(path)) => Some(path.as_str()),
            Some(other) => {
                return Err(ConfigError::InvalidOption {
                    key: API_KEY_FILE.to_string(),
                    message: format!("expected a path, got {}", other),
                });
            }
        };
        Ok(path.map(|p| self.base_dir.join(p)))
    }

    fn check_migratable(&self, section: &RuntimeConfig) -> Result<()> {
        match &self.document {
            Some(document)
                if migration::has_inline_credentials(self.schema, section)
                    && !migration::can_persist(document) =>
            {
                Err(ConfigError::MigrationUnsupported {
                    exchange: self.kind,
                    path: document.display().to_string(),
                })
            }
            _ => Ok(()),
        }
    }

    fn read_key_file(&self, path: &Path) -> Result<Credentials> {
        key_file::read(path, self.schema).map_err(|e| {
            let e = ConfigError::from(e);
            error!("{}", e);
            e
        })
    }
}

/// The nested `config.api_url` wins over the entry next to the credentials.
fn api_url(section: &RuntimeConfig) -> Result<Option<String>> {
    let nested = match section.get("config") {
        Some(Value::Object(config)) => non_null(config, "api_url"),
        _ => None,
    };
    let value = nested.or_else(|| section.get("api_url"));
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(url)) => Ok(Some(url.clone())),
        Some(other) => Err(ConfigError::InvalidOption {
            key: "api_url".to_string(),
            message: format!("expected a string, got {}", other),
        }),
    }
}

fn non_null<'a>(config: &'a RuntimeConfig, key: &str) -> Option<&'a Value> {
    config.get(key).filter(|v| !v.is_null())
}

fn currency(config: &RuntimeConfig, key: &str, field: &'static str) -> Result<Option<String>> {
    match non_null(config, key) {
        None => Ok(None),
        Some(Value::String(s)) if is_currency_valid(s) => Ok(Some(s.clone())),
        Some(other) => Err(ConfigError::InvalidCurrency {
            field,
            value: match other {
                Value::String(s) => s.clone(),
                _ => other.to_string(),
            },
        }),
    }
}

/// Applies merged options. Pair precedence: an explicit market sets both
/// sides first, individually configured currencies then replace their side,
/// and the market is re-derived whenever both sides are set.
pub fn apply_options(state: &mut ApplicationState, config: &RuntimeConfig) -> Result<()> {
    for (key, value) in config {
        if value.is_null() || RESERVED_KEYS.contains(&key.as_str()) {
            continue;
        }
        if CredentialField::from_str(key).is_some() {
            warn!("ignoring {} option, credentials are only read from the key file", key);
            continue;
        }
        if !state.options.assign(key, value)? {
            state.extra.insert(key.clone(), value.clone());
        }
    }

    let base_currency = currency(config, "base_currency", "Base currency")?;
    let quote_currency = currency(config, "quote_currency", "Quote currency")?;

    if let Some(market) = non_null(config, "market") {
        let spec = match market {
            Value::String(s) => parse_market(s)?,
            other => {
                return Err(ConfigError::InvalidMarket {
                    market: other.to_string(),
                });
            }
        };
        state.market = spec.market;
        state.base_currency = spec.base_currency;
        state.quote_currency = spec.quote_currency;
    }
    if let Some(base) = base_currency {
        state.base_currency = base;
    }
    if let Some(quote) = quote_currency {
        state.quote_currency = quote;
    }
    if !state.base_currency.is_empty() && !state.quote_currency.is_empty() {
        state.market = MarketSpec::from_pair(&state.base_currency, &state.quote_currency)?.market;
    }

    if let Some(granularity) = non_null(config, "granularity") {
        state.granularity = Granularity::from_value(granularity)?;
    }
    Ok(())
}

/// Handled by the parser itself rather than as runtime options.
const RESERVED_KEYS: &[&str] = &[
    "base_currency",
    "quote_currency",
    "market",
    "granularity",
    "api_key_file",
    "api_url",
];
