use crate::models::{Granularity, RuntimeOptions};
use exchange::{Credentials, ExchangeKind};
use serde_json::Value;
use std::{collections::BTreeMap, path::PathBuf};

/// Resolved configuration of the running application. Created once by the
/// host and filled in by the exchange parser.
#[derive(Debug, Clone, Default)]
pub struct ApplicationState {
    pub exchange: Option<ExchangeKind>,
    pub api_key_file: Option<PathBuf>,
    pub credentials: Credentials,

    pub base_currency: String,
    pub quote_currency: String,
    pub market: String,
    pub granularity: Granularity,

    pub options: RuntimeOptions,
    /// Options without a typed field, kept verbatim for the host.
    pub extra: BTreeMap<String, Value>,
}

impl ApplicationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once validated live credentials have been committed.
    pub fn has_live_credentials(&self) -> bool {
        self.credentials.api_key.is_some() && self.credentials.api_url.is_some()
    }
}
