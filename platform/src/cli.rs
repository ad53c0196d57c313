//! Command-line overrides for the exchange configuration.
//!
//! Only flags that are actually given end up in the override map, so an
//! absent flag never hides a value from the config file.

use clap::Parser;
use exchange::ExchangeKind;
use serde_json::{Map, Value};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "platform",
    version,
    about = "Resolve and validate exchange configuration"
)]
pub struct Cli {
    /// Config document (JSON, YAML or TOML by extension).
    #[arg(long, default_value = "config.json")]
    pub config: PathBuf,

    /// Exchange section to load: coinbase, coinbasepro or kucoin.
    #[arg(long, value_parser = parse_exchange)]
    pub exchange: ExchangeKind,

    /// Key file path, overriding the config document.
    #[arg(long)]
    pub api_key_file: Option<String>,

    /// Market code, e.g. BTC-USD.
    #[arg(long)]
    pub market: Option<String>,

    #[arg(long)]
    pub base_currency: Option<String>,

    #[arg(long)]
    pub quote_currency: Option<String>,

    /// Candle size in seconds.
    #[arg(long)]
    pub granularity: Option<String>,

    /// Any other option as KEY=VALUE. VALUE is read as JSON and falls back to
    /// a plain string.
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub overrides: Vec<(String, Value)>,
}

impl Cli {
    pub fn override_map(&self) -> Map<String, Value> {
        let mut map: Map<String, Value> = self.overrides.iter().cloned().collect();
        let named = [
            ("api_key_file", &self.api_key_file),
            ("market", &self.market),
            ("base_currency", &self.base_currency),
            ("quote_currency", &self.quote_currency),
            ("granularity", &self.granularity),
        ];
        for (key, value) in named {
            if let Some(value) = value {
                map.insert(key.to_string(), Value::String(value.clone()));
            }
        }
        map
    }
}

fn parse_exchange(s: &str) -> Result<ExchangeKind, String> {
    ExchangeKind::from_str(s).ok_or_else(|| {
        let known: Vec<&str> = ExchangeKind::ALL.iter().map(|k| k.as_str()).collect();
        format!("unknown exchange '{}', expected one of {}", s, known.join(", "))
    })
}

fn parse_key_value(s: &str) -> Result<(String, Value), String> {
    let (key, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    if key.is_empty() {
        return Err(format!("empty key in '{}'", s));
    }
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}
