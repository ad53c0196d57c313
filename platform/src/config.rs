use crate::errors::{ConfigError, Result};
use exchange::ExchangeKind;
use log::info;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

/// Settings document, one section per exchange.
pub struct Config {
    settings: config::Config,
}

impl Config {
    fn build(source: config::File<config::FileSourceFile, config::FileFormat>) -> Result<Self> {
        config::builder::ConfigBuilder::<config::builder::DefaultState>::default()
            .add_source(source)
            .build()
            .map(|settings| {
                info!("settings loaded, sections: {:?}", Self::section_names(&settings));
                Config { settings }
            })
            .map_err(|e| ConfigError::FileError {
                message: e.to_string(),
            })
    }

    // Section names only: values may still hold inline secrets.
    fn section_names(settings: &config::Config) -> Vec<String> {
        settings
            .clone()
            .try_deserialize::<Map<String, Value>>()
            .map(|table| table.into_iter().map(|(name, _)| name).collect())
            .unwrap_or_default()
    }

    pub fn from_json(filepath: &str) -> Result<Self> {
        Self::build(config::File::with_name(filepath).format(config::FileFormat::Json))
    }

    pub fn from_yaml(filepath: &str) -> Result<Self> {
        Self::build(config::File::with_name(filepath).format(config::FileFormat::Yaml))
    }

    pub fn from_toml(filepath: &str) -> Result<Self> {
        Self::build(config::File::with_name(filepath).format(config::FileFormat::Toml))
    }

    /// Format follows the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        Self::build(config::File::from(path))
    }

    pub fn get<'de, T: Deserialize<'de>>(&self, key: &str) -> Result<T> {
        self.settings
            .get::<T>(key)
            .map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })
    }

    /// The exchange's section, `None` when absent or not an object.
    pub fn section(&self, kind: ExchangeKind) -> Option<Map<String, Value>> {
        match self.settings.get::<Value>(kind.as_str()) {
            Ok(Value::Object(section)) => Some(section),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    use super::*;

    #[test]
    fn test_load_json_config() {
        let mut tempfile = NamedTempFile::new().unwrap();
        writeln!(
            tempfile,
            r#"{{ "coinbasepro": {{ "api_url": "https://api.exchange.coinbase.com" }} }}"#
        )
        .unwrap();
        let config = Config::from_json(tempfile.path().to_str().unwrap()).unwrap();
        let api_url: String = config.get("coinbasepro.api_url").unwrap();
        assert_eq!(api_url, "https://api.exchange.coinbase.com");
    }

    #[test]
    fn test_load_yaml_config() {
        let mut tempfile = NamedTempFile::new().unwrap();
        writeln!(tempfile, "kucoin:\n  api_url: https://api.kucoin.com").unwrap();
        let config = Config::from_yaml(tempfile.path().to_str().unwrap()).unwrap();
        let api_url: String = config.get("kucoin.api_url").unwrap();
        assert_eq!(api_url, "https://api.kucoin.com");
    }

    #[test]
    fn test_load_toml_config() {
        let mut tempfile = NamedTempFile::new().unwrap();
        writeln!(tempfile, "[coinbase]\napi_url = \"https://api.coinbase.com\"").unwrap();
        let config = Config::from_toml(tempfile.path().to_str().unwrap()).unwrap();
        let api_url: String = config.get("coinbase.api_url").unwrap();
        assert_eq!(api_url, "https://api.coinbase.com");
    }

    #[test]
    fn test_section_by_extension() {
        let mut tempfile = Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(
            tempfile,
            r#"{{ "coinbase": {{ "api_url": "https://api.coinbase.com", "config": {{ "granularity": 3600 }} }}, "kucoin": 1 }}"#
        )
        .unwrap();
        let config = Config::from_path(tempfile.path()).unwrap();

        let section = config.section(ExchangeKind::Coinbase).unwrap();
        assert_eq!(section["api_url"], "https://api.coinbase.com");
        assert_eq!(section["config"]["granularity"], 3600);

        assert!(config.section(ExchangeKind::Kucoin).is_none());
        assert!(config.section(ExchangeKind::CoinbasePro).is_none());
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_json("/nonexistent/platform_conf").err().unwrap();
        assert!(matches!(err, ConfigError::FileError { .. }));
    }
}
