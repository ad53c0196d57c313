#[cfg(test)]
mod tests {
    use crate::errors::ConfigError;
    use crate::merge::RuntimeConfig;
    use crate::migration::{
        can_persist, has_inline_credentials, inline_credentials, migrate, migrate_section, persist_section,
        rewrite_document,
    };
    use exchange::{CredentialField, ExchangeKind};
    use serde_json::{Value, json};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn map(value: Value) -> RuntimeConfig {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    fn kucoin_section() -> RuntimeConfig {
        map(json!({
            "api_key": "5f3a8b9c1d2e4f6a7b8c9d0e",
            "api_secret": "12345678-1234-1234-1234-123456789012",
            "api_passphrase": "Abc123!@#",
            "api_url": "https://api.kucoin.com",
            "config": { "granularity": 3600 }
        }))
    }

    #[test]
    fn test_detects_inline_credentials() {
        let schema = ExchangeKind::Kucoin.schema();
        assert!(has_inline_credentials(schema, &kucoin_section()));
        assert!(!has_inline_credentials(schema, &map(json!({ "api_url": "https://api.kucoin.com" }))));
        assert!(has_inline_credentials(schema, &map(json!({ "api_passphrase": "x" }))));
    }

    #[test]
    fn test_incomplete_inline_credentials() {
        let schema = ExchangeKind::CoinbasePro.schema();
        let section = map(json!({ "api_key": "k", "api_secret": "s" }));

        match inline_credentials(schema, &section) {
            Err(ConfigError::InvalidCredentialField { exchange, field }) => {
                assert_eq!(exchange, ExchangeKind::CoinbasePro);
                assert_eq!(field, CredentialField::ApiPassphrase);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_migrate_section_removes_secrets() {
        let schema = ExchangeKind::Kucoin.schema();
        let migrated = migrate_section(schema, &kucoin_section(), "kucoin.key");

        assert_eq!(
            Value::Object(migrated),
            json!({
                "api_key_file": "kucoin.key",
                "api_url": "https://api.kucoin.com",
                "config": { "granularity": 3600 }
            })
        );
    }

    #[test]
    fn test_rewrite_document_preserves_other_sections() {
        let document = map(json!({
            "coinbase": { "api_key_file": "coinbase.key" },
            "kucoin": { "api_key": "inline" }
        }));
        let rewritten = rewrite_document(
            &document,
            ExchangeKind::Kucoin,
            map(json!({ "api_key_file": "kucoin.key" })),
        );

        assert_eq!(rewritten["coinbase"], json!({ "api_key_file": "coinbase.key" }));
        assert_eq!(rewritten["kucoin"], json!({ "api_key_file": "kucoin.key" }));
        assert_eq!(document["kucoin"], json!({ "api_key": "inline" }));
    }

    #[test]
    fn test_migrate_writes_key_file() {
        let dir = TempDir::new().unwrap();
        let schema = ExchangeKind::Kucoin.schema();

        let migration = migrate(schema, &kucoin_section(), dir.path()).unwrap().unwrap();
        assert_eq!(migration.key_file, dir.path().join("kucoin.key"));
        assert_eq!(
            fs::read_to_string(&migration.key_file).unwrap(),
            "5f3a8b9c1d2e4f6a7b8c9d0e\n12345678-1234-1234-1234-123456789012\nAbc123!@#"
        );
        assert!(!migration.section.contains_key("api_secret"));
    }

    #[test]
    fn test_migrate_nothing_to_do() {
        let dir = TempDir::new().unwrap();
        let schema = ExchangeKind::Coinbase.schema();
        let section = map(json!({ "api_key_file": "coinbase.key" }));

        assert!(migrate(schema, &section, dir.path()).unwrap().is_none());
        assert!(!dir.path().join("coinbase.key").exists());
    }

    #[test]
    fn test_migrate_write_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        let schema = ExchangeKind::Kucoin.schema();

        let err = migrate(schema, &kucoin_section(), &dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, ConfigError::MigrationIoError { .. }));
    }

    #[test]
    fn test_persist_section() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"coinbase": {"api_key_file": "coinbase.key"}, "kucoin": {"api_key": "inline"}}"#,
        )
        .unwrap();

        persist_section(&path, ExchangeKind::Kucoin, map(json!({ "api_key_file": "kucoin.key" })))
            .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n    \"kucoin\": {\n        \"api_key_file\": \"kucoin.key\""));
        let document: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(document["coinbase"]["api_key_file"], "coinbase.key");
    }

    #[test]
    fn test_persist_section_missing_document() {
        let dir = TempDir::new().unwrap();
        let err = persist_section(
            &dir.path().join("config.json"),
            ExchangeKind::Coinbase,
            RuntimeConfig::new(),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::MigrationIoError { .. }));
    }

    #[test]
    fn test_only_json_documents_are_rewritten() {
        assert!(can_persist(Path::new("config.json")));
        assert!(can_persist(Path::new("/etc/bot/CONFIG.JSON")));
        assert!(!can_persist(Path::new("config.yaml")));
        assert!(!can_persist(Path::new("config.toml")));
        assert!(!can_persist(Path::new("config")));
    }
}
