#[cfg(test)]
mod tests {
    use crate::{CredentialField, Credentials, ExchangeKind};

    #[test]
    fn test_get_and_set() {
        let mut credentials = Credentials::default();
        assert!(!credentials.is_present(CredentialField::ApiKey));

        credentials.set(CredentialField::ApiKey, "key");
        credentials.set(CredentialField::ApiUrl, "https://api.coinbase.com");
        assert_eq!(credentials.get(CredentialField::ApiKey), Some("key"));
        assert_eq!(credentials.api_url.as_deref(), Some("https://api.coinbase.com"));
        assert_eq!(credentials.get(CredentialField::ApiPassphrase), None);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let credentials = Credentials {
            api_key: Some("5f3a8b9c1d2e4f6a7b8c9d0e".to_string()),
            api_secret: Some("topsecret".to_string()),
            api_passphrase: None,
            api_url: Some("https://api.kucoin.com".to_string()),
        };
        let printed = format!("{:?}", credentials);
        assert!(!printed.contains("5f3a8b9c"));
        assert!(!printed.contains("topsecret"));
        assert!(printed.contains("<unset>"));
        assert!(printed.contains("https://api.kucoin.com"));
    }

    #[test]
    fn test_field_names() {
        for field in [
            CredentialField::ApiKey,
            CredentialField::ApiSecret,
            CredentialField::ApiPassphrase,
            CredentialField::ApiUrl,
        ] {
            assert_eq!(CredentialField::from_str(field.as_str()), Some(field));
        }
        assert_eq!(CredentialField::from_str("api_key_file"), None);
    }

    #[test]
    fn test_exchange_names() {
        for kind in ExchangeKind::ALL {
            assert_eq!(ExchangeKind::from_str(kind.as_str()), Some(kind));
            assert_eq!(kind.schema().kind, kind);
        }
        assert_eq!(ExchangeKind::from_str("binance"), None);
        assert_eq!(ExchangeKind::CoinbasePro.to_string(), "Coinbase Pro");
    }
}
