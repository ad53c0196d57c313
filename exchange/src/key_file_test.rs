#[cfg(test)]
mod tests {
    use crate::{Credentials, ExchangeError, ExchangeKind, key_file};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_three_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kucoin.key");
        fs::write(
            &path,
            "5f3a8b9c1d2e4f6a7b8c9d0e  \n12345678-1234-1234-1234-123456789012\r\nAbc123!@#\n",
        )
        .unwrap();

        let credentials = key_file::read(&path, ExchangeKind::Kucoin.schema()).unwrap();
        assert_eq!(credentials.api_key.as_deref(), Some("5f3a8b9c1d2e4f6a7b8c9d0e"));
        assert_eq!(
            credentials.api_secret.as_deref(),
            Some("12345678-1234-1234-1234-123456789012")
        );
        assert_eq!(credentials.api_passphrase.as_deref(), Some("Abc123!@#"));
        assert_eq!(credentials.api_url, None);
    }

    #[test]
    fn test_read_ignores_passphrase_line_for_coinbase() {
        let credentials = key_file::parse("key\nsecret\nextra", ExchangeKind::Coinbase.schema());
        assert_eq!(credentials.api_key.as_deref(), Some("key"));
        assert_eq!(credentials.api_secret.as_deref(), Some("secret"));
        assert_eq!(credentials.api_passphrase, None);
    }

    #[test]
    fn test_short_file_reads_empty_values() {
        let credentials = key_file::parse("key", ExchangeKind::CoinbasePro.schema());
        assert_eq!(credentials.api_secret.as_deref(), Some(""));
        assert_eq!(credentials.api_passphrase.as_deref(), Some(""));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.key");

        let err = key_file::read(&path, ExchangeKind::Coinbase.schema()).unwrap_err();
        match err {
            ExchangeError::CredentialFileUnreadable { exchange, path: p, .. } => {
                assert_eq!(exchange, ExchangeKind::Coinbase);
                assert!(p.ends_with("absent.key"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("coinbasepro.key");
        let schema = ExchangeKind::CoinbasePro.schema();
        let credentials = Credentials {
            api_key: Some("0123456789abcdef0123456789abcdef".to_string()),
            api_secret: Some("c2VjcmV0==".to_string()),
            api_passphrase: Some("pass1234!".to_string()),
            api_url: Some("https://api.exchange.coinbase.com".to_string()),
        };

        key_file::write(&path, &credentials, schema).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "0123456789abcdef0123456789abcdef\nc2VjcmV0==\npass1234!"
        );

        let read_back = key_file::read(&path, schema).unwrap();
        assert_eq!(read_back.api_passphrase.as_deref(), Some("pass1234!"));
        assert_eq!(read_back.api_url, None);
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("coinbase.key");

        let err = key_file::write(&path, &Credentials::default(), ExchangeKind::Coinbase.schema())
            .unwrap_err();
        assert!(matches!(err, ExchangeError::CredentialFileWrite { .. }));
    }
}
