pub const API_URL: &str = "https://api.coinbase.com";

pub const VALID_URLS: &[&str] = &["https://api.coinbase.com/", "https://api.coinbase.com"];

pub const KEY_FILE: &str = "coinbase.key";
