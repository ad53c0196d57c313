pub const API_URL: &str = "https://api.kucoin.com";
pub const SANDBOX_API_URL: &str = "https://openapi-sandbox.kucoin.com";

pub const VALID_URLS: &[&str] = &[
    "https://api.kucoin.com/",
    "https://api.kucoin.com",
    "https://openapi-sandbox.kucoin.com/",
    "https://openapi-sandbox.kucoin.com",
];

pub const KEY_FILE: &str = "kucoin.key";

pub const DEFAULT_BASE_CURRENCY: &str = "BTC";
pub const DEFAULT_QUOTE_CURRENCY: &str = "GBP";
