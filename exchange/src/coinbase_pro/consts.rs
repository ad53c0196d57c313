pub const API_URL: &str = "https://api.exchange.coinbase.com";
pub const SANDBOX_API_URL: &str = "https://public.sandbox.pro.coinbase.com";

pub const VALID_URLS: &[&str] = &[
    "https://api.exchange.coinbase.com",
    "https://api.exchange.coinbase.com/",
    "https://public.sandbox.pro.coinbase.com",
    "https://public.sandbox.pro.coinbase.com/",
];

pub const KEY_FILE: &str = "coinbasepro.key";
