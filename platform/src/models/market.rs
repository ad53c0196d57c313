use crate::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

const MAX_BASE_LEN: usize = 20;
const MIN_QUOTE_LEN: usize = 2;
const MAX_QUOTE_LEN: usize = 5;
const MAX_CURRENCY_LEN: usize = 20;

/// A validated `BASE-QUOTE` market code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MarketSpec {
    pub market: String,
    pub base_currency: String,
    pub quote_currency: String,
}

impl MarketSpec {
    pub fn from_pair(base_currency: &str, quote_currency: &str) -> Result<Self> {
        parse_market(&format!("{}-{}", base_currency, quote_currency))
    }
}

impl fmt::Display for MarketSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.market)
    }
}

fn is_base_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_uppercase()
}

// The quote side never contains a zero digit.
fn is_quote_char(c: char) -> bool {
    matches!(c, '1'..='9') || c.is_ascii_uppercase()
}

/// `^[0-9A-Z]{1,20}-[1-9A-Z]{2,5}$`
pub fn is_market_valid(market: &str) -> bool {
    let Some((base, quote)) = market.split_once('-') else {
        return false;
    };
    let base_len = base.chars().count();
    let quote_len = quote.chars().count();
    (1..=MAX_BASE_LEN).contains(&base_len)
        && base.chars().all(is_base_char)
        && (MIN_QUOTE_LEN..=MAX_QUOTE_LEN).contains(&quote_len)
        && quote.chars().all(is_quote_char)
}

pub fn parse_market(market: &str) -> Result<MarketSpec> {
    if !is_market_valid(market) {
        return Err(ConfigError::InvalidMarket {
            market: market.to_string(),
        });
    }
    match market.split_once('-') {
        Some((base, quote)) => Ok(MarketSpec {
            market: market.to_string(),
            base_currency: base.to_string(),
            quote_currency: quote.to_string(),
        }),
        None => Err(ConfigError::InvalidMarket {
            market: market.to_string(),
        }),
    }
}

/// `^[0-9A-Z]{1,20}$`
pub fn is_currency_valid(currency: &str) -> bool {
    let len = currency.chars().count();
    (1..=MAX_CURRENCY_LEN).contains(&len) && currency.chars().all(is_base_char)
}
