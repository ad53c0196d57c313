use crate::{coinbase, coinbase_pro, kucoin, schema::CredentialSchema};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ExchangeKind {
    #[serde(rename = "coinbase")]
    Coinbase,
    #[serde(rename = "coinbasepro")]
    CoinbasePro,
    #[serde(rename = "kucoin")]
    Kucoin,
}

impl ExchangeKind {
    pub const ALL: [ExchangeKind; 3] = [
        ExchangeKind::Coinbase,
        ExchangeKind::CoinbasePro,
        ExchangeKind::Kucoin,
    ];

    /// Section key in the persisted config document.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExchangeKind::Coinbase => "coinbase",
            ExchangeKind::CoinbasePro => "coinbasepro",
            ExchangeKind::Kucoin => "kucoin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "coinbase" => Some(ExchangeKind::Coinbase),
            "coinbasepro" => Some(ExchangeKind::CoinbasePro),
            "kucoin" => Some(ExchangeKind::Kucoin),
            _ => None,
        }
    }

    pub fn schema(&self) -> &'static CredentialSchema {
        match self {
            ExchangeKind::Coinbase => &coinbase::SCHEMA,
            ExchangeKind::CoinbasePro => &coinbase_pro::SCHEMA,
            ExchangeKind::Kucoin => &kucoin::SCHEMA,
        }
    }
}

impl fmt::Display for ExchangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExchangeKind::Coinbase => "Coinbase",
            ExchangeKind::CoinbasePro => "Coinbase Pro",
            ExchangeKind::Kucoin => "Kucoin",
        };
        f.write_str(name)
    }
}
