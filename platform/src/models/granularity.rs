use crate::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Granularity {
    #[serde(rename = "1m")]
    OneMinute,
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[default]
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "6h")]
    SixHours,
    #[serde(rename = "1d")]
    OneDay,
}

impl Granularity {
    pub fn to_secs(&self) -> u64 {
        match self {
            Granularity::OneMinute => 60,
            Granularity::FiveMinutes => 5 * 60,
            Granularity::FifteenMinutes => 15 * 60,
            Granularity::ThirtyMinutes => 30 * 60,
            Granularity::OneHour => 60 * 60,
            Granularity::SixHours => 6 * 60 * 60,
            Granularity::OneDay => 24 * 60 * 60,
        }
    }

    pub fn from_secs(secs: u64) -> Option<Self> {
        match secs {
            60 => Some(Granularity::OneMinute),
            300 => Some(Granularity::FiveMinutes),
            900 => Some(Granularity::FifteenMinutes),
            1800 => Some(Granularity::ThirtyMinutes),
            3600 => Some(Granularity::OneHour),
            21600 => Some(Granularity::SixHours),
            86400 => Some(Granularity::OneDay),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::OneMinute => "1m",
            Granularity::FiveMinutes => "5m",
            Granularity::FifteenMinutes => "15m",
            Granularity::ThirtyMinutes => "30m",
            Granularity::OneHour => "1h",
            Granularity::SixHours => "6h",
            Granularity::OneDay => "1d",
        }
    }

    /// Accepts whole seconds as a JSON integer or an all-digit string.
    pub fn from_value(value: &Value) -> Result<Self> {
        let secs = match value {
            Value::Number(n) => n.as_u64(),
            Value::String(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
                s.parse::<u64>().ok()
            }
            _ => None,
        };
        secs.and_then(Granularity::from_secs)
            .ok_or_else(|| ConfigError::InvalidGranularity {
                value: value.to_string(),
            })
    }
}
