use crate::errors::{ConfigError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// Strategy and display switches handed straight through to the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RuntimeOptions {
    pub live: Option<bool>,
    pub debug: Option<bool>,
    pub test: Option<bool>,
    pub dry_run: Option<bool>,
    pub verbose: Option<bool>,
    pub silent: Option<bool>,
    pub graphs: Option<bool>,
    pub websocket: Option<bool>,
    pub autorestart: Option<bool>,
    pub disablelog: Option<bool>,
    pub disabletelegram: Option<bool>,
    pub sellatloss: Option<bool>,
    pub smart_switch: Option<bool>,
    pub enableml: Option<bool>,
    pub manual_trades_only: Option<bool>,
    pub hide_balance: Option<bool>,
    pub hide_value: Option<bool>,
    pub hide_net_worth: Option<bool>,
    pub hide_roi: Option<bool>,
    pub hide_table: Option<bool>,
    pub no_header: Option<bool>,
    pub no_table: Option<bool>,
    pub export: Option<bool>,
    pub plot: Option<bool>,
    pub historical: Option<bool>,

    pub rsi_periods: Option<i64>,
    pub rsi_upper: Option<i64>,
    pub rsi_lower: Option<i64>,
    pub recv_window: Option<i64>,
    pub adjust_total_periods: Option<i64>,

    pub start_balance: Option<Decimal>,
    pub fees: Option<Decimal>,
    pub buymaxsize: Option<Decimal>,
    pub buyminsize: Option<Decimal>,
    pub sellupperpcnt: Option<Decimal>,
    pub selllowerpcnt: Option<Decimal>,
    pub trailingstoploss: Option<Decimal>,
    pub trailingstoplosstrigger: Option<Decimal>,

    pub sim: Option<String>,
    pub simstartdate: Option<String>,
    pub simenddate: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub timeframe: Option<String>,
    pub export_filename: Option<String>,
    pub plot_filename: Option<String>,
    pub logfile: Option<String>,
    pub lastaction: Option<String>,
}

impl RuntimeOptions {
    /// Assigns a recognised option. Returns `Ok(false)` for unknown keys.
    pub fn assign(&mut self, key: &str, value: &Value) -> Result<bool> {
        match key {
            "live" => self.live = Some(to_bool(key, value)?),
            "debug" => self.debug = Some(to_bool(key, value)?),
            "test" => self.test = Some(to_bool(key, value)?),
            "dry_run" => self.dry_run = Some(to_bool(key, value)?),
            "verbose" => self.verbose = Some(to_bool(key, value)?),
            "silent" => self.silent = Some(to_bool(key, value)?),
            "graphs" => self.graphs = Some(to_bool(key, value)?),
            "websocket" => self.websocket = Some(to_bool(key, value)?),
            "autorestart" => self.autorestart = Some(to_bool(key, value)?),
            "disablelog" => self.disablelog = Some(to_bool(key, value)?),
            "disabletelegram" => self.disabletelegram = Some(to_bool(key, value)?),
            "sellatloss" => self.sellatloss = Some(to_bool(key, value)?),
            "smart_switch" => self.smart_switch = Some(to_bool(key, value)?),
            "enableml" => self.enableml = Some(to_bool(key, value)?),
            "manual_trades_only" => self.manual_trades_only = Some(to_bool(key, value)?),
            "hide_balance" => self.hide_balance = Some(to_bool(key, value)?),
            "hide_value" => self.hide_value = Some(to_bool(key, value)?),
            "hide_net_worth" => self.hide_net_worth = Some(to_bool(key, value)?),
            "hide_roi" => self.hide_roi = Some(to_bool(key, value)?),
            "hide_table" => self.hide_table = Some(to_bool(key, value)?),
            "no_header" => self.no_header = Some(to_bool(key, value)?),
            "no_table" => self.no_table = Some(to_bool(key, value)?),
            "export" => self.export = Some(to_bool(key, value)?),
            "plot" => self.plot = Some(to_bool(key, value)?),
            "historical" => self.historical = Some(to_bool(key, value)?),

            "rsi_periods" => self.rsi_periods = Some(to_int(key, value)?),
            "rsi_upper" => self.rsi_upper = Some(to_int(key, value)?),
            "rsi_lower" => self.rsi_lower = Some(to_int(key, value)?),
            "recv_window" => self.recv_window = Some(to_int(key, value)?),
            "adjust_total_periods" => self.adjust_total_periods = Some(to_int(key, value)?),

            "start_balance" => self.start_balance = Some(to_decimal(key, value)?),
            "fees" => self.fees = Some(to_decimal(key, value)?),
            "buymaxsize" => self.buymaxsize = Some(to_decimal(key, value)?),
            "buyminsize" => self.buyminsize = Some(to_decimal(key, value)?),
            "sellupperpcnt" => self.sellupperpcnt = Some(to_decimal(key, value)?),
            "selllowerpcnt" => self.selllowerpcnt = Some(to_decimal(key, value)?),
            "trailingstoploss" => self.trailingstoploss = Some(to_decimal(key, value)?),
            "trailingstoplosstrigger" => {
                self.trailingstoplosstrigger = Some(to_decimal(key, value)?)
            }

            "sim" => self.sim = Some(to_text(key, value)?),
            "simstartdate" => self.simstartdate = Some(to_text(key, value)?),
            "simenddate" => self.simenddate = Some(to_text(key, value)?),
            "start_date" => self.start_date = Some(to_text(key, value)?),
            "end_date" => self.end_date = Some(to_text(key, value)?),
            "timeframe" => self.timeframe = Some(to_text(key, value)?),
            "export_filename" => self.export_filename = Some(to_text(key, value)?),
            "plot_filename" => self.plot_filename = Some(to_text(key, value)?),
            "logfile" => self.logfile = Some(to_text(key, value)?),
            "lastaction" => self.lastaction = Some(to_text(key, value)?),

            _ => return Ok(false),
        }
        Ok(true)
    }
}

fn invalid(key: &str, expected: &str, value: &Value) -> ConfigError {
    ConfigError::InvalidOption {
        key: key.to_string(),
        message: format!("expected {}, got {}", expected, value),
    }
}

/// Flags come from JSON booleans, the 0/1 integers older config files use,
/// or their string spellings.
pub fn to_bool(key: &str, value: &Value) -> Result<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        Value::Number(n) => match n.as_u64() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(invalid(key, "a boolean", value)),
        },
        Value::String(s) => match s.as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(invalid(key, "a boolean", value)),
        },
        _ => Err(invalid(key, "a boolean", value)),
    }
}

pub fn to_int(key: &str, value: &Value) -> Result<i64> {
    match value {
        Value::Number(n) => n.as_i64().ok_or_else(|| invalid(key, "an integer", value)),
        Value::String(s) => s.parse::<i64>().map_err(|_| invalid(key, "an integer", value)),
        _ => Err(invalid(key, "an integer", value)),
    }
}

pub fn to_decimal(key: &str, value: &Value) -> Result<Decimal> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        _ => return Err(invalid(key, "a number", value)),
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| invalid(key, "a number", value))
}

pub fn to_text(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        _ => Err(invalid(key, "a string", value)),
    }
}
