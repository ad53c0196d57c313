pub mod cli;
pub mod config;
pub mod errors;
pub mod merge;
pub mod migration;
pub mod models;
pub mod parser;

pub use errors::{ConfigError, Result};
pub use parser::{ExchangeParser, ParseOutcome};

#[cfg(test)]
mod migration_test;
