//! Runtime settings read from the environment (and `.env`, once loaded by
//! the binary). CLI flags take precedence over everything here.

use crate::chart::DEFAULT_CURRENCY;
use crate::loader::DEFAULT_SOURCE;

pub const SOURCE_VAR: &str = "FUEL_PRICES_SOURCE";
pub const CURRENCY_VAR: &str = "FUEL_PRICES_CURRENCY";
pub const LOG_FILE_VAR: &str = "LOG_FILE_PATH";

pub const DEFAULT_LOG_FILE: &str = "logs/fuel_prices.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: String,
    pub currency: String,
    pub log_file_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            log_file_path: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup. Unset and empty
    /// values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            source: get(SOURCE_VAR, DEFAULT_SOURCE),
            currency: get(CURRENCY_VAR, DEFAULT_CURRENCY),
            log_file_path: get(LOG_FILE_VAR, DEFAULT_LOG_FILE),
        }
    }
}
