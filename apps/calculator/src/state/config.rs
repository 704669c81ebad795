//! # Configuration State
//!
//! Stores calculator configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`QUOTE_*`)
//! 2. Price table file (TOML, path from `QUOTE_PRICE_TABLE`)
//! 3. Defaults (this file and `PriceTable::default()`)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.
//!
//! ## Price Table File
//! ```toml
//! currency_symbol = "€"
//!
//! [prices]
//! unit_product = "0.50"
//! unit_order = "0.50"
//! accounting_fee = "10"
//! terminal_fee = "10"
//!
//! [prices.packages]
//! basic = "10"
//! professional = "20"
//! premium = "30"
//! ```
//! Prices are decimal strings so they never pass through a float.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use quote_core::{CoreError, Money, PackageTier, PriceTable};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Environment variable naming a TOML price table file.
pub const PRICE_TABLE_ENV: &str = "QUOTE_PRICE_TABLE";

/// Environment variable overriding the currency symbol.
pub const CURRENCY_SYMBOL_ENV: &str = "QUOTE_CURRENCY_SYMBOL";

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid price table: {0}")]
    Core(#[from] CoreError),
}

/// Calculator configuration.
///
/// Only built through `from_env`, `from_file` or `from_toml_str`, never
/// deserialized directly.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Prices used for every session
    pub price_table: PriceTable,
}

impl Default for ConfigState {
    /// Default configuration: `$` and the standard price table.
    fn default() -> Self {
        ConfigState {
            currency_symbol: "$".to_string(),
            price_table: PriceTable::default(),
        }
    }
}

// On-disk shape. Every entry is optional and falls back to the default table.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    currency_symbol: Option<String>,
    #[serde(default)]
    prices: PricesFile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PricesFile {
    unit_product: Option<String>,
    unit_order: Option<String>,
    accounting_fee: Option<String>,
    terminal_fee: Option<String>,
    packages: Option<BTreeMap<String, String>>,
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `QUOTE_PRICE_TABLE`: path to a TOML price table
    /// - `QUOTE_CURRENCY_SYMBOL`: override the currency symbol
    ///
    /// A broken price table file is logged and the defaults are kept, so a
    /// bad deploy still shows a working calculator.
    pub fn from_env() -> Self {
        let mut config = match std::env::var(PRICE_TABLE_ENV) {
            Ok(path) => ConfigState::from_file(&path).unwrap_or_else(|err| {
                warn!(%path, error = %err, "Ignoring price table file, using defaults");
                ConfigState::default()
            }),
            Err(_) => ConfigState::default(),
        };

        if let Ok(symbol) = std::env::var(CURRENCY_SYMBOL_ENV) {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        ConfigState::from_toml_str(&text)
    }

    /// Parses configuration from TOML text.
    ///
    /// Missing entries keep their default value. A `[prices.packages]` table,
    /// when present, replaces the default packages entirely.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(text)?;
        let defaults = PriceTable::default();
        let prices = file.prices;

        let packages = match prices.packages {
            Some(entries) => parse_packages(&entries)?,
            None => defaults.packages,
        };

        let price_table = PriceTable::new(
            parse_price(prices.unit_product, defaults.unit_product)?,
            parse_price(prices.unit_order, defaults.unit_order)?,
            packages,
            parse_price(prices.accounting_fee, defaults.accounting_fee)?,
            parse_price(prices.terminal_fee, defaults.terminal_fee)?,
        )?;

        Ok(ConfigState {
            currency_symbol: file.currency_symbol.unwrap_or_else(|| "$".to_string()),
            price_table,
        })
    }

    /// Formats an amount with the configured symbol and two decimals.
    ///
    /// ## Example
    /// ```rust
    /// use quote_calculator::state::ConfigState;
    /// use quote_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(2300)), "$23.00");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let cents = amount.cents();
        format!(
            "{}{}{}.{:02}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            amount.dollars().abs(),
            amount.cents_part()
        )
    }
}

fn parse_price(text: Option<String>, default: Money) -> Result<Money, CoreError> {
    match text {
        Some(text) => Ok(Money::parse_decimal(&text)?),
        None => Ok(default),
    }
}

fn parse_packages(
    entries: &BTreeMap<String, String>,
) -> Result<BTreeMap<PackageTier, Money>, CoreError> {
    entries
        .iter()
        .map(|(key, price)| -> Result<(PackageTier, Money), CoreError> {
            let tier = key
                .parse::<PackageTier>()
                .map_err(|_| CoreError::UnknownPackageTier(key.clone()))?;
            Ok((tier, Money::parse_decimal(price)?))
        })
        .collect()
}
