//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CART_STORAGE_PATH` - Key-value file the cart is saved in (default: `.ecommerce-cart.json`)
//! - `CART_CATALOG_PATH` - JSON or YAML product catalog (default: built-in catalog)
//! - `CART_TAX_RATE` - Tax rate as a decimal fraction (default: 0.08)
//! - `CART_MAX_QUANTITY` - Per-line quantity limit (default: unlimited)
//! - `CART_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! - `RUST_LOG` - Log filter (default: warn)

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::str::FromStr;

use ecommerce_cart_core::{DEFAULT_TAX_RATE, QuantityPolicy};
use rust_decimal::Decimal;
use thiserror::Error;

const DEFAULT_STORAGE_PATH: &str = ".ecommerce-cart.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `pretty` or `json`, got `{other}`")),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// File backing the key-value store
    pub storage_path: PathBuf,
    /// Catalog file, `None` for the built-in catalog
    pub catalog_path: Option<PathBuf>,
    /// Tax rate applied to the subtotal
    pub tax_rate: Decimal,
    /// Per-line quantity policy
    pub quantity_policy: QuantityPolicy,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            catalog_path: None,
            tax_rate: DEFAULT_TAX_RATE,
            quantity_policy: QuantityPolicy::unlimited(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(path) = get("CART_STORAGE_PATH") {
            config.storage_path = PathBuf::from(path);
        }

        config.catalog_path = get("CART_CATALOG_PATH").map(PathBuf::from);

        if let Some(raw) = get("CART_TAX_RATE") {
            config.tax_rate = parse_tax_rate(&raw)?;
        }

        if let Some(raw) = get("CART_MAX_QUANTITY") {
            let max = raw.trim().parse::<NonZeroU32>().map_err(|e| {
                ConfigError::InvalidEnvVar("CART_MAX_QUANTITY".to_string(), e.to_string())
            })?;
            config.quantity_policy = QuantityPolicy::with_max(max);
        }

        if let Some(raw) = get("CART_LOG_FORMAT") {
            config.log_format = raw
                .trim()
                .parse()
                .map_err(|e| ConfigError::InvalidEnvVar("CART_LOG_FORMAT".to_string(), e))?;
        }

        Ok(config)
    }
}

fn parse_tax_rate(raw: &str) -> Result<Decimal, ConfigError> {
    let invalid = |msg: String| ConfigError::InvalidEnvVar("CART_TAX_RATE".to_string(), msg);

    let rate = Decimal::from_str(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(invalid(format!("{rate} is outside 0..=1")));
    }
    Ok(rate)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<CliConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.storage_path, PathBuf::from(".ecommerce-cart.json"));
        assert!(config.catalog_path.is_none());
        assert_eq!(config.tax_rate, Decimal::new(8, 2));
        assert_eq!(config.quantity_policy, QuantityPolicy::unlimited());
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("CART_STORAGE_PATH", "/tmp/cart.json"),
            ("CART_CATALOG_PATH", "catalog.yaml"),
            ("CART_TAX_RATE", "0.0725"),
            ("CART_MAX_QUANTITY", "10"),
            ("CART_LOG_FORMAT", "JSON"),
        ])
        .unwrap();
        assert_eq!(config.storage_path, PathBuf::from("/tmp/cart.json"));
        assert_eq!(config.catalog_path, Some(PathBuf::from("catalog.yaml")));
        assert_eq!(config.tax_rate, Decimal::new(725, 4));
        assert_eq!(
            config.quantity_policy.max_per_line().map(NonZeroU32::get),
            Some(10)
        );
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = load(&[("CART_STORAGE_PATH", "  "), ("CART_TAX_RATE", "")]).unwrap();
        assert_eq!(config.storage_path, PathBuf::from(".ecommerce-cart.json"));
        assert_eq!(config.tax_rate, DEFAULT_TAX_RATE);
    }

    #[test]
    fn test_invalid_tax_rate() {
        assert!(matches!(
            load(&[("CART_TAX_RATE", "eight")]),
            Err(ConfigError::InvalidEnvVar(var, _)) if var == "CART_TAX_RATE"
        ));
        assert!(load(&[("CART_TAX_RATE", "1.5")]).is_err());
        assert!(load(&[("CART_TAX_RATE", "-0.01")]).is_err());
    }

    #[test]
    fn test_invalid_max_quantity() {
        assert!(load(&[("CART_MAX_QUANTITY", "0")]).is_err());
        assert!(load(&[("CART_MAX_QUANTITY", "lots")]).is_err());
    }

    #[test]
    fn test_invalid_log_format() {
        assert!(load(&[("CART_LOG_FORMAT", "xml")]).is_err());
    }
}
