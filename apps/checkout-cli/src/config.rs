//! # Pricing Config Loading
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SHOPCART_ORIGIN_CITY=Roissy-en-Brie                                │
//! │     SHOPCART_INTERNATIONAL_CENTS=1500                                  │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/shopcart/pricing.toml (Linux)                            │
//! │     ~/Library/Application Support/com.shopcart.shopcart/pricing.toml   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     empty origin, 1.00 / 2.00 / 15.00 per unit                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};

use shopcart_core::{Money, PricingConfig};
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "pricing.toml";

/// Loads pricing configuration from file, environment, and defaults.
///
/// ## Load Order (later overrides earlier)
/// 1. Default values
/// 2. Config file (pricing.toml)
/// 3. Environment variables
///
/// An explicit `config_path` that does not exist is an error; a missing
/// file at the default location is not.
pub fn load(config_path: Option<&Path>) -> AppResult<PricingConfig> {
    let mut config = match config_path {
        Some(path) => read_file(path)?,
        None => match default_config_path() {
            Some(path) if path.exists() => read_file(&path)?,
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                PricingConfig::default()
            }
            None => PricingConfig::default(),
        },
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    config.validate()?;
    Ok(config)
}

fn read_file(path: &Path) -> AppResult<PricingConfig> {
    info!(?path, "Loading pricing config from file");
    let contents = std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&contents)?)
}

/// Applies `SHOPCART_*` overrides read through `lookup`.
///
/// Numeric values that fail to parse are logged and skipped.
pub fn apply_env_overrides<F>(config: &mut PricingConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(street) = lookup("SHOPCART_ORIGIN_STREET") {
        config.origin.street = street;
    }

    if let Some(city) = lookup("SHOPCART_ORIGIN_CITY") {
        debug!(city = %city, "Overriding origin city from environment");
        config.origin.city = city;
    }

    if let Some(country) = lookup("SHOPCART_ORIGIN_COUNTRY") {
        debug!(country = %country, "Overriding origin country from environment");
        config.origin.country = country;
    }

    let rates = &mut config.rates;
    override_rate(&lookup, "SHOPCART_SAME_CITY_CENTS", &mut rates.same_city);
    override_rate(&lookup, "SHOPCART_SAME_COUNTRY_CENTS", &mut rates.same_country);
    override_rate(&lookup, "SHOPCART_INTERNATIONAL_CENTS", &mut rates.international);
}

fn override_rate<F>(lookup: &F, key: &str, rate: &mut Money)
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return;
    };

    match raw.trim().parse::<i64>() {
        Ok(cents) => {
            debug!(key, cents, "Overriding shipping rate from environment");
            *rate = Money::from_cents(cents);
        }
        Err(_) => warn!(key, value = %raw, "Ignoring non-numeric rate in environment"),
    }
}

/// Returns the default config file path.
fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "shopcart", "shopcart")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
