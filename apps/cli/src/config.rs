//! # CLI Configuration
//!
//! Where the slots live and how prices and the checkout link are rendered.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     ANGELICA_DATA_DIR=/tmp/shop                                        │
//! │     ANGELICA_CURRENCY_SYMBOL=S/                                        │
//! │     ANGELICA_WHATSAPP_NUMBER=51906005773                               │
//! │                                                                         │
//! │  2. TOML Config File (--config, or the platform default)               │
//! │     ~/.config/angelica-shop/angelica.toml (Linux)                      │
//! │     ~/Library/Application Support/pe.angelica.shop/angelica.toml       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     S/ prices, the shop's WhatsApp number, platform data directory     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # angelica.toml
//! data_dir = "/home/ana/.local/share/angelica-shop"
//! currency_symbol = "S/"
//! currency_decimals = 2
//! whatsapp_number = "51906005773"
//! default_size = "M"
//! ```

use std::path::PathBuf;

use angelica_core::validation::{validate_size, validate_whatsapp_number};
use angelica_core::{Money, DEFAULT_CURRENCY_SYMBOL};
use directories::ProjectDirs;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "angelica.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Directory holding the slot files.
    /// `None` uses the platform data directory.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Currency symbol placed before prices.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Decimal places shown for prices (0 or 2).
    #[serde(default = "default_currency_decimals")]
    pub currency_decimals: u8,

    /// Number that receives checkout messages, digits only with country code.
    #[serde(default = "default_whatsapp_number")]
    pub whatsapp_number: String,

    /// Size used by `wishlist move` when none is given.
    #[serde(default = "default_size")]
    pub default_size: String,
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_currency_decimals() -> u8 {
    2
}

fn default_whatsapp_number() -> String {
    "51906005773".to_string()
}

fn default_size() -> String {
    "M".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_dir: None,
            currency_symbol: default_currency_symbol(),
            currency_decimals: default_currency_decimals(),
            whatsapp_number: default_whatsapp_number(),
            default_size: default_size(),
        }
    }
}

impl AppConfig {
    // =========================================================================
    // Loading
    // =========================================================================

    /// Loads configuration from file and environment.
    ///
    /// A missing file is not an error; an unreadable or invalid one is.
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AppResult<()> {
        validate_whatsapp_number(&self.whatsapp_number)?;
        validate_size(&self.default_size)?;

        if !matches!(self.currency_decimals, 0 | 2) {
            return Err(AppError::config(format!(
                "currency_decimals must be 0 or 2, got: {}",
                self.currency_decimals
            )));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `ANGELICA_*` overrides read through `lookup`.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup("ANGELICA_DATA_DIR") {
            debug!(data_dir = %dir, "Overriding data directory from environment");
            self.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(symbol) = lookup("ANGELICA_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Some(number) = lookup("ANGELICA_WHATSAPP_NUMBER") {
            debug!(number = %number, "Overriding WhatsApp number from environment");
            self.whatsapp_number = number;
        }
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("pe", "angelica", "angelica-shop")
    }

    fn default_config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Directory for slot files: the configured one, else the platform's.
    pub fn resolve_data_dir(&self) -> AppResult<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }

        Self::project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| AppError::config("Could not determine app data directory"))
    }

    /// Formats an amount with the configured symbol and precision.
    ///
    /// ## Example
    /// ```rust
    /// use angelica_cli::config::AppConfig;
    /// use angelica_core::Money;
    ///
    /// let config = AppConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(26970)), "S/ 269.70");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        if self.currency_decimals == 2 {
            return amount.format_with_symbol(&self.currency_symbol);
        }

        // Whole units, half away from zero.
        let cents = amount.cents();
        let whole = (cents.unsigned_abs() + 50) / 100;
        let sign = if cents < 0 && whole != 0 { "-" } else { "" };
        if self.currency_symbol.is_empty() {
            format!("{}{}", sign, whole)
        } else {
            format!("{} {}{}", self.currency_symbol, sign, whole)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.currency_symbol, "S/");
        assert_eq!(config.whatsapp_number, "51906005773");
    }

    #[test]
    fn test_format_currency() {
        let config = AppConfig::default();
        assert_eq!(config.format_currency(Money::from_cents(26970)), "S/ 269.70");
        assert_eq!(config.format_currency(Money::zero()), "S/ 0.00");

        let whole = AppConfig {
            currency_decimals: 0,
            ..AppConfig::default()
        };
        assert_eq!(whole.format_currency(Money::from_cents(26970)), "S/ 270");
        assert_eq!(whole.format_currency(Money::from_cents(26949)), "S/ 269");
        assert_eq!(whole.format_currency(Money::from_cents(-150)), "S/ -2");
        assert_eq!(
            whole.format_currency(Money::from_cents(i64::MAX)),
            "S/ 92233720368547758"
        );
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("ANGELICA_DATA_DIR", "/tmp/angelica"),
            ("ANGELICA_CURRENCY_SYMBOL", "PEN"),
            ("ANGELICA_WHATSAPP_NUMBER", "51999999999"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/angelica")));
        assert_eq!(config.currency_symbol, "PEN");
        assert_eq!(config.whatsapp_number, "51999999999");
        assert_eq!(config.resolve_data_dir().unwrap(), PathBuf::from("/tmp/angelica"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: AppConfig = toml::from_str("currency_symbol = \"USD\"").unwrap();
        assert_eq!(config.currency_symbol, "USD");
        assert_eq!(config.currency_decimals, 2);
        assert_eq!(config.default_size, "M");
        assert_eq!(config.data_dir, None);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = AppConfig {
            whatsapp_number: "+51 906".to_string(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            currency_decimals: 3,
            ..AppConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ConfigError);
    }

    #[test]
    fn test_invalid_file_fails_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "currency_decimals = \"two\"").unwrap();

        let err = AppConfig::load(Some(path)).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ConfigError);
    }
}
