//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Billing defaults applied to new documents.
    #[serde(default)]
    pub billing: BillingConfig,
    /// Document numbering configuration.
    #[serde(default)]
    pub numbering: NumberingConfig,
}

/// Billing defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct BillingConfig {
    /// Currency used when a document does not name one.
    #[serde(default)]
    pub currency: Currency,
    /// Fractional tax rate pre-filled on new documents (0.08 = 8%).
    #[serde(default)]
    pub default_tax_rate: Decimal,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            default_tax_rate: Decimal::ZERO,
        }
    }
}

/// Document ID prefixes per document kind.
#[derive(Debug, Clone, Deserialize)]
pub struct NumberingConfig {
    /// Prefix for quote numbers.
    #[serde(default = "default_quote_prefix")]
    pub quote_prefix: String,
    /// Prefix for invoice numbers.
    #[serde(default = "default_invoice_prefix")]
    pub invoice_prefix: String,
    /// Prefix for contract numbers.
    #[serde(default = "default_contract_prefix")]
    pub contract_prefix: String,
}

fn default_quote_prefix() -> String {
    "Q".to_string()
}

fn default_invoice_prefix() -> String {
    "INV".to_string()
}

fn default_contract_prefix() -> String {
    "CON".to_string()
}

impl Default for NumberingConfig {
    fn default() -> Self {
        Self {
            quote_prefix: default_quote_prefix(),
            invoice_prefix: default_invoice_prefix(),
            contract_prefix: default_contract_prefix(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("OPSDESK").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Checks values the engine relies on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` naming the first offending key.
    pub fn validate(&self) -> AppResult<()> {
        let prefixes = [
            ("numbering.quote_prefix", &self.numbering.quote_prefix),
            ("numbering.invoice_prefix", &self.numbering.invoice_prefix),
            ("numbering.contract_prefix", &self.numbering.contract_prefix),
        ];
        for (key, prefix) in prefixes {
            if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(AppError::Configuration(format!(
                    "{key} must be non-empty ASCII alphanumeric, got {prefix:?}"
                )));
            }
        }

        let rate = self.billing.default_tax_rate;
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(AppError::Configuration(format!(
                "billing.default_tax_rate must be within [0, 1], got {rate}"
            )));
        }

        Ok(())
    }
}
