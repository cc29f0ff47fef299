//! Runtime configuration from environment variables.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `STOREFRONT_TAX_RATE` | `0.08` |
//! | `STOREFRONT_CUSTOMER_ID` | `CUST001` |
//! | `STOREFRONT_CATALOG` | unset (built-in sample products) |
//! | `STOREFRONT_LOG_FORMAT` | `json` (`json` or `compact`) |
//!
//! `RUST_LOG` controls the log filter (default `warn`).

use std::path::PathBuf;

use thiserror::Error;

use storefront_core::{CustomerId, DomainError, TaxRate};
use storefront_observability::{LogConfig, LogFormat};

pub const TAX_RATE_VAR: &str = "STOREFRONT_TAX_RATE";
pub const CUSTOMER_ID_VAR: &str = "STOREFRONT_CUSTOMER_ID";
pub const CATALOG_VAR: &str = "STOREFRONT_CATALOG";
pub const LOG_FORMAT_VAR: &str = "STOREFRONT_LOG_FORMAT";

const DEFAULT_TAX_BASIS_POINTS: u32 = 800;
const DEFAULT_CUSTOMER_ID: &str = "CUST001";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}: {source}")]
    Invalid {
        var: &'static str,
        #[source]
        source: DomainError,
    },

    #[error("{var}: unknown log format '{value}' (expected 'json' or 'compact')")]
    LogFormat { var: &'static str, value: String },
}

/// Application configuration, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub tax_rate: TaxRate,
    pub customer_id: CustomerId,
    pub catalog_path: Option<PathBuf>,
    pub log: LogConfig,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value
    /// if set. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let tax_rate = match get(TAX_RATE_VAR) {
            Some(raw) => raw.parse().map_err(|source| ConfigError::Invalid {
                var: TAX_RATE_VAR,
                source,
            })?,
            None => TaxRate::from_basis_points(DEFAULT_TAX_BASIS_POINTS).map_err(|source| {
                ConfigError::Invalid {
                    var: TAX_RATE_VAR,
                    source,
                }
            })?,
        };

        let customer_id = CustomerId::new(
            get(CUSTOMER_ID_VAR).unwrap_or_else(|| DEFAULT_CUSTOMER_ID.to_string()),
        )
        .map_err(|source| ConfigError::Invalid {
            var: CUSTOMER_ID_VAR,
            source,
        })?;

        let format = match get(LOG_FORMAT_VAR).map(|v| v.trim().to_ascii_lowercase()) {
            None => LogFormat::Json,
            Some(v) if v == "json" => LogFormat::Json,
            Some(v) if v == "compact" => LogFormat::Compact,
            Some(value) => {
                return Err(ConfigError::LogFormat {
                    var: LOG_FORMAT_VAR,
                    value,
                });
            }
        };

        Ok(Self {
            tax_rate,
            customer_id,
            catalog_path: get(CATALOG_VAR).map(PathBuf::from),
            log: LogConfig {
                format,
                ..LogConfig::default()
            },
        })
    }
}
