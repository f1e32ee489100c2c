//! # Configuration
//!
//! Endpoint base URLs and API keys are per-environment values. They are loaded
//! once into an [`ApiConfig`] and handed to each client at construction time.
//!
//! ```bash
//! STOREFRONT_PRODUCTS_API_KEY=products-api-key-123 \
//! STOREFRONT_INVENTORY_API_KEY=inventory-api-key-123 \
//! RUST_LOG=info cargo run
//! ```
//!
//! A `.env` file in the working directory is honoured as well.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

pub const PRODUCTS_URL_VAR: &str = "STOREFRONT_PRODUCTS_URL";
pub const INVENTORY_URL_VAR: &str = "STOREFRONT_INVENTORY_URL";
pub const PURCHASE_URL_VAR: &str = "STOREFRONT_PURCHASE_URL";
pub const PRODUCTS_API_KEY_VAR: &str = "STOREFRONT_PRODUCTS_API_KEY";
pub const INVENTORY_API_KEY_VAR: &str = "STOREFRONT_INVENTORY_API_KEY";
pub const TIMEOUT_SECS_VAR: &str = "STOREFRONT_TIMEOUT_SECS";

const DEFAULT_PRODUCTS_URL: &str = "http://localhost:8080/products";
const DEFAULT_INVENTORY_URL: &str = "http://localhost:8081/inventory";
const DEFAULT_PURCHASE_URL: &str = "http://localhost:8081/purchase";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors raised while assembling an [`ApiConfig`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing environment variable '{0}'")]
    Missing(&'static str),

    #[error("Invalid value for '{name}': {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Base URLs and API keys for the three backend endpoints.
///
/// The purchase endpoint is authenticated with the inventory key; there is no
/// dedicated purchase key.
#[derive(Clone, PartialEq)]
pub struct ApiConfig {
    pub products_url: String,
    pub inventory_url: String,
    pub purchase_url: String,
    pub products_api_key: String,
    pub inventory_api_key: String,
    pub request_timeout: Duration,
}

impl ApiConfig {
    /// Builds a config from explicit values. Trailing slashes on URLs are dropped.
    pub fn new(
        products_url: impl Into<String>,
        inventory_url: impl Into<String>,
        purchase_url: impl Into<String>,
        products_api_key: impl Into<String>,
        inventory_api_key: impl Into<String>,
    ) -> Self {
        Self {
            products_url: normalize_url(products_url.into()),
            inventory_url: normalize_url(inventory_url.into()),
            purchase_url: normalize_url(purchase_url.into()),
            products_api_key: products_api_key.into(),
            inventory_api_key: inventory_api_key.into(),
            request_timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Config for a single host serving `/products`, `/inventory` and `/purchase`.
    pub fn local(
        base_url: &str,
        products_api_key: impl Into<String>,
        inventory_api_key: impl Into<String>,
    ) -> Self {
        let base = base_url.trim_end_matches('/');
        Self::new(
            format!("{base}/products"),
            format!("{base}/inventory"),
            format!("{base}/purchase"),
            products_api_key,
            inventory_api_key,
        )
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Loads the config from the process environment (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let config = Self::from_lookup(|name| std::env::var(name).ok())?;
        tracing::info!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Loads the config through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &'static str| lookup(name).filter(|v| !v.trim().is_empty());
        let require = |name: &'static str| get(name).ok_or(ConfigError::Missing(name));

        let request_timeout = match get(TIMEOUT_SECS_VAR) {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                    name: TIMEOUT_SECS_VAR,
                    reason: e.to_string(),
                })?;
                if secs == 0 {
                    return Err(ConfigError::Invalid {
                        name: TIMEOUT_SECS_VAR,
                        reason: "timeout must be positive".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };

        let config = Self::new(
            get(PRODUCTS_URL_VAR).unwrap_or_else(|| DEFAULT_PRODUCTS_URL.to_string()),
            get(INVENTORY_URL_VAR).unwrap_or_else(|| DEFAULT_INVENTORY_URL.to_string()),
            get(PURCHASE_URL_VAR).unwrap_or_else(|| DEFAULT_PURCHASE_URL.to_string()),
            require(PRODUCTS_API_KEY_VAR)?,
            require(INVENTORY_API_KEY_VAR)?,
        );

        for (name, url) in [
            (PRODUCTS_URL_VAR, &config.products_url),
            (INVENTORY_URL_VAR, &config.inventory_url),
            (PURCHASE_URL_VAR, &config.purchase_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Invalid {
                    name,
                    reason: format!("'{url}' is not an http(s) URL"),
                });
            }
        }

        Ok(config.with_timeout(request_timeout))
    }
}

// Keys never reach the logs.
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("products_url", &self.products_url)
            .field("inventory_url", &self.inventory_url)
            .field("purchase_url", &self.purchase_url)
            .field("products_api_key", &"[REDACTED]")
            .field("inventory_api_key", &"[REDACTED]")
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

fn normalize_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}
