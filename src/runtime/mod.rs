//! # Runtime Wiring
//!
//! Builds the HTTP clients from one [`ApiConfig`](crate::config::ApiConfig),
//! hands them to the views together with the notifier and navigator, and sets
//! up logging.
//!
//! ```rust,ignore
//! setup_tracing();
//! let config = ApiConfig::from_env()?;
//! let storefront = Storefront::new(&config, Arc::new(TracingNotifier), Arc::new(TracingNavigator))?;
//!
//! let mut catalog = storefront.catalog_view();
//! let products = catalog.activate().resolved().await;
//! ```

pub mod storefront;
pub mod tracing;

pub use self::storefront::*;
pub use self::tracing::*;
