//! HTTP clients for the catalog, inventory and purchase endpoints.
//!
//! Each client is a thin wrapper that knows its base URL and API key; the
//! request plumbing lives in [`ApiClient`]. Views only see the traits in
//! [`traits`].

pub mod api_client;
pub mod catalog_client;
pub mod error;
pub mod inventory_client;
pub mod purchase_client;
pub mod traits;

pub use api_client::*;
pub use catalog_client::*;
pub use error::*;
pub use inventory_client::*;
pub use purchase_client::*;
pub use traits::*;
