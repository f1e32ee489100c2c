//! The seams between views and the backend.
//!
//! Views depend on these traits, not on the HTTP clients, so tests can swap in
//! [`MockApi`](crate::framework::mock::MockApi).

use crate::clients::ApiError;
use crate::model::{InventoryRecord, Product, PurchaseResponse};
use async_trait::async_trait;

/// Read access to the product catalog.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// All products, in the order the server returns them.
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// A single product. A 404 is passed through as [`ApiError::NotFound`].
    async fn get_product(&self, id: i64) -> Result<Product, ApiError>;
}

/// Read access to live stock.
#[async_trait]
pub trait InventoryApi: Send + Sync {
    async fn get_inventory(&self, product_id: i64) -> Result<InventoryRecord, ApiError>;
}

/// Purchase submission.
#[async_trait]
pub trait PurchaseApi: Send + Sync {
    async fn purchase(&self, product_id: i64, quantity: u32) -> Result<PurchaseResponse, ApiError>;

    /// Purchase with the client-side default quantity.
    async fn purchase_one(&self, product_id: i64) -> Result<PurchaseResponse, ApiError> {
        self.purchase(product_id, crate::model::DEFAULT_PURCHASE_QUANTITY)
            .await
    }
}
